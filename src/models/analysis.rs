use serde::{Deserialize, Serialize};

use super::null_as_default;

/// AI assessment of a sprint. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub release_readiness: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub guidelines: Vec<String>,
}

impl AnalysisResult {
    pub fn risk(&self) -> RiskLevel {
        RiskLevel::parse(self.risk_level.as_deref())
    }

    pub fn is_release_ready(&self) -> bool {
        self.release_readiness.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    /// A level the dashboard has no marker for, kept verbatim.
    Other(String),
    Unknown,
}

impl RiskLevel {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => RiskLevel::Unknown,
            Some(s) => match s.to_lowercase().as_str() {
                "low" => RiskLevel::Low,
                "medium" => RiskLevel::Medium,
                "high" => RiskLevel::High,
                _ => RiskLevel::Other(s.to_string()),
            },
        }
    }

    pub fn label(&self) -> String {
        match self {
            RiskLevel::Low => "LOW".into(),
            RiskLevel::Medium => "MEDIUM".into(),
            RiskLevel::High => "HIGH".into(),
            RiskLevel::Other(s) => s.to_uppercase(),
            RiskLevel::Unknown => "UNKNOWN".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_payload() {
        let a: AnalysisResult = serde_json::from_value(json!({
            "impact": "Moderate slip",
            "riskLevel": "high",
            "releaseReadiness": true,
            "recommendations": ["Cut scope"],
            "guidelines": ["Daily triage"]
        }))
        .unwrap();
        assert_eq!(a.risk(), RiskLevel::High);
        assert!(a.is_release_ready());
        assert_eq!(a.recommendations, vec!["Cut scope"]);
    }

    #[test]
    fn test_empty_payload_defaults() {
        let a: AnalysisResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(a.risk(), RiskLevel::Unknown);
        assert!(!a.is_release_ready());
        assert!(a.recommendations.is_empty());
        assert!(a.impact.is_none());
    }

    #[test]
    fn test_explicit_nulls_are_tolerated() {
        let a: AnalysisResult = serde_json::from_value(json!({
            "impact": "x",
            "riskLevel": null,
            "releaseReadiness": null,
            "recommendations": null,
            "guidelines": null
        }))
        .unwrap();
        assert_eq!(a.impact.as_deref(), Some("x"));
        assert_eq!(a.risk(), RiskLevel::Unknown);
        assert!(a.recommendations.is_empty());
        assert!(a.guidelines.is_empty());
    }

    #[test]
    fn test_unrecognized_risk_level_is_kept() {
        let level = RiskLevel::parse(Some("critical"));
        assert_eq!(level, RiskLevel::Other("critical".into()));
        assert_eq!(level.label(), "CRITICAL");
    }

    #[test]
    fn test_risk_level_is_case_insensitive() {
        assert_eq!(RiskLevel::parse(Some("Medium")), RiskLevel::Medium);
        assert_eq!(RiskLevel::parse(Some("  ")), RiskLevel::Unknown);
    }
}
