use std::io::{self, Write};

use console::style;

use crate::api::{ApiClient, Transport};
use crate::ui::icons::{CHECK, CROSS};

#[derive(Debug, Clone, PartialEq)]
pub enum HealthView {
    Connected,
    Disconnected(String),
}

pub async fn load<T: Transport>(api: &ApiClient<T>) -> HealthView {
    let env = api.health_check().await;
    if !env.success {
        return HealthView::Disconnected(env.error_message().to_string());
    }
    match env.data {
        Some(status) if status.is_healthy() => HealthView::Connected,
        Some(status) => HealthView::Disconnected(format!("backend reports status '{}'", status.status)),
        None => HealthView::Disconnected("empty health response".to_string()),
    }
}

impl HealthView {
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            HealthView::Connected => {
                writeln!(out, "{}{}", CHECK, style("Backend Connected").green())
            }
            HealthView::Disconnected(error) => {
                writeln!(out, "{}{}", CROSS, style("Backend Disconnected").red())?;
                writeln!(out, "   Error: {}", error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::RecordingTransport;
    use serde_json::json;

    fn render(view: &HealthView) -> String {
        let mut buf = Vec::new();
        view.render(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[tokio::test]
    async fn test_healthy_backend() {
        let api = ApiClient::new(
            RecordingTransport::new().respond("PROBE /health", json!({"status": "healthy"})),
        );
        let view = load(&api).await;
        assert_eq!(view, HealthView::Connected);
        assert!(render(&view).contains("Backend Connected"));
    }

    #[tokio::test]
    async fn test_unhealthy_status_value() {
        let api = ApiClient::new(
            RecordingTransport::new().respond("PROBE /health", json!({"status": "degraded"})),
        );
        let view = load(&api).await;
        assert!(matches!(view, HealthView::Disconnected(ref e) if e.contains("degraded")));
    }

    #[tokio::test]
    async fn test_unreachable_backend_shows_error() {
        let api = ApiClient::new(RecordingTransport::new());
        let view = load(&api).await;
        let text = render(&view);
        assert!(text.contains("Backend Disconnected"));
        assert!(text.contains("no probe response configured"));
    }
}
