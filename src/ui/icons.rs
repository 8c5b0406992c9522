//! Shared UI icons and emojis.
//!
//! Each icon carries an ASCII fallback for terminals without emoji support.

use console::Emoji;

// Status indicators
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "[ERR] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[WARN] ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[INFO] ");

// Work item states
pub static STATE_NEW: Emoji<'_, '_> = Emoji("🆕", "[NEW]");
pub static STATE_ACTIVE: Emoji<'_, '_> = Emoji("🔄", "[>]");
pub static STATE_DONE: Emoji<'_, '_> = Emoji("✅", "[x]");
pub static STATE_REMOVED: Emoji<'_, '_> = Emoji("❌", "[-]");
pub static STATE_OTHER: Emoji<'_, '_> = Emoji("📋", "[ ]");

// Risk levels
pub static RISK_LOW: Emoji<'_, '_> = Emoji("🟢", "(low)");
pub static RISK_MEDIUM: Emoji<'_, '_> = Emoji("🟡", "(med)");
pub static RISK_HIGH: Emoji<'_, '_> = Emoji("🔴", "(high)");
pub static RISK_OTHER: Emoji<'_, '_> = Emoji("⚪", "(?)");

// Section headers
pub static CHART: Emoji<'_, '_> = Emoji("📊 ", "");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");
pub static BULB: Emoji<'_, '_> = Emoji("💡 ", "");
pub static CLIPBOARD: Emoji<'_, '_> = Emoji("📋 ", "");
pub static WRENCH: Emoji<'_, '_> = Emoji("🔧 ", "");
