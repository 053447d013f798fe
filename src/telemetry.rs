use std::cmp::Ordering;
use std::sync::OnceLock;

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const LOG_LEVEL_ENV: Option<&str> = option_env!("PORTFOLIO_LOG_LEVEL");

static MIN_LEVEL: OnceLock<LogLevel> = OnceLock::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Error => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// Trimmed, non-empty view of an optional configuration value.
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn parse_log_level(value: Option<&str>, default: LogLevel) -> LogLevel {
    match non_empty(value)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        "error" => LogLevel::Error,
        _ => default,
    }
}

fn min_level() -> LogLevel {
    *MIN_LEVEL.get_or_init(|| parse_log_level(LOG_LEVEL_ENV, DEFAULT_LOG_LEVEL))
}

fn now_unix_millis() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|value| value.as_millis() as u64)
            .unwrap_or(0)
    }
}

fn event_line(level: LogLevel, event: &str, fields: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_millis())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    serde_json::Value::Object(payload)
}

fn should_log(level: LogLevel, min: LogLevel) -> bool {
    level >= min
}

pub fn log_event(level: LogLevel, event: &str, fields: serde_json::Value) {
    if !should_log(level, min_level()) {
        return;
    }

    let line = event_line(level, event, fields).to_string();

    #[cfg(target_arch = "wasm32")]
    {
        let line = wasm_bindgen::JsValue::from_str(&line);
        match level {
            LogLevel::Error => web_sys::console::error_1(&line),
            LogLevel::Debug => web_sys::console::debug_1(&line),
            LogLevel::Info => web_sys::console::log_1(&line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match level {
            LogLevel::Error => eprintln!("{line}"),
            LogLevel::Debug | LogLevel::Info => println!("{line}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn levels_order_from_debug_to_error() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Error);
    }

    #[test]
    fn events_below_minimum_level_are_dropped() {
        assert!(!should_log(LogLevel::Debug, LogLevel::Info));
        assert!(should_log(LogLevel::Info, LogLevel::Info));
        assert!(should_log(LogLevel::Error, LogLevel::Info));
        assert!(!should_log(LogLevel::Info, LogLevel::Error));
        assert!(should_log(LogLevel::Debug, LogLevel::Debug));
    }

    #[test]
    fn log_level_parsing_falls_back_to_default() {
        assert_eq!(parse_log_level(Some(" DEBUG "), LogLevel::Info), LogLevel::Debug);
        assert_eq!(parse_log_level(Some("error"), LogLevel::Info), LogLevel::Error);
        assert_eq!(parse_log_level(Some("verbose"), LogLevel::Info), LogLevel::Info);
        assert_eq!(parse_log_level(Some("   "), LogLevel::Error), LogLevel::Error);
        assert_eq!(parse_log_level(None, LogLevel::Info), LogLevel::Info);
    }

    #[test]
    fn event_line_merges_fields_after_envelope() {
        let line = event_line(LogLevel::Info, "theme_toggled", json!({ "theme": "dark" }));

        assert_eq!(line["level"], "info");
        assert_eq!(line["event"], "theme_toggled");
        assert_eq!(line["theme"], "dark");
        assert!(line["ts"].is_u64());
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let line = event_line(LogLevel::Error, "contact_submit_failed", json!("oops"));
        let object = line.as_object().expect("object payload");

        assert_eq!(object.len(), 3);
    }
}
