use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Console level a forwarded message was emitted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Log,
    Warn,
    Error,
}

impl LogLevel {
    /// Wire name of the level.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Log => "log",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single forwarded console message.
///
/// Built fresh for every intercepted call and serialized immediately;
/// nothing mutates an event after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub level: LogLevel,
    pub message: String,
    /// ISO-8601 UTC wall-clock time at the instant of capture.
    pub timestamp: String,
}

impl LogEvent {
    /// Creates an event stamped with the current wall-clock time.
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_wire_names() {
        assert_eq!(
            serde_json::to_string(&LogLevel::Log).unwrap(),
            "\"log\""
        );
        assert_eq!(
            serde_json::to_string(&LogLevel::Warn).unwrap(),
            "\"warn\""
        );
        assert_eq!(
            serde_json::to_string(&LogLevel::Error).unwrap(),
            "\"error\""
        );
    }

    #[test]
    fn event_roundtrip() {
        let event = LogEvent {
            level: LogLevel::Warn,
            message: "disk almost full".into(),
            timestamp: "2025-03-01T12:00:00.000Z".into(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let parsed: LogEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, parsed);
    }

    #[test]
    fn event_wire_shape() {
        let event = LogEvent {
            level: LogLevel::Error,
            message: "boom".into(),
            timestamp: "2025-03-01T12:00:00.000Z".into(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "level": "error",
                "message": "boom",
                "timestamp": "2025-03-01T12:00:00.000Z",
            })
        );
    }

    #[test]
    fn new_stamps_utc_iso8601() {
        let event = LogEvent::new(LogLevel::Log, "hello");
        assert_eq!(event.level, LogLevel::Log);
        assert_eq!(event.message, "hello");
        // 2025-03-01T12:00:00.000Z
        assert!(event.timestamp.ends_with('Z'));
        assert!(
            chrono::DateTime::parse_from_rfc3339(&event.timestamp).is_ok(),
            "timestamp not RFC 3339: {}",
            event.timestamp
        );
    }
}
