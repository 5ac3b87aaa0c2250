//! Console argument values and their stringification.
//!
//! A console accepts values of any shape. Forwarded messages need a single
//! string, so each argument is reduced through the same rule the console
//! wire uses: structured values get a JSON encoding, everything else gets
//! its plain display form. A structured value whose encoding fails (a
//! failing `Serialize` impl, a map with non-string keys) falls back to its
//! display form rather than aborting the message.

use serde::Serialize;
use std::fmt;

/// A single argument passed to a console entry point.
///
/// The encoding attempt happens at construction, inside the intercepted
/// call; by the time the value reaches the forwarder it is already plain
/// text either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleValue {
    structured: bool,
    encoded: Option<String>,
    display: String,
}

impl ConsoleValue {
    /// A scalar value, rendered with its display form.
    pub fn scalar(value: impl fmt::Display) -> Self {
        Self {
            structured: false,
            encoded: None,
            display: value.to_string(),
        }
    }

    /// A structured value, JSON-encoded when forwarded.
    ///
    /// The debug form is kept as the coercion fallback for values that
    /// refuse to encode.
    pub fn structured<T: Serialize + fmt::Debug>(value: &T) -> Self {
        Self {
            structured: true,
            encoded: serde_json::to_string(value).ok(),
            display: format!("{value:?}"),
        }
    }

    /// The single-string form used in forwarded messages.
    pub fn stringify(&self) -> &str {
        if self.structured {
            self.encoded.as_deref().unwrap_or(&self.display)
        } else {
            &self.display
        }
    }
}

impl From<&str> for ConsoleValue {
    fn from(value: &str) -> Self {
        ConsoleValue::scalar(value)
    }
}

impl From<String> for ConsoleValue {
    fn from(value: String) -> Self {
        ConsoleValue::scalar(value)
    }
}

impl From<bool> for ConsoleValue {
    fn from(value: bool) -> Self {
        ConsoleValue::scalar(value)
    }
}

impl From<serde_json::Value> for ConsoleValue {
    fn from(value: serde_json::Value) -> Self {
        // `Value` always encodes; its display form is the same JSON text.
        let json = value.to_string();
        Self {
            structured: true,
            encoded: Some(json.clone()),
            display: json,
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConsoleValue {
                fn from(value: $ty) -> Self {
                    ConsoleValue::scalar(value)
                }
            }
        )*
    };
}

scalar_from!(i32, i64, u32, u64, f64);

/// Reduces an argument list to one message: each value stringified, joined
/// with a single space.
pub fn join(values: &[ConsoleValue]) -> String {
    values
        .iter()
        .map(ConsoleValue::stringify)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn scalar_uses_display_form() {
        assert_eq!(ConsoleValue::from("hello").stringify(), "hello");
        assert_eq!(ConsoleValue::from(5).stringify(), "5");
        assert_eq!(ConsoleValue::from(2.5).stringify(), "2.5");
        assert_eq!(ConsoleValue::from(true).stringify(), "true");
    }

    #[test]
    fn structured_uses_json_encoding() {
        let value = ConsoleValue::from(serde_json::json!({"a": 1}));
        assert_eq!(value.stringify(), r#"{"a":1}"#);
    }

    #[test]
    fn structured_falls_back_to_display_on_encode_failure() {
        // JSON object keys must be strings; a tuple-keyed map refuses to
        // encode and must coerce instead of erroring.
        let mut map = BTreeMap::new();
        map.insert((1u8, 2u8), 3u8);
        let value = ConsoleValue::structured(&map);
        assert_eq!(value.stringify(), format!("{map:?}"));
    }

    #[test]
    fn join_uses_single_spaces() {
        let args = [
            ConsoleValue::from("count:"),
            ConsoleValue::from(5),
            ConsoleValue::from(serde_json::json!({"a": 1})),
        ];
        assert_eq!(join(&args), r#"count: 5 {"a":1}"#);
    }

    #[test]
    fn join_empty_args() {
        assert_eq!(join(&[]), "");
    }
}
