fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use quill_collector::LogRecord;
    use quill_protocol::{LogEvent, LogLevel};

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Deserializes a fixture into a Rust type, re-serializes it, and
    /// compares the JSON values (order-independent comparison).
    fn roundtrip_test<T>(name: &str)
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let fixture = load_fixture(name);
        let parsed: T = serde_json::from_value(fixture.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize {name}: {e}"));
        let reserialized = serde_json::to_value(&parsed)
            .unwrap_or_else(|e| panic!("failed to reserialize {name}: {e}"));
        assert_eq!(fixture, reserialized, "wire mismatch for {name}");
    }

    #[test]
    fn log_event_wire_shape() {
        roundtrip_test::<LogEvent>("log_event.json");
    }

    #[test]
    fn log_record_wire_shape() {
        roundtrip_test::<LogRecord>("log_record.json");
    }

    #[test]
    fn shim_levels_appear_verbatim_in_collector_records() {
        for level in [LogLevel::Log, LogLevel::Warn, LogLevel::Error] {
            let event = LogEvent {
                level,
                message: "m".into(),
                timestamp: "2025-03-01T12:00:00.000Z".into(),
            };
            let wire = serde_json::to_value(&event).unwrap();
            let record = LogRecord::received(
                wire["level"].as_str().unwrap(),
                wire["message"].as_str().unwrap(),
            );
            assert_eq!(record.level, level.as_str());
            assert_eq!(record.message, "m");
        }
    }
}
