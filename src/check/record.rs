use serde::{Deserialize, Serialize};

use crate::check::version::Version;

/// The persisted outcome of the last version check.
///
/// One record per tool installation. The checker overwrites it whole after
/// every successful fetch and reads it back at the start of every check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// When the record was written, in seconds since the Unix epoch
    pub last_check: f64,
    /// The running tool's version at the time of the write
    pub tool_version: String,
    /// The latest version the remote endpoint reported at that time
    pub latest_version: String,
}

impl CacheRecord {
    /// True if both version fields parse.
    ///
    /// Field presence and a numeric timestamp are already enforced by
    /// deserialization. A record that fails either test is never partially
    /// trusted; the staleness policy treats it the same as an absent cache.
    pub fn is_well_formed(&self) -> bool {
        self.tool_version.parse::<Version>().is_ok()
            && self.latest_version.parse::<Version>().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn deserializes_the_persisted_shape() {
        let record: CacheRecord = serde_json::from_str(
            r#"{"last_check": 1700000000.5, "tool_version": "1.7.1", "latest_version": "1.8.0"}"#,
        )
        .unwrap();

        assert_eq!(record.last_check, 1700000000.5);
        assert_eq!(record.tool_version, "1.7.1");
        assert_eq!(record.latest_version, "1.8.0");
    }

    #[rstest]
    // missing fields
    #[case(r#"{"tool_version": "1.0.0", "latest_version": "1.2.0"}"#)]
    #[case(r#"{"last_check": 1700000000.0, "latest_version": "1.2.0"}"#)]
    #[case(r#"{"last_check": 1700000000.0, "tool_version": "1.0.0"}"#)]
    // non-numeric timestamp
    #[case(r#"{"last_check": "yesterday", "tool_version": "1.0.0", "latest_version": "1.2.0"}"#)]
    fn deserialization_rejects_structurally_broken_records(#[case] json: &str) {
        assert!(serde_json::from_str::<CacheRecord>(json).is_err());
    }

    #[rstest]
    #[case("1.0.0", "1.2.0", true)]
    #[case("1.a.0", "1.2.0", false)]
    #[case("1.0.0", "not-a-version", false)]
    #[case("", "1.2.0", false)]
    fn is_well_formed_requires_both_versions_to_parse(
        #[case] tool_version: &str,
        #[case] latest_version: &str,
        #[case] expected: bool,
    ) {
        let record = CacheRecord {
            last_check: 1700000000.0,
            tool_version: tool_version.to_string(),
            latest_version: latest_version.to_string(),
        };

        assert_eq!(record.is_well_formed(), expected);
    }
}
