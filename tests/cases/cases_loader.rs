/// Case loader
///
/// Each entry of `query_cases.json` is either a comment string or an object whose
/// `op` field names the operation under test.
use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum CaseEntry {
    /// An operation case
    Case(QueryCase),
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum QueryCase {
    /// Parse and reconstruct without changes
    Reconstruct {
        query: Option<String>,
        expected: String,
    },
    RemoveAllAndAdd {
        query: Option<String>,
        #[serde(default)]
        remove: Vec<String>,
        #[serde(default)]
        add: Vec<(String, String)>,
        expected: String,
    },
    RemoveNthAndAdd {
        query: Option<String>,
        #[serde(default)]
        remove: BTreeMap<String, Vec<i64>>,
        #[serde(default)]
        add: Vec<(String, String)>,
        expected: String,
    },
    AdjustNumericValueBy {
        query: Option<String>,
        key: String,
        indexes: Vec<i64>,
        delta: i64,
        expected: String,
    },
    AdjustFirstNumericValueBy {
        query: Option<String>,
        key: String,
        delta: i64,
        expected: String,
    },
}

impl QueryCase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reconstruct { .. } => "reconstruct",
            Self::RemoveAllAndAdd { .. } => "remove_all_and_add",
            Self::RemoveNthAndAdd { .. } => "remove_nth_and_add",
            Self::AdjustNumericValueBy { .. } => "adjust_numeric_value_by",
            Self::AdjustFirstNumericValueBy { .. } => "adjust_first_numeric_value_by",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CaseFailure {
    pub case_num: usize,
    pub op: &'static str,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct CaseResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CaseFailure>,
}

impl CaseResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

/// Load the bundled cases
pub fn load_cases() -> Vec<CaseEntry> {
    serde_json::from_str(include_str!("query_cases.json")).expect("query_cases.json is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_cases() {
        let entries = load_cases();
        let cases = entries
            .iter()
            .filter(|entry| matches!(entry, CaseEntry::Case(_)))
            .count();
        assert!(cases >= 20, "expected at least 20 cases, found {cases}");
    }

    #[test]
    fn test_parse_case() {
        let entry: CaseEntry = serde_json::from_str(
            r#"{"op": "remove_nth_and_add", "query": "a=1", "remove": {"a": [0]}, "expected": ""}"#,
        )
        .unwrap();
        match entry {
            CaseEntry::Case(QueryCase::RemoveNthAndAdd { remove, add, .. }) => {
                assert_eq!(remove["a"], [0]);
                assert!(add.is_empty());
            }
            other => panic!("unexpected entry {other:?}"),
        }
    }
}
