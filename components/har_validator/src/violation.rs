//! Validation findings

use std::fmt;

use serde::{Deserialize, Serialize};

/// How serious a finding is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of the rule a finding comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// `log.version` is absent or not a supported format version
    UnsupportedVersion,
    /// A field the HAR format requires is unset
    MissingField,
    /// The log has no entries
    EmptyEntries,
    /// Two pages share an id
    DuplicatePageId,
    /// An entry's `pageref` names no page of the log
    DanglingPageRef,
    /// A response status outside 100-599
    StatusOutOfRange,
    /// A timing below zero other than the -1 sentinel
    NegativeTiming,
    /// A byte size below zero other than the -1 sentinel
    NegativeSize,
    /// A negative entry `time`
    NegativeTime,
    /// Entry `time` does not match the sum of its timings
    TimingsMismatch,
    /// A date-time that is not ISO 8601
    InvalidDatetime,
    /// A known field whose original value could not be read
    ShadowedField,
}

impl RuleId {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::UnsupportedVersion => "unsupported-version",
            RuleId::MissingField => "missing-field",
            RuleId::EmptyEntries => "empty-entries",
            RuleId::DuplicatePageId => "duplicate-page-id",
            RuleId::DanglingPageRef => "dangling-page-ref",
            RuleId::StatusOutOfRange => "status-out-of-range",
            RuleId::NegativeTiming => "negative-timing",
            RuleId::NegativeSize => "negative-size",
            RuleId::NegativeTime => "negative-time",
            RuleId::TimingsMismatch => "timings-mismatch",
            RuleId::InvalidDatetime => "invalid-datetime",
            RuleId::ShadowedField => "shadowed-field",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One non-conformance found in a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Entity path, e.g. `log.entries[3].response.status`
    pub path: String,
    pub rule: RuleId,
    pub severity: Severity,
    pub message: String,
}

impl Violation {
    pub fn new(
        path: impl Into<String>,
        rule: RuleId,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            rule,
            severity,
            message: message.into(),
        }
    }

    pub fn warning(path: impl Into<String>, rule: RuleId, message: impl Into<String>) -> Self {
        Self::new(path, rule, Severity::Warning, message)
    }

    pub fn error(path: impl Into<String>, rule: RuleId, message: impl Into<String>) -> Self {
        Self::new(path, rule, Severity::Error, message)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] at {}: {}",
            self.severity, self.rule, self.path, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_violation_display() {
        let v = Violation::error(
            "log.entries[0].response.status",
            RuleId::StatusOutOfRange,
            "status 0 is outside 100-599",
        );
        assert_eq!(
            v.to_string(),
            "error [status-out-of-range] at log.entries[0].response.status: status 0 is outside 100-599"
        );
        assert!(v.is_error());
    }

    #[test]
    fn test_violation_serialization() {
        let v = Violation::warning("log", RuleId::EmptyEntries, "log contains no entries");
        let value = serde_json::to_value(&v).unwrap();
        assert_eq!(
            value,
            json!({
                "path": "log",
                "rule": "empty-entries",
                "severity": "warning",
                "message": "log contains no entries"
            })
        );
    }

    #[test]
    fn test_rule_names_match_serde() {
        for rule in [
            RuleId::UnsupportedVersion,
            RuleId::DanglingPageRef,
            RuleId::TimingsMismatch,
            RuleId::ShadowedField,
        ] {
            assert_eq!(serde_json::to_value(rule).unwrap(), json!(rule.as_str()));
        }
    }
}
