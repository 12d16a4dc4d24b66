//! Reviewer decisions
//!
//! `DecisionParam` is what arrives at the boundary (the raw `approve` query
//! value, converted once). `Decision` is the closed set the core dispatches on.

use serde::Serialize;

use super::item::ItemStatus;

/// A reviewer's verdict on a pending item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// Status the item ends up in once this decision is applied
    pub fn target_status(&self) -> ItemStatus {
        match self {
            Decision::Approve => ItemStatus::Approved,
            Decision::Reject => ItemStatus::Deleted,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Approve => write!(f, "approve"),
            Decision::Reject => write!(f, "reject"),
        }
    }
}

/// The `approve` request parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionParam {
    Approve,
    Reject,
    /// Absent, or a value other than exactly `true`/`false`.
    /// The raw text is kept for logging.
    Unspecified(Option<String>),
}

impl DecisionParam {
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("true") => DecisionParam::Approve,
            Some("false") => DecisionParam::Reject,
            Some("") | None => DecisionParam::Unspecified(None),
            Some(other) => DecisionParam::Unspecified(Some(other.to_string())),
        }
    }

    pub fn decision(&self) -> Option<Decision> {
        match self {
            DecisionParam::Approve => Some(Decision::Approve),
            DecisionParam::Reject => Some(Decision::Reject),
            DecisionParam::Unspecified(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_true_and_false_are_decisions() {
        assert_eq!(DecisionParam::from_query(Some("true")), DecisionParam::Approve);
        assert_eq!(DecisionParam::from_query(Some("false")), DecisionParam::Reject);
    }

    #[test]
    fn missing_value_is_unspecified() {
        assert_eq!(
            DecisionParam::from_query(None),
            DecisionParam::Unspecified(None)
        );
        assert_eq!(
            DecisionParam::from_query(Some("")),
            DecisionParam::Unspecified(None)
        );
    }

    #[test]
    fn unrecognized_value_keeps_raw_text() {
        assert_eq!(
            DecisionParam::from_query(Some("maybe")),
            DecisionParam::Unspecified(Some("maybe".to_string()))
        );
        // Matching is exact, as on the wire
        assert_eq!(
            DecisionParam::from_query(Some("TRUE")),
            DecisionParam::Unspecified(Some("TRUE".to_string()))
        );
    }

    #[test]
    fn decision_target_status() {
        assert_eq!(Decision::Approve.target_status(), ItemStatus::Approved);
        assert_eq!(Decision::Reject.target_status(), ItemStatus::Deleted);
    }

    #[test]
    fn unspecified_has_no_decision() {
        assert_eq!(DecisionParam::Unspecified(None).decision(), None);
        assert_eq!(DecisionParam::Approve.decision(), Some(Decision::Approve));
    }
}
