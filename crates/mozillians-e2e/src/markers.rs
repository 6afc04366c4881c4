// Scenario markers and outcome classification
//
// A scenario marked as an expected failure documents a known defect of the
// site. It still runs; passing is reported separately because it means the
// defect is gone and the marker should be removed.

use crate::error::Result;
use serde::Serialize;

/// Metadata attached to a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "marker", rename_all = "snake_case")]
pub enum Marker {
    /// Performs no irreversible change on the site.
    Nondestructive,
    /// Known defect; `reason` names it.
    ExpectedFailure { reason: &'static str },
}

pub fn is_nondestructive(markers: &[Marker]) -> bool {
    markers.contains(&Marker::Nondestructive)
}

pub fn expected_failure(markers: &[Marker]) -> Option<&'static str> {
    markers.iter().find_map(|m| match m {
        Marker::ExpectedFailure { reason } => Some(*reason),
        Marker::Nondestructive => None,
    })
}

/// How a scenario ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Passed,
    Failed { message: String },
    /// Failed, as its expected-failure marker says it would.
    ExpectedFailure { reason: String, message: String },
    /// Passed despite an expected-failure marker.
    UnexpectedPass { reason: String },
    Skipped { reason: String },
}

impl Outcome {
    /// Whether this outcome should fail the run.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. } | Outcome::UnexpectedPass { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Passed => "PASSED",
            Outcome::Failed { .. } => "FAILED",
            Outcome::ExpectedFailure { .. } => "XFAIL",
            Outcome::UnexpectedPass { .. } => "XPASS",
            Outcome::Skipped { .. } => "SKIPPED",
        }
    }
}

/// Turns a scenario result into an outcome, honouring its markers.
pub fn classify(markers: &[Marker], result: Result<()>) -> Outcome {
    match (expected_failure(markers), result) {
        (None, Ok(())) => Outcome::Passed,
        (None, Err(e)) => Outcome::Failed {
            message: e.to_string(),
        },
        (Some(reason), Ok(())) => Outcome::UnexpectedPass {
            reason: reason.to_string(),
        },
        (Some(reason), Err(e)) => Outcome::ExpectedFailure {
            reason: reason.to_string(),
            message: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const XFAIL: Marker = Marker::ExpectedFailure {
        reason: "Bug 883194 - Error message appears when trying to save changes in Edit Profile page",
    };

    fn failure() -> Result<()> {
        Err(Error::AssertionFailed("boom".to_string()))
    }

    #[test]
    fn test_classify_plain_scenarios() {
        assert_eq!(classify(&[], Ok(())), Outcome::Passed);
        assert_eq!(
            classify(&[Marker::Nondestructive], failure()),
            Outcome::Failed {
                message: "Assertion failed: boom".to_string()
            }
        );
    }

    #[test]
    fn test_classify_expected_failures() {
        let outcome = classify(&[XFAIL], failure());
        assert!(matches!(outcome, Outcome::ExpectedFailure { .. }));
        assert!(!outcome.is_failure());

        let outcome = classify(&[Marker::Nondestructive, XFAIL], Ok(()));
        assert!(matches!(outcome, Outcome::UnexpectedPass { ref reason } if reason.starts_with("Bug 883194")));
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_marker_queries() {
        assert!(is_nondestructive(&[XFAIL, Marker::Nondestructive]));
        assert!(!is_nondestructive(&[XFAIL]));
        assert_eq!(expected_failure(&[Marker::Nondestructive]), None);
        assert!(expected_failure(&[XFAIL]).is_some());
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(Outcome::Skipped {
            reason: "destructive".to_string(),
        })
        .unwrap();
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["reason"], "destructive");
    }
}
