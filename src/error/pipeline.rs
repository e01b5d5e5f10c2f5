//! Loader rule errors

use super::PacklineError;

pub fn pattern_invalid(pattern: impl Into<String>, reason: impl Into<String>) -> PacklineError {
    PacklineError::PatternInvalid {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
