//! Build freshness errors

use super::PacklineError;

pub fn missing() -> PacklineError {
    PacklineError::DigestMissing
}

pub fn stale() -> PacklineError {
    PacklineError::BuildStale
}
