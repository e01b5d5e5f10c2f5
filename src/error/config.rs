//! Settings file errors

use super::PacklineError;

pub fn not_found(path: impl Into<String>) -> PacklineError {
    PacklineError::ConfigNotFound { path: path.into() }
}

pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PacklineError {
    PacklineError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PacklineError {
    PacklineError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn invalid(message: impl Into<String>) -> PacklineError {
    PacklineError::ConfigInvalid {
        message: message.into(),
    }
}

pub fn env_missing(name: impl Into<String>) -> PacklineError {
    PacklineError::EnvironmentMissing { name: name.into() }
}
