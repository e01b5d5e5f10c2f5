//! File system errors

use super::PacklineError;

pub fn not_found(path: impl Into<String>) -> PacklineError {
    PacklineError::FileNotFound { path: path.into() }
}

pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PacklineError {
    PacklineError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> PacklineError {
    PacklineError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn io_error(message: impl Into<String>) -> PacklineError {
    PacklineError::IoError {
        message: message.into(),
    }
}
