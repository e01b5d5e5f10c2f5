//! Workspace location errors

use super::PacklineError;

pub fn not_found(path: impl Into<String>) -> PacklineError {
    PacklineError::WorkspaceNotFound { path: path.into() }
}
