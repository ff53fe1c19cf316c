//! Exit codes for the CLI

use tagship_core::error::{ConfigError, GitError, VersionError, WorkflowError};
use tagship_core::TagshipError;

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// Version error
pub const VERSION_ERROR: i32 = 4;

/// User cancelled
pub const CANCELLED: i32 = 130;

/// Map a fatal error to the process exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<TagshipError>() {
        return match e {
            TagshipError::Config(_) => CONFIG_ERROR,
            TagshipError::Git(_) => GIT_ERROR,
            TagshipError::Version(_) => VERSION_ERROR,
            TagshipError::Workflow(WorkflowError::Cancelled) => CANCELLED,
            _ => ERROR,
        };
    }
    if err.downcast_ref::<GitError>().is_some() {
        return GIT_ERROR;
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return CONFIG_ERROR;
    }
    if err.downcast_ref::<VersionError>().is_some() {
        return VERSION_ERROR;
    }
    ERROR
}
