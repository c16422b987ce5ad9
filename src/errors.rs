//! Error types for dancefig
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for dancefig operations
pub type Result<T> = std::result::Result<T, DancefigError>;

/// Main error type for all dancefig operations
#[derive(Debug, Error)]
pub enum DancefigError {
    /// No directory containing .dancefig was found
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Dance key unusable as a storage namespace
    #[error("Invalid dance key: {0}")]
    InvalidDance(String),

    /// Neither --dance nor default_dance was given
    #[error("No dance selected (use --dance or set default_dance in config.json)")]
    NoDanceSelected,

    /// Position id not present in the catalog
    #[error("Unknown position: {0}")]
    UnknownPosition(String),

    /// Step is not among the current candidates
    #[error("Step {0} cannot follow the current position and half")]
    NotACandidate(String),

    /// Tried to save a figure from an empty scratch
    #[error("The scratch is empty. Add steps before saving.")]
    NothingToSave,

    /// Figure id not present in the library
    #[error("Figure not found: {0}")]
    FigureNotFound(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DancefigError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            DancefigError::ProjectNotFound(_) => "PROJECT_NOT_FOUND",
            DancefigError::InvalidJson(_) => "INVALID_JSON",
            DancefigError::FileNotFound(_) => "FILE_NOT_FOUND",
            DancefigError::ConfigError(_) => "CONFIG_ERROR",
            DancefigError::InvalidDance(_) => "INVALID_DANCE",
            DancefigError::NoDanceSelected => "NO_DANCE_SELECTED",
            DancefigError::UnknownPosition(_) => "UNKNOWN_POSITION",
            DancefigError::NotACandidate(_) => "NOT_A_CANDIDATE",
            DancefigError::NothingToSave => "NOTHING_TO_SAVE",
            DancefigError::FigureNotFound(_) => "FIGURE_NOT_FOUND",
            DancefigError::Io(_) => "IO_ERROR",
        }
    }

    /// Whether this is a user precondition violation rather than an environment fault.
    ///
    /// These abort the operation without touching any state.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            DancefigError::NoDanceSelected
                | DancefigError::UnknownPosition(_)
                | DancefigError::NotACandidate(_)
                | DancefigError::NothingToSave
                | DancefigError::FigureNotFound(_)
        )
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &DancefigError) -> i32 {
    if error.is_user_error() {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DancefigError::ProjectNotFound("x".into()).code(), "PROJECT_NOT_FOUND");
        assert_eq!(DancefigError::InvalidJson("x".into()).code(), "INVALID_JSON");
        assert_eq!(DancefigError::FileNotFound("x".into()).code(), "FILE_NOT_FOUND");
        assert_eq!(DancefigError::ConfigError("x".into()).code(), "CONFIG_ERROR");
        assert_eq!(DancefigError::InvalidDance("x".into()).code(), "INVALID_DANCE");
        assert_eq!(DancefigError::NoDanceSelected.code(), "NO_DANCE_SELECTED");
        assert_eq!(DancefigError::NotACandidate("s1".into()).code(), "NOT_A_CANDIDATE");
        assert_eq!(DancefigError::NothingToSave.code(), "NOTHING_TO_SAVE");
        assert_eq!(DancefigError::FigureNotFound("f".into()).code(), "FIGURE_NOT_FOUND");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(to_exit_code(&DancefigError::NothingToSave), 2);
        assert_eq!(to_exit_code(&DancefigError::UnknownPosition("a".into())), 2);
        assert_eq!(to_exit_code(&DancefigError::InvalidJson("x".into())), 1);
    }
}
