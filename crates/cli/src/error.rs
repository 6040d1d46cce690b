//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   error types.
//! - Map `SheetError` variants to appropriate exit codes.
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use hintsheet_sheets::SheetError;

/// Structured exit codes for the hintsheet binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - broken include or unusable config directory.
    ///
    /// Scripts should point the user at their sheet files.
    ConfigError = 2,

    /// Sheet not found - unknown id passed to `show` or as a fallback.
    NotFound = 4,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Map an error chain to an exit code, recognizing `SheetError` causes.
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<SheetError>() {
        Some(SheetError::SheetNotFound(_)) => ExitCode::NotFound,
        Some(SheetError::IncludeNotFound { .. }) => ExitCode::ConfigError,
        Some(SheetError::SheetDirUnavailable(_)) => ExitCode::ConfigError,
        Some(SheetError::Io(_)) | None => ExitCode::GeneralError,
    }
}
