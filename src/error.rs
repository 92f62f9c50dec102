//! Error types for `folio`
//!
//! This module provides the error hierarchy for content validation,
//! export, page generation, and the preview server, along with the
//! process exit codes the CLI maps them to.

use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `folio` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Content error (validation failure, unknown page)
    pub const CONTENT_ERROR: i32 = 2;

    /// I/O error (directory not writable, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Server error (bind failed, invalid address)
    pub const SERVER_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;

    /// Interrupted by SIGINT (Ctrl+C)
    pub const INTERRUPTED: i32 = 130;

    /// Terminated by SIGTERM
    pub const TERMINATED: i32 = 143;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `folio` operations.
///
/// This enum aggregates all domain-specific errors and provides
/// a unified interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Content lookup or validation error
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Preview server error
    #[error(transparent)]
    Server(#[from] ServerError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FolioError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Content(ContentError::UnknownPage { .. }) => ExitCode::USAGE_ERROR,
            Self::Content(_) | Self::Json(_) | Self::Yaml(_) => ExitCode::CONTENT_ERROR,
            Self::Server(_) => ExitCode::SERVER_ERROR,
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Content Errors
// ============================================================================

/// Content lookup and integrity errors.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content tree failed its integrity checks
    #[error("content validation failed with {error_count} error(s)")]
    ValidationFailed {
        /// Number of error-severity issues found
        error_count: usize,
        /// Every issue found, errors and warnings alike
        issues: Vec<ValidationIssue>,
    },

    /// A page slug did not match any page
    #[error("unknown page '{slug}'{}", suggestion_hint(.suggestion))]
    UnknownPage {
        /// The slug that failed to resolve
        slug: String,
        /// Closest known slug, when one is within edit distance
        suggestion: Option<String>,
    },
}

/// Renders the did-you-mean fragment of an unknown-page message.
fn suggestion_hint(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map_or_else(String::new, |s| format!(" (did you mean '{s}'?)"))
}

// ============================================================================
// Server Errors
// ============================================================================

/// Preview server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The bind address could not be parsed
    #[error("invalid bind address '{addr}': {message}")]
    InvalidBindAddr {
        /// The address string as given
        addr: String,
        /// Description of what failed to parse
        message: String,
    },

    /// Binding the listener failed
    #[error("failed to bind {addr}: {source}")]
    BindFailed {
        /// The resolved address that could not be bound
        addr: std::net::SocketAddr,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The server loop terminated with an error
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single issue found while checking the content tree.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Dotted path to the problematic field (e.g., "about.work.experiences[1].role")
    pub path: String,
    /// Description of the issue
    pub message: String,
    /// Severity level of the issue
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} at {}", prefix, self.message, self.path)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - the content tree must not ship with this issue
    Error,
    /// Warning - worth a look, but the tree is usable
    Warning,
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `folio` operations.
pub type Result<T> = std::result::Result<T, FolioError>;

// ============================================================================
// Tests
// ============================================================================
