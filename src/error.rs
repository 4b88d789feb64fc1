//! Error types for the power rankings scraper

use thiserror::Error;


pub type Result<T> = std::result::Result<T, PrError>;

/// Coarse classification of a [`PrError`], used for exit codes and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Transport,
    NotFound,
    Replay,
    Persistence,
    Configuration,
}

#[derive(Error, Debug)]
pub enum PrError {
    #[error("Unknown league: '{name}'")]
    UnknownLeague { name: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{what} not found")]
    NotFound { what: String },

    #[error("Replay history exhausted at fetch #{position}")]
    ReplayExhausted { position: usize },

    #[error("Replay out of sync at fetch #{seq}: recorded '{recorded}', requested '{requested}'")]
    ReplayMismatch {
        seq: usize,
        recorded: String,
        requested: String,
    },

    #[error("No recorded fetch log at {path}")]
    FetchLogMissing { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid CSS selector: {selector}")]
    InvalidSelector { selector: String },

    #[error("Invalid extraction pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("{step}: {context}")]
    Step {
        step: String,
        context: String,
        #[source]
        source: Box<PrError>,
    },
}

impl PrError {
    pub fn not_found(what: impl Into<String>) -> Self {
        PrError::NotFound { what: what.into() }
    }

    /// Wrap this error with a breadcrumb naming the step that failed.
    pub fn within(self, step: impl Into<String>, context: impl Into<String>) -> Self {
        PrError::Step {
            step: step.into(),
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error beneath any `Step` breadcrumbs.
    pub fn root(&self) -> &PrError {
        match self {
            PrError::Step { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.root() {
            PrError::UnknownLeague { .. } => ErrorKind::Usage,
            PrError::Http(_) => ErrorKind::Transport,
            PrError::NotFound { .. } => ErrorKind::NotFound,
            PrError::ReplayExhausted { .. }
            | PrError::ReplayMismatch { .. }
            | PrError::FetchLogMissing { .. } => ErrorKind::Replay,
            PrError::Io(_) | PrError::Json(_) => ErrorKind::Persistence,
            PrError::InvalidSelector { .. } | PrError::InvalidPattern(_) => {
                ErrorKind::Configuration
            }
            // root() never returns a Step
            PrError::Step { .. } => ErrorKind::Configuration,
        }
    }

    /// Process exit code: usage problems exit 2 (like clap), everything else 1.
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::Usage => 2,
            _ => 1,
        }
    }
}

/// Attach step-and-context breadcrumbs to a failing result.
pub trait ResultExt<T> {
    fn step(self, step: impl Into<String>, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<PrError>> ResultExt<T> for std::result::Result<T, E> {
    fn step(self, step: impl Into<String>, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().within(step, context))
    }
}
