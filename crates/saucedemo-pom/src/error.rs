// Error types for saucedemo-pom

use thiserror::Error;

/// Result type alias for page object, flow and assertion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the store through the page object model
#[derive(Debug, Error)]
pub enum Error {
    /// Error reported by the Playwright driver
    ///
    /// Covers launch failures, missing browsers, closed targets and action timeouts
    /// (element never became actionable within Playwright's own timeout).
    #[error("Driver error: {0}")]
    Driver(#[from] playwright_rs::Error),

    /// Element not found by selector
    ///
    /// Raised when an interaction needs at least one matching element and none exist.
    #[error("Element not found: selector '{0}'")]
    ElementNotFound(String),

    /// Assertion timeout (expect API)
    ///
    /// The expectation was polled until its timeout and never held. The message names
    /// the selector, the expected state and the last observed state.
    #[error("Assertion timeout: {0}")]
    AssertionTimeout(String),

    /// Immediate assertion failure (no polling involved), e.g. an unsorted product list
    #[error("Assertion failed: {0}")]
    AssertionFailed(String),

    /// A flow helper's starting state did not hold
    #[error("Precondition failed in {flow}: {source}")]
    Precondition {
        flow: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// A flow helper's resulting state did not hold
    #[error("Postcondition failed in {flow}: {source}")]
    Postcondition {
        flow: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// Invalid suite configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// URL could not be parsed or joined
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }

    /// Wraps the error as a failed precondition of `flow`
    pub(crate) fn precondition(flow: &'static str, source: Error) -> Self {
        Error::Precondition {
            flow,
            source: Box::new(source),
        }
    }

    /// Wraps the error as a failed postcondition of `flow`
    pub(crate) fn postcondition(flow: &'static str, source: Error) -> Self {
        Error::Postcondition {
            flow,
            source: Box::new(source),
        }
    }

    /// Returns true for failures raised by the expect API (timeouts or immediate checks),
    /// looking through context and flow wrappers.
    pub fn is_assertion(&self) -> bool {
        match self {
            Error::AssertionTimeout(_) | Error::AssertionFailed(_) => true,
            Error::Precondition { source, .. }
            | Error::Postcondition { source, .. }
            | Error::Context(_, source) => source.is_assertion(),
            _ => false,
        }
    }
}
