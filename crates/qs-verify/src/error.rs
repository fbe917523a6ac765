// Error types for the verification scripts

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for verification operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while driving the browser through a verification flow.
///
/// Every failure is typed by kind rather than collapsed into one
/// undifferentiated category. The scripts still handle all of them the same
/// way at the top level (print `Error: ...`, attempt a failure screenshot,
/// close the browser), but the kind and its context survive into the
/// message and into test assertions.
#[derive(Debug, Error)]
pub enum Error {
    /// The Playwright driver or the browser itself failed to start
    #[error("Failed to launch browser session: {0}")]
    Launch(#[source] playwright_rs::Error),

    /// Navigation to the target URL failed or timed out
    #[error("Navigation to '{url}' failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: playwright_rs::Error,
    },

    /// Waiting for an element to become visible timed out
    #[error("Timed out waiting for '{selector}': {source}")]
    Wait {
        selector: String,
        #[source]
        source: playwright_rs::Error,
    },

    /// An expected attribute was absent from a located element
    #[error("Element '{selector}' has no '{attribute}' attribute")]
    MissingAttribute { selector: String, attribute: String },

    /// Reading page state (content, title, attributes, visibility) failed
    #[error("Failed to read page state: {0}")]
    PageState(#[source] playwright_rs::Error),

    /// A click or fill on a located element failed
    #[error("Interaction with '{selector}' failed: {source}")]
    Interaction {
        selector: String,
        #[source]
        source: playwright_rs::Error,
    },

    /// Capturing or writing a screenshot failed
    #[error("Failed to write screenshot '{path}': {source}")]
    Screenshot {
        path: PathBuf,
        #[source]
        source: playwright_rs::Error,
    },

    /// Closing the browser failed
    #[error("Failed to close browser: {0}")]
    Close(#[source] playwright_rs::Error),
}
