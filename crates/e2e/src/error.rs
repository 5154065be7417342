//! Error types for the test suite

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unsupported browser kind: {0} (expected \"chrome\" or \"firefox\")")]
    UnsupportedBrowser(String),

    #[error("Element not found within wait budget: {selector}")]
    ElementNotFound { selector: String },

    #[error("Timeout waiting for: {0}")]
    Timeout(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Assertion failed: {0}")]
    Assertion(String),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("WebDriver command error: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error("WebDriver session error: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type E2eResult<T> = Result<T, E2eError>;
