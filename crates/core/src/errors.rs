//! Error types for the codeinsights crates

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for codeinsights operations
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Context accessor used before the context was validated
    #[error("Invalid build context: {message}")]
    #[diagnostic(code(codeinsights::context::invalid))]
    Context {
        /// What was requested on the unresolved context
        message: String,
    },

    /// The remote API answered with a non-success status
    #[error("Bitbucket API returned HTTP {status} for {url}")]
    #[diagnostic(code(codeinsights::http::status))]
    Http {
        /// HTTP status code of the response
        status: u16,
        /// The request URL, with any query stripped
        url: String,
    },

    /// The request never produced a response
    #[error("Transport error: {message}")]
    #[diagnostic(code(codeinsights::http::transport))]
    Transport {
        /// Description of the connection or protocol failure
        message: String,
    },

    /// A report builder failed while inspecting a build
    #[error("Report builder '{builder}' failed: {message}")]
    #[diagnostic(code(codeinsights::builder::failed))]
    Builder {
        /// Name of the failing builder
        builder: String,
        /// The error message produced by the builder
        message: String,
    },
}

impl Error {
    /// Create a context error with a message
    pub fn context(message: impl Into<String>) -> Self {
        Self::Context {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http(status: u16, url: impl Into<String>) -> Self {
        Self::Http {
            status,
            url: url.into(),
        }
    }

    /// Create a transport error with a message
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a builder error
    pub fn builder(builder: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Builder {
            builder: builder.into(),
            message: message.into(),
        }
    }
}

/// Result type for codeinsights operations
pub type Result<T> = std::result::Result<T, Error>;
