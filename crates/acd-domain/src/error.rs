//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Array Capacity Dashboard
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream management service unreachable (network/connect/timeout)
    #[error("Upstream unavailable: {message}")]
    UpstreamUnavailable {
        /// Description of the connectivity failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Upstream rejected the credentials or the permission level
    #[error("Upstream authentication failed: {message}")]
    UpstreamAuth {
        /// Description of the credential rejection
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Upstream response was malformed or missing required fields
    #[error("Upstream protocol error: {message}")]
    UpstreamProtocol {
        /// Description of the protocol violation
        message: String,
    },

    /// A collection is already running; the request is rejected, not queued
    #[error("Collection already in progress")]
    CollectionInProgress,

    /// Upstream delivered negative or inconsistent capacity values
    #[error("Data integrity violation: {message}")]
    DataIntegrity {
        /// Description of the offending record
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Upstream error creation methods
impl Error {
    /// Create an upstream-unavailable error
    pub fn upstream_unavailable<S: Into<String>>(message: S) -> Self {
        Self::UpstreamUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create an upstream-unavailable error with source
    pub fn upstream_unavailable_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::UpstreamUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an upstream-auth error
    pub fn upstream_auth<S: Into<String>>(message: S) -> Self {
        Self::UpstreamAuth {
            message: message.into(),
            source: None,
        }
    }

    /// Create an upstream-auth error with source
    pub fn upstream_auth_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::UpstreamAuth {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an upstream-protocol error
    pub fn upstream_protocol<S: Into<String>>(message: S) -> Self {
        Self::UpstreamProtocol {
            message: message.into(),
        }
    }
}

// Data and lookup error creation methods
impl Error {
    /// Create a data-integrity error
    pub fn data_integrity<S: Into<String>>(message: S) -> Self {
        Self::DataIntegrity {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }
}

// Configuration and internal error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
