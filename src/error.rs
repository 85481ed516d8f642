// SPDX-License-Identifier: MIT OR Apache-2.0

//! Firehose Output Error Types
//!
//! Error handling for configuration parsing, record mapping and sink
//! submission. Per-message failures are recoverable by design: the forwarding
//! loop logs them and moves on, so none of these variants ever terminate the
//! loop itself.

use thiserror::Error;

/// Result type for firehose output operations
pub type FirehoseResult<T> = Result<T, FirehoseError>;

/// Firehose output error types
#[derive(Error, Debug)]
pub enum FirehoseError {
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        config_key: Option<String>,
    },

    #[error("Missing required parameter: {parameter}")]
    MissingParameter { parameter: String },

    #[error("Mapping failed: {message}")]
    MappingFailed {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Record submission failed: {message}")]
    SubmissionFailed {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Connection unavailable: {message}")]
    ConnectionUnavailable {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Custom error creation helpers
impl FirehoseError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            config_key: None,
        }
    }

    /// Create a configuration error with a specific key
    pub fn configuration_with_key(
        message: impl Into<String>,
        config_key: impl Into<String>,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            config_key: Some(config_key.into()),
        }
    }

    /// Create a missing parameter error
    pub fn missing_parameter(parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            parameter: parameter.into(),
        }
    }

    /// Create a mapping failed error
    pub fn mapping_failed(message: impl Into<String>) -> Self {
        Self::MappingFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create a mapping failed error with source
    pub fn mapping_failed_with_source(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::MappingFailed {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a submission failed error
    pub fn submission_failed(message: impl Into<String>) -> Self {
        Self::SubmissionFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create a submission failed error with source
    pub fn submission_failed_with_source(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::SubmissionFailed {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a connection unavailable error
    pub fn connection_unavailable(message: impl Into<String>) -> Self {
        Self::ConnectionUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a connection unavailable error with source
    pub fn connection_unavailable_with_source(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::ConnectionUnavailable {
            message: message.into(),
            source: Some(source),
        }
    }
}
