// ABOUTME: Unified error handling with error codes shared by every CapyRun crate
// ABOUTME: Defines AppError, ErrorCode, AppResult and re-exports the FIT decode error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns `AppResult<T>`. Metric
//! functions are the exception: "not enough data" is an absent value
//! (`Option::None`), never an error.

/// FIT container decode errors
pub mod decode;

pub use decode::DecodeError;

use std::error::Error as StdError;
use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

/// Standard error codes used throughout the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Caller supplied a value the operation cannot accept
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Activity file could not be decoded
    #[serde(rename = "DECODE_FAILED")]
    DecodeFailed,
    /// Not enough data to produce a meaningful aggregate
    #[serde(rename = "INSUFFICIENT_DATA")]
    InsufficientData,
    /// Configuration value is out of its accepted range
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// Report serialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError,
    /// Reading an input source failed
    #[serde(rename = "IO_ERROR")]
    IoError,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::DecodeFailed => "The activity file could not be decoded",
            Self::InsufficientData => "Not enough data",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization failed",
            Self::IoError => "Reading input failed",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// True when the error is informational and the caller should carry on
    #[must_use]
    pub const fn is_informational(&self) -> bool {
        matches!(self, Self::InsufficientData)
    }
}

/// Unified error type for the workspace
#[derive(Debug)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Activity file decode failure
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DecodeFailed, message)
    }

    /// Not enough data for an aggregate view
    pub fn insufficient_data(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InsufficientData, message)
    }

    /// Configuration value out of range
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Serialization failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

impl From<DecodeError> for AppError {
    fn from(error: DecodeError) -> Self {
        let message = error.to_string();
        Self::decode(message).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::new(ErrorCode::IoError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
