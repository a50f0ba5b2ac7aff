// ABOUTME: Decode error taxonomy for binary FIT activity files
// ABOUTME: Surfaced per file; batch processing skips the file and carries on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io;

use thiserror::Error;

/// Errors raised while turning raw bytes into typed FIT messages.
///
/// Decode failures are never retried: the caller reports them and abandons
/// that one file.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input contained no bytes at all
    #[error("activity file is empty")]
    Empty,

    /// The container is malformed, truncated, or fails its CRC
    #[error("malformed FIT data: {0}")]
    Malformed(String),

    /// The byte source could not be read
    #[error("failed to read activity file: {0}")]
    Io(#[from] io::Error),
}

impl DecodeError {
    /// Create a malformed-data error
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed(reason.into())
    }
}
