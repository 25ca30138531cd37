/*
 * Stroke-template gesture matcher (rust version)
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Copyright (c) 2025, Ferran Pujol Camins. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the name of the copyright holder nor the names of its
 *      contributors may be used to endorse or promote products derived from
 *      this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Ferran Pujol Camins BE LIABLE FOR
 * ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT
 * LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
 * OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
 * SUCH DAMAGE.
**/

//! Error types for gesture recording and persistence.
//!
//! Degenerate geometry (a tap with no movement, a stroke of identical points)
//! is not an error here: it surfaces as a failed normalization and a score of
//! `-1.0`. Errors are reserved for malformed input and broken tokens.

use thiserror::Error;

/// Main error type for gesture operations.
#[derive(Error, Debug)]
pub enum GestureError {
    /// A point row did not hold exactly two coordinates.
    #[error("Invalid point at index {index}: expected 2 coordinates, got {arity}")]
    InvalidPoint { index: usize, arity: usize },

    /// A point coordinate was NaN or infinite.
    #[error("Non-finite coordinate at index {index}: ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },

    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The token is not valid base64.
    #[error("Invalid gesture token: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Compressing or inflating the payload failed.
    #[error("Compression error: {0}")]
    Compression(#[from] std::io::Error),

    /// The inflated payload is not a serialized gesture.
    #[error("Encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    /// Reading or writing a RON template list failed.
    #[error("RON error: {0}")]
    Ron(String),

    /// A capture event referenced a contact that is not down.
    #[error("Unknown contact id {0}")]
    UnknownContact(u64),

    /// A contact went down while already down.
    #[error("Contact id {0} is already down")]
    DuplicateContact(u64),
}

/// Result type alias for gesture operations.
pub type Result<T> = std::result::Result<T, GestureError>;

impl GestureError {
    /// Create an invalid point error.
    #[must_use]
    pub const fn invalid_point(index: usize, arity: usize) -> Self {
        Self::InvalidPoint { index, arity }
    }

    /// Create a non-finite coordinate error.
    #[must_use]
    pub const fn non_finite(index: usize, x: f64, y: f64) -> Self {
        Self::NonFiniteCoordinate { index, x, y }
    }

    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a RON error.
    #[must_use]
    pub fn ron(msg: impl ToString) -> Self {
        Self::Ron(msg.to_string())
    }

    /// True for errors raised while validating recorded points.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidPoint { .. } | Self::NonFiniteCoordinate { .. }
        )
    }
}
