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

//! Recognizer configuration.
//!
//! [`RecognizerConfig`] gathers the knobs shared by capture, normalization and
//! matching, along with a couple of presets.
//!
//! ```
//! use gesture_matcher::RecognizerConfig;
//!
//! let config = RecognizerConfig::default().with_min_score(0.85);
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{GestureError, Result};

/// Default number of resampling intervals per stroke.
pub const DEFAULT_STROKE_SAMPLES: usize = 32;
/// Default equality tolerance around a perfect score of 1.
pub const DEFAULT_TOLERANCE: f64 = 0.1;
/// Default score a template must strictly exceed to be reported as a match.
pub const DEFAULT_MIN_SCORE: f64 = 0.9;
/// Default DEFLATE level used for gesture tokens.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 9;

/// Configuration for gesture capture and matching.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizerConfig {
    /// Number of arc-length intervals each stroke is resampled to.
    pub stroke_samples: usize,

    /// Tolerance used by gesture equality: `score` in `(1 - t, 1 + t)`.
    pub tolerance: f64,

    /// Score a template has to strictly exceed to be reported.
    pub min_score: f64,

    /// DEFLATE level (0-9) for serialized tokens.
    pub compression_level: u32,

    /// Rotate candidates onto each template before scoring.
    pub rotation_invariant: bool,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            stroke_samples: DEFAULT_STROKE_SAMPLES,
            tolerance: DEFAULT_TOLERANCE,
            min_score: DEFAULT_MIN_SCORE,
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            rotation_invariant: false,
        }
    }
}

impl RecognizerConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.stroke_samples == 0 {
            return Err(GestureError::invalid_config(
                "stroke_samples must be at least 1",
            ));
        }
        if !(self.tolerance > 0.0 && self.tolerance <= 1.0) {
            return Err(GestureError::invalid_config(
                "tolerance must be in (0, 1]",
            ));
        }
        if !self.min_score.is_finite() {
            return Err(GestureError::invalid_config("min_score must be finite"));
        }
        if self.compression_level > 9 {
            return Err(GestureError::invalid_config(
                "compression_level must be in 0..=9",
            ));
        }
        Ok(())
    }

    /// Preset that only accepts close matches, sampled more finely.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            stroke_samples: 64,
            tolerance: 0.05,
            min_score: 0.95,
            ..Self::default()
        }
    }

    /// Preset for sloppy input such as finger drawing on small screens.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            tolerance: 0.2,
            min_score: 0.8,
            rotation_invariant: true,
            ..Self::default()
        }
    }

    /// Set the number of resampling intervals.
    #[must_use]
    pub const fn with_stroke_samples(mut self, samples: usize) -> Self {
        self.stroke_samples = samples;
        self
    }

    /// Set the equality tolerance.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the match threshold.
    #[must_use]
    pub const fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Set the token compression level.
    #[must_use]
    pub const fn with_compression_level(mut self, level: u32) -> Self {
        self.compression_level = level;
        self
    }

    /// Enable or disable rotation-invariant matching.
    #[must_use]
    pub const fn with_rotation_invariant(mut self, enabled: bool) -> Self {
        self.rotation_invariant = enabled;
        self
    }
}
