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

//! Multi-stroke gesture matching.
//!
//! Raw pointer paths are turned into resolution-independent templates
//! (uniform scaling, centering, arc-length resampling) and compared with a
//! normalized dot product that behaves like a cosine similarity.
//!
//! ```
//! use gesture_matcher::{Gesture, GestureDatabase};
//!
//! let mut l_shape = Gesture::named("L");
//! l_shape.add_stroke([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)])?;
//! l_shape.normalize(32);
//!
//! let mut db = GestureDatabase::new();
//! db.add_gesture(l_shape);
//!
//! let mut drawn = Gesture::new();
//! drawn.add_stroke([(3.0, 3.0), (43.0, 3.0), (43.0, 43.0)])?;
//! drawn.normalize(32);
//!
//! let found = db.find(&drawn, 0.9).expect("an L");
//! assert_eq!(found.name(), Some("L"));
//!
//! let token = db.gesture_to_str(&drawn)?;
//! let restored = db.str_to_gesture(&token)?;
//! assert!(restored.get_score(&drawn) > 0.99);
//! # Ok::<(), gesture_matcher::GestureError>(())
//! ```

pub mod capture;
pub mod codec;
pub mod config;
pub mod database;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod point;
pub mod stroke;

pub use capture::GestureCapture;
pub use config::{RecognizerConfig, DEFAULT_STROKE_SAMPLES};
pub use database::{GestureDatabase, GestureMatch, Recognition};
pub use error::{GestureError, Result};
pub use gesture::{Gesture, GestureProduct};
pub use point::GesturePoint;
pub use stroke::GestureStroke;
