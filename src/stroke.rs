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

use crate::{
    geometry::{self, BoundingBox},
    point::GesturePoint,
};
use serde_derive::{Deserialize, Serialize};
use tracing::debug;

/// One continuous pointer path, ordered by recording time
/// (or by arc length once resampled).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureStroke {
    pub points: Vec<GesturePoint>,
}

impl GestureStroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a sampled position to the stroke
    pub fn add_point(&mut self, x: f64, y: f64) {
        self.points.push(GesturePoint::new(x, y));
    }

    /// Multiplies every point by `factor` in place.
    /// A factor of 0 collapses the stroke onto the origin.
    pub fn scale_stroke(&mut self, factor: f64) {
        for p in &mut self.points {
            p.scale(factor);
        }
    }

    /// Subtracts the offset from every point in place
    pub fn center_stroke(&mut self, offset_x: f64, offset_y: f64) {
        for p in &mut self.points {
            p.x -= offset_x;
            p.y -= offset_y;
        }
    }

    /// Rotates every point around the origin
    pub fn rotate_stroke(&mut self, radians: f64) {
        for p in &mut self.points {
            *p = geometry::rotate_point(p, radians);
        }
    }

    /// Polyline length of the stroke
    pub fn stroke_length(&self) -> f64 {
        Self::points_length(&self.points)
    }

    /// Polyline length of an arbitrary point list
    pub fn points_length(points: &[GesturePoint]) -> f64 {
        geometry::path_length(points)
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::of(&self.points)
    }

    pub fn min_x(&self) -> Option<f64> {
        self.bounding_box().map(|bb| bb.min_x)
    }

    pub fn max_x(&self) -> Option<f64> {
        self.bounding_box().map(|bb| bb.max_x)
    }

    pub fn min_y(&self) -> Option<f64> {
        self.bounding_box().map(|bb| bb.min_y)
    }

    pub fn max_y(&self) -> Option<f64> {
        self.bounding_box().map(|bb| bb.max_y)
    }

    /// Resamples the stroke into `sample_points` equally long intervals,
    /// i.e. `sample_points + 1` points.
    ///
    /// Each new point is placed one interval of arc length after the previous
    /// one, interpolating on the original segment that straddles that distance.
    /// The scan over the original points never restarts: it resumes at the
    /// segment where the previous point was found.
    ///
    /// Returns `false` and leaves the stroke untouched when it has at most one
    /// point or zero length.
    pub fn normalize_stroke(&mut self, sample_points: usize) -> bool {
        let total_length = self.stroke_length();
        if self.points.len() <= 1 || total_length == 0.0 || sample_points == 0 {
            debug!(
                points = self.points.len(),
                length = total_length,
                "stroke cannot be resampled"
            );
            return false;
        }

        let target_stroke_size = total_length / sample_points as f64;
        let mut new_points = Vec::with_capacity(sample_points + 1);
        new_points.push(self.points[0]);

        let mut last = self.points[0];
        let mut index = 1;
        while new_points.len() <= sample_points {
            let mut walked = 0.0;
            let mut from = last;
            let mut found = None;
            while index < self.points.len() {
                let to = self.points[index];
                let d = geometry::euclidean_distance(&from, &to);
                if walked + d >= target_stroke_size {
                    // walked < target_stroke_size, so d > 0 here
                    let t = (target_stroke_size - walked) / d;
                    found = Some(GesturePoint::new(
                        from.x + (to.x - from.x) * t,
                        from.y + (to.y - from.y) * t,
                    ));
                    break;
                }
                walked += d;
                from = to;
                index += 1;
            }

            match found {
                Some(p) => {
                    new_points.push(p);
                    last = p;
                }
                None => {
                    // accumulated rounding left us short of the end
                    new_points.push(self.points[self.points.len() - 1]);
                    break;
                }
            }
        }

        self.points = new_points;
        true
    }
}

impl<P: Into<GesturePoint>> FromIterator<P> for GestureStroke {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().map(Into::into).collect(),
        }
    }
}
