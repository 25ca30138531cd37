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
    config::DEFAULT_TOLERANCE,
    error::{GestureError, Result},
    geometry::{self, BoundingBox},
    point::GesturePoint,
    stroke::GestureStroke,
};
use serde_derive::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Cached self dot-product of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum GestureProduct {
    /// `normalize` has not run yet.
    #[default]
    NotNormalized,
    /// Normalization failed on degenerate input; the gesture never matches.
    Failed,
    Value(f64),
}

impl GestureProduct {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            _ => None,
        }
    }
}

/// An ordered set of strokes forming one recognizable shape.
///
/// Stroke `i` of one gesture is only ever compared with stroke `i` of another,
/// and point `j` with point `j`: there is no alignment search. Call
/// [`Gesture::normalize`] once every stroke is recorded; until then every
/// comparison scores `-1`.
///
/// Gestures deliberately have no ordering, only a tolerance-based equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gesture {
    /// Optional template label
    pub name: Option<String>,
    /// Equality accepts scores in `(1 - tolerance, 1 + tolerance)`
    pub tolerance: f64,
    pub strokes: Vec<GestureStroke>,
    gesture_product: GestureProduct,
}

impl Default for Gesture {
    fn default() -> Self {
        Self::with_tolerance(DEFAULT_TOLERANCE)
    }
}

impl Gesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// `tolerance` must lie in `(0, 1]`, as [`RecognizerConfig::validate`]
    /// requires; anything else makes equality always false.
    ///
    /// [`RecognizerConfig::validate`]: crate::RecognizerConfig::validate
    pub fn with_tolerance(tolerance: f64) -> Self {
        debug_assert!(
            tolerance > 0.0 && tolerance <= 1.0,
            "tolerance must be in (0, 1], got {tolerance}"
        );
        Self {
            name: None,
            tolerance,
            strokes: Vec::new(),
            gesture_product: GestureProduct::NotNormalized,
        }
    }

    /// Constructs an empty gesture carrying a template label
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn gesture_product(&self) -> GestureProduct {
        self.gesture_product
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Total number of points over every stroke
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(GestureStroke::len).sum()
    }

    /// Starts a new empty stroke for live recording.
    pub fn add_empty_stroke(&mut self) -> &mut GestureStroke {
        self.strokes.push(GestureStroke::new());
        let last = self.strokes.len() - 1;
        &mut self.strokes[last]
    }

    /// Appends a stroke built from coordinate pairs or points.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::NonFiniteCoordinate`] if any coordinate is NaN or
    /// infinite. Nothing is appended in that case.
    pub fn add_stroke<I, P>(&mut self, points: I) -> Result<&mut GestureStroke>
    where
        I: IntoIterator<Item = P>,
        P: Into<GesturePoint>,
    {
        let mut stroke = GestureStroke::new();
        for (index, p) in points.into_iter().map(Into::into).enumerate() {
            if !p.is_finite() {
                return Err(GestureError::non_finite(index, p.x, p.y));
            }
            stroke.points.push(p);
        }
        self.strokes.push(stroke);
        let last = self.strokes.len() - 1;
        Ok(&mut self.strokes[last])
    }

    /// Appends a stroke from untyped coordinate rows, e.g. decoded from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::InvalidPoint`] for a row that does not hold
    /// exactly two values, or [`GestureError::NonFiniteCoordinate`].
    pub fn add_stroke_from_rows<R: AsRef<[f64]>>(
        &mut self,
        rows: &[R],
    ) -> Result<&mut GestureStroke> {
        let mut points = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            match *row.as_ref() {
                [x, y] => points.push(GesturePoint::new(x, y)),
                ref other => return Err(GestureError::invalid_point(index, other.len())),
            }
        }
        self.add_stroke(points)
    }

    /// Normalizes the gesture so it can be compared:
    /// uniform scale from the combined bounding box, centering on the centroid
    /// of every point, resampling of each stroke, and caching of the
    /// self dot-product.
    ///
    /// Returns `false` on degenerate input (no points, or zero extent), which
    /// leaves the gesture permanently non-matching.
    pub fn normalize(&mut self, stroke_samples: usize) -> bool {
        if !self.scale_gesture() || !self.center_gesture() {
            self.gesture_product = GestureProduct::Failed;
            return false;
        }

        for (i, stroke) in self.strokes.iter_mut().enumerate() {
            if !stroke.normalize_stroke(stroke_samples) {
                debug!(stroke = i, "stroke kept at its recorded resolution");
            }
        }

        let product = sum_of_products(&self.strokes, &self.strokes);
        if product > 0.0 {
            self.gesture_product = GestureProduct::Value(product);
            true
        } else {
            debug!(product, "gesture has no energy after normalization");
            self.gesture_product = GestureProduct::Failed;
            false
        }
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        self.strokes
            .iter()
            .filter_map(GestureStroke::bounding_box)
            .reduce(BoundingBox::union)
    }

    /// Performs scale normalization with shape preservation, one factor for all strokes
    fn scale_gesture(&mut self) -> bool {
        let Some(bb) = self.bounding_box() else {
            debug!("gesture has no points");
            return false;
        };
        let extent = bb.extent();
        if extent == 0.0 || !extent.is_finite() {
            debug!(extent, "gesture has zero extent");
            return false;
        }
        let factor = 1.0 / extent;
        for stroke in &mut self.strokes {
            stroke.scale_stroke(factor);
        }
        true
    }

    /// Translates every stroke so that the centroid of all points lands on the origin
    fn center_gesture(&mut self) -> bool {
        let total = self.point_count();
        if total == 0 {
            debug!("gesture has no points");
            return false;
        }
        let (sx, sy) = self
            .strokes
            .iter()
            .flat_map(|s| s.points.iter())
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        let (cx, cy) = (sx / total as f64, sy / total as f64);
        for stroke in &mut self.strokes {
            stroke.center_stroke(cx, cy);
        }
        true
    }

    /// Sum of `x1*x2 + y1*y2` over every point pair matched by stroke and point
    /// position. Returns -1 if stroke counts differ or either gesture is not
    /// successfully normalized.
    ///
    /// Strokes of different lengths only contribute their common prefix.
    pub fn dot_product(&self, comparison_gesture: &Gesture) -> f64 {
        if self.strokes.len() != comparison_gesture.strokes.len() {
            return -1.0;
        }
        if self.gesture_product.value().is_none()
            || comparison_gesture.gesture_product.value().is_none()
        {
            return -1.0;
        }
        sum_of_products(&self.strokes, &comparison_gesture.strokes)
    }

    /// Cosine-like similarity in `[-1, 1]`, 1 for identical normalized shapes.
    /// A negative dot product, including the -1 sentinel, is returned unscaled.
    pub fn get_score(&self, comparison_gesture: &Gesture) -> f64 {
        let score = self.dot_product(comparison_gesture);
        if score < 0.0 {
            return score;
        }
        match (
            self.gesture_product.value(),
            comparison_gesture.gesture_product.value(),
        ) {
            (Some(a), Some(b)) => score / (a * b).sqrt(),
            _ => -1.0,
        }
    }

    /// Angle that rotates the comparison gesture's first point onto this
    /// gesture's first point. Both gestures are assumed centered.
    pub fn rigid_rotation(&self, comparison_gesture: &Gesture) -> f64 {
        match (first_point(self), first_point(comparison_gesture)) {
            (Some(target), Some(source)) => geometry::angle_between(source, target),
            _ => 0.0,
        }
    }

    /// Returns a copy rotated around the origin. The cached product is kept
    /// since rotation preserves it.
    pub fn rotated(&self, radians: f64) -> Gesture {
        let mut g = self.clone();
        for stroke in &mut g.strokes {
            stroke.rotate_stroke(radians);
        }
        g
    }

    /// [`Gesture::get_score`] after rotating the comparison gesture into this
    /// gesture's frame.
    pub fn get_score_rotation_invariant(&self, comparison_gesture: &Gesture) -> f64 {
        let angle = self.rigid_rotation(comparison_gesture);
        self.get_score(&comparison_gesture.rotated(angle))
    }
}

fn first_point(g: &Gesture) -> Option<&GesturePoint> {
    g.strokes.first().and_then(|s| s.points.first())
}

fn sum_of_products(a: &[GestureStroke], b: &[GestureStroke]) -> f64 {
    let mut sum = 0.0;
    for (i, (s1, s2)) in a.iter().zip(b).enumerate() {
        if s1.len() != s2.len() {
            warn!(
                stroke = i,
                left = s1.len(),
                right = s2.len(),
                "comparing strokes of different resolution, extra points ignored"
            );
        }
        sum += s1
            .points
            .iter()
            .zip(&s2.points)
            .map(|(p1, p2)| p1.x * p2.x + p1.y * p2.y)
            .sum::<f64>();
    }
    sum
}

impl PartialEq for Gesture {
    fn eq(&self, other: &Self) -> bool {
        let score = self.get_score(other);
        score > 1.0 - self.tolerance && score < 1.0 + self.tolerance
    }
}
