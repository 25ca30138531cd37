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
    codec,
    config::RecognizerConfig,
    error::{GestureError, Result},
    gesture::Gesture,
};
use ron::ser::{to_string_pretty, PrettyConfig};
use tracing::{debug, trace};

/// Best template found for a candidate gesture.
#[derive(Debug, Clone, Copy)]
pub struct GestureMatch<'a> {
    pub score: f64,
    pub gesture: &'a Gesture,
}

impl GestureMatch<'_> {
    /// Label of the matched template, if it has one
    pub fn name(&self) -> Option<&str> {
        self.gesture.name.as_deref()
    }
}

/// Outcome of [`GestureDatabase::find_or_mismatch`].
#[derive(Debug, Clone)]
pub enum Recognition<'a> {
    Matched(GestureMatch<'a>),
    /// Nothing scored above the threshold; the candidate's token, ready to be
    /// stored as a new template.
    Unmatched { token: String },
}

/// A flat, insertion-ordered list of normalized templates.
/// Lookup is a linear scan.
#[derive(Debug, Clone, Default)]
pub struct GestureDatabase {
    gestures: Vec<Gesture>,
    config: RecognizerConfig,
}

impl GestureDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn with_config(config: RecognizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            gestures: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Appends a template. The gesture must already be normalized.
    pub fn add_gesture(&mut self, gesture: Gesture) {
        self.gestures.push(gesture);
    }

    pub fn gestures(&self) -> &[Gesture] {
        &self.gestures
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gesture> {
        self.gestures.iter()
    }

    pub fn len(&self) -> usize {
        self.gestures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gestures.is_empty()
    }

    fn score(&self, template: &Gesture, gesture: &Gesture) -> f64 {
        if self.config.rotation_invariant {
            template.get_score_rotation_invariant(gesture)
        } else {
            template.get_score(gesture)
        }
    }

    /// Returns the best template scoring strictly above `min_score`.
    ///
    /// A template only replaces the current best when it scores strictly
    /// higher, so ties keep the earlier template and a score equal to
    /// `min_score` never matches. Returns `None` for a gesture without strokes.
    pub fn find(&self, gesture: &Gesture, min_score: f64) -> Option<GestureMatch<'_>> {
        if gesture.is_empty() {
            return None;
        }

        let mut best_score = min_score;
        let mut best = None;
        for (i, template) in self.gestures.iter().enumerate() {
            let score = self.score(template, gesture);
            trace!(template = i, score, "scored template");
            if score <= best_score {
                continue;
            }
            best_score = score;
            best = Some(template);
        }

        debug!(
            templates = self.gestures.len(),
            matched = best.is_some(),
            best_score,
            "gesture lookup"
        );
        best.map(|gesture| GestureMatch {
            score: best_score,
            gesture,
        })
    }

    /// [`GestureDatabase::find`] with the configured `min_score`.
    pub fn find_default(&self, gesture: &Gesture) -> Option<GestureMatch<'_>> {
        self.find(gesture, self.config.min_score)
    }

    /// Like [`GestureDatabase::find`], but hands back the candidate's token
    /// when nothing matches so unmatched input can be harvested as training
    /// data.
    ///
    /// # Errors
    ///
    /// Fails only if the candidate cannot be serialized.
    pub fn find_or_mismatch(
        &self,
        gesture: &Gesture,
        min_score: f64,
    ) -> Result<Option<Recognition<'_>>> {
        if gesture.is_empty() {
            return Ok(None);
        }
        match self.find(gesture, min_score) {
            Some(m) => Ok(Some(Recognition::Matched(m))),
            None => Ok(Some(Recognition::Unmatched {
                token: self.gesture_to_str(gesture)?,
            })),
        }
    }

    /// [`GestureDatabase::find_or_mismatch`] with the configured `min_score`.
    ///
    /// # Errors
    ///
    /// Fails only if the candidate cannot be serialized.
    pub fn find_or_mismatch_default(&self, gesture: &Gesture) -> Result<Option<Recognition<'_>>> {
        self.find_or_mismatch(gesture, self.config.min_score)
    }

    /// Serializes one gesture to an ASCII token.
    ///
    /// # Errors
    ///
    /// Fails if serialization or compression fails.
    pub fn gesture_to_str(&self, gesture: &Gesture) -> Result<String> {
        codec::encode(gesture, self.config.compression_level)
    }

    /// Restores a gesture from a token produced by [`GestureDatabase::gesture_to_str`].
    ///
    /// # Errors
    ///
    /// Fails on a malformed token.
    pub fn str_to_gesture(&self, data: &str) -> Result<Gesture> {
        codec::decode(data)
    }

    /// Exports every template as a RON list.
    ///
    /// # Errors
    ///
    /// Fails if RON serialization fails.
    pub fn to_ron(&self) -> Result<String> {
        to_string_pretty(&self.gestures, PrettyConfig::default()).map_err(GestureError::ron)
    }

    /// Builds a database from a RON list written by [`GestureDatabase::to_ron`].
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration or malformed RON.
    pub fn from_ron(data: &str, config: RecognizerConfig) -> Result<Self> {
        let mut db = Self::with_config(config)?;
        db.gestures = ron::from_str(data).map_err(GestureError::ron)?;
        Ok(db)
    }
}

impl Extend<Gesture> for GestureDatabase {
    fn extend<I: IntoIterator<Item = Gesture>>(&mut self, iter: I) {
        self.gestures.extend(iter);
    }
}

impl<'a> IntoIterator for &'a GestureDatabase {
    type Item = &'a Gesture;
    type IntoIter = std::slice::Iter<'a, Gesture>;

    fn into_iter(self) -> Self::IntoIter {
        self.gestures.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(name: &str, points: &[(f64, f64)]) -> Gesture {
        let mut g = Gesture::named(name);
        g.add_stroke(points.iter().copied()).unwrap();
        assert!(g.normalize(32));
        g
    }

    fn database() -> GestureDatabase {
        let mut db = GestureDatabase::new();
        db.add_gesture(template("L", &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]));
        db.add_gesture(template("mirror L", &[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0)]));
        db.add_gesture(template("line", &[(0.0, 0.0), (10.0, 10.0)]));
        db
    }

    #[test]
    fn test_find_best_match() {
        let db = database();
        let candidate = template("", &[(5.0, 5.0), (25.0, 5.0), (25.0, 25.0)]);
        let found = db.find(&candidate, 0.9).unwrap();
        assert_eq!(found.name(), Some("L"));
        assert!(found.score > 0.99);
    }

    #[test]
    fn test_find_empty_gesture() {
        let db = database();
        assert!(db.find(&Gesture::new(), 0.0).is_none());
        assert!(db.find_or_mismatch(&Gesture::new(), 0.0).unwrap().is_none());
    }

    #[test]
    fn test_threshold_is_strict() {
        let db = database();
        let candidate = template("", &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let best = db
            .gestures()
            .iter()
            .map(|t| t.get_score(&candidate))
            .fold(f64::MIN, f64::max);

        assert!(db.find(&candidate, best).is_none());
        assert!(db.find(&candidate, best - 1e-9).is_some());
    }

    #[test]
    fn test_ties_keep_first_template() {
        let mut db = GestureDatabase::new();
        db.add_gesture(template("first", &[(0.0, 0.0), (1.0, 0.0)]));
        db.add_gesture(template("second", &[(0.0, 0.0), (1.0, 0.0)]));
        let candidate = template("", &[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(db.find(&candidate, 0.5).unwrap().name(), Some("first"));
    }

    #[test]
    fn test_failed_templates_never_match() {
        let mut db = GestureDatabase::new();
        let mut tap = Gesture::named("tap");
        tap.add_stroke([(1.0, 1.0)]).unwrap();
        assert!(!tap.normalize(32));
        db.add_gesture(tap.clone());
        assert!(db.find(&tap, -1.0).is_none());
    }

    #[test]
    fn test_find_or_mismatch() {
        let db = database();
        let zigzag = template("", &[(0.0, 0.0), (3.0, 9.0), (6.0, 0.0), (9.0, 9.0)]);
        match db.find_or_mismatch(&zigzag, 0.99).unwrap() {
            Some(Recognition::Unmatched { token }) => {
                let back = db.str_to_gesture(&token).unwrap();
                assert!(back.get_score(&zigzag) > 0.999);
            }
            other => panic!("expected a mismatch token, got {other:?}"),
        }

        let l = template("", &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        assert!(matches!(
            db.find_or_mismatch(&l, 0.9).unwrap(),
            Some(Recognition::Matched(_))
        ));
    }

    #[test]
    fn test_configured_threshold() {
        fn shape(name: &str, points: &[(f64, f64)], samples: usize) -> Gesture {
            let mut g = Gesture::named(name);
            g.add_stroke(points.iter().copied()).unwrap();
            assert!(g.normalize(samples));
            g
        }
        // an L with a bent first leg scores about 0.935 against the template
        let l = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)];
        let bent = [(0.0, 0.0), (10.0, 5.0), (10.0, 10.0)];

        let mut standard = GestureDatabase::new();
        let mut strict = GestureDatabase::with_config(RecognizerConfig::strict()).unwrap();
        for db in [&mut standard, &mut strict] {
            let samples = db.config().stroke_samples;
            db.add_gesture(shape("L", &l, samples));
        }

        let candidate = shape("", &bent, standard.config().stroke_samples);
        let found = standard.find_default(&candidate).unwrap();
        assert!(found.score > 0.9 && found.score < 0.95, "{}", found.score);
        assert!(matches!(
            standard.find_or_mismatch_default(&candidate).unwrap(),
            Some(Recognition::Matched(_))
        ));

        let candidate = shape("", &bent, strict.config().stroke_samples);
        assert!(strict.find_default(&candidate).is_none());
        assert!(matches!(
            strict.find_or_mismatch_default(&candidate).unwrap(),
            Some(Recognition::Unmatched { .. })
        ));
    }

    #[test]
    fn test_rotation_invariant_lookup() {
        let config = RecognizerConfig::default().with_rotation_invariant(true);
        let mut db = GestureDatabase::with_config(config).unwrap();
        db.add_gesture(template("L", &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]));
        let turned = template("", &[(0.0, 0.0), (0.0, 10.0), (-10.0, 10.0)]);
        assert!(db.find(&turned, 0.9).is_some());
        assert!(database().find(&turned, 0.9).is_none());
    }

    #[test]
    fn test_ron_round_trip() {
        let db = database();
        let text = db.to_ron().unwrap();
        let back = GestureDatabase::from_ron(&text, RecognizerConfig::default()).unwrap();
        assert_eq!(back.len(), 3);
        let names: Vec<_> = back.iter().filter_map(|g| g.name.as_deref()).collect();
        assert_eq!(names, ["L", "mirror L", "line"]);
        assert!(GestureDatabase::from_ron("[(", RecognizerConfig::default()).is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RecognizerConfig::default().with_compression_level(12);
        assert!(GestureDatabase::with_config(config).is_err());
    }
}
