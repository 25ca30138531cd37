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

//! Turning touch events into gestures.
//!
//! [`GestureCapture`] buffers the samples of every contact that is down. All
//! contacts that overlap in time belong to the same gesture, one stroke each,
//! in the order they went down. When the last of them lifts, the strokes are
//! assembled into a normalized [`Gesture`] ready for
//! [`GestureDatabase::find`](crate::GestureDatabase::find).

use crate::{
    config::RecognizerConfig,
    error::{GestureError, Result},
    gesture::Gesture,
    point::GesturePoint,
};
use tracing::debug;

#[derive(Debug)]
struct Contact {
    id: u64,
    points: Vec<GesturePoint>,
    lifted: bool,
}

/// Per-contact point buffers for the gesture being drawn.
#[derive(Debug)]
pub struct GestureCapture {
    config: RecognizerConfig,
    contacts: Vec<Contact>,
}

impl GestureCapture {
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn new(config: RecognizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            contacts: Vec::new(),
        })
    }

    /// Number of contacts currently down
    pub fn active_contacts(&self) -> usize {
        self.contacts.iter().filter(|c| !c.lifted).count()
    }

    /// True while a gesture is being drawn
    pub fn is_recording(&self) -> bool {
        !self.contacts.is_empty()
    }

    /// Drops everything recorded so far.
    pub fn cancel(&mut self) {
        self.contacts.clear();
    }

    fn contact_mut(&mut self, id: u64) -> Result<&mut Contact> {
        self.contacts
            .iter_mut()
            .find(|c| c.id == id && !c.lifted)
            .ok_or(GestureError::UnknownContact(id))
    }

    /// Starts a stroke for contact `id` at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Fails if the contact is already down or the position is not finite.
    pub fn touch_down(&mut self, id: u64, x: f64, y: f64) -> Result<()> {
        if self.contacts.iter().any(|c| c.id == id && !c.lifted) {
            return Err(GestureError::DuplicateContact(id));
        }
        let p = checked(0, x, y)?;
        self.contacts.push(Contact {
            id,
            points: vec![p],
            lifted: false,
        });
        Ok(())
    }

    /// Appends a sample to the stroke of contact `id`.
    ///
    /// # Errors
    ///
    /// Fails if the contact is not down or the position is not finite.
    pub fn touch_move(&mut self, id: u64, x: f64, y: f64) -> Result<()> {
        let contact = self.contact_mut(id)?;
        let p = checked(contact.points.len(), x, y)?;
        contact.points.push(p);
        Ok(())
    }

    /// Ends the stroke of contact `id`. Once no contact is left down, returns
    /// the finished gesture, normalized with the configured sample count.
    ///
    /// A gesture whose normalization failed (a tap, say) is still returned:
    /// it simply never matches.
    ///
    /// # Errors
    ///
    /// Fails if the contact is not down or the position is not finite.
    pub fn touch_up(&mut self, id: u64, x: f64, y: f64) -> Result<Option<Gesture>> {
        let contact = self.contact_mut(id)?;
        let p = checked(contact.points.len(), x, y)?;
        if contact.points.last() != Some(&p) {
            contact.points.push(p);
        }
        contact.lifted = true;

        if self.active_contacts() > 0 {
            return Ok(None);
        }

        let mut gesture = Gesture::with_tolerance(self.config.tolerance);
        for contact in self.contacts.drain(..) {
            gesture.add_stroke(contact.points)?;
        }
        let normalized = gesture.normalize(self.config.stroke_samples);
        debug!(
            strokes = gesture.stroke_count(),
            normalized, "gesture captured"
        );
        Ok(Some(gesture))
    }
}

fn checked(index: usize, x: f64, y: f64) -> Result<GesturePoint> {
    let p = GesturePoint::new(x, y);
    if p.is_finite() {
        Ok(p)
    } else {
        Err(GestureError::non_finite(index, x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::GestureProduct;

    fn capture() -> GestureCapture {
        GestureCapture::new(RecognizerConfig::default()).unwrap()
    }

    #[test]
    fn test_single_contact() {
        let mut cap = capture();
        cap.touch_down(1, 0.0, 0.0).unwrap();
        cap.touch_move(1, 5.0, 0.0).unwrap();
        cap.touch_move(1, 10.0, 0.0).unwrap();
        let g = cap.touch_up(1, 10.0, 10.0).unwrap().unwrap();
        assert_eq!(g.stroke_count(), 1);
        assert_eq!(g.strokes[0].len(), 33);
        assert!(g.gesture_product().value().is_some());
        assert!(!cap.is_recording());
    }

    #[test]
    fn test_overlapping_contacts_share_a_gesture() {
        let mut cap = capture();
        cap.touch_down(7, 0.0, 0.0).unwrap();
        cap.touch_down(3, 0.0, 10.0).unwrap();
        cap.touch_move(7, 10.0, 0.0).unwrap();
        cap.touch_move(3, 10.0, 10.0).unwrap();
        assert!(cap.touch_up(7, 10.0, 0.0).unwrap().is_none());
        assert_eq!(cap.active_contacts(), 1);
        let g = cap.touch_up(3, 10.0, 10.0).unwrap().unwrap();
        assert_eq!(g.stroke_count(), 2);
        // strokes keep the order the contacts went down in
        assert!(g.strokes[0].points[0].y < g.strokes[1].points[0].y);
    }

    #[test]
    fn test_tap_fails_normalization() {
        let mut cap = capture();
        cap.touch_down(1, 4.0, 4.0).unwrap();
        let g = cap.touch_up(1, 4.0, 4.0).unwrap().unwrap();
        assert_eq!(g.gesture_product(), GestureProduct::Failed);
    }

    #[test]
    fn test_contact_errors() {
        let mut cap = capture();
        assert!(matches!(
            cap.touch_move(9, 0.0, 0.0),
            Err(GestureError::UnknownContact(9))
        ));
        cap.touch_down(1, 0.0, 0.0).unwrap();
        assert!(matches!(
            cap.touch_down(1, 1.0, 1.0),
            Err(GestureError::DuplicateContact(1))
        ));
        assert!(cap.touch_move(1, f64::INFINITY, 0.0).unwrap_err().is_validation());
        cap.cancel();
        assert!(!cap.is_recording());
    }
}
