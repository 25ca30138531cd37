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

//! Trains a handful of templates, replays some touch traces through the
//! capture pipeline and prints what was recognized.
//!
//! Run with `RUST_LOG=gesture_matcher=debug` to see the library's logs.

use gesture_matcher::{
    Gesture, GestureCapture, GestureDatabase, GestureError, RecognizerConfig, Recognition,
};
use std::f64::consts::PI;
use tracing_subscriber::EnvFilter;

fn template(name: &str, strokes: &[Vec<(f64, f64)>], samples: usize) -> Result<Gesture, GestureError> {
    let mut g = Gesture::named(name);
    for stroke in strokes {
        g.add_stroke(stroke.iter().copied())?;
    }
    g.normalize(samples);
    Ok(g)
}

fn circle(n: usize) -> Vec<(f64, f64)> {
    (0..=n)
        .map(|i| {
            let a = 2.0 * PI * i as f64 / n as f64;
            (a.cos(), a.sin())
        })
        .collect()
}

/// Feeds one trace per contact; all contacts go down before any moves.
fn replay(
    capture: &mut GestureCapture,
    traces: &[Vec<(f64, f64)>],
) -> Result<Option<Gesture>, GestureError> {
    for (id, trace) in traces.iter().enumerate() {
        let (x, y) = trace[0];
        capture.touch_down(id as u64, x, y)?;
    }
    for (id, trace) in traces.iter().enumerate() {
        for &(x, y) in &trace[1..] {
            capture.touch_move(id as u64, x, y)?;
        }
    }
    let mut finished = None;
    for (id, trace) in traces.iter().enumerate() {
        let (x, y) = trace[trace.len() - 1];
        finished = capture.touch_up(id as u64, x, y)?;
    }
    Ok(finished)
}

fn main() -> Result<(), GestureError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = RecognizerConfig::default();
    let samples = config.stroke_samples;
    let mut db = GestureDatabase::with_config(config.clone())?;
    db.add_gesture(template("L", &[vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]], samples)?);
    db.add_gesture(template("circle", &[circle(24)], samples)?);
    db.add_gesture(template(
        "two-finger swipe",
        &[vec![(0.0, 0.0), (1.0, 0.0)], vec![(0.0, 0.3), (1.0, 0.3)]],
        samples,
    )?);

    let traces: Vec<(&str, Vec<Vec<(f64, f64)>>)> = vec![
        ("big L", vec![vec![(200.0, 50.0), (400.0, 50.0), (400.0, 250.0)]]),
        (
            "wobbly circle",
            vec![circle(60)
                .into_iter()
                .enumerate()
                .map(|(i, (x, y))| {
                    let r = 80.0 + if i % 2 == 0 { 2.0 } else { -2.0 };
                    (300.0 + r * x, 300.0 + r * y)
                })
                .collect()],
        ),
        (
            "swipe",
            vec![vec![(10.0, 10.0), (90.0, 12.0)], vec![(10.0, 40.0), (90.0, 41.0)]],
        ),
        ("zigzag", vec![vec![(0.0, 0.0), (3.0, 9.0), (6.0, 0.0), (9.0, 9.0)]]),
    ];

    let mut capture = GestureCapture::new(config.clone())?;
    for (label, strokes) in &traces {
        let Some(gesture) = replay(&mut capture, strokes)? else {
            continue;
        };
        match db.find_or_mismatch_default(&gesture)? {
            Some(Recognition::Matched(m)) => {
                println!("{label}: {} ({:.3})", m.name().unwrap_or("?"), m.score);
            }
            Some(Recognition::Unmatched { token }) => {
                println!("{label}: no match, new template token:\n  {token}");
            }
            None => println!("{label}: empty gesture"),
        }
    }

    println!("\n{}", db.to_ron()?);
    Ok(())
}
