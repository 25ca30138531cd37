//! End-to-end recognition tests: normalization invariants, scoring,
//! database thresholds and token persistence.

use gesture_matcher::{
    Gesture, GestureCapture, GestureDatabase, GestureProduct, GestureStroke, RecognizerConfig,
    Recognition,
};
use pretty_assertions::assert_eq;
use std::f64::consts::PI;

// =============================================================================
// SHAPE GENERATORS
// =============================================================================

fn l_shape(size: f64) -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (size, 0.0), (size, size)]
}

fn mirrored_l(size: f64) -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (0.0, size), (size, size)]
}

/// Samples `n` points on an arc of `sweep` radians.
fn arc(n: usize, radius: f64, sweep: f64) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let a = sweep * i as f64 / (n - 1) as f64;
            (radius * a.cos(), radius * a.sin())
        })
        .collect()
}

fn normalized(strokes: &[Vec<(f64, f64)>]) -> Gesture {
    let mut g = Gesture::new();
    for stroke in strokes {
        g.add_stroke(stroke.iter().copied()).unwrap();
    }
    assert!(g.normalize(32), "normalization failed for {strokes:?}");
    g
}

// =============================================================================
// RESAMPLING
// =============================================================================

#[test]
fn resampling_produces_fixed_point_count() {
    for n in [1, 2, 8, 31, 32, 100] {
        let mut stroke: GestureStroke = arc(17, 3.0, PI).into_iter().collect();
        assert!(stroke.normalize_stroke(n));
        assert!(
            stroke.len() == n || stroke.len() == n + 1,
            "{n} samples gave {} points",
            stroke.len()
        );
    }
}

#[test]
fn resampling_preserves_length() {
    let shapes = [arc(151, 50.0, 1.5 * PI), arc(40, 2.0, PI / 2.0), l_shape(7.0)];
    for points in shapes {
        let mut stroke: GestureStroke = points.into_iter().collect();
        let before = stroke.stroke_length();
        assert!(stroke.normalize_stroke(64));
        let after = stroke.stroke_length();
        assert!(
            ((after - before) / before).abs() < 0.01,
            "length changed from {before} to {after}"
        );
    }
}

#[test]
fn resampling_keeps_endpoints() {
    let mut stroke: GestureStroke = arc(25, 10.0, PI).into_iter().collect();
    let first = stroke.points[0];
    let last = *stroke.points.last().unwrap();
    assert!(stroke.normalize_stroke(32));
    assert_eq!(stroke.points[0], first);
    let end = stroke.points.last().unwrap();
    assert!((end.x - last.x).abs() < 1e-9 && (end.y - last.y).abs() < 1e-9);
}

// =============================================================================
// INVARIANCE
// =============================================================================

#[test]
fn scaled_gesture_matches() {
    let base = vec![(1.0, 2.0), (4.0, 9.0), (8.0, 3.0), (12.0, 11.0)];
    let g = normalized(&[base.clone()]);
    for k in [0.001, 0.5, 3.0, 250.0] {
        let scaled: Vec<_> = base.iter().map(|&(x, y)| (x * k, y * k)).collect();
        let score = g.get_score(&normalized(&[scaled]));
        assert!(score > 0.99, "scale {k} scored {score}");
    }
}

#[test]
fn translated_gesture_matches() {
    let base = vec![(1.0, 2.0), (4.0, 9.0), (8.0, 3.0), (12.0, 11.0)];
    let g = normalized(&[base.clone()]);
    for (dx, dy) in [(-500.0, 3.0), (0.25, 0.25), (1e4, -1e4)] {
        let moved: Vec<_> = base.iter().map(|&(x, y)| (x + dx, y + dy)).collect();
        let score = g.get_score(&normalized(&[moved]));
        assert!(score > 0.99, "offset ({dx}, {dy}) scored {score}");
    }
}

#[test]
fn multi_stroke_self_similarity() {
    let g = normalized(&[l_shape(10.0), arc(30, 4.0, PI)]);
    assert!((g.get_score(&g) - 1.0).abs() < 1e-12);
    assert!(g == g);
}

// =============================================================================
// SCORING
// =============================================================================

#[test]
fn scores_discriminate_shapes() {
    let g1 = normalized(&[l_shape(10.0)]);
    let g2 = normalized(&[l_shape(20.0)]);
    let g3 = normalized(&[mirrored_l(10.0)]);

    let same = g1.get_score(&g2);
    let different = g1.get_score(&g3);
    assert!(same > 0.95, "scaled L scored {same}");
    assert!(different < 0.8, "mirrored L scored {different}");
    assert!(different < same);
}

#[test]
fn stroke_count_mismatch_is_minus_one() {
    let one = normalized(&[l_shape(10.0)]);
    let two = normalized(&[l_shape(10.0), mirrored_l(10.0)]);
    assert_eq!(one.dot_product(&two), -1.0);
    assert_eq!(one.get_score(&two), -1.0);
}

#[test]
fn degenerate_gestures_never_score() {
    let good = normalized(&[l_shape(10.0)]);

    let mut tap = Gesture::new();
    tap.add_stroke([(3.0, 3.0)]).unwrap();
    assert!(!tap.normalize(32));

    let mut still = Gesture::new();
    still.add_stroke([(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)]).unwrap();
    assert!(!still.normalize(32));

    for g in [&tap, &still] {
        assert_eq!(g.gesture_product(), GestureProduct::Failed);
        assert_eq!(good.get_score(g), -1.0);
        assert_eq!(g.get_score(&good), -1.0);
    }
}

// =============================================================================
// DATABASE
// =============================================================================

fn trained() -> GestureDatabase {
    let mut db = GestureDatabase::new();
    for (name, points) in [
        ("L", l_shape(10.0)),
        ("mirror", mirrored_l(10.0)),
        ("arc", arc(20, 5.0, PI)),
    ] {
        let mut g = Gesture::named(name);
        g.add_stroke(points).unwrap();
        assert!(g.normalize(32));
        db.add_gesture(g);
    }
    db
}

#[test]
fn database_threshold_is_strict() {
    let db = trained();
    let candidate = normalized(&[l_shape(33.0)]);
    let best = db
        .iter()
        .map(|t| t.get_score(&candidate))
        .fold(f64::MIN, f64::max);

    assert!(db.find(&candidate, best).is_none());
    let found = db.find(&candidate, best - 1e-6).unwrap();
    assert_eq!(found.name(), Some("L"));
    assert_eq!(found.score, best);
}

#[test]
fn database_rejects_unknown_shapes() {
    let db = trained();
    let zigzag = normalized(&[vec![(0.0, 0.0), (3.0, 9.0), (6.0, 0.0), (9.0, 9.0)]]);
    assert!(db.find(&zigzag, 0.9).is_none());

    match db.find_or_mismatch(&zigzag, 0.9).unwrap() {
        Some(Recognition::Unmatched { token }) => {
            let harvested = db.str_to_gesture(&token).unwrap();
            assert_eq!(harvested.stroke_count(), 1);
        }
        other => panic!("expected a mismatch token, got {other:?}"),
    }
}

#[test]
fn token_round_trip() {
    let db = trained();
    let g = normalized(&[l_shape(10.0), arc(12, 1.0, PI / 3.0)]);
    let token = db.gesture_to_str(&g).unwrap();
    assert!(token.is_ascii());

    let back = db.str_to_gesture(&token).unwrap();
    assert_eq!(back.stroke_count(), g.stroke_count());
    assert!((g.get_score(&back) - 1.0).abs() < 1e-9);
}

#[test]
fn stored_templates_survive_ron_export() {
    let db = trained();
    let restored = GestureDatabase::from_ron(&db.to_ron().unwrap(), RecognizerConfig::default())
        .unwrap();
    let candidate = normalized(&[mirrored_l(4.0)]);
    assert_eq!(restored.find(&candidate, 0.9).unwrap().name(), Some("mirror"));
}

// =============================================================================
// CAPTURE
// =============================================================================

#[test]
fn captured_strokes_are_recognized() {
    let db = trained();
    let mut capture = GestureCapture::new(RecognizerConfig::default()).unwrap();

    capture.touch_down(42, 100.0, 100.0).unwrap();
    for i in 1..=20 {
        capture.touch_move(42, 100.0 + i as f64 * 3.0, 100.0).unwrap();
    }
    for i in 1..=20 {
        capture.touch_move(42, 160.0, 100.0 + i as f64 * 3.0).unwrap();
    }
    let gesture = capture.touch_up(42, 160.0, 160.0).unwrap().unwrap();

    let found = db.find(&gesture, 0.9).unwrap();
    assert_eq!(found.name(), Some("L"));
}
