use approx::assert_abs_diff_eq;
use std::f64::consts::FRAC_PI_2;

use tweenpath_animate::{CurveTween, Frame, FrameSink};
use tweenpath_core::CurveError;
use tweenpath_geometry::{BezierConfig, CircleConfig, CurveKind, EllipseConfig, SineConfig};
use tweenpath_math::{dvec2, TimeConfig};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Host-side element that only records where it was moved.
#[derive(Default)]
struct Element {
    left: f64,
    top: f64,
    rotate: f64,
    moves: usize,
}

impl FrameSink for Element {
    fn apply(&mut self, frame: &Frame) {
        self.left = frame.left;
        self.top = frame.top;
        if let Some(r) = frame.rotate {
            self.rotate = r;
        }
        self.moves += 1;
    }
}

#[test]
fn test_host_drives_circle_to_completion() {
    init_logging();
    let tween = CurveTween::from_json(r#"{"type": "circle", "radius": 10, "x": 50, "y": 50}"#)
        .unwrap();
    let mut element = Element::default();

    for i in 0..=60 {
        tween.step(i as f64 / 60.0, &mut element).unwrap();
    }

    assert_eq!(element.moves, 61);
    assert_abs_diff_eq!(element.left, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(element.top, 60.0, epsilon = 1e-9);
}

#[test]
fn test_quarter_turn_frame() {
    init_logging();
    let tween = CurveTween::new(CircleConfig::new(10.0)).unwrap();
    let mut element = Element::default();
    tween.step(0.25, &mut element).unwrap();

    assert_abs_diff_eq!(element.left, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(element.top, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(element.rotate, -FRAC_PI_2, epsilon = 1e-8);
}

#[test]
fn test_failed_tick_leaves_element_untouched() {
    init_logging();
    let tween = CurveTween::new(SineConfig::new(1e308).with_frequency(1e308)).unwrap();
    let mut element = Element::default();

    let err = tween.step(0.5, &mut element).unwrap_err();
    assert!(matches!(err, CurveError::Geometry(_)));
    assert_eq!(element.moves, 0);

    assert!(tween.frames(8).is_err());
}

#[test]
fn test_batch_matches_single_ticks() {
    init_logging();
    let tweens = [
        CurveTween::new(BezierConfig::new(vec![
            dvec2(0.0, 0.0),
            dvec2(30.0, 90.0),
            dvec2(60.0, -40.0),
            dvec2(90.0, 0.0),
        ]))
        .unwrap(),
        CurveTween::new(EllipseConfig::new(40.0, 15.0).with_time(TimeConfig::new(0.2, 0.8)))
            .unwrap(),
        CurveTween::new(SineConfig::new(12.0).with_wavelength(80.0)).unwrap(),
    ];

    for tween in &tweens {
        let batch = tween.frames(24).unwrap();
        assert_eq!(batch.len(), 25);
        for (i, frame) in batch.iter().enumerate() {
            assert_eq!(*frame, tween.frame(i as f64 / 24.0).unwrap());
        }
    }
}

#[test]
fn test_tangent_disabled_keeps_rotation() {
    init_logging();
    let tween = CurveTween::new(
        BezierConfig::new(vec![dvec2(0.0, 0.0), dvec2(10.0, 10.0)]).with_tangent(false),
    )
    .unwrap();
    assert_eq!(tween.kind(), CurveKind::Bezier);

    let mut element = Element {
        rotate: 1.25,
        ..Element::default()
    };
    tween.step(0.5, &mut element).unwrap();
    assert_eq!(element.rotate, 1.25);
    assert_abs_diff_eq!(element.left, 5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(element.top, 5.0, epsilon = 1e-12);
}

#[test]
fn test_single_point_holds_offset() {
    init_logging();
    let tween =
        CurveTween::new(BezierConfig::new(vec![dvec2(7.0, 7.0)]).with_offset(2.0, 3.0)).unwrap();
    let mut count = 0;
    let mut sink = |frame: &Frame| {
        assert_eq!((frame.left, frame.top), (2.0, 3.0));
        assert_eq!(frame.rotate, Some(0.0));
        count += 1;
    };
    tween.step(0.1, &mut sink).unwrap();
    tween.step(0.9, &mut sink).unwrap();
    assert_eq!(count, 2);
}
