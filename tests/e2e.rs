mod common;

use approx::assert_abs_diff_eq;
use common::init_logging;
use common::synthetic_image::{canvas_with_segments, foreground_points};
use hough_lines::accumulator::{build_accumulator, round_rho, Quantization, VoteOptions};
use hough_lines::{
    AngleSet, CanvasSize, HoughDetector, HoughError, HoughParams, LineParams, Peak, Point, Stroke,
    VoteSource,
};

fn sloped(params: LineParams) -> (f64, f64) {
    match params {
        LineParams::Sloped { slope, intercept } => (slope, intercept),
        LineParams::Vertical { x } => panic!("expected a sloped line, got x = {x}"),
    }
}

#[test]
fn diagonal_segment_is_recovered() {
    init_logging();
    let canvas = canvas_with_segments(400, 300, &[((50, 50), (350, 250))]);
    let detector = HoughDetector::new(HoughParams::default()).unwrap();
    let report = detector.detect(&VoteSource::Grid(canvas.as_view())).unwrap();

    assert_eq!(report.space.accumulator.rows(), 1000);
    assert_eq!(report.space.accumulator.cols(), 360);
    assert_eq!(report.lines.len(), 1, "lines: {:?}", report.lines);

    let best = &report.lines[0];
    let (slope, intercept) = sloped(best.params);
    assert_abs_diff_eq!(slope, 2.0 / 3.0, epsilon = 1e-2);
    // one distance bin moves the intercept by about 1.2 px at this angle
    assert_abs_diff_eq!(intercept, 50.0 / 3.0, epsilon = 2.0);
    assert_abs_diff_eq!(best.params.y_at(200.0).unwrap(), 150.0, epsilon = 2.0);
    assert!(best.votes >= 150, "votes={}", best.votes);
}

#[test]
fn point_list_matches_grid_voting() {
    init_logging();
    let canvas = canvas_with_segments(400, 300, &[((50, 50), (350, 250)), ((20, 280), (380, 270))]);
    let points = foreground_points(&canvas);
    let detector = HoughDetector::new(HoughParams::default()).unwrap();

    let from_grid = detector.detect(&VoteSource::Grid(canvas.as_view())).unwrap();
    let from_points = detector
        .detect(&VoteSource::Points {
            points: &points,
            size: canvas.size(),
        })
        .unwrap();

    assert_eq!(from_grid.space.accumulator, from_points.space.accumulator);
    assert_eq!(from_grid.lines, from_points.lines);
}

#[test]
fn empty_point_list_yields_no_lines() {
    init_logging();
    let detector = HoughDetector::new(HoughParams::default()).unwrap();
    let report = detector
        .detect(&VoteSource::Points {
            points: &[],
            size: CanvasSize::new(400, 300),
        })
        .unwrap();
    assert!(report.space.accumulator.is_zero());
    assert!(report.peaks.is_empty());
    assert!(report.lines.is_empty());
}

#[test]
fn out_of_bounds_point_is_rejected() {
    let detector = HoughDetector::new(HoughParams::default()).unwrap();
    let points = [Point::new(10, 10), Point::new(400, 5)];
    let err = detector
        .detect(&VoteSource::Points {
            points: &points,
            size: CanvasSize::new(400, 300),
        })
        .unwrap_err();
    assert!(matches!(err, HoughError::PointOutOfBounds { x: 400, y: 5, .. }));
}

#[test]
fn vertical_segment_is_reported_as_vertical() {
    init_logging();
    let canvas = canvas_with_segments(400, 300, &[((120, 10), (120, 290))]);
    let detector = HoughDetector::new(HoughParams::default()).unwrap();
    let report = detector.detect(&VoteSource::Grid(canvas.as_view())).unwrap();

    assert_eq!(report.lines.len(), 1);
    match report.lines[0].params {
        LineParams::Vertical { x } => assert_abs_diff_eq!(x, 120.0, epsilon = 1e-6),
        other => panic!("expected a vertical line, got {other:?}"),
    }
    assert_eq!(report.lines[0].votes, 281);
}

#[test]
fn parallel_horizontal_segments_give_two_lines() {
    init_logging();
    let canvas = canvas_with_segments(400, 300, &[((50, 60), (350, 60)), ((100, 200), (350, 200))]);
    let detector = HoughDetector::new(HoughParams::default()).unwrap();
    let report = detector.detect(&VoteSource::Grid(canvas.as_view())).unwrap();

    assert_eq!(report.lines.len(), 2);
    assert_eq!(report.lines[0].votes, 301);
    assert_eq!(report.lines[1].votes, 251);
    for (line, y) in report.lines.iter().zip([60.0, 200.0]) {
        let (slope, intercept) = sloped(line.params);
        assert_abs_diff_eq!(slope, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(intercept, y, epsilon = 1e-9);
    }
}

#[test]
fn seam_twin_of_horizontal_line_is_suppressed() {
    init_logging();
    // A horizontal line peaks at θ = -π/2. Its twin just below θ = π/2 has
    // the opposite ρ and clears the low threshold on its own.
    let canvas = canvas_with_segments(400, 300, &[((50, 100), (349, 100))]);
    let params = HoughParams {
        threshold: Some(50.0),
        num_peaks: None,
        ..HoughParams::default()
    };
    let detector = HoughDetector::new(params).unwrap();
    let report = detector.detect(&VoteSource::Grid(canvas.as_view())).unwrap();

    let acc = &report.space.accumulator;
    let twin_row = acc.row_of(101).unwrap();
    assert!(acc.get(twin_row, 359) > 50);

    assert_eq!(report.lines.len(), 1, "lines: {:?}", report.lines);
    assert_eq!(report.lines[0].angle_index, 0);
    assert_eq!(report.lines[0].rho, -100.0);
}

/// Whether accepting `a` clears the cell of `b`.
fn in_window(a: &Peak, b: &Peak, rows: usize, cols: usize, params: &HoughParams) -> bool {
    let hr = params.min_dist_rho as isize;
    let hc = params.min_dist_angle as isize;
    let cols = cols as isize;
    let rows = rows as isize;
    (-hc..=hc).any(|dc| {
        let raw = a.angle_index as isize + dc;
        let c = raw.rem_euclid(cols);
        if c != b.angle_index as isize {
            return false;
        }
        let dr = (b.rho_index as isize - a.rho_index as isize).abs();
        let wrapped = !(0..cols).contains(&raw);
        let mirrored = (rows - b.rho_index as isize - a.rho_index as isize).abs();
        dr <= hr || (wrapped && mirrored <= hr)
    })
}

#[test]
fn accepted_peaks_are_mutually_separated() {
    init_logging();
    let canvas = canvas_with_segments(
        300,
        300,
        &[
            ((10, 10), (290, 20)),
            ((10, 30), (290, 40)),
            ((150, 0), (160, 299)),
            ((0, 299), (299, 0)),
            ((20, 250), (280, 260)),
        ],
    );
    let params = HoughParams {
        threshold: Some(40.0),
        num_peaks: None,
        ..HoughParams::default()
    };
    let detector = HoughDetector::new(params.clone()).unwrap();
    let report = detector.detect(&VoteSource::Grid(canvas.as_view())).unwrap();
    let acc = &report.space.accumulator;

    assert!(report.peaks.len() >= 3);
    for w in report.peaks.windows(2) {
        assert!(w[0].votes >= w[1].votes);
    }
    for (i, a) in report.peaks.iter().enumerate() {
        assert!(a.votes as f64 > 40.0);
        assert_eq!(a.votes, acc.get(a.rho_index, a.angle_index));
        for b in &report.peaks[i + 1..] {
            assert!(
                !in_window(a, b, acc.rows(), acc.cols(), &params),
                "{b:?} lies inside the window of {a:?}"
            );
        }
    }
}

#[test]
fn detection_is_repeatable() {
    let canvas = canvas_with_segments(200, 150, &[((0, 0), (199, 149)), ((0, 140), (199, 100))]);
    let detector = HoughDetector::new(HoughParams::default()).unwrap();
    let source = VoteSource::Grid(canvas.as_view());
    let first = detector.detect(&source).unwrap();
    let second = detector.detect(&source).unwrap();
    assert_eq!(first.space.accumulator, second.space.accumulator);
    assert_eq!(first.peaks, second.peaks);
    assert_eq!(first.lines, second.lines);
}

#[test]
fn quantized_voting_still_finds_the_line() {
    init_logging();
    let canvas = canvas_with_segments(400, 300, &[((50, 50), (350, 250))]);
    let params = HoughParams {
        quantize: true,
        ..HoughParams::default()
    };
    let detector = HoughDetector::new(params).unwrap();
    let report = detector.detect(&VoteSource::Grid(canvas.as_view())).unwrap();

    // the square spread lets the peak drift by about one angle sample
    let best = report.lines[0].params;
    let (slope, _) = sloped(best);
    assert_abs_diff_eq!(slope, 2.0 / 3.0, epsilon = 3e-2);
    assert_abs_diff_eq!(best.y_at(200.0).unwrap(), 150.0, epsilon = 3.0);
    assert!(report.space.accumulator.total_votes() > 301 * 360 * 4);
}

#[test]
fn stroke_points_and_raster_agree_on_direction() {
    init_logging();
    let samples: Vec<String> = (0..=160)
        .map(|i| {
            let x = 20.0 + 2.0 * i as f64;
            format!(r#"{{"x": {x}, "y": {}}}"#, 0.5 * x + 20.3)
        })
        .collect();
    let stroke = Stroke::from_json_str(&format!("[{}]", samples.join(","))).unwrap();
    assert_eq!(stroke.len(), 161);
    assert_eq!(stroke.points()[0], Point::new(20, 30));

    let size = CanvasSize::new(400, 300);
    let detector = HoughDetector::new(HoughParams::default()).unwrap();

    let points = stroke.points_within(size);
    let from_points = detector
        .detect(&VoteSource::Points {
            points: &points,
            size,
        })
        .unwrap();
    assert_eq!(from_points.lines[0].votes, 161);
    let (slope, _) = sloped(from_points.lines[0].params);
    assert_abs_diff_eq!(slope, 0.5, epsilon = 1e-2);

    let raster = stroke.rasterize(size);
    let from_raster = detector.detect(&VoteSource::Grid(raster.as_view())).unwrap();
    assert_eq!(from_raster.lines[0].angle_index, from_points.lines[0].angle_index);
    let (slope, _) = sloped(from_raster.lines[0].params);
    assert_abs_diff_eq!(slope, 0.5, epsilon = 1e-2);
}

#[test]
fn dense_canvas_votes_match_direct_count() {
    init_logging();
    let segments: Vec<((i32, i32), (i32, i32))> = (0..12)
        .map(|k| ((0, 10 + 23 * k), (399, 290 - 23 * k)))
        .chain((0..6).map(|k| ((40 + 60 * k, 0), (40 + 60 * k, 299))))
        .collect();
    let canvas = canvas_with_segments(400, 300, &segments);
    let points = foreground_points(&canvas);
    // large enough to take the multi-threaded path when it is enabled
    assert!(points.len() > 4096, "points={}", points.len());

    let angles = AngleSet::default();
    let source = VoteSource::Grid(canvas.as_view());
    let plain = build_accumulator(&source, &angles, &VoteOptions::default()).unwrap();
    let acc = &plain.accumulator;
    assert_eq!(acc.total_votes(), (points.len() * angles.len()) as u64);

    let mut expected = vec![0u32; acc.rows() * acc.cols()];
    for p in &points {
        for (i, theta) in angles.as_slice().iter().enumerate() {
            let rho = round_rho(p.x as f64 * theta.cos() + p.y as f64 * theta.sin());
            let row = acc.row_of(rho).unwrap();
            expected[row * acc.cols() + i] += 1;
        }
    }
    assert_eq!(acc.data(), expected.as_slice());

    let soft = VoteOptions {
        quantization: Some(Quantization::default()),
    };
    let first = build_accumulator(&source, &angles, &soft).unwrap();
    let second = build_accumulator(&source, &angles, &soft).unwrap();
    assert_eq!(first.accumulator, second.accumulator);
    assert!(first.accumulator.total_votes() > acc.total_votes() * 4);
}
