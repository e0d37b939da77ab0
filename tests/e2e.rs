mod common;

use canny_edges::edges::hysteresis::EDGE;
use canny_edges::image::{ImageF32, ImageU8, ImageView};
use canny_edges::{detect_edges, CannyDetector, EdgeError, EdgeMap, EdgeParams};
use common::synthetic_image::{checkerboard_u8, disc_on_ramp, flat, vertical_step};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_binary(edges: &EdgeMap, w: usize, h: usize) {
    assert_eq!((edges.width(), edges.height()), (w, h));
    assert!(
        edges.grid().data().iter().all(|&v| v == 0 || v == EDGE),
        "edge map must only hold 0 and 255"
    );
}

#[test]
fn vertical_step_yields_thin_boundary_line() {
    init_logging();
    let image = vertical_step(10, 10, 5, 0.0, 255.0);
    for sigma in [1.0, 5.0] {
        let edges = detect_edges(&image, 20.0, 100.0, 3, sigma).unwrap();
        assert_binary(&edges, 10, 10);

        for y in 0..10 {
            for x in 0..10 {
                if edges.is_edge(x, y) {
                    assert!(
                        (4..=5).contains(&x) && (1..=8).contains(&y),
                        "unexpected edge at ({x}, {y}) with sigma={sigma}"
                    );
                }
            }
        }
        for y in 2..=7 {
            assert!(
                edges.is_edge(4, y) || edges.is_edge(5, y),
                "boundary missing in row {y} with sigma={sigma}"
            );
        }
    }
}

#[test]
fn flat_images_have_no_edges() {
    init_logging();
    let thresholds = [(0.0, 0.5), (0.0, 1.0), (20.0, 100.0), (0.0, 255.0), (254.0, 255.0)];
    let blurs = [1, 3, 5, 7, 9];
    let sigmas = [0.5, 1.0, 1.4, 5.0];
    for (w, h) in [(10, 10), (7, 5), (3, 3), (1, 6), (16, 12)] {
        for value in [0.0, 1.0, 37.0, 200.0] {
            let image = flat(w, h, value);
            for (t0, t1) in thresholds {
                for blur in blurs {
                    for sigma in sigmas {
                        let edges = detect_edges(&image, t0, t1, blur, sigma).unwrap();
                        assert_binary(&edges, w, h);
                        assert_eq!(
                            edges.edge_count(),
                            0,
                            "{w}x{h} flat={value} t0={t0} t1={t1} blur={blur} sigma={sigma}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn raising_high_threshold_never_adds_edges() {
    init_logging();
    let image = disc_on_ramp(32);
    let t0 = 15.0;
    let mut previous = usize::MAX;
    for t1 in [16.0, 30.0, 60.0, 90.0, 120.0, 180.0, 240.0, 255.0] {
        let count = detect_edges(&image, t0, t1, 3, 1.0).unwrap().edge_count();
        assert!(count <= previous, "t1={t1}: {count} > {previous}");
        previous = count;
    }
}

#[test]
fn output_shape_and_values_hold_for_textured_input() {
    init_logging();
    let (w, h) = (40, 24);
    let buffer = checkerboard_u8(w, h, 6);
    let view = ImageU8 {
        w,
        h,
        stride: w,
        data: &buffer,
    };
    let detector = CannyDetector::new(EdgeParams::with_thresholds(30.0, 90.0)).unwrap();
    let edges = detector.process_u8(&view);
    assert_binary(&edges, w, h);
    assert!(edges.edge_count() > 0, "checkerboard should produce edges");
    // the outer frame is excluded by suppression
    for x in 0..w {
        assert!(!edges.is_edge(x, 0) && !edges.is_edge(x, h - 1));
    }
}

#[test]
fn invalid_parameters_fail_before_processing() {
    let image = vertical_step(8, 8, 4, 0.0, 255.0);
    let cases = [
        (20.0, 100.0, 4, 5.0),
        (20.0, 100.0, 0, 5.0),
        (20.0, 100.0, 3, 0.0),
        (20.0, 100.0, 3, -1.0),
        (100.0, 100.0, 3, 5.0),
        (120.0, 100.0, 3, 5.0),
        (-1.0, 100.0, 3, 5.0),
        (20.0, 300.0, 3, 5.0),
    ];
    for (t0, t1, blur, sigma) in cases {
        let err = detect_edges(&image, t0, t1, blur, sigma).unwrap_err();
        assert!(
            matches!(err, EdgeError::InvalidParameter(_)),
            "t0={t0} t1={t1} blur={blur} sigma={sigma}: {err}"
        );
    }
    // an empty image is only rejected by the parameters, never by its content
    let empty = ImageF32::new(0, 0);
    assert!(detect_edges(&empty, 20.0, 100.0, 3, 5.0).is_ok());
}

#[test]
fn trace_report_matches_grids() {
    init_logging();
    let image = disc_on_ramp(24);
    let detector = CannyDetector::new(EdgeParams::default().with_blur(5, 1.4)).unwrap();
    let trace = detector.process_with_trace(&image);

    assert_eq!(trace.report.width, 24);
    assert_eq!(trace.report.edge_pixels, trace.edges.edge_count());
    assert_eq!(trace.report.strong_pixels, trace.labels.strong_count());
    assert_eq!(trace.report.weak_pixels, trace.labels.weak_count());
    assert!(!trace.report.degenerate);
    assert!(trace.report.edge_pixels >= trace.report.strong_pixels);
    assert!(trace.report.edge_pixels <= trace.report.strong_pixels + trace.report.weak_pixels);

    let (lo, hi) = trace.gradient.magnitude.min_max().unwrap();
    assert!(lo >= 0.0 && hi <= 255.0 + 1e-3);
    for label in ["smoothing", "gradient", "nms", "threshold", "hysteresis"] {
        assert!(trace.report.timings.stage_ms(label).is_some(), "{label}");
    }
    for (y, row) in trace.suppressed.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            assert!(v == 0.0 || v == trace.gradient.magnitude.get(x, y));
        }
    }

    let json = serde_json::to_value(&trace.report).unwrap();
    assert_eq!(json["params"]["blurSize"], 5);
    assert!(json["timings"]["stages"].as_array().unwrap().len() == 5);
}

#[test]
fn flat_trace_is_flagged_degenerate() {
    init_logging();
    for value in [0.0, 37.0] {
        let params = EdgeParams::with_thresholds(0.0, 10.0).with_blur(7, 5.0);
        let detector = CannyDetector::new(params).unwrap();
        let trace = detector.process_with_trace(&flat(10, 10, value));
        assert!(trace.report.degenerate, "flat={value}");
        assert_eq!(trace.report.strong_pixels, 0, "flat={value}");
        assert_eq!(trace.report.edge_pixels, 0, "flat={value}");
        assert!(trace.gradient.magnitude.data.iter().all(|&m| m == 0.0));
    }
}
