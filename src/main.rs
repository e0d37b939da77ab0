use canny_edges::image::ImageF32;
use canny_edges::{CannyDetector, EdgeParams};

fn main() {
    env_logger::init();
    // Demo stub: a synthetic vertical step, dark on the left, bright on the right
    let (w, h) = (64usize, 48usize);
    let image = ImageF32::from_fn(w, h, |x, _| if x < w / 2 { 30.0 } else { 220.0 });

    let detector = match CannyDetector::new(EdgeParams::default().with_blur(3, 1.0)) {
        Ok(detector) => detector,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    let trace = detector.process_with_trace(&image);
    println!(
        "edges={} strong={} weak={} latency_ms={:.3}",
        trace.report.edge_pixels,
        trace.report.strong_pixels,
        trace.report.weak_pixels,
        trace.report.timings.total_ms
    );
}
