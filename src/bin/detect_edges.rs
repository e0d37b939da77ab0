use canny_edges::config::edge::load_config;
use canny_edges::image::io::{
    load_grayscale_image, save_grayscale_f32, save_grayscale_u8, write_json_file,
};
use canny_edges::image::ImageF32;
use canny_edges::CannyDetector;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let image = ImageF32::from_u8(&gray.as_view());
    let detector = CannyDetector::new(config.edge.clone()).map_err(|e| e.to_string())?;
    let trace = detector.process_with_trace(&image);

    save_grayscale_u8(trace.edges.grid(), &config.output.edges_image)?;
    println!(
        "Saved {} edge pixels ({}x{}) to {}",
        trace.report.edge_pixels,
        trace.report.width,
        trace.report.height,
        config.output.edges_image.display()
    );

    if let Some(path) = &config.output.magnitude_image {
        save_grayscale_f32(&trace.gradient.magnitude, path)?;
        println!("Saved gradient magnitude to {}", path.display());
    }
    if let Some(path) = &config.output.labels_image {
        save_grayscale_u8(trace.labels.grid(), path)?;
        println!("Saved threshold labels to {}", path.display());
    }
    if let Some(path) = &config.output.report_json {
        write_json_file(path, &trace.report)?;
        println!("Saved report to {}", path.display());
    }
    if trace.report.degenerate {
        println!("Input has no dynamic range; edge map is empty");
    }

    Ok(())
}

fn usage() -> String {
    "Usage: detect_edges <config.json>".to_string()
}
