use hough_lines::config::hough_demo::{self, VoteMode};
use hough_lines::image::io::{load_stroke_json, save_accumulator_png, write_json_file};
use hough_lines::lines::LineParams;
use hough_lines::{DetectionSummary, HoughDetector, VoteSource};
use serde::Serialize;
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
    let config = hough_demo::load_config(Path::new(&config_path))?;
    let canvas = config.canvas.size();

    let stroke = load_stroke_json(&config.input)?;
    let detector = HoughDetector::new(config.hough.clone()).map_err(|e| e.to_string())?;

    // keep the rasterized grid alive for the borrowed view
    let raster;
    let points;
    let source = match config.mode {
        VoteMode::Points => {
            points = stroke.points_within(canvas);
            VoteSource::Points {
                points: &points,
                size: canvas,
            }
        }
        VoteMode::Raster => {
            raster = stroke.rasterize(canvas);
            VoteSource::Grid(raster.as_view())
        }
    };
    let report = detector.detect(&source).map_err(|e| e.to_string())?;

    if let Some(path) = &config.output.accumulator_image {
        save_accumulator_png(&report.space.accumulator, path)?;
        println!("Saved accumulator image to {}", path.display());
    }

    let segments = report
        .lines
        .iter()
        .map(|l| l.params.clip_to(canvas))
        .collect();
    let output = HoughDemoOutput {
        stroke_points: stroke.len(),
        mode: match config.mode {
            VoteMode::Points => "points",
            VoteMode::Raster => "raster",
        },
        detection: report.summary(),
        segments,
    };
    write_json_file(&config.output.result_json, &output)?;

    for line in &report.lines {
        match line.params {
            LineParams::Sloped { slope, intercept } => println!(
                "line votes={} theta={:.2}deg rho={} y = {slope:.4}x + {intercept:.2}",
                line.votes,
                line.theta.to_degrees(),
                line.rho
            ),
            LineParams::Vertical { x } => println!(
                "line votes={} theta={:.2}deg rho={} vertical x = {x:.2}",
                line.votes,
                line.theta.to_degrees(),
                line.rho
            ),
        }
    }
    println!(
        "Saved {} lines to {}",
        report.lines.len(),
        config.output.result_json.display()
    );
    Ok(())
}

fn usage() -> String {
    "Usage: hough_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HoughDemoOutput {
    stroke_points: usize,
    mode: &'static str,
    detection: DetectionSummary,
    /// Canvas-clipped endpoints per line, for drawing.
    segments: Vec<Option<[[f64; 2]; 2]>>,
}
