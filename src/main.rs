use hough_lines::image::{draw_segment, OccupancyGrid};
use hough_lines::types::Point;
use hough_lines::{HoughDetector, HoughParams, VoteSource};

fn main() {
    // Demo stub: draws one segment on a blank canvas and detects it
    let mut canvas = OccupancyGrid::new(400, 300);
    draw_segment(&mut canvas, Point::new(50, 50), Point::new(350, 250));

    let detector = match HoughDetector::new(HoughParams::default()) {
        Ok(d) => d,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };
    match detector.detect(&VoteSource::Grid(canvas.as_view())) {
        Ok(report) => {
            for line in &report.lines {
                println!("{:?} votes={}", line.params, line.votes);
            }
            println!("lines={} total_ms={:.3}", report.lines.len(), report.timing.total_ms);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
