use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hough_lines::accumulator::{build_accumulator, Quantization, VoteOptions, VoteSource};
use hough_lines::angle::AngleSet;
use hough_lines::image::{draw_segment, OccupancyGrid};
use hough_lines::peaks::{prominent_peaks, PeakOptions};
use hough_lines::Point;

fn line_canvas(width: usize, height: usize) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(width, height);
    let w = width as i32 - 1;
    let h = height as i32 - 1;
    for k in 0..8 {
        let off = k * h / 8;
        draw_segment(&mut grid, Point::new(0, off), Point::new(w, h - off));
        draw_segment(&mut grid, Point::new(off, 0), Point::new(w - off, h));
    }
    grid
}

fn bench_vote_640x480(c: &mut Criterion) {
    let grid = line_canvas(640, 480);
    let angles = AngleSet::default();
    let plain = VoteOptions::default();
    let soft = VoteOptions {
        quantization: Some(Quantization::default()),
    };

    c.bench_function("vote_plain_640x480_360", |b| {
        b.iter(|| {
            let space = build_accumulator(&VoteSource::Grid(black_box(grid.as_view())), &angles, &plain);
            black_box(space.map(|s| s.accumulator.max_value()).ok());
        });
    });
    c.bench_function("vote_quantized_640x480_360", |b| {
        b.iter(|| {
            let space = build_accumulator(&VoteSource::Grid(black_box(grid.as_view())), &angles, &soft);
            black_box(space.map(|s| s.accumulator.max_value()).ok());
        });
    });
}

fn bench_peaks_640x480(c: &mut Criterion) {
    let grid = line_canvas(640, 480);
    let space = build_accumulator(
        &VoteSource::Grid(grid.as_view()),
        &AngleSet::default(),
        &VoteOptions::default(),
    )
    .expect("valid canvas");
    let opts = PeakOptions {
        num_peaks: None,
        ..PeakOptions::default()
    };

    c.bench_function("prominent_peaks_640x480_360", |b| {
        b.iter(|| {
            let peaks = prominent_peaks(black_box(&space.accumulator), &opts);
            black_box(peaks.len());
        });
    });
}

criterion_group!(benches, bench_vote_640x480, bench_peaks_640x480);
criterion_main!(benches);
