use hough_lines::image::{draw_segment, OccupancyGrid};
use hough_lines::Point;

/// Blank canvas with each `(start, end)` segment drawn into it.
pub fn canvas_with_segments(
    width: usize,
    height: usize,
    segments: &[((i32, i32), (i32, i32))],
) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(width, height);
    for &(p0, p1) in segments {
        draw_segment(&mut grid, p0.into(), p1.into());
    }
    grid
}

/// Foreground pixels of `grid` as a point list, row-major.
pub fn foreground_points(grid: &OccupancyGrid) -> Vec<Point> {
    grid.as_view().foreground().collect()
}
