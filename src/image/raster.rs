//! Integer line rasterisation onto an [`OccupancyGrid`].

use super::OccupancyGrid;
use crate::types::Point;

/// Marks a 1-pixel-thick segment from `p0` to `p1` (both ends included) using
/// Bresenham's algorithm. Pixels outside the grid are skipped. Returns the
/// number of pixels that landed inside the grid.
pub fn draw_segment(grid: &mut OccupancyGrid, p0: Point, p1: Point) -> usize {
    let dx = (p1.x - p0.x).abs();
    let dy = -(p1.y - p0.y).abs();
    let sx = if p0.x < p1.x { 1 } else { -1 };
    let sy = if p0.y < p1.y { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (p0.x, p0.y);
    let mut marked = 0usize;
    loop {
        if grid.mark(Point::new(x, y)) {
            marked += 1;
        }
        if x == p1.x && y == p1.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    marked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_marks_one_pixel_per_column() {
        let mut grid = OccupancyGrid::new(10, 10);
        let n = draw_segment(&mut grid, Point::new(0, 0), Point::new(9, 9));
        assert_eq!(n, 10);
        for i in 0..10 {
            assert_eq!(grid.get(i, i), 255);
        }
    }

    #[test]
    fn shallow_segment_is_connected() {
        let mut grid = OccupancyGrid::new(400, 300);
        let n = draw_segment(&mut grid, Point::new(50, 50), Point::new(350, 250));
        assert_eq!(n, 301);
        for x in 50..=350usize {
            let hits = (0..300).filter(|&y| grid.get(x, y) != 0).count();
            assert_eq!(hits, 1, "column {x}");
        }
    }

    #[test]
    fn clipped_segment_counts_inside_pixels_only() {
        let mut grid = OccupancyGrid::new(5, 5);
        let n = draw_segment(&mut grid, Point::new(-5, 2), Point::new(9, 2));
        assert_eq!(n, 5);
        assert_eq!(grid.foreground_count(), 5);
    }

    #[test]
    fn reversed_endpoints_draw_same_pixels_count() {
        let mut a = OccupancyGrid::new(20, 20);
        let mut b = OccupancyGrid::new(20, 20);
        let na = draw_segment(&mut a, Point::new(2, 3), Point::new(17, 11));
        let nb = draw_segment(&mut b, Point::new(17, 11), Point::new(2, 3));
        assert_eq!(na, nb);
    }
}
