//! Free-hand strokes captured on a drawing surface.
//!
//! A stroke is the ordered list of pointer positions between press and
//! release. Capture devices report fractional coordinates; they are rounded
//! half-to-even onto the pixel grid when the stroke is built.

use crate::image::{draw_segment, OccupancyGrid};
use crate::types::{CanvasSize, Point};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Builds a stroke from fractional coordinates.
    pub fn from_float_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let points = points
            .into_iter()
            .map(|(x, y)| Point::new(x.round_ties_even() as i32, y.round_ties_even() as i32))
            .collect();
        Self { points }
    }

    /// Parses `[{"x": 1.5, "y": 2}, ...]`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let raw: Vec<RawPoint> = serde_json::from_str(json)?;
        Ok(Self::from_float_points(raw.into_iter().map(|p| (p.x, p.y))))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points of the stroke that fall inside `size`.
    pub fn points_within(&self, size: CanvasSize) -> Vec<Point> {
        self.points
            .iter()
            .copied()
            .filter(|p| size.contains(*p))
            .collect()
    }

    /// Draws the polyline through consecutive points into a fresh grid.
    /// A single-point stroke marks just that pixel.
    pub fn rasterize(&self, size: CanvasSize) -> OccupancyGrid {
        let mut grid = OccupancyGrid::new(size.width, size.height);
        match self.points.as_slice() {
            [] => {}
            [p] => {
                grid.mark(*p);
            }
            pts => {
                for pair in pts.windows(2) {
                    draw_segment(&mut grid, pair[0], pair[1]);
                }
            }
        }
        grid
    }
}
