use serde::{Deserialize, Serialize};

/// Integer pixel coordinate in image space (x to the right, y downwards).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Width and height of the canvas a point set was captured on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: usize,
    pub height: usize,
}

impl CanvasSize {
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Largest representable |ρ|: the canvas diagonal rounded up.
    pub fn rho_max(&self) -> usize {
        let w = self.width as f64;
        let h = self.height as f64;
        (w * w + h * h).sqrt().ceil() as usize
    }
}

/// A local maximum of the accumulator that survived suppression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Peak {
    /// Row of the accumulator (ρ + ρ_max).
    pub rho_index: usize,
    /// Column of the accumulator (index into the angle set).
    pub angle_index: usize,
    pub votes: u32,
}
