use crate::error::HoughError;
use crate::types::{CanvasSize, Point};

/// Borrowed 8-bit occupancy view. Any non-zero pixel is foreground.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // elements between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.w, self.h)
    }

    /// Checks the view describes a non-empty image that fits in `data`.
    pub fn validate(&self) -> Result<(), HoughError> {
        if self.w == 0 || self.h == 0 {
            return Err(HoughError::InvalidDimensions {
                width: self.w,
                height: self.h,
            });
        }
        let expected = (self.h - 1) * self.stride + self.w;
        if self.stride < self.w || self.data.len() < expected {
            return Err(HoughError::BufferSizeMismatch {
                width: self.w,
                height: self.h,
                stride: self.stride,
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }

    /// Foreground pixels in row-major order.
    ///
    /// Only rows that fit entirely in `data` are visited; call
    /// [`validate`](Self::validate) first to reject a short buffer instead.
    pub fn foreground(&self) -> impl Iterator<Item = Point> + '_ {
        let complete =
            (0..self.h).take_while(move |&y| y * self.stride + self.w <= self.data.len());
        complete.flat_map(move |y| {
            let start = y * self.stride;
            self.data[start..start + self.w]
                .iter()
                .enumerate()
                .filter(|(_, v)| **v != 0)
                .map(move |(x, _)| Point::new(x as i32, y as i32))
        })
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Owned, tightly packed occupancy grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl OccupancyGrid {
    /// All-background grid of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<Self, HoughError> {
        if width == 0 || height == 0 {
            return Err(HoughError::InvalidDimensions { width, height });
        }
        if data.len() != width * height {
            return Err(HoughError::BufferSizeMismatch {
                width,
                height,
                stride: width,
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Marks `p` as foreground. Points outside the grid are ignored.
    pub fn mark(&mut self, p: Point) -> bool {
        if !self.size().contains(p) {
            return false;
        }
        let idx = p.y as usize * self.width + p.x as usize;
        self.data[idx] = 255;
        true
    }

    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}
