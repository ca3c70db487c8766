pub mod io;
pub mod raster;
pub mod traits;
pub mod u8;

pub use self::raster::draw_segment;
pub use self::traits::{ImageView, Rows};
pub use self::u8::{ImageU8, OccupancyGrid};
