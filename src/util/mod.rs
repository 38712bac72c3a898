pub mod coord;
pub mod error;

pub use coord::{Coordinate, clip_latitude, longitude_distance, normalize_longitude};
pub use error::OlcError;
