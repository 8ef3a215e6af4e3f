mod arc;
mod circle;
mod corridor;
mod encode;
mod error;
mod geodesic;
mod offset;
mod render;
mod shape;

pub use self::arc::arc_points;
pub use self::circle::buffer_point;
pub use self::corridor::{buffer_path, BufferParams};
pub use self::encode::{form_value, rounded, to_geojson};
pub use self::error::{Error, Result};
pub use self::geodesic::{
    central_angle, distance_km, distance_meters, distance_miles, heading, intersection,
    normalize_lon, travel, EARTH_RADIUS_KM, EARTH_RADIUS_MILES,
};
pub use self::offset::{offsets_along, offsets_for, OffsetRay, VertexOffsets};
pub use self::render::{redraw, MapCanvas, NullCanvas};
pub use self::shape::{search_area, DrawnShape};
