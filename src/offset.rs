use geo::{Coord, LineString};

use crate::geodesic::{heading, travel};

/// A heading out of a vertex plus the two points offset sideways from it, 90 degrees clockwise
/// (`plus90`) and counterclockwise (`minus90`) of the heading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetRay {
    pub heading: f64,
    pub plus90: Coord,
    pub minus90: Coord,
}

impl OffsetRay {
    fn new(vertex: Coord, heading: f64, radius_meters: f64) -> Self {
        Self {
            heading,
            plus90: travel(vertex, radius_meters, heading + 90.0),
            minus90: travel(vertex, radius_meters, heading - 90.0),
        }
    }
}

/// Offset points around one path vertex. `from_prev` aims back at the previous vertex, so its
/// sides are mirrored relative to the direction of travel; the first and last vertex only have
/// one ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VertexOffsets {
    pub vertex: Coord,
    pub from_prev: Option<OffsetRay>,
    pub to_next: Option<OffsetRay>,
}

pub fn offsets_for(path: &LineString, idx: usize, radius_meters: f64) -> VertexOffsets {
    let vertex = path.0[idx];
    let from_prev = if idx > 0 {
        Some(OffsetRay::new(
            vertex,
            heading(vertex, path.0[idx - 1]),
            radius_meters,
        ))
    } else {
        None
    };
    let to_next = if idx + 1 < path.0.len() {
        Some(OffsetRay::new(
            vertex,
            heading(vertex, path.0[idx + 1]),
            radius_meters,
        ))
    } else {
        None
    };
    VertexOffsets {
        vertex,
        from_prev,
        to_next,
    }
}

pub fn offsets_along(path: &LineString, radius_meters: f64) -> Vec<VertexOffsets> {
    (0..path.0.len())
        .map(|idx| offsets_for(path, idx, radius_meters))
        .collect()
}
