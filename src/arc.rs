use geo::Coord;

use crate::geodesic::{heading, travel};

/// Intermediate points of a circular arc around `center`, sweeping `sweep_degrees` away from
/// `start` in decreasing-heading order. Both endpoints are excluded; a sweep shorter than two
/// segments yields nothing. Callers wanting the opposite winding reverse the result.
pub fn arc_points(
    sweep_degrees: f64,
    center: Coord,
    start: Coord,
    radius_meters: f64,
    degrees_per_segment: f64,
) -> Vec<Coord> {
    assert!(degrees_per_segment > 0.0);
    let start_heading = heading(center, start);
    let segments = (sweep_degrees / degrees_per_segment).floor() as usize;
    let mut pts = Vec::new();
    for i in 1..segments {
        pts.push(travel(
            center,
            radius_meters,
            start_heading - degrees_per_segment * i as f64,
        ));
    }
    pts
}
