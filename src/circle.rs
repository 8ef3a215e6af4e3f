use geo::{LineString, Point, Polygon};

use crate::arc::arc_points;
use crate::corridor::BufferParams;
use crate::error::{Error, Result};
use crate::geodesic::travel;

/// Builds the closed circle ring around `center`, starting from the point due north at the
/// radius and sweeping the full turn at the cap resolution.
pub fn buffer_point(center: Point, radius_meters: f64, params: &BufferParams) -> Result<Polygon> {
    params.validate()?;
    if radius_meters < 0.0 {
        return Err(Error::NegativeRadius {
            meters: radius_meters,
        });
    }
    let top = travel(center.0, radius_meters, 0.0);
    let mut pts = vec![top];
    pts.extend(arc_points(
        360.0,
        center.0,
        top,
        radius_meters,
        params.cap_step(),
    ));
    pts.push(top);
    Ok(Polygon::new(LineString(pts), Vec::new()))
}
