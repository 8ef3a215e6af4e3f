use geo::{Geometry, LineString, MultiPolygon, Point};

use crate::circle::buffer_point;
use crate::corridor::{buffer_path, BufferParams};
use crate::error::{Error, Result};

/// What the user drew on the map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawnShape {
    Point(Point),
    MultiPoint(Vec<Point>),
    Path(LineString),
}

/// Turns a drawn shape plus a radius into the search-area geometry.
///
/// A zero radius means no buffering: points produce nothing and a path is searched as the bare
/// line. Multipoint circles are kept separate, overlapping or not.
pub fn search_area(
    shape: &DrawnShape,
    radius_meters: f64,
    params: &BufferParams,
) -> Result<Option<Geometry>> {
    params.validate()?;
    if radius_meters < 0.0 {
        return Err(Error::NegativeRadius {
            meters: radius_meters,
        });
    }
    match shape {
        DrawnShape::Point(pt) => {
            if radius_meters == 0.0 {
                return Ok(None);
            }
            Ok(Some(Geometry::Polygon(buffer_point(
                *pt,
                radius_meters,
                params,
            )?)))
        }
        DrawnShape::MultiPoint(pts) => {
            if pts.is_empty() {
                return Err(Error::EmptyShape);
            }
            if radius_meters == 0.0 {
                return Ok(None);
            }
            let mut circles = Vec::with_capacity(pts.len());
            for pt in pts {
                circles.push(buffer_point(*pt, radius_meters, params)?);
            }
            Ok(Some(Geometry::MultiPolygon(MultiPolygon(circles))))
        }
        DrawnShape::Path(path) => {
            if path.0.is_empty() {
                return Err(Error::EmptyShape);
            }
            if radius_meters == 0.0 {
                if path.0.len() == 1 {
                    return Ok(None);
                }
                return Ok(Some(Geometry::LineString(path.clone())));
            }
            Ok(Some(Geometry::Polygon(buffer_path(
                path,
                radius_meters,
                params,
            )?)))
        }
    }
}
