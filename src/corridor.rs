use geo::{Coord, LineString, Point, Polygon};
use log::warn;

use crate::arc::arc_points;
use crate::circle::buffer_point;
use crate::error::{Error, Result};
use crate::geodesic::intersection;
use crate::offset::{offsets_along, OffsetRay};

/// Bends this close to straight keep no joint geometry at all.
const COLLINEAR_TURN_DEGREES: f64 = 3.0;

/// Segment counts for the rounded parts of a buffer ring, per half circle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BufferParams {
    pub joint_segments: usize,
    pub cap_segments: usize,
}

impl Default for BufferParams {
    fn default() -> Self {
        Self {
            joint_segments: 8,
            cap_segments: 8,
        }
    }
}

impl BufferParams {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.joint_segments == 0 || self.cap_segments == 0 {
            return Err(Error::InvalidSegments {
                joint: self.joint_segments,
                cap: self.cap_segments,
            });
        }
        Ok(())
    }

    pub(crate) fn joint_step(&self) -> f64 {
        180.0 / self.joint_segments as f64
    }

    pub(crate) fn cap_step(&self) -> f64 {
        180.0 / self.cap_segments as f64
    }
}

/// Builds one closed ring around `path` at `radius_meters`, rounding both caps and the outside
/// of every bend, and mitring the inside.
///
/// The ring is counterclockwise in lng/lat and explicitly closed. When the radius is large
/// relative to how tightly the path bends, the ring can self-intersect; it always stays closed
/// and finite.
pub fn buffer_path(
    path: &LineString,
    radius_meters: f64,
    params: &BufferParams,
) -> Result<Polygon> {
    params.validate()?;
    if radius_meters < 0.0 {
        return Err(Error::NegativeRadius {
            meters: radius_meters,
        });
    }
    let len = path.0.len();
    if len == 0 {
        return Err(Error::EmptyShape);
    }
    if len == 1 {
        return buffer_point(Point(path.0[0]), radius_meters, params);
    }

    let mut offsets = offsets_along(path, radius_meters);
    // The plus90 chain in path order; the minus90 chain gets reversed at the end
    let mut right: Vec<Coord> = Vec::new();
    let mut left: Vec<Coord> = Vec::new();

    let start = offsets[0];
    let to_next = start.to_next.unwrap();
    right.push(to_next.plus90);
    let cap = arc_points(
        180.0,
        start.vertex,
        to_next.minus90,
        radius_meters,
        params.cap_step(),
    );
    left.extend(cap.iter().rev());
    left.push(to_next.minus90);

    for idx in 1..len - 1 {
        let current = offsets[idx];
        let previous = offsets[idx - 1].to_next.unwrap();
        let from_prev = current.from_prev.unwrap();
        let to_next = current.to_next.unwrap();

        let turn = (to_next.heading - previous.heading).rem_euclid(360.0);
        if turn <= COLLINEAR_TURN_DEGREES || turn >= 360.0 - COLLINEAR_TURN_DEGREES {
            continue;
        }

        if turn <= 180.0 {
            // Bend towards plus90: mitre the right side, round the left
            match intersection(
                previous.plus90,
                previous.heading,
                to_next.plus90,
                to_next.heading,
            ) {
                Some(mitre) => {
                    offsets[idx].to_next = Some(OffsetRay {
                        plus90: mitre,
                        ..to_next
                    });
                    offsets[idx].from_prev = Some(OffsetRay {
                        minus90: mitre,
                        ..from_prev
                    });
                    right.push(mitre);
                }
                None => {
                    warn!("no mitre for the bend at vertex {idx}, keeping both offset points");
                    right.push(from_prev.minus90);
                    right.push(to_next.plus90);
                }
            }
            left.push(from_prev.plus90);
            let arc = arc_points(
                turn,
                current.vertex,
                to_next.minus90,
                radius_meters,
                params.joint_step(),
            );
            left.extend(arc.iter().rev());
            left.push(to_next.minus90);
        } else {
            // Bend towards minus90: the mirror image of the branch above
            match intersection(
                previous.minus90,
                previous.heading,
                to_next.minus90,
                to_next.heading,
            ) {
                Some(mitre) => {
                    offsets[idx].to_next = Some(OffsetRay {
                        minus90: mitre,
                        ..to_next
                    });
                    offsets[idx].from_prev = Some(OffsetRay {
                        plus90: mitre,
                        ..from_prev
                    });
                    left.push(mitre);
                }
                None => {
                    warn!("no mitre for the bend at vertex {idx}, keeping both offset points");
                    left.push(from_prev.plus90);
                    left.push(to_next.minus90);
                }
            }
            right.push(from_prev.minus90);
            let arc = arc_points(
                360.0 - turn,
                current.vertex,
                from_prev.minus90,
                radius_meters,
                params.joint_step(),
            );
            right.extend(arc);
            right.push(to_next.plus90);
        }
    }

    let end = offsets[len - 1];
    let from_prev = end.from_prev.unwrap();
    right.push(from_prev.minus90);
    let cap = arc_points(
        180.0,
        end.vertex,
        from_prev.minus90,
        radius_meters,
        params.cap_step(),
    );
    right.extend(cap);
    right.push(from_prev.plus90);

    let mut pts = right;
    left.reverse();
    pts.extend(left);
    debug_assert!(pts.iter().all(|pt| pt.x.is_finite() && pt.y.is_finite()));
    Ok(Polygon::new(LineString(pts), Vec::new()))
}
