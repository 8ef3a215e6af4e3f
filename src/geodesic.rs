use std::f64::consts::{PI, TAU};

use geo::Coord;

/// Mean Earth radius in miles.
pub const EARTH_RADIUS_MILES: f64 = 3956.0;
/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6367.0;

const EARTH_RADIUS_METERS: f64 = EARTH_RADIUS_KM * 1000.0;

/// Central angle between two points in radians, by the haversine formula.
pub fn central_angle(a: Coord, b: Coord) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let dlat = (b.y - a.y).to_radians();
    let dlng = (b.x - a.x).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
    2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

pub fn distance_miles(a: Coord, b: Coord) -> f64 {
    EARTH_RADIUS_MILES * central_angle(a, b)
}

pub fn distance_km(a: Coord, b: Coord) -> f64 {
    EARTH_RADIUS_KM * central_angle(a, b)
}

pub fn distance_meters(a: Coord, b: Coord) -> f64 {
    EARTH_RADIUS_METERS * central_angle(a, b)
}

/// Initial compass bearing from one point towards another, in [0, 360) degrees.
pub fn heading(from: Coord, to: Coord) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let dlng = (to.x - from.x).to_radians();
    let y = dlng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlng.cos();
    let degrees = y.atan2(x).to_degrees();
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// The point reached by following a great circle from `from` for `distance_meters` at the given
/// initial compass heading.
pub fn travel(from: Coord, distance_meters: f64, heading_degrees: f64) -> Coord {
    let delta = distance_meters / EARTH_RADIUS_METERS;
    let theta = heading_degrees.to_radians();
    let lat1 = from.y.to_radians();
    let lng1 = from.x.to_radians();
    let lat2 = asin_clamped(lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos());
    let lng2 = lng1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());
    Coord {
        x: normalize_lon(lng2.to_degrees()),
        y: lat2.to_degrees(),
    }
}

/// Wraps a longitude into (-180, 180].
pub fn normalize_lon(lon: f64) -> f64 {
    let shifted = (lon + 180.0).rem_euclid(360.0);
    if shifted == 0.0 {
        180.0
    } else {
        shifted - 180.0
    }
}

/// Where the great circle through `p1` at `heading1` crosses the one through `p2` at `heading2`.
///
/// Returns `None` when the two points coincide, when both paths run along one shared great
/// circle, or when the paths bend away from each other and the crossing is ambiguous.
pub fn intersection(p1: Coord, heading1: f64, p2: Coord, heading2: f64) -> Option<Coord> {
    let lat1 = p1.y.to_radians();
    let lng1 = p1.x.to_radians();
    let lat2 = p2.y.to_radians();
    let lng2 = p2.x.to_radians();
    let theta13 = heading1.to_radians();
    let theta23 = heading2.to_radians();

    let delta12 = central_angle(p1, p2);
    if delta12 == 0.0 {
        return None;
    }

    // Courses from each point towards the other. Rounding can push the ratios just past 1 and
    // acos to NaN; the course is 0 in that case.
    let mut theta_a =
        ((lat2.sin() - lat1.sin() * delta12.cos()) / (delta12.sin() * lat1.cos())).acos();
    if theta_a.is_nan() {
        theta_a = 0.0;
    }
    let mut theta_b =
        ((lat1.sin() - lat2.sin() * delta12.cos()) / (delta12.sin() * lat2.cos())).acos();
    if theta_b.is_nan() {
        theta_b = 0.0;
    }

    let (theta12, theta21) = if (lng2 - lng1).sin() > 0.0 {
        (theta_a, TAU - theta_b)
    } else {
        (TAU - theta_a, theta_b)
    };

    // Interior angles of the triangle p1-p2-crossing, wrapped to [-pi, pi)
    let alpha1 = (theta13 - theta12 + PI).rem_euclid(TAU) - PI;
    let alpha2 = (theta21 - theta23 + PI).rem_euclid(TAU) - PI;

    if alpha1.sin() == 0.0 && alpha2.sin() == 0.0 {
        // One shared great circle, infinitely many crossings
        return None;
    }
    if alpha1.sin() * alpha2.sin() < 0.0 {
        return None;
    }

    let alpha3 =
        acos_clamped(-alpha1.cos() * alpha2.cos() + alpha1.sin() * alpha2.sin() * delta12.cos());
    let delta13 = (delta12.sin() * alpha1.sin() * alpha2.sin())
        .atan2(alpha2.cos() + alpha1.cos() * alpha3.cos());
    let lat3 =
        asin_clamped(lat1.sin() * delta13.cos() + lat1.cos() * delta13.sin() * theta13.cos());
    let lng3 = lng1
        + (theta13.sin() * delta13.sin() * lat1.cos())
            .atan2(delta13.cos() - lat1.sin() * lat3.sin());

    Some(Coord {
        x: normalize_lon(lng3.to_degrees()),
        y: lat3.to_degrees(),
    })
}

fn asin_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

fn acos_clamped(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    fn london() -> Coord {
        coord! { x: -0.1246, y: 51.5007 }
    }

    fn nyc() -> Coord {
        coord! { x: -74.0445, y: 40.6892 }
    }

    #[test]
    fn test_distance_zero_and_symmetric() {
        assert_eq!(0.0, distance_meters(london(), london()));
        assert_eq!(distance_km(london(), nyc()), distance_km(nyc(), london()));
    }

    #[test]
    fn test_distance_london_nyc() {
        let km = distance_km(london(), nyc());
        assert!((km - 5571.34).abs() < 1.0);
        assert!((distance_miles(london(), nyc()) - 3461.63).abs() < 1.0);
        assert!((distance_meters(london(), nyc()) - 1000.0 * km).abs() < 0.01);
    }

    #[test]
    fn test_heading_cardinal_directions() {
        let origin = coord! { x: 0.0, y: 0.0 };
        assert_eq!(0.0, heading(origin, coord! { x: 0.0, y: 1.0 }));
        assert_eq!(90.0, heading(origin, coord! { x: 1.0, y: 0.0 }));
        assert_eq!(180.0, heading(origin, coord! { x: 0.0, y: -1.0 }));
        assert_eq!(270.0, heading(origin, coord! { x: -1.0, y: 0.0 }));
    }

    #[test]
    fn test_heading_diagonal() {
        let origin = coord! { x: 0.0, y: 0.0 };
        assert!((heading(origin, coord! { x: 1.0, y: 1.0 }) - 45.0).abs() < 0.01);
        assert!((heading(london(), nyc()) - 288.337).abs() < 0.001);
    }

    #[test]
    fn test_heading_always_in_range() {
        let pts = [
            london(),
            nyc(),
            coord! { x: 179.9, y: -33.0 },
            coord! { x: -179.9, y: 33.0 },
            coord! { x: 0.0, y: 89.0 },
        ];
        for a in pts {
            for b in pts {
                if a == b {
                    continue;
                }
                let h = heading(a, b);
                assert!((0.0..360.0).contains(&h), "heading {h} for {a:?} -> {b:?}");
            }
        }
    }

    #[test]
    fn test_travel_round_trip() {
        let dest = travel(london(), 5000.0, 77.0);
        assert!((distance_meters(london(), dest) - 5000.0).abs() < 0.001);
        assert!((heading(london(), dest) - 77.0).abs() < 1e-6);
    }

    #[test]
    fn test_travel_quarter_circumference() {
        let quarter = EARTH_RADIUS_KM * 1000.0 * std::f64::consts::FRAC_PI_2;
        let dest = travel(coord! { x: 0.0, y: 0.0 }, quarter, 90.0);
        assert!((dest.x - 90.0).abs() < 1e-9);
        assert!(dest.y.abs() < 1e-9);
    }

    #[test]
    fn test_travel_wraps_antimeridian() {
        let dest = travel(coord! { x: 179.9, y: 0.0 }, 50_000.0, 90.0);
        assert!(dest.x < 0.0);
        assert!((dest.x + 179.65).abs() < 0.001);
        assert!(dest.y.abs() < 1e-9);
    }

    #[test]
    fn test_normalize_lon() {
        assert_eq!(180.0, normalize_lon(180.0));
        assert_eq!(180.0, normalize_lon(-180.0));
        assert_eq!(180.0, normalize_lon(540.0));
        assert_eq!(180.0, normalize_lon(-540.0));
        assert_eq!(-179.0, normalize_lon(181.0));
        assert_eq!(179.0, normalize_lon(-181.0));
        assert_eq!(0.0, normalize_lon(0.0));
    }

    #[test]
    fn test_intersection_perpendicular() {
        // Eastbound along the equator meets northbound along the prime meridian at (0, 0)
        let pt = intersection(
            coord! { x: -1.0, y: 0.0 },
            90.0,
            coord! { x: 0.0, y: -1.0 },
            0.0,
        )
        .unwrap();
        assert!(pt.x.abs() < 1e-6);
        assert!(pt.y.abs() < 1e-6);
    }

    #[test]
    fn test_intersection_identical_points() {
        let p = coord! { x: 5.0, y: 5.0 };
        assert_eq!(None, intersection(p, 123.0, p, 7.0));
    }

    #[test]
    fn test_intersection_shared_circle() {
        // Two equator paths aimed at each other lie on one great circle
        let result = intersection(
            coord! { x: 0.0, y: 0.0 },
            90.0,
            coord! { x: 10.0, y: 0.0 },
            270.0,
        );
        assert_eq!(None, result);
    }

    #[test]
    fn test_intersection_diverging() {
        let result = intersection(
            coord! { x: 0.0, y: 0.0 },
            0.0,
            coord! { x: 10.0, y: 0.0 },
            180.0,
        );
        assert_eq!(None, result);
    }

    #[test]
    fn test_intersection_meridians_meet_at_pole() {
        let pt = intersection(
            coord! { x: 0.0, y: 0.0 },
            0.0,
            coord! { x: 10.0, y: 0.0 },
            0.0,
        )
        .unwrap();
        assert!((pt.y - 90.0).abs() < 1e-6);
    }
}
