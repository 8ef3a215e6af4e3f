use geo::{Coord, Geometry, MapCoordsInPlace};
use geojson::{Feature, GeoJson};

/// Copies a geometry with every coordinate kept to four decimal places, the precision the
/// search form persists (about 11 m at the equator).
pub fn rounded(geometry: &Geometry) -> Geometry {
    let mut out = geometry.clone();
    out.map_coords_in_place(|pt: Coord| Coord {
        x: round4(pt.x),
        y: round4(pt.y),
    });
    out
}

fn round4(value: f64) -> f64 {
    (value * 1e4).round() / 1e4
}

/// The rounded GeoJSON feature for a search area. Positions serialize as [lng, lat].
pub fn to_geojson(geometry: &Geometry) -> GeoJson {
    let value = geojson::Value::from(&rounded(geometry));
    GeoJson::Feature(Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(value)),
        id: None,
        properties: None,
        foreign_members: None,
    })
}

/// Serialized form of [`to_geojson`], ready for a hidden form field.
pub fn form_value(geometry: &Geometry) -> String {
    to_geojson(geometry).to_string()
}
