use anyhow::Result;
use corridor::{search_area, to_geojson, BufferParams, DrawnShape};
use geo::line_string;

fn main() -> Result<()> {
    // A route drawn through Seattle, searched within two miles of every point along it
    let route = line_string![
        (x: -122.3321, y: 47.6062),
        (x: -122.3250, y: 47.6205),
        (x: -122.3110, y: 47.6348),
        (x: -122.2850, y: 47.6451),
        (x: -122.2700, y: 47.6615),
    ];
    let radius_meters = 2.0 * 1609.344;
    let area = search_area(
        &DrawnShape::Path(route),
        radius_meters,
        &BufferParams::default(),
    )?
    .expect("a positive radius always yields an area");
    println!("{}", serde_json::to_string_pretty(&to_geojson(&area))?);
    Ok(())
}
