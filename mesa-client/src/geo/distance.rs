//! Great-circle distance

use shared::models::Coordinate;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two coordinates, in meters.
///
/// Deterministic and side-effect free; accuracy of the fix is ignored
/// here, callers weigh it separately.
pub fn haversine_m(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}
