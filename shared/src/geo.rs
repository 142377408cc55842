//! Great-circle distance and drive-time approximation

use crate::types::Coordinate;

/// Earth radius in km
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed average driving speed for the drive-time estimate
const AVG_SPEED_KMH: f64 = 65.0;

/// Great-circle distance between two coordinates in kilometres (haversine)
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let sin_d_lat = (d_lat / 2.0).sin();
    let sin_d_lon = (d_lon / 2.0).sin();
    let h = sin_d_lat * sin_d_lat + lat1.cos() * lat2.cos() * sin_d_lon * sin_d_lon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Approximate drive time in minutes, floored at 10
pub fn drive_minutes(km: f64) -> u32 {
    let mins = (km / AVG_SPEED_KMH) * 60.0;
    (mins.round() as u32).max(10)
}
