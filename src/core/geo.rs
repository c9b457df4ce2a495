// Great-circle math between observer and strike positions.

use super::model::GeoPoint;

const EARTH_RADIUS_KM: f32 = 6371.0;

/// Wrap a bearing in degrees into `[-180, 180)`.
pub fn normalize_bearing(degrees: f32) -> f32 {
    let mut bearing = degrees % 360.0;
    if bearing < -180.0 {
        bearing += 360.0;
    } else if bearing >= 180.0 {
        bearing -= 360.0;
    }
    bearing
}

/// Initial great-circle bearing from `from` to `to`, in `[-180, 180)` degrees.
pub fn bearing_deg(from: GeoPoint, to: GeoPoint) -> f32 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let y = delta_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();
    normalize_bearing(y.atan2(x).to_degrees())
}

/// Haversine distance between two points in kilometers.
pub fn distance_km(from: GeoPoint, to: GeoPoint) -> f32 {
    let phi1 = from.latitude.to_radians();
    let phi2 = to.latitude.to_radians();
    let delta_phi = (to.latitude - from.latitude).to_radians();
    let delta_lambda = (to.longitude - from.longitude).to_radians();

    let half_phi = (delta_phi / 2.0).sin();
    let half_lambda = (delta_lambda / 2.0).sin();
    let a = half_phi * half_phi + phi1.cos() * phi2.cos() * half_lambda * half_lambda;
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}
