//! Great-circle distance math.
//!
//! Degree-based trig helpers and the haversine distance used to rank
//! hood centers by proximity.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Sine of an angle given in degrees.
pub fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Cosine of an angle given in degrees.
pub fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Great-circle distance between two coordinates in kilometers.
///
/// Haversine formula on a sphere of radius [`EARTH_RADIUS_KM`]. The
/// `min(1, …)` clamp keeps `asin` inside its domain when floating-point
/// error pushes `sqrt(a)` past 1 for near-antipodal inputs. The result
/// is rounded to 3 decimal places; any finite inputs produce a finite
/// non-negative distance.
pub fn haversine_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_lat = lat1 - lat2;
    let delta_lon = lon1 - lon2;
    let sin_half_lat = sin_deg(delta_lat / 2.0);
    let sin_half_lon = sin_deg(delta_lon / 2.0);
    let a = sin_half_lat * sin_half_lat + cos_deg(lat1) * cos_deg(lat2) * sin_half_lon * sin_half_lon;
    let c = a.sqrt().min(1.0).asin();
    round_km(2.0 * EARTH_RADIUS_KM * c)
}

/// Round to 3 decimal places (meter precision).
fn round_km(km: f64) -> f64 {
    (km * 1000.0).round() / 1000.0
}
