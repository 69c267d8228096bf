//! Great-circle math on a spherical Earth.
//!
//! All functions take degrees and return meters (or degrees for bearings).

use super::coordinate::Coordinate;

/// Mean Earth radius used for every distance computation.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between `a` and `b` (haversine).
///
/// Symmetric, zero for identical points and continuous everywhere,
/// including across the antimeridian.
///
/// ```rust
/// use tfence::geo::{distance, Coordinate};
///
/// let gangnam = Coordinate::new(37.4979, 127.0276);
/// assert_eq!(distance(gangnam, gangnam), 0.0);
/// ```
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let sin_dlat = (delta_lat / 2.0).sin();
    let sin_dlon = (delta_lon / 2.0).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    // Rounding can push h a hair outside [0, 1] for near-antipodal points.
    let h = h.clamp(0.0, 1.0);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Initial bearing from `from` to `to`, in degrees clockwise from north
/// within `[0, 360)`.
pub fn bearing(from: Coordinate, to: Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();
    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Point reached by travelling `distance_meters` from `origin` along the
/// initial bearing `bearing_deg`. Longitude is normalized to `[-180, 180]`.
///
/// ```rust
/// use tfence::geo::{destination, distance, Coordinate};
///
/// let origin = Coordinate::new(37.4979, 127.0276);
/// let point = destination(origin, 45.0, 499.9);
/// assert!((distance(origin, point) - 499.9).abs() < 1e-6);
/// ```
pub fn destination(origin: Coordinate, bearing_deg: f64, distance_meters: f64) -> Coordinate {
    let angular = distance_meters / EARTH_RADIUS_M;
    let theta = bearing_deg.to_radians();
    let lat1 = origin.latitude.to_radians();
    let lon1 = origin.longitude.to_radians();

    let sin_lat2 = lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * theta.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lon2 = lon1
        + (theta.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * sin_lat2);

    Coordinate::new(lat2.to_degrees(), normalize_longitude(lon2.to_degrees()))
}

fn normalize_longitude(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 && lon > 0.0 {
        180.0
    } else {
        wrapped
    }
}
