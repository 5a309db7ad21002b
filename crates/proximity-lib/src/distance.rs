//! Great-circle distance on a spherical Earth.
//!
//! Distances use the spherical law of cosines with the mean Earth radius,
//! which is within roughly 0.5% of ellipsoidal models. That is plenty for
//! "is this customer within 100 km" decisions.

use crate::coord::Coordinate;

/// Mean radius of the Earth in kilometres (IUGG).
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance between two coordinates in kilometres.
///
/// ```text
/// Δλ = |b.lon - a.lon|
/// Δσ = acos(sin a.lat · sin b.lat + cos a.lat · cos b.lat · cos Δλ)
/// d  = R · Δσ
/// ```
///
/// The cosine argument is clamped to `[-1, 1]` so rounding noise cannot push
/// it out of `acos`'s domain. Identical points measure exactly zero.
/// The result is bit-for-bit identical when the arguments are swapped.
///
/// # Examples
///
/// ```
/// use proximity_lib::{distance_km, Coordinate};
///
/// let office = Coordinate::parse("53.339428", "-6.257664").unwrap();
/// let cork = Coordinate::parse("51.8960528", "-8.4980692").unwrap();
/// let d = distance_km(&office, &cork);
/// assert!((d - 220.5).abs() < 0.1);
/// assert_eq!(d, distance_km(&cork, &office));
/// ```
pub fn distance_km(a: &Coordinate, b: &Coordinate) -> f64 {
    // sin² + cos² can land one ulp below 1.0
    if a == b {
        return 0.0;
    }
    // abs keeps cos(Δλ) independent of argument order
    let delta_lon = (b.lon_rad() - a.lon_rad()).abs();
    let cos_sigma = a.lat_rad().sin() * b.lat_rad().sin()
        + a.lat_rad().cos() * b.lat_rad().cos() * delta_lon.cos();
    let central_angle = cos_sigma.clamp(-1.0, 1.0).acos();
    EARTH_MEAN_RADIUS_KM * central_angle
}
