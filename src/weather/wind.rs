//! Wind formulas.

use crate::error::Result;
use crate::series::SeriesOps;

/// Wind speed magnitude from orthogonal U and V components, in the units of
/// the inputs.
pub fn wind_speed<S: SeriesOps>(u: &S, v: &S) -> Result<S> {
    u.zip_with(v, |u, v| (u * u + v * v).sqrt())
}

/// Adjust wind speed measured at height `z` [m] above the surface to the
/// 2 m reference height, assuming a short grass surface (FAO equation 47).
pub fn wind_speed_2m<S: SeriesOps>(ws: &S, z: f64) -> S {
    ws.map(|ws| ws * 4.87 / (67.8 * z - 5.42).ln())
}
