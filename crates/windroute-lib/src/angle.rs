//! Angular arithmetic shared by the wind interpolation and polar lookup code.

use std::f64::consts::{PI, TAU};

/// Shortest signed angular distance from `from` to `to`, in radians.
///
/// The result lies in `[-π, π)`. Adding it to `from` lands on an angle
/// equivalent to `to` while always taking the short way around the circle,
/// so interpolating a wind bearing from 355° towards 5° passes through
/// north instead of sweeping back through south.
pub fn signed_angular_distance(from: f64, to: f64) -> f64 {
    ((to - from) % TAU + 3.0 * PI) % TAU - PI
}
