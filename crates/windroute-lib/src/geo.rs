//! N-vector geodesy on the spherical Earth.
//!
//! Positions are unit 3-vectors ("n-vectors"), which keep great-circle
//! distance, bearing, and destination free of the longitude wrap-around and
//! polar singularities that plague raw latitude/longitude arithmetic for
//! the operations used here.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Unit vector on the Earth sphere.
///
/// Built from latitude/longitude the norm is 1 by construction and is never
/// re-normalized afterwards; [`NVector::destination`] preserves the norm
/// analytically. Equality is exact component-wise comparison, so two
/// n-vectors obtained through different computations need not compare equal
/// even when they denote the same point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl NVector {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build an n-vector from a latitude and longitude, both in radians.
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();
        Self::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat)
    }

    /// Recover `(latitude, longitude)` in radians.
    pub fn to_lat_lon(&self) -> (f64, f64) {
        (self.z.asin(), self.y.atan2(self.x))
    }

    /// Great-circle distance to `other`, in meters.
    ///
    /// Uses `atan2(|a × b|, a · b)`, which stays well-conditioned for both
    /// nearby and antipodal points.
    pub fn distance(&self, other: &NVector) -> f64 {
        let cross = self.cross(other);
        EARTH_RADIUS * cross.norm().atan2(self.dot(other))
    }

    /// Initial great-circle course towards `other`, clockwise from north.
    pub fn bearing(&self, other: &NVector) -> f64 {
        let (lat1, lon1) = self.to_lat_lon();
        let (lat2, lon2) = other.to_lat_lon();
        let d_lon = lon2 - lon1;

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
        y.atan2(x)
    }

    /// Position reached by sailing `distance` meters on `bearing` (clockwise
    /// from north, in radians).
    ///
    /// The local frame is `east = ẑ × self`, `north = self × east`; both are
    /// undefined at the poles, where this routine is not used. The result is
    /// a unit vector analytically, no re-normalization happens.
    pub fn destination(&self, bearing: f64, distance: f64) -> NVector {
        let east = NVector::new(-self.y, self.x, 0.0);
        let north = self.cross(&east);

        let (sin_b, cos_b) = bearing.sin_cos();
        let direction = NVector::new(
            cos_b * north.x + sin_b * east.x,
            cos_b * north.y + sin_b * east.y,
            cos_b * north.z + sin_b * east.z,
        );

        let angle = distance / EARTH_RADIUS;
        let (sin_a, cos_a) = angle.sin_cos();
        NVector::new(
            cos_a * self.x + sin_a * direction.x,
            cos_a * self.y + sin_a * direction.y,
            cos_a * self.z + sin_a * direction.z,
        )
    }

    fn cross(&self, other: &NVector) -> NVector {
        NVector::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    fn dot(&self, other: &NVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }
}
