//! Time-indexed wind field.
//!
//! Wind is sampled on 2-D latitude/longitude grids, one grid per step of a
//! time [`LinearSpace`]. Time selection uses floor semantics (the grid in
//! effect at an instant is the one whose step contains it); spatial access
//! is clamped bilinear interpolation with short-way bearing blending.

use serde::{Deserialize, Serialize};

use crate::angle::signed_angular_distance;
use crate::error::{Error, Result};
use crate::interpolate::{Interpolator, NullInterpolator, NumericInterpolator};
use crate::linear::{LinearGrid, LinearGridBuilder, LinearList, LinearSpace};

/// Wind at one grid cell: bearing clockwise from north (radians) and speed
/// in meters per second.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindSample {
    pub bearing: f64,
    pub speed: f64,
}

impl WindSample {
    pub fn new(bearing: f64, speed: f64) -> Self {
        Self { bearing, speed }
    }
}

/// Blends wind samples taking the short way around the circle on bearing.
///
/// The interpolated bearing is deliberately not re-normalized into
/// `[0, 2π)`: downstream n-vector math is insensitive to whole turns.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindInterpolator;

impl Interpolator<WindSample> for WindInterpolator {
    fn interpolate(a: &WindSample, b: &WindSample, fraction: f64) -> WindSample {
        WindSample {
            bearing: a.bearing + signed_angular_distance(a.bearing, b.bearing) * fraction,
            speed: NumericInterpolator::interpolate(&a.speed, &b.speed, fraction),
        }
    }
}

/// Wind over a latitude/longitude grid at one instant.
pub type WindGrid = LinearGrid<WindSample, WindInterpolator>;

/// Builder for one wind grid; X is latitude, Y is longitude.
pub type WindGridBuilder = LinearGridBuilder<WindSample, WindInterpolator>;

/// Stack of wind grids indexed by time.
#[derive(Debug, Clone)]
pub struct TimeWindField {
    grids: LinearList<WindGrid, NullInterpolator>,
}

impl TimeWindField {
    /// The time axis; `stop()` is the forecast horizon.
    pub fn time_space(&self) -> &LinearSpace {
        self.grids.space()
    }

    /// Grid for a time-step index.
    pub fn grid(&self, index: usize) -> &WindGrid {
        self.grids.get(index)
    }

    /// Index of the grid in effect at `time`, clamped into the forecast
    /// range: before the first grid the first applies, at or past the
    /// horizon the last one.
    pub fn grid_index(&self, time: f64) -> usize {
        self.time_space().clamped_index(time)
    }

    /// Wind at `(time, lat, lon)`: floor selection over time, clamped
    /// bilinear interpolation in space.
    pub fn sample(&self, time: f64, lat: f64, lon: f64) -> WindSample {
        self.grid(self.grid_index(time)).clamped_interpolated(lat, lon)
    }
}

/// Accumulates wind grids in time order.
pub struct TimeWindFieldBuilder {
    space: LinearSpace,
    grids: Vec<WindGrid>,
}

impl TimeWindFieldBuilder {
    pub fn new(space: LinearSpace) -> Self {
        Self {
            space,
            grids: Vec::new(),
        }
    }

    /// Push the grid for the next time step; fails once every step has one.
    pub fn add(&mut self, grid: WindGrid) -> Result<&mut Self> {
        if self.grids.len() >= self.space.len() {
            return Err(Error::WindFieldFull {
                capacity: self.space.len(),
            });
        }
        self.grids.push(grid);
        Ok(self)
    }

    /// Seal the field, duplicating the last grid into the sentinel slot.
    /// Fails when any time step is still missing its grid.
    pub fn build(mut self) -> Result<TimeWindField> {
        let added = self.grids.len();
        if added != self.space.len() {
            return Err(Error::WindFieldIncomplete {
                expected: self.space.len(),
                actual: added,
            });
        }
        let last = self
            .grids
            .last()
            .expect("a valid time space holds at least two steps")
            .clone();
        self.grids.push(last);
        Ok(TimeWindField {
            grids: LinearList::from_parts(self.space, self.grids),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const DEG: f64 = PI / 180.0;

    fn uniform_grid(sample: WindSample) -> WindGrid {
        let lat_space = LinearSpace::new(0.0, 0.1, 3).unwrap();
        let lon_space = LinearSpace::new(0.0, 0.1, 3).unwrap();
        let mut builder = WindGridBuilder::new(lat_space, lon_space);
        for lat in 0..3 {
            for lon in 0..3 {
                builder.set(lat, lon, sample);
            }
        }
        builder.build()
    }

    fn field() -> TimeWindField {
        let space = LinearSpace::new(0.0, 3600.0, 3).unwrap();
        let mut builder = TimeWindFieldBuilder::new(space);
        builder.add(uniform_grid(WindSample::new(0.0, 0.0))).unwrap();
        builder.add(uniform_grid(WindSample::new(PI, 10.0))).unwrap();
        builder.add(uniform_grid(WindSample::new(PI, 21.0))).unwrap();
        builder.build().unwrap()
    }

    #[test]
    fn bearing_interpolation_takes_the_short_way() {
        let a = WindSample::new(355.0 * DEG, 0.0);
        let b = WindSample::new(5.0 * DEG, 10.0);

        let w = WindInterpolator::interpolate(&a, &b, 0.1);
        assert!((w.bearing - 356.0 * DEG).abs() < 1e-8);
        assert!((w.speed - 1.0).abs() < 1e-8);

        // Past a full turn the bearing is left un-normalized.
        let w = WindInterpolator::interpolate(&a, &b, 0.9);
        assert!((w.bearing - 364.0 * DEG).abs() < 1e-8);
        assert!((w.speed - 9.0).abs() < 1e-8);
    }

    #[test]
    fn grid_selection_floors_over_time() {
        let f = field();
        assert_eq!(f.grid_index(0.0), 0);
        assert_eq!(f.grid_index(3599.0), 0);
        assert_eq!(f.grid_index(3600.0), 1);
        assert_eq!(f.grid_index(7200.0), 2);
    }

    #[test]
    fn grid_selection_clamps_outside_the_forecast() {
        let f = field();
        assert_eq!(f.grid_index(-50.0), 0);
        assert_eq!(f.grid_index(50_000.0), 2);
    }

    #[test]
    fn sample_reads_the_active_grid() {
        let f = field();
        let calm = f.sample(100.0, 0.15, 0.15);
        assert!(calm.speed.abs() < 1e-8);

        let windy = f.sample(3700.0, 0.15, 0.15);
        assert!((windy.speed - 10.0).abs() < 1e-8);
        assert!((windy.bearing - PI).abs() < 1e-8);
    }

    #[test]
    fn sample_clamps_spatially() {
        let f = field();
        let w = f.sample(7200.0, -1.0, 5.0);
        assert!((w.speed - 21.0).abs() < 1e-8);
    }

    #[test]
    fn builder_rejects_excess_grids() {
        let space = LinearSpace::new(0.0, 3600.0, 2).unwrap();
        let mut builder = TimeWindFieldBuilder::new(space);
        builder.add(uniform_grid(WindSample::default())).unwrap();
        builder.add(uniform_grid(WindSample::default())).unwrap();
        assert!(matches!(
            builder.add(uniform_grid(WindSample::default())),
            Err(Error::WindFieldFull { capacity: 2 })
        ));
    }

    #[test]
    fn builder_rejects_missing_grids() {
        let space = LinearSpace::new(0.0, 3600.0, 3).unwrap();
        let mut builder = TimeWindFieldBuilder::new(space);
        builder.add(uniform_grid(WindSample::default())).unwrap();
        assert!(matches!(
            builder.build(),
            Err(Error::WindFieldIncomplete {
                expected: 3,
                actual: 1
            })
        ));
    }
}
