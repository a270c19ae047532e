//! Boat-velocity polar table.
//!
//! A polar table is a finite fan of [`PolarCurve`]s. Each curve fixes the
//! relative wind bearing (angle between the boat heading and the wind) and
//! maps wind speed to boat speed through a [`LinearList`]. The neighbor
//! expansion enumerates the stored curves directly, one successor per curve;
//! there is no interpolation across bearings, so the density and symmetry of
//! the fan decide trajectory quality.

use crate::angle::signed_angular_distance;
use crate::error::{Error, Result};
use crate::linear::{LinearList, LinearListBuilder, LinearSpace};

/// Boat speed as a function of wind speed at a fixed relative wind bearing.
#[derive(Debug, Clone)]
pub struct PolarCurve {
    relative_bearing: f64,
    speeds: LinearList<f64>,
}

impl PolarCurve {
    /// Angle between the boat heading and the wind, in `[0, 2π)`.
    pub fn relative_bearing(&self) -> f64 {
        self.relative_bearing
    }

    pub fn speeds(&self) -> &LinearList<f64> {
        &self.speeds
    }

    /// Boat speed for `wind_speed`, clamped into the curve's wind range.
    pub fn speed_for(&self, wind_speed: f64) -> f64 {
        self.speeds.clamped_interpolated(wind_speed)
    }
}

/// Ordered collection of polar curves with the running maximum boat speed.
///
/// `max_speed` is the largest sample seen across all curves; it is the
/// denominator of the admissible planner heuristic, since no trajectory can
/// average faster than the best point of sail.
#[derive(Debug, Clone)]
pub struct PolarTable {
    curves: Vec<PolarCurve>,
    max_speed: f64,
}

impl PolarTable {
    /// Curves in insertion order.
    pub fn curves(&self) -> &[PolarCurve] {
        &self.curves
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Boat speed from the curve nearest in relative bearing, `None` on an
    /// empty table.
    pub fn query(&self, relative_bearing: f64, wind_speed: f64) -> Option<f64> {
        self.curves
            .iter()
            .min_by(|a, b| {
                let da = signed_angular_distance(a.relative_bearing, relative_bearing).abs();
                let db = signed_angular_distance(b.relative_bearing, relative_bearing).abs();
                da.total_cmp(&db)
            })
            .map(|curve| curve.speed_for(wind_speed))
    }
}

/// Builds a [`PolarTable`] one curve at a time.
#[derive(Debug, Clone)]
pub struct PolarTableBuilder {
    wind_space: LinearSpace,
    curves: Vec<PolarCurve>,
    max_speed: f64,
}

impl PolarTableBuilder {
    /// The wind-speed space shared by every curve. Fails when it starts
    /// below zero.
    pub fn new(wind_space: LinearSpace) -> Result<Self> {
        if wind_space.start() < 0.0 {
            return Err(Error::NegativeWindSpeed {
                start: wind_space.start(),
            });
        }
        Ok(Self {
            wind_space,
            curves: Vec::new(),
            max_speed: 0.0,
        })
    }

    /// Append one curve, one boat-speed sample per wind-speed point.
    pub fn add(&mut self, relative_bearing: f64, samples: &[f64]) -> Result<&mut Self> {
        self.check(samples)?;
        self.push(relative_bearing, samples);
        Ok(self)
    }

    /// Append a curve together with its mirror at `2π - bearing`, for boats
    /// that sail the same on both tacks.
    pub fn add_symmetric(&mut self, relative_bearing: f64, samples: &[f64]) -> Result<&mut Self> {
        self.check(samples)?;
        self.push(relative_bearing, samples);
        self.push(std::f64::consts::TAU - relative_bearing, samples);
        Ok(self)
    }

    pub fn build(self) -> PolarTable {
        PolarTable {
            curves: self.curves,
            max_speed: self.max_speed,
        }
    }

    fn check(&self, samples: &[f64]) -> Result<()> {
        if samples.len() != self.wind_space.len() {
            return Err(Error::CurveLength {
                expected: self.wind_space.len(),
                actual: samples.len(),
            });
        }
        if let Some(&speed) = samples.iter().find(|s| **s < 0.0) {
            return Err(Error::NegativeBoatSpeed { speed });
        }
        Ok(())
    }

    fn push(&mut self, relative_bearing: f64, samples: &[f64]) {
        let mut builder = LinearListBuilder::new(self.wind_space);
        for (i, &speed) in samples.iter().enumerate() {
            builder.set(i, speed);
            self.max_speed = self.max_speed.max(speed);
        }
        self.curves.push(PolarCurve {
            relative_bearing,
            speeds: builder.build(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn wind_space() -> LinearSpace {
        LinearSpace::new(0.0, 10.0, 3).unwrap()
    }

    #[test]
    fn rejects_negative_wind_space() {
        let space = LinearSpace::new(-1.0, 1.0, 3).unwrap();
        assert!(matches!(
            PolarTableBuilder::new(space),
            Err(Error::NegativeWindSpeed { .. })
        ));
    }

    #[test]
    fn rejects_negative_boat_speed() {
        let mut builder = PolarTableBuilder::new(wind_space()).unwrap();
        assert!(matches!(
            builder.add(PI / 4.0, &[0.0, -5.0, 0.0]),
            Err(Error::NegativeBoatSpeed { speed }) if speed == -5.0
        ));
    }

    #[test]
    fn rejects_wrong_sample_count() {
        let mut builder = PolarTableBuilder::new(wind_space()).unwrap();
        assert!(matches!(
            builder.add(PI / 4.0, &[0.0, 5.0]),
            Err(Error::CurveLength {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn symmetric_add_mirrors_the_bearing() {
        let mut builder = PolarTableBuilder::new(wind_space()).unwrap();
        builder.add_symmetric(PI / 4.0, &[0.0, 5.0, 0.0]).unwrap();
        let table = builder.build();

        assert_eq!(table.len(), 2);
        assert!((table.curves()[0].relative_bearing() - PI / 4.0).abs() < 1e-8);
        assert!((table.curves()[1].relative_bearing() - 7.0 * PI / 4.0).abs() < 1e-8);
    }

    #[test]
    fn max_speed_tracks_all_curves() {
        let mut builder = PolarTableBuilder::new(wind_space()).unwrap();
        builder.add_symmetric(PI / 4.0, &[0.0, 5.0, 0.0]).unwrap();
        builder.add(PI, &[0.0, 3.0, 7.5]).unwrap();
        let table = builder.build();
        assert!((table.max_speed() - 7.5).abs() < 1e-8);
    }

    #[test]
    fn curve_interpolates_and_clamps_wind_speed() {
        let mut builder = PolarTableBuilder::new(wind_space()).unwrap();
        builder.add(PI / 2.0, &[0.0, 6.0, 4.0]).unwrap();
        let table = builder.build();
        let curve = &table.curves()[0];

        assert!((curve.speed_for(10.0) - 6.0).abs() < 1e-8);
        assert!((curve.speed_for(15.0) - 5.0).abs() < 1e-8);
        // Above the top of the curve the sentinel duplicate keeps the last value.
        assert!((curve.speed_for(25.0) - 4.0).abs() < 1e-8);
    }

    #[test]
    fn query_picks_the_nearest_bearing() {
        let mut builder = PolarTableBuilder::new(wind_space()).unwrap();
        builder.add_symmetric(PI / 4.0, &[0.0, 5.0, 0.0]).unwrap();
        builder.add(PI, &[0.0, 3.0, 7.5]).unwrap();
        let table = builder.build();

        // 130° is closer to 180° than to 45° or 315°.
        let broad_reach = 130.0 * PI / 180.0;
        assert!((table.query(broad_reach, 10.0).unwrap() - 3.0).abs() < 1e-8);
        // 350° is closer to the mirrored 315° curve.
        let near_north = 350.0 * PI / 180.0;
        assert!((table.query(near_north, 10.0).unwrap() - 5.0).abs() < 1e-8);
    }

    #[test]
    fn query_on_empty_table_is_none() {
        let table = PolarTableBuilder::new(wind_space()).unwrap().build();
        assert!(table.query(0.0, 5.0).is_none());
    }
}
