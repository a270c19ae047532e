//! Time penalties for switching between polar-curve configurations.
//!
//! A maneuver such as a tack or a gybe costs time that the bare polar table
//! does not capture. The penalty table is a square lookup over curve indexes
//! of a [`PolarTable`](crate::polar::PolarTable), with one extra
//! configuration past the last curve standing for "no wind"; entering or
//! leaving the null-wind configuration is always free. Hosts apply these
//! penalties when post-processing a trajectory into maneuvers.

use crate::error::{Error, Result};
use crate::interpolate::NullInterpolator;
use crate::linear::{LinearGrid, LinearGridBuilder, LinearSpace};
use crate::polar::PolarTable;

/// Square table of switching penalties, in seconds.
///
/// For a two-curve polar the layout is:
///
/// ```text
///      to   0  1  2
/// from 0    a  b  0
///      1    c  d  0
///      2    0  0  0
/// ```
///
/// where index 2 is the null-wind configuration.
#[derive(Debug, Clone)]
pub struct PenaltyTable {
    table: LinearGrid<f64, NullInterpolator>,
}

impl PenaltyTable {
    /// Penalty when switching from one configuration to another.
    ///
    /// The null-wind configuration is a valid index. Panics beyond it; see
    /// [`PenaltyTable::checked_penalty`].
    pub fn penalty(&self, from: usize, to: usize) -> f64 {
        *self.table.get(from, to)
    }

    pub fn checked_penalty(&self, from: usize, to: usize) -> Result<f64> {
        Ok(*self.table.checked_get(from, to)?)
    }
}

/// Builds a [`PenaltyTable`] sized after a polar table.
///
/// All penalties involving the null-wind configuration are fixed at zero;
/// the builder rejects writes to them.
#[derive(Debug, Clone)]
pub struct PenaltyTableBuilder {
    configurations: usize,
    table: LinearGridBuilder<f64, NullInterpolator>,
}

impl PenaltyTableBuilder {
    pub fn new(polar: &PolarTable) -> Result<Self> {
        let configurations = polar.len();
        let axis = LinearSpace::new(0.0, 1.0, configurations + 1)?;
        Ok(Self {
            configurations,
            table: LinearGridBuilder::new(axis, axis),
        })
    }

    /// Penalty currently stored for a pair of curve indexes.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.configurations && to < self.configurations);
        *self.table.get(from, to)
    }

    /// Store the same penalty for the maneuver and its reverse.
    ///
    /// Panics on the null-wind configuration; see
    /// [`PenaltyTableBuilder::checked_set_symmetric`].
    pub fn set_symmetric(&mut self, from: usize, to: usize, seconds: f64) {
        assert!(from < self.configurations && to < self.configurations);
        self.table.set(from, to, seconds);
        self.table.set(to, from, seconds);
    }

    pub fn checked_set_symmetric(&mut self, from: usize, to: usize, seconds: f64) -> Result<()> {
        if from >= self.configurations || to >= self.configurations {
            return Err(Error::GridIndexOutOfRange {
                x: from,
                y: to,
                x_len: self.configurations,
                y_len: self.configurations,
            });
        }
        self.table.set(from, to, seconds);
        self.table.set(to, from, seconds);
        Ok(())
    }

    pub fn build(self) -> PenaltyTable {
        PenaltyTable {
            table: self.table.build(),
        }
    }
}
