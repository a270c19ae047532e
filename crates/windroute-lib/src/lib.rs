//! Sailing weather-routing core.
//!
//! Computes the fastest route for a sailing vessel across open sea under a
//! time-varying wind field. Given a start, a target, a departure time, a
//! polar table (boat speed by wind speed and relative wind bearing), and a
//! stack of wind grids, the planner returns the state that first reaches
//! the discretized neighborhood of the target, minimizing elapsed time.
//!
//! # Overview
//!
//! The search is a Hybrid A*: states carry a continuous position (an
//! n-vector on the sphere) and time, but their identity collapses to a
//! discrete 4-cell of quantized time and position. Visiting the same place
//! at a different time is a different state, which is what keeps the
//! search correct under wind that changes over time.
//!
//! The typical assembly is:
//!
//! 1. Build a [`PolarTable`] and a [`TimeWindField`] through their
//!    builders.
//! 2. Create a [`StateFactory`] with the discretization resolutions, the
//!    target, and the polar's maximum speed, then seed an open list
//!    ([`UpdatableOpenList`] or [`NonUpdatingOpenList`]).
//! 3. Run [`find_shortest_path`] with a [`CloseList`] and a
//!    [`SailingExpander`].
//! 4. Walk the parent keys through the close list to reconstruct the
//!    trajectory.
//!
//! Parsers for polar and wind-grid file formats, land handling, and any
//! CLI live outside this crate.

#![deny(warnings)]

pub mod angle;
pub mod error;
pub mod geo;
pub mod interpolate;
pub mod linear;
pub mod penalty;
pub mod polar;
pub mod search;
pub mod wind;

pub use angle::signed_angular_distance;
pub use error::{Error, Result};
pub use geo::{NVector, EARTH_RADIUS};
pub use interpolate::{Interpolator, NullInterpolator, NumericInterpolator};
pub use linear::{
    InterpolationWeight, LinearGrid, LinearGridBuilder, LinearList, LinearListBuilder, LinearSpace,
};
pub use penalty::{PenaltyTable, PenaltyTableBuilder};
pub use polar::{PolarCurve, PolarTable, PolarTableBuilder};
pub use search::{
    find_shortest_path, BinaryHeap, CloseList, ClosedSet, Compare, DiscreteKey, Expander,
    HeapObserver, NaturalOrder, NonUpdatingOpenList, NullObserver, OpenList, SailingExpander,
    SearchState, State, StateFactory, UpdatableOpenList,
};
pub use wind::{
    TimeWindField, TimeWindFieldBuilder, WindGrid, WindGridBuilder, WindInterpolator, WindSample,
};
