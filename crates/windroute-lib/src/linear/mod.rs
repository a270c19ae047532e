//! Regularly-spaced 1-D and 2-D lookup tables.
//!
//! [`LinearSpace`] encodes a set of evenly spaced sample coordinates;
//! [`LinearList`] and [`LinearGrid`] attach values to every point of one or
//! two spaces and expose checked, clamped, and interpolated accessors. The
//! interpolation strategy is a type parameter, see
//! [`crate::interpolate`].

mod grid;
mod list;
mod space;

pub use grid::{LinearGrid, LinearGridBuilder};
pub use list::{LinearList, LinearListBuilder};
pub use space::{InterpolationWeight, LinearSpace};
