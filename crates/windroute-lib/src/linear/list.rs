use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::interpolate::{Interpolator, NumericInterpolator};
use crate::linear::{InterpolationWeight, LinearSpace};

/// Values attached to every point of a [`LinearSpace`].
///
/// Each interior value represents the step `[value(i), value(i + 1))`:
///
/// ```text
///          [start()   1     2     3     4    stop()]
/// space  :  2.0      2.5   3.0   3.5   4.0   4.5
/// values :  4.0     -2.0   5.0  20.0  33.0  11.0
/// ```
///
/// The backing buffer holds one extra slot past the last sample, a duplicate
/// of the final value. The floor-index formula yields the last index for
/// `q = stop`, and interpolation reads `index + 1`, so the duplicate removes
/// a bounds branch from every accessor.
#[derive(Debug, Clone)]
pub struct LinearList<V, I = NumericInterpolator> {
    space: LinearSpace,
    values: Vec<V>,
    _interpolator: PhantomData<I>,
}

impl<V, I> LinearList<V, I>
where
    I: Interpolator<V>,
{
    pub(crate) fn from_parts(space: LinearSpace, values: Vec<V>) -> Self {
        debug_assert_eq!(values.len(), space.len() + 1);
        Self {
            space,
            values,
            _interpolator: PhantomData,
        }
    }

    pub fn space(&self) -> &LinearSpace {
        &self.space
    }

    /// Backing buffer, sentinel slot included.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Value at a sample index.
    ///
    /// Panics when `index` is past the last sample; see
    /// [`LinearList::checked_get`] for the failable variant.
    pub fn get(&self, index: usize) -> &V {
        assert!(index < self.space.len());
        &self.values[index]
    }

    pub fn checked_get(&self, index: usize) -> Result<&V> {
        if index >= self.space.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.space.len(),
            });
        }
        Ok(&self.values[index])
    }

    /// Value of the step containing the coordinate `q`.
    pub fn at(&self, q: f64) -> Result<&V> {
        Ok(&self.values[self.space.index(q)?])
    }

    /// Like [`LinearList::at`], with `q` clamped into the space range.
    pub fn clamped_at(&self, q: f64) -> &V {
        &self.values[self.space.clamped_index(q)]
    }

    /// Value interpolated between the two samples surrounding `q`.
    pub fn interpolated(&self, q: f64) -> Result<V> {
        Ok(self.interpolate(self.space.weight(q)?))
    }

    /// Like [`LinearList::interpolated`], with `q` clamped into the space
    /// range.
    pub fn clamped_interpolated(&self, q: f64) -> V {
        self.interpolate(self.space.clamped_weight(q))
    }

    fn interpolate(&self, weight: InterpolationWeight) -> V {
        I::interpolate(
            &self.values[weight.index],
            &self.values[weight.index + 1],
            weight.fraction,
        )
    }
}

/// Accumulates values for every point of a space, then seals the sentinel
/// slot.
#[derive(Debug, Clone)]
pub struct LinearListBuilder<V, I = NumericInterpolator> {
    space: LinearSpace,
    values: Vec<V>,
    _interpolator: PhantomData<I>,
}

impl<V, I> LinearListBuilder<V, I>
where
    V: Default + Clone,
    I: Interpolator<V>,
{
    pub fn new(space: LinearSpace) -> Self {
        let values = vec![V::default(); space.len() + 1];
        Self {
            space,
            values,
            _interpolator: PhantomData,
        }
    }

    pub fn space(&self) -> &LinearSpace {
        &self.space
    }

    /// Store the value for a sample index. Panics past the last sample.
    pub fn set(&mut self, index: usize, value: V) {
        assert!(index < self.space.len());
        self.values[index] = value;
    }

    pub fn checked_set(&mut self, index: usize, value: V) -> Result<()> {
        if index >= self.space.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.space.len(),
            });
        }
        self.values[index] = value;
        Ok(())
    }

    pub fn get(&self, index: usize) -> &V {
        assert!(index < self.space.len());
        &self.values[index]
    }

    /// Duplicate the last sample into the sentinel slot and freeze the list.
    pub fn build(mut self) -> LinearList<V, I> {
        let last = self.values[self.space.len() - 1].clone();
        *self
            .values
            .last_mut()
            .expect("builder buffer is never empty") = last;
        LinearList::from_parts(self.space, self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> LinearList<f64> {
        let space = LinearSpace::new(2.0, 0.5, 6).unwrap();
        let mut builder = LinearListBuilder::new(space);
        for (i, v) in [4.0, -2.0, 5.0, 20.0, 33.0, 11.0].iter().enumerate() {
            builder.set(i, *v);
        }
        builder.build()
    }

    #[test]
    fn build_duplicates_last_value() {
        assert_eq!(list().values(), &[4.0, -2.0, 5.0, 20.0, 33.0, 11.0, 11.0]);
    }

    #[test]
    fn lookup_by_coordinate_floors() {
        let l = list();
        assert_eq!(*l.at(2.0).unwrap(), 4.0);
        assert_eq!(*l.at(2.7).unwrap(), -2.0);
        assert_eq!(*l.at(4.2).unwrap(), 33.0);
        // Access at stop is defined and returns the last meaningful value.
        assert_eq!(*l.at(4.5).unwrap(), 11.0);
    }

    #[test]
    fn lookup_out_of_range_fails() {
        let l = list();
        assert!(matches!(l.at(1.9), Err(Error::OutOfRange { .. })));
        assert!(matches!(l.at(4.6), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn clamped_lookup_saturates() {
        let l = list();
        assert_eq!(*l.clamped_at(0.0), 4.0);
        assert_eq!(*l.clamped_at(9.0), 11.0);
    }

    #[test]
    fn checked_get_validates_index() {
        let l = list();
        assert_eq!(*l.checked_get(0).unwrap(), 4.0);
        assert!(matches!(
            l.checked_get(6),
            Err(Error::IndexOutOfRange { index: 6, len: 6 })
        ));
    }

    #[test]
    fn interpolated_returns_nodes_and_midpoints() {
        let l = list();
        assert!((l.interpolated(3.0).unwrap() - 5.0).abs() < 1e-8);
        assert!((l.interpolated(3.25).unwrap() - 12.5).abs() < 1e-8);
        assert!((l.interpolated(4.5).unwrap() - 11.0).abs() < 1e-8);
    }

    #[test]
    fn clamped_interpolated_saturates() {
        let l = list();
        assert!((l.clamped_interpolated(1.0) - 4.0).abs() < 1e-8);
        assert!((l.clamped_interpolated(7.0) - 11.0).abs() < 1e-8);
    }

    #[test]
    fn builder_checked_set_validates_index() {
        let space = LinearSpace::new(0.0, 1.0, 3).unwrap();
        let mut builder: LinearListBuilder<f64> = LinearListBuilder::new(space);
        assert!(builder.checked_set(2, 1.0).is_ok());
        assert!(matches!(
            builder.checked_set(3, 1.0),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
    }
}
