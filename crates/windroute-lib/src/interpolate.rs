//! Interpolation strategies plugged into the linear lookup tables.

/// Blends two samples given the fraction of the way from `a` to `b`.
///
/// Implementations are stateless: the strategy is selected through the type
/// parameter of [`LinearList`](crate::linear::LinearList) and
/// [`LinearGrid`](crate::linear::LinearGrid).
pub trait Interpolator<V> {
    fn interpolate(a: &V, b: &V, fraction: f64) -> V;
}

/// Standard linear interpolation, `a + (b - a) * fraction`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericInterpolator;

impl Interpolator<f64> for NumericInterpolator {
    fn interpolate(a: &f64, b: &f64, fraction: f64) -> f64 {
        a + (b - a) * fraction
    }
}

/// Pins the result to the floor sample, ignoring `b` and the fraction.
///
/// Used where a value holds for a whole step, e.g. selecting the wind grid
/// in effect at an instant or reading a penalty table.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullInterpolator;

impl<V: Clone> Interpolator<V> for NullInterpolator {
    fn interpolate(a: &V, _b: &V, _fraction: f64) -> V {
        a.clone()
    }
}
