use tracing::trace;

use crate::polar::PolarTable;
use crate::search::factory::StateFactory;
use crate::search::state::State;
use crate::wind::TimeWindField;

/// Produces the successors of a state.
pub trait Expander<S> {
    /// Append the successors of `state` to `neighbors`, which the caller
    /// clears and reuses between expansions.
    fn search(&self, state: &S, neighbors: &mut Vec<S>);
}

/// Couples the continuous sailing dynamics to the discretized state space.
///
/// Expansion of a state emits, in this order:
///
/// 1. a hold-in-place successor at the next wind-grid time, letting the
///    planner wait out bad weather, then
/// 2. one successor per polar curve, in table storage order, each sailing
///    `step` meters on the heading `wind bearing + relative bearing`.
///
/// The order is fixed: it decides tie-breaking under equal `f` in the
/// non-updating open list.
#[derive(Debug, Clone)]
pub struct SailingExpander<'a> {
    factory: &'a StateFactory,
    wind: &'a TimeWindField,
    polar: &'a PolarTable,
    step_length: f64,
}

impl<'a> SailingExpander<'a> {
    /// `step_length` is the fixed expansion arc in meters; the last step
    /// towards the target is shortened to land on it.
    pub fn new(
        factory: &'a StateFactory,
        wind: &'a TimeWindField,
        polar: &'a PolarTable,
        step_length: f64,
    ) -> Self {
        Self {
            factory,
            wind,
            polar,
            step_length,
        }
    }
}

impl Expander<State> for SailingExpander<'_> {
    fn search(&self, state: &State, neighbors: &mut Vec<State>) {
        let time_space = self.wind.time_space();

        // Past the forecast horizon the state has no future.
        if state.time() >= time_space.stop() {
            trace!(time = state.time(), "state beyond the wind horizon");
            return;
        }

        let grid_index = self.wind.grid_index(state.time());
        let next_time = time_space.value(grid_index + 1);
        neighbors.push(
            self.factory
                .successor(*state.position(), next_time, *state.key()),
        );

        let (lat, lon) = state.position().to_lat_lon();
        let wind = self.wind.grid(grid_index).clamped_interpolated(lat, lon);

        let step = self.step_length.min(self.factory.distance_to_target(state));
        for curve in self.polar.curves() {
            let boat_speed = curve.speed_for(wind.speed);
            // In irons, or beyond the top end of the curve.
            if boat_speed <= 0.0 {
                continue;
            }

            // Not normalized into [0, 2π); n-vector math absorbs whole turns.
            let heading = wind.bearing + curve.relative_bearing();
            let position = state.position().destination(heading, step);
            neighbors.push(self.factory.successor(
                position,
                state.time() + step / boat_speed,
                *state.key(),
            ));
        }
    }
}
