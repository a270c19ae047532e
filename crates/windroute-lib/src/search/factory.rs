use crate::geo::NVector;
use crate::search::key::DiscreteKey;
use crate::search::state::State;

/// Builds search states with their discrete key, cost, and heuristic.
///
/// The factory owns the discretization resolutions, the sphere radius used
/// for key scaling, the target position, and the polar table's maximum boat
/// speed. The heuristic `h = distance(position, target) / max_speed` is
/// admissible: no trajectory can average faster than the best point of
/// sail.
#[derive(Debug, Clone)]
pub struct StateFactory {
    discrete_time: f64,
    discrete_distance: f64,
    start_time: f64,
    radius: f64,
    target: NVector,
    max_speed: f64,
}

impl StateFactory {
    /// Factory for a search whose cost epoch is `t = 0`.
    ///
    /// `discrete_time` and `discrete_distance` are the key resolutions in
    /// seconds and meters, `radius` scales the unit position onto meters.
    pub fn new(
        discrete_time: f64,
        discrete_distance: f64,
        radius: f64,
        target: NVector,
        max_speed: f64,
    ) -> Self {
        Self::with_start_time(0.0, discrete_time, discrete_distance, radius, target, max_speed)
    }

    /// Factory charging costs relative to a non-zero departure time, so that
    /// `g = t - start_time`.
    pub fn with_start_time(
        start_time: f64,
        discrete_time: f64,
        discrete_distance: f64,
        radius: f64,
        target: NVector,
        max_speed: f64,
    ) -> Self {
        Self {
            discrete_time,
            discrete_distance,
            start_time,
            radius,
            target,
            max_speed,
        }
    }

    /// Build a seed state, the only kind without a parent key.
    pub fn seed(&self, position: NVector, time: f64) -> State {
        self.build(position, time, None)
    }

    /// Build a successor recording the cell it was expanded from.
    pub fn successor(&self, position: NVector, time: f64, parent: DiscreteKey) -> State {
        self.build(position, time, Some(parent))
    }

    /// Remaining straight-line distance encoded in a state's heuristic.
    ///
    /// Inverse of the heuristic; the expander uses it to shorten the final
    /// step onto the target.
    pub fn distance_to_target(&self, state: &State) -> f64 {
        debug_assert!(state.h() >= 0.0);
        state.h() * self.max_speed
    }

    fn build(&self, position: NVector, time: f64, parent: Option<DiscreteKey>) -> State {
        State::new(
            position,
            time,
            self.discrete_key(&position, time),
            time - self.start_time,
            self.heuristic(&position),
            parent,
        )
    }

    fn discrete_key(&self, position: &NVector, time: f64) -> DiscreteKey {
        let scale = self.radius / self.discrete_distance;
        DiscreteKey::new(
            (time / self.discrete_time).floor() as u64,
            (position.x * scale).floor() as i64,
            (position.y * scale).floor() as i64,
            (position.z * scale).floor() as i64,
        )
    }

    fn heuristic(&self, position: &NVector) -> f64 {
        position.distance(&self.target) / self.max_speed
    }
}
