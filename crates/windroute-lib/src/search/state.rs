use crate::geo::NVector;
use crate::search::key::DiscreteKey;

/// Identity and ordering required of a search state by the planner.
///
/// The two relations serve different purposes and must not be confused:
/// `same` is the goal test (spatial cell match for the sailing state),
/// `better` is the frontier ordering (strict `f <`). Ties under `better`
/// are left to the open list's insertion order.
pub trait SearchState: Clone {
    fn same(&self, other: &Self) -> bool;
    fn better(&self, other: &Self) -> bool;
}

/// One point of the search: a continuous position and time tagged with the
/// discrete key used for duplicate detection.
///
/// `f` is fixed to `g + h` at construction and never recomputed. The parent
/// key is absent only for seed states; together with the close list it
/// encodes the final trajectory for reconstruction.
#[derive(Debug, Clone)]
pub struct State {
    position: NVector,
    time: f64,
    key: DiscreteKey,
    g: f64,
    h: f64,
    f: f64,
    parent: Option<DiscreteKey>,
}

impl State {
    pub(crate) fn new(
        position: NVector,
        time: f64,
        key: DiscreteKey,
        g: f64,
        h: f64,
        parent: Option<DiscreteKey>,
    ) -> Self {
        Self {
            position,
            time,
            key,
            g,
            h,
            f: g + h,
            parent,
        }
    }

    pub fn position(&self) -> &NVector {
        &self.position
    }

    /// Seconds since the epoch of the wind field.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn key(&self) -> &DiscreteKey {
        &self.key
    }

    /// Cost from the start, in seconds.
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Admissible estimate of the remaining cost, in seconds.
    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn f(&self) -> f64 {
        self.f
    }

    pub fn parent(&self) -> Option<&DiscreteKey> {
        self.parent.as_ref()
    }
}

/// State identity is the full discrete key, nothing else.
impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl SearchState for State {
    fn same(&self, other: &Self) -> bool {
        self.key.same_cell(&other.key)
    }

    fn better(&self, other: &Self) -> bool {
        self.f < other.f
    }
}
