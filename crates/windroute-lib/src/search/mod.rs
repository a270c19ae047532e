//! Global shortest-path search engine.
//!
//! A Hybrid A* planner over continuous position/time states whose identity
//! collapses to a [`DiscreteKey`] quantization cell. The planner is generic
//! over four seams — state, open list, close list, expander — so the
//! abstract search can be exercised on plain graph analogs while the
//! sailing instantiation couples it to the wind field and polar table.

mod close;
mod expand;
mod factory;
mod heap;
mod key;
mod open;
mod planner;
mod state;

pub use close::{CloseList, ClosedSet};
pub use expand::{Expander, SailingExpander};
pub use factory::StateFactory;
pub use heap::{BinaryHeap, Compare, HeapObserver, NaturalOrder, NullObserver};
pub use key::DiscreteKey;
pub use open::{NonUpdatingOpenList, OpenList, UpdatableOpenList};
pub use planner::find_shortest_path;
pub use state::{SearchState, State};
