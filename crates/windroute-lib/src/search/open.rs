//! Open-list variants for the planner frontier.
//!
//! Two interchangeable implementations, selected at compile time through
//! the generic parameter of the planner:
//!
//! - [`UpdatableOpenList`] pairs a key-indexed map with an observed binary
//!   heap, so a state already on the frontier can be replaced by a better
//!   copy in O(log n). Keys are unique.
//! - [`NonUpdatingOpenList`] is a plain heap; duplicates with the same key
//!   coexist and the close list filters the stale ones at pop time.

use std::cell::RefCell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

use crate::search::heap::{BinaryHeap, Compare, HeapObserver, NullObserver};
use crate::search::key::DiscreteKey;
use crate::search::state::{SearchState, State};

/// Frontier of live states ordered by `better`.
///
/// `SUPPORTS_UPDATE` tells the planner whether colliding keys are deduped
/// on insert and replaceable through [`OpenList::update`]; the planner
/// specializes on it, the way the original selects an implementation at
/// compile time.
pub trait OpenList<S> {
    const SUPPORTS_UPDATE: bool;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Remove and return the best state. Panics on an empty list.
    fn pop(&mut self) -> S;

    /// Returns `true` when the state created a new entry, `false` on a key
    /// collision (update-supporting lists only; a plain heap always
    /// inserts).
    fn insert(&mut self, state: &S) -> bool;

    /// Current entry colliding with `state`, when the list tracks one.
    fn existing(&self, state: &S) -> Option<S> {
        let _ = state;
        None
    }

    /// Replace the entry colliding with `state` by `state`.
    ///
    /// Precondition: the replacement is strictly better than the entry it
    /// overwrites, anything else corrupts the heap order.
    fn update(&mut self, state: &S) {
        let _ = state;
        debug_assert!(
            Self::SUPPORTS_UPDATE,
            "update on a non-updating open list"
        );
    }
}

/// Map cell shared between the key index and the heap.
#[derive(Debug)]
struct OpenCell {
    state: State,
    heap_index: usize,
}

type SharedCells = Rc<RefCell<Vec<OpenCell>>>;

/// Orders heap slots by `better` on the states they point to.
#[derive(Debug, Clone)]
struct CellOrder {
    cells: SharedCells,
}

impl Compare<usize> for CellOrder {
    fn less(&self, a: &usize, b: &usize) -> bool {
        let cells = self.cells.borrow();
        cells[*a].state.better(&cells[*b].state)
    }
}

/// Mirrors every heap move into the cells' recorded heap positions.
#[derive(Debug, Clone)]
struct CellTracker {
    cells: SharedCells,
}

impl HeapObserver<usize> for CellTracker {
    fn before_swap(&mut self, items: &[usize], a: usize, b: usize) {
        let mut cells = self.cells.borrow_mut();
        cells[items[a]].heap_index = b;
        cells[items[b]].heap_index = a;
    }

    fn after_emplace(&mut self, items: &[usize], index: usize) {
        self.cells.borrow_mut()[items[index]].heap_index = index;
    }
}

/// Open list with random-access value updates.
///
/// States live in an arena of cells; the map goes from full discrete key to
/// arena slot and the heap orders slots. The heap observer keeps every
/// cell's `heap_index` current, which is the invariant `update` relies on:
/// a map entry exists iff its recorded index is a live heap slot pointing
/// back at that cell. The arena grows monotonically over a search, popped
/// slots are simply abandoned.
#[derive(Debug)]
pub struct UpdatableOpenList {
    slots: HashMap<DiscreteKey, usize>,
    cells: SharedCells,
    heap: BinaryHeap<usize, CellOrder, CellTracker>,
    updates: usize,
}

impl UpdatableOpenList {
    pub fn new() -> Self {
        let cells: SharedCells = Rc::new(RefCell::new(Vec::new()));
        let heap = BinaryHeap::new(
            CellOrder {
                cells: Rc::clone(&cells),
            },
            CellTracker {
                cells: Rc::clone(&cells),
            },
        );
        Self {
            slots: HashMap::new(),
            cells,
            heap,
            updates: 0,
        }
    }

    /// Number of `update` calls served, observable for tests.
    pub fn updates(&self) -> usize {
        self.updates
    }

    #[cfg(test)]
    fn heap_position(&self, key: &DiscreteKey) -> Option<usize> {
        let slot = *self.slots.get(key)?;
        Some(self.cells.borrow()[slot].heap_index)
    }
}

impl Default for UpdatableOpenList {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenList<State> for UpdatableOpenList {
    const SUPPORTS_UPDATE: bool = true;

    fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn pop(&mut self) -> State {
        let slot = self.heap.pop();
        let state = self.cells.borrow()[slot].state.clone();
        self.slots.remove(state.key());
        state
    }

    fn insert(&mut self, state: &State) -> bool {
        match self.slots.entry(*state.key()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                let slot = {
                    let mut cells = self.cells.borrow_mut();
                    cells.push(OpenCell {
                        state: state.clone(),
                        heap_index: 0,
                    });
                    cells.len() - 1
                };
                entry.insert(slot);
                self.heap.push(slot);
                true
            }
        }
    }

    fn existing(&self, state: &State) -> Option<State> {
        let slot = *self.slots.get(state.key())?;
        Some(self.cells.borrow()[slot].state.clone())
    }

    fn update(&mut self, state: &State) {
        let Some(&slot) = self.slots.get(state.key()) else {
            debug_assert!(false, "update without a colliding entry");
            return;
        };
        let heap_index = {
            let mut cells = self.cells.borrow_mut();
            let cell = &mut cells[slot];
            debug_assert!(
                state.better(&cell.state),
                "open-list update requires a strictly better state"
            );
            cell.state = state.clone();
            cell.heap_index
        };
        self.heap.decrease(heap_index);
        self.updates += 1;
    }
}

/// Orders plain states by `better`.
#[derive(Debug, Clone, Copy, Default)]
struct StateOrder;

impl Compare<State> for StateOrder {
    fn less(&self, a: &State, b: &State) -> bool {
        a.better(b)
    }
}

/// Open list without update support: a bare heap of states.
#[derive(Debug, Default)]
pub struct NonUpdatingOpenList {
    heap: BinaryHeap<State, StateOrder, NullObserver>,
}

impl NonUpdatingOpenList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OpenList<State> for NonUpdatingOpenList {
    const SUPPORTS_UPDATE: bool = false;

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn pop(&mut self) -> State {
        self.heap.pop()
    }

    fn insert(&mut self, state: &State) -> bool {
        self.heap.push(state.clone());
        true
    }
}
