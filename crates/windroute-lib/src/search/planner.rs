use tracing::debug;

use crate::search::close::ClosedSet;
use crate::search::expand::Expander;
use crate::search::open::OpenList;
use crate::search::state::SearchState;

/// Hybrid A* main loop.
///
/// Pops the best frontier state, finalizes it in the close list, stops on
/// a spatial match with `goal`, otherwise feeds the expansion back into the
/// open list. With an update-supporting open list every popped key is
/// fresh; with a plain heap a key can come up more than once and only its
/// first (best) pop is expanded, which is what the insertion guard is for.
///
/// The open list must already hold at least one seed state. `None` means
/// the frontier ran dry inside the data horizon without touching the goal
/// cell.
pub fn find_shortest_path<S, O, C, E>(
    goal: &S,
    open_list: &mut O,
    close_list: &mut C,
    expander: &E,
) -> Option<S>
where
    S: SearchState,
    O: OpenList<S>,
    C: ClosedSet<S>,
    E: Expander<S>,
{
    let mut neighbors: Vec<S> = Vec::new();

    while !open_list.is_empty() {
        let (best, inserted) = close_list.insert(open_list.pop());
        if !inserted {
            continue;
        }
        let best = best.clone();

        if best.same(goal) {
            debug!(open = open_list.len(), "goal cell reached");
            return Some(best);
        }

        neighbors.clear();
        expander.search(&best, &mut neighbors);
        for neighbor in neighbors.drain(..) {
            if close_list.contains(&neighbor) {
                continue;
            }
            let inserted = open_list.insert(&neighbor);
            if O::SUPPORTS_UPDATE && !inserted {
                let improves = open_list
                    .existing(&neighbor)
                    .is_some_and(|current| neighbor.better(&current));
                if improves {
                    open_list.update(&neighbor);
                }
            }
        }
    }

    debug!("open list exhausted without reaching the goal");
    None
}
