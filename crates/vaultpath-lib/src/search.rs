use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::keyset::KeySet;
use crate::reachability::KeyGraph;

/// Guard rails for the state-space search.
///
/// The state space grows as `(R+K)^R * 2^K`, so adversarial grids can make a
/// search run for a very long time even though every individual expansion is
/// cheap. The ceiling turns such a run into a reported
/// [`SearchOutcome::BudgetExhausted`] instead of an unbounded loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchLimits {
    /// Maximum number of states to expand before giving up; `None` means
    /// unlimited.
    pub max_expansions: Option<u64>,
}

/// Terminal condition of a state-space search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Every key was collected; carries the minimal total step count.
    Solved { steps: u32 },
    /// The frontier drained without reaching the goal: proven unsolvable.
    NoSolution,
    /// The expansion ceiling was hit first; solvability is unknown.
    BudgetExhausted,
}

/// Result of one search run.
#[derive(Debug, Clone, Copy)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    /// States popped from the frontier and expanded before the run ended.
    pub states_expanded: u64,
}

/// One vertex of the implicit search graph: where every agent stands (by node
/// index) and which keys the group holds.
///
/// An agent's node is either its own start (it has not moved yet) or the node
/// of a key it walked to, in which case that key's bit is set in `collected`.
/// The collected set only ever grows along a path from the initial state.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct State {
    positions: Vec<usize>,
    collected: KeySet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FrontierEntry {
    steps: u32,
    state: State,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost; ties
        // break on the state value to keep expansion order deterministic.
        other
            .steps
            .cmp(&self.steps)
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the minimal total step count for the agent group to collect every key.
///
/// Runs Dijkstra over the implicit state graph. From a given state, one agent
/// moves along a precomputed grid path to an uncollected key, which is allowed
/// only when every key gating that path is already held; the edge weight is
/// the path's step count. All weights are non-negative, so the first goal
/// state popped from the frontier carries the global minimum.
///
/// `BinaryHeap` has no decrease-key, so a state may sit in the frontier under
/// several costs at once. A best-known-cost table keeps the search honest: a
/// successor is pushed only when it improves on the recorded best, and a
/// popped entry that no longer matches the table is stale and skipped.
pub fn solve(graph: &KeyGraph, limits: &SearchLimits) -> SearchReport {
    let robot_count = graph.robot_count();
    let all_keys = KeySet::full(graph.key_count());

    let initial = State {
        positions: (0..robot_count).collect(),
        collected: KeySet::empty(),
    };

    let mut best: HashMap<State, u32> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    best.insert(initial.clone(), 0);
    frontier.push(FrontierEntry {
        steps: 0,
        state: initial,
    });

    let mut states_expanded = 0u64;

    while let Some(FrontierEntry { steps, state }) = frontier.pop() {
        if best.get(&state).is_some_and(|&known| known < steps) {
            continue;
        }

        if state.collected == all_keys {
            debug!(steps, states_expanded, "collected every key");
            return SearchReport {
                outcome: SearchOutcome::Solved { steps },
                states_expanded,
            };
        }

        if limits
            .max_expansions
            .is_some_and(|ceiling| states_expanded >= ceiling)
        {
            debug!(states_expanded, "expansion ceiling reached");
            return SearchReport {
                outcome: SearchOutcome::BudgetExhausted,
                states_expanded,
            };
        }
        states_expanded += 1;

        for robot in 0..robot_count {
            let node = state.positions[robot];
            for key in graph.keys() {
                if state.collected.contains(key) {
                    continue;
                }
                let Some(distance) = graph.distance(node, key) else {
                    continue;
                };
                if !state.collected.contains_all(graph.required(node, key)) {
                    continue;
                }

                let mut positions = state.positions.clone();
                positions[robot] = graph.key_node(key);
                let next = State {
                    positions,
                    collected: state.collected.with(key),
                };
                let next_steps = steps + distance;

                match best.get(&next) {
                    Some(&known) if known <= next_steps => {}
                    _ => {
                        best.insert(next.clone(), next_steps);
                        frontier.push(FrontierEntry {
                            steps: next_steps,
                            state: next,
                        });
                    }
                }
            }
        }
    }

    debug!(states_expanded, "frontier drained without reaching goal");
    SearchReport {
        outcome: SearchOutcome::NoSolution,
        states_expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::nodes::index_nodes;
    use crate::reachability::build_key_graph;

    fn search(text: &str, limits: &SearchLimits) -> SearchReport {
        let grid: Grid = text.parse().expect("grid parses");
        let nodes = index_nodes(&grid).expect("nodes index");
        let graph = build_key_graph(&grid, &nodes);
        solve(&graph, limits)
    }

    fn outcome(text: &str) -> SearchOutcome {
        search(text, &SearchLimits::default()).outcome
    }

    #[test]
    fn single_agent_walks_to_the_only_key() {
        assert_eq!(outcome("@..a"), SearchOutcome::Solved { steps: 3 });
    }

    #[test]
    fn no_keys_means_no_moves() {
        let report = search("@...", &SearchLimits::default());
        assert_eq!(report.outcome, SearchOutcome::Solved { steps: 0 });
        assert_eq!(report.states_expanded, 0, "goal state is never expanded");
    }

    #[test]
    fn nearer_of_two_agents_takes_the_shared_key() {
        assert_eq!(outcome("@.a.@"), SearchOutcome::Solved { steps: 2 });
    }

    #[test]
    fn door_gating_forces_the_collection_order() {
        // Collect a first (2 steps), then walk a -> b through door A (6 steps).
        assert_eq!(outcome("#b.A.@.a#"), SearchOutcome::Solved { steps: 8 });
    }

    #[test]
    fn self_gated_key_is_unsolvable() {
        assert_eq!(outcome("@.A.a"), SearchOutcome::NoSolution);
    }

    #[test]
    fn walled_off_key_is_unsolvable() {
        assert_eq!(outcome("@#a"), SearchOutcome::NoSolution);
    }

    #[test]
    fn agents_in_disjoint_rooms_sum_their_walks() {
        let report = search("@.a##\n#####\n##b.@", &SearchLimits::default());
        assert_eq!(report.outcome, SearchOutcome::Solved { steps: 4 });
    }

    #[test]
    fn expansion_ceiling_is_reported_distinctly() {
        let limits = SearchLimits {
            max_expansions: Some(1),
        };
        let report = search("@.a.b", &limits);
        assert_eq!(report.outcome, SearchOutcome::BudgetExhausted);
        assert_eq!(report.states_expanded, 1);
    }

    #[test]
    fn ceiling_does_not_trigger_on_an_already_reached_goal() {
        // Zero keys: the initial state is the goal even under a zero budget.
        let limits = SearchLimits {
            max_expansions: Some(0),
        };
        let report = search("@..", &limits);
        assert_eq!(report.outcome, SearchOutcome::Solved { steps: 0 });
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let solved = serde_json::to_value(SearchOutcome::Solved { steps: 8 }).expect("serializes");
        assert_eq!(solved["status"], "solved");
        assert_eq!(solved["steps"], 8);

        let no_solution = serde_json::to_value(SearchOutcome::NoSolution).expect("serializes");
        assert_eq!(no_solution["status"], "no_solution");
    }
}
