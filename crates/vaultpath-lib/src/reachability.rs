use std::collections::VecDeque;

use tracing::debug;

use crate::grid::{Cell, Grid, Position};
use crate::keyset::{KeyId, KeySet};
use crate::nodes::NodeIndex;

/// Dense node-to-key reachability tables.
///
/// For every node and key the tables record the length of the first shortest
/// grid path found between them, together with the keys whose doors sit on
/// that particular path. Doors do not block the scan; they are folded into
/// the requirement mask so the search can decide later whether the walk is
/// available. A door with no matching key in the grid never opens and is
/// treated as a wall.
#[derive(Debug, Clone)]
pub struct KeyGraph {
    robot_count: usize,
    key_count: usize,
    distances: Vec<Option<u32>>,
    required: Vec<KeySet>,
}

impl KeyGraph {
    pub fn robot_count(&self) -> usize {
        self.robot_count
    }

    pub fn key_count(&self) -> usize {
        self.key_count
    }

    pub fn node_count(&self) -> usize {
        self.robot_count + self.key_count
    }

    /// Node occupied by an agent standing on `key`.
    pub fn key_node(&self, key: KeyId) -> usize {
        self.robot_count + key.index()
    }

    /// Iterate the key slots of the grid.
    pub fn keys(&self) -> impl Iterator<Item = KeyId> {
        (0..self.key_count).map(KeyId::new)
    }

    /// Steps along the recorded path from `node` to `key`, if one exists.
    pub fn distance(&self, node: usize, key: KeyId) -> Option<u32> {
        self.distances[node * self.key_count + key.index()]
    }

    /// Keys whose doors lie on the recorded path from `node` to `key`.
    pub fn required(&self, node: usize, key: KeyId) -> KeySet {
        self.required[node * self.key_count + key.index()]
    }
}

/// Run one breadth-first scan per node and collect the dense tables.
pub fn build_key_graph(grid: &Grid, nodes: &NodeIndex) -> KeyGraph {
    let key_count = nodes.key_count();
    let node_count = nodes.node_count();

    let mut distances = vec![None; node_count * key_count];
    let mut required = vec![KeySet::empty(); node_count * key_count];

    if key_count > 0 {
        let mut visited = vec![false; grid.width() * grid.height()];
        let mut frontier = VecDeque::new();

        for node in 0..node_count {
            let row = node * key_count..(node + 1) * key_count;
            scan_from(
                grid,
                nodes,
                nodes.position(node),
                &mut visited,
                &mut frontier,
                &mut distances[row.clone()],
                &mut required[row],
            );
        }
    }

    debug!(
        nodes = node_count,
        keys = key_count,
        "built reachability tables"
    );

    KeyGraph {
        robot_count: nodes.robot_count(),
        key_count,
        distances,
        required,
    }
}

/// Breadth-first scan from `start`, writing one table row.
///
/// Cells are marked visited when enqueued, so each cell is reached exactly
/// once, along the first shortest path the expansion order produces. The
/// requirement mask carried by a branch grows as it crosses doors.
fn scan_from(
    grid: &Grid,
    nodes: &NodeIndex,
    start: Position,
    visited: &mut [bool],
    frontier: &mut VecDeque<(Position, u32, KeySet)>,
    out_distances: &mut [Option<u32>],
    out_required: &mut [KeySet],
) {
    visited.fill(false);
    frontier.clear();

    visited[start.row * grid.width() + start.col] = true;
    frontier.push_back((start, 0, KeySet::empty()));

    while let Some((pos, steps, doors_crossed)) = frontier.pop_front() {
        if let Cell::Key(letter) = grid.cell(pos) {
            if let Some(key) = nodes.key_slot(letter) {
                out_distances[key.index()] = Some(steps);
                out_required[key.index()] = doors_crossed;
            }
        }

        for next in grid.neighbours(pos) {
            if visited[next.row * grid.width() + next.col] {
                continue;
            }

            let mut mask = doors_crossed;
            match grid.cell(next) {
                Cell::Wall => continue,
                Cell::Door(letter) => match nodes.key_slot(letter.to_ascii_lowercase()) {
                    Some(key) => mask.insert(key),
                    None => continue,
                },
                _ => {}
            }

            visited[next.row * grid.width() + next.col] = true;
            frontier.push_back((next, steps + 1, mask));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::index_nodes;

    fn graph_for(text: &str) -> (KeyGraph, NodeIndex) {
        let grid: Grid = text.parse().expect("grid parses");
        let nodes = index_nodes(&grid).expect("nodes index");
        let graph = build_key_graph(&grid, &nodes);
        (graph, nodes)
    }

    #[test]
    fn doors_extend_the_requirement_mask() {
        let (graph, nodes) = graph_for("@.A.a");
        let a = nodes.key_slot('a').expect("a indexed");

        assert_eq!(graph.distance(0, a), Some(4));
        assert_eq!(graph.required(0, a), KeySet::empty().with(a));
    }

    #[test]
    fn unmatched_door_is_a_wall() {
        let (graph, nodes) = graph_for("@.B.a");
        let a = nodes.key_slot('a').expect("a indexed");

        assert_eq!(graph.distance(0, a), None);
    }

    #[test]
    fn keys_passed_en_route_are_not_required() {
        let (graph, nodes) = graph_for("@a.b");
        let b = nodes.key_slot('b').expect("b indexed");

        assert_eq!(graph.distance(0, b), Some(3));
        assert!(graph.required(0, b).is_empty());
    }

    #[test]
    fn key_to_key_rows_are_scanned() {
        let (graph, nodes) = graph_for("#b.A.@.a#");
        let b = nodes.key_slot('b').expect("b indexed");
        let a = nodes.key_slot('a').expect("a indexed");

        assert_eq!(graph.distance(0, a), Some(2));
        assert!(graph.required(0, a).is_empty());

        assert_eq!(graph.distance(0, b), Some(4));
        assert_eq!(graph.required(0, b), KeySet::empty().with(a));

        let from_a = graph.key_node(a);
        assert_eq!(graph.distance(from_a, b), Some(6));
        assert_eq!(graph.required(from_a, b), KeySet::empty().with(a));
    }

    #[test]
    fn walls_split_the_grid() {
        let (graph, nodes) = graph_for("@#a");
        let a = nodes.key_slot('a').expect("a indexed");
        assert_eq!(graph.distance(0, a), None);
    }
}
