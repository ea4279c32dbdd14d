use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::{Cell, Grid, Position};
use crate::keyset::{KeyId, MAX_KEYS};

/// Points of interest extracted from a grid.
///
/// Nodes are numbered densely: agent starts occupy `0..robot_count()` and
/// keys occupy `robot_count()..node_count()`, both in row-major scan order.
/// The key slot of a letter is therefore fixed by where it appears in the
/// grid, not by the alphabet.
#[derive(Debug, Clone)]
pub struct NodeIndex {
    positions: Vec<Position>,
    robot_count: usize,
    key_letters: Vec<char>,
    letter_slots: HashMap<char, KeyId>,
}

/// Assign node numbers to every agent start and key in `grid`.
pub fn index_nodes(grid: &Grid) -> Result<NodeIndex> {
    let mut robots = Vec::new();
    let mut key_positions = Vec::new();
    let mut key_letters = Vec::new();
    let mut letter_slots: HashMap<char, KeyId> = HashMap::new();

    for (pos, cell) in grid.iter() {
        match cell {
            Cell::Start => robots.push(pos),
            Cell::Key(letter) => {
                if let Some(&slot) = letter_slots.get(&letter) {
                    return Err(Error::DuplicateKey {
                        key: letter,
                        first: key_positions[slot.index()],
                        second: pos,
                    });
                }
                if key_letters.len() == MAX_KEYS {
                    return Err(Error::TooManyKeys { limit: MAX_KEYS });
                }
                letter_slots.insert(letter, KeyId::new(key_letters.len()));
                key_letters.push(letter);
                key_positions.push(pos);
            }
            _ => {}
        }
    }

    if robots.is_empty() {
        return Err(Error::NoAgents);
    }

    debug!(
        robots = robots.len(),
        keys = key_letters.len(),
        "indexed grid nodes"
    );

    let robot_count = robots.len();
    let mut positions = robots;
    positions.extend(key_positions);

    Ok(NodeIndex {
        positions,
        robot_count,
        key_letters,
        letter_slots,
    })
}

impl NodeIndex {
    pub fn robot_count(&self) -> usize {
        self.robot_count
    }

    pub fn key_count(&self) -> usize {
        self.key_letters.len()
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    /// Grid position of a node.
    pub fn position(&self, node: usize) -> Position {
        self.positions[node]
    }

    /// Node occupied by an agent standing on `key`.
    pub fn key_node(&self, key: KeyId) -> usize {
        self.robot_count + key.index()
    }

    /// Mask slot of a key letter, if the grid contains that key.
    pub fn key_slot(&self, letter: char) -> Option<KeyId> {
        self.letter_slots.get(&letter).copied()
    }

    /// Letter of the key occupying `key`'s slot.
    pub fn key_letter(&self, key: KeyId) -> char {
        self.key_letters[key.index()]
    }
}
