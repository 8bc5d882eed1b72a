//! Compass directions and their detection in narrative text.

use serde::{Deserialize, Serialize};

/// The four directions a location can be linked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in the order exits are listed.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction leading back.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// The lower-case word for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }

    /// Directions whose word occurs anywhere in `text`.
    ///
    /// This is a plain substring test, so "northeast" mentions both north and
    /// east. The caller is expected to have lower-cased the text.
    pub fn detect(text: &str) -> Vec<Direction> {
        Self::ALL
            .into_iter()
            .filter(|dir| text.contains(dir.as_str()))
            .collect()
    }

    /// Index into a four-slot neighbor table.
    pub(crate) fn slot(&self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
