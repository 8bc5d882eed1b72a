//! World state management - the compass graph and where the player stands in it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

use crate::compass::Direction;

/// Unique identifier for locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub Uuid);

impl LocationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for LocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised when the graph is asked about exits it does not have.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("location {0} is not part of this map")]
    UnknownLocation(LocationId),

    #[error("location {from} has no exit to the {direction}")]
    NoExit {
        from: LocationId,
        direction: Direction,
    },
}

/// A room on the compass graph. It only knows its neighbors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    /// Neighbors indexed north, east, south, west.
    neighbors: [Option<LocationId>; 4],
}

impl Location {
    fn new() -> Self {
        Self {
            id: LocationId::new(),
            neighbors: [None; 4],
        }
    }

    /// The neighbor in `direction`, if one has been linked.
    pub fn neighbor(&self, direction: Direction) -> Option<LocationId> {
        self.neighbors[direction.slot()]
    }

    /// Directions that lead somewhere, in north/east/south/west order.
    pub fn exits(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|dir| self.neighbor(*dir).is_some())
            .collect()
    }

    fn link(&mut self, direction: Direction, to: LocationId) {
        self.neighbors[direction.slot()] = Some(to);
    }
}

/// Arena of locations linked by compass directions.
///
/// The graph only grows: locations are never removed, and every link is made
/// in both directions at once, so `a.north == b` implies `b.south == a`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationGraph {
    locations: HashMap<LocationId, Location>,
    origin: LocationId,
}

impl LocationGraph {
    /// Create a graph holding a single starting location.
    pub fn new() -> Self {
        let origin = Location::new();
        let origin_id = origin.id;
        let mut locations = HashMap::new();
        locations.insert(origin_id, origin);

        Self {
            locations,
            origin: origin_id,
        }
    }

    /// The location the session started in.
    pub fn origin(&self) -> LocationId {
        self.origin
    }

    /// Get location by ID.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// Number of locations materialized so far.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always false: the origin exists from the start.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Make sure `from` has a neighbor in `direction`, creating one if needed.
    ///
    /// Returns `true` when a new location was created, `false` when the slot
    /// was already populated.
    pub fn ensure_direction(
        &mut self,
        from: LocationId,
        direction: Direction,
    ) -> Result<bool, WorldError> {
        let source = self
            .locations
            .get(&from)
            .ok_or(WorldError::UnknownLocation(from))?;
        if source.neighbor(direction).is_some() {
            return Ok(false);
        }

        let mut created = Location::new();
        let created_id = created.id;
        created.link(direction.opposite(), from);
        self.locations.insert(created_id, created);

        if let Some(source) = self.locations.get_mut(&from) {
            source.link(direction, created_id);
        }

        debug!(%from, %direction, to = %created_id, "linked new location");
        Ok(true)
    }

    /// Exits available from `id`. Unknown locations have none.
    pub fn available_exits(&self, id: LocationId) -> Vec<Direction> {
        self.locations
            .get(&id)
            .map(Location::exits)
            .unwrap_or_default()
    }

    /// The neighbor of `from` in `direction`.
    ///
    /// Callers are expected to check [`available_exits`](Self::available_exits)
    /// first; asking for a missing exit is an error.
    pub fn move_to(&self, from: LocationId, direction: Direction) -> Result<LocationId, WorldError> {
        self.locations
            .get(&from)
            .ok_or(WorldError::UnknownLocation(from))?
            .neighbor(direction)
            .ok_or(WorldError::NoExit { from, direction })
    }

    /// Iterate over all locations.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }
}

impl Default for LocationGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// The map together with the player's current position on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    graph: LocationGraph,
    current: LocationId,
}

impl WorldState {
    /// Start a fresh map with the player at its origin.
    pub fn new() -> Self {
        let graph = LocationGraph::new();
        let current = graph.origin();
        Self { graph, current }
    }

    /// The location the player is in.
    pub fn current(&self) -> LocationId {
        self.current
    }

    /// Read access to the underlying graph.
    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    /// Grow the map from every direction mentioned in `text`.
    ///
    /// Returns the directions that produced a new location.
    pub fn note_directions(&mut self, text: &str) -> Result<Vec<Direction>, WorldError> {
        let mut created = Vec::new();
        for direction in Direction::detect(text) {
            if self.graph.ensure_direction(self.current, direction)? {
                created.push(direction);
            }
        }
        if !created.is_empty() {
            info!(count = created.len(), total = self.graph.len(), "map grew");
        }
        Ok(created)
    }

    /// Exits from the current location.
    pub fn exits(&self) -> Vec<Direction> {
        self.graph.available_exits(self.current)
    }

    /// Step through an exit of the current location.
    pub fn travel(&mut self, direction: Direction) -> Result<LocationId, WorldError> {
        let next = self.graph.move_to(self.current, direction)?;
        self.current = next;
        Ok(next)
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}
