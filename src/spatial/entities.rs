//! Player, goal and enemy markers placed on a map
//!
//! The generator never creates entities itself. After a maze is generated
//! the caller runs [`EntitySet::place_markers`] so the player and goal end up
//! inside the grid, off the wall ring.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of map marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Player spawn point (unique)
    Player,
    /// Level exit (unique)
    Goal,
    /// Melee enemy spawn
    Tank,
    /// Ranged enemy spawn
    Shooter,
}

impl EntityKind {
    /// All marker kinds in editor order
    pub const ALL: [Self; 4] = [Self::Player, Self::Goal, Self::Tank, Self::Shooter];

    /// Whether at most one marker of this kind may exist
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Player | Self::Goal)
    }

    /// Serialized name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Goal => "goal",
            Self::Tank => "tank",
            Self::Shooter => "shooter",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A marker at a tile position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// Marker kind
    pub kind: EntityKind,
    /// Column
    pub x: usize,
    /// Row
    pub y: usize,
}

impl Entity {
    /// Create a marker
    pub const fn new(kind: EntityKind, x: usize, y: usize) -> Self {
        Self { kind, x, y }
    }
}

/// Ordered collection of markers with player/goal uniqueness
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntitySet {
    entities: Vec<Entity>,
}

impl EntitySet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Build a set from loaded markers, enforcing uniqueness
    ///
    /// When a document lists several players or goals the last one wins.
    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        let mut set = Self::new();
        for entity in entities {
            set.add(entity);
        }
        set
    }

    /// Add a marker; unique kinds replace any existing marker of that kind
    pub fn add(&mut self, entity: Entity) {
        if entity.kind.is_unique() {
            self.set_unique(entity.kind, entity.x, entity.y);
        } else {
            self.entities.push(entity);
        }
    }

    /// Replace every marker of `kind` with a single one at `(x, y)`
    pub fn set_unique(&mut self, kind: EntityKind, x: usize, y: usize) {
        self.entities.retain(|e| e.kind != kind);
        self.entities.push(Entity::new(kind, x, y));
    }

    /// Remove every marker at `(x, y)`, returning how many were removed
    pub fn remove_at(&mut self, x: usize, y: usize) -> usize {
        let before = self.entities.len();
        self.entities.retain(|e| e.x != x || e.y != y);
        before - self.entities.len()
    }

    /// Position of the first marker of `kind`
    pub fn position_of(&self, kind: EntityKind) -> Option<(usize, usize)> {
        self.entities
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| (e.x, e.y))
    }

    /// Keep markers inside a regenerated grid
    ///
    /// The player is clamped into the interior (or, if missing, placed at the
    /// grid centre clamped the same way) and the goal is moved to the
    /// bottom-right interior corner. Enemies outside the grid are dropped.
    pub fn place_markers(&mut self, width: usize, height: usize) {
        let (px, py) = self
            .position_of(EntityKind::Player)
            .unwrap_or((width / 2, height / 2));

        self.set_unique(
            EntityKind::Player,
            clamp_interior(px, width),
            clamp_interior(py, height),
        );
        self.set_unique(
            EntityKind::Goal,
            interior_max(width),
            interior_max(height),
        );
        self.entities.retain(|e| e.x < width && e.y < height);
    }

    /// Number of markers
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the set has no markers
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate over markers in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    /// Markers as a slice
    pub fn as_slice(&self) -> &[Entity] {
        &self.entities
    }
}

impl<'a> IntoIterator for &'a EntitySet {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

// Last interior index; collapses onto the grid itself when there is no interior
const fn interior_max(dim: usize) -> usize {
    dim.saturating_sub(2)
}

/// Clamp a coordinate into `[1, dim - 2]`
///
/// Grids without an interior (`dim < 3`) clamp to index 0 so markers never
/// leave the grid.
pub fn clamp_interior(value: usize, dim: usize) -> usize {
    let hi = interior_max(dim);
    let lo = hi.min(1);
    value.clamp(lo, hi)
}
