//! Domain types for the city map.
//!
//! - **Entities**: [`Location`], [`Road`] (stored in the database)
//! - **Values**: [`Position`]
//! - **Results**: [`StoreStats`]
//!
//! ## Design Decisions
//!
//! | Decision | Choice | Rationale |
//! |----------|--------|-----------|
//! | Identity | Name, not row id | Names are what users type and what the graph keys on |
//! | Coordinates | `f64` | Drag previews land between integer grid points |
//! | Road rows | Two directed rows | Lookup by either endpoint needs no extra join |

use serde::{Deserialize, Serialize};

/// A strongly-typed location row ID.
///
/// Internal to the store; callers address locations by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationId(pub i64);

impl LocationId {
    /// Extract the raw i64 value.
    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for LocationId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A point in the map's 2-D coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Create a position from its coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    #[must_use]
    pub fn distance_to(self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A named location (graph node).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique, non-empty name.
    pub name: String,
    /// Position on the map.
    pub position: Position,
}

impl Location {
    /// Create a new location.
    #[must_use]
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            position: Position::new(x, y),
        }
    }
}

/// One directed road row as stored in the database.
///
/// An undirected road is stored as two of these (A→B and B→A) with equal
/// weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    /// Name of the start location.
    pub start: String,
    /// Name of the end location.
    pub end: String,
    /// Travel cost. Finite and non-negative.
    pub weight: f64,
}

impl Road {
    /// Create a new road row.
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>, weight: f64) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            weight,
        }
    }
}

/// Statistics about the database contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of locations.
    pub location_count: usize,
    /// Number of directed road rows.
    pub road_row_count: usize,
    /// Number of undirected roads (distinct unordered endpoint pairs).
    pub road_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);

        assert!((a.distance_to(b) - 5.0).abs() < f64::EPSILON);
        assert!((b.distance_to(a) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn position_display_shows_both_coordinates() {
        assert_eq!(Position::new(400.0, 50.5).to_string(), "(400, 50.5)");
    }

    #[test]
    fn location_id_round_trips_raw_value() {
        assert_eq!(LocationId::from(7).as_i64(), 7);
    }
}
