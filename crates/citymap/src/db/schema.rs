//! Database schema definition for the city map.

/// Database schema definition.
///
/// Each undirected road is stored as two directed rows. The unique pair
/// constraint keeps a second `add_road` between the same endpoints from
/// creating rows with diverging weights.
pub(crate) const SCHEMA: &str = r"
-- Named locations (graph nodes)
CREATE TABLE IF NOT EXISTS locations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    x REAL NOT NULL,
    y REAL NOT NULL
);

-- Directed road rows; every road has a mirrored row with the same weight
CREATE TABLE IF NOT EXISTS roads (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    start_location_id INTEGER NOT NULL REFERENCES locations(id),
    end_location_id INTEGER NOT NULL REFERENCES locations(id),
    weight REAL NOT NULL,
    UNIQUE (start_location_id, end_location_id)
);

CREATE INDEX IF NOT EXISTS idx_roads_start ON roads(start_location_id);
CREATE INDEX IF NOT EXISTS idx_roads_end ON roads(end_location_id);
";
