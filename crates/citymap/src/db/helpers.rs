//! Helper functions for database row conversion.
//!
//! Also provides SQL column list constants shared by the query modules.

use rusqlite::{Connection, OptionalExtension};

use crate::types::{Location, LocationId, Road};

/// SQL column list for the locations table.
///
/// Use with `row_to_location` for consistent column ordering.
pub(crate) const LOCATION_COLUMNS: &str = "name, x, y";

/// SQL select for road rows joined to their endpoint names.
///
/// Use with `row_to_road` for consistent column ordering.
pub(crate) const ROAD_SELECT: &str = "SELECT l1.name, l2.name, r.weight
     FROM roads r
     JOIN locations l1 ON r.start_location_id = l1.id
     JOIN locations l2 ON r.end_location_id = l2.id";

/// Convert a row selected with `LOCATION_COLUMNS` into a [`Location`].
pub(crate) fn row_to_location(row: &rusqlite::Row<'_>) -> rusqlite::Result<Location> {
    Ok(Location::new(
        row.get::<_, String>(0)?,
        row.get::<_, f64>(1)?,
        row.get::<_, f64>(2)?,
    ))
}

/// Convert a row selected with `ROAD_SELECT` into a [`Road`].
pub(crate) fn row_to_road(row: &rusqlite::Row<'_>) -> rusqlite::Result<Road> {
    Ok(Road::new(
        row.get::<_, String>(0)?,
        row.get::<_, String>(1)?,
        row.get::<_, f64>(2)?,
    ))
}

/// Look up a location's row ID by name.
///
/// Takes a `Connection` so it works inside a transaction as well.
pub(crate) fn find_location_id(
    conn: &Connection,
    name: &str,
) -> rusqlite::Result<Option<LocationId>> {
    conn.query_row("SELECT id FROM locations WHERE name = ?1", [name], |row| {
        row.get::<_, i64>(0).map(LocationId::from)
    })
    .optional()
}

/// Whether a statement failed on a `UNIQUE` constraint.
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
