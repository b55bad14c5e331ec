//! `SQLite` storage layer for the city map.
//!
//! `SQLite` is the authoritative copy of all locations and roads. The in-memory
//! [`GraphModel`](crate::GraphModel) is rebuilt from it; see the `graph` module
//! for the queries built on top.
//!
//! ## Module Structure
//!
//! - `schema` - Database schema (DDL)
//! - `helpers` - Row conversion utilities
//! - `locations` - Location CRUD operations
//! - `roads` - Road CRUD operations
//!
//! Every write runs in its own transaction. A failed call rolls back and leaves
//! the previous state untouched.

mod helpers;
mod locations;
mod roads;
mod schema;

pub(crate) use helpers::{
    LOCATION_COLUMNS, ROAD_SELECT, find_location_id, is_unique_violation, row_to_location,
    row_to_road,
};
pub(crate) use schema::SCHEMA;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::types::{Location, Position, Road, StoreStats};

/// The store operations the in-memory graph and the drag controller rely on.
///
/// [`Store`] is the production implementation. The seam lets the drag
/// controller be exercised against a store whose writes fail.
pub trait MapStore {
    /// All locations, in insertion order.
    fn list_locations(&self) -> Result<Vec<Location>>;

    /// All directed road rows. Each undirected road appears twice.
    fn list_roads(&self) -> Result<Vec<Road>>;

    /// Persist a new position for an existing location.
    fn update_location_position(&mut self, name: &str, position: Position) -> Result<()>;
}

/// `SQLite` database wrapper for the city map.
///
/// The connection is wrapped in a `Mutex` so the store can be shared by
/// reference while keeping exclusive access per statement. The connection is
/// held for the lifetime of the store and released on drop or [`Store::close`].
#[derive(Debug)]
pub struct Store {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl Store {
    /// Open or create the database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;

        tracing::debug!(path = %path.display(), "Opened map database");
        Self::init(conn, Some(path.to_path_buf()))
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        conn.execute_batch(SCHEMA)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Path of the database file, or `None` for an in-memory store.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Acquire the connection lock.
    pub(crate) fn connection(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            Error::Internal(format!(
                "database connection mutex poisoned (a thread panicked while holding the lock): {e}"
            ))
        })
    }

    /// Get statistics about the database contents.
    pub fn get_stats(&self) -> Result<StoreStats> {
        let conn = self.connection()?;

        let location_count: usize =
            conn.query_row("SELECT COUNT(*) FROM locations", [], |row| row.get(0))?;
        let road_row_count: usize =
            conn.query_row("SELECT COUNT(*) FROM roads", [], |row| row.get(0))?;
        let road_count: usize = conn.query_row(
            "SELECT COUNT(*) FROM roads WHERE start_location_id < end_location_id",
            [],
            |row| row.get(0),
        )?;

        Ok(StoreStats {
            location_count,
            road_row_count,
            road_count,
        })
    }

    /// Close the connection, surfacing any error `SQLite` reports on close.
    pub fn close(self) -> Result<()> {
        let conn = self
            .conn
            .into_inner()
            .map_err(|e| Error::Internal(format!("database connection mutex poisoned: {e}")))?;
        conn.close().map_err(|(_, e)| Error::Database(e))
    }
}

impl MapStore for Store {
    fn list_locations(&self) -> Result<Vec<Location>> {
        Store::list_locations(self)
    }

    fn list_roads(&self) -> Result<Vec<Road>> {
        Store::list_roads(self)
    }

    fn update_location_position(&mut self, name: &str, position: Position) -> Result<()> {
        Store::update_location_position(self, name, position)
    }
}
