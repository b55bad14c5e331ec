//! Location CRUD operations for the map store.

use rusqlite::{OptionalExtension, params};

use super::{LOCATION_COLUMNS, Store, find_location_id, is_unique_violation, row_to_location};
use crate::error::{Error, Result};
use crate::types::{Location, LocationId, Position};

impl Store {
    /// Insert a new location, returning its row ID.
    ///
    /// Fails with [`Error::DuplicateName`] if a location with this name exists;
    /// existing data is left unchanged.
    pub fn add_location(&mut self, name: &str, position: Position) -> Result<LocationId> {
        let conn = self.connection()?;

        match conn.execute(
            "INSERT INTO locations (name, x, y) VALUES (?1, ?2, ?3)",
            params![name, position.x, position.y],
        ) {
            Ok(_) => {
                let id = LocationId::from(conn.last_insert_rowid());
                tracing::debug!(name, x = position.x, y = position.y, "Added location");
                Ok(id)
            }
            Err(e) if is_unique_violation(&e) => {
                tracing::warn!(name, "Location already exists");
                Err(Error::DuplicateName(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get a location by name.
    pub fn get_location(&self, name: &str) -> Result<Option<Location>> {
        let conn = self.connection()?;

        conn.query_row(
            &format!("SELECT {LOCATION_COLUMNS} FROM locations WHERE name = ?1"),
            [name],
            row_to_location,
        )
        .optional()
        .map_err(Into::into)
    }

    /// Move an existing location.
    ///
    /// Fails with [`Error::NotFound`] when no row matches. Repeating the same
    /// update succeeds every time.
    pub fn update_location_position(&mut self, name: &str, position: Position) -> Result<()> {
        let conn = self.connection()?;

        let updated = conn.execute(
            "UPDATE locations SET x = ?2, y = ?3 WHERE name = ?1",
            params![name, position.x, position.y],
        )?;

        if updated == 0 {
            return Err(Error::NotFound(name.to_string()));
        }

        tracing::debug!(name, x = position.x, y = position.y, "Updated location position");
        Ok(())
    }

    /// Delete a location and every road that references it.
    ///
    /// Both road directions and the location row are removed in one
    /// transaction; on any failure nothing is removed.
    pub fn delete_location(&mut self, name: &str) -> Result<()> {
        let mut conn = self.connection()?;
        let tx = conn.transaction()?;

        let Some(id) = find_location_id(&tx, name)? else {
            return Err(Error::NotFound(name.to_string()));
        };

        let roads_removed = tx.execute(
            "DELETE FROM roads WHERE start_location_id = ?1 OR end_location_id = ?1",
            [id.as_i64()],
        )?;
        tx.execute("DELETE FROM locations WHERE id = ?1", [id.as_i64()])?;

        tx.commit()?;
        tracing::info!(name, road_rows = roads_removed, "Deleted location");
        Ok(())
    }

    /// Get all locations in insertion order.
    pub fn list_locations(&self) -> Result<Vec<Location>> {
        let conn = self.connection()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations ORDER BY id"
        ))?;

        let locations = stmt
            .query_map([], row_to_location)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(locations)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::Store;
    use crate::error::Error;
    use crate::types::Position;

    fn store_with(names: &[(&str, f64, f64)]) -> Store {
        let mut store = Store::open_in_memory().expect("should open in-memory store");
        for (name, x, y) in names {
            store
                .add_location(name, Position::new(*x, *y))
                .expect("should add location");
        }
        store
    }

    #[test]
    fn add_location_then_lookup_returns_same_coordinates() {
        let store = store_with(&[("Delhi", 400.0, 50.0)]);

        let delhi = store.get_location("Delhi").unwrap().expect("Delhi should exist");

        assert_eq!(delhi.name, "Delhi");
        assert_eq!(delhi.position, Position::new(400.0, 50.0));
    }

    #[test]
    fn add_location_with_existing_name_fails_and_keeps_data() {
        let mut store = store_with(&[("Delhi", 400.0, 50.0)]);

        let result = store.add_location("Delhi", Position::new(1.0, 2.0));

        assert!(matches!(result, Err(Error::DuplicateName(ref n)) if n == "Delhi"));
        let delhi = store.get_location("Delhi").unwrap().unwrap();
        assert_eq!(delhi.position, Position::new(400.0, 50.0));
        assert_eq!(store.list_locations().unwrap().len(), 1);
    }

    #[test]
    fn add_location_keeps_fractional_coordinates() {
        let store = store_with(&[("Pune", 250.25, 700.75)]);

        let pune = store.get_location("Pune").unwrap().unwrap();
        assert_eq!(pune.position, Position::new(250.25, 700.75));
    }

    #[test]
    fn update_position_is_idempotent() {
        let mut store = store_with(&[("Jaipur", 350.0, 200.0)]);
        let target = Position::new(360.0, 210.0);

        store.update_location_position("Jaipur", target).unwrap();
        store.update_location_position("Jaipur", target).unwrap();

        let jaipur = store.get_location("Jaipur").unwrap().unwrap();
        assert_eq!(jaipur.position, target);
    }

    #[test]
    fn update_position_of_missing_location_is_not_found() {
        let mut store = store_with(&[]);

        let result = store.update_location_position("Nowhere", Position::new(0.0, 0.0));

        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn delete_location_removes_incident_roads_in_both_directions() {
        let mut store = store_with(&[
            ("Delhi", 400.0, 50.0),
            ("Jaipur", 350.0, 200.0),
            ("Udaipur", 300.0, 350.0),
        ]);
        store.add_road("Delhi", "Jaipur", 270.0).unwrap();
        store.add_road("Jaipur", "Udaipur", 400.0).unwrap();

        store.delete_location("Jaipur").unwrap();

        assert!(store.get_location("Jaipur").unwrap().is_none());
        assert!(store.list_roads().unwrap().is_empty());
        assert_eq!(store.list_locations().unwrap().len(), 2);
    }

    #[test]
    fn delete_location_leaves_unrelated_roads() {
        let mut store = store_with(&[("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 2.0, 0.0)]);
        store.add_road("A", "B", 1.0).unwrap();
        store.add_road("B", "C", 1.0).unwrap();

        store.delete_location("A").unwrap();

        let roads = store.list_roads().unwrap();
        assert_eq!(roads.len(), 2);
        assert!(roads.iter().all(|r| r.start != "A" && r.end != "A"));
    }

    #[test]
    fn delete_missing_location_is_not_found() {
        let mut store = store_with(&[("Delhi", 400.0, 50.0)]);

        let result = store.delete_location("Agra");

        assert!(matches!(result, Err(Error::NotFound(ref n)) if n == "Agra"));
        assert_eq!(store.list_locations().unwrap().len(), 1);
    }

    #[test]
    fn list_locations_preserves_insertion_order() {
        let store = store_with(&[("Mumbai", 150.0, 650.0), ("Agra", 1.0, 1.0)]);

        let names: Vec<_> = store
            .list_locations()
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();

        assert_eq!(names, vec!["Mumbai", "Agra"]);
    }

    #[test]
    fn re_adding_deleted_name_gets_a_fresh_id() {
        let mut store = Store::open_in_memory().unwrap();
        let first = store.add_location("Pune", Position::new(250.0, 700.0)).unwrap();
        let other = store.add_location("Mumbai", Position::new(150.0, 650.0)).unwrap();
        store.add_road("Pune", "Mumbai", 150.0).unwrap();

        store.delete_location("Pune").unwrap();
        let second = store.add_location("Pune", Position::new(1.0, 1.0)).unwrap();

        assert!(second.as_i64() > other.as_i64());
        assert_ne!(first, second);
        assert!(store.list_roads().unwrap().is_empty());
        store.add_road("Mumbai", "Pune", 150.0).unwrap();
        assert_eq!(store.list_roads().unwrap().len(), 2);
    }
}
