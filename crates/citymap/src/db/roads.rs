//! Road CRUD operations for the map store.

use rusqlite::{Transaction, params};

use super::{ROAD_SELECT, Store, find_location_id, is_unique_violation, row_to_road};
use crate::error::{Error, Result};
use crate::types::{LocationId, Road};

/// Resolve a road endpoint to its row ID inside a transaction.
fn resolve(tx: &Transaction<'_>, name: &str) -> Result<LocationId> {
    find_location_id(tx, name)?.ok_or_else(|| Error::UnresolvedReference(name.to_string()))
}

impl Store {
    /// Add an undirected road between two existing locations.
    ///
    /// Inserts the `start → end` and `end → start` rows in one transaction.
    /// The weight is expected to be finite and non-negative; the store does
    /// not check it (see [`crate::validate::parse_weight`]).
    ///
    /// # Errors
    ///
    /// - [`Error::UnresolvedReference`] if either endpoint does not exist
    /// - [`Error::InvalidInput`] if both endpoints are the same location
    /// - [`Error::DuplicateRoad`] if the two locations are already connected
    pub fn add_road(&mut self, start: &str, end: &str, weight: f64) -> Result<()> {
        let mut conn = self.connection()?;
        let tx = conn.transaction()?;

        let start_id = resolve(&tx, start)?;
        let end_id = resolve(&tx, end)?;

        if start_id == end_id {
            return Err(Error::invalid(format!(
                "a road cannot start and end at '{start}'"
            )));
        }

        for (from, to) in [(start_id, end_id), (end_id, start_id)] {
            if let Err(e) = tx.execute(
                "INSERT INTO roads (start_location_id, end_location_id, weight) VALUES (?1, ?2, ?3)",
                params![from.as_i64(), to.as_i64(), weight],
            ) {
                if is_unique_violation(&e) {
                    tracing::warn!(start, end, "Road already exists");
                    return Err(Error::DuplicateRoad {
                        start: start.to_string(),
                        end: end.to_string(),
                    });
                }
                return Err(e.into());
            }
        }

        tx.commit()?;
        tracing::debug!(start, end, weight, "Added road");
        Ok(())
    }

    /// Get all directed road rows, oldest first.
    ///
    /// Each undirected road appears twice, once per direction.
    pub fn list_roads(&self) -> Result<Vec<Road>> {
        let conn = self.connection()?;

        let mut stmt = conn.prepare(&format!("{ROAD_SELECT} ORDER BY r.id"))?;

        let roads = stmt
            .query_map([], row_to_road)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(roads)
    }
}

#[cfg(test)]
mod tests {
    use crate::db::Store;
    use crate::error::Error;
    use crate::types::{Position, Road};

    fn store_with_cities() -> Store {
        let mut store = Store::open_in_memory().unwrap();
        store.add_location("Delhi", Position::new(400.0, 50.0)).unwrap();
        store.add_location("Jaipur", Position::new(350.0, 200.0)).unwrap();
        store
    }

    #[test]
    fn add_road_stores_both_directions_with_equal_weight() {
        let mut store = store_with_cities();

        store.add_road("Delhi", "Jaipur", 270.0).unwrap();

        let roads = store.list_roads().unwrap();
        assert_eq!(
            roads,
            vec![
                Road::new("Delhi", "Jaipur", 270.0),
                Road::new("Jaipur", "Delhi", 270.0),
            ]
        );
    }

    #[test]
    fn add_road_with_unknown_endpoint_is_unresolved() {
        let mut store = store_with_cities();

        let result = store.add_road("Delhi", "Agra", 200.0);

        assert!(matches!(result, Err(Error::UnresolvedReference(ref n)) if n == "Agra"));
        assert!(store.list_roads().unwrap().is_empty());
    }

    #[test]
    fn add_road_with_unknown_start_is_unresolved() {
        let mut store = store_with_cities();

        let result = store.add_road("Agra", "Delhi", 200.0);

        assert!(matches!(result, Err(Error::UnresolvedReference(ref n)) if n == "Agra"));
    }

    #[test]
    fn duplicate_road_is_rejected_and_rolled_back() {
        let mut store = store_with_cities();
        store.add_road("Delhi", "Jaipur", 270.0).unwrap();

        let same_direction = store.add_road("Delhi", "Jaipur", 999.0);
        let reversed = store.add_road("Jaipur", "Delhi", 999.0);

        assert!(matches!(same_direction, Err(Error::DuplicateRoad { .. })));
        assert!(matches!(reversed, Err(Error::DuplicateRoad { .. })));
        let roads = store.list_roads().unwrap();
        assert_eq!(roads.len(), 2);
        assert!(roads.iter().all(|r| (r.weight - 270.0).abs() < f64::EPSILON));
    }

    #[test]
    fn self_loop_is_rejected() {
        let mut store = store_with_cities();

        let result = store.add_road("Delhi", "Delhi", 1.0);

        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert!(store.list_roads().unwrap().is_empty());
    }
}
