//! # citymap: Weighted City Map Editor Core
//!
//! citymap keeps a small map of named locations joined by weighted,
//! undirected roads. The map lives in `SQLite` and is mirrored into an
//! in-memory graph that answers shortest-path and matrix queries and backs
//! interactive drag-to-move editing.
//!
//! ## Design Philosophy
//!
//! - **Store is authoritative** - the graph is rebuilt from `SQLite` after every edit
//! - **Errors, not aborts** - every mutating call returns a [`Result`] with a kind
//! - **Pure queries** - path and matrix derivations never mutate anything
//! - **Headless** - drag gestures are plain events, so everything is testable
//!
//! ## Quick Start
//!
//! ```no_run
//! use citymap::{CityMap, Position};
//!
//! let mut map = CityMap::open_at(std::path::Path::new("city_map.db"))?;
//!
//! map.add_location("Delhi", Position::new(400.0, 50.0))?;
//! map.add_location("Jaipur", Position::new(350.0, 200.0))?;
//! map.add_road("Delhi", "Jaipur", 270.0)?;
//!
//! if let Some(path) = map.shortest_path("Delhi", "Jaipur")? {
//!     println!("{} km via {:?}", path.cost(), path.nodes());
//! }
//! # Ok::<(), citymap::Error>(())
//! ```

mod config;
mod db;
mod drag;
mod error;
pub mod export;
mod graph;
pub mod sample;
mod types;
pub mod validate;

pub use config::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, Config, DEFAULT_DATABASE};
pub use db::{MapStore, Store};
pub use drag::{DEFAULT_PICK_RADIUS, DragController, DragOutcome, DragState, PointerEvent};
pub use error::{Error, ErrorKind, Result};
pub use graph::{
    AdjacencyMatrix, GraphModel, IncidenceMatrix, ShortestPath, adjacency_matrix,
    incidence_matrix, shortest_path,
};
pub use types::{Location, LocationId, Position, Road, StoreStats};

use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// Paths written by a CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    /// The node table.
    pub nodes: PathBuf,
    /// The edge table.
    pub edges: PathBuf,
}

/// A city map: the persistent store, its in-memory graph and the drag controller.
///
/// `CityMap` is the entry point for presentation layers. CRUD calls go to the
/// store first and then rebuild the graph, so a failed call leaves both sides
/// as they were.
#[derive(Debug)]
pub struct CityMap {
    store: Store,
    graph: GraphModel,
    drag: DragController,
}

impl CityMap {
    /// Open the map described by a configuration.
    pub fn open(config: &Config) -> Result<Self> {
        let store = Store::open(&config.database)?;
        Self::with_store(store, config.pick_radius)
    }

    /// Open (or create) a map database at `path` with default settings.
    pub fn open_at(path: &Path) -> Result<Self> {
        Self::with_store(Store::open(path)?, DEFAULT_PICK_RADIUS)
    }

    /// Create a map backed by an in-memory database.
    pub fn in_memory() -> Result<Self> {
        Self::with_store(Store::open_in_memory()?, DEFAULT_PICK_RADIUS)
    }

    /// Wrap an already-open store and load its graph.
    pub fn with_store(store: Store, pick_radius: f64) -> Result<Self> {
        let graph = GraphModel::from_store(&store)?;
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            pick_radius,
            "Opened city map"
        );
        Ok(Self {
            store,
            graph,
            drag: DragController::new(pick_radius),
        })
    }

    /// The in-memory graph.
    #[must_use]
    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The drag controller's current state.
    #[must_use]
    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    /// Add a location.
    ///
    /// The name is trimmed and must be non-empty; both coordinates must be
    /// finite.
    pub fn add_location(&mut self, name: &str, position: Position) -> Result<()> {
        let name = validate::validate_name(name)?;
        let position = validate::validate_position(position)?;
        self.store.add_location(&name, position)?;
        info!(name = %name, x = position.x, y = position.y, "Added location");
        self.reload()
    }

    /// Add an undirected road between two existing locations.
    pub fn add_road(&mut self, start: &str, end: &str, weight: f64) -> Result<()> {
        let start = validate::validate_name(start)?;
        let end = validate::validate_name(end)?;
        let weight = validate::validate_weight(weight)?;
        self.store.add_road(&start, &end, weight)?;
        info!(start = %start, end = %end, weight, "Added road");
        self.reload()
    }

    /// Set a location's position directly, bypassing the drag controller.
    pub fn move_location(&mut self, name: &str, position: Position) -> Result<()> {
        let name = validate::validate_name(name)?;
        let position = validate::validate_position(position)?;
        self.store.update_location_position(&name, position)?;
        info!(name = %name, x = position.x, y = position.y, "Moved location");
        self.reload()
    }

    /// Delete a location and every road touching it.
    pub fn delete_location(&mut self, name: &str) -> Result<()> {
        let name = validate::validate_name(name)?;
        self.store.delete_location(&name)?;
        self.reload()
    }

    /// Rebuild the graph from the store.
    ///
    /// Abandons any drag in progress, since its preview is discarded.
    pub fn reload(&mut self) -> Result<()> {
        if let Some(name) = self.drag.cancel(&mut self.graph, &self.store)? {
            debug!(name = %name, "Cancelled drag on reload");
            return Ok(());
        }
        self.graph.load_from(&self.store)
    }

    /// Cheapest route between two locations. See [`shortest_path`].
    ///
    /// Names are trimmed the same way `add_location` trims them.
    pub fn shortest_path(&self, start: &str, end: &str) -> Result<Option<ShortestPath>> {
        let start = validate::validate_name(start)?;
        let end = validate::validate_name(end)?;
        graph::shortest_path(&self.graph, &start, &end)
    }

    /// Adjacency matrix of the current graph, or `None` if it has no nodes.
    #[must_use]
    pub fn adjacency_matrix(&self) -> Option<AdjacencyMatrix> {
        graph::adjacency_matrix(&self.graph)
    }

    /// Incidence matrix of the current graph, or `None` if it has no roads.
    #[must_use]
    pub fn incidence_matrix(&self) -> Option<IncidenceMatrix> {
        graph::incidence_matrix(&self.graph)
    }

    /// Feed one pointer event to the drag controller.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<DragOutcome> {
        self.drag.handle(event, &mut self.graph, &mut self.store)
    }

    /// Store counts.
    pub fn stats(&self) -> Result<StoreStats> {
        self.store.get_stats()
    }

    /// Populate the NH48 sample map if the store has no locations.
    ///
    /// Returns `true` if the sample was written.
    pub fn seed_sample(&mut self) -> Result<bool> {
        if self.store.get_stats()?.location_count > 0 {
            debug!("Store not empty, skipping sample data");
            return Ok(false);
        }

        for &(name, x, y) in sample::NH48_LOCATIONS {
            self.store.add_location(name, Position::new(x, y))?;
        }
        for &(start, end, weight) in sample::NH48_ROADS {
            self.store.add_road(start, end, weight)?;
        }
        info!(
            locations = sample::NH48_LOCATIONS.len(),
            roads = sample::NH48_ROADS.len(),
            "Seeded sample map"
        );
        self.reload()?;
        Ok(true)
    }

    /// Write the graph as node-link JSON into `dir`. Returns the file path.
    pub fn export_json(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(export::DEFAULT_JSON_FILE);
        export::export_json(&self.graph, &path)?;
        Ok(path)
    }

    /// Write the graph as `nodes.csv` and `edges.csv` into `dir`.
    pub fn export_csv(&self, dir: &Path) -> Result<CsvExport> {
        std::fs::create_dir_all(dir)?;
        let files = CsvExport {
            nodes: dir.join(export::DEFAULT_NODES_FILE),
            edges: dir.join(export::DEFAULT_EDGES_FILE),
        };
        export::export_csv(&self.graph, &files.nodes, &files.edges)?;
        Ok(files)
    }

    /// Close the underlying database.
    pub fn close(self) -> Result<()> {
        self.store.close()
    }
}
