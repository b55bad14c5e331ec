//! In-memory road graph and the queries built on it.
//!
//! This module provides:
//! - [`GraphModel`]: the undirected weighted graph rebuilt from the store
//! - Path finding (`path`): single-pair shortest path
//! - Matrix views (`matrix`): adjacency and signed incidence matrices
//!
//! ## Design
//!
//! - Nodes live in a petgraph `UnGraph`, keyed by name through a side map
//! - Each stored road (two directed rows) becomes a single undirected edge
//! - Queries are pure functions over a `&GraphModel`; the model does no
//!   algorithmic work itself

mod matrix;
mod path;

pub use matrix::{AdjacencyMatrix, IncidenceMatrix, adjacency_matrix, incidence_matrix};
pub use path::{ShortestPath, shortest_path};

use std::cmp::Ordering;
use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::db::MapStore;
use crate::error::{Error, Result};
use crate::types::{Location, Position, Road};

/// Node payload: the location name and its current (possibly previewed) position.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node {
    pub(crate) name: String,
    pub(crate) position: Position,
}

/// The in-memory weighted undirected graph of locations and roads.
///
/// Built wholesale from a [`MapStore`] with [`GraphModel::load_from`]. Between
/// loads it only changes through [`GraphModel::set_node_position`] (drag
/// preview) and the incremental `add_*` operations used by importers.
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    graph: UnGraph<Node, f64>,
    node_map: HashMap<String, NodeIndex>,
}

impl GraphModel {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from the current store contents.
    pub fn from_store<S: MapStore + ?Sized>(store: &S) -> Result<Self> {
        let mut model = Self::new();
        model.load_from(store)?;
        Ok(model)
    }

    /// Replace the graph with the store's current contents.
    ///
    /// Both tables are read before anything is cleared, so a failing read
    /// leaves the current graph untouched. The mirrored row of each road
    /// overwrites its twin with the same weight.
    pub fn load_from<S: MapStore + ?Sized>(&mut self, store: &S) -> Result<()> {
        let locations = store.list_locations()?;
        let roads = store.list_roads()?;

        let mut fresh = Self::new();
        for location in locations {
            fresh.add_node(&location.name, location.position)?;
        }
        for road in &roads {
            fresh.add_edge(&road.start, &road.end, road.weight)?;
        }

        tracing::debug!(
            nodes = fresh.node_count(),
            edges = fresh.edge_count(),
            road_rows = roads.len(),
            "Loaded graph from store"
        );
        *self = fresh;
        Ok(())
    }

    /// Add a node.
    ///
    /// Fails with [`Error::DuplicateName`] if a node with this name exists.
    pub fn add_node(&mut self, name: &str, position: Position) -> Result<()> {
        if self.node_map.contains_key(name) {
            return Err(Error::DuplicateName(name.to_string()));
        }

        let index = self.graph.add_node(Node {
            name: name.to_string(),
            position,
        });
        self.node_map.insert(name.to_string(), index);
        Ok(())
    }

    /// Add or overwrite the undirected edge between two existing nodes.
    ///
    /// Adding the same pair again (in either order) replaces the weight and
    /// keeps the original endpoint orientation.
    pub fn add_edge(&mut self, start: &str, end: &str, weight: f64) -> Result<()> {
        let a = self.index_of(start)?;
        let b = self.index_of(end)?;

        if a == b {
            return Err(Error::invalid(format!(
                "self-loop on '{start}' is not supported"
            )));
        }

        self.graph.update_edge(a, b, weight);
        Ok(())
    }

    /// Move a node in memory only. The store is not touched.
    pub fn set_node_position(&mut self, name: &str, position: Position) -> Result<()> {
        let index = self.index_of(name)?;
        self.graph[index].position = position;
        Ok(())
    }

    /// Node names in lexicographic order.
    #[must_use]
    pub fn node_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.node_map.keys().cloned().collect();
        names.sort();
        names
    }

    /// Whether a node with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Current position of a node.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<Position> {
        self.node_map
            .get(name)
            .map(|&index| self.graph[index].position)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// All nodes with their positions, in load order.
    #[must_use]
    pub fn nodes(&self) -> Vec<Location> {
        self.graph
            .node_indices()
            .map(|i| {
                let node = &self.graph[i];
                Location {
                    name: node.name.clone(),
                    position: node.position,
                }
            })
            .collect()
    }

    /// All undirected edges, once each, in their stored orientation.
    #[must_use]
    pub fn edges(&self) -> Vec<Road> {
        self.graph
            .edge_references()
            .map(|e| {
                Road::new(
                    self.graph[e.source()].name.clone(),
                    self.graph[e.target()].name.clone(),
                    *e.weight(),
                )
            })
            .collect()
    }

    /// Weight of the edge between two nodes, if connected.
    #[must_use]
    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        let a = *self.node_map.get(a)?;
        let b = *self.node_map.get(b)?;
        self.graph
            .find_edge(a, b)
            .and_then(|e| self.graph.edge_weight(e).copied())
    }

    /// The node closest to `point` and its distance.
    ///
    /// Equal distances resolve to the lexicographically smaller name.
    #[must_use]
    pub fn nearest_node(&self, point: Position) -> Option<(&str, f64)> {
        self.graph
            .node_weights()
            .map(|node| (node.name.as_str(), node.position.distance_to(point)))
            .min_by(|(a_name, a_dist), (b_name, b_dist)| {
                a_dist
                    .partial_cmp(b_dist)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a_name.cmp(b_name))
            })
    }

    pub(crate) fn index_of(&self, name: &str) -> Result<NodeIndex> {
        self.node_map
            .get(name)
            .copied()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    pub(crate) fn inner(&self) -> &UnGraph<Node, f64> {
        &self.graph
    }
}
