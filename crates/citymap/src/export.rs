//! Export and re-import of the road graph.
//!
//! Supports two pass-through formats over the graph's node and edge sets:
//! - **Node-link JSON**: `{"directed", "multigraph", "graph", "nodes", "links"}`
//! - **CSV pair**: `nodes.csv` (`name,x,y`) and `edges.csv` (`source,target,weight`)
//!
//! Importing what was exported yields the same names, positions and weights.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::GraphModel;
use crate::types::Position;

/// Default file name for JSON exports.
pub const DEFAULT_JSON_FILE: &str = "graph_data.json";

/// Default file name for the CSV node table.
pub const DEFAULT_NODES_FILE: &str = "nodes.csv";

/// Default file name for the CSV edge table.
pub const DEFAULT_EDGES_FILE: &str = "edges.csv";

/// Node-link document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkData {
    /// Always `false`: roads are undirected.
    pub directed: bool,
    /// Always `false`: at most one road per pair.
    pub multigraph: bool,
    /// Graph-level attributes (none are written).
    #[serde(default)]
    pub graph: serde_json::Map<String, serde_json::Value>,
    /// Locations.
    pub nodes: Vec<NodeLinkNode>,
    /// Roads, once each.
    pub links: Vec<NodeLinkLink>,
}

/// A node entry in a node-link document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkNode {
    /// Location name.
    pub id: String,
    /// `[x, y]` position.
    pub pos: [f64; 2],
}

/// A link entry in a node-link document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeLinkLink {
    /// One endpoint.
    pub source: String,
    /// The other endpoint.
    pub target: String,
    /// Road weight.
    pub weight: f64,
}

/// A row of `nodes.csv`.
#[derive(Debug, Serialize, Deserialize)]
struct NodeRecord {
    name: String,
    x: f64,
    y: f64,
}

/// A row of `edges.csv`.
#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    source: String,
    target: String,
    weight: f64,
}

/// Build the node-link document for a graph.
#[must_use]
pub fn to_node_link(graph: &GraphModel) -> NodeLinkData {
    NodeLinkData {
        directed: false,
        multigraph: false,
        graph: serde_json::Map::new(),
        nodes: graph
            .nodes()
            .into_iter()
            .map(|l| NodeLinkNode {
                id: l.name,
                pos: [l.position.x, l.position.y],
            })
            .collect(),
        links: graph
            .edges()
            .into_iter()
            .map(|r| NodeLinkLink {
                source: r.start,
                target: r.end,
                weight: r.weight,
            })
            .collect(),
    }
}

/// Rebuild a graph from a node-link document.
pub fn from_node_link(data: &NodeLinkData) -> Result<GraphModel> {
    let mut graph = GraphModel::new();
    for node in &data.nodes {
        graph
            .add_node(&node.id, Position::new(node.pos[0], node.pos[1]))
            .map_err(|e| Error::Export(format!("node '{}': {e}", node.id)))?;
    }
    for link in &data.links {
        add_imported_edge(&mut graph, &link.source, &link.target, link.weight)?;
    }
    Ok(graph)
}

/// Write a graph as pretty-printed node-link JSON.
pub fn write_json<W: Write>(graph: &GraphModel, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &to_node_link(graph))?;
    Ok(())
}

/// Read a graph from node-link JSON.
pub fn read_json<R: Read>(reader: R) -> Result<GraphModel> {
    let data: NodeLinkData = serde_json::from_reader(reader)?;
    from_node_link(&data)
}

/// Export a graph to a node-link JSON file.
pub fn export_json(graph: &GraphModel, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json(graph, &mut writer)?;
    writer.flush()?;
    tracing::info!(path = %path.display(), nodes = graph.node_count(), "Exported JSON");
    Ok(())
}

/// Import a graph from a node-link JSON file.
pub fn import_node_link(path: &Path) -> Result<GraphModel> {
    read_json(BufReader::new(File::open(path)?))
}

/// Write a graph as a node table and an edge table.
pub fn write_csv<N: Write, E: Write>(graph: &GraphModel, nodes: N, edges: E) -> Result<()> {
    let mut node_writer = csv::Writer::from_writer(nodes);
    for location in graph.nodes() {
        node_writer.serialize(NodeRecord {
            name: location.name,
            x: location.position.x,
            y: location.position.y,
        })?;
    }
    node_writer.flush()?;

    let mut edge_writer = csv::Writer::from_writer(edges);
    for road in graph.edges() {
        edge_writer.serialize(EdgeRecord {
            source: road.start,
            target: road.end,
            weight: road.weight,
        })?;
    }
    edge_writer.flush()?;
    Ok(())
}

/// Read a graph from a node table and an edge table.
pub fn read_csv<N: Read, E: Read>(nodes: N, edges: E) -> Result<GraphModel> {
    let mut graph = GraphModel::new();

    for record in csv::Reader::from_reader(nodes).deserialize() {
        let record: NodeRecord = record?;
        graph
            .add_node(&record.name, Position::new(record.x, record.y))
            .map_err(|e| Error::Export(format!("node '{}': {e}", record.name)))?;
    }

    for record in csv::Reader::from_reader(edges).deserialize() {
        let record: EdgeRecord = record?;
        add_imported_edge(&mut graph, &record.source, &record.target, record.weight)?;
    }

    Ok(graph)
}

/// Export a graph to a pair of CSV files.
pub fn export_csv(graph: &GraphModel, nodes_path: &Path, edges_path: &Path) -> Result<()> {
    write_csv(graph, File::create(nodes_path)?, File::create(edges_path)?)?;
    tracing::info!(
        nodes = %nodes_path.display(),
        edges = %edges_path.display(),
        "Exported CSV"
    );
    Ok(())
}

/// Import a graph from a pair of CSV files.
pub fn import_csv(nodes_path: &Path, edges_path: &Path) -> Result<GraphModel> {
    read_csv(File::open(nodes_path)?, File::open(edges_path)?)
}

fn add_imported_edge(graph: &mut GraphModel, source: &str, target: &str, weight: f64) -> Result<()> {
    graph
        .add_edge(source, target, weight)
        .map_err(|e| Error::Export(format!("link {source} - {target}: {e}")))
}
