//! Adjacency and signed incidence matrices derived from the road graph.
//!
//! Rows (and adjacency columns) follow [`GraphModel::node_names`] order so the
//! tables are deterministic. Both derivations return `None` when there is
//! nothing to tabulate, letting callers skip display of a degenerate table.

use petgraph::visit::EdgeRef;

use super::GraphModel;

/// Square node-by-node matrix of road weights.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    labels: Vec<String>,
    cells: Vec<Vec<Option<f64>>>,
}

impl AdjacencyMatrix {
    /// Node names labelling both rows and columns.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Weight of the road between nodes `i` and `j`, or `None` if there is none.
    ///
    /// Unlike [`AdjacencyMatrix::value`], this distinguishes a zero-weight road
    /// from a missing one.
    #[must_use]
    pub fn edge(&self, i: usize, j: usize) -> Option<f64> {
        self.cells.get(i).and_then(|row| row.get(j)).copied().flatten()
    }

    /// Numeric cell value; a missing road reads as `0.0`.
    #[must_use]
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.edge(i, j).unwrap_or(0.0)
    }

    /// The numeric table, row by row.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.unwrap_or(0.0)).collect())
            .collect()
    }
}

/// Node-by-edge matrix of signed endpoint membership.
#[derive(Debug, Clone, PartialEq)]
pub struct IncidenceMatrix {
    nodes: Vec<String>,
    edges: Vec<(String, String)>,
    values: Vec<Vec<i8>>,
}

impl IncidenceMatrix {
    /// Node names labelling the rows.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// `(start, end)` pairs labelling the columns.
    ///
    /// The start row holds `+1` and the end row `-1`.
    #[must_use]
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Human-readable column labels, e.g. `(Delhi, Jaipur)`.
    #[must_use]
    pub fn edge_labels(&self) -> Vec<String> {
        self.edges
            .iter()
            .map(|(start, end)| format!("({start}, {end})"))
            .collect()
    }

    /// Cell value at node row `i`, edge column `k`.
    #[must_use]
    pub fn value(&self, i: usize, k: usize) -> i8 {
        self.values
            .get(i)
            .and_then(|row| row.get(k))
            .copied()
            .unwrap_or(0)
    }

    /// The table, row by row.
    #[must_use]
    pub fn rows(&self) -> &[Vec<i8>] {
        &self.values
    }

    /// Sum of column `k`. Zero for every well-formed edge column.
    #[must_use]
    pub fn column_sum(&self, k: usize) -> i32 {
        self.values
            .iter()
            .map(|row| i32::from(row.get(k).copied().unwrap_or(0)))
            .sum()
    }
}

/// Derive the adjacency matrix.
///
/// Returns `None` for a graph with no nodes. The matrix is symmetric with a
/// zero diagonal since self-loops are never stored.
#[must_use]
pub fn adjacency_matrix(graph: &GraphModel) -> Option<AdjacencyMatrix> {
    if graph.is_empty() {
        return None;
    }

    let labels = graph.node_names();
    let row_of = row_lookup(graph, &labels);
    let n = labels.len();
    let mut cells = vec![vec![None; n]; n];

    let inner = graph.inner();
    for edge in inner.edge_references() {
        let i = row_of[edge.source().index()];
        let j = row_of[edge.target().index()];
        cells[i][j] = Some(*edge.weight());
        cells[j][i] = Some(*edge.weight());
    }

    Some(AdjacencyMatrix { labels, cells })
}

/// Derive the oriented incidence matrix.
///
/// Returns `None` for a graph with no edges. Each column has exactly one `+1`
/// (the edge's stored start) and one `-1` (its end).
#[must_use]
pub fn incidence_matrix(graph: &GraphModel) -> Option<IncidenceMatrix> {
    if graph.edge_count() == 0 {
        return None;
    }

    let nodes = graph.node_names();
    let row_of = row_lookup(graph, &nodes);
    let inner = graph.inner();
    let mut values = vec![vec![0_i8; graph.edge_count()]; nodes.len()];
    let mut edges = Vec::with_capacity(graph.edge_count());

    for (k, edge) in inner.edge_references().enumerate() {
        values[row_of[edge.source().index()]][k] = 1;
        values[row_of[edge.target().index()]][k] = -1;
        edges.push((
            inner[edge.source()].name.clone(),
            inner[edge.target()].name.clone(),
        ));
    }

    Some(IncidenceMatrix {
        nodes,
        edges,
        values,
    })
}

/// Map each petgraph node index to its row in `labels` order.
fn row_lookup(graph: &GraphModel, labels: &[String]) -> Vec<usize> {
    let inner = graph.inner();
    let mut row_of = vec![0; inner.node_count()];
    for (row, name) in labels.iter().enumerate() {
        if let Ok(index) = graph.index_of(name) {
            row_of[index.index()] = row;
        }
    }
    row_of
}
