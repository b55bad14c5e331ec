//! Single-pair shortest path over the road graph.

use petgraph::algo::astar;

use super::GraphModel;
use crate::error::Result;

/// A shortest route between two locations.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    nodes: Vec<String>,
    cost: f64,
}

impl ShortestPath {
    /// Create a trivial path with a single location and zero cost.
    #[must_use]
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            nodes: vec![name.into()],
            cost: 0.0,
        }
    }

    /// Location names from start to end, both inclusive.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Sum of the road weights along the path.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of roads travelled.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Find the cheapest path between two locations.
///
/// Runs Dijkstra's algorithm (A* with a zero heuristic) over the edge weights,
/// which must all be non-negative. Among equal-cost paths, whichever the search
/// settles first is returned.
///
/// # Returns
///
/// - `Ok(Some(path))` when a path exists; `start == end` yields `[start]`
/// - `Ok(None)` when both locations exist but are not connected
///
/// # Errors
///
/// [`Error::NotFound`](crate::Error::NotFound) if `start` or `end` is not in
/// the graph.
pub fn shortest_path(graph: &GraphModel, start: &str, end: &str) -> Result<Option<ShortestPath>> {
    let from = graph.index_of(start)?;
    let to = graph.index_of(end)?;

    if from == to {
        return Ok(Some(ShortestPath::single(start)));
    }

    let inner = graph.inner();
    let found = astar(inner, from, |n| n == to, |e| *e.weight(), |_| 0.0);

    Ok(found.map(|(cost, indices)| ShortestPath {
        nodes: indices
            .into_iter()
            .map(|i| inner[i].name.clone())
            .collect(),
        cost,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::Position;

    /// ```text
    ///   A --1-- B --1-- C
    ///    \             /
    ///     -----5-------        D (isolated)
    /// ```
    fn triangle_with_island() -> GraphModel {
        let mut model = GraphModel::new();
        for name in ["A", "B", "C", "D"] {
            model.add_node(name, Position::default()).unwrap();
        }
        model.add_edge("A", "B", 1.0).unwrap();
        model.add_edge("B", "C", 1.0).unwrap();
        model.add_edge("A", "C", 5.0).unwrap();
        model
    }

    #[test]
    fn prefers_cheaper_multi_hop_route() {
        let model = triangle_with_island();

        let path = shortest_path(&model, "A", "C").unwrap().unwrap();

        assert_eq!(path.nodes(), ["A", "B", "C"]);
        assert!((path.cost() - 2.0).abs() < f64::EPSILON);
        assert_eq!(path.hops(), 2);
    }

    #[test]
    fn same_start_and_end_returns_single_node() {
        let model = triangle_with_island();

        let path = shortest_path(&model, "D", "D").unwrap().unwrap();

        assert_eq!(path.nodes(), ["D"]);
        assert!(path.cost().abs() < f64::EPSILON);
    }

    #[test]
    fn disconnected_nodes_have_no_path() {
        let model = triangle_with_island();

        let result = shortest_path(&model, "A", "D").unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn missing_node_is_not_found_rather_than_no_path() {
        let model = triangle_with_island();

        assert!(matches!(
            shortest_path(&model, "A", "Z"),
            Err(Error::NotFound(ref n)) if n == "Z"
        ));
        assert!(matches!(
            shortest_path(&model, "Z", "A"),
            Err(Error::NotFound(ref n)) if n == "Z"
        ));
    }

    #[test]
    fn zero_weight_roads_are_traversable() {
        let mut model = GraphModel::new();
        model.add_node("A", Position::default()).unwrap();
        model.add_node("B", Position::default()).unwrap();
        model.add_edge("A", "B", 0.0).unwrap();

        let path = shortest_path(&model, "B", "A").unwrap().unwrap();

        assert_eq!(path.nodes(), ["B", "A"]);
        assert!(path.cost().abs() < f64::EPSILON);
    }
}
