use std::fmt::{Debug, Display};

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{ops::*, *};

/// A graph stored as a mapping from each vertex to its neighbor list.
///
/// Edge insertion appends symmetric entries to both endpoint lists; the edge
/// set is a computed view that scans all `(u, neighbor)` pairs with
/// `u < neighbor` so every undirected edge is reported exactly once per
/// occurrence. Vertex uniqueness is enforced by the map keys.
#[derive(Clone, Default)]
pub struct AdjMapGraph {
    map: FxHashMap<Vertex, Vec<Vertex>>,
}

impl AdjMapGraph {
    /// Returns the neighbor list of `v`, or `None` if `v` is absent.
    /// The list may contain a neighbor more than once if the graph was
    /// constructed with duplicate edges.
    pub fn neighbors_of(&self, v: Vertex) -> Option<&[Vertex]> {
        self.map.get(&v).map(Vec::as_slice)
    }
}

impl GraphOrder for AdjMapGraph {
    fn number_of_vertices(&self) -> NumVertices {
        self.map.len()
    }

    fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.map.keys().copied()
    }

    fn has_vertex(&self, v: Vertex) -> bool {
        self.map.contains_key(&v)
    }
}

impl EdgeView for AdjMapGraph {
    fn number_of_edges(&self) -> NumEdges {
        // symmetric storage without self-loops: each edge occupies two slots
        self.map.values().map(Vec::len).sum::<usize>() / 2
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.map
            .iter()
            .flat_map(|(&u, ns)| ns.iter().filter(move |&&v| u < v).map(move |&v| Edge(u, v)))
    }

    fn has_edge(&self, a: Vertex, b: Vertex) -> bool {
        self.map.get(&a).is_some_and(|ns| ns.contains(&b))
    }

    fn degree_of(&self, v: Vertex) -> Result<NumVertices> {
        self.map
            .get(&v)
            .map(Vec::len)
            .ok_or(GraphError::UnknownVertex(v))
    }
}

impl GraphEditing for AdjMapGraph {
    fn try_add_vertex(&mut self, v: Vertex) -> bool {
        if self.has_vertex(v) {
            return false;
        }
        self.map.insert(v, Vec::new());
        true
    }

    fn try_remove_vertex(&mut self, v: Vertex) -> bool {
        let Some(neighbors) = self.map.remove(&v) else {
            return false;
        };
        for u in neighbors.into_iter().unique() {
            if let Some(ns) = self.map.get_mut(&u) {
                ns.retain(|&w| w != v);
            }
        }
        true
    }

    fn try_add_edge(&mut self, a: Vertex, b: Vertex) -> bool {
        if a == b {
            self.try_add_vertex(a);
            return false;
        }
        if self.has_edge(a, b) {
            return false;
        }

        self.map.entry(a).or_default().push(b);
        self.map.entry(b).or_default().push(a);
        true
    }

    fn try_remove_edge(&mut self, a: Vertex, b: Vertex) -> bool {
        let Some(pos) = self
            .map
            .get(&a)
            .and_then(|ns| ns.iter().position(|&u| u == b))
        else {
            return false;
        };
        self.map.get_mut(&a).unwrap().remove(pos);

        // symmetric storage guarantees the mirrored entry
        let ns = self.map.get_mut(&b).unwrap();
        let pos = ns.iter().position(|&u| u == a).unwrap();
        ns.remove(pos);
        true
    }
}

impl GraphFromParts for AdjMapGraph {
    fn new() -> Self {
        Self::default()
    }

    fn from_parts<V, E, I>(vertices: V, edges: E) -> Self
    where
        V: IntoIterator<Item = Vertex>,
        E: IntoIterator<Item = I>,
        I: Into<Edge>,
    {
        let mut graph = Self::new();
        for v in vertices {
            graph.map.entry(v).or_default();
        }
        for edge in edges {
            let edge = edge.into().normalized();
            if edge.is_loop() {
                continue;
            }
            // raw appends: the constructor path keeps duplicate edges
            graph.map.entry(edge.0).or_default().push(edge.1);
            graph.map.entry(edge.1).or_default().push(edge.0);
        }
        graph
    }
}

impl Display for AdjMapGraph {
    /// Renders vertices and edges in sorted order since map iteration order
    /// is unstable across runs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vertices: [{}]\nEdges: [{}]",
            self.ordered_vertices().iter().join(", "),
            self.ordered_edges().iter().join(", ")
        )
    }
}

impl Debug for AdjMapGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_a_computed_view() {
        let g = AdjMapGraph::from_parts([1, 2, 3, 4], [(2, 1), (2, 3), (2, 4)]);
        assert_eq!(g.ordered_edges(), vec![Edge(1, 2), Edge(2, 3), Edge(2, 4)]);
        assert_eq!(g.number_of_edges(), 3);
        assert_eq!(g.neighbors_of(2).unwrap().len(), 3);
    }

    #[test]
    fn constructor_adds_missing_endpoints_and_skips_loops() {
        let g = AdjMapGraph::from_parts([1], [(1, 2), (3, 3), (4, 5)]);
        assert_eq!(g.ordered_vertices(), vec![1, 2, 3, 4, 5]);
        assert_eq!(g.ordered_edges(), vec![Edge(1, 2), Edge(4, 5)]);
        assert!(g.has_vertex(3));
        assert!(!g.has_edge(3, 3));
    }

    #[test]
    fn constructor_keeps_duplicate_edges() {
        let g = AdjMapGraph::from_parts([1, 2], [(1, 2), (2, 1)]);
        assert_eq!(g.number_of_edges(), 2);
        assert_eq!(g.ordered_edges(), vec![Edge(1, 2), Edge(1, 2)]);
        assert_eq!(g.degree_of(1), Ok(2));
    }

    #[test]
    fn add_vertex_never_wipes_adjacency() {
        let mut g = AdjMapGraph::from_parts([1, 2], [(1, 2)]);
        g.add_vertex(1);
        assert!(!g.try_add_vertex(1));
        assert!(g.has_edge(1, 2));
        assert_eq!(g.degree_of(1), Ok(1));
    }

    #[test]
    fn remove_vertex_strips_neighbor_lists() {
        let mut g = AdjMapGraph::from_parts([1, 2, 3, 4], [(1, 2), (2, 3), (2, 4), (1, 4)]);
        assert!(g.try_remove_vertex(2));
        assert_eq!(g.ordered_vertices(), vec![1, 3, 4]);
        assert_eq!(g.ordered_edges(), vec![Edge(1, 4)]);
        assert_eq!(g.degree_of(3), Ok(0));
        assert!(!g.try_remove_vertex(2));
    }

    #[test]
    fn add_edge_is_deduplicated_and_symmetric() {
        let mut g = AdjMapGraph::new();
        assert!(g.try_add_edge(5, 2));
        assert!(!g.try_add_edge(2, 5));
        assert!(g.has_edge(2, 5));
        assert!(g.has_edge(5, 2));
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn add_edge_rejects_self_loop() {
        let mut g = AdjMapGraph::new();
        assert!(!g.try_add_edge(3, 3));
        assert!(g.has_vertex(3));
        assert_eq!(g.degree_of(3), Ok(0));
    }

    #[test]
    fn remove_edge_removes_both_directions() {
        let mut g = AdjMapGraph::from_parts([1, 2, 3], [(1, 2), (2, 3)]);
        assert!(g.try_remove_edge(2, 1));
        assert!(!g.has_edge(1, 2));
        assert_eq!(g.neighbors_of(1).unwrap(), &[] as &[Vertex]);
        assert_eq!(g.degree_of(2), Ok(1));
        assert!(!g.try_remove_edge(1, 2));
    }

    #[test]
    fn remove_edge_removes_one_occurrence() {
        let mut g = AdjMapGraph::from_parts([1, 2], [(1, 2), (1, 2)]);
        assert!(g.try_remove_edge(1, 2));
        assert_eq!(g.number_of_edges(), 1);
        assert!(g.has_edge(1, 2));
    }

    #[test]
    fn degree_of_unknown_vertex_fails() {
        let g = AdjMapGraph::from_parts([1, 2], [(1, 2)]);
        assert_eq!(g.degree_of(7), Err(GraphError::UnknownVertex(7)));
    }

    #[test]
    fn display_renders_sorted() {
        let g = AdjMapGraph::from_parts([3, 1, 2], [(3, 1), (2, 3)]);
        assert_eq!(
            g.to_string(),
            "Vertices: [1, 2, 3]\nEdges: [(1,3), (2,3)]"
        );
    }
}
