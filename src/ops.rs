use std::fmt::Display;

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the vertex-size of a graph
pub trait GraphOrder {
    /// Returns the number of vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Returns the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V. The order is representation-dependent.
    fn vertices(&self) -> impl Iterator<Item = Vertex> + '_;

    /// Returns all vertices in sorted order
    fn ordered_vertices(&self) -> Vec<Vertex> {
        self.vertices().sorted_unstable().collect_vec()
    }

    /// Returns *true* iff `v` is a vertex of this graph
    fn has_vertex(&self, v: Vertex) -> bool;
}

/// Getters for the edge set and degrees.
///
/// Edges are always reported normalized. Multiplicities introduced by the
/// constructor path are preserved by [`EdgeView::edges`]; use
/// [`GraphConversion::clean_copy_of`] to collapse them.
pub trait EdgeView: GraphOrder {
    /// Returns the number of edges of the graph (counting multiplicities)
    fn number_of_edges(&self) -> NumEdges;

    /// Returns an iterator over all (normalized) edges of the graph.
    /// The order is representation-dependent.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_;

    /// Returns all edges in sorted order
    fn ordered_edges(&self) -> Vec<Edge> {
        self.edges().sorted_unstable().collect_vec()
    }

    /// Returns *true* iff the edge `{a, b}` exists in the graph.
    /// The query is normalized first, so `has_edge(a, b) == has_edge(b, a)`.
    fn has_edge(&self, a: Vertex, b: Vertex) -> bool;

    /// Returns the number of edges incident to `v`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if `v` is not a vertex of the
    /// graph. Both representations share this policy; there is no silent 0.
    fn degree_of(&self, v: Vertex) -> Result<NumVertices>;

    /// Returns a mapping from every vertex to its degree
    fn degree_map(&self) -> FxHashMap<Vertex, NumVertices> {
        self.vertices()
            // degree_of cannot fail for a vertex reported by vertices()
            .map(|v| (v, self.degree_of(v).unwrap()))
            .collect()
    }
}

/// Provides functions to insert/delete vertices and edges.
///
/// All removals are no-ops on absent targets and report the outcome through
/// their return value. All insertions deduplicate: `try_add_vertex` never
/// touches existing adjacency and `try_add_edge` is `has_edge`-guarded.
pub trait GraphEditing {
    /// Adds the vertex `v` to the graph.
    /// Returns *true* exactly if the vertex was not present previously.
    fn try_add_vertex(&mut self, v: Vertex) -> bool;

    /// Adds the vertex `v` to the graph if it is not already present.
    /// Existing adjacency information is never discarded.
    fn add_vertex(&mut self, v: Vertex) {
        self.try_add_vertex(v);
    }

    /// Removes the vertex `v` and every edge incident to it.
    /// Returns *true* if the vertex was removed and *false* if it was absent.
    fn try_remove_vertex(&mut self, v: Vertex) -> bool;

    /// Adds the edge `{a, b}` to the graph, transparently adding missing
    /// endpoints as vertices.
    /// Returns *true* exactly if the edge was not present previously.
    /// Self-loops are rejected: `try_add_edge(a, a)` adds the vertex `a` (if
    /// missing) but no edge and returns *false*.
    fn try_add_edge(&mut self, a: Vertex, b: Vertex) -> bool;

    /// Adds all edges in the collection via [`GraphEditing::try_add_edge`]
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for edge in edges {
            let Edge(a, b) = edge.into();
            self.try_add_edge(a, b);
        }
    }

    /// Removes one occurrence of the edge `{a, b}` from the graph.
    /// Returns *true* if an edge was removed and *false* if it was absent.
    fn try_remove_edge(&mut self, a: Vertex, b: Vertex) -> bool;
}

/// A super trait for creating a graph from scratch from vertex and edge lists
pub trait GraphFromParts: Sized {
    /// Creates a graph with no vertices and no edges
    fn new() -> Self;

    /// Creates a graph from an iterator over vertices and an iterator over
    /// edges. Edges are normalized, self-loops are skipped, endpoints missing
    /// from `vertices` are added, and duplicate edges are kept as-is.
    fn from_parts<V, E, I>(vertices: V, edges: E) -> Self
    where
        V: IntoIterator<Item = Vertex>,
        E: IntoIterator<Item = I>,
        I: Into<Edge>;
}

/// Conversion between representations.
///
/// Any representation can be rebuilt from any other through the shared
/// contract; no mutable state is aliased between source and copy.
pub trait GraphConversion: GraphFromParts {
    /// Rebuilds `g` in the target representation, keeping duplicate edges
    fn copy_of<G: EdgeView>(g: &G) -> Self {
        Self::from_parts(g.vertices(), g.edges())
    }

    /// Rebuilds `g` in the target representation with the edge multiset
    /// collapsed to a set
    fn clean_copy_of<G: EdgeView>(g: &G) -> Self {
        let edges: FxHashSet<Edge> = g.edges().collect();
        Self::from_parts(g.vertices(), edges)
    }
}

impl<G: GraphFromParts> GraphConversion for G {}

/// Umbrella trait for everything a conforming representation must provide.
/// `Clone` doubles as the same-representation copy operation and `Display`
/// renders the graph as `"Vertices: [..]\nEdges: [..]"`.
pub trait GraphCore:
    GraphOrder + EdgeView + GraphEditing + GraphFromParts + Clone + Display
{
}

impl<G> GraphCore for G where
    G: GraphOrder + EdgeView + GraphEditing + GraphFromParts + Clone + Display
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::{AdjMapGraph, EdgeListGraph};

    fn degree_sum_is_twice_distinct_edges<G: GraphCore>() {
        let g = G::from_parts(
            [1, 2, 3, 4, 9],
            [(1, 2), (2, 3), (2, 4), (1, 4), (4, 9)],
        );
        let distinct = g.edges().unique().count();
        let degree_sum: usize = g.degree_map().values().sum();
        assert_eq!(degree_sum, 2 * distinct);
    }

    #[test]
    fn degree_sum_property() {
        degree_sum_is_twice_distinct_edges::<EdgeListGraph>();
        degree_sum_is_twice_distinct_edges::<AdjMapGraph>();
    }

    fn clean_copy_is_idempotent<G: GraphCore>() {
        // duplicate (1,2) on purpose
        let g = G::from_parts([1, 2, 3], [(1, 2), (2, 1), (2, 3)]);
        let once = G::clean_copy_of(&g);
        let twice = G::clean_copy_of(&once);

        assert_eq!(once.ordered_edges(), vec![Edge(1, 2), Edge(2, 3)]);
        assert_eq!(once.ordered_edges(), twice.ordered_edges());
        assert_eq!(once.ordered_vertices(), twice.ordered_vertices());
    }

    #[test]
    fn clean_copy_idempotence() {
        clean_copy_is_idempotent::<EdgeListGraph>();
        clean_copy_is_idempotent::<AdjMapGraph>();
    }

    fn add_remove_inverse_under_has_edge<G: GraphCore>() {
        let mut g = G::from_parts([0, 1], [(0, 1)]);

        assert!(g.try_add_edge(1, 7));
        assert!(g.has_edge(1, 7));
        assert!(g.has_edge(7, 1));
        assert!(g.has_vertex(7));

        assert!(g.try_remove_edge(7, 1));
        assert!(!g.has_edge(1, 7));
        assert!(!g.try_remove_edge(7, 1));
    }

    #[test]
    fn add_remove_edge_inverse() {
        add_remove_inverse_under_has_edge::<EdgeListGraph>();
        add_remove_inverse_under_has_edge::<AdjMapGraph>();
    }

    fn copy_keeps_duplicates<G: GraphCore>() {
        let g = EdgeListGraph::from_parts([1, 2], [(1, 2), (2, 1)]);
        assert_eq!(g.number_of_edges(), 2);

        let copy = G::copy_of(&g);
        assert_eq!(copy.number_of_edges(), 2);
        assert_eq!(copy.ordered_edges(), vec![Edge(1, 2), Edge(1, 2)]);

        let clean = G::clean_copy_of(&g);
        assert_eq!(clean.number_of_edges(), 1);
    }

    #[test]
    fn copy_and_clean_copy_multiplicity() {
        copy_keeps_duplicates::<EdgeListGraph>();
        copy_keeps_duplicates::<AdjMapGraph>();
    }

    fn cross_representation_round_trip<G: GraphCore, H: GraphCore>() {
        let g = G::from_parts([3, 1, 4, 1], [(3, 1), (4, 1)]);
        let h = H::copy_of(&g);
        let back = G::copy_of(&h);

        assert_eq!(g.ordered_vertices(), h.ordered_vertices());
        assert_eq!(g.ordered_edges(), h.ordered_edges());
        assert_eq!(g.ordered_vertices(), back.ordered_vertices());
        assert_eq!(g.ordered_edges(), back.ordered_edges());
    }

    #[test]
    fn representation_round_trips() {
        cross_representation_round_trip::<EdgeListGraph, AdjMapGraph>();
        cross_representation_round_trip::<AdjMapGraph, EdgeListGraph>();
    }
}
