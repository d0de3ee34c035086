//! # Graph Minor Operations
//!
//! Constructions that derive a new graph from existing ones: fusing two
//! graphs at a vertex and contracting an edge. Both are polymorphic in the
//! source representations and build the caller-chosen target representation.

use itertools::Itertools;

use crate::{ops::*, *};

/// Vertex fusion and edge contraction, usable with any conforming
/// representation.
pub trait GraphMinors: GraphConversion {
    /// Fuses vertex `v2` of `g2` onto vertex `v1` of `g1`.
    ///
    /// Every other vertex of `g2` is renumbered by adding an offset of
    /// `max(g1) + 1` so the two vertex sets cannot collide; the edges of `g2`
    /// are rewritten through the fusion/offset mapping and appended to the
    /// edges of `g1`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] if `v1` is not a vertex of `g1`
    /// or `v2` is not a vertex of `g2`.
    fn join_at_vertex<G1, G2>(g1: &G1, g2: &G2, v1: Vertex, v2: Vertex) -> Result<Self>
    where
        G1: EdgeView,
        G2: EdgeView,
    {
        if !g1.has_vertex(v1) {
            return Err(GraphError::UnknownVertex(v1));
        }
        if !g2.has_vertex(v2) {
            return Err(GraphError::UnknownVertex(v2));
        }

        // g1 contains v1, so it is non-empty and max() exists
        let offset = g1.vertices().max().unwrap() + 1;
        let relabel = move |u: Vertex| if u == v2 { v1 } else { u + offset };

        let vertices = g1
            .vertices()
            .chain(g2.vertices().filter(|&u| u != v2).map(|u| u + offset))
            .collect_vec();
        let edges = g1
            .edges()
            .chain(g2.edges().map(|Edge(u, v)| Edge(relabel(u), relabel(v))))
            .collect_vec();

        Ok(Self::from_parts(vertices, edges))
    }

    /// Contracts the edge `{a, b}` of `g`, producing the graph minor in which
    /// `b` is removed and every edge incident to `b` is rewired onto `a`. The
    /// contracted edge itself and any edge that would become a self-loop
    /// `{a, a}` are dropped.
    ///
    /// # Errors
    /// Returns [`GraphError::MissingEdge`] if `{a, b}` is not an edge of `g`.
    fn try_collapse_edge<G>(g: &G, a: Vertex, b: Vertex) -> Result<Self>
    where
        G: EdgeView,
    {
        if !g.has_edge(a, b) {
            return Err(GraphError::MissingEdge(Edge(a, b).normalized()));
        }

        let vertices = g.vertices().filter(|&u| u != b);
        let edges = g.edges().filter_map(|e| {
            if !e.is_incident_to(b) {
                return Some(e);
            }
            let other = if e.0 == b { e.1 } else { e.0 };
            // drops the contracted edge (other == a) and would-be loops
            (other != a).then_some(Edge(other, a))
        });

        Ok(Self::from_parts(vertices, edges))
    }

    /// Like [`GraphMinors::try_collapse_edge`], but a missing edge is a no-op:
    /// the result is an unchanged rebuild of `g` in the target representation.
    fn collapse_edge<G>(g: &G, a: Vertex, b: Vertex) -> Self
    where
        G: EdgeView,
    {
        Self::try_collapse_edge(g, a, b).unwrap_or_else(|_| Self::copy_of(g))
    }
}

impl<G: GraphFromParts> GraphMinors for G {}
