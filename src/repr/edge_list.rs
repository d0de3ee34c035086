use std::fmt::{Debug, Display};

use itertools::Itertools;

use crate::{ops::*, *};

/// A graph stored as an explicit vertex sequence plus an explicit sequence of
/// normalized edges.
///
/// Lookups (`has_vertex`, `has_edge`) are linear scans and degrees are
/// computed by counting incident edges, which makes this representation the
/// simpler but slower of the two. Duplicate edges introduced through
/// [`GraphFromParts::from_parts`] are kept verbatim.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EdgeListGraph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl GraphOrder for EdgeListGraph {
    fn number_of_vertices(&self) -> NumVertices {
        self.vertices.len()
    }

    fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().copied()
    }

    fn has_vertex(&self, v: Vertex) -> bool {
        self.vertices.contains(&v)
    }
}

impl EdgeView for EdgeListGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len()
    }

    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    fn has_edge(&self, a: Vertex, b: Vertex) -> bool {
        self.edges.contains(&Edge(a, b).normalized())
    }

    fn degree_of(&self, v: Vertex) -> Result<NumVertices> {
        if !self.has_vertex(v) {
            return Err(GraphError::UnknownVertex(v));
        }
        Ok(self.edges.iter().filter(|e| e.is_incident_to(v)).count())
    }
}

impl GraphEditing for EdgeListGraph {
    fn try_add_vertex(&mut self, v: Vertex) -> bool {
        if self.has_vertex(v) {
            return false;
        }
        self.vertices.push(v);
        true
    }

    fn try_remove_vertex(&mut self, v: Vertex) -> bool {
        let Some(pos) = self.vertices.iter().position(|&u| u == v) else {
            return false;
        };
        self.vertices.remove(pos);
        self.edges.retain(|e| !e.is_incident_to(v));
        true
    }

    fn try_add_edge(&mut self, a: Vertex, b: Vertex) -> bool {
        self.try_add_vertex(a);
        self.try_add_vertex(b);

        let edge = Edge(a, b).normalized();
        if edge.is_loop() || self.edges.contains(&edge) {
            return false;
        }

        self.edges.push(edge);
        true
    }

    fn try_remove_edge(&mut self, a: Vertex, b: Vertex) -> bool {
        let edge = Edge(a, b).normalized();
        let Some(pos) = self.edges.iter().position(|&e| e == edge) else {
            return false;
        };
        self.edges.remove(pos);
        true
    }
}

impl GraphFromParts for EdgeListGraph {
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
            graph.try_add_vertex(v);
        }
        for edge in edges {
            let edge = edge.into().normalized();
            if edge.is_loop() {
                continue;
            }
            graph.try_add_vertex(edge.0);
            graph.try_add_vertex(edge.1);
            // raw push: the constructor path keeps duplicate edges
            graph.edges.push(edge);
        }
        graph
    }
}

impl Display for EdgeListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vertices: [{}]\nEdges: [{}]",
            self.vertices.iter().join(", "),
            self.edges.iter().join(", ")
        )
    }
}

impl Debug for EdgeListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}
