use std::fmt::{Debug, Display};

use crate::Vertex;

/// An edge is defined by two vertices/endpoints.
/// All edges are undirected: `Edge(u, v)` and `Edge(v, u)` denote the same
/// edge and are normalized to `(min, max)` before storage or lookup.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Vertex, pub Vertex);

/// Edge counts are reported as `usize`
pub type NumEdges = usize;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller value comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns true if `v` is one of the two endpoints
    pub fn is_incident_to(&self, v: Vertex) -> bool {
        self.0 == v || self.1 == v
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from(value: (Vertex, Vertex)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Vertex, Vertex)> for Edge {
    fn from(value: &(Vertex, Vertex)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<(&Vertex, &Vertex)> for Edge {
    fn from(value: (&Vertex, &Vertex)) -> Self {
        Edge(*value.0, *value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}
