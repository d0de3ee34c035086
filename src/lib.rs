/*!
`dualgraphs` is a small in-memory graph library for graphs that are
- **undirected**: `Edge(u, v)` and `Edge(v, u)` are the same edge, normalized to `(min, max)`,
- **unweighted**: neither vertices nor edges carry weights,
- **labelled by arbitrary integers**: vertices are `i64` identifiers chosen by the caller.

# Dual Representation

The defining feature of the crate is that every operation is specified once,
as a set of traits in [`ops`], and implemented by two interchangeable storage
backends in [`repr`]:

- [`EdgeListGraph`](crate::repr::EdgeListGraph): a vertex sequence plus an explicit edge sequence,
- [`AdjMapGraph`](crate::repr::AdjMapGraph): a map from each vertex to its neighbor list.

Both behave identically under every mutation and query, including duplicate
edge handling and vertex removal cascades. Algorithms, factories, and IO are
all written against the contract, so anything that works on one representation
works on the other, and [`ops::GraphConversion`] rebuilds any graph in the
other representation.

# Design

Factories in [`gens`] (random, complete, path, cycle, vertex fusion, edge
contraction) and the connectivity checks in [`algo`] are blanket-implemented
traits: `EdgeListGraph::cycle(4)` or `graph.is_connected()` work without
further setup. The connectivity module deliberately carries two independent
strategies, a direct partition-merge and union-find with path compression,
which agree on every input and cross-check each other in the test suite.

Graphs are plain owned values: copies never alias mutable state, there is no
interior mutability and no threading concern.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes vertices, edges, errors, the operation contract, and both representations,
- [`algo`] includes analyses implemented on the graphs themselves, such as `graph.is_connected()`,
- [`gens`] includes deterministic and random graph factories as well as minor operations,
- [`io`] includes reading and writing of whitespace pair-list files,
- [`ops`] includes the contract traits if you want to write your own generic algorithms.

In most use-cases, `use dualgraphs::{prelude::*, gens::*, algo::*};` suffices
for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod ops;
pub mod repr;
pub mod vertex;

pub use edge::{Edge, NumEdges};
pub use error::{GraphError, Result};
pub use vertex::{NumVertices, Vertex};

/// `dualgraphs::prelude` includes definitions for vertices, edges and errors,
/// all graph operation traits as well as both implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, ops::*, repr::*, vertex::*};
}
