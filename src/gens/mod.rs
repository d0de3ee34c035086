/*!
# Graph Factories

Representation-agnostic constructors. All factories are provided as blanket
traits over [`GraphFromParts`](crate::ops::GraphFromParts), so the caller picks
the target representation through the type:

```rust
use dualgraphs::{prelude::*, gens::*};

let p: EdgeListGraph = EdgeListGraph::path(3);
let c: AdjMapGraph = AdjMapGraph::cycle(4);
assert_eq!(p.number_of_edges(), 3);
assert_eq!(c.number_of_edges(), 4);
```

[`GraphGenerators`] builds graphs from scratch (random, complete, path, cycle);
[`GraphMinors`](minors::GraphMinors) derives new graphs from existing ones
(vertex fusion and edge collapse).
*/

pub mod minors;

use itertools::Itertools;
use rand::{seq::index, Rng};

use crate::{ops::*, *};

pub use minors::GraphMinors;

/// Deterministic and random from-scratch constructors, usable with any
/// conforming representation.
pub trait GraphGenerators: GraphFromParts {
    /// Creates a graph with vertices `0..vertex_count` and `edge_count` edges,
    /// each sampled as two distinct random vertices. Duplicate edges are not
    /// filtered, so the number of *distinct* edges may be smaller than
    /// `edge_count`; use [`GraphConversion::clean_copy_of`] to deduplicate.
    ///
    /// # Panics
    /// If `edge_count > 0` and `vertex_count < 2`, since no loop-free edge can
    /// be sampled then.
    fn random<R: Rng>(rng: &mut R, vertex_count: NumVertices, edge_count: NumEdges) -> Self {
        assert!(
            edge_count == 0 || vertex_count >= 2,
            "Sampling edges requires at least two vertices!"
        );

        let edges = (0..edge_count)
            .map(|_| {
                let pair = index::sample(rng, vertex_count, 2);
                Edge(pair.index(0) as Vertex, pair.index(1) as Vertex)
            })
            .collect_vec();

        Self::from_parts(0..vertex_count as Vertex, edges)
    }

    /// Creates a complete graph on vertices `0..size` with all
    /// `size * (size - 1) / 2` edges
    fn complete(size: NumVertices) -> Self {
        let size = size as Vertex;
        Self::from_parts(0..size, (0..size).tuple_combinations::<(Vertex, Vertex)>().map(Edge::from))
    }

    /// Creates a path with `length` edges on the vertices `0..=length`
    fn path(length: NumEdges) -> Self {
        let length = length as Vertex;
        Self::from_parts(0..=length, (0..=length).tuple_windows::<(Vertex, Vertex)>().map(Edge::from))
    }

    /// Creates a cycle with `length` edges on the vertices `0..length`.
    ///
    /// Degenerate cases are defined explicitly: `cycle(0)` is the empty graph,
    /// `cycle(1)` is a single vertex without a self-loop and `cycle(2)` is a
    /// single edge rather than a duplicated closing edge.
    fn cycle(length: NumEdges) -> Self {
        match length {
            0 => Self::new(),
            1 => Self::from_parts([0], std::iter::empty::<Edge>()),
            2 => Self::from_parts([0, 1], [Edge(0, 1)]),
            _ => {
                let length = length as Vertex;
                Self::from_parts(
                    0..length,
                    (0..length)
                        .tuple_windows::<(Vertex, Vertex)>()
                        .map(Edge::from)
                        .chain(std::iter::once(Edge(0, length - 1))),
                )
            }
        }
    }
}

impl<G: GraphFromParts> GraphGenerators for G {}
