use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{ops::*, *};

/// Connectivity checks over any conforming representation.
///
/// Two independent strategies are provided; they agree on every input. A
/// graph without vertices is not connected (it has zero components, not one),
/// a single isolated vertex is.
///
/// Both strategies keep their vertex-to-component state in a local map that
/// is threaded through the scan, so the graph itself is only read.
pub trait Connectivity: GraphOrder + EdgeView {
    /// Checks connectivity by direct partition merging.
    ///
    /// Every vertex starts in its own labelled bucket. Full scans over the
    /// edge list relabel the second endpoint's bucket to the first's whenever
    /// they differ, until a whole scan is free of relabelings. Connected iff
    /// exactly one distinct label remains.
    ///
    /// A single scan can cascade many merges transitively, but the worst case
    /// needs up to `O(|V|)` scans of `O(|E| + |V|)` each. Prefer
    /// [`Connectivity::is_connected`] outside of cross-checks.
    fn is_connected_relabel(&self) -> bool {
        let mut buckets: FxHashMap<Vertex, Vertex> = self.vertices().map(|v| (v, v)).collect();

        let mut changed = true;
        while changed {
            changed = false;
            for Edge(u, v) in self.edges() {
                let label_u = buckets[&u];
                let label_v = buckets[&v];
                if label_u == label_v {
                    continue;
                }

                changed = true;
                for label in buckets.values_mut() {
                    if *label == label_v {
                        *label = label_u;
                    }
                }
            }
        }

        buckets.values().unique().count() == 1
    }

    /// Checks connectivity with union-find and path compression.
    ///
    /// Every vertex starts as its own root. One scan over the edges unions
    /// the endpoint sets, decrementing a running component counter on every
    /// merge. Connected iff the counter reaches one. Runs in near-linear
    /// amortized time without union-by-rank.
    fn is_connected_union_find(&self) -> bool {
        let mut parent: FxHashMap<Vertex, Vertex> = self.vertices().map(|v| (v, v)).collect();
        let mut components = parent.len();

        for Edge(u, v) in self.edges() {
            let root_u = find(&mut parent, u);
            let root_v = find(&mut parent, v);
            if root_u != root_v {
                parent.insert(root_v, root_u);
                components -= 1;
            }
        }

        components == 1
    }

    /// Checks connectivity; alias for [`Connectivity::is_connected_union_find`]
    fn is_connected(&self) -> bool {
        self.is_connected_union_find()
    }
}

impl<G: GraphOrder + EdgeView> Connectivity for G {}

/// Root lookup with two-pass path compression.
///
/// Iterative on purpose: a recursive find would recurse once per chain link
/// and long paths (e.g. graphs built edge by edge in sorted order) overflow
/// the stack before compression ever kicks in.
fn find(parent: &mut FxHashMap<Vertex, Vertex>, v: Vertex) -> Vertex {
    let mut root = v;
    while parent[&root] != root {
        root = parent[&root];
    }

    let mut current = v;
    while current != root {
        let next = parent[&current];
        parent.insert(current, root);
        current = next;
    }

    root
}
