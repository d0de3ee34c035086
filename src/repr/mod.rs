/*!
# Representations

Two interchangeable storage backends implement the shared contract from
[`crate::ops`]:

- [`EdgeListGraph`]: explicit vertex and edge sequences; linear scans.
- [`AdjMapGraph`]: vertex-to-neighbor-list map; edges derived on demand.

Both behave identically under every mutation and query of the contract, which
is enforced by the randomized equivalence tests in this module.
*/

mod adj_map;
mod edge_list;

pub use adj_map::AdjMapGraph;
pub use edge_list::EdgeListGraph;

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;

    use super::*;
    use crate::{algo::Connectivity, ops::*, Edge, Vertex};

    fn assert_equivalent(a: &EdgeListGraph, b: &AdjMapGraph) {
        assert_eq!(a.number_of_vertices(), b.number_of_vertices());
        assert_eq!(a.number_of_edges(), b.number_of_edges());
        assert_eq!(a.ordered_vertices(), b.ordered_vertices());
        assert_eq!(a.ordered_edges(), b.ordered_edges());
        assert_eq!(a.degree_map(), b.degree_map());
        assert_eq!(a.is_connected_relabel(), b.is_connected_relabel());
        assert_eq!(a.is_connected_union_find(), b.is_connected_union_find());
    }

    #[test]
    fn representations_agree_under_random_mutations() {
        let rng = &mut Pcg64::seed_from_u64(1234);

        for _ in 0..20 {
            let mut list = EdgeListGraph::new();
            let mut map = AdjMapGraph::new();

            for _ in 0..200 {
                let u: Vertex = rng.random_range(0..20);
                let v: Vertex = rng.random_range(0..20);

                match rng.random_range(0..5) {
                    0 => assert_eq!(list.try_add_vertex(u), map.try_add_vertex(u)),
                    1 => assert_eq!(list.try_remove_vertex(u), map.try_remove_vertex(u)),
                    2 | 3 => assert_eq!(list.try_add_edge(u, v), map.try_add_edge(u, v)),
                    _ => assert_eq!(list.try_remove_edge(u, v), map.try_remove_edge(u, v)),
                }

                assert_eq!(list.has_vertex(u), map.has_vertex(u));
                assert_eq!(list.has_edge(u, v), map.has_edge(u, v));
            }

            assert_equivalent(&list, &map);
        }
    }

    #[test]
    fn representations_agree_from_shared_parts() {
        let rng = &mut Pcg64::seed_from_u64(42);

        for _ in 0..20 {
            let vertices = (0..15).collect_vec();
            let edges = (0..30)
                .map(|_| {
                    let u: Vertex = rng.random_range(0..15);
                    let v: Vertex = rng.random_range(0..15);
                    Edge(u, v)
                })
                .collect_vec();

            let list = EdgeListGraph::from_parts(vertices.iter().copied(), edges.iter());
            let map = AdjMapGraph::from_parts(vertices.iter().copied(), edges.iter());

            assert_equivalent(&list, &map);
        }
    }
}
