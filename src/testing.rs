/// Every graph representation should pass the same randomized edge-editing
/// checks against a bitset adjacency model.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, prelude::*};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of at most `m_ub` distinct random edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            #[test]
            fn graph_new() {
                for n in 0..50 {
                    let graph = <$graph>::new(n);

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert!(graph.is_singleton_graph());
                }
            }

            #[test]
            fn edge_editing_matches_model() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as NumNodes, 20, 50] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, n * 5);

                        let mut graph = <$graph>::new(n);
                        let mut model: Vec<NodeBitSet> =
                            vec![NodeBitSet::with_capacity(n as usize); n as usize];

                        for &Edge(u, v) in &edges {
                            assert!(graph.add_edge(u, v));
                            model[u as usize].insert(v as usize);
                        }

                        assert_eq!(graph.number_of_edges(), edges.len() as NumEdges);
                        assert_eq!(graph.ordered_edges().collect_vec(), edges);

                        for u in 0..n {
                            assert_eq!(
                                graph.degree_of(u),
                                model[u as usize].count_ones(..) as NumNodes
                            );
                            for v in 0..n {
                                assert_eq!(graph.has_edge(u, v), model[u as usize].contains(v as usize));
                            }
                        }

                        // removing everything empties the graph again
                        let mut m = graph.number_of_edges();
                        for &Edge(u, v) in &edges {
                            assert!(graph.remove_edge(u, v));
                            assert!(!graph.has_edge(u, v));
                            m -= 1;
                            assert_eq!(graph.number_of_edges(), m);
                        }
                        assert!(graph.is_singleton_graph());
                    }
                }
            }

            #[test]
            fn out_of_range_ids_are_no_ops() {
                let mut graph = <$graph>::new(3);

                assert!(!graph.add_edge(0, 3));
                assert!(!graph.add_edge(3, 0));
                assert!(!graph.remove_edge(3, 0));
                assert!(!graph.has_edge(0, 3));
                assert!(!graph.has_edge(3, 0));
                assert_eq!(graph.number_of_edges(), 0);
            }

            #[test]
            fn duplicate_edges_and_first_occurrence_removal() {
                let mut graph = <$graph>::new(4);
                graph.add_edges([(1, 2), (1, 3), (1, 2), (2, 2)]);

                assert_eq!(graph.degree_of(1), 3);
                assert!(graph.has_self_loop(2));
                assert_eq!(graph.neighbors_of(1).collect_vec(), vec![2, 3, 2]);

                assert!(graph.remove_edge(1, 2));
                assert_eq!(graph.neighbors_of(1).collect_vec(), vec![3, 2]);

                assert!(graph.remove_edge(1, 2));
                assert!(!graph.remove_edge(1, 2));
                assert_eq!(graph.number_of_edges(), 2);
            }

            #[test]
            fn transpose_is_an_involution() {
                let rng = &mut Pcg64Mcg::seed_from_u64(7);

                for n in [10 as NumNodes, 30] {
                    let edges = random_edges(rng, n, n * 4);
                    let graph = <$graph>::from_edges(n, edges.iter().copied());

                    let transposed = graph.transpose();
                    assert_eq!(transposed.number_of_nodes(), n);
                    assert_eq!(transposed.number_of_edges(), graph.number_of_edges());
                    for Edge(u, v) in graph.edges() {
                        assert!(transposed.has_edge(v, u));
                    }

                    let back = transposed.transpose();
                    assert_eq!(
                        back.ordered_edges().collect_vec(),
                        graph.ordered_edges().collect_vec()
                    );
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
