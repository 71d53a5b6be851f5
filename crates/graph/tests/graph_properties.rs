use dsa_graph::{Graph, GraphKind};
use dsa_util::Fuzzer;
use proptest::prelude::*;

/// Bellman-Ford relaxation as a reference for non-negative weights.
fn reference_distances(g: &Graph, s: usize) -> Vec<Option<i64>> {
    let n = g.size();
    let mut dist = vec![None; n + 1];
    dist[s] = Some(0);
    for _ in 1..n {
        for u in 1..=n {
            let Some(du) = dist[u] else { continue };
            for adj in g.neighbors(u).unwrap() {
                let candidate = du + adj.weight;
                if dist[adj.vertex].map_or(true, |d| candidate < d) {
                    dist[adj.vertex] = Some(candidate);
                }
            }
        }
    }
    dist.split_off(1)
}

fn arb_graph(kind: GraphKind) -> impl Strategy<Value = Graph> {
    (1usize..12).prop_flat_map(move |n| {
        prop::collection::vec((1..=n, 1..=n, 0i64..20), 0..40)
            .prop_map(move |edges| Graph::with_edges(kind, n, &edges).unwrap())
    })
}

proptest! {
    #[test]
    fn dijkstra_matches_reference(g in arb_graph(GraphKind::Directed), pick in any::<prop::sample::Index>()) {
        let s = pick.index(g.size()) + 1;
        let sp = g.pwsssp(s).unwrap();
        let expected = reference_distances(&g, s);
        prop_assert_eq!(sp.distances(), expected.as_slice());
    }

    #[test]
    fn predecessors_trace_back_to_source(g in arb_graph(GraphKind::Directed), pick in any::<prop::sample::Index>()) {
        let s = pick.index(g.size()) + 1;
        for sp in [g.uwsssp(s).unwrap(), g.pwsssp(s).unwrap()] {
            for t in 1..=g.size() {
                match sp.path_to(t).unwrap() {
                    Some(path) => {
                        prop_assert_eq!(path.first(), Some(&s));
                        prop_assert_eq!(path.last(), Some(&t));
                        for hop in path.windows(2) {
                            prop_assert!(g.weight(hop[0], hop[1]).unwrap().is_some());
                        }
                    }
                    None => prop_assert_eq!(sp.distance(t), None),
                }
            }
        }
    }

    #[test]
    fn edge_count_tracks_adjacency(g in arb_graph(GraphKind::Undirected)) {
        let entries: usize = (1..=g.size()).map(|v| g.neighbors(v).unwrap().len()).sum();
        prop_assert_eq!(g.edge_count(), entries);
    }
}

#[test]
fn bfs_matches_dijkstra_on_unit_weights() {
    let fuzzer = Fuzzer::new(Some([17u8; 32]));
    for _ in 0..50 {
        let n = fuzzer.random_int(2, 30) as usize;
        let extra = fuzzer.random_index(2 * n);
        let edges: Vec<_> = fuzzer
            .connected_edges(n, extra, 1)
            .into_iter()
            .map(|(u, v, _)| (u, v, 1))
            .collect();
        let g = Graph::with_edges(GraphKind::Undirected, n, &edges).unwrap();
        let s = fuzzer.random_index(n) + 1;
        let bfs = g.uwsssp(s).unwrap();
        let dijkstra = g.pwsssp(s).unwrap();
        assert_eq!(bfs.distances(), dijkstra.distances(), "seed {:?}", fuzzer.seed);
        assert!(bfs.distances().iter().all(Option::is_some));
    }
}

#[test]
fn prim_and_kruskal_agree_on_total_weight() {
    let fuzzer = Fuzzer::new(Some([42u8; 32]));
    for _ in 0..50 {
        let n = fuzzer.random_int(1, 40) as usize;
        let extra = fuzzer.random_index(3 * n);
        let edges = fuzzer.connected_edges(n, extra, 25);
        let g = Graph::with_edges(GraphKind::Undirected, n, &edges).unwrap();

        let prim = g.mst_prim().unwrap();
        let kruskal = g.mst_kruskal().unwrap();
        assert!(prim.is_spanning());
        assert!(kruskal.is_spanning());
        assert_eq!(prim.edges().len(), n - 1);
        assert_eq!(prim.total_weight(), kruskal.total_weight(), "seed {:?}", fuzzer.seed);
        for e in prim.edges().iter().chain(kruskal.edges()) {
            assert_eq!(g.weight(e.head, e.tail), Ok(Some(e.weight)));
        }
    }
}
