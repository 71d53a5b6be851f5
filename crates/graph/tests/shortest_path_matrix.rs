use dsa_graph::{Graph, GraphError, GraphKind};

fn example() -> Graph {
    Graph::with_edges(
        GraphKind::Directed,
        4,
        &[(1, 2, 1), (2, 3, 2), (1, 3, 4), (3, 4, 1)],
    )
    .unwrap()
}

#[test]
fn bfs_example_matrix() {
    let sp = example().uwsssp(1).unwrap();
    assert_eq!(sp.distances(), &[Some(0), Some(1), Some(1), Some(2)]);
    assert_eq!(sp.predecessor(1), None);
    assert_eq!(sp.predecessor(2), Some(1));
    assert_eq!(sp.predecessor(3), Some(1));
    assert_eq!(sp.predecessor(4), Some(3));
    assert_eq!(sp.path_to(4), Ok(Some(vec![1, 3, 4])));
}

#[test]
fn bfs_example_undirected_distances() {
    let g = Graph::with_edges(
        GraphKind::Undirected,
        4,
        &[(1, 2, 1), (2, 3, 2), (1, 3, 4), (3, 4, 1)],
    )
    .unwrap();
    let sp = g.uwsssp(1).unwrap();
    assert_eq!(sp.distance(1), Some(0));
    assert_eq!(sp.distance(2), Some(1));
    assert_eq!(sp.distance(4), Some(2));
}

#[test]
fn dijkstra_example_matrix() {
    let sp = example().pwsssp(1).unwrap();
    assert_eq!(sp.distances(), &[Some(0), Some(1), Some(3), Some(4)]);
    assert_eq!(sp.path_to(4), Ok(Some(vec![1, 2, 3, 4])));
    assert_eq!(sp.format_path(4), Ok(Some("1 -> 2 -> 3 -> 4 (4)".to_string())));
    assert_eq!(sp.format_path(1), Ok(Some("1 (0)".to_string())));
}

#[test]
fn unreachable_vertices_stay_infinite() {
    let g = Graph::with_edges(GraphKind::Directed, 5, &[(1, 2, 1), (3, 1, 1), (4, 5, 1)]).unwrap();
    for sp in [g.uwsssp(1).unwrap(), g.pwsssp(1).unwrap()] {
        assert_eq!(sp.distance(2), Some(1));
        assert_eq!(sp.distance(3), None);
        assert_eq!(sp.distance(5), None);
        assert_eq!(sp.predecessor(5), None);
        assert_eq!(sp.path_to(5), Ok(None));
        assert_eq!(sp.format_path(3), Ok(None));
    }
}

#[test]
fn source_and_target_range_checks() {
    let g = example();
    assert_eq!(
        g.uwsssp(0).unwrap_err(),
        GraphError::VertexOutOfRange { vertex: 0, size: 4 }
    );
    assert_eq!(
        g.pwsssp(5).unwrap_err(),
        GraphError::VertexOutOfRange { vertex: 5, size: 4 }
    );
    let sp = g.pwsssp(2).unwrap();
    assert_eq!(sp.source(), 2);
    assert!(sp.path_to(7).is_err());
    assert_eq!(sp.distance(7), None);
}

#[test]
fn dijkstra_prefers_cheaper_longer_path() {
    let g = Graph::with_edges(
        GraphKind::Directed,
        6,
        &[
            (1, 2, 7),
            (1, 3, 9),
            (1, 6, 14),
            (2, 3, 10),
            (2, 4, 15),
            (3, 4, 11),
            (3, 6, 2),
            (4, 5, 6),
            (6, 5, 9),
        ],
    )
    .unwrap();
    let sp = g.pwsssp(1).unwrap();
    assert_eq!(
        sp.distances(),
        &[Some(0), Some(7), Some(9), Some(20), Some(20), Some(11)]
    );
    assert_eq!(sp.path_to(5), Ok(Some(vec![1, 3, 6, 5])));
}
