use keyed_sssp::graph::generators::reference_graph;
use keyed_sssp::graph::{Graph, LabelledGraph};
use keyed_sssp::{solve, Dijkstra, Distance, DistanceTable, HeapDijkstra, ShortestPathAlgorithm};

// Checks every expected entry and that the table holds nothing else
fn assert_table(table: &DistanceTable<&'static str, u32>, expected: &[(&'static str, Option<u32>)]) {
    assert_eq!(table.len(), expected.len(), "unexpected table size: {:?}", table);
    for (node, distance) in expected {
        assert_eq!(
            table.get(node),
            Some(Distance::from(*distance)),
            "wrong distance for {}",
            node
        );
    }
}

fn both_solvers(
    graph: &LabelledGraph<&'static str, u32>,
    start: &'static str,
) -> [DistanceTable<&'static str, u32>; 2] {
    [
        Dijkstra::new().compute_distances(graph, &start),
        HeapDijkstra::new().compute_distances(graph, &start),
    ]
}

#[test]
fn test_reference_graph_from_a() {
    let graph = reference_graph();
    for table in both_solvers(&graph, "A") {
        // A -> C -> D = 5 beats A -> B -> D = 14
        assert_table(&table, &[("A", Some(0)), ("B", Some(4)), ("C", Some(2)), ("D", Some(5))]);
    }
}

#[test]
fn test_reference_graph_from_d() {
    let graph = reference_graph();
    for table in both_solvers(&graph, "D") {
        // D -> C -> A = 5, and D -> C -> B = 8 beats the direct edge of 10
        assert_table(&table, &[("A", Some(5)), ("B", Some(8)), ("C", Some(3)), ("D", Some(0))]);
    }
}

#[test]
fn test_solve_uses_linear_scan_and_keeps_key_order() {
    let graph = reference_graph();
    let table = solve(&graph, &"B");

    let keys: Vec<_> = table.iter().map(|(node, _)| *node).collect();
    assert_eq!(keys, vec!["A", "B", "C", "D"]);
    assert_eq!(*table.start(), "B");
    assert_eq!(table[&"B"], Distance::Finite(0));
    assert_eq!(table, Dijkstra::new().compute_distances(&graph, &"B"));
}

#[test]
fn test_single_node_without_edges() {
    let graph: LabelledGraph<&str, u32> = LabelledGraph::from_iter([("A", vec![])]);
    for table in both_solvers(&graph, "A") {
        assert_table(&table, &[("A", Some(0))]);
    }
}

#[test]
fn test_start_without_outgoing_edges() {
    // B -> A exists, but A cannot reach B
    let graph = LabelledGraph::from_iter([("A", vec![]), ("B", vec![("A", 1)])]);
    for table in both_solvers(&graph, "A") {
        assert_table(&table, &[("A", Some(0)), ("B", None)]);
        assert_eq!(table.reachable_count(), 1);
        assert!(!table.is_reachable(&"B"));
    }
}

#[test]
fn test_asymmetric_edges() {
    let graph = LabelledGraph::from_iter([("S", vec![("A", 7)]), ("A", vec![])]);

    let from_s = solve(&graph, &"S");
    assert_eq!(from_s.distance_to(&"A"), Some(7));

    let from_a = solve(&graph, &"A");
    assert_eq!(from_a.get(&"S"), Some(Distance::Infinite));
}

#[test]
fn test_start_absent_from_graph() {
    let graph = LabelledGraph::from_iter([("A", vec![("B", 1)]), ("B", vec![])]);
    for table in both_solvers(&graph, "Z") {
        assert_table(&table, &[("A", None), ("B", None), ("Z", Some(0))]);
        // The start is appended after the graph's own nodes
        let keys: Vec<_> = table.iter().map(|(node, _)| *node).collect();
        assert_eq!(keys, vec!["A", "B", "Z"]);
    }
}

#[test]
fn test_edge_targets_outside_the_graph_are_skipped() {
    // X is only ever an edge target, so it gets no distance
    let mut graph = LabelledGraph::from_iter([
        ("A", vec![("X", 1), ("B", 2)]),
        ("B", vec![]),
        ("C", vec![]),
    ]);
    assert!(!graph.contains_node(&"X"));

    for table in both_solvers(&graph, "A") {
        assert_table(&table, &[("A", Some(0)), ("B", Some(2)), ("C", None)]);
        assert_eq!(table.get(&"X"), None);
    }

    // Once X has edges of its own it is a node and routes to C
    graph.add_edge("X", "C", 1);
    assert!(graph.contains_node(&"X"));

    for table in both_solvers(&graph, "A") {
        assert_table(&table, &[("A", Some(0)), ("B", Some(2)), ("C", Some(2)), ("X", Some(1))]);
    }
}

#[test]
fn test_zero_weight_edges() {
    let graph = LabelledGraph::from_iter([
        ("A", vec![("B", 0)]),
        ("B", vec![("C", 0), ("D", 3)]),
        ("C", vec![("D", 1)]),
        ("D", vec![]),
    ]);
    for table in both_solvers(&graph, "A") {
        assert_table(&table, &[("A", Some(0)), ("B", Some(0)), ("C", Some(0)), ("D", Some(1))]);
    }
}

#[test]
fn test_ties_do_not_change_distances() {
    // B and C tie at 1; either may be settled first
    let graph = LabelledGraph::from_iter([
        ("A", vec![("B", 1), ("C", 1)]),
        ("B", vec![("D", 2)]),
        ("C", vec![("D", 1)]),
        ("D", vec![]),
    ]);
    for table in both_solvers(&graph, "A") {
        assert_table(&table, &[("A", Some(0)), ("B", Some(1)), ("C", Some(1)), ("D", Some(2))]);
    }
}

#[test]
fn test_longer_path_with_fewer_weight_wins() {
    let graph = LabelledGraph::from_iter([
        ("A", vec![("E", 100), ("B", 1)]),
        ("B", vec![("C", 1)]),
        ("C", vec![("D", 1)]),
        ("D", vec![("E", 1)]),
        ("E", vec![]),
    ]);
    for table in both_solvers(&graph, "A") {
        assert_eq!(table.distance_to(&"E"), Some(4));
    }
}

#[test]
fn test_repeated_calls_are_identical_and_leave_graph_untouched() {
    let graph = reference_graph();
    let before = serde_json::to_string(&graph).unwrap();

    let first = solve(&graph, &"C");
    let second = solve(&graph, &"C");

    assert_eq!(first, second);
    assert_eq!(serde_json::to_string(&graph).unwrap(), before);
    assert_eq!(graph.edge_count(), 10);
}

#[test]
fn test_floating_weights_with_linear_solver() {
    let graph: LabelledGraph<&str, f64> = LabelledGraph::from_iter([
        ("home", vec![("park", 1.5), ("work", 4.0)]),
        ("park", vec![("work", 2.0)]),
        ("work", vec![]),
    ]);
    let table = solve(&graph, &"home");

    assert_eq!(table.distance_to(&"park"), Some(1.5));
    assert_eq!(table.distance_to(&"work"), Some(3.5));
}

#[test]
fn test_solver_names() {
    type G = LabelledGraph<&'static str, u32>;
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<&str, u32, G>>::name(&Dijkstra::new()),
        "Dijkstra"
    );
    assert_eq!(
        <HeapDijkstra as ShortestPathAlgorithm<&str, u32, G>>::name(&HeapDijkstra::new()),
        "HeapDijkstra"
    );
}

#[test]
fn test_overflowing_path_sums_count_as_unreachable() {
    // A -> B -> D sums past u32::MAX; D has no other way in
    let graph = LabelledGraph::from_iter([
        ("A", vec![("B", u32::MAX)]),
        ("B", vec![("D", 1)]),
        ("D", vec![]),
    ]);
    for table in both_solvers(&graph, "A") {
        assert_table(&table, &[("A", Some(0)), ("B", Some(u32::MAX)), ("D", None)]);
    }
}

#[test]
fn test_overflow_on_one_route_keeps_the_other() {
    let graph = LabelledGraph::from_iter([
        ("A", vec![("B", u32::MAX - 1), ("C", 5)]),
        ("B", vec![("D", 2)]),
        ("C", vec![("D", 7)]),
        ("D", vec![]),
    ]);
    for table in both_solvers(&graph, "A") {
        assert_table(
            &table,
            &[("A", Some(0)), ("B", Some(u32::MAX - 1)), ("C", Some(5)), ("D", Some(12))],
        );
    }
}

#[test]
fn test_float_sums_beyond_max_count_as_unreachable() {
    let graph: LabelledGraph<&str, f64> = LabelledGraph::from_iter([
        ("A", vec![("B", f64::MAX)]),
        ("B", vec![("C", f64::MAX)]),
        ("C", vec![]),
    ]);
    let table = solve(&graph, &"A");

    assert_eq!(table.distance_to(&"B"), Some(f64::MAX));
    assert_eq!(table.get(&"C"), Some(Distance::Infinite));
}
