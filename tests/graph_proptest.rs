//! Randomised checks of the adjacency invariants and of the searches against
//! petgraph's reference implementations.

use flexgraph::Graph;
use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

const IDS: u8 = 6;

#[derive(Debug, Clone)]
enum Mutation {
    AddEdge(u8, u8, u32),
    SetEdge(u8, u8, Option<u32>),
    RemoveEdge(u8, u8),
    RemoveVertex(u8),
    AddVertex(u8),
}

fn mutation() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        4 => (0..IDS, 0..IDS, 1..10u32).prop_map(|(a, b, w)| Mutation::AddEdge(a, b, w)),
        3 => (0..IDS, 0..IDS, proptest::option::of(1..10u32))
            .prop_map(|(a, b, w)| Mutation::SetEdge(a, b, w)),
        2 => (0..IDS, 0..IDS).prop_map(|(a, b)| Mutation::RemoveEdge(a, b)),
        1 => (0..IDS).prop_map(Mutation::RemoveVertex),
        1 => (0..IDS).prop_map(Mutation::AddVertex),
    ]
}

fn apply(graph: &mut Graph<u8, ()>, op: &Mutation) {
    // Failures are legitimate outcomes here; the invariants must hold either way.
    match *op {
        Mutation::AddEdge(a, b, w) => {
            let _ = graph.add_weighted_edge(&a, &b, w);
        }
        Mutation::SetEdge(a, b, w) => {
            let _ = graph.set_edge(&a, &b, w);
        }
        Mutation::RemoveEdge(a, b) => {
            let _ = graph.remove_edge(&a, &b);
        }
        Mutation::RemoveVertex(a) => {
            graph.remove_vertex(&a);
        }
        Mutation::AddVertex(a) => {
            let _ = graph.add_vertex(a, ());
        }
    }
}

fn check_mirrored(graph: &Graph<u8, ()>) -> Result<(), TestCaseError> {
    for vertex in graph.vertices() {
        for (neighbor, edge) in vertex.edges() {
            prop_assert!(!edge.is_nullified(), "nullified record {:?} -> {:?}", vertex.id(), neighbor);
            if !graph.is_directed() {
                prop_assert_eq!(edge.to(), edge.from());
            }
            if neighbor == vertex.id() {
                prop_assert_eq!(edge.to(), edge.from());
                continue;
            }
            let other = graph.get_vertex(neighbor);
            prop_assert!(other.is_some(), "dangling record toward {:?}", neighbor);
            let back = other.and_then(|v| v.edges().get(vertex.id())).copied();
            prop_assert_eq!(back, Some(edge.mirrored()));
        }
    }
    Ok(())
}

fn populated(directed: bool) -> Graph<u8, ()> {
    let mut graph = Graph::new(directed);
    for id in 0..IDS {
        graph.add_vertex(id, ()).unwrap();
    }
    graph
}

/// Rebuilds the traversable directions of `graph` as a petgraph digraph.
fn to_petgraph(graph: &Graph<u8, ()>) -> (DiGraph<(), u32>, Vec<NodeIndex>) {
    let mut reference = DiGraph::new();
    let nodes: Vec<_> = (0..IDS).map(|_| reference.add_node(())).collect();
    for vertex in graph.vertices() {
        for (neighbor, edge) in vertex.edges() {
            if let Some(weight) = edge.to() {
                reference.add_edge(nodes[*vertex.id() as usize], nodes[*neighbor as usize], weight);
            }
        }
    }
    (reference, nodes)
}

proptest! {
    #[test]
    fn test_records_stay_mirrored(
        directed in any::<bool>(),
        ops in proptest::collection::vec(mutation(), 1..60),
    ) {
        let mut graph = populated(directed);
        for op in &ops {
            apply(&mut graph, op);
            check_mirrored(&graph)?;
        }
    }

    #[test]
    fn test_quickest_route_matches_dijkstra(
        directed in any::<bool>(),
        edges in proptest::collection::vec((0..IDS, 0..IDS, 0..20u32), 0..20),
    ) {
        let mut graph = populated(directed);
        for &(a, b, w) in &edges {
            graph.add_weighted_edge(&a, &b, w).unwrap();
        }
        let (reference, nodes) = to_petgraph(&graph);
        let distances = dijkstra(&reference, nodes[0], None, |e| *e.weight());

        for target in 0..IDS {
            let route = graph.quickest_route(&0, &target).unwrap();
            let expected = distances.get(&nodes[target as usize]).copied();
            prop_assert_eq!(route.as_ref().map(|r| *r.weight()), expected);
            if let Some(route) = route {
                let walked: u32 = route
                    .path()
                    .windows(2)
                    .map(|p| graph.get_edge(&p[0], &p[1]).unwrap().to().unwrap())
                    .sum();
                prop_assert_eq!(walked, *route.weight());
            }
        }
    }

    #[test]
    fn test_shortest_path_matches_unit_dijkstra(
        edges in proptest::collection::vec((0..IDS, 0..IDS), 0..20),
    ) {
        let mut graph = populated(true);
        for &(a, b) in &edges {
            graph.add_edge(&a, &b).unwrap();
        }
        let (reference, nodes) = to_petgraph(&graph);
        let hops = dijkstra(&reference, nodes[0], None, |_| 1usize);

        for target in 0..IDS {
            let path = graph.shortest_path(&0, &target).unwrap();
            let expected = hops.get(&nodes[target as usize]).copied();
            prop_assert_eq!(path.as_ref().map(|p| p.len() - 1), expected);
            prop_assert_eq!(graph.is_reachable(&0, &target).unwrap().is_some(), expected.is_some());
            prop_assert_eq!(graph.all_paths(&0, &target).unwrap().is_empty(), expected.is_none());
        }
    }
}
