use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flexgraph::Graph;
use petgraph::algo::dijkstra;
use petgraph::graph::DiGraph;

const SIZE: u32 = 32;

/// A `SIZE x SIZE` grid with right and down edges; weights vary by position.
fn grid() -> Graph<u32, ()> {
    let mut graph = Graph::with_capacity(true, (SIZE * SIZE) as usize);
    for id in 0..SIZE * SIZE {
        graph.add_vertex(id, ()).unwrap();
    }
    for row in 0..SIZE {
        for col in 0..SIZE {
            let id = row * SIZE + col;
            if col + 1 < SIZE {
                graph.add_weighted_edge(&id, &(id + 1), 1 + (id % 7)).unwrap();
            }
            if row + 1 < SIZE {
                graph.add_weighted_edge(&id, &(id + SIZE), 1 + (id % 5)).unwrap();
            }
        }
    }
    graph
}

fn petgraph_grid() -> DiGraph<(), u32> {
    let mut graph = DiGraph::with_capacity((SIZE * SIZE) as usize, (2 * SIZE * SIZE) as usize);
    let nodes: Vec<_> = (0..SIZE * SIZE).map(|_| graph.add_node(())).collect();
    for row in 0..SIZE {
        for col in 0..SIZE {
            let id = row * SIZE + col;
            if col + 1 < SIZE {
                graph.add_edge(nodes[id as usize], nodes[(id + 1) as usize], 1 + (id % 7));
            }
            if row + 1 < SIZE {
                graph.add_edge(nodes[id as usize], nodes[(id + SIZE) as usize], 1 + (id % 5));
            }
        }
    }
    graph
}

fn bench_pathfinding(c: &mut Criterion) {
    let graph = grid();
    let reference = petgraph_grid();
    let target = SIZE * SIZE - 1;

    let mut group = c.benchmark_group("pathfinding");

    group.bench_function("is_reachable", |b| {
        b.iter(|| black_box(graph.is_reachable(&0, &target).unwrap()));
    });

    group.bench_function("shortest_path", |b| {
        b.iter(|| black_box(graph.shortest_path(&0, &target).unwrap()));
    });

    group.bench_function("quickest_path", |b| {
        b.iter(|| black_box(graph.quickest_path(&0, &target).unwrap()));
    });

    group.bench_function("petgraph_dijkstra", |b| {
        b.iter(|| black_box(dijkstra(&reference, 0.into(), Some(target.into()), |e| *e.weight())));
    });

    group.finish();
}

fn bench_mutation(c: &mut Criterion) {
    c.bench_function("grid_build_and_teardown", |b| {
        b.iter(|| {
            let mut graph = grid();
            for id in 0..SIZE * SIZE {
                black_box(graph.remove_vertex(&id));
            }
        });
    });
}

criterion_group!(benches, bench_pathfinding, bench_mutation);
criterion_main!(benches);
