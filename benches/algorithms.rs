//! 图算法基准测试

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphlab::graph::RandomGraphGenerator;
use graphlab::{new_graph, Bfs, Dfs, Dijkstra, Graph, GraphKind, Kruskal, RandomGraphConfig};

fn build(kind: GraphKind, n: usize) -> Box<dyn Graph> {
    let mut g = new_graph(kind, n);
    let mut generator = RandomGraphGenerator::new(RandomGraphConfig::with_seed(42))
        .expect("default config is valid");
    generator.populate(g.as_mut()).expect("vertices are in range");
    g
}

fn bench_algorithms(c: &mut Criterion) {
    for kind in [GraphKind::AdjList, GraphKind::Matrix] {
        let mut group = c.benchmark_group(format!("{:?}", kind));
        for n in [64usize, 512] {
            let g = build(kind, n);

            group.bench_with_input(BenchmarkId::new("bfs", n), &g, |b, g| {
                b.iter(|| Bfs::new(g.as_ref()).traverse_from(black_box(0)))
            });
            group.bench_with_input(BenchmarkId::new("dfs", n), &g, |b, g| {
                b.iter(|| Dfs::new(g.as_ref()).traverse_from(black_box(0)))
            });
            group.bench_with_input(BenchmarkId::new("dijkstra", n), &g, |b, g| {
                b.iter(|| Dijkstra::new(g.as_ref()).shortest_path(0, black_box(n - 1)))
            });
            group.bench_with_input(BenchmarkId::new("kruskal", n), &g, |b, g| {
                b.iter(|| Kruskal::new(g.as_ref()).spanning_tree())
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
