//! Criterion microbenches for the point-location pipeline (group "chain").
//!
//! - End-to-end `locate` on a staircase PSLG of growing size.
//! - Regularization and weight balancing in isolation, since they're the
//!   two sweeps doing the bulk of the work between orientation and chain
//!   extraction.

use chain_method::geom::Point;
use chain_method::graph::{OrientedPlanarStraightLineGraph, PlanarStraightLineGraph, PslgEdge};
use chain_method::pipeline::locate;
use chain_method::regularize::regularize;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};

/// A staircase PSLG: a backbone path from `(0, 0)` to `(n, n)` plus one
/// chord skipping every other node, deterministic and free of the
/// isolated-node edge case `regularize` doesn't handle.
fn staircase_pslg(n: usize) -> PlanarStraightLineGraph {
    let points: Vec<Point> = (0..=n).map(|i| Point::new(vec![i as f64, i as f64])).collect();
    let mut pslg = PlanarStraightLineGraph::new();
    for i in 0..n {
        pslg.add_edge(PslgEdge::new(points[i].clone(), points[i + 1].clone()));
    }
    for i in (0..n.saturating_sub(1)).step_by(2) {
        pslg.add_edge(PslgEdge::new(points[i].clone(), points[i + 2].clone()));
    }
    pslg
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");
    for &n in &[16usize, 64, 256] {
        let pslg = staircase_pslg(n);
        let query = Point::new(vec![n as f64 / 2.0, n as f64 / 2.0 + 0.25]);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("locate_n{n}"), |b| {
            b.iter_batched(
                || pslg.clone(),
                |graph| locate(graph, query.clone()).collect::<Result<Vec<_>, _>>().expect("pipeline succeeds"),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_regularize(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");
    let pslg = staircase_pslg(256);
    group.throughput(Throughput::Elements(256));
    group.bench_function("regularize_n256", |b| {
        b.iter_batched(
            || OrientedPlanarStraightLineGraph::from_planar_straight_line_graph(&pslg),
            |mut oriented| regularize(&mut oriented),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn chain_benches(c: &mut Criterion) {
    bench_locate(c);
    bench_regularize(c);
}

criterion_group!(benches, chain_benches);
criterion_main!(benches);
