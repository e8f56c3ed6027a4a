//! Benchmarks for tether cooking.
//!
//! Run with: cargo bench -p cloth-tether
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p cloth-tether -- --save-baseline main
//! 2. After changes: cargo bench -p cloth-tether -- --baseline main

#![allow(missing_docs, clippy::cast_possible_truncation)]

use cloth_tether::{
    GeodesicTetherCooker, SimpleTetherCooker, TetherConfig, TopologyReport, cook_batch,
};
use cloth_types::ClothMeshDesc;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

// =============================================================================
// Test Mesh Generation
// =============================================================================

/// Square cloth pinned along its top row.
fn curtain(cells: u32) -> ClothMeshDesc {
    let stride = cells + 1;
    let top: Vec<u32> = (cells * stride..stride * stride).collect();
    ClothMeshDesc::grid(cells, cells, 0.01)
        .with_attached(&top)
        .unwrap_or_default()
}

/// Square cloth pinned at its four corners.
fn corner_pinned(cells: u32) -> ClothMeshDesc {
    let stride = cells + 1;
    let last = stride * stride - 1;
    ClothMeshDesc::grid(cells, cells, 0.01)
        .with_attached(&[0, cells, last - cells, last])
        .unwrap_or_default()
}

/// Square cloth pinned on a lattice of every third row and column.
fn lattice_pinned(cells: u32) -> ClothMeshDesc {
    let stride = cells + 1;
    let pins: Vec<u32> = (0..stride)
        .step_by(3)
        .flat_map(|r| (0..stride).step_by(3).map(move |c| r * stride + c))
        .collect();
    ClothMeshDesc::grid(cells, cells, 0.01)
        .with_attached(&pins)
        .unwrap_or_default()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("simple_cooker");
    for cells in [16u32, 64, 128] {
        let desc = curtain(cells);
        group.throughput(Throughput::Elements(desc.particle_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cells), &desc, |b, desc| {
            b.iter(|| SimpleTetherCooker::new(black_box(desc)));
        });
    }
    group.finish();
}

fn bench_geodesic(c: &mut Criterion) {
    let mut group = c.benchmark_group("geodesic_cooker");
    for cells in [16u32, 64, 128] {
        let desc = corner_pinned(cells);
        group.throughput(Throughput::Elements(desc.particle_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cells), &desc, |b, desc| {
            b.iter(|| GeodesicTetherCooker::new(black_box(desc)));
        });
    }
    group.finish();
}

fn bench_geodesic_many_islands(c: &mut Criterion) {
    let mut group = c.benchmark_group("geodesic_lattice_pins");
    for cells in [30u32, 60, 120] {
        let desc = lattice_pinned(cells);
        group.throughput(Throughput::Elements(desc.particle_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(cells), &desc, |b, desc| {
            b.iter(|| GeodesicTetherCooker::new(black_box(desc)));
        });
    }
    group.finish();
}

fn bench_topology(c: &mut Criterion) {
    let desc = curtain(128);
    c.bench_function("topology_report_128", |b| {
        b.iter(|| TopologyReport::build(black_box(&desc)));
    });
}

fn bench_batch(c: &mut Criterion) {
    let descs: Vec<ClothMeshDesc> = (0..16).map(|_| corner_pinned(48)).collect();
    let mut group = c.benchmark_group("batch_16x48");
    for parallel in [false, true] {
        let config = TetherConfig::default().with_parallel(parallel);
        group.bench_with_input(
            BenchmarkId::from_parameter(if parallel { "parallel" } else { "sequential" }),
            &config,
            |b, config| {
                b.iter(|| cook_batch(black_box(&descs), config));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_simple,
    bench_geodesic,
    bench_geodesic_many_islands,
    bench_topology,
    bench_batch
);
criterion_main!(benches);
