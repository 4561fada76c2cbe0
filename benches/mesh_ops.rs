//! Benchmarks for surface generation and normal synthesis.

use criterion::{criterion_group, criterion_main, Criterion};
use parasurf::prelude::*;

fn create_torus_lattice(rings: usize, slices: usize) -> (Vec<Vertex>, Vec<Triangle>) {
    let lattice = Lattice::new(rings, slices);
    let (pstep, tstep) = Surface::Torus.steps(rings, slices);
    let vertices = sample_lattice(lattice, &Surface::Torus, pstep, tstep);
    (vertices, triangulate_lattice(lattice))
}

fn bench_generation(c: &mut Criterion) {
    c.bench_function("sample_triangulate_torus_128x64", |b| {
        let lattice = Lattice::new(128, 64);
        let (pstep, tstep) = Surface::Torus.steps(128, 64);
        b.iter(|| {
            let vertices = sample_lattice(lattice, &Surface::Torus, pstep, tstep);
            let triangles = triangulate_lattice(lattice);
            (vertices, triangles)
        });
    });
}

fn bench_normals(c: &mut Criterion) {
    let (vertices, triangles) = create_torus_lattice(64, 32);

    c.bench_function("normals_indexed_parallel", |b| {
        let options = NormalOptions::default();
        b.iter(|| {
            let mut v = vertices.clone();
            compute_vertex_normals(&mut v, &triangles, &options);
            v
        });
    });

    c.bench_function("normals_indexed_sequential", |b| {
        let options = NormalOptions::default().sequential();
        b.iter(|| {
            let mut v = vertices.clone();
            compute_vertex_normals(&mut v, &triangles, &options);
            v
        });
    });

    // Full scan is quadratic in the triangle count; keep the mesh small
    let (small_vertices, small_triangles) = create_torus_lattice(24, 12);
    c.bench_function("normals_scan_parallel_24x12", |b| {
        let options = NormalOptions::default().with_adjacency(false);
        b.iter(|| {
            let mut v = small_vertices.clone();
            compute_vertex_normals(&mut v, &small_triangles, &options);
            v
        });
    });

    c.bench_function("sphere_normals", |b| {
        b.iter(|| {
            let mut v = vertices.clone();
            compute_sphere_normals(&mut v);
            v
        });
    });
}

criterion_group!(benches, bench_generation, bench_normals);
criterion_main!(benches);
