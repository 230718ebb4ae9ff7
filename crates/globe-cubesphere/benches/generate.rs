use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use globe_cubesphere::{CubeSphere, ProjectionMethod, cube_to_sphere_everitt, generate};
use glam::DVec3;

fn bench_everitt_warp(c: &mut Criterion) {
    let p = black_box(DVec3::new(1.0, -0.37, 0.81));
    c.bench_function("cube_to_sphere_everitt", |bencher| {
        bencher.iter(|| black_box(cube_to_sphere_everitt(p)))
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for resolution in [50u32, 100, 500] {
        group.bench_with_input(
            BenchmarkId::from_parameter(resolution),
            &resolution,
            |bencher, &n| bencher.iter(|| black_box(generate(n))),
        );
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let sphere = CubeSphere::with_projection(100, ProjectionMethod::Everitt)
        .expect("resolution 100 is valid");
    c.bench_function("merge_100", |bencher| {
        bencher.iter(|| black_box(sphere.merge()))
    });
}

criterion_group!(benches, bench_everitt_warp, bench_generate, bench_merge);
criterion_main!(benches);
