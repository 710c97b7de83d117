use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array2;

use _geocentric::batch;
use _geocentric::{CartesianPoint, Geocentric, GeodeticPoint, LocalCartesian, WGS84};

fn make_geodetic(n: usize) -> Array2<f64> {
    let mut coords = Array2::zeros((n, 3));
    for i in 0..n {
        let t = i as f64 / n as f64;
        coords[(i, 0)] = -90.0 + 180.0 * t;
        coords[(i, 1)] = -180.0 + 360.0 * ((t * 7.0) % 1.0);
        coords[(i, 2)] = -500.0 + 10_000.0 * ((t * 13.0) % 1.0);
    }
    coords
}

fn bench_single_point(c: &mut Criterion) {
    let geo = GeodeticPoint::new(51.4779, -0.0015, 46.0);
    let ecef = WGS84.to_cartesian(geo);

    c.bench_function("to_cartesian", |b| {
        b.iter(|| black_box(WGS84.to_cartesian(black_box(geo))))
    });
    c.bench_function("to_geodetic", |b| {
        b.iter(|| black_box(WGS84.to_geodetic(black_box(ecef))))
    });
    c.bench_function("to_geodetic_with_matrix", |b| {
        b.iter(|| black_box(WGS84.to_geodetic_with_matrix(black_box(ecef))))
    });
}

fn bench_reverse_branches(c: &mut Criterion) {
    let sphere = Geocentric::new(6_371_000.0, 0.0).unwrap();
    let prolate = Geocentric::new(6_378_137.0, -1.0 / 150.0).unwrap();
    let cases = [
        ("wgs84_surface", WGS84, CartesianPoint::new(4e6, 3e6, 3.5e6)),
        ("wgs84_axis_limit", WGS84, CartesianPoint::new(1000.0, 0.0, 0.0)),
        ("wgs84_point_mass", WGS84, CartesianPoint::new(1e24, 1e24, 1e24)),
        ("sphere", sphere, CartesianPoint::new(4e6, 3e6, 3.5e6)),
        ("prolate", prolate, CartesianPoint::new(4e6, 3e6, 3.5e6)),
    ];
    for (name, frame, p) in cases {
        c.bench_function(&format!("to_geodetic_{name}"), |b| {
            b.iter(|| black_box(frame.to_geodetic(black_box(p))))
        });
    }
}

fn bench_batch(c: &mut Criterion) {
    let sizes = [1_000, 100_000];
    for &n in &sizes {
        let geo = make_geodetic(n);
        let ecef = batch::forward_array(&WGS84, &geo.view()).unwrap();

        c.bench_function(&format!("forward_array_{n}"), |b| {
            b.iter(|| black_box(batch::forward_array(&WGS84, &geo.view()).unwrap()))
        });
        c.bench_function(&format!("reverse_array_{n}"), |b| {
            b.iter(|| black_box(batch::reverse_array(&WGS84, &ecef.view()).unwrap()))
        });
    }
}

fn bench_local(c: &mut Criterion) {
    let lc = LocalCartesian::new(WGS84, GeodeticPoint::new(48.8566, 2.3522, 35.0));
    let geo = make_geodetic(10_000);

    c.bench_function("local_forward_array_10000", |b| {
        b.iter(|| black_box(batch::forward_array(&lc, &geo.view()).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_single_point,
    bench_reverse_branches,
    bench_batch,
    bench_local
);
criterion_main!(benches);
