use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use var_path::{NullPen, PathPoint, VarPath};

/// Builds a path of `num_contours` closed contours that alternate between
/// quadratic and cubic segments.
fn random_path(num_contours: usize, points_per_contour: usize) -> VarPath {
    let mut rng = rand::thread_rng();
    let mut path = VarPath::new();
    for _ in 0..num_contours {
        let mut points = Vec::with_capacity(points_per_contour);
        while points.len() + 3 <= points_per_contour {
            let mut pt = || (rng.gen_range(-1000.0..1000.0), rng.gen_range(-1000.0..1000.0));
            let (x, y) = pt();
            points.push(PathPoint::on_curve(x, y));
            if points.len() % 2 == 0 {
                let (x, y) = pt();
                points.push(PathPoint::off_curve_quad(x, y));
                let (x, y) = pt();
                points.push(PathPoint::off_curve_quad(x, y));
            } else {
                let (x, y) = pt();
                points.push(PathPoint::off_curve_cubic(x, y));
                let (x, y) = pt();
                points.push(PathPoint::off_curve_cubic(x, y));
            }
        }
        path.append_contour(points, true);
    }
    path
}

pub fn draw_benchmark(c: &mut Criterion) {
    for num_contours in [1, 10, 100] {
        let path = random_path(num_contours, 60);
        c.bench_with_input(
            BenchmarkId::new("draw", num_contours),
            &path,
            |b, path| b.iter(|| path.draw(&mut NullPen)),
        );
    }
}

pub fn interpolate_benchmark(c: &mut Criterion) {
    let a = random_path(20, 60);
    let b = a.mul_scalar(1.5);
    c.bench_function("interpolate", |bench| {
        bench.iter(|| a.interpolate(black_box(&b), black_box(0.25)))
    });
}

criterion_group!(benches, draw_benchmark, interpolate_benchmark);
criterion_main!(benches);
