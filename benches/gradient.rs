//! Benchmarks for gradient stroke generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use strokegradient::io::{parse_svg_path, svg_path_to_polylines};
use strokegradient::{path_gradient, sample_path, stroke_samples, GradientOptions, Point2, Polyline};

/// Generates a sine wave polyline.
fn generate_sine_wave(num_points: usize) -> Polyline<f64> {
    Polyline::new(
        (0..num_points)
            .map(|i| {
                let t = i as f64 / num_points as f64 * 4.0 * std::f64::consts::PI;
                Point2::new(t * 10.0, t.sin() * 20.0)
            })
            .collect(),
    )
}

fn bench_stroke_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("stroke_samples");
    let path = generate_sine_wave(500);

    for resolution in [2.0, 1.0, 0.25, 0.05] {
        let samples = sample_path(&path, resolution).unwrap();
        let options = GradientOptions::with_width(4.0).resolution(resolution);
        group.throughput(Throughput::Elements(samples.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("sine_wave", resolution),
            &samples,
            |b, samples| b.iter(|| stroke_samples(black_box(samples), black_box(&options))),
        );
    }

    group.finish();
}

fn bench_path_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_gradient");
    let path = generate_sine_wave(500);

    for resolution in [1.0, 0.1] {
        let options = GradientOptions::with_width(4.0)
            .resolution(resolution)
            .use_stroke(true);

        group.bench_with_input(BenchmarkId::new("sine_wave", resolution), &path, |b, path| {
            b.iter(|| path_gradient(black_box(path), |t| (t * 255.0) as u8, black_box(&options)))
        });
    }

    group.finish();
}

fn bench_svg_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("svg_flatten");
    let d = "M 0 0 C 20 80 80 80 100 0 S 180 -80 200 0 Q 250 60 300 0 T 400 0 Z";
    let path = parse_svg_path::<f64>(d).unwrap();

    for tolerance in [1.0, 0.1, 0.01] {
        group.bench_with_input(BenchmarkId::new("mixed", tolerance), &path, |b, path| {
            b.iter(|| svg_path_to_polylines(black_box(path), black_box(tolerance)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_stroke_samples,
    bench_path_gradient,
    bench_svg_flatten
);
criterion_main!(benches);
