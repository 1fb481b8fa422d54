#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmarks for frame regeneration and rasterization.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cartesian_plot::grid;
use cartesian_plot::prelude::*;

fn grid_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_generate");
    let theme = Theme::default();

    for side in [400.0, 1_920.0, 7_680.0] {
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            b.iter(|| grid::generate(black_box(Viewport::new(side, side)), &theme));
        });
    }

    group.finish();
}

fn surface_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_add_lines");

    for count in [10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut surface = PlotSurface::default();
                surface.on_viewport_ready(Viewport::new(800.0, 600.0));
                for i in 0..count {
                    let spec = LineSpec::new(f64::from(i) * 0.1, 1.0).expect("finite line");
                    surface.add_line(black_box(spec));
                }
                surface.state().len()
            });
        });
    }

    group.finish();
}

fn raster_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster_frame");

    for antialias in [false, true] {
        group.bench_with_input(
            BenchmarkId::from_parameter(if antialias { "aa" } else { "aliased" }),
            &antialias,
            |b, &antialias| {
                b.iter(|| {
                    let sink = RasterSink::new(1, 1, Rgba::WHITE)
                        .expect("framebuffer creation should succeed")
                        .antialias(antialias);
                    let mut surface = PlotSurface::new(sink);
                    surface.on_viewport_ready(Viewport::new(800.0, 600.0));
                    // Steep line exercises clipping
                    surface.add_line(LineSpec::new(1.0e6, 0.0).expect("finite line"));
                    surface.add_line(LineSpec::new(-0.5, 2.0).expect("finite line"));
                    surface.into_sink().into_framebuffer()
                });
            },
        );
    }

    group.finish();
}

fn png_benchmark(c: &mut Criterion) {
    let mut surface = PlotSurface::new(RasterSink::new(1, 1, Rgba::WHITE).expect("framebuffer"));
    surface.on_viewport_ready(Viewport::new(800.0, 600.0));
    surface.add_line(LineSpec::new(1.0, 0.0).expect("finite line"));
    let fb = surface.into_sink().into_framebuffer();

    c.bench_function("png_encode_800x600", |b| {
        b.iter(|| PngEncoder::to_bytes(black_box(&fb)).expect("encoding should succeed"));
    });
}

criterion_group!(
    benches,
    grid_benchmark,
    surface_benchmark,
    raster_benchmark,
    png_benchmark
);
criterion_main!(benches);
