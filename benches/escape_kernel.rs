use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mandelglide::{Palette, PaletteMode, PixelBuffer, Viewport, escape_time, render};

fn bench_full_frame(c: &mut Criterion) {
    let viewport = Viewport::new(-2.0, 1.0, 1.0, -1.0).unwrap();
    let palette = Palette::new(PaletteMode::Gradient, 100);
    let mut buffer = PixelBuffer::new(640, 400).unwrap();

    c.bench_function("render_640x400_limit100", |b| {
        b.iter(|| render(black_box(&mut buffer), &viewport, &palette));
    });
}

fn bench_scalar_point(c: &mut Criterion) {
    // a slow interior point near the cardioid boundary
    c.bench_function("escape_time_boundary_limit2000", |b| {
        b.iter(|| escape_time(black_box(-0.75), black_box(0.01), 2000));
    });
}

criterion_group!(benches, bench_full_frame, bench_scalar_point);
criterion_main!(benches);
