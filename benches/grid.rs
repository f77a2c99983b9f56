#[macro_use]
extern crate criterion;
extern crate fractalgen;
extern crate num;

use criterion::Criterion;
use fractalgen::kernel::escape_time;
use fractalgen::{FractalKind, GridRenderer, ViewParameters};
use num::Complex;

fn kernel_interior(c: &mut Criterion) {
    // A point inside the set burns the full iteration budget; this is
    // the worst case per pixel.
    let zero = Complex::new(0.0, 0.0);
    c.bench_function("kernel interior 1000", move |b| {
        b.iter(|| escape_time(zero, zero, 1000))
    });
}

fn kernel_boundary(c: &mut Criterion) {
    let zero = Complex::new(0.0, 0.0);
    let point = Complex::new(-0.75, 0.1);
    c.bench_function("kernel boundary 1000", move |b| {
        b.iter(|| escape_time(zero, point, 1000))
    });
}

fn small_grid(c: &mut Criterion) {
    let mut view = ViewParameters::mandelbrot_defaults();
    view.width = 160;
    view.height = 120;
    let renderer = GridRenderer::new(&view, FractalKind::Mandelbrot).unwrap();
    c.bench_function("mandelbrot 160x120 single", move |b| {
        b.iter(|| renderer.render_single())
    });
}

criterion_group!(benches, kernel_interior, kernel_boundary, small_grid);
criterion_main!(benches);
