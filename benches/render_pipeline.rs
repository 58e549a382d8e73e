use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_viewer::{
    ColourModeKind, Complex, PALETTE_PRESETS, Resolution, ViewportState, render,
    render_frame_parallel_rayon, render_frame_serial, smooth_escape,
};

fn viewport(colour_mode: ColourModeKind) -> ViewportState {
    let palette = PALETTE_PRESETS[0]
        .load()
        .expect("bench palette preset is valid");

    ViewportState::new(
        Complex::new(-1.0079296875, 0.3112109375),
        1.953125e-3,
        200,
        colour_mode,
        palette,
    )
    .expect("bench viewport is valid")
}

fn bench_smooth_escape(c: &mut Criterion) {
    c.bench_function("smooth_escape/inside_set", |b| {
        b.iter(|| smooth_escape(black_box(Complex::new(-0.1, 0.1)), black_box(1000)))
    });
    c.bench_function("smooth_escape/escapes", |b| {
        b.iter(|| smooth_escape(black_box(Complex::new(-0.75, 0.1)), black_box(1000)))
    });
}

fn bench_serial_vs_parallel(c: &mut Criterion) {
    let resolution = Resolution::new(320, 240).expect("bench resolution is valid");
    let (algorithm, colour_map) = viewport(ColourModeKind::Smooth)
        .build_pipeline(resolution)
        .expect("bench pipeline is valid");

    let mut group = c.benchmark_group("render_frame_320x240");
    group.bench_function("serial", |b| {
        b.iter(|| render_frame_serial(&algorithm, colour_map.as_ref()))
    });
    group.bench_function("parallel_rayon", |b| {
        b.iter(|| render_frame_parallel_rayon(&algorithm, colour_map.as_ref()))
    });
    group.finish();
}

fn bench_colour_modes(c: &mut Criterion) {
    let resolution = Resolution::new(500, 500).expect("bench resolution is valid");

    let mut group = c.benchmark_group("render_500x500");
    group.sample_size(20);
    for &mode in ColourModeKind::ALL {
        let state = viewport(mode);
        group.bench_with_input(BenchmarkId::from_parameter(mode), &state, |b, state| {
            b.iter(|| render(state, resolution))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_smooth_escape,
    bench_serial_vs_parallel,
    bench_colour_modes
);
criterion_main!(benches);
