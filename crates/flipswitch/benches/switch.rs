//! Benchmark tests for switch operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flipswitch::{
    compute_layout, ColorPalette, RefreshCause, Switch, SwitchConfig, SwitchVisuals,
    TransitionPlanner,
};
use flipswitch_core::{CubicBezier, Point, RecordingCanvas, Size};

fn bench_cubic_bezier(c: &mut Criterion) {
    let curve = SwitchConfig::COMMIT_EASING;
    c.bench_function("cubic_bezier_apply", |b| {
        b.iter(|| curve.apply(black_box(0.37)))
    });

    let steep = CubicBezier::new(0.9, 0.0, 0.1, 1.0);
    c.bench_function("cubic_bezier_apply_steep", |b| {
        b.iter(|| steep.apply(black_box(0.5)))
    });
}

fn bench_compute_layout(c: &mut Criterion) {
    let config = SwitchConfig::default();
    let bounds = Size::new(42.0, 30.0);

    c.bench_function("compute_layout", |b| {
        b.iter(|| compute_layout(black_box(bounds), true, true, &config))
    });
}

fn bench_plan_batch(c: &mut Criterion) {
    let config = SwitchConfig::default();
    let planner = TransitionPlanner::from_config(&config);
    let palette = ColorPalette::from_config(&config);
    let geometry = compute_layout(Size::new(42.0, 30.0), false, true, &config);
    let colors = palette.resolve(true, config.default_tint);
    let visuals = SwitchVisuals::default();

    c.bench_function("transition_plan", |b| {
        b.iter(|| planner.plan(black_box(&visuals), &geometry, colors, RefreshCause::Commit))
    });
}

fn bench_drag_gesture(c: &mut Criterion) {
    c.bench_function("switch_drag_gesture", |b| {
        b.iter(|| {
            let mut switch = Switch::new();
            switch.pointer_down(Point::new(6.0, 15.0));
            for x in [10.0, 20.0, 30.0, 12.0, 34.0] {
                switch.pointer_move(black_box(Point::new(x, 15.0)));
            }
            switch.pointer_up(Point::new(34.0, 15.0))
        })
    });
}

fn bench_animation_frames(c: &mut Criterion) {
    c.bench_function("switch_animate_to_rest", |b| {
        b.iter(|| {
            let mut switch = Switch::new();
            switch.set_checked(true);
            while switch.tick(black_box(16.0)) {}
            switch
        })
    });
}

fn bench_paint(c: &mut Criterion) {
    let switch = Switch::new();

    c.bench_function("switch_paint", |b| {
        b.iter(|| {
            let mut canvas = RecordingCanvas::new();
            switch.paint(&mut canvas);
            canvas
        })
    });
}

criterion_group!(
    benches,
    bench_cubic_bezier,
    bench_compute_layout,
    bench_plan_batch,
    bench_drag_gesture,
    bench_animation_frames,
    bench_paint,
);
criterion_main!(benches);
