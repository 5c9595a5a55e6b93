use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tickdial::counter::{PointerTracker, TrackGeometry, falloff};

const TICK_COUNT: usize = 121;

fn bench_falloff_column(c: &mut Criterion) {
    c.bench_function("falloff_full_column", |b| {
        b.iter(|| {
            let selected = black_box(60);
            let mut total = 0.0f32;
            for tick in 0..TICK_COUNT {
                total += falloff::gaussian_offset(selected, tick);
            }
            total
        });
    });
}

fn bench_drag_sweep(c: &mut Criterion) {
    c.bench_function("tracker_drag_sweep", |b| {
        let mut tracker = PointerTracker::new();
        tracker.set_value_count(TICK_COUNT);
        tracker.set_geometry(TrackGeometry {
            height: 600.0,
            bottom: 700.0,
        });
        b.iter(|| {
            tracker.mouse_down(black_box(700.0));
            let mut y = 700.0;
            while y > 100.0 {
                tracker.mouse_move(black_box(y));
                y -= 2.0;
            }
            tracker.mouse_up();
            tracker.selected_index()
        });
    });
}

criterion_group!(benches, bench_falloff_column, bench_drag_sweep);
criterion_main!(benches);
