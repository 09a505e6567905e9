// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Vec2;
use understory_action_menu::{
    ActionLayout, ActionList, ArcAlignment, FloatingActionMenu, LayoutConfig, LinearAlignment,
    LinearExpandLayout, RadialArcLayout, ToggleState,
};

fn expanded() -> ToggleState {
    let mut state = ToggleState::new();
    state.expand();
    state
}

fn bench_placements(c: &mut Criterion) {
    let mut group = c.benchmark_group("action_menu/placements");
    let state = expanded();
    let linear = LinearExpandLayout::new(LayoutConfig::new(LinearAlignment::Trailing));
    let radial = RadialArcLayout::new(LayoutConfig::new(ArcAlignment::Center));

    for count in [1_usize, 4, 16, 64] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("linear", count), &count, |b, &count| {
            b.iter(|| {
                let mut sum = Vec2::ZERO;
                for index in 0..count {
                    let p = linear.action_placement(index, count, black_box(&state));
                    sum += p.offset * p.scale + Vec2::new(p.delay(), 0.0);
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("radial", count), &count, |b, &count| {
            b.iter(|| {
                let mut sum = Vec2::ZERO;
                for index in 0..count {
                    let p = radial.action_placement(index, count, black_box(&state));
                    sum += p.offset + Vec2::new(p.counter_rotation, 0.0);
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

fn bench_toggle_and_render_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("action_menu/toggle");

    // A full tap cycle: expand, recompute all targets, collapse, recompute again.
    for count in [4_usize, 16] {
        let mut actions = ActionList::new();
        for index in 0..count {
            actions.push(index, (), || {});
        }
        let mut menu = FloatingActionMenu::new(
            RadialArcLayout::new(LayoutConfig::new(ArcAlignment::Top)),
            actions,
        );
        group.bench_function(BenchmarkId::new("radial_cycle", count), |b| {
            b.iter(|| {
                menu.tap_primary();
                let open = menu.settle_time();
                menu.tap_primary();
                black_box(open + menu.settle_time())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_placements, bench_toggle_and_render_targets);
criterion_main!(benches);
