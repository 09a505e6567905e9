// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_action_menu` crate.
//!
//! These exercise both layout engines through the public API and the widget
//! that ties them to a toggle state and an action list.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Size, Vec2};
use understory_action_menu::{
    ActionLayout, ActionList, AnimationCurve, ArcAlignment, ArcKind, FloatingActionMenu,
    LayoutConfig, LinearAlignment, LinearExpandLayout, RadialArcLayout, ToggleState,
};

#[test]
fn linear_start_x_scenario() {
    let layout = LinearExpandLayout::new(
        LayoutConfig::new(LinearAlignment::Leading)
            .with_button_size(50.0)
            .with_spacing(8.0),
    );
    let offset = layout.axis_offset(3);
    assert_eq!(offset.x, 174.0);
    assert_eq!(offset.y, 0.0);
    assert_eq!(layout.clip_extent(3, true).width, 182.0);
    assert_eq!(layout.total_animation_duration(3), 0.5);
    let delays: Vec<f64> = (0..3).map(|i| layout.per_action_delay(i, 3, true)).collect();
    assert_eq!(delays, [0.0, 0.1, 0.2]);
}

#[test]
fn radial_corner_scenario() {
    let layout = RadialArcLayout::new(LayoutConfig::new(ArcAlignment::TopLeading));
    assert_eq!(ArcAlignment::TopLeading.kind(), ArcKind::Corner);
    assert_eq!(ArcAlignment::TopLeading.start_rotation(), 180.0);
    assert_eq!(ArcAlignment::TopLeading.span_degrees(5), 90.0);
    assert_eq!(RadialArcLayout::progress(2, 5), 0.5);
    assert_eq!(layout.action_rotation(2, 5), 225.0);
}

#[test]
fn full_circle_six_actions() {
    assert_eq!(ArcAlignment::Center.kind(), ArcKind::FullCircle);
    assert_eq!(ArcAlignment::Center.span_degrees(6), 300.0);
    let layout = RadialArcLayout::new(LayoutConfig::new(ArcAlignment::Center));
    for (i, expected) in [0.0, 60.0, 120.0, 180.0, 240.0, 300.0].into_iter().enumerate() {
        let rotation = layout.action_rotation(i, 6);
        assert!((rotation - expected).abs() < 1e-9, "{i}: {rotation}");
    }
}

#[test]
fn every_radial_preset_spans_its_family() {
    for alignment in ArcAlignment::ALL {
        let layout = RadialArcLayout::new(LayoutConfig::new(alignment));
        let first = layout.action_rotation(0, 3);
        let last = layout.action_rotation(2, 3);
        assert_eq!(first, alignment.start_rotation());
        let expected_span = match alignment.kind() {
            ArcKind::Corner => 90.0,
            ArcKind::HalfCircle => 180.0,
            ArcKind::FullCircle => 240.0,
        };
        assert_eq!(last - first, expected_span, "{alignment:?}");
    }
}

#[test]
fn stagger_only_in_linear_layout() {
    let mut state = ToggleState::new();
    state.toggle();

    let linear = LinearExpandLayout::new(LayoutConfig::new(LinearAlignment::Top));
    let radial = RadialArcLayout::new(LayoutConfig::new(ArcAlignment::Bottom));

    let linear_delays: Vec<f64> = (0..4)
        .map(|i| linear.action_placement(i, 4, &state).delay())
        .collect();
    assert!(linear_delays.iter().any(|&d| d > 0.0));
    assert_eq!(
        linear.action_placement(0, 4, &state).animation.curve,
        AnimationCurve::EaseInOut
    );

    for i in 0..4 {
        let placement = radial.action_placement(i, 4, &state);
        assert_eq!(placement.delay(), 0.0);
        assert!(matches!(
            placement.animation.curve,
            AnimationCurve::Spring { .. }
        ));
    }
}

#[test]
fn callbacks_run_before_collapse() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut actions = ActionList::new();
    for name in ["share", "edit", "delete"] {
        let log = log.clone();
        actions.push(name, (), move || log.borrow_mut().push(name));
    }
    let mut menu = FloatingActionMenu::new(
        RadialArcLayout::new(LayoutConfig::new(ArcAlignment::Trailing)),
        actions,
    );

    menu.tap_primary();
    assert!(menu.tap_action_at(1));
    assert!(!menu.is_expanded());

    menu.tap_primary();
    assert!(menu.tap_action_at(2));

    assert_eq!(*log.borrow(), ["edit", "delete"]);
}

#[test]
fn mid_animation_tap_retargets() {
    let mut menu = FloatingActionMenu::new(
        LinearExpandLayout::new(LayoutConfig::new(LinearAlignment::Trailing)),
        ActionList::new()
            .with_action(1_u8, (), || {})
            .with_action(2_u8, (), || {}),
    );
    menu.tap_primary();
    let expanded = menu.clip_window().map(|c| c.extent);
    menu.tap_primary();
    let collapsed = menu.clip_window().map(|c| c.extent);

    assert_eq!(expanded, Some(Size::new(124.0, 58.0)));
    assert_eq!(collapsed, Some(Size::new(0.0, 58.0)));
    assert_eq!(menu.primary().offset, Vec2::ZERO);
}

#[test]
fn single_action_special_cases() {
    let corner = RadialArcLayout::new(LayoutConfig::new(ArcAlignment::BottomLeading));
    assert_eq!(RadialArcLayout::progress(0, 1), 0.0);
    assert_eq!(corner.action_rotation(0, 1), 90.0);
    assert_eq!(corner.radial_offset(1), 120.0);

    let linear = LinearExpandLayout::new(LayoutConfig::new(LinearAlignment::Bottom));
    assert_eq!(linear.per_action_delay(0, 1, true), 0.0);
    assert_eq!(linear.per_action_delay(0, 1, false), 0.0);
}
