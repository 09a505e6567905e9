// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_action_menu --heading-base-level=0

//! Understory Action Menu: headless floating action button layouts.
//!
//! A floating action menu is a primary toggle button that reveals a set of
//! secondary actions around itself. This crate computes where those actions
//! go and how they should animate there. Two layout engines are provided:
//!
//! - [`LinearExpandLayout`]: a row or column along one of four directions.
//!   The primary button slides out of the way, a clip window wipes over the
//!   actions, and each action is revealed after a staggered delay.
//! - [`RadialArcLayout`]: actions fanned along a quarter circle, a half
//!   circle or the full circle, moving together on one spring.
//!
//! Both are pure functions of a [`LayoutConfig`], an action index, the action
//! count and the [`ToggleState`]. They return an [`ActionPlacement`]: offset,
//! rotation, scale, opacity, enabled flag and an [`AnimationRequest`] with the
//! delay and curve to use.
//!
//! It does **not** draw anything or handle input. Callers are expected to:
//! - Implement [`RenderHost`] to map placements onto their own scene graph,
//!   draw calls or CSS transforms.
//! - Interpolate towards the targets using the attached animation requests.
//! - Route taps into [`FloatingActionMenu::tap_primary`] and
//!   [`FloatingActionMenu::tap_action`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use understory_action_menu::{
//!     ActionList, ArcAlignment, FloatingActionMenu, LayoutConfig, RadialArcLayout,
//! };
//!
//! let actions = ActionList::new()
//!     .with_action("camera", (), || {})
//!     .with_action("gallery", (), || {})
//!     .with_action("file", (), || {});
//! let layout = RadialArcLayout::new(LayoutConfig::new(ArcAlignment::TopLeading));
//! let mut menu = FloatingActionMenu::new(layout, actions);
//!
//! // Collapsed: every action sits on the primary button, scaled to zero.
//! assert!(menu.placements().all(|(_, p)| p.offset == Vec2::ZERO && p.scale == 0.0));
//!
//! menu.tap_primary();
//! let angles: Vec<f64> = menu.placements().map(|(_, p)| p.rotation).collect();
//! assert_eq!(angles, [180.0, 225.0, 270.0]);
//! ```
//!
//! ## Coordinates and units
//!
//! Offsets are relative to the primary button's collapsed anchor in a y-down
//! space, using [`kurbo`] types. Angles are degrees, clockwise from the
//! positive x axis. Times are seconds.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` targets.
//! - `log`: emits `debug` records for toggle transitions and `trace` records
//!   for action selection through the `log` facade.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod animation;
mod config;
mod host;
mod layout;
mod linear;
mod menu;
mod placement;
mod radial;
mod toggle;

pub use action::{ActionDescriptor, ActionId, ActionList};
pub use animation::{
    AnimationCurve, AnimationRequest, DEFAULT_SPRING_DAMPING, DEFAULT_SPRING_RESPONSE, ease_in_out,
};
pub use config::{ButtonShape, ConfigError, DEFAULT_BUTTON_SIZE, DEFAULT_SPACING, LayoutConfig};
pub use host::RenderHost;
pub use layout::ActionLayout;
pub use linear::{
    Axis, CLIP_MARGIN, LinearAlignment, LinearExpandLayout, MIN_ANIMATION_DURATION, STAGGER_STEP,
};
pub use menu::{ArcActionMenu, FloatingActionMenu, LinearActionMenu};
pub use placement::{ActionPlacement, ClipWindow, PrimaryPlacement};
pub use radial::{ArcAlignment, ArcKind, RadialArcLayout};
pub use toggle::ToggleState;
