// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering capability a host toolkit provides.

use crate::action::ActionDescriptor;
use crate::config::ButtonShape;
use crate::placement::{ActionPlacement, ClipWindow, PrimaryPlacement};

/// Draws tappable buttons at computed transforms.
///
/// A host maps these calls onto its own composition primitives: scene graph
/// nodes, immediate-mode draw calls, or CSS transforms. It is also responsible
/// for interpolating towards each target with the attached
/// [`AnimationRequest`](crate::AnimationRequest) and for routing taps back to
/// [`FloatingActionMenu::tap_primary`](crate::FloatingActionMenu::tap_primary)
/// and [`FloatingActionMenu::tap_action`](crate::FloatingActionMenu::tap_action).
///
/// [`FloatingActionMenu::render`](crate::FloatingActionMenu::render) calls
/// [`clip`](Self::clip) first (when the layout has a window), then
/// [`action`](Self::action) for every action in order, then
/// [`primary`](Self::primary), so the primary button is drawn on top.
pub trait RenderHost<I, S> {
    /// Restricts the following action draws to `window`.
    fn clip(&mut self, window: &ClipWindow) {
        let _ = window;
    }

    /// Draws one secondary action.
    fn action(
        &mut self,
        action: &ActionDescriptor<I, S>,
        placement: &ActionPlacement,
        shape: ButtonShape,
        button_size: f64,
    );

    /// Draws the primary toggle button.
    fn primary(
        &mut self,
        placement: &PrimaryPlacement,
        expanded: bool,
        shape: ButtonShape,
        button_size: f64,
    );
}
