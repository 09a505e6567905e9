// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interface shared by the layout engines.

use crate::config::LayoutConfig;
use crate::placement::{ActionPlacement, ClipWindow, PrimaryPlacement};
use crate::toggle::ToggleState;

/// A stateless mapping from `(index, count, state)` to button geometry.
///
/// Implementations must be pure: the same inputs always give the same
/// placement, so toggling twice reproduces the original geometry exactly.
pub trait ActionLayout {
    /// Alignment type carried by this layout's configuration.
    type Alignment: Copy;

    /// Returns the configuration this layout was built with.
    fn config(&self) -> &LayoutConfig<Self::Alignment>;

    /// Target geometry of action `index` out of `count`.
    ///
    /// `index` must be less than `count`.
    fn action_placement(&self, index: usize, count: usize, state: &ToggleState)
    -> ActionPlacement;

    /// Target geometry of the primary button.
    fn primary_placement(&self, count: usize, state: &ToggleState) -> PrimaryPlacement;

    /// Visibility window over the secondary actions, if this layout has one.
    fn clip_window(&self, count: usize, state: &ToggleState) -> Option<ClipWindow> {
        let _ = (count, state);
        None
    }
}
