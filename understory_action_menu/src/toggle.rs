// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expanded/collapsed state of one widget instance.

/// The single mutable flag of a floating action menu.
///
/// Every derived per-action value (enabled, scale, opacity, clip extent) is a
/// pure function of this flag, the action's index and the action count.
///
/// A revision counter bumps whenever the flag actually changes, so hosts can
/// skip recomputing geometry when a call was a no-op.
///
/// ```rust
/// use understory_action_menu::ToggleState;
///
/// let mut state = ToggleState::new();
/// assert!(!state.is_expanded());
/// state.toggle();
/// assert!(state.is_expanded());
/// state.collapse();
/// assert!(!state.is_expanded());
/// assert_eq!(state.revision(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleState {
    expanded: bool,
    revision: u64,
}

impl ToggleState {
    /// Creates a collapsed state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            expanded: false,
            revision: 0,
        }
    }

    /// Returns `true` while the secondary actions are revealed.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flips the state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_expanded(!self.expanded);
        self.expanded
    }

    /// Forces the collapsed state.
    pub fn collapse(&mut self) {
        self.set_expanded(false);
    }

    /// Forces the expanded state.
    pub fn expand(&mut self) {
        self.set_expanded(true);
    }

    /// Sets the state, bumping the revision only on change.
    pub fn set_expanded(&mut self, expanded: bool) {
        if self.expanded == expanded {
            return;
        }
        self.expanded = expanded;
        self.revision = self.revision.wrapping_add(1);
        #[cfg(feature = "log")]
        log::debug!(
            "action menu {} (revision {})",
            if expanded { "expanded" } else { "collapsed" },
            self.revision
        );
    }

    /// Monotonic change counter.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether secondary actions accept taps.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.expanded
    }

    /// Target scale of every secondary action.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        if self.expanded { 1.0 } else { 0.0 }
    }

    /// Target opacity of every secondary action.
    #[must_use]
    pub const fn opacity(&self) -> f64 {
        if self.expanded { 1.0 } else { 0.0 }
    }
}
