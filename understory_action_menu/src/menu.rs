// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget: one layout, one ordered action list, one toggle state.

use core::fmt;

use crate::action::{ActionDescriptor, ActionId, ActionList};
use crate::host::RenderHost;
use crate::layout::ActionLayout;
use crate::linear::LinearExpandLayout;
use crate::placement::{ActionPlacement, ClipWindow, PrimaryPlacement};
use crate::radial::RadialArcLayout;
use crate::toggle::ToggleState;

/// A floating action menu.
///
/// The layout is stateless; the only mutable state is the [`ToggleState`],
/// changed by [`tap_primary`](Self::tap_primary) and
/// [`tap_action`](Self::tap_action). Geometry is recomputed on demand, so a
/// tap in the middle of an animation simply retargets it.
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use understory_action_menu::{
///     ActionList, FloatingActionMenu, LayoutConfig, LinearAlignment, LinearExpandLayout,
/// };
///
/// let shared = Rc::new(Cell::new(0));
/// let hits = shared.clone();
/// let actions = ActionList::new()
///     .with_action("copy", (), move || hits.set(hits.get() + 1))
///     .with_action("paste", (), || {});
/// let layout = LinearExpandLayout::new(LayoutConfig::new(LinearAlignment::Leading));
/// let mut menu = FloatingActionMenu::new(layout, actions);
///
/// // Collapsed actions are disabled.
/// assert!(!menu.tap_action_at(0));
///
/// menu.tap_primary();
/// assert!(menu.is_expanded());
/// assert!(menu.tap_action_at(0));
/// assert_eq!(shared.get(), 1);
/// assert!(!menu.is_expanded());
/// ```
pub struct FloatingActionMenu<L, I, S = ()> {
    layout: L,
    actions: ActionList<I, S>,
    state: ToggleState,
}

/// A menu using the [`LinearExpandLayout`].
pub type LinearActionMenu<I, S = ()> = FloatingActionMenu<LinearExpandLayout, I, S>;

/// A menu using the [`RadialArcLayout`].
pub type ArcActionMenu<I, S = ()> = FloatingActionMenu<RadialArcLayout, I, S>;

impl<L: fmt::Debug, I: fmt::Debug, S: fmt::Debug> fmt::Debug for FloatingActionMenu<L, I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatingActionMenu")
            .field("layout", &self.layout)
            .field("actions", &self.actions)
            .field("state", &self.state)
            .finish()
    }
}

impl<L: ActionLayout, I, S> FloatingActionMenu<L, I, S> {
    /// Creates a collapsed menu.
    #[must_use]
    pub fn new(layout: L, actions: ActionList<I, S>) -> Self {
        Self {
            layout,
            actions,
            state: ToggleState::new(),
        }
    }

    /// Returns the layout engine.
    #[must_use]
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Returns the ordered actions.
    #[must_use]
    pub fn actions(&self) -> &ActionList<I, S> {
        &self.actions
    }

    /// Returns the toggle state.
    #[must_use]
    pub fn state(&self) -> &ToggleState {
        &self.state
    }

    /// Returns `true` while the actions are revealed.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// Replaces the action list, dropping the previous descriptors.
    ///
    /// The toggle state is kept.
    pub fn replace_actions(&mut self, actions: ActionList<I, S>) {
        self.actions = actions;
    }

    /// Handles a tap on the primary button. Returns the new expanded flag.
    pub fn tap_primary(&mut self) -> bool {
        self.state.toggle()
    }

    /// Handles a tap on the action with `id`.
    ///
    /// See [`tap_action_at`](Self::tap_action_at).
    pub fn tap_action(&mut self, id: ActionId) -> bool {
        match self.actions.position(id) {
            Some(index) => self.tap_action_at(index),
            None => false,
        }
    }

    /// Handles a tap on the action at `index`.
    ///
    /// If the menu is expanded, the action's callback runs exactly once and
    /// the menu collapses afterwards. Collapsed actions are disabled and the
    /// tap is ignored. Returns whether the callback ran.
    pub fn tap_action_at(&mut self, index: usize) -> bool {
        if !self.state.enabled() {
            return false;
        }
        let Some(action) = self.actions.get_mut(index) else {
            return false;
        };
        #[cfg(feature = "log")]
        log::trace!("action menu selected {} at index {index}", action.id());
        action.invoke();
        self.state.collapse();
        true
    }

    /// Target geometry of the action at `index`.
    #[must_use]
    pub fn placement(&self, index: usize) -> Option<ActionPlacement> {
        let count = self.actions.len();
        (index < count).then(|| self.layout.action_placement(index, count, &self.state))
    }

    /// Iterates every action with its target geometry.
    pub fn placements(
        &self,
    ) -> impl Iterator<Item = (&ActionDescriptor<I, S>, ActionPlacement)> + '_ {
        let count = self.actions.len();
        self.actions
            .iter()
            .enumerate()
            .map(move |(index, action)| {
                (
                    action,
                    self.layout.action_placement(index, count, &self.state),
                )
            })
    }

    /// Target geometry of the primary button.
    #[must_use]
    pub fn primary(&self) -> PrimaryPlacement {
        self.layout
            .primary_placement(self.actions.len(), &self.state)
    }

    /// Visibility window over the actions, if the layout has one.
    #[must_use]
    pub fn clip_window(&self) -> Option<ClipWindow> {
        self.layout.clip_window(self.actions.len(), &self.state)
    }

    /// Time after which every requested animation has nominally finished.
    ///
    /// Hosts can stop scheduling frames once this much time has passed since
    /// the last state change.
    #[must_use]
    pub fn settle_time(&self) -> f64 {
        let mut end = self.primary().animation.end();
        if let Some(window) = self.clip_window() {
            end = end.max(window.animation.end());
        }
        self.placements()
            .fold(end, |end, (_, placement)| end.max(placement.animation.end()))
    }

    /// Hands every button to `host` with its current target geometry.
    pub fn render(&self, host: &mut impl RenderHost<I, S>) {
        let config = self.layout.config();
        if let Some(window) = self.clip_window() {
            host.clip(&window);
        }
        for (action, placement) in self.placements() {
            host.action(action, &placement, config.shape, config.button_size);
        }
        host.primary(
            &self.primary(),
            self.state.is_expanded(),
            config.shape,
            config.button_size,
        );
    }
}
