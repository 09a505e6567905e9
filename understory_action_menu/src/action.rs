// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Secondary action descriptors and the ordered list that owns them.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

/// Source of every [`ActionId`], shared by all lists.
static NEXT_ACTION_ID: AtomicU32 = AtomicU32::new(0);

/// Identifier of an action.
///
/// Ids are unique across every [`ActionList`] in the process and increase in
/// insertion order within a list. They stay stable for as long as the
/// descriptor lives and are never reused, so an id from a replaced list
/// matches nothing. They are only meant for looking up an action's
/// position, not for persistence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(u32);

impl ActionId {
    /// Takes the next unused id.
    ///
    /// # Panics
    ///
    /// Panics once all `u32` ids have been handed out.
    fn next() -> Self {
        let id = NEXT_ACTION_ID
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .expect("action id space exhausted");
        Self(id)
    }

    /// Returns the raw value of this id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action#{}", self.0)
    }
}

/// One secondary action.
///
/// `I` and `S` are the host's icon and style resources (font, tint,
/// background). The layout engines never look at them.
pub struct ActionDescriptor<I, S = ()> {
    id: ActionId,
    icon: I,
    style: S,
    callback: Box<dyn FnMut()>,
}

impl<I: fmt::Debug, S: fmt::Debug> fmt::Debug for ActionDescriptor<I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDescriptor")
            .field("id", &self.id)
            .field("icon", &self.icon)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl<I, S> ActionDescriptor<I, S> {
    /// Returns this action's id.
    #[must_use]
    pub fn id(&self) -> ActionId {
        self.id
    }

    /// Returns the icon resource.
    #[must_use]
    pub fn icon(&self) -> &I {
        &self.icon
    }

    /// Returns the style resource.
    #[must_use]
    pub fn style(&self) -> &S {
        &self.style
    }

    /// Runs the action's callback once.
    pub(crate) fn invoke(&mut self) {
        (self.callback)();
    }
}

/// Ordered, exclusively owned list of secondary actions.
///
/// Order is significant: an action's index drives its placement and its
/// animation delay.
///
/// ```rust
/// use understory_action_menu::ActionList;
///
/// let actions = ActionList::new()
///     .with_action("share", (), || {})
///     .with_action("edit", (), || {});
/// assert_eq!(actions.len(), 2);
/// assert_eq!(actions.get(1).map(|a| *a.icon()), Some("edit"));
/// ```
pub struct ActionList<I, S = ()> {
    actions: Vec<ActionDescriptor<I, S>>,
}

impl<I: fmt::Debug, S: fmt::Debug> fmt::Debug for ActionList<I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.actions.iter()).finish()
    }
}

impl<I, S> Default for ActionList<I, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, S> ActionList<I, S> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Appends an action and returns its id.
    ///
    /// # Panics
    ///
    /// Panics once all `u32` ids have been handed out.
    pub fn push(&mut self, icon: I, style: S, callback: impl FnMut() + 'static) -> ActionId {
        let id = ActionId::next();
        self.actions.push(ActionDescriptor {
            id,
            icon,
            style,
            callback: Box::new(callback),
        });
        id
    }

    /// Appends an action, builder style.
    #[must_use]
    pub fn with_action(mut self, icon: I, style: S, callback: impl FnMut() + 'static) -> Self {
        self.push(icon, style, callback);
        self
    }

    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if the list holds no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the action at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ActionDescriptor<I, S>> {
        self.actions.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut ActionDescriptor<I, S>> {
        self.actions.get_mut(index)
    }

    /// Returns the index of the action with the given id.
    #[must_use]
    pub fn position(&self, id: ActionId) -> Option<usize> {
        // Ids increase with every push, so the list is sorted by id.
        self.actions.binary_search_by_key(&id, |a| a.id).ok()
    }

    /// Iterates the actions in order.
    pub fn iter(&self) -> core::slice::Iter<'_, ActionDescriptor<I, S>> {
        self.actions.iter()
    }
}

impl<'a, I, S> IntoIterator for &'a ActionList<I, S> {
    type Item = &'a ActionDescriptor<I, S>;
    type IntoIter = core::slice::Iter<'a, ActionDescriptor<I, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
