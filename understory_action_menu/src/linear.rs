// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear expand layout: a row or column of actions revealed with a wipe.
//!
//! When expanded, the primary button travels along one axis by exactly the
//! room needed for every action, and a clip window grows over the vacated
//! space. Actions are revealed one after another starting with the one next
//! to the primary button, and hidden in the reverse order.

use kurbo::{Size, Vec2};

use crate::animation::AnimationRequest;
use crate::config::LayoutConfig;
use crate::layout::ActionLayout;
use crate::placement::{ActionPlacement, ClipWindow, PrimaryPlacement};
use crate::toggle::ToggleState;

/// Extra room added around the clip window so shadows and outlines survive.
pub const CLIP_MARGIN: f64 = 8.0;

/// Delay between two consecutive actions, in seconds.
pub const STAGGER_STEP: f64 = 0.1;

/// Lower bound of the whole expand/collapse animation, in seconds.
pub const MIN_ANIMATION_DURATION: f64 = 0.5;

/// Axis along which a linear layout expands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

/// Expansion direction of a [`LinearExpandLayout`].
///
/// Start directions move the primary button towards positive coordinates,
/// end directions towards negative ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LinearAlignment {
    /// Start of the x axis.
    #[default]
    Leading,
    /// End of the x axis.
    Trailing,
    /// Start of the y axis.
    Top,
    /// End of the y axis.
    Bottom,
}

impl LinearAlignment {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Leading, Self::Trailing, Self::Top, Self::Bottom];

    /// The axis this direction expands along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Leading | Self::Trailing => Axis::Horizontal,
            Self::Top | Self::Bottom => Axis::Vertical,
        }
    }

    /// Returns `true` for start directions.
    #[must_use]
    pub const fn is_start(self) -> bool {
        matches!(self, Self::Leading | Self::Top)
    }

    fn unit(self) -> Vec2 {
        match self.axis() {
            Axis::Horizontal => Vec2::new(1.0, 0.0),
            Axis::Vertical => Vec2::new(0.0, 1.0),
        }
    }
}

/// Linear expand layout.
///
/// ```rust
/// use understory_action_menu::{LayoutConfig, LinearAlignment, LinearExpandLayout};
///
/// let layout = LinearExpandLayout::new(LayoutConfig::new(LinearAlignment::Leading));
/// assert_eq!(layout.axis_offset(3).x, 174.0);
/// assert_eq!(layout.clip_extent(3, true).width, 182.0);
/// assert_eq!(layout.per_action_delay(2, 3, true), 0.2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LinearExpandLayout {
    config: LayoutConfig<LinearAlignment>,
}

impl LinearExpandLayout {
    /// Creates a layout from its configuration.
    #[must_use]
    pub fn new(config: LayoutConfig<LinearAlignment>) -> Self {
        Self { config }
    }

    /// Distance the primary button travels when expanded.
    ///
    /// The magnitude is `(button_size + spacing) * count`; the orthogonal
    /// component is always zero.
    #[must_use]
    pub fn axis_offset(&self, count: usize) -> Vec2 {
        let magnitude = self.config.pitch() * count as f64;
        let sign = if self.config.alignment.is_start() {
            1.0
        } else {
            -1.0
        };
        self.config.alignment.unit() * (sign * magnitude)
    }

    /// Size of the visibility window over the actions.
    ///
    /// Collapsed, the expansion axis is clipped to zero. Expanded, it covers
    /// the full travel plus [`CLIP_MARGIN`]. The orthogonal axis always spans
    /// one button plus the margin.
    #[must_use]
    pub fn clip_extent(&self, count: usize, expanded: bool) -> Size {
        let along = if expanded {
            let offset = self.axis_offset(count);
            offset.x.abs() + offset.y.abs() + CLIP_MARGIN
        } else {
            0.0
        };
        let across = self.config.button_size + CLIP_MARGIN;
        match self.config.alignment.axis() {
            Axis::Horizontal => Size::new(along, across),
            Axis::Vertical => Size::new(across, along),
        }
    }

    /// Start delay of action `index` when animating towards `expanding`.
    ///
    /// Start directions reveal index `0` first and hide it last; end
    /// directions do the opposite. Either way the delays are a permutation
    /// of `0, step, ..., (count - 1) * step`.
    #[must_use]
    pub fn per_action_delay(&self, index: usize, count: usize, expanding: bool) -> f64 {
        debug_assert!(index < count, "action {index} out of range for {count}");
        let reversed = count.saturating_sub(index + 1);
        let rank = if self.config.alignment.is_start() == expanding {
            index
        } else {
            reversed
        };
        rank as f64 * STAGGER_STEP
    }

    /// Length of the whole expand or collapse animation.
    ///
    /// Short lists are clamped to [`MIN_ANIMATION_DURATION`]; long lists get
    /// [`STAGGER_STEP`] per action.
    #[must_use]
    pub fn total_animation_duration(&self, count: usize) -> f64 {
        (count as f64 * STAGGER_STEP).max(MIN_ANIMATION_DURATION)
    }

    /// Resting offset of action `index` from the primary button's collapsed anchor.
    ///
    /// The action with delay zero on expand always sits next to the
    /// primary button's expanded position.
    #[must_use]
    pub fn resting_offset(&self, index: usize, count: usize) -> Vec2 {
        let slot = if self.config.alignment.is_start() {
            count.saturating_sub(index + 1) as f64
        } else {
            -(index as f64)
        };
        self.config.alignment.unit() * (slot * self.config.pitch())
    }
}

impl ActionLayout for LinearExpandLayout {
    type Alignment = LinearAlignment;

    fn config(&self) -> &LayoutConfig<LinearAlignment> {
        &self.config
    }

    fn action_placement(
        &self,
        index: usize,
        count: usize,
        state: &ToggleState,
    ) -> ActionPlacement {
        let delay = self.per_action_delay(index, count, state.is_expanded());
        ActionPlacement {
            offset: self.resting_offset(index, count),
            rotation: 0.0,
            counter_rotation: 0.0,
            scale: state.scale(),
            opacity: state.opacity(),
            enabled: state.enabled(),
            animation: AnimationRequest::ease_in_out(self.total_animation_duration(count))
                .with_delay(delay),
        }
    }

    fn primary_placement(&self, count: usize, state: &ToggleState) -> PrimaryPlacement {
        PrimaryPlacement {
            offset: if state.is_expanded() {
                self.axis_offset(count)
            } else {
                Vec2::ZERO
            },
            animation: AnimationRequest::ease_in_out(self.total_animation_duration(count)),
        }
    }

    fn clip_window(&self, count: usize, state: &ToggleState) -> Option<ClipWindow> {
        Some(ClipWindow {
            extent: self.clip_extent(count, state.is_expanded()),
            animation: AnimationRequest::ease_in_out(self.total_animation_duration(count)),
        })
    }
}
