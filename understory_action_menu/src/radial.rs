// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radial arc layout: actions fanned around the primary button.
//!
//! Each action is translated outward by a fixed radius and then rotated into
//! its angular slot. Its content gets the opposite rotation so icons stay
//! upright. All actions move together on a single spring; there is no
//! stagger.
//!
//! Angles are in degrees, measured clockwise from the positive x axis in a
//! y-down coordinate space.

use kurbo::{Affine, Vec2};

use crate::animation::{AnimationRequest, DEFAULT_SPRING_DAMPING, DEFAULT_SPRING_RESPONSE};
use crate::config::LayoutConfig;
use crate::layout::ActionLayout;
use crate::placement::{ActionPlacement, PrimaryPlacement};
use crate::toggle::ToggleState;

/// Padding added to the button size to form the base radius.
const RADIUS_PADDING: f64 = 10.0;

/// Family of arc presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArcKind {
    /// Quarter circle fanning into a corner.
    Corner,
    /// Half circle fanning towards an edge.
    HalfCircle,
    /// Actions spread around the whole circle.
    FullCircle,
}

/// Arc preset of a [`RadialArcLayout`].
///
/// The name is the quadrant or edge the actions fan into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ArcAlignment {
    /// Quarter circle from the left to the top.
    #[default]
    TopLeading,
    /// Quarter circle from the top to the right.
    TopTrailing,
    /// Quarter circle from the bottom to the left.
    BottomLeading,
    /// Quarter circle from the right to the bottom.
    BottomTrailing,
    /// Half circle from the left over the top to the right.
    Top,
    /// Half circle from the top over the right to the bottom.
    Trailing,
    /// Half circle from the bottom over the left to the top.
    Leading,
    /// Half circle from the right over the bottom to the left.
    Bottom,
    /// Full circle.
    Center,
}

impl ArcAlignment {
    /// All nine presets.
    pub const ALL: [Self; 9] = [
        Self::TopLeading,
        Self::TopTrailing,
        Self::BottomLeading,
        Self::BottomTrailing,
        Self::Top,
        Self::Trailing,
        Self::Leading,
        Self::Bottom,
        Self::Center,
    ];

    /// The family this preset belongs to.
    #[must_use]
    pub const fn kind(self) -> ArcKind {
        match self {
            Self::TopLeading | Self::TopTrailing | Self::BottomLeading | Self::BottomTrailing => {
                ArcKind::Corner
            }
            Self::Top | Self::Trailing | Self::Leading | Self::Bottom => ArcKind::HalfCircle,
            Self::Center => ArcKind::FullCircle,
        }
    }

    /// Angle of the first action, in degrees.
    #[must_use]
    pub const fn start_rotation(self) -> f64 {
        match self {
            Self::TopLeading | Self::Top => 180.0,
            Self::TopTrailing | Self::Trailing => -90.0,
            Self::BottomLeading | Self::Leading => 90.0,
            Self::BottomTrailing | Self::Bottom | Self::Center => 0.0,
        }
    }

    /// Angle between the first and the last of `count` actions, in degrees.
    ///
    /// The full circle leaves one slot free so the last action does not land
    /// on top of the first.
    #[must_use]
    pub fn span_degrees(self, count: usize) -> f64 {
        match self.kind() {
            ArcKind::Corner => 90.0,
            ArcKind::HalfCircle => 180.0,
            ArcKind::FullCircle if count == 0 => 0.0,
            ArcKind::FullCircle => (count - 1) as f64 * 360.0 / count as f64,
        }
    }
}

/// Radial arc layout.
///
/// ```rust
/// use understory_action_menu::{ArcAlignment, LayoutConfig, RadialArcLayout};
///
/// let layout = RadialArcLayout::new(LayoutConfig::new(ArcAlignment::TopLeading));
/// assert_eq!(layout.action_rotation(2, 5), 225.0);
/// assert_eq!(layout.radial_offset(5), 60.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct RadialArcLayout {
    config: LayoutConfig<ArcAlignment>,
}

impl RadialArcLayout {
    /// Creates a layout from its configuration.
    #[must_use]
    pub fn new(config: LayoutConfig<ArcAlignment>) -> Self {
        Self { config }
    }

    /// Fraction of the span covered before action `index`.
    ///
    /// A single action sits at the start of the arc.
    #[must_use]
    pub fn progress(index: usize, count: usize) -> f64 {
        if count <= 1 {
            0.0
        } else {
            index as f64 / (count - 1) as f64
        }
    }

    /// Angular position of action `index` around the primary button.
    #[must_use]
    pub fn action_rotation(&self, index: usize, count: usize) -> f64 {
        let alignment = self.config.alignment;
        Self::progress(index, count) * alignment.span_degrees(count) + alignment.start_rotation()
    }

    /// Rotation applied to the action's content to cancel [`Self::action_rotation`].
    #[must_use]
    pub fn action_counter_rotation(&self, index: usize, count: usize) -> f64 {
        let alignment = self.config.alignment;
        -Self::progress(index, count) * alignment.span_degrees(count) - alignment.start_rotation()
    }

    /// Distance from the primary button to every action.
    ///
    /// These factors are tuned by eye and must be kept as they are: one
    /// action is pushed out twice as far, two actions a quarter further, and
    /// presets that spread both ways use half the radius.
    #[must_use]
    pub fn radial_offset(&self, count: usize) -> f64 {
        let base = self.config.button_size + RADIUS_PADDING;
        let per_count = match count {
            1 => 2.0,
            2 => 1.25,
            _ => 1.0,
        };
        let per_kind = match self.config.alignment.kind() {
            ArcKind::Corner => 1.0,
            ArcKind::HalfCircle | ArcKind::FullCircle => 0.5,
        };
        base * per_count * per_kind
    }

    /// Expanded offset of action `index` from the primary button.
    ///
    /// This is the point `(radial_offset, 0)` rotated by the action's angle.
    #[must_use]
    pub fn action_offset(&self, index: usize, count: usize) -> Vec2 {
        Vec2::from_angle(self.action_rotation(index, count).to_radians())
            * self.radial_offset(count)
    }

    /// Expanded transform of action `index`'s content.
    ///
    /// Composed as rotate, translate outward, counter-rotate; the net
    /// rotation is zero.
    #[must_use]
    pub fn action_transform(&self, index: usize, count: usize) -> Affine {
        Affine::rotate(self.action_rotation(index, count).to_radians())
            * Affine::translate(Vec2::new(self.radial_offset(count), 0.0))
            * Affine::rotate(self.action_counter_rotation(index, count).to_radians())
    }

    fn animation() -> AnimationRequest {
        AnimationRequest::spring(DEFAULT_SPRING_RESPONSE, DEFAULT_SPRING_DAMPING)
    }
}

impl ActionLayout for RadialArcLayout {
    type Alignment = ArcAlignment;

    fn config(&self) -> &LayoutConfig<ArcAlignment> {
        &self.config
    }

    fn action_placement(
        &self,
        index: usize,
        count: usize,
        state: &ToggleState,
    ) -> ActionPlacement {
        ActionPlacement {
            offset: if state.is_expanded() {
                self.action_offset(index, count)
            } else {
                Vec2::ZERO
            },
            rotation: self.action_rotation(index, count),
            counter_rotation: self.action_counter_rotation(index, count),
            scale: state.scale(),
            opacity: state.opacity(),
            enabled: state.enabled(),
            animation: Self::animation(),
        }
    }

    fn primary_placement(&self, _count: usize, _state: &ToggleState) -> PrimaryPlacement {
        PrimaryPlacement {
            offset: Vec2::ZERO,
            animation: Self::animation(),
        }
    }
}
