// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-button geometry and timing produced by the layout engines.

use kurbo::{Affine, Point, Size, Vec2};

use crate::animation::AnimationRequest;

/// Target geometry of one secondary action.
///
/// Offsets are relative to the primary button's collapsed anchor, in a y-down
/// coordinate space. Rotations are in degrees, clockwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionPlacement {
    /// Translation from the primary button's anchor.
    pub offset: Vec2,
    /// Angular position around the primary button. Zero for linear layouts.
    pub rotation: f64,
    /// Rotation applied to the action's own content to keep it upright.
    pub counter_rotation: f64,
    /// Target scale in `[0, 1]`.
    pub scale: f64,
    /// Target opacity in `[0, 1]`.
    pub opacity: f64,
    /// Whether the action accepts taps.
    pub enabled: bool,
    /// How to animate towards these targets, including the start delay.
    pub animation: AnimationRequest,
}

impl ActionPlacement {
    /// Start delay of this action's animation, in seconds.
    #[must_use]
    pub fn delay(&self) -> f64 {
        self.animation.delay
    }

    /// Center of the action for a primary button anchored at `anchor`.
    #[must_use]
    pub fn center(&self, anchor: Point) -> Point {
        anchor + self.offset
    }

    /// Transform mapping the action's content space onto the primary anchor space.
    ///
    /// Scaling and rotation happen about the content-space origin, so content
    /// must be centered on the origin (for example an outline built with
    /// [`ButtonShape::outline`](crate::ButtonShape::outline) at
    /// [`Point::ORIGIN`]). The content is scaled, rotated by the net of
    /// [`rotation`](Self::rotation) and [`counter_rotation`](Self::counter_rotation),
    /// then moved to [`offset`](Self::offset).
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset)
            * Affine::rotate((self.rotation + self.counter_rotation).to_radians())
            * Affine::scale(self.scale)
    }
}

/// Target geometry of the primary toggle button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrimaryPlacement {
    /// Translation of the primary button from its collapsed anchor.
    pub offset: Vec2,
    /// How to animate towards this offset.
    pub animation: AnimationRequest,
}

impl PrimaryPlacement {
    /// Transform mapping the primary button's content onto the anchor space.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset)
    }
}

/// Visibility window over the secondary actions.
///
/// Only layouts that reveal actions with a wipe produce one. The window is
/// anchored at the primary button's collapsed anchor and grows in the
/// expansion direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipWindow {
    /// Width and height of the window.
    pub extent: Size,
    /// How to animate towards this extent.
    pub animation: AnimationRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placement(offset: Vec2, rotation: f64, counter: f64, scale: f64) -> ActionPlacement {
        ActionPlacement {
            offset,
            rotation,
            counter_rotation: counter,
            scale,
            opacity: scale,
            enabled: scale > 0.0,
            animation: AnimationRequest::ease_in_out(0.5).with_delay(0.3),
        }
    }

    #[test]
    fn counter_rotation_cancels_in_transform() {
        let p = placement(Vec2::new(10.0, -4.0), 225.0, -225.0, 1.0);
        let mapped = p.transform() * Point::new(1.0, 0.0);
        assert!((mapped.x - 11.0).abs() < 1e-9);
        assert!((mapped.y + 4.0).abs() < 1e-9);
    }

    #[test]
    fn zero_scale_collapses_content_onto_offset() {
        let p = placement(Vec2::new(3.0, 4.0), 0.0, 0.0, 0.0);
        assert_eq!(p.transform() * Point::new(25.0, 25.0), Point::new(3.0, 4.0));
        assert!(!p.enabled);
    }

    #[test]
    fn center_and_delay() {
        let p = placement(Vec2::new(3.0, 4.0), 0.0, 0.0, 1.0);
        assert_eq!(p.center(Point::new(100.0, 100.0)), Point::new(103.0, 104.0));
        assert_eq!(p.delay(), 0.3);
    }
}
