// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout configuration shared by the linear and radial engines.

use core::fmt;

use kurbo::{BezPath, Circle, Point, Rect, RoundedRect, Shape, Size};

/// Default edge length of every button, primary and secondary.
pub const DEFAULT_BUTTON_SIZE: f64 = 50.0;

/// Default gap between adjacent buttons in the linear layout.
pub const DEFAULT_SPACING: f64 = 8.0;

/// Flattening tolerance used when converting a [`ButtonShape`] to a path.
const OUTLINE_TOLERANCE: f64 = 0.1;

/// Outline of a tappable button.
///
/// The layout engines never inspect the shape; it is carried through to the
/// [`RenderHost`](crate::RenderHost) so the host can draw and hit-test with it.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum ButtonShape {
    /// A circle inscribed in the button square.
    #[default]
    Circle,
    /// The button square with rounded corners.
    RoundedRect {
        /// Corner radius in layout units.
        radius: f64,
    },
    /// The plain button square.
    Rect,
}

impl ButtonShape {
    /// Returns the square bounding box of a button of `size` centered on `center`.
    #[must_use]
    pub fn bounds(&self, center: Point, size: f64) -> Rect {
        Rect::from_center_size(center, Size::new(size, size))
    }

    /// Returns the outline of a button of `size` centered on `center`.
    #[must_use]
    pub fn outline(&self, center: Point, size: f64) -> BezPath {
        match *self {
            Self::Circle => Circle::new(center, size * 0.5).to_path(OUTLINE_TOLERANCE),
            Self::RoundedRect { radius } => {
                RoundedRect::from_rect(self.bounds(center, size), radius)
                    .to_path(OUTLINE_TOLERANCE)
            }
            Self::Rect => self.bounds(center, size).to_path(OUTLINE_TOLERANCE),
        }
    }
}

/// Immutable configuration of one widget instance.
///
/// `A` is the alignment type of the layout engine: [`LinearAlignment`] or
/// [`ArcAlignment`]. Re-supplying a different configuration is equivalent to
/// building a new widget.
///
/// Construction never fails. Hosts that accept sizes from untrusted input can
/// call [`LayoutConfig::validate`] first; the engines assume a positive button
/// size and a non-negative spacing.
///
/// [`LinearAlignment`]: crate::LinearAlignment
/// [`ArcAlignment`]: crate::ArcAlignment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig<A> {
    /// Edge length of every button.
    pub button_size: f64,
    /// Gap between adjacent buttons. Only the linear layout uses it.
    pub spacing: f64,
    /// Direction or arc preset used to place secondary actions.
    pub alignment: A,
    /// Outline of every button.
    pub shape: ButtonShape,
}

impl<A: Default> Default for LayoutConfig<A> {
    fn default() -> Self {
        Self {
            button_size: DEFAULT_BUTTON_SIZE,
            spacing: DEFAULT_SPACING,
            alignment: A::default(),
            shape: ButtonShape::default(),
        }
    }
}

impl<A> LayoutConfig<A> {
    /// Creates a configuration with default sizes and the given alignment.
    #[must_use]
    pub fn new(alignment: A) -> Self {
        Self {
            button_size: DEFAULT_BUTTON_SIZE,
            spacing: DEFAULT_SPACING,
            alignment,
            shape: ButtonShape::default(),
        }
    }

    /// Sets the button size.
    #[must_use]
    pub fn with_button_size(mut self, button_size: f64) -> Self {
        debug_assert!(
            button_size > 0.0,
            "button size must be positive, got {button_size}"
        );
        self.button_size = button_size;
        self
    }

    /// Sets the spacing between adjacent buttons.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        debug_assert!(spacing >= 0.0, "spacing must be non-negative, got {spacing}");
        self.spacing = spacing;
        self
    }

    /// Sets the button shape.
    #[must_use]
    pub fn with_shape(mut self, shape: ButtonShape) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the alignment, possibly changing the alignment type.
    #[must_use]
    pub fn with_alignment<B>(self, alignment: B) -> LayoutConfig<B> {
        LayoutConfig {
            button_size: self.button_size,
            spacing: self.spacing,
            alignment,
            shape: self.shape,
        }
    }

    /// Distance between the centers of two adjacent buttons.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.button_size + self.spacing
    }

    /// Checks the sizes this configuration carries.
    ///
    /// The engines never call this themselves.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.button_size.is_finite() || self.button_size <= 0.0 {
            return Err(ConfigError::ButtonSize(self.button_size));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(ConfigError::Spacing(self.spacing));
        }
        if let ButtonShape::RoundedRect { radius } = self.shape
            && (!radius.is_finite() || radius < 0.0)
        {
            return Err(ConfigError::CornerRadius(radius));
        }
        Ok(())
    }
}

/// A size in a [`LayoutConfig`] that the layout engines cannot work with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The button size is zero, negative or not finite.
    ButtonSize(f64),
    /// The spacing is negative or not finite.
    Spacing(f64),
    /// The rounded-rect corner radius is negative or not finite.
    CornerRadius(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ButtonSize(v) => write!(f, "button size must be positive and finite, got {v}"),
            Self::Spacing(v) => write!(f, "spacing must be non-negative and finite, got {v}"),
            Self::CornerRadius(v) => {
                write!(f, "corner radius must be non-negative and finite, got {v}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ArcAlignment, LinearAlignment};

    #[test]
    fn defaults_match_documented_values() {
        let config = LayoutConfig::<LinearAlignment>::default();
        assert_eq!(config.button_size, 50.0);
        assert_eq!(config.spacing, 8.0);
        assert_eq!(config.shape, ButtonShape::Circle);
        assert_eq!(config.alignment, LinearAlignment::Leading);
        assert_eq!(config.pitch(), 58.0);

        let arc = LayoutConfig::<ArcAlignment>::default();
        assert_eq!(arc.alignment, ArcAlignment::TopLeading);
    }

    #[test]
    fn builder_setters_apply() {
        let config = LayoutConfig::new(LinearAlignment::Top)
            .with_button_size(40.0)
            .with_spacing(4.0)
            .with_shape(ButtonShape::Rect);
        assert_eq!(config.pitch(), 44.0);
        assert_eq!(config.shape, ButtonShape::Rect);

        let arc = config.with_alignment(ArcAlignment::Center);
        assert_eq!(arc.alignment, ArcAlignment::Center);
        assert_eq!(arc.button_size, 40.0);
    }

    #[test]
    fn validate_rejects_bad_sizes() {
        let mut config = LayoutConfig::<LinearAlignment>::default();
        assert_eq!(config.validate(), Ok(()));

        config.button_size = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::ButtonSize(0.0)));

        config.button_size = 50.0;
        config.spacing = f64::INFINITY;
        assert_eq!(config.validate(), Err(ConfigError::Spacing(f64::INFINITY)));

        config.spacing = 0.0;
        config.shape = ButtonShape::RoundedRect { radius: -1.0 };
        assert_eq!(config.validate(), Err(ConfigError::CornerRadius(-1.0)));
    }

    #[test]
    fn shape_bounds_are_centered_squares() {
        let r = ButtonShape::Circle.bounds(Point::new(10.0, 20.0), 50.0);
        assert_eq!(r, Rect::new(-15.0, -5.0, 35.0, 45.0));
    }

    #[test]
    fn outlines_fit_inside_bounds() {
        let center = Point::new(0.0, 0.0);
        for shape in [
            ButtonShape::Circle,
            ButtonShape::RoundedRect { radius: 8.0 },
            ButtonShape::Rect,
        ] {
            let bbox = shape.outline(center, 50.0).bounding_box();
            let bounds = shape.bounds(center, 50.0).inflate(OUTLINE_TOLERANCE, OUTLINE_TOLERANCE);
            assert!(
                bbox.x0 >= bounds.x0
                    && bbox.y0 >= bounds.y0
                    && bbox.x1 <= bounds.x1
                    && bbox.y1 <= bounds.y1,
                "{shape:?}: {bbox:?}"
            );
        }
    }
}
