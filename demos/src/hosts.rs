// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two [`RenderHost`]s: one printing placements, one writing SVG.

use std::fmt::Write as _;

use kurbo::{Affine, Point};
use understory_action_menu::{
    ActionDescriptor, ActionPlacement, ButtonShape, ClipWindow, PrimaryPlacement, RenderHost,
};

/// Prints one line per button.
#[derive(Debug, Default)]
pub(crate) struct TextHost;

impl RenderHost<String, ()> for TextHost {
    fn clip(&mut self, window: &ClipWindow) {
        println!(
            "clip      {:>7.1} x {:<7.1}            over {:.2}s",
            window.extent.width, window.extent.height, window.animation.duration
        );
    }

    fn action(
        &mut self,
        action: &ActionDescriptor<String, ()>,
        placement: &ActionPlacement,
        _shape: ButtonShape,
        _button_size: f64,
    ) {
        println!(
            "{:<9} ({:>7.1}, {:>7.1}) rot {:>6.1} scale {:.0} delay {:.2}s{}",
            action.icon(),
            placement.offset.x,
            placement.offset.y,
            placement.rotation,
            placement.scale,
            placement.delay(),
            if placement.enabled { "" } else { " (disabled)" },
        );
    }

    fn primary(
        &mut self,
        placement: &PrimaryPlacement,
        expanded: bool,
        _shape: ButtonShape,
        _button_size: f64,
    ) {
        println!(
            "primary   ({:>7.1}, {:>7.1}) {}",
            placement.offset.x,
            placement.offset.y,
            if expanded { "expanded" } else { "collapsed" },
        );
    }
}

/// Accumulates an SVG document with the primary anchor at the center.
#[derive(Debug)]
pub(crate) struct SvgHost {
    side: f64,
    body: String,
}

impl SvgHost {
    /// Sizes the canvas so `count` actions at `pitch` fit in any direction.
    pub(crate) fn new(count: usize, pitch: f64) -> Self {
        let side = 2.0 * pitch * (count as f64 + 1.0);
        Self {
            side,
            body: String::new(),
        }
    }

    fn anchor(&self) -> Point {
        Point::new(self.side * 0.5, self.side * 0.5)
    }

    /// Returns the finished document.
    pub(crate) fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0}\" height=\"{0}\" viewBox=\"0 0 {0} {0}\">\n{1}</svg>\n",
            self.side, self.body
        )
    }
}

impl RenderHost<String, ()> for SvgHost {
    fn clip(&mut self, window: &ClipWindow) {
        let _ = writeln!(
            self.body,
            "  <!-- clip {} x {} -->",
            window.extent.width, window.extent.height
        );
    }

    fn action(
        &mut self,
        action: &ActionDescriptor<String, ()>,
        placement: &ActionPlacement,
        shape: ButtonShape,
        button_size: f64,
    ) {
        let to_canvas = Affine::translate(self.anchor().to_vec2()) * placement.transform();
        let path = to_canvas * shape.outline(Point::ORIGIN, button_size);
        let center = placement.center(self.anchor());
        let _ = writeln!(
            self.body,
            "  <path d=\"{}\" fill=\"#4a90d9\" opacity=\"{}\"/>",
            path.to_svg(),
            placement.opacity
        );
        let _ = writeln!(
            self.body,
            "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"9\" text-anchor=\"middle\">{}</text>",
            center.x,
            center.y,
            action.icon()
        );
    }

    fn primary(
        &mut self,
        placement: &PrimaryPlacement,
        expanded: bool,
        shape: ButtonShape,
        button_size: f64,
    ) {
        let to_canvas = Affine::translate(self.anchor().to_vec2()) * placement.transform();
        let path = to_canvas * shape.outline(Point::ORIGIN, button_size);
        let fill = if expanded { "#d94a4a" } else { "#333333" };
        let _ = writeln!(self.body, "  <path d=\"{}\" fill=\"{fill}\"/>", path.to_svg());
    }
}
