// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Builds a floating action menu from the command line, expands it and
//! prints the computed placements, optionally writing an SVG snapshot.
//!
//! ```text
//! fab_layout linear --alignment trailing --count 4
//! fab_layout radial --alignment center --count 6 --svg menu.svg
//! fab_layout radial --select 1
//! ```

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use understory_action_menu::{
    ActionLayout, ActionList, ArcAlignment, FloatingActionMenu, LayoutConfig, LinearAlignment,
    LinearExpandLayout, RadialArcLayout,
};

mod hosts;

use hosts::{SvgHost, TextHost};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LayoutKind {
    Linear,
    Radial,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Direction {
    Leading,
    Trailing,
    Top,
    Bottom,
    TopLeading,
    TopTrailing,
    BottomLeading,
    BottomTrailing,
    Center,
}

impl Direction {
    fn linear(self) -> Option<LinearAlignment> {
        match self {
            Self::Leading => Some(LinearAlignment::Leading),
            Self::Trailing => Some(LinearAlignment::Trailing),
            Self::Top => Some(LinearAlignment::Top),
            Self::Bottom => Some(LinearAlignment::Bottom),
            _ => None,
        }
    }

    fn arc(self) -> ArcAlignment {
        match self {
            Self::Leading => ArcAlignment::Leading,
            Self::Trailing => ArcAlignment::Trailing,
            Self::Top => ArcAlignment::Top,
            Self::Bottom => ArcAlignment::Bottom,
            Self::TopLeading => ArcAlignment::TopLeading,
            Self::TopTrailing => ArcAlignment::TopTrailing,
            Self::BottomLeading => ArcAlignment::BottomLeading,
            Self::BottomTrailing => ArcAlignment::BottomTrailing,
            Self::Center => ArcAlignment::Center,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Which layout engine to use
    #[arg(value_enum)]
    layout: LayoutKind,

    /// Expansion direction (linear) or arc preset (radial)
    #[arg(short, long, value_enum)]
    alignment: Option<Direction>,

    /// Number of secondary actions
    #[arg(short = 'n', long, default_value_t = 3)]
    count: usize,

    /// Edge length of every button
    #[arg(long, default_value_t = 50.0)]
    button_size: f64,

    /// Gap between adjacent buttons (linear only)
    #[arg(long, default_value_t = 8.0)]
    spacing: f64,

    /// Leave the menu collapsed instead of expanding it
    #[arg(long)]
    collapsed: bool,

    /// Tap the action at this index after expanding
    #[arg(long)]
    select: Option<usize>,

    /// Write an SVG snapshot of the final state to this path
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn actions(count: usize) -> ActionList<String> {
    let mut list = ActionList::new();
    for index in 0..count {
        let label = format!("action-{index}");
        let logged = label.clone();
        list.push(label, (), move || log::info!("selected {logged}"));
    }
    list
}

fn run<L: ActionLayout>(
    mut menu: FloatingActionMenu<L, String>,
    args: &Args,
) -> Result<(), Box<dyn Error>> {
    if !args.collapsed {
        menu.tap_primary();
    }
    menu.render(&mut TextHost::default());
    println!("settles after {:.2}s", menu.settle_time());

    if let Some(index) = args.select {
        if !menu.tap_action_at(index) {
            return Err(format!("action {index} is not selectable").into());
        }
        println!("after selecting action {index}:");
        menu.render(&mut TextHost::default());
    }

    if let Some(path) = &args.svg {
        let mut host = SvgHost::new(menu.actions().len(), menu.layout().config().pitch());
        menu.render(&mut host);
        std::fs::write(path, host.finish())?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = LayoutConfig {
        button_size: args.button_size,
        spacing: args.spacing,
        ..LayoutConfig::new(())
    };
    config.validate()?;

    match args.layout {
        LayoutKind::Linear => {
            let alignment = match args.alignment {
                Some(direction) => direction
                    .linear()
                    .ok_or_else(|| format!("{direction:?} is not a linear direction"))?,
                None => LinearAlignment::default(),
            };
            let layout = LinearExpandLayout::new(config.with_alignment(alignment));
            run(FloatingActionMenu::new(layout, actions(args.count)), &args)
        }
        LayoutKind::Radial => {
            let alignment = args.alignment.map(Direction::arc).unwrap_or_default();
            let layout = RadialArcLayout::new(config.with_alignment(alignment));
            run(FloatingActionMenu::new(layout, actions(args.count)), &args)
        }
    }
}
