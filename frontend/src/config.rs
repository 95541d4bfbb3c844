use log::Level;

use crate::observer::{Length, RootMargin};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const DOCUMENT_TITLE: &str = "Xylem Strategic Assessment — HydroCav Pool & Spa";

pub const REVEAL_THRESHOLD: f64 = 0.15;
/// Targets must be 50px past the fold before they count.
pub const REVEAL_ROOT_MARGIN: RootMargin = RootMargin::new(
    Length::Px(0.0),
    Length::Px(0.0),
    Length::Px(-50.0),
    Length::Px(0.0),
);

pub const SPY_THRESHOLD: f64 = 0.3;
/// Ignore the sticky header band and the bottom 60% of the viewport.
pub const SPY_ROOT_MARGIN: RootMargin = RootMargin::new(
    Length::Px(-120.0),
    Length::Px(0.0),
    Length::Percent(-60.0),
    Length::Px(0.0),
);

/// Bars and rings start animating once this much of their card is on screen.
pub const CHART_THRESHOLD: f64 = 0.3;

/// Radius of the competitor score rings, in SVG user units.
pub const RING_RADIUS: f64 = 33.0;
