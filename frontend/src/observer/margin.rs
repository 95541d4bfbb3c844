//! `rootMargin` values handed to the platform observer.

use std::fmt;

/// A single `rootMargin` component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    /// Percent of the root's height (top/bottom) or width (left/right).
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) => write!(f, "{px}px"),
            Length::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Grows (positive) or shrinks (negative) each side of the root box before
/// intersections are computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin::new(
        Length::Px(0.0),
        Length::Px(0.0),
        Length::Px(0.0),
        Length::Px(0.0),
    );

    pub const fn new(top: Length, right: Length, bottom: Length, left: Length) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for RootMargin {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Renders in CSS order: top right bottom left.
impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_margin_renders_all_sides() {
        assert_eq!(RootMargin::ZERO.to_string(), "0px 0px 0px 0px");
        assert_eq!(RootMargin::default(), RootMargin::ZERO);
    }

    #[test]
    fn mixed_units_render_in_css_order() {
        let margin = RootMargin::new(
            Length::Px(-120.0),
            Length::Px(4.5),
            Length::Percent(-60.0),
            Length::Px(0.0),
        );
        assert_eq!(margin.to_string(), "-120px 4.5px -60% 0px");
    }
}
