//! Viewport observation: the options and records shared by the reveal tracker
//! and the section spy, plus the DOM-free cores both hooks are built on.

pub mod dom;
pub mod margin;
pub mod reveal;
pub mod session;
pub mod spy;

use thiserror::Error;
use yew::NodeRef;

use crate::config;

pub use dom::Observation;
pub use margin::{Length, RootMargin};
pub use reveal::Reveal;
pub use spy::SectionSpy;

/// Browsers report ratios a hair under the threshold they just crossed.
const RATIO_EPSILON: f64 = 1e-6;

#[derive(Debug, Error, PartialEq)]
pub enum ObserverError {
    #[error("could not create intersection observer: {0}")]
    Create(String),
}

/// Configuration handed to the platform observer.
#[derive(Clone, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: RootMargin,
    /// Alternate scroll container. `None` observes against the viewport.
    pub root: Option<NodeRef>,
}

impl ObserverOptions {
    /// Defaults for one-shot reveal animations.
    pub fn reveal() -> Self {
        Self {
            threshold: config::REVEAL_THRESHOLD,
            root_margin: config::REVEAL_ROOT_MARGIN,
            root: None,
        }
    }

    /// Defaults for active-section tracking in the nav bar.
    pub fn section_spy() -> Self {
        Self {
            threshold: config::SPY_THRESHOLD,
            root_margin: config::SPY_ROOT_MARGIN,
            root: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = clamp_threshold(threshold);
        self
    }

    pub fn with_root_margin(mut self, root_margin: RootMargin) -> Self {
        self.root_margin = root_margin;
        self
    }
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::reveal()
    }
}

/// One record of a delivered batch.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry<T> {
    pub target: T,
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl<T> Entry<T> {
    pub fn new(target: T, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            target,
            is_intersecting,
            ratio,
        }
    }

    /// True when the record counts as "visible" for the given threshold.
    pub fn qualifies(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + RATIO_EPSILON >= threshold
    }

    pub fn map_target<U>(self, f: impl FnOnce(T) -> U) -> Entry<U> {
        Entry {
            target: f(self.target),
            is_intersecting: self.is_intersecting,
            ratio: self.ratio,
        }
    }
}

pub(crate) fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        0.0
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_clamped_into_unit_range() {
        assert_eq!(ObserverOptions::reveal().with_threshold(1.7).threshold, 1.0);
        assert_eq!(ObserverOptions::reveal().with_threshold(-0.2).threshold, 0.0);
        assert_eq!(ObserverOptions::reveal().with_threshold(f64::NAN).threshold, 0.0);
    }

    #[test]
    fn non_intersecting_record_never_qualifies() {
        let entry = Entry::new("hero", false, 1.0);
        assert!(!entry.qualifies(0.0));
    }

    #[test]
    fn ratio_just_under_threshold_still_qualifies() {
        let entry = Entry::new("hero", true, 0.149_999_9);
        assert!(entry.qualifies(0.15));
        assert!(!Entry::new("hero", true, 0.14).qualifies(0.15));
    }

    #[test]
    fn defaults_match_reveal_and_spy_profiles() {
        let reveal = ObserverOptions::default();
        assert_eq!(reveal.threshold, 0.15);
        assert_eq!(reveal.root_margin.to_string(), "0px 0px -50px 0px");
        assert!(reveal.root.is_none());

        let spy = ObserverOptions::section_spy();
        assert_eq!(spy.threshold, 0.3);
        assert_eq!(spy.root_margin.to_string(), "-120px 0px -60% 0px");
    }
}
