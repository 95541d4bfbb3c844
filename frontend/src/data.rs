//! Static report content. Every section reads from one of these modules.

pub mod aquatics;
pub mod competitors;
pub mod diligence;
pub mod esg;
pub mod financials;
pub mod gaps;
pub mod nav;
pub mod pathways;
pub mod risk;
pub mod signals;
pub mod timeline;
pub mod verdicts;

/// Label / headline / body card used by several sections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Card {
    pub label: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_targets_are_unique_section_ids() {
        let ids: Vec<&str> = nav::NAV_ITEMS.iter().map(|item| item.id).collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.first(), Some(&nav::VERDICT));
        assert_eq!(ids.last(), Some(&nav::TIMELINE));
    }

    #[test]
    fn scores_fit_their_scales() {
        assert!(verdicts::VERDICTS.iter().all(|v| v.score <= 10 && v.bar_width <= 100));
        assert!(competitors::COMPETITORS.iter().all(|c| c.score <= 10));
        assert!(signals::SIGNALS.iter().all(|s| s.width <= 100));
    }

    #[test]
    fn verdict_bars_track_scores() {
        for verdict in verdicts::VERDICTS {
            assert_eq!(u32::from(verdict.bar_width), u32::from(verdict.score) * 10);
        }
    }

    #[test]
    fn esg_highlights_appear_in_their_card() {
        for card in esg::ESG_CARDS {
            for highlight in card.highlights {
                assert!(card.body.contains(highlight), "{highlight:?} missing from {}", card.label);
            }
        }
    }
}
