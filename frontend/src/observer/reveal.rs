use super::{clamp_threshold, Entry};

/// Latch behind reveal-on-scroll: flips to visible once and stays there.
#[derive(Clone, Debug)]
pub struct Reveal {
    threshold: f64,
    visible: bool,
}

impl Reveal {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
            visible: false,
        }
    }

    /// Feeds one delivered batch. Returns `true` only for the batch that
    /// flips the latch; the caller stops observing at that point.
    pub fn observe<T>(&mut self, entries: &[Entry<T>]) -> bool {
        if self.visible {
            return false;
        }
        self.visible = entries.iter().any(|entry| entry.qualifies(self.threshold));
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(is_intersecting: bool, ratio: f64) -> Vec<Entry<()>> {
        vec![Entry::new((), is_intersecting, ratio)]
    }

    #[test]
    fn stays_hidden_until_threshold_is_met() {
        for threshold in [0.0, 0.15, 0.3, 0.5, 1.0] {
            let mut reveal = Reveal::new(threshold);
            if threshold > 0.0 {
                assert!(!reveal.observe(&batch(true, threshold / 2.0)));
            }
            assert!(!reveal.observe(&batch(false, 0.0)));
            assert!(reveal.observe(&batch(true, threshold)));
        }
    }

    #[test]
    fn rising_edge_fires_once() {
        let mut reveal = Reveal::new(0.15);
        assert!(reveal.observe(&batch(true, 0.4)));
        assert!(!reveal.observe(&batch(true, 0.9)));
        assert!(!reveal.observe(&batch(false, 0.0)));
        assert!(!reveal.observe(&batch(true, 1.0)));
    }

    #[test]
    fn empty_batch_changes_nothing() {
        let mut reveal = Reveal::new(0.15);
        assert!(!reveal.observe::<()>(&[]));
        assert!(reveal.observe(&batch(true, 0.15)));
    }

    #[test]
    fn any_qualifying_record_in_batch_counts() {
        let mut reveal = Reveal::new(0.5);
        let entries = vec![Entry::new((), true, 0.6), Entry::new((), true, 0.2)];
        assert!(reveal.observe(&entries));
    }
}
