use super::Entry;

/// Decides which section is active from the batches the observer delivers.
///
/// Within one batch every intersecting record overwrites the active id, so
/// whichever intersecting record arrives last wins. No "most visible"
/// ranking is attempted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionSpy {
    ids: Vec<String>,
}

impl SectionSpy {
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for id in ids.into_iter().map(Into::into) {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self { ids: unique }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    /// Active id before anything has been measured.
    pub fn initial(&self) -> String {
        self.ids.first().cloned().unwrap_or_default()
    }

    /// Keeps `current` if it still names a section, otherwise falls back to
    /// the first one.
    pub fn reconcile(&self, current: &str) -> String {
        if self.contains(current) {
            current.to_string()
        } else {
            self.initial()
        }
    }

    /// Looks up the region for every id, silently skipping the ones that
    /// don't resolve.
    pub fn resolve<E>(&self, mut lookup: impl FnMut(&str) -> Option<E>) -> Vec<E> {
        self.ids.iter().filter_map(|id| lookup(id)).collect()
    }

    /// The id to activate after `batch`, if any record in it intersects.
    pub fn pick(&self, batch: &[Entry<String>]) -> Option<String> {
        batch
            .iter()
            .filter(|entry| entry.is_intersecting && self.contains(&entry.target))
            .last()
            .map(|entry| entry.target.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seen(id: &str, is_intersecting: bool) -> Entry<String> {
        Entry::new(id.to_string(), is_intersecting, if is_intersecting { 0.5 } else { 0.0 })
    }

    #[test]
    fn starts_on_first_id() {
        let spy = SectionSpy::new(["a", "b", "c"]);
        assert_eq!(spy.initial(), "a");
        assert_eq!(SectionSpy::new(Vec::<String>::new()).initial(), "");
    }

    #[test]
    fn unresolved_sections_keep_the_initial_id() {
        let spy = SectionSpy::new(["a", "b", "c"]);
        let resolved: Vec<&str> = spy.resolve(|_| None);
        assert!(resolved.is_empty());
        assert_eq!(spy.reconcile(&spy.initial()), "a");
    }

    #[test]
    fn resolve_skips_missing_regions() {
        let spy = SectionSpy::new(["verdict", "ghost", "risk"]);
        let resolved = spy.resolve(|id| (id != "ghost").then(|| id.len()));
        assert_eq!(resolved, vec![7, 4]);
    }

    #[test]
    fn last_intersecting_record_in_batch_wins() {
        let spy = SectionSpy::new(["a", "b", "c"]);
        let batch = vec![seen("b", true), seen("c", true)];
        assert_eq!(spy.pick(&batch), Some("c".to_string()));

        let batch = vec![seen("c", true), seen("b", true), seen("a", false)];
        assert_eq!(spy.pick(&batch), Some("b".to_string()));
    }

    #[test]
    fn batch_without_intersections_keeps_current() {
        let spy = SectionSpy::new(["a", "b"]);
        assert_eq!(spy.pick(&[seen("a", false), seen("b", false)]), None);
    }

    #[test]
    fn ids_outside_the_set_are_never_picked() {
        let spy = SectionSpy::new(["x", "y"]);
        assert_eq!(spy.pick(&[seen("a", true)]), None);
        assert_eq!(spy.pick(&[seen("x", true), seen("a", true)]), Some("x".to_string()));
    }

    #[test]
    fn changing_ids_drops_stale_active_section() {
        let old = SectionSpy::new(["a", "b", "c"]);
        let active = old.pick(&[seen("c", true)]).unwrap();

        let new = SectionSpy::new(["x", "y"]);
        assert_eq!(new.reconcile(&active), "x");
        assert_eq!(new.pick(&[seen("c", true)]), None);

        let overlapping = SectionSpy::new(["b", "c"]);
        assert_eq!(overlapping.reconcile(&active), "c");
    }

    #[test]
    fn duplicate_ids_are_collapsed() {
        let spy = SectionSpy::new(["a", "b", "a"]);
        assert_eq!(spy.ids(), &["a".to_string(), "b".to_string()][..]);
    }
}
