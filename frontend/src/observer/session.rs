//! What the hooks do while mounted: connect an observer, feed its batches
//! through `Reveal` or `SectionSpy`, and disconnect on teardown.

use log::{debug, warn};

use super::{Entry, ObserverError, Reveal, SectionSpy};

/// The capability set of the platform observer.
pub trait Observer: 'static {
    type Target: Clone + 'static;

    fn observe(&self, target: &Self::Target);
    fn unobserve(&self, target: &Self::Target);
    fn disconnect(&self);
}

/// Receives each delivered batch along with the observer that produced it.
pub type BatchHandler<O> = Box<dyn FnMut(Vec<Entry<<O as Observer>::Target>>, &O)>;

/// An observer held for the lifetime of one mounted component.
///
/// `K` keeps whatever the platform needs alive while the observer is
/// connected (the JS callback, for the DOM). Dropping disconnects.
pub struct Subscription<O: Observer, K = ()> {
    observer: O,
    _keep_alive: K,
}

impl<O: Observer, K> Subscription<O, K> {
    pub fn new(observer: O, keep_alive: K) -> Self {
        Self {
            observer,
            _keep_alive: keep_alive,
        }
    }

    pub fn observe(&self, target: &O::Target) {
        self.observer.observe(target);
    }
}

impl<O: Observer, K> Drop for Subscription<O, K> {
    fn drop(&mut self) {
        self.observer.disconnect();
        debug!("observer disconnected");
    }
}

/// Starts reveal tracking for `target`.
///
/// Nothing is observed when the target is already visible or not mounted.
/// `on_visible` runs once, on the first qualifying batch, and the target is
/// unobserved right after.
pub fn reveal<O, K, C>(
    target: Option<O::Target>,
    threshold: f64,
    already_visible: bool,
    connect: C,
    mut on_visible: impl FnMut() + 'static,
) -> Option<Subscription<O, K>>
where
    O: Observer,
    C: FnOnce(BatchHandler<O>) -> Result<Subscription<O, K>, ObserverError>,
{
    if already_visible {
        return None;
    }
    let target = target?;

    let mut latch = Reveal::new(threshold);
    let observed = target.clone();
    let handler: BatchHandler<O> = Box::new(move |entries, observer| {
        if latch.observe(&entries) {
            on_visible();
            observer.unobserve(&observed);
        }
    });

    match connect(handler) {
        Ok(subscription) => {
            subscription.observe(&target);
            Some(subscription)
        }
        Err(err) => {
            warn!("reveal disabled: {err}");
            None
        }
    }
}

/// Starts section tracking for `ids`.
///
/// `current` is the active id rendered so far; when it is not one of `ids`
/// the first id is reported through `on_active` before anything is
/// observed. Ids that `lookup` cannot resolve are skipped.
pub fn spy<O, K, C>(
    ids: &[String],
    current: &str,
    lookup: impl FnMut(&str) -> Option<O::Target>,
    target_id: impl Fn(&O::Target) -> String + 'static,
    connect: C,
    mut on_active: impl FnMut(String) + 'static,
) -> Option<Subscription<O, K>>
where
    O: Observer,
    C: FnOnce(BatchHandler<O>) -> Result<Subscription<O, K>, ObserverError>,
{
    let spy = SectionSpy::new(ids.iter().cloned());
    let reconciled = spy.reconcile(current);
    if reconciled != current {
        on_active(reconciled);
    }

    let sections = spy.resolve(lookup);
    if sections.is_empty() {
        debug!("scroll spy: none of {} sections are in the document", spy.ids().len());
        return None;
    }

    let handler: BatchHandler<O> = Box::new(move |entries, _| {
        let batch: Vec<Entry<String>> = entries
            .into_iter()
            .map(|entry| entry.map_target(|target| target_id(&target)))
            .collect();
        if let Some(id) = spy.pick(&batch) {
            debug!("active section: {id}");
            on_active(id);
        }
    });

    match connect(handler) {
        Ok(subscription) => {
            for section in &sections {
                subscription.observe(section);
            }
            Some(subscription)
        }
        Err(err) => {
            warn!("scroll spy disabled: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// In-memory observer: records calls and replays batches on demand,
    /// delivering nothing once disconnected.
    #[derive(Clone, Default)]
    struct FakeObserver(Rc<RefCell<Calls>>);

    #[derive(Default)]
    struct Calls {
        observed: Vec<&'static str>,
        unobserved: Vec<&'static str>,
        disconnected: bool,
        handler: Option<BatchHandler<FakeObserver>>,
    }

    impl Observer for FakeObserver {
        type Target = &'static str;

        fn observe(&self, target: &&'static str) {
            self.0.borrow_mut().observed.push(target);
        }

        fn unobserve(&self, target: &&'static str) {
            self.0.borrow_mut().unobserved.push(target);
        }

        fn disconnect(&self) {
            self.0.borrow_mut().disconnected = true;
        }
    }

    impl FakeObserver {
        fn connect(
            &self,
        ) -> impl FnOnce(BatchHandler<FakeObserver>) -> Result<Subscription<FakeObserver>, ObserverError>
        {
            let observer = self.clone();
            move |handler| {
                observer.0.borrow_mut().handler = Some(handler);
                Ok(Subscription::new(observer, ()))
            }
        }

        fn deliver(&self, batch: &[(&'static str, bool, f64)]) {
            if self.0.borrow().disconnected {
                return;
            }
            let Some(mut handler) = self.0.borrow_mut().handler.take() else {
                return;
            };
            let entries = batch
                .iter()
                .map(|&(target, is_intersecting, ratio)| Entry::new(target, is_intersecting, ratio))
                .collect();
            handler(entries, self);
            self.0.borrow_mut().handler = Some(handler);
        }

        fn observed(&self) -> Vec<&'static str> {
            self.0.borrow().observed.clone()
        }

        fn unobserved(&self) -> Vec<&'static str> {
            self.0.borrow().unobserved.clone()
        }

        fn disconnected(&self) -> bool {
            self.0.borrow().disconnected
        }

        fn connected(&self) -> bool {
            self.0.borrow().handler.is_some()
        }
    }

    fn failing_connect(
        _: BatchHandler<FakeObserver>,
    ) -> Result<Subscription<FakeObserver>, ObserverError> {
        Err(ObserverError::Create("IntersectionObserver is not defined".to_string()))
    }

    fn counter() -> (Rc<RefCell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(RefCell::new(0));
        let bump = {
            let count = Rc::clone(&count);
            move || *count.borrow_mut() += 1
        };
        (count, bump)
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(String) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let push = {
            let seen = Rc::clone(&seen);
            move |id| seen.borrow_mut().push(id)
        };
        (seen, push)
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn lookup(present: &'static [&'static str]) -> impl FnMut(&str) -> Option<&'static str> {
        move |id| present.iter().copied().find(|known| *known == id)
    }

    #[test]
    fn reveal_fires_once_and_stops_observing() {
        let observer = FakeObserver::default();
        let (visible, on_visible) = counter();

        let subscription = reveal(Some("hero"), 0.15, false, observer.connect(), on_visible);
        assert!(subscription.is_some());
        assert_eq!(observer.observed(), vec!["hero"]);

        observer.deliver(&[("hero", true, 0.05)]);
        assert_eq!(*visible.borrow(), 0);

        observer.deliver(&[("hero", true, 0.4)]);
        observer.deliver(&[("hero", true, 0.9)]);
        assert_eq!(*visible.borrow(), 1);
        assert_eq!(observer.unobserved(), vec!["hero"]);
    }

    #[test]
    fn unmount_before_reveal_disconnects_without_state_change() {
        let observer = FakeObserver::default();
        let (visible, on_visible) = counter();

        let subscription = reveal(Some("card"), 0.15, false, observer.connect(), on_visible);
        observer.deliver(&[("card", false, 0.0)]);
        drop(subscription);

        assert!(observer.disconnected());
        observer.deliver(&[("card", true, 1.0)]);
        assert_eq!(*visible.borrow(), 0);
        assert!(observer.unobserved().is_empty());
    }

    #[test]
    fn already_visible_tracker_does_not_observe_again() {
        let observer = FakeObserver::default();
        let (visible, on_visible) = counter();

        let subscription = reveal(Some("card"), 0.3, true, observer.connect(), on_visible);
        assert!(subscription.is_none());
        assert!(!observer.connected());
        assert!(observer.observed().is_empty());
        assert_eq!(*visible.borrow(), 0);
    }

    #[test]
    fn unmounted_target_is_a_no_op() {
        let observer = FakeObserver::default();
        let (_, on_visible) = counter();

        let subscription = reveal(None, 0.15, false, observer.connect(), on_visible);
        assert!(subscription.is_none());
        assert!(!observer.connected());
    }

    #[test]
    fn reveal_survives_a_failed_connect() {
        let (visible, on_visible) = counter();
        let subscription = reveal(Some("card"), 0.15, false, failing_connect, on_visible);
        assert!(subscription.is_none());
        assert_eq!(*visible.borrow(), 0);
    }

    #[test]
    fn spy_observes_resolved_sections_only() {
        let observer = FakeObserver::default();
        let (active, on_active) = recorder();

        let subscription = spy(
            &ids(&["a", "b", "c"]),
            "a",
            lookup(&["a", "c"]),
            |target: &&'static str| target.to_string(),
            observer.connect(),
            on_active,
        );
        assert!(subscription.is_some());
        assert_eq!(observer.observed(), vec!["a", "c"]);
        assert!(active.borrow().is_empty());
    }

    #[test]
    fn spy_with_nothing_resolved_keeps_first_id() {
        let observer = FakeObserver::default();
        let (active, on_active) = recorder();

        let subscription = spy(
            &ids(&["a", "b", "c"]),
            "a",
            lookup(&[]),
            |target: &&'static str| target.to_string(),
            observer.connect(),
            on_active,
        );
        assert!(subscription.is_none());
        assert!(!observer.connected());
        assert!(active.borrow().is_empty());
    }

    #[test]
    fn spy_reports_last_intersecting_section_per_batch() {
        let observer = FakeObserver::default();
        let (active, on_active) = recorder();

        let _subscription = spy(
            &ids(&["a", "b", "c"]),
            "a",
            lookup(&["a", "b", "c"]),
            |target: &&'static str| target.to_string(),
            observer.connect(),
            on_active,
        );
        observer.deliver(&[("b", true, 0.4), ("c", true, 0.5)]);
        observer.deliver(&[("a", false, 0.0)]);
        assert_eq!(*active.borrow(), vec!["c".to_string()]);
    }

    #[test]
    fn new_ids_resolve_again_and_drop_stale_section() {
        let first = FakeObserver::default();
        let (active, on_active) = recorder();
        let old = spy(
            &ids(&["a", "b", "c"]),
            "a",
            lookup(&["a", "b", "c", "x", "y"]),
            |target: &&'static str| target.to_string(),
            first.connect(),
            on_active,
        );
        first.deliver(&[("c", true, 0.5)]);
        assert_eq!(*active.borrow(), vec!["c".to_string()]);

        // ids changed: the old subscription is torn down, a new one set up
        drop(old);
        assert!(first.disconnected());

        let second = FakeObserver::default();
        let (after, on_active) = recorder();
        let _new = spy(
            &ids(&["x", "y"]),
            "c",
            lookup(&["a", "b", "c", "x", "y"]),
            |target: &&'static str| target.to_string(),
            second.connect(),
            on_active,
        );
        assert_eq!(*after.borrow(), vec!["x".to_string()]);
        assert_eq!(second.observed(), vec!["x", "y"]);

        second.deliver(&[("c", true, 0.9)]);
        second.deliver(&[("y", true, 0.5)]);
        assert_eq!(*after.borrow(), vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn spy_survives_a_failed_connect() {
        let (active, on_active) = recorder();
        let subscription = spy(
            &ids(&["a"]),
            "a",
            lookup(&["a"]),
            |target: &&'static str| target.to_string(),
            failing_connect,
            on_active,
        );
        assert!(subscription.is_none());
        assert!(active.borrow().is_empty());
    }
}
