//! Per-page reveal controller

use super::{IntersectionEntry, RevealEffect, RevealState, RevealTarget, ViewportObserver, DEFAULT_THRESHOLD};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

/// Browsers report ratios like 0.0999 for a 10% crossing
const RATIO_TOLERANCE: f64 = 1e-3;

/// Tracks the reveal set of a single page.
///
/// Built once per page with [`RevealController::builder`] and torn down when
/// the page unmounts. Without a viewport observer the controller fails open
/// and reveals every section as soon as it registers.
pub struct RevealController<H> {
    targets: HashMap<H, RevealTarget>,
    observer: Option<Box<dyn ViewportObserver<H>>>,
    on_reveal: Option<RevealEffect<H>>,
    threshold: f64,
    stagger: Duration,
    torn_down: bool,
}

/// Builder for [`RevealController`]
pub struct RevealControllerBuilder<H> {
    observer: Option<Box<dyn ViewportObserver<H>>>,
    on_reveal: Option<RevealEffect<H>>,
    threshold: f64,
    stagger: Duration,
}

impl<H> Default for RevealControllerBuilder<H> {
    fn default() -> Self {
        Self {
            observer: None,
            on_reveal: None,
            threshold: DEFAULT_THRESHOLD,
            stagger: Duration::ZERO,
        }
    }
}

impl<H> RevealControllerBuilder<H>
where
    H: Eq + Hash + Clone + Debug,
{
    /// Visible fraction required to reveal, clamped to `0.0..=1.0`
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    /// Delay added per entry position within one batch of crossings
    pub fn stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn observer(mut self, observer: impl ViewportObserver<H> + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Use the observer if the platform offers one, otherwise fail open
    pub fn maybe_observer(mut self, observer: Option<Box<dyn ViewportObserver<H>>>) -> Self {
        self.observer = observer;
        self
    }

    pub fn on_reveal(mut self, effect: impl FnMut(&H, Duration) + 'static) -> Self {
        self.on_reveal = Some(Box::new(effect));
        self
    }

    pub fn build(self) -> RevealController<H> {
        if self.observer.is_none() {
            tracing::debug!("No viewport observer available, sections reveal on registration");
        }

        RevealController {
            targets: HashMap::new(),
            observer: self.observer,
            on_reveal: self.on_reveal,
            threshold: self.threshold,
            stagger: self.stagger,
            torn_down: false,
        }
    }
}

impl<H> RevealController<H>
where
    H: Eq + Hash + Clone + Debug,
{
    pub fn builder() -> RevealControllerBuilder<H> {
        RevealControllerBuilder::default()
    }

    /// Add a section to the reveal set. Duplicate handles are ignored.
    pub fn register(&mut self, handle: H) {
        if self.torn_down {
            tracing::debug!(?handle, "Ignoring registration after teardown");
            return;
        }
        if self.targets.contains_key(&handle) {
            return;
        }

        self.targets.insert(handle.clone(), RevealTarget::default());

        match self.observer.as_mut() {
            Some(observer) => observer.observe(&handle, self.threshold),
            None => self.reveal(&handle, Duration::ZERO),
        }
    }

    /// Apply a batch of crossings reported by the viewport platform
    pub fn on_intersections<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = IntersectionEntry<H>>,
    {
        if self.torn_down {
            return;
        }

        for (index, entry) in entries.into_iter().enumerate() {
            if !entry.is_intersecting || entry.ratio + RATIO_TOLERANCE < self.threshold {
                continue;
            }
            let delay = self.stagger.saturating_mul(index as u32);
            self.reveal(&entry.handle, delay);
        }
    }

    /// Drop a section whose element left the document
    pub fn forget(&mut self, handle: &H) {
        let Some(target) = self.targets.remove(handle) else {
            return;
        };
        if !target.revealed {
            if let Some(observer) = self.observer.as_mut() {
                observer.unobserve(handle);
            }
        }
    }

    /// Stop observing and discard the whole reveal set
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.disconnect();
        }
        tracing::debug!(sections = self.targets.len(), "Reveal set torn down");

        self.observer = None;
        self.on_reveal = None;
        self.targets.clear();
        self.torn_down = true;
    }

    pub fn state(&self, handle: &H) -> RevealState {
        match self.targets.get(handle) {
            None => RevealState::Unregistered,
            Some(target) if target.revealed => RevealState::Revealed,
            Some(_) => RevealState::Hidden,
        }
    }

    pub fn is_revealed(&self, handle: &H) -> bool {
        self.state(handle).is_revealed()
    }

    pub fn target(&self, handle: &H) -> Option<&RevealTarget> {
        self.targets.get(handle)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Number of sections already revealed
    pub fn revealed_count(&self) -> usize {
        self.targets.values().filter(|t| t.revealed).count()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }

    fn reveal(&mut self, handle: &H, delay: Duration) {
        let Some(target) = self.targets.get_mut(handle) else {
            return;
        };
        if target.revealed {
            return;
        }

        target.revealed = true;
        target.delay = delay;

        if let Some(observer) = self.observer.as_mut() {
            observer.unobserve(handle);
        }
        if let Some(effect) = self.on_reveal.as_mut() {
            effect(handle, delay);
        }
    }
}

impl<H> Drop for RevealController<H> {
    fn drop(&mut self) {
        if !self.torn_down {
            if let Some(observer) = self.observer.as_mut() {
                observer.disconnect();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct ObserverLog {
        observed: Vec<(&'static str, f64)>,
        unobserved: Vec<&'static str>,
        disconnects: usize,
    }

    struct FakeObserver(Rc<RefCell<ObserverLog>>);

    impl ViewportObserver<&'static str> for FakeObserver {
        fn observe(&mut self, handle: &&'static str, threshold: f64) {
            self.0.borrow_mut().observed.push((handle, threshold));
        }

        fn unobserve(&mut self, handle: &&'static str) {
            self.0.borrow_mut().unobserved.push(handle);
        }

        fn disconnect(&mut self) {
            self.0.borrow_mut().disconnects += 1;
        }
    }

    type Reveals = Rc<RefCell<Vec<(&'static str, Duration)>>>;

    fn observed_controller() -> (RevealController<&'static str>, Rc<RefCell<ObserverLog>>, Reveals) {
        let log = Rc::new(RefCell::new(ObserverLog::default()));
        let reveals: Reveals = Rc::new(RefCell::new(Vec::new()));
        let sink = reveals.clone();

        let controller = RevealController::builder()
            .observer(FakeObserver(log.clone()))
            .on_reveal(move |handle, delay| sink.borrow_mut().push((*handle, delay)))
            .build();

        (controller, log, reveals)
    }

    #[test]
    fn test_register_is_idempotent() {
        let (mut controller, log, _) = observed_controller();

        controller.register("hero");
        controller.on_intersections([IntersectionEntry::entered("hero", 0.5)]);
        controller.register("hero");

        assert_eq!(controller.len(), 1);
        assert!(controller.is_revealed(&"hero"));
        assert_eq!(log.borrow().observed, vec![("hero", DEFAULT_THRESHOLD)]);
    }

    #[test]
    fn test_reveal_sequence_counts_each_handle_once() {
        let (mut controller, _, reveals) = observed_controller();
        for handle in ["a", "b", "c"] {
            controller.register(handle);
        }

        controller.on_intersections([IntersectionEntry::entered("b", 0.2)]);
        controller.on_intersections([IntersectionEntry::entered("a", 0.4)]);
        controller.on_intersections([IntersectionEntry::entered("b", 0.9)]);

        assert!(controller.is_revealed(&"a"));
        assert!(controller.is_revealed(&"b"));
        assert_eq!(controller.state(&"c"), RevealState::Hidden);

        let handles: Vec<_> = reveals.borrow().iter().map(|(h, _)| *h).collect();
        assert_eq!(handles, vec!["b", "a"]);
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let (mut controller, log, _) = observed_controller();
        controller.register("stats");

        controller.on_intersections([IntersectionEntry::entered("stats", 0.3)]);
        controller.on_intersections([IntersectionEntry::left("stats")]);
        controller.on_intersections([IntersectionEntry::entered("stats", 0.01)]);

        assert!(controller.is_revealed(&"stats"));
        assert_eq!(log.borrow().unobserved, vec!["stats"]);
    }

    #[test]
    fn test_forget_stops_observing_hidden_sections() {
        let (mut controller, log, reveals) = observed_controller();
        controller.register("card-1");
        controller.register("card-2");
        controller.on_intersections([IntersectionEntry::entered("card-2", 0.5)]);

        controller.forget(&"card-1");
        controller.forget(&"card-2");
        controller.forget(&"card-3");
        controller.on_intersections([IntersectionEntry::entered("card-1", 0.5)]);

        assert!(controller.is_empty());
        assert_eq!(controller.state(&"card-1"), RevealState::Unregistered);
        assert_eq!(log.borrow().unobserved, vec!["card-2", "card-1"]);
        assert_eq!(reveals.borrow().len(), 1);
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let (mut controller, _, reveals) = observed_controller();
        controller.register("footer");

        controller.on_intersections([IntersectionEntry::entered("footer", 0.05)]);
        assert_eq!(controller.state(&"footer"), RevealState::Hidden);

        // Browsers report crossings a hair under the threshold
        controller.on_intersections([IntersectionEntry::entered("footer", 0.0999)]);
        assert!(controller.is_revealed(&"footer"));
        assert_eq!(reveals.borrow().len(), 1);
    }

    #[test]
    fn test_unregistered_events_are_ignored() {
        let (mut controller, _, reveals) = observed_controller();
        controller.on_intersections([IntersectionEntry::entered("ghost", 1.0)]);

        assert_eq!(controller.state(&"ghost"), RevealState::Unregistered);
        assert!(controller.is_empty());
        assert!(reveals.borrow().is_empty());
    }

    #[test]
    fn test_teardown_stops_all_mutation() {
        let (mut controller, log, reveals) = observed_controller();
        controller.register("a");
        controller.register("b");
        controller.on_intersections([IntersectionEntry::entered("a", 1.0)]);

        controller.teardown();
        controller.teardown();

        controller.on_intersections([IntersectionEntry::entered("b", 1.0)]);
        controller.register("c");

        assert!(controller.is_torn_down());
        assert!(controller.is_empty());
        assert!(!controller.is_observing());
        assert_eq!(controller.state(&"b"), RevealState::Unregistered);
        assert_eq!(log.borrow().disconnects, 1);
        assert_eq!(log.borrow().observed.len(), 2);
        assert_eq!(reveals.borrow().len(), 1);
    }

    #[test]
    fn test_drop_disconnects_observer() {
        let (controller, log, _) = observed_controller();
        drop(controller);
        assert_eq!(log.borrow().disconnects, 1);
    }

    #[test]
    fn test_fail_open_without_observer() {
        let reveals: Reveals = Rc::new(RefCell::new(Vec::new()));
        let sink = reveals.clone();
        let mut controller = RevealController::builder()
            .on_reveal(move |handle: &&'static str, delay| sink.borrow_mut().push((*handle, delay)))
            .build();

        controller.register("a");

        assert!(controller.is_revealed(&"a"));
        assert_eq!(*reveals.borrow(), vec![("a", Duration::ZERO)]);
    }

    #[test]
    fn test_stagger_follows_batch_order() {
        let log = Rc::new(RefCell::new(ObserverLog::default()));
        let reveals: Reveals = Rc::new(RefCell::new(Vec::new()));
        let sink = reveals.clone();
        let mut controller = RevealController::builder()
            .stagger(Duration::from_millis(100))
            .observer(FakeObserver(log))
            .on_reveal(move |handle, delay| sink.borrow_mut().push((*handle, delay)))
            .build();

        for handle in ["one", "two", "three"] {
            controller.register(handle);
        }
        controller.on_intersections([
            IntersectionEntry::entered("three", 0.5),
            IntersectionEntry::left("one"),
            IntersectionEntry::entered("two", 0.5),
        ]);

        assert_eq!(
            *reveals.borrow(),
            vec![
                ("three", Duration::ZERO),
                ("two", Duration::from_millis(200)),
            ]
        );
        assert_eq!(
            controller.target(&"two").map(|t| t.delay),
            Some(Duration::from_millis(200))
        );
        assert_eq!(controller.revealed_count(), 2);
    }

    #[test]
    fn test_threshold_is_clamped() {
        let controller = RevealController::<u32>::builder().threshold(4.0).build();
        assert_eq!(controller.threshold(), 1.0);

        let controller = RevealController::<u32>::builder().threshold(f64::NAN).build();
        assert_eq!(controller.threshold(), DEFAULT_THRESHOLD);
    }
}
