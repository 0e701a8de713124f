//! Page reveal scopes
//!
//! Each page calls [`provide_reveal_scope`] once. Sections wrapped in
//! [`Reveal`] register with the page's controller when they mount and get the
//! `in-view` class once the browser reports them visible. Browsers without
//! `IntersectionObserver` see every section immediately.

use leptos::*;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;
use weerlo_core::reveal::DEFAULT_THRESHOLD;
use weerlo_core::{IntersectionEntry, RevealController, ViewportObserver};

pub type RevealKey = u32;

/// Revealed sections carry their stagger delay
type RevealFlag = RwSignal<Option<Duration>>;

#[derive(Clone)]
pub struct RevealScope {
    inner: Rc<ScopeInner>,
}

struct ScopeInner {
    controller: RefCell<RevealController<RevealKey>>,
    flags: Rc<RefCell<HashMap<RevealKey, RevealFlag>>>,
    next_key: Cell<RevealKey>,
    #[cfg(feature = "hydrate")]
    elements: platform::Elements,
}

impl ScopeInner {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn on_intersections(&self, entries: Vec<IntersectionEntry<RevealKey>>) {
        self.controller.borrow_mut().on_intersections(entries);
    }
}

impl RevealScope {
    pub fn new(stagger: Duration) -> Self {
        let flags: Rc<RefCell<HashMap<RevealKey, RevealFlag>>> = Rc::default();
        #[cfg(feature = "hydrate")]
        let elements = platform::Elements::default();
        #[cfg(feature = "hydrate")]
        let observed = elements.clone();
        #[cfg(not(feature = "hydrate"))]
        let observed = ();

        let inner = Rc::new_cyclic(|scope: &Weak<ScopeInner>| {
            let sink = flags.clone();
            let controller = RevealController::builder()
                .threshold(DEFAULT_THRESHOLD)
                .stagger(stagger)
                .maybe_observer(viewport_observer(scope.clone(), observed))
                .on_reveal(move |key, delay| {
                    let flag = sink.borrow().get(key).copied();
                    if let Some(flag) = flag {
                        flag.set(Some(delay));
                    }
                })
                .build();

            ScopeInner {
                controller: RefCell::new(controller),
                flags: flags.clone(),
                next_key: Cell::new(0),
                #[cfg(feature = "hydrate")]
                elements: elements.clone(),
            }
        });

        Self { inner }
    }

    /// Reserve a key and visibility flag for a section about to render
    fn section(&self) -> (RevealKey, RevealFlag) {
        let key = self.inner.next_key.get();
        self.inner.next_key.set(key.wrapping_add(1));

        let flag = create_rw_signal(None);
        self.inner.flags.borrow_mut().insert(key, flag);
        (key, flag)
    }

    pub fn register(&self, key: RevealKey) {
        self.inner.controller.borrow_mut().register(key);
    }

    #[cfg(feature = "hydrate")]
    fn attach(&self, key: RevealKey, element: &web_sys::Element) {
        platform::tag(element, key);
        self.inner.elements.borrow_mut().insert(key, element.clone());
        self.register(key);
    }

    /// Forget a section that has unmounted
    pub fn release(&self, key: RevealKey) {
        self.inner.controller.borrow_mut().forget(&key);
        self.inner.flags.borrow_mut().remove(&key);
        #[cfg(feature = "hydrate")]
        self.inner.elements.borrow_mut().remove(&key);
    }

    pub fn tracked(&self) -> usize {
        self.inner.flags.borrow().len()
    }

    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.inner.controller.borrow().is_revealed(&key)
    }

    pub fn teardown(&self) {
        self.inner.controller.borrow_mut().teardown();
        self.inner.flags.borrow_mut().clear();
        #[cfg(feature = "hydrate")]
        self.inner.elements.borrow_mut().clear();
    }
}

#[cfg(feature = "hydrate")]
fn viewport_observer(
    scope: Weak<ScopeInner>,
    elements: platform::Elements,
) -> Option<Box<dyn ViewportObserver<RevealKey>>> {
    platform::IntersectionPlatform::create(scope, elements, DEFAULT_THRESHOLD)
        .map(|p| Box::new(p) as Box<dyn ViewportObserver<RevealKey>>)
}

#[cfg(not(feature = "hydrate"))]
fn viewport_observer(_scope: Weak<ScopeInner>, _elements: ()) -> Option<Box<dyn ViewportObserver<RevealKey>>> {
    None
}

/// Create the reveal scope for the current page and tear it down with it
pub fn provide_reveal_scope(stagger: Duration) -> RevealScope {
    let scope = RevealScope::new(stagger);
    provide_context(scope.clone());

    let cleanup = scope.clone();
    on_cleanup(move || cleanup.teardown());
    scope
}

pub fn use_reveal_scope() -> RevealScope {
    use_context::<RevealScope>().unwrap_or_else(|| provide_reveal_scope(Duration::ZERO))
}

/// Class list of a reveal wrapper
pub fn reveal_class(animation: &str, extra: &str, revealed: bool) -> String {
    let mut class = format!("reveal {}", animation);
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    if revealed {
        class.push_str(" in-view");
    }
    class
}

/// Wrapper that fades its children in once scrolled into view
#[component]
pub fn Reveal(
    /// Entrance animation class: `fade-in-up`, `fade-in-left`, `fade-in-right`
    #[prop(default = "fade-in-up")]
    animation: &'static str,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let scope = use_reveal_scope();
    let (key, flag) = scope.section();
    let node_ref = create_node_ref::<html::Div>();

    let released = scope.clone();
    on_cleanup(move || released.release(key));

    node_ref.on_load(move |_element| {
        #[cfg(feature = "hydrate")]
        scope.attach(key, &_element);
        #[cfg(not(feature = "hydrate"))]
        scope.register(key);
    });

    let class = move || reveal_class(animation, &class, flag.get().is_some());
    let style = move || {
        flag.get()
            .filter(|delay| !delay.is_zero())
            .map(|delay| format!("transition-delay: {}ms", delay.as_millis()))
    };

    view! {
        <div node_ref=node_ref class=class style=style>
            {children()}
        </div>
    }
}

#[cfg(feature = "hydrate")]
mod platform {
    use super::{RevealKey, ScopeInner};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use weerlo_core::{IntersectionEntry, ViewportObserver};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    const KEY_ATTR: &str = "data-reveal-key";

    pub(super) type Elements = Rc<RefCell<HashMap<RevealKey, Element>>>;

    type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    pub(super) fn tag(element: &Element, key: RevealKey) {
        if let Err(e) = element.set_attribute(KEY_ATTR, &key.to_string()) {
            tracing::warn!("Failed to tag reveal section: {:?}", e);
        }
    }

    /// `IntersectionObserver` backed viewport observer
    pub(super) struct IntersectionPlatform {
        observer: IntersectionObserver,
        elements: Elements,
        _callback: Callback,
    }

    impl IntersectionPlatform {
        /// `None` when the browser has no `IntersectionObserver`
        pub(super) fn create(scope: Weak<ScopeInner>, elements: Elements, threshold: f64) -> Option<Self> {
            let window = web_sys::window()?;
            let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                .unwrap_or(false);
            if !supported {
                return None;
            }

            let callback: Callback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                let Some(scope) = scope.upgrade() else {
                    return;
                };
                let batch = entries
                    .iter()
                    .filter_map(|value| {
                        let entry: IntersectionObserverEntry = value.dyn_into().ok()?;
                        let handle = entry.target().get_attribute(KEY_ATTR)?.parse().ok()?;
                        Some(IntersectionEntry {
                            handle,
                            is_intersecting: entry.is_intersecting(),
                            ratio: entry.intersection_ratio(),
                        })
                    })
                    .collect();
                scope.on_intersections(batch);
            });

            let mut options = IntersectionObserverInit::new();
            #[allow(deprecated)]
            options.threshold(&JsValue::from_f64(threshold));

            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => Some(Self {
                    observer,
                    elements,
                    _callback: callback,
                }),
                Err(e) => {
                    tracing::warn!("IntersectionObserver unavailable: {:?}", e);
                    None
                }
            }
        }
    }

    impl ViewportObserver<RevealKey> for IntersectionPlatform {
        fn observe(&mut self, handle: &RevealKey, _threshold: f64) {
            if let Some(element) = self.elements.borrow().get(handle) {
                self.observer.observe(element);
            }
        }

        fn unobserve(&mut self, handle: &RevealKey) {
            if let Some(element) = self.elements.borrow().get(handle) {
                self.observer.unobserve(element);
            }
        }

        fn disconnect(&mut self) {
            self.observer.disconnect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class("fade-in-up", "", false), "reveal fade-in-up");
        assert_eq!(
            reveal_class("fade-in-left", "card-premium", true),
            "reveal fade-in-left card-premium in-view"
        );
    }

    #[test]
    fn test_scope_without_observer_fails_open() {
        let runtime = create_runtime();

        let scope = RevealScope::new(Duration::ZERO);
        let (key, flag) = scope.section();
        scope.register(key);

        assert!(scope.is_revealed(key));
        assert_eq!(flag.get_untracked(), Some(Duration::ZERO));

        scope.teardown();
        assert!(!scope.is_revealed(key));

        runtime.dispose();
    }

    #[test]
    fn test_release_forgets_section() {
        let runtime = create_runtime();

        let scope = RevealScope::new(Duration::ZERO);
        let (first, _) = scope.section();
        let (second, _) = scope.section();
        scope.register(first);
        scope.register(second);

        scope.release(first);

        assert!(!scope.is_revealed(first));
        assert!(scope.is_revealed(second));
        assert_eq!(scope.tracked(), 1);

        runtime.dispose();
    }
}
