//! Window scroll subscription scoped to the calling component

use leptos::*;
use weerlo_core::ScrollState;

/// Current scroll state, updated while the calling component is mounted.
///
/// The `scroll` listener is added on mount and removed on cleanup.
pub fn use_scroll_state() -> ReadSignal<ScrollState> {
    let (state, set_state) = create_signal(ScrollState::default());

    #[cfg(feature = "hydrate")]
    {
        let current = || window().scroll_y().unwrap_or_default();
        set_state.set(ScrollState::new(current()));

        let handle = window_event_listener(ev::scroll, move |_| {
            set_state.update(|s| s.update(current()));
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_state;

    state
}
