//! Toast notifications

use leptos::*;
use std::time::Duration;
use weerlo_core::{Notice, NoticeLevel, Notifier};

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Queue of visible toasts, provided once by the app shell
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn push(&self, notice: Notice) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, notice: Notice) {
        let id = self.push(notice);

        #[cfg(feature = "hydrate")]
        {
            let toaster = *self;
            set_timeout(move || toaster.dismiss(id), TOAST_LIFETIME);
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, TOAST_LIFETIME);
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(provide_toaster)
}

#[component]
pub fn Toasts() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="fixed bottom-6 right-6 z-[100] flex flex-col gap-3 w-full max-w-sm" aria-live="polite">
            <For
                each=move || toaster.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let accent = match toast.notice.level {
                        NoticeLevel::Success => "border-l-4 border-primary",
                        NoticeLevel::Error => "border-l-4 border-destructive",
                    };
                    let id = toast.id;
                    view! {
                        <div class=format!("bg-background shadow-xl rounded-xl p-4 flex items-start gap-3 {}", accent) role="status">
                            <div class="flex-1">
                                <p class="font-semibold text-foreground">{toast.notice.title}</p>
                                <p class="text-sm text-muted-foreground">{toast.notice.message}</p>
                            </div>
                            <button
                                class="text-muted-foreground hover:text-foreground"
                                aria-label="Dismiss"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_queues_and_dismiss_removes() {
        let runtime = create_runtime();
        let toaster = Toaster::new();

        toaster.notify(Notice::success("Message Sent Successfully", "Thanks"));
        toaster.notify(Notice::error("Message Not Sent", "Try again"));

        let toasts = toaster.toasts().get_untracked();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[1].notice.level, NoticeLevel::Error);

        toaster.dismiss(toasts[0].id);
        let remaining = toaster.toasts().get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].notice.title, "Message Not Sent");

        runtime.dispose();
    }
}
