//! Form rendering bound to a form session

use crate::api::{ServerActionDelivery, SubmitForm};
use crate::toast::{use_toaster, Toaster};
use leptos::*;
use weerlo_core::{FieldKind, FieldSpec, FormDelivery, FormSchema, FormSession, Notice, Notifier};

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-input rounded-lg bg-background focus:ring-2 focus:ring-primary focus:border-primary";

/// A mounted form: session state plus its delivery and acknowledgment sinks
#[derive(Clone, Copy)]
pub struct FormHandle<D = ServerActionDelivery> {
    pub session: RwSignal<FormSession>,
    delivery: D,
    toaster: Toaster,
}

impl<D: FormDelivery> FormHandle<D> {
    pub fn new(schema: FormSchema, delivery: D, toaster: Toaster) -> Self {
        Self {
            session: create_rw_signal(FormSession::new(schema)),
            delivery,
            toaster,
        }
    }

    pub fn set_field(&self, name: &str, value: String) {
        self.session.update(|session| {
            if let Err(e) = session.set_field(name, value) {
                tracing::error!("{}", e);
            }
        });
    }

    /// Submit the current record. The session resets whatever happens.
    pub fn submit(&self) {
        let mut current = self.session.get_untracked();
        if let Err(e) = current.submit(&self.delivery, &self.toaster) {
            tracing::debug!("Form hand-off failed: {}", e);
        }
        self.session.set(current);
    }
}

impl FormHandle {
    pub fn pending(&self) -> Signal<bool> {
        self.delivery.action().pending().into()
    }
}

fn undelivered_notice() -> Notice {
    Notice::error(
        "Message Not Delivered",
        "We couldn't deliver your message. Please call 1800 WEERLO or email info@weerlo.com.au.",
    )
}

/// Raise an error toast when the server reports a failed delivery
fn report_server_result(notifier: &impl Notifier, result: Option<Result<(), ServerFnError>>) {
    if let Some(Err(e)) = result {
        tracing::warn!("Form delivery failed on the server: {}", e);
        notifier.notify(undelivered_notice());
    }
}

/// Mount a form session for `schema`, owned by the calling component
pub fn use_form(schema: FormSchema) -> FormHandle {
    let action = create_server_action::<SubmitForm>();
    let toaster = use_toaster();

    create_effect(move |_| report_server_result(&toaster, action.value().get()));

    FormHandle::new(schema, ServerActionDelivery::new(action), toaster)
}

/// Labelled controls for every field of the form's schema
#[component]
pub fn FormFields(form: FormHandle) -> impl IntoView {
    let fields = form
        .session
        .with_untracked(|session| session.schema().fields().to_vec());

    fields
        .into_iter()
        .map(|field| field_view(form, field))
        .collect_view()
}

fn field_view(form: FormHandle, field: FieldSpec) -> View {
    let name = field.name.clone();
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    };

    let value = {
        let name = name.clone();
        move || form.session.with(|s| s.field(&name).unwrap_or_default().to_string())
    };
    let on_input = {
        let name = name.clone();
        move |ev: ev::Event| form.set_field(&name, event_target_value(&ev))
    };

    let control = match field.kind {
        FieldKind::TextArea { rows } => view! {
            <textarea
                id=name.clone()
                name=name.clone()
                rows=rows
                required=field.required
                placeholder=field.placeholder.clone()
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_view(),
        FieldKind::Select { options } => view! {
            <select
                id=name.clone()
                name=name.clone()
                required=field.required
                class=INPUT_CLASS
                prop:value=value
                on:change=on_input
            >
                {options.into_iter().map(|option| view! {
                    <option value=option.value>{option.label}</option>
                }).collect_view()}
            </select>
        }
        .into_view(),
        kind => view! {
            <input
                id=name.clone()
                name=name.clone()
                type=kind.input_type().unwrap_or("text")
                required=field.required
                placeholder=field.placeholder.clone()
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            />
        }
        .into_view(),
    };

    view! {
        <div>
            <label for=name class="text-sm font-medium text-foreground mb-2 block">{label}</label>
            {control}
        </div>
    }
    .into_view()
}

/// Single-field newsletter sign-up
#[component]
pub fn NewsletterForm(#[prop(optional)] dark: bool) -> impl IntoView {
    let form = use_form(FormSchema::newsletter());
    let input_class = if dark {
        "flex-1 px-4 py-3 rounded-lg bg-white/10 border border-white/20 text-white placeholder:text-white/60"
    } else {
        INPUT_CLASS
    };
    let email = move || form.session.with(|s| s.field("email").unwrap_or_default().to_string());

    view! {
        <form
            class="flex flex-col sm:flex-row gap-3"
            on:submit=move |ev: ev::SubmitEvent| {
                ev.prevent_default();
                form.submit();
            }
        >
            <input
                type="email"
                name="email"
                required
                placeholder="Enter your email"
                aria-label="Email address"
                class=input_class
                prop:value=email
                on:input=move |ev| form.set_field("email", event_target_value(&ev))
            />
            <button
                type="submit"
                class="px-6 py-3 bg-primary text-primary-foreground font-semibold rounded-lg hover:bg-primary/90 transition"
                disabled=move || form.pending().get()
            >
                "Subscribe"
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weerlo_core::{FormError, FormResult, NoticeLevel, Submission};

    #[derive(Clone, Copy)]
    struct RecordingDelivery {
        delivered: StoredValue<Vec<Submission>>,
        fail: bool,
    }

    impl RecordingDelivery {
        fn new(fail: bool) -> Self {
            Self {
                delivered: store_value(Vec::new()),
                fail,
            }
        }
    }

    impl FormDelivery for RecordingDelivery {
        fn deliver(&self, submission: &Submission) -> FormResult<()> {
            if self.fail {
                return Err(FormError::Delivery("offline".into()));
            }
            self.delivered.update_value(|d| d.push(submission.clone()));
            Ok(())
        }
    }

    #[test]
    fn test_submit_clears_session_and_acknowledges() {
        let runtime = create_runtime();
        let toaster = Toaster::new();
        let delivery = RecordingDelivery::new(false);
        let form = FormHandle::new(FormSchema::newsletter(), delivery, toaster);

        form.set_field("email", "jane@example.com".to_string());
        form.submit();

        assert!(form.session.with_untracked(|s| s.record().is_blank()));
        let delivered = delivery.delivered.get_value();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].fields.get("email"), Some("jane@example.com"));

        let toasts = toaster.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].notice.level, NoticeLevel::Success);

        runtime.dispose();
    }

    #[test]
    fn test_failed_hand_off_still_clears_session() {
        let runtime = create_runtime();
        let toaster = Toaster::new();
        let form = FormHandle::new(FormSchema::contact(), RecordingDelivery::new(true), toaster);

        form.set_field("name", "Jane".to_string());
        form.submit();

        assert!(form.session.with_untracked(|s| s.record().is_blank()));
        let toasts = toaster.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].notice.level, NoticeLevel::Error);

        runtime.dispose();
    }

    #[test]
    fn test_server_failure_raises_error_toast() {
        let runtime = create_runtime();
        let toaster = Toaster::new();

        report_server_result(&toaster, None);
        report_server_result(&toaster, Some(Ok(())));
        assert!(toaster.toasts().get_untracked().is_empty());

        report_server_result(&toaster, Some(Err(ServerFnError::new("webhook down"))));
        let toasts = toaster.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].notice.title, "Message Not Delivered");

        runtime.dispose();
    }
}
