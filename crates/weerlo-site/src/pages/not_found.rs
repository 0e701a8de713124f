//! Fallback page for unknown paths

use crate::components::*;
use leptos::*;
use leptos_router::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let pathname = use_location().pathname;

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    create_effect(move |_| {
        tracing::warn!("No route for {}", pathname.get());
    });

    view! {
        <div class="min-h-screen pt-20 flex items-center justify-center bg-gradient-subtle">
            <div class="text-center px-6">
                <h1 class="text-6xl font-bold text-primary mb-4">"404"</h1>
                <p class="text-xl text-foreground mb-8">"Oops! Page not found"</p>
                <LinkButton href="/" variant=ButtonVariant::HeroPrimary>"Return to Home"</LinkButton>
            </div>
        </div>
    }
}
