//! Company logo

use leptos::*;
use std::rc::Rc;
use weerlo_core::image::process_or_original;
use weerlo_core::{ImageProcessor, PassthroughProcessor};

pub const LOGO_PATH: &str = "/assets/weerlo-logo.png";

/// Processor used by [`ProcessedLogo`]
#[derive(Clone)]
pub struct LogoProcessor(pub Rc<dyn ImageProcessor>);

pub fn provide_image_processor(processor: impl ImageProcessor + 'static) {
    provide_context(LogoProcessor(Rc::new(processor)));
}

/// Logo with its background treated by the configured image processor.
/// Renders dimmed until processing settles on the client.
#[component]
pub fn ProcessedLogo(
    src: &'static str,
    alt: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let processor = use_context::<LogoProcessor>()
        .unwrap_or_else(|| LogoProcessor(Rc::new(PassthroughProcessor)));
    let (processing, set_processing) = create_signal(true);
    let (image_url, set_image_url) = create_signal(src.to_string());

    create_effect(move |_| {
        let image = process_or_original(processor.0.as_ref(), src);
        set_image_url.set(image.url);
        set_processing.set(false);
    });

    view! {
        <div class=move || if processing.get() {
            "transition-opacity duration-300 opacity-50"
        } else {
            "transition-opacity duration-300 opacity-100"
        }>
            <img src=image_url alt=alt class=class/>
        </div>
    }
}
