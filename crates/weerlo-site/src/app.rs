//! Main application component

use crate::components::*;
use crate::pages::*;
use crate::toast::{provide_toaster, Toasts};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use weerlo_core::PassthroughProcessor;

/// Without scripts nothing would ever add `in-view`
const NOSCRIPT_REVEAL: &str = ".reveal { opacity: 1 !important; transform: none !important; }";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toaster();
    provide_image_processor(PassthroughProcessor);

    view! {
        <Stylesheet id="leptos" href="/pkg/weerlo-site.css"/>
        <Title text="Weerlo Services | Automated Lubrication Solutions"/>
        <Meta
            name="description"
            content="Indigenous-owned supplier of RFID Easylube® automated lubrication systems across Australia."
        />
        <noscript>
            <style>{NOSCRIPT_REVEAL}</style>
        </noscript>
        <Router>
            <div class="min-h-screen bg-background">
                <SiteNav/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/about" view=AboutPage/>
                        <Route path="/our-technology" view=TechnologyPage/>
                        <Route path="/esg-impact" view=EsgPage/>
                        <Route path="/news" view=NewsPage/>
                        <Route path="/contact" view=ContactPage/>
                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </main>
                <SiteFooter/>
                <Toasts/>
            </div>
        </Router>
    }
}
