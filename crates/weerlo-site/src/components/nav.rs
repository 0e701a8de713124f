//! Site navigation

use super::LOGO_PATH;
use crate::scroll::use_scroll_state;
use leptos::*;
use leptos_router::*;
use weerlo_core::scroll::NAV_SCROLLED_OFFSET;

pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About Us"),
    ("/our-technology", "Our Technology"),
    ("/esg-impact", "ESG Impact"),
    ("/news", "News"),
    ("/contact", "Contact"),
];

/// Navigation entries highlight on an exact path match only
pub fn is_active(current: &str, href: &str) -> bool {
    let current = current.trim_end_matches('/');
    let href = href.trim_end_matches('/');
    current == href
}

#[component]
pub fn SiteNav() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let pathname = use_location().pathname;
    let scroll = use_scroll_state();

    let nav_class = move || {
        let shadow = if scroll.get().is_past(NAV_SCROLLED_OFFSET) { "shadow-2xl" } else { "shadow-xl" };
        format!("fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-tertiary border-b border-border/20 {}", shadow)
    };

    view! {
        <nav class=nav_class>
            <div class="container-custom">
                <div class="flex items-center justify-between h-20 lg:h-24">
                    // Logo
                    <a href="/" class="flex items-center space-x-4 group">
                        <img
                            src=LOGO_PATH
                            alt="Weerlo Services"
                            class="h-16 lg:h-20 w-auto transition-all duration-300 group-hover:scale-105"
                        />
                    </a>

                    // Desktop Nav
                    <div class="hidden lg:flex items-center space-x-8 xl:space-x-12">
                        {NAV_ITEMS.iter().map(|&(href, label)| {
                            let class = move || {
                                if is_active(&pathname.get(), href) {
                                    "relative py-2 px-1 font-medium transition-all duration-300 text-primary"
                                } else {
                                    "relative py-2 px-1 font-medium transition-all duration-300 text-white hover:text-primary"
                                }
                            };
                            view! {
                                <a href=href class=class>
                                    <span class="relative z-10">{label}</span>
                                </a>
                            }
                        }).collect_view()}
                        <a href="/contact" class="btn-hero-primary ml-6">"Get Quote"</a>
                    </div>

                    // Mobile menu button
                    <button
                        class="lg:hidden p-3 rounded-xl transition-all duration-300 text-white hover:text-primary hover:bg-white/10"
                        aria-label="Toggle navigation"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <Show
                            when=move || menu_open.get()
                            fallback=|| view! {
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                </svg>
                            }
                        >
                            <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                            </svg>
                        </Show>
                    </button>
                </div>

                // Mobile menu
                <Show when=move || menu_open.get()>
                    <div class="lg:hidden py-6 space-y-1 bg-white/95 backdrop-blur-lg rounded-2xl mx-4 mb-4 shadow-2xl border border-border/50">
                        {NAV_ITEMS.iter().map(|&(href, label)| {
                            let class = move || {
                                if is_active(&pathname.get(), href) {
                                    "block py-4 px-6 mx-2 rounded-xl font-medium bg-primary text-primary-foreground shadow-lg"
                                } else {
                                    "block py-4 px-6 mx-2 rounded-xl font-medium text-foreground hover:bg-muted hover:text-primary"
                                }
                            };
                            view! {
                                <a href=href class=class on:click=move |_| set_menu_open.set(false)>
                                    {label}
                                </a>
                            }
                        }).collect_view()}
                        <div class="px-2 pt-4">
                            <a href="/contact" class="btn-hero-primary w-full justify-center" on:click=move |_| set_menu_open.set(false)>
                                "Get Quote"
                            </a>
                        </div>
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_path_match() {
        assert!(is_active("/", "/"));
        assert!(is_active("/news/", "/news"));
        assert!(!is_active("/news", "/"));
        assert!(!is_active("/esg-impact", "/esg"));
    }

    #[test]
    fn test_nav_routes_unique() {
        let mut hrefs: Vec<_> = NAV_ITEMS.iter().map(|(href, _)| *href).collect();
        hrefs.sort();
        hrefs.dedup();
        assert_eq!(hrefs.len(), NAV_ITEMS.len());
    }
}
