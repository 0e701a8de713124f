//! Card components for content sections

use leptos::*;

#[component]
pub fn SectionHeading(
    title: &'static str,
    highlight: &'static str,
    #[prop(optional)] subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="heading-section">
                {title}" "<span class="text-gradient-earth">{highlight}</span>
            </h2>
            {(!subtitle.is_empty()).then(|| view! {
                <p class="text-large max-w-3xl mx-auto">{subtitle}</p>
            })}
        </div>
    }
}

#[component]
pub fn StatCard(
    value: &'static str,
    label: &'static str,
    #[prop(optional)] subtext: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center p-6 rounded-2xl bg-white/5 border border-white/10">
            <div class="text-4xl font-bold text-primary mb-2">{value}</div>
            <div class="font-semibold text-white">{label}</div>
            <div class="text-sm text-white/70">{subtext}</div>
        </div>
    }
}

#[component]
pub fn FeatureCard(
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="card-premium hover-lift h-full">
            <h3 class="text-lg font-bold mb-3 text-foreground">{title}</h3>
            <p class="text-body text-sm">{description}</p>
        </div>
    }
}

#[component]
pub fn TestimonialCard(
    quote: &'static str,
    author: &'static str,
    position: &'static str,
    company: &'static str,
) -> impl IntoView {
    view! {
        <div class="card-premium h-full">
            <p class="text-body italic mb-6">"\u{201c}"{quote}"\u{201d}"</p>
            <div>
                <p class="font-semibold text-foreground">{author}</p>
                <p class="text-sm text-muted-foreground">{position}", "{company}</p>
            </div>
        </div>
    }
}

#[component]
pub fn TimelineItem(
    year: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex gap-6">
            <div class="flex-shrink-0 w-20 h-20 bg-gradient-primary rounded-full flex items-center justify-center text-white font-bold">
                {year}
            </div>
            <div>
                <h3 class="text-xl font-bold text-foreground mb-2">{title}</h3>
                <p class="text-body">{description}</p>
            </div>
        </div>
    }
}

#[component]
pub fn CheckList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="space-y-3">
            {items.iter().map(|item| view! {
                <li class="flex items-start gap-3">
                    <span class="text-primary font-bold">"✓"</span>
                    <span class="text-body">{*item}</span>
                </li>
            }).collect_view()}
        </ul>
    }
}
