//! Contact page

use crate::components::*;
use crate::reveal::{provide_reveal_scope, Reveal};
use leptos::*;
use std::time::Duration;
use weerlo_core::FormSchema;

const CONTACT_INFO: &[(&str, &[&str])] = &[
    ("Head Office", &["Pinjarra WA 6208", "Australia"]),
    ("Phone", &["1800 WEERLO (1800 933 756)", "Call for maintenance solutions expert"]),
    ("Email", &["info@weerlo.com.au", "Send RFQ or tender documents"]),
    ("Business Hours", &["Mon - Fri: 7:00 AM - 6:00 PM", "24/7 Emergency Support"]),
];

const SERVICE_AREAS: &[&str] = &[
    "Western Australia",
    "Northern Territory",
    "Queensland",
    "New South Wales",
    "Victoria",
    "South Australia",
    "Tasmania",
    "Remote & Regional Areas",
];

#[component]
fn ContactForm() -> impl IntoView {
    let form = use_form(FormSchema::contact());
    let pending = form.pending();

    view! {
        <form
            class="space-y-6"
            on:submit=move |ev: ev::SubmitEvent| {
                ev.prevent_default();
                form.submit();
            }
        >
            <div class="grid md:grid-cols-2 gap-6">
                <FormFields form=form/>
            </div>
            <button
                type="submit"
                class=button_class(ButtonVariant::HeroPrimary, ButtonSize::Lg, "w-full")
                disabled=move || pending.get()
            >
                {move || if pending.get() { "Sending..." } else { "Send Message →" }}
            </button>
            <p class="text-sm text-muted-foreground text-center">
                "We'll respond within 24 hours during business days. For urgent matters, please call us directly."
            </p>
        </form>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    provide_reveal_scope(Duration::ZERO);

    view! {
        <div class="min-h-screen pt-20">
            <section class="py-20 bg-gradient-hero">
                <Reveal class="container mx-auto px-6 max-w-4xl text-center">
                    <h1 class="heading-hero mb-8 text-white">
                        "Contact "<span class="text-primary">"Weerlo Services"</span>
                    </h1>
                    <p class="text-base md:text-lg text-white/90 leading-relaxed mb-12">
                        "Ready to transform your lubrication strategy? Our Indigenous-owned team is here to provide "
                        "expert consultation and customized automated lubrication solutions for your specific needs."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-6 justify-center">
                        <LinkButton href="#contact-form" variant=ButtonVariant::HeroPrimary size=ButtonSize::Hero>"Get Your Quote →"</LinkButton>
                        <LinkButton href="tel:1800933756" variant=ButtonVariant::OutlineEarth size=ButtonSize::Hero>"Call Now"</LinkButton>
                    </div>
                </Reveal>
            </section>

            <section class="py-20 bg-background">
                <div class="container mx-auto px-6 max-w-7xl">
                    <Reveal>
                        <SectionHeading
                            title="How to"
                            highlight="Reach Us"
                            subtitle="Multiple ways to connect with our team across Australia"
                        />
                    </Reveal>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {CONTACT_INFO.iter().map(|&(title, details)| view! {
                            <Reveal class="card-premium text-center">
                                <h3 class="text-xl font-bold text-foreground mb-4">{title}</h3>
                                {details.iter().map(|detail| view! {
                                    <p class="text-body text-sm">{*detail}</p>
                                }).collect_view()}
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <section id="contact-form" class="py-20 bg-gradient-subtle">
                <div class="container mx-auto px-6 max-w-7xl grid lg:grid-cols-2 gap-16">
                    <Reveal animation="fade-in-left" class="card-premium">
                        <h3 class="text-2xl font-bold text-foreground mb-8">"Send Us a Message"</h3>
                        <ContactForm/>
                    </Reveal>
                    <Reveal animation="fade-in-right" class="space-y-8">
                        <div class="card-premium">
                            <h3 class="text-2xl font-bold text-foreground mb-6">"Our Location"</h3>
                            <div class="w-full h-64 bg-gradient-to-br from-primary/20 to-secondary/20 rounded-2xl flex flex-col items-center justify-center mb-6">
                                <span class="text-foreground font-medium">"Pinjarra WA Office"</span>
                            </div>
                            <div class="space-y-4 text-body text-sm">
                                <div>
                                    <p class="font-semibold text-foreground">"Weerlo Services Pty Ltd"</p>
                                    <p>"Office & Training Facility in Pinjarra, WA"</p>
                                    <p>"Serving clients Australia-wide"</p>
                                </div>
                                <div>
                                    <p class="font-semibold text-foreground">"Business Hours"</p>
                                    <p>"Monday - Friday: 7:00 AM - 6:00 PM"</p>
                                    <p>"24/7 Emergency Support Available"</p>
                                </div>
                            </div>
                        </div>
                        <div class="card-premium">
                            <h3 class="text-2xl font-bold text-foreground mb-4">"Service Areas"</h3>
                            <p class="text-body mb-6">
                                "We provide automated lubrication solutions across all Australian states and territories, "
                                "including remote and regional areas."
                            </p>
                            <div class="grid grid-cols-2 gap-3">
                                {SERVICE_AREAS.iter().map(|area| view! {
                                    <div class="flex items-center gap-2 text-sm text-body">
                                        <span class="w-2 h-2 bg-primary rounded-full"></span>
                                        {*area}
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>
                    </Reveal>
                </div>
            </section>

            <section class="py-20 bg-gradient-hero">
                <Reveal class="container mx-auto px-6 max-w-4xl text-center">
                    <h2 class="heading-section text-white mb-8">
                        "Need "<span class="text-primary">"Emergency Support?"</span>
                    </h2>
                    <p class="text-large text-white/90 mb-12">
                        "Our 24/7 emergency support team is ready to assist with critical lubrication system issues "
                        "to minimize downtime and keep your operations running smoothly."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-6 justify-center">
                        <LinkButton href="tel:1800933756" variant=ButtonVariant::HeroPrimary size=ButtonSize::Hero>"Emergency: 1800 WEERLO"</LinkButton>
                        <LinkButton href="mailto:support@weerlo.com.au" variant=ButtonVariant::OutlineEarth size=ButtonSize::Hero>"Email Support"</LinkButton>
                    </div>
                </Reveal>
            </section>
        </div>
    }
}
