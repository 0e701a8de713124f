//! Home page

use super::{BROCHURE_NAME, BROCHURE_PATH};
use crate::components::*;
use crate::reveal::{provide_reveal_scope, Reveal};
use crate::scroll::use_scroll_state;
use leptos::*;
use std::time::Duration;
use weerlo_core::scroll::HERO_PARALLAX_RATE;

const REVEAL_STAGGER: Duration = Duration::from_millis(100);

const CLIENTS: &[&str] = &["Rio Tinto", "BHP", "Fortescue", "Newcrest", "Alcoa", "Wesfarmers"];

const HERO_STATS: &[(&str, &str, &str)] = &[
    ("Zero", "CapEx Model", "Investment Required"),
    ("100%", "Indigenous", "Owned & Operated"),
    ("57%", "Bearing Failures", "Prevented"),
    ("5 Days", "Fast Shipping", "Australia Wide"),
];

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    position: &'static str,
    company: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Weerlo's automated lubrication solutions have transformed our maintenance operations, \
                reducing downtime by 60% while supporting Indigenous business.",
        author: "Sarah Chen",
        position: "Operations Manager",
        company: "Mining Corp Australia",
    },
    Testimonial {
        quote: "The RFID technology and cultural approach Weerlo brings sets them apart. \
                Professional, reliable, and authentically Indigenous-owned.",
        author: "David Williams",
        position: "Plant Supervisor",
        company: "Industrial Systems Ltd",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    provide_reveal_scope(REVEAL_STAGGER);
    let scroll = use_scroll_state();
    let hero_transform = move || scroll.get().parallax_transform(HERO_PARALLAX_RATE);

    view! {
        <div class="min-h-screen">
            // Hero
            <section class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gradient-hero">
                <div class="absolute inset-0 pattern-indigenous opacity-10" style:transform=hero_transform/>
                <div class="absolute inset-0 flex items-center justify-center pointer-events-none">
                    <img
                        src=LOGO_PATH
                        alt=""
                        aria-hidden="true"
                        class="w-72 h-72 sm:w-96 sm:h-96 lg:w-[600px] lg:h-[600px] opacity-10 object-contain grayscale"
                    />
                </div>
                <div class="absolute top-20 left-10 w-32 h-32 bg-primary/10 rounded-full blur-3xl animate-float"/>
                <div class="absolute bottom-32 right-16 w-48 h-48 bg-secondary/10 rounded-full blur-3xl animate-float"/>

                <div class="container-custom relative z-10">
                    <div class="max-w-7xl mx-auto text-center mt-24 md:mt-36 animate-fade-in">
                        <div class="inline-flex items-center gap-3 bg-white/10 backdrop-blur-sm border border-white/20 rounded-full px-8 py-4 mb-8">
                            <span class="text-sm font-medium text-white">"Indigenous-Owned • Premium Lubrication Solutions"</span>
                        </div>
                        <h1 class="heading-hero mb-8 text-white">
                            "Automated Lubrication"<br/>
                            <span class="text-gradient-fire">"Solutions & Indigenous Innovation"</span>
                        </h1>
                        <p class="text-base md:text-lg mb-12 text-white/90 max-w-4xl mx-auto">
                            "Weerlo is a leading Indigenous-owned supplier of automated lubrication systems in Australia, "
                            "delivering advanced maintenance technology with a unique zero-CapEx model and an ESG-driven approach. "
                            "We help heavy industries reduce downtime, cut maintenance costs, and improve safety through precise, "
                            "reliable lubrication automation."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-6 justify-center mb-16">
                            <LinkButton href="/our-technology" variant=ButtonVariant::OrangeGradient>"Our Technology →"</LinkButton>
                            <LinkButton href="/esg-impact" variant=ButtonVariant::OutlineEarth>"ESG Impact"</LinkButton>
                            <LinkButton href="/contact" variant=ButtonVariant::OutlineEarth>"Get Quote"</LinkButton>
                        </div>

                        <div class="grid grid-cols-2 md:grid-cols-4 gap-8 max-w-5xl mx-auto mb-16">
                            {HERO_STATS.iter().map(|&(value, label, subtext)| view! {
                                <StatCard value=value label=label subtext=subtext/>
                            }).collect_view()}
                        </div>

                        <div class="mb-8">
                            <p class="text-sm text-white/60 mb-6">"Trusted by Australia's Leading Companies"</p>
                            <div class="flex flex-wrap justify-center items-center gap-8 opacity-60">
                                {CLIENTS.iter().map(|client| view! {
                                    <div class="px-6 py-3 bg-white/10 rounded-lg backdrop-blur-sm">
                                        <span class="text-white/80 font-medium text-sm">{*client}</span>
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // Technology
            <section class="section-padding bg-background">
                <div class="container-custom">
                    <Reveal class="text-center mb-12">
                        <SectionHeading
                            title="RFID Easylube®"
                            highlight="Solutions"
                            subtitle="Advanced automated lubrication technology with complete visibility and control"
                        />
                    </Reveal>
                    <div class="grid lg:grid-cols-2 gap-16 items-center max-w-7xl mx-auto">
                        <div class="space-y-8">
                            <Reveal animation="fade-in-left" class="card-premium border-l-4 border-l-primary pl-8">
                                <h3 class="text-xl font-bold text-primary mb-4">"RFID & NFC Technology"</h3>
                                <p class="text-body mb-6">
                                    "EasyLube® single-point automatic lubricator ensures each bearing receives the right amount "
                                    "of grease at the right time, eliminating guesswork. Preventing both under-lubrication and "
                                    "over-greasing with RFID tracking for complete equipment visibility."
                                </p>
                                <a
                                    href=BROCHURE_PATH
                                    download=BROCHURE_NAME
                                    class=button_class(ButtonVariant::OrangeGradient, ButtonSize::Default, "")
                                >
                                    "Download Brochure"
                                </a>
                            </Reveal>
                            <Reveal animation="fade-in-left" class="card-premium border-l-4 border-l-secondary pl-8">
                                <h3 class="text-xl font-bold text-secondary mb-4">"Zero CapEx Model"</h3>
                                <p class="text-body mb-6">
                                    "Upgrade to automatic lubricators with no upfront capital expense. Weerlo provides drive units "
                                    "free of charge under a consumables plan (100% OpEx). Pay only for grease cartridges and batteries "
                                    "at competitive rates, turning lubrication into a predictable operating cost."
                                </p>
                                <LinkButton href="/our-technology" variant=ButtonVariant::OutlineEarth>"Learn More"</LinkButton>
                            </Reveal>
                        </div>
                        <Reveal animation="fade-in-right">
                            <div class="w-full h-96 bg-gradient-to-br from-primary/20 via-secondary/10 to-ochre/20 rounded-3xl flex items-center justify-center border border-white/20 shadow-2xl">
                                <div class="text-center">
                                    <span class="text-white font-medium text-lg">"RFID Technology Showcase"</span>
                                    <p class="text-white/70 text-sm mt-2">"Interactive Product Demo"</p>
                                </div>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            // Testimonials
            <section class="section-padding bg-gradient-subtle">
                <div class="container-custom">
                    <Reveal class="text-center mb-12">
                        <SectionHeading title="What Our" highlight="Clients Say"/>
                    </Reveal>
                    <div class="grid md:grid-cols-2 gap-8 max-w-6xl mx-auto">
                        {TESTIMONIALS.iter().map(|t| view! {
                            <Reveal class="hover-lift">
                                <TestimonialCard quote=t.quote author=t.author position=t.position company=t.company/>
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Call to action
            <section class="section-padding bg-gradient-hero">
                <div class="container-custom">
                    <Reveal class="max-w-4xl mx-auto text-center">
                        <h2 class="heading-section text-white mb-8">
                            "Ready to Transform Your "<span class="text-primary">"Lubrication Strategy?"</span>
                        </h2>
                        <p class="text-large text-white/90 mb-12">
                            "Contact our Indigenous-owned team for a customized automated lubrication solution that meets your specific needs."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-6 justify-center">
                            <LinkButton href="/contact" variant=ButtonVariant::HeroPrimary size=ButtonSize::Hero class="group">
                                "Get Your Quote →"
                            </LinkButton>
                            <a
                                href=BROCHURE_PATH
                                download=BROCHURE_NAME
                                class=button_class(ButtonVariant::OrangeGradient, ButtonSize::Hero, "")
                            >
                                "Download Brochure"
                            </a>
                        </div>
                    </Reveal>
                </div>
            </section>
        </div>
    }
}
