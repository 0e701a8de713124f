//! Technology page

use super::{BROCHURE_NAME, BROCHURE_PATH};
use crate::components::*;
use crate::reveal::{provide_reveal_scope, Reveal};
use leptos::*;
use std::time::Duration;

const FEATURES: &[(&str, &str)] = &[
    ("LED Status Indicators", "Red-Green LED lights provide instant visual confirmation of unit operation status."),
    ("Superior Battery Life", "Lithium battery technology tested in Australia's extreme temperatures, lasting 1-12 months."),
    ("Quality Assured", "2-year warranty with international certifications and comprehensive safety ratings."),
    ("Proven Pressure", "Tested at 150psi (5-10 bar) with guaranteed lubricant quantity delivery."),
];

const APPLICATIONS: &[(&str, &[&str])] = &[
    ("Heavy Vehicles", &["Trucks & Trailers", "Construction Equipment", "Agricultural Machinery", "Emergency Vehicles"]),
    ("Mining Equipment", &["Excavators & Loaders", "Haul Trucks", "Drilling Equipment", "Processing Plants"]),
    ("Process Industries", &["Manufacturing Lines", "Conveyor Systems", "Pumps & Motors", "Industrial Fans"]),
];

const RFID_CAPABILITIES: &[&str] = &[
    "Real-time status monitoring",
    "Maintenance scheduling alerts",
    "Performance analytics",
    "Digital maintenance records",
];

const BENEFITS: &[&str] = &[
    "Reduced maintenance costs by up to 60%",
    "Improved equipment reliability and uptime",
    "Enhanced worker safety through automation",
    "Precise lubrication delivery every time",
    "Complete traceability with RFID technology",
    "Environmental compliance and sustainability",
    "24/7 remote monitoring capabilities",
    "Flexible lubricant selection for any application",
];

#[component]
pub fn TechnologyPage() -> impl IntoView {
    provide_reveal_scope(Duration::ZERO);

    view! {
        <div class="min-h-screen pt-20">
            <section class="py-20 bg-gradient-hero">
                <Reveal class="container mx-auto px-6 max-w-5xl text-center">
                    <h1 class="heading-hero mb-8 text-white">
                        "Advanced "<span class="text-primary">"Automated"</span><br/>"Lubrication Systems"
                    </h1>
                    <p class="text-base md:text-lg text-white/90 leading-relaxed mb-12 max-w-4xl mx-auto">
                        "As the master distributor of the EasyLube® Automated Lubrication System in Australia, "
                        "we supply state-of-the-art single-point lubricators with complete RFID tracking. "
                        "Our solutions ensure your machinery is always optimally greased with complete visibility and control."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-6 justify-center">
                        <LinkButton href="#brochure-download" variant=ButtonVariant::OrangeGradient>"Download Brochure"</LinkButton>
                        <LinkButton href="/contact" variant=ButtonVariant::OutlineEarth>"Request Demo"</LinkButton>
                    </div>
                </Reveal>
            </section>

            // RFID
            <section class="py-20 bg-background">
                <div class="container mx-auto px-6 max-w-7xl">
                    <Reveal>
                        <SectionHeading title="Complete Visibility &" highlight="Control"/>
                    </Reveal>
                    <div class="grid lg:grid-cols-2 gap-16 items-center">
                        <div class="space-y-8">
                            <Reveal animation="fade-in-left" class="card-premium">
                                <h3 class="text-xl font-bold text-primary mb-4">"RFID & NFC Communication"</h3>
                                <p class="text-body mb-6">
                                    "EasyLube single-point automatic lubricator attaches to lubrication points and dispenses grease "
                                    "at controlled intervals. Units come in multiple sizes (60ml, 150ml, 250ml cartridges) with "
                                    "reusable drive mechanisms and replaceable grease cartridges for minimal waste."
                                </p>
                                <CheckList items=RFID_CAPABILITIES/>
                            </Reveal>
                            <Reveal animation="fade-in-left" class="card-premium">
                                <h3 class="text-xl font-bold text-secondary mb-4">"Complete Flexibility"</h3>
                                <p class="text-body">
                                    "EasyLube applies precise Minimal Quantity Lubrication (MQL) calculations, ensuring just the right "
                                    "amount of lubricant every time. This prevents over-lubrication and under-lubrication while "
                                    "generating necessary pressure to push grease through extended feeder lines up to several meters."
                                </p>
                            </Reveal>
                        </div>
                        <Reveal animation="fade-in-right">
                            <div class="w-full h-96 bg-gradient-to-br from-primary/20 via-secondary/10 to-ochre/20 rounded-3xl flex flex-col items-center justify-center border border-white/20 shadow-2xl">
                                <span class="text-foreground font-medium text-lg">"RFID System Demo"</span>
                                <p class="text-muted-foreground text-sm mt-2">"Interactive Technology Preview"</p>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            // Features
            <section class="py-20 bg-gradient-subtle">
                <div class="container mx-auto px-6 max-w-7xl">
                    <Reveal>
                        <SectionHeading
                            title="Advanced"
                            highlight="Features"
                            subtitle="Cutting-edge technology engineered for Australia's extreme conditions"
                        />
                    </Reveal>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {FEATURES.iter().map(|&(title, description)| view! {
                            <Reveal>
                                <FeatureCard title=title description=description/>
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Applications
            <section class="py-20 bg-background">
                <div class="container mx-auto px-6 max-w-7xl">
                    <Reveal>
                        <SectionHeading
                            title="Industry"
                            highlight="Applications"
                            subtitle="Proven solutions across Australia's most demanding industrial sectors"
                        />
                    </Reveal>
                    <div class="grid md:grid-cols-3 gap-8">
                        {APPLICATIONS.iter().map(|&(title, items)| view! {
                            <Reveal class="card-premium">
                                <h3 class="text-xl font-bold text-foreground mb-6">{title}</h3>
                                <CheckList items=items/>
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Benefits
            <section class="py-20 bg-gradient-subtle">
                <div class="container mx-auto px-6 max-w-7xl">
                    <Reveal>
                        <SectionHeading
                            title="Proven"
                            highlight="Benefits"
                            subtitle="Transform your maintenance operations with measurable results"
                        />
                    </Reveal>
                    <div class="grid lg:grid-cols-2 gap-16 items-center">
                        <Reveal animation="fade-in-left">
                            <CheckList items=BENEFITS/>
                        </Reveal>
                        <Reveal animation="fade-in-right" class="card-premium text-center">
                            <h3 class="text-2xl font-bold text-primary mb-4">"60% Cost Reduction"</h3>
                            <p class="text-body mb-8">
                                "Our clients typically see maintenance cost reductions of 40-60% within the first year "
                                "of implementing Easylube® automated lubrication systems."
                            </p>
                            <div class="grid grid-cols-2 gap-6">
                                <div>
                                    <div class="text-3xl font-bold text-secondary">"95%"</div>
                                    <div class="text-sm text-muted-foreground">"Uptime Improvement"</div>
                                </div>
                                <div>
                                    <div class="text-3xl font-bold text-ochre">"150+"</div>
                                    <div class="text-sm text-muted-foreground">"Days Battery Life"</div>
                                </div>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </section>

            <section id="brochure-download" class="py-20 bg-gradient-hero">
                <Reveal class="container mx-auto px-6 max-w-4xl text-center">
                    <h2 class="heading-section text-white mb-8">
                        "Get the Complete "<span class="text-primary">"Technical Specifications"</span>
                    </h2>
                    <p class="text-large text-white/90 mb-12">
                        "Download our comprehensive brochure with detailed technical specifications, "
                        "application guides, and case studies from Australian implementations."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-6 justify-center">
                        <a
                            href=BROCHURE_PATH
                            download=BROCHURE_NAME
                            class=button_class(ButtonVariant::OrangeGradient, ButtonSize::Hero, "")
                        >
                            "Download PDF Brochure"
                        </a>
                        <LinkButton href="/contact" variant=ButtonVariant::OutlineEarth>"Request Consultation"</LinkButton>
                    </div>
                </Reveal>
            </section>
        </div>
    }
}
