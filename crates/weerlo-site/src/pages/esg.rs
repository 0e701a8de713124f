//! ESG impact page

use crate::components::*;
use crate::reveal::{provide_reveal_scope, Reveal};
use leptos::*;
use std::time::Duration;

const ESG_METRICS: &[(&str, &str, &str)] = &[
    ("40%", "Environmental", "Reduction in lubricant waste through precision delivery"),
    ("85%", "Social", "Indigenous workforce participation rate"),
    ("100%", "Governance", "Compliance with cultural protocols and safety standards"),
];

const SUSTAINABILITY_BENEFITS: &[&str] = &[
    "Reduced lubricant consumption by up to 80%",
    "Minimized environmental contamination risks",
    "Extended equipment lifespan reducing waste",
    "Lower carbon footprint through efficiency",
    "Compliance with environmental regulations",
    "Sustainable procurement practices",
];

const COMMUNITY_IMPACTS: &[(&str, &str)] = &[
    ("Employment Creation", "Direct employment opportunities for Indigenous Australians in technical roles"),
    ("Skills Development", "Training programs in advanced automation and lubrication technology"),
    ("Cultural Preservation", "Supporting Indigenous cultural activities and traditional knowledge sharing"),
    ("Economic Development", "Contributing to Indigenous economic sovereignty and community prosperity"),
];

const PROCUREMENT_BENEFITS: &[(&str, &str)] = &[
    ("Compliance Support", "Meet government and corporate Indigenous procurement requirements with certified documentation"),
    ("Measurable Impact", "Receive detailed reporting on social and economic impact outcomes from your partnership"),
    ("Technical Excellence", "Access to premium technology and expertise without compromising on quality or service"),
];

const COMPLIANCE_AREAS: &[(&str, &str)] = &[
    ("ISO 14001", "Environmental Management Systems certification ensuring systematic environmental protection"),
    ("Indigenous Procurement Policy", "Certified supplier for government and corporate Indigenous procurement requirements"),
    ("Reconciliation Action Plan", "Committed to reconciliation through practical actions and meaningful partnerships"),
    ("Supply Nation", "Certified Indigenous business contributing to economic reconciliation"),
];

#[component]
pub fn EsgPage() -> impl IntoView {
    provide_reveal_scope(Duration::ZERO);

    view! {
        <div class="min-h-screen pt-20">
            <section class="py-20 bg-gradient-hero">
                <Reveal class="container mx-auto px-6 max-w-5xl text-center">
                    <h1 class="heading-hero mb-8 text-white">
                        "Sustainable Solutions for "<span class="text-primary">"Country"</span>" & Community"
                    </h1>
                    <p class="text-base md:text-lg text-white/90 leading-relaxed mb-12 max-w-4xl mx-auto">
                        "Weerlo Services delivers measurable ESG outcomes through Indigenous ownership, "
                        "environmental stewardship, and community investment while providing world-class "
                        "automated lubrication solutions."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-6 justify-center">
                        <LinkButton href="/contact" variant=ButtonVariant::HeroPrimary size=ButtonSize::Hero>"Partner With Us →"</LinkButton>
                        <LinkButton href="#impact-metrics" variant=ButtonVariant::OutlineEarth size=ButtonSize::Hero>"View Impact Data"</LinkButton>
                    </div>
                </Reveal>
            </section>

            <section id="impact-metrics" class="py-20 bg-background">
                <div class="container mx-auto px-6 max-w-6xl">
                    <Reveal>
                        <SectionHeading
                            title="Measurable"
                            highlight="ESG Impact"
                            subtitle="Our Indigenous-owned business model creates tangible environmental, social, and governance outcomes"
                        />
                    </Reveal>
                    <div class="grid md:grid-cols-3 gap-8">
                        {ESG_METRICS.iter().map(|&(value, title, description)| view! {
                            <Reveal class="card-premium text-center">
                                <div class="text-4xl font-bold text-primary mb-2">{value}</div>
                                <h3 class="text-xl font-bold text-foreground mb-3">{title}</h3>
                                <p class="text-body text-sm">{description}</p>
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Environmental
            <section class="py-20 bg-gradient-subtle">
                <div class="container mx-auto px-6 max-w-7xl grid lg:grid-cols-2 gap-16 items-center">
                    <Reveal animation="fade-in-left">
                        <h2 class="heading-section">"Protecting "<span class="text-gradient-earth">"Country"</span></h2>
                        <p class="text-large mb-8">
                            "Our automated lubrication systems significantly reduce environmental impact through "
                            "precise delivery, minimizing waste and contamination risks. This aligns with Indigenous "
                            "values of caring for Country and sustainable resource management."
                        </p>
                        <div class="card-premium mb-8">
                            <h3 class="text-xl font-bold text-foreground mb-4">"Sustainability Benefits"</h3>
                            <CheckList items=SUSTAINABILITY_BENEFITS/>
                        </div>
                        <LinkButton href="/our-technology" variant=ButtonVariant::OutlineEarth>"Explore Technology"</LinkButton>
                    </Reveal>
                    <Reveal animation="fade-in-right">
                        <div class="w-full h-96 bg-gradient-to-br from-primary/20 via-secondary/10 to-ochre/20 rounded-3xl flex flex-col items-center justify-center">
                            <span class="text-foreground font-medium text-lg">"Environmental Impact"</span>
                            <p class="text-muted-foreground text-sm mt-2">"Sustainable Solutions"</p>
                        </div>
                    </Reveal>
                </div>
            </section>

            // Community
            <section class="py-20 bg-background">
                <div class="container mx-auto px-6 max-w-7xl">
                    <Reveal>
                        <SectionHeading
                            title="Community"
                            highlight="Impact"
                            subtitle="Creating lasting positive change for Indigenous communities across Australia"
                        />
                    </Reveal>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {COMMUNITY_IMPACTS.iter().map(|&(title, description)| view! {
                            <Reveal>
                                <FeatureCard title=title description=description/>
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Procurement
            <section class="py-20 bg-gradient-subtle">
                <div class="container mx-auto px-6 max-w-7xl grid lg:grid-cols-2 gap-16 items-center">
                    <Reveal animation="fade-in-left" class="card-premium">
                        <h3 class="text-2xl font-bold text-primary mb-4">"Indigenous Procurement Partner"</h3>
                        <p class="text-body mb-6">
                            "Partnering with Weerlo Services helps your organization meet Indigenous procurement "
                            "targets while accessing world-class automated lubrication technology and expertise."
                        </p>
                        <CheckList items=&["Supply Nation Certified Business", "Indigenous Workforce Development", "RAP Alignment & Support"]/>
                    </Reveal>
                    <Reveal animation="fade-in-right">
                        <h2 class="heading-section">
                            "Indigenous "<span class="text-gradient-earth">"Procurement"</span>" Benefits"
                        </h2>
                        <p class="text-large mb-8">
                            "When you choose Weerlo Services, you're not just getting premium automated lubrication "
                            "solutions. You're supporting Indigenous economic development and contributing to "
                            "meaningful reconciliation outcomes."
                        </p>
                        <div class="space-y-6">
                            {PROCUREMENT_BENEFITS.iter().map(|&(title, description)| view! {
                                <div>
                                    <h4 class="font-bold text-foreground mb-1">{title}</h4>
                                    <p class="text-body text-sm">{description}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    </Reveal>
                </div>
            </section>

            // Compliance
            <section class="py-20 bg-background">
                <div class="container mx-auto px-6 max-w-7xl">
                    <Reveal>
                        <SectionHeading
                            title="Compliance &"
                            highlight="Standards"
                            subtitle="Meeting the highest standards in governance, compliance, and cultural protocols"
                        />
                    </Reveal>
                    <div class="grid md:grid-cols-2 gap-8">
                        {COMPLIANCE_AREAS.iter().map(|&(standard, description)| view! {
                            <Reveal>
                                <FeatureCard title=standard description=description/>
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-20 bg-gradient-hero">
                <Reveal class="container mx-auto px-6 max-w-4xl text-center">
                    <h2 class="heading-section text-white mb-8">
                        "Partner for "<span class="text-primary">"Positive Impact"</span>
                    </h2>
                    <p class="text-large text-white/90 mb-12">
                        "Join leading Australian companies who choose Weerlo Services for premium technology "
                        "solutions that deliver measurable ESG and Indigenous procurement outcomes."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-6 justify-center">
                        <LinkButton href="/contact" variant=ButtonVariant::HeroPrimary size=ButtonSize::Hero>"Start Partnership →"</LinkButton>
                        <LinkButton href="/about" variant=ButtonVariant::Outline size=ButtonSize::Hero>"Our Story"</LinkButton>
                    </div>
                </Reveal>
            </section>
        </div>
    }
}
