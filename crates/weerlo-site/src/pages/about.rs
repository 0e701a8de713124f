//! About page

use crate::components::*;
use crate::reveal::{provide_reveal_scope, Reveal};
use leptos::*;
use std::time::Duration;

const VALUES: &[(&str, &str)] = &[
    ("Cultural Respect", "Honoring Indigenous heritage while delivering world-class technical solutions"),
    ("Operational Excellence", "Uncompromising commitment to safety, quality, and reliability in every project"),
    ("Community Partnership", "Building lasting relationships that benefit local communities and economic development"),
    ("Environmental Stewardship", "Protecting Country through sustainable practices and environmental responsibility"),
];

const TIMELINE: &[(&str, &str, &str)] = &[
    ("1992", "Easylube® Innovation Begins", "Easylube® pioneers the world's first mechanical single-point automatic lubricator"),
    ("2018", "Weerlo Services Founded", "Established as an Indigenous-owned distributor of premium lubrication solutions"),
    ("2020", "Technology Partnership", "Became exclusive Australian distributor for Easylube® RFID technology"),
    ("2023", "National Expansion", "Expanded operations to serve clients across all Australian states and territories"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    provide_reveal_scope(Duration::ZERO);

    view! {
        <div class="min-h-screen pt-20">
            <section class="py-20 bg-gradient-hero">
                <div class="container mx-auto px-6">
                    <Reveal class="max-w-4xl mx-auto text-center">
                        <h1 class="heading-hero mb-8 text-white">
                            "The Meaning of "<span class="text-primary">"Weerlo"</span>
                        </h1>
                        <p class="text-base md:text-lg text-white/90 leading-relaxed mb-8">
                            "Weerlo Services is more than a company. It's a reflection of culture, resilience, and connection to Country. "
                            "\"Weerlo\" is the word for the bush curlew, a night bird whose call echoes across the Australian bush and is "
                            "often seen as a messenger between physical and spiritual worlds."
                        </p>
                        <p class="text-lg text-white/80 leading-relaxed">
                            "The bush curlew symbolizes awareness, protection, and resilience, qualities that guide our approach to "
                            "business and inspire our commitment to safeguard the industries we serve. As an Indigenous-owned business, "
                            "we build on a foundation of respect for our people, our place, and the knowledge passed down through generations."
                        </p>
                    </Reveal>
                </div>
            </section>

            // Founder
            <section class="py-20 bg-background">
                <div class="container mx-auto px-6 max-w-7xl grid lg:grid-cols-2 gap-16 items-center">
                    <Reveal animation="fade-in-left">
                        <h2 class="heading-section">"Meet Our "<span class="text-gradient-earth">"Founder"</span></h2>
                        <div class="card-premium">
                            <h3 class="text-2xl font-bold text-foreground mb-1">"Lorena Indich"</h3>
                            <p class="text-primary font-semibold mb-4">"Managing Director & Founder"</p>
                            <p class="text-body mb-4">
                                "Lorena Indich, a proud First Nations woman with cultural ties to the Southern Yamatji, Noongar Nations, "
                                "and the Ngadju group of Western Australia. Raised in a family deeply connected to farming and fishing on Country, "
                                "Lorena carries a lifelong understanding of land, sustainability, and community."
                            </p>
                            <p class="text-body">
                                "She brings over 15 years of hands-on experience in mining operations, project delivery, and heavy vehicle "
                                "maintenance, walking in the boots of the workers who keep industry moving. Coupled with a decade in "
                                "commercial banking, she leads Weerlo with cultural integrity and operational know-how."
                            </p>
                        </div>
                    </Reveal>
                    <Reveal animation="fade-in-right">
                        <div class="w-full h-96 bg-gradient-to-br from-primary/20 to-secondary/20 rounded-3xl flex flex-col items-center justify-center">
                            <span class="text-foreground font-semibold text-lg">"Lorena Indich"</span>
                            <p class="text-muted-foreground">"Managing Director"</p>
                        </div>
                    </Reveal>
                </div>
            </section>

            // Mission and vision
            <section class="py-20 bg-gradient-subtle">
                <div class="container mx-auto px-6 max-w-6xl grid lg:grid-cols-2 gap-12">
                    <Reveal animation="fade-in-left" class="card-premium">
                        <h3 class="text-2xl font-bold text-primary mb-4">"Our Mission"</h3>
                        <p class="text-body">
                            "To deliver reliable, advanced automated lubrication systems that improve our clients' operations "
                            "while honoring the land and people. We strive to drive excellence and sustainability in industrial "
                            "maintenance, blending modern technology with cultural respect. This means building strong partnerships "
                            "with customers while creating opportunities for Aboriginal and Torres Strait Islander peoples."
                        </p>
                    </Reveal>
                    <Reveal animation="fade-in-right" class="card-premium">
                        <h3 class="text-2xl font-bold text-secondary mb-4">"Our Vision"</h3>
                        <p class="text-body">
                            "To be a leading and respected Indigenous-owned supplier of safe, innovative lubrication solutions, "
                            "built on integrity, cultural pride, and excellence. We envision a future where Indigenous businesses "
                            "are recognized as leaders in their industries, creating pathways for the next generation where "
                            "cutting-edge industrial maintenance goes hand-in-hand with empowerment of Indigenous communities."
                        </p>
                    </Reveal>
                </div>
            </section>

            // Values
            <section class="py-20 bg-background">
                <div class="container mx-auto px-6 max-w-7xl">
                    <Reveal>
                        <SectionHeading
                            title="Our"
                            highlight="Values"
                            subtitle="Guiding principles that shape every aspect of our business and community relationships"
                        />
                    </Reveal>
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        {VALUES.iter().map(|&(title, description)| view! {
                            <Reveal>
                                <FeatureCard title=title description=description/>
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Timeline
            <section class="py-20 bg-gradient-subtle">
                <div class="container mx-auto px-6 max-w-4xl">
                    <Reveal>
                        <SectionHeading title="Our" highlight="Journey" subtitle="From innovation to Indigenous excellence"/>
                    </Reveal>
                    <div class="space-y-12">
                        {TIMELINE.iter().map(|&(year, title, description)| view! {
                            <Reveal animation="fade-in-left">
                                <TimelineItem year=year title=title description=description/>
                            </Reveal>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-20 bg-gradient-hero">
                <Reveal class="container mx-auto px-6 max-w-4xl text-center">
                    <h2 class="heading-section text-white mb-8">
                        "Partner With "<span class="text-primary">"Weerlo"</span>
                    </h2>
                    <p class="text-large text-white/90 mb-12">
                        "Discover how our Indigenous-owned team can support your operations with premium lubrication solutions."
                    </p>
                    <LinkButton href="/contact" variant=ButtonVariant::HeroPrimary size=ButtonSize::Hero>"Get in Touch →"</LinkButton>
                </Reveal>
            </section>
        </div>
    }
}
