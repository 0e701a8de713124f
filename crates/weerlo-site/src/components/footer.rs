//! Site footer

use super::logo::{ProcessedLogo, LOGO_PATH};
use super::NewsletterForm;
use chrono::{Datelike, Utc};
use leptos::*;

pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> FooterLink {
    FooterLink { label, href }
}

pub const COMPANY_LINKS: &[FooterLink] = &[
    link("About Us", "/about"),
    link("Our Technology", "/our-technology"),
    link("ESG Impact", "/esg-impact"),
    link("News", "/news"),
];

pub const SERVICE_LINKS: &[FooterLink] = &[
    link("RFID Easylube® Systems", "/our-technology"),
    link("Supply & Installation", "/our-technology"),
    link("Maintenance & Support", "/our-technology"),
    link("Emergency Response", "/contact"),
];

pub const SUPPORT_LINKS: &[FooterLink] = &[
    link("Contact Us", "/contact"),
    link("Technical Support", "/contact"),
    link("Product Brochures", "/our-technology"),
    link("Emergency: 1800 WEERLO", "tel:1800933756"),
];

#[component]
fn LinkColumn(title: &'static str, accent: &'static str, links: &'static [FooterLink]) -> impl IntoView {
    view! {
        <div>
            <h3 class=format!("text-lg font-bold mb-6 {}", accent)>{title}</h3>
            <ul class="space-y-3">
                {links.iter().map(|l| view! {
                    <li>
                        <a href=l.href class="text-white/80 hover:text-primary transition-colors text-sm">{l.label}</a>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="bg-tertiary text-white">
            <div class="container mx-auto px-6 py-16">
                <div class="grid lg:grid-cols-5 gap-12">
                    <div class="lg:col-span-2">
                        <a href="/" class="flex items-center space-x-3 mb-6">
                            <ProcessedLogo src=LOGO_PATH alt="Weerlo Services" class="h-16 w-auto"/>
                        </a>
                        <p class="text-white/80 mb-6 leading-relaxed">
                            "Indigenous-owned provider of premium automated lubrication solutions, "
                            "combining cultural values with cutting-edge Easylube® technology across Australia."
                        </p>
                        <div class="space-y-3 text-sm text-white/80">
                            <p>"📍 Pinjarra WA 6208, Australia"</p>
                            <p>
                                "📞 "
                                <a href="tel:1800933756" class="hover:text-primary transition-colors">"1800 WEERLO (1800 933 756)"</a>
                            </p>
                            <p>
                                "✉ "
                                <a href="mailto:info@weerlo.com.au" class="hover:text-primary transition-colors">"info@weerlo.com.au"</a>
                            </p>
                        </div>
                        <div class="mt-8">
                            <h3 class="text-lg font-bold mb-3">"Stay Informed"</h3>
                            <NewsletterForm dark=true/>
                        </div>
                    </div>
                    <LinkColumn title="Company" accent="text-primary" links=COMPANY_LINKS/>
                    <LinkColumn title="Services" accent="text-secondary" links=SERVICE_LINKS/>
                    <LinkColumn title="Support" accent="text-ochre" links=SUPPORT_LINKS/>
                </div>
            </div>

            <div class="border-t border-white/10 bg-tertiary-light">
                <div class="container mx-auto px-6 py-8">
                    <p class="text-sm text-white/80 leading-relaxed">
                        <strong class="text-primary">"Acknowledgment of Country: "</strong>
                        "Weerlo Services acknowledges the Traditional Custodians of the lands across Australia "
                        "on which we operate. We pay our respects to Elders past, present, and emerging, and "
                        "recognise their continuing connection to Country."
                    </p>
                </div>
            </div>

            <div class="border-t border-white/10 bg-tertiary-medium">
                <div class="container mx-auto px-6 py-6 flex flex-col md:flex-row items-center justify-between gap-4 text-sm text-white/60">
                    <div>{format!("© {} Weerlo Services Pty Ltd. All rights reserved.", year)}</div>
                    <div class="flex items-center gap-6">
                        <span>"Indigenous-Owned Business"</span>
                        <span>"Supply Nation Certified"</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
