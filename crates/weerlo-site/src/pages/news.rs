//! News page

use crate::components::*;
use crate::reveal::{provide_reveal_scope, Reveal};
use leptos::*;
use std::time::Duration;

pub const ALL_CATEGORIES: &str = "All";

pub const CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "Technology",
    "Company News",
    "Case Study",
    "Community",
    "Sustainability",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Article {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
}

const FEATURED: Article = Article {
    title: "Weerlo Services Expands RFID Technology Across Australia's Mining Sector",
    excerpt: "Our Indigenous-owned company announces major expansion of automated lubrication solutions, \
              bringing cutting-edge RFID technology to mining operations across remote Australia.",
    date: "March 15, 2024",
    category: "Technology",
    read_time: "5 min read",
};

pub const ARTICLES: &[Article] = &[
    Article {
        title: "Partnership with Rio Tinto Delivers 60% Maintenance Cost Reduction",
        excerpt: "Comprehensive case study reveals significant operational improvements through \
                  Easylube® automated lubrication systems implementation.",
        date: "March 8, 2024",
        category: "Case Study",
        read_time: "3 min read",
    },
    Article {
        title: "Weerlo Services Achieves Supply Nation Certification",
        excerpt: "Official recognition as certified Indigenous business opens new opportunities for \
                  corporate procurement partnerships.",
        date: "February 28, 2024",
        category: "Company News",
        read_time: "2 min read",
    },
    Article {
        title: "RFID Technology Revolutionizes Equipment Monitoring",
        excerpt: "Advanced tracking capabilities provide unprecedented visibility into lubrication \
                  system performance across industrial applications.",
        date: "February 20, 2024",
        category: "Technology",
        read_time: "4 min read",
    },
    Article {
        title: "Indigenous Workforce Development Program Launches",
        excerpt: "New training initiative creates technical career pathways for Indigenous \
                  Australians in automated lubrication technology.",
        date: "February 10, 2024",
        category: "Community",
        read_time: "3 min read",
    },
    Article {
        title: "ESG Impact Report Shows Measurable Environmental Benefits",
        excerpt: "Annual sustainability report highlights 40% reduction in lubricant waste and \
                  significant environmental improvements.",
        date: "January 30, 2024",
        category: "Sustainability",
        read_time: "6 min read",
    },
    Article {
        title: "Expansion into Western Australia's Remote Mining Operations",
        excerpt: "Strategic growth brings automated lubrication solutions to some of Australia's \
                  most challenging industrial environments.",
        date: "January 15, 2024",
        category: "Company News",
        read_time: "3 min read",
    },
];

/// Articles shown for the selected category, in publication order
pub fn filter_articles(articles: &[Article], category: &str) -> Vec<Article> {
    articles
        .iter()
        .filter(|a| category == ALL_CATEGORIES || a.category == category)
        .copied()
        .collect()
}

#[component]
fn ArticleCard(article: Article) -> impl IntoView {
    view! {
        <Reveal class="card-premium hover-lift flex flex-col h-full">
            <article class="flex flex-col h-full">
                <div class="h-40 bg-gradient-to-br from-primary/20 to-secondary/20 rounded-xl mb-6"></div>
                <div class="flex items-center gap-4 text-sm text-muted-foreground mb-3">
                    <span>{article.date}</span>
                    <span>{article.read_time}</span>
                </div>
                <span class="inline-block self-start px-3 py-1 bg-primary/10 text-primary rounded-full text-xs font-semibold mb-4">
                    {article.category}
                </span>
                <h3 class="text-xl font-bold text-foreground mb-3">{article.title}</h3>
                <p class="text-body text-sm flex-1">{article.excerpt}</p>
            </article>
        </Reveal>
    }
}

#[component]
pub fn NewsPage() -> impl IntoView {
    provide_reveal_scope(Duration::ZERO);
    let (category, set_category) = create_signal(ALL_CATEGORIES);

    view! {
        <div class="min-h-screen pt-20">
            <section class="py-20 bg-gradient-hero">
                <Reveal class="container mx-auto px-6 max-w-4xl text-center">
                    <h1 class="heading-hero mb-8 text-white">
                        "News & "<span class="text-primary">"Announcements"</span>
                    </h1>
                    <p class="text-base md:text-lg text-white/90 leading-relaxed">
                        "Stay updated with the latest developments in automated lubrication technology, "
                        "company milestones, and Indigenous business success stories."
                    </p>
                </Reveal>
            </section>

            // Featured
            <section class="py-20 bg-background">
                <div class="container mx-auto px-6 max-w-7xl">
                    <Reveal class="card-premium grid lg:grid-cols-2 gap-12 items-center">
                        <div>
                            <div class="flex flex-wrap items-center gap-4 text-sm text-muted-foreground mb-4">
                                <span>{FEATURED.date}</span>
                                <span>{FEATURED.read_time}</span>
                                <span class="px-3 py-1 bg-primary/10 text-primary rounded-full text-xs font-semibold">
                                    {FEATURED.category}
                                </span>
                            </div>
                            <h2 class="text-3xl font-bold text-foreground mb-4">{FEATURED.title}</h2>
                            <p class="text-large">{FEATURED.excerpt}</p>
                        </div>
                        <div class="w-full h-72 bg-gradient-to-br from-primary/20 via-secondary/10 to-ochre/20 rounded-3xl flex items-center justify-center">
                            <span class="text-foreground font-medium">"Featured Article"</span>
                        </div>
                    </Reveal>
                </div>
            </section>

            // Category filter
            <section class="py-8 bg-gradient-subtle">
                <div class="container mx-auto px-6 flex flex-wrap justify-center gap-4">
                    {CATEGORIES.iter().map(|&name| {
                        let class = move || if category.get() == name {
                            "px-6 py-3 rounded-full text-sm font-medium transition-all duration-300 bg-primary text-primary-foreground shadow-lg"
                        } else {
                            "px-6 py-3 rounded-full text-sm font-medium transition-all duration-300 bg-white/50 text-foreground hover:bg-primary hover:text-primary-foreground hover:shadow-lg"
                        };
                        view! {
                            <button class=class aria-pressed=move || (category.get() == name).to_string() on:click=move |_| set_category.set(name)>
                                {name}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </section>

            <section class="py-20 bg-background">
                <div class="container mx-auto px-6 max-w-7xl grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        let articles = filter_articles(ARTICLES, category.get());
                        if articles.is_empty() {
                            view! { <p class="text-body col-span-full text-center">"No articles in this category yet."</p> }.into_view()
                        } else {
                            articles
                                .into_iter()
                                .map(|article| view! { <ArticleCard article=article/> })
                                .collect_view()
                        }
                    }}
                </div>
            </section>

            <section class="py-20 bg-gradient-hero">
                <Reveal class="container mx-auto px-6 max-w-3xl text-center">
                    <h2 class="heading-section text-white mb-6">
                        "Stay "<span class="text-primary">"Informed"</span>
                    </h2>
                    <p class="text-large text-white/90 mb-8">
                        "Subscribe to our newsletter for the latest updates on technology innovations, "
                        "company news, and Indigenous business success stories."
                    </p>
                    <NewsletterForm dark=true/>
                    <p class="text-sm text-white/60 mt-4">"We respect your privacy. Unsubscribe at any time."</p>
                </Reveal>
            </section>
        </div>
    }
}
