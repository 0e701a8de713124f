//! Weerlo Services Marketing Site server

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos::get_configuration;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    use weerlo_site::server::{self, AppState, SiteConfig};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "weerlo_site=debug,weerlo_delivery=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let conf = get_configuration(None).await?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let config = SiteConfig::from_env()?;
    let transport = weerlo_delivery::build_transport(&config.delivery)?;

    let state = AppState {
        leptos_options,
        transport,
    };
    let app = server::router(state, &config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Weerlo site listening on http://{}", addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The browser entry point is `weerlo_site::hydrate`
}
