//! axum server wiring

use crate::app::App;
use axum::{
    body::Body,
    extract::{FromRef, State},
    http::Request,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use leptos::{provide_context, LeptosOptions};
use leptos_axum::{generate_route_list, handle_server_fns_with_context, LeptosRoutes};
use serde::Serialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use weerlo_delivery::{DeliveryConfig, SharedTransport, TransportResult};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub transport: SharedTransport,
}

impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

/// Site configuration
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub delivery: DeliveryConfig,
    pub assets_dir: String,
}

impl SiteConfig {
    pub fn from_env() -> TransportResult<Self> {
        Ok(Self {
            delivery: DeliveryConfig::from_env()?,
            assets_dir: std::env::var("WEERLO_ASSETS_DIR").unwrap_or_else(|_| "assets".to_string()),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub delivery: String,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        delivery: state.transport.name().to_string(),
    })
}

async fn server_fn_handler(State(state): State<AppState>, request: Request<Body>) -> impl IntoResponse {
    let transport = state.transport.clone();
    handle_server_fns_with_context(move || provide_context(transport.clone()), request).await
}

/// Build the site router
pub fn router(state: AppState, config: &SiteConfig) -> Router {
    let routes = generate_route_list(App);
    let pkg_dir = format!(
        "{}/{}",
        state.leptos_options.site_root, state.leptos_options.site_pkg_dir
    );
    let transport = state.transport.clone();

    Router::new()
        .route("/health", get(health_check))
        .route("/api/*fn_name", post(server_fn_handler))
        .leptos_routes_with_context(
            &state,
            routes,
            move || provide_context(transport.clone()),
            App,
        )
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SubmitForm;
    use async_trait::async_trait;
    use axum::http::{header, StatusCode};
    use leptos::server_fn::ServerFn;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;
    use weerlo_core::{FormRecord, Submission};
    use weerlo_delivery::{LogTransport, Transport, TransportError};

    #[derive(Default)]
    struct CapturingTransport {
        delivered: Mutex<Vec<Submission>>,
        fail: bool,
    }

    impl CapturingTransport {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn delivered(&self) -> Vec<Submission> {
            self.delivered.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for CapturingTransport {
        fn name(&self) -> &str {
            "capture"
        }

        async fn send(&self, submission: &Submission) -> weerlo_delivery::TransportResult<()> {
            if self.fail {
                return Err(TransportError::Status {
                    url: "http://hooks.invalid/forms".to_string(),
                    status: 502,
                });
            }
            self.delivered.lock().unwrap().push(submission.clone());
            Ok(())
        }
    }

    fn test_router(transport: Arc<CapturingTransport>) -> Router {
        let state = AppState {
            leptos_options: LeptosOptions::builder().output_name("weerlo-site").build(),
            transport,
        };
        let config = SiteConfig {
            delivery: DeliveryConfig::default(),
            assets_dir: "assets".to_string(),
        };
        router(state, &config)
    }

    async fn post_submission(router: Router, body: serde_json::Value) -> StatusCode {
        let request = Request::builder()
            .method("POST")
            .uri(SubmitForm::PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        router.oneshot(request).await.unwrap().status()
    }

    fn newsletter_body(email: &str) -> serde_json::Value {
        let fields: FormRecord = [("email", email)].into_iter().collect();
        serde_json::json!({ "submission": Submission::new("newsletter", fields) })
    }

    #[tokio::test]
    async fn test_health_check_reports_transport() {
        let state = AppState {
            leptos_options: LeptosOptions::builder().output_name("weerlo-site").build(),
            transport: Arc::new(LogTransport::new()),
        };

        let Json(health) = health_check(State(state)).await;

        assert_eq!(health.status, "ok");
        assert_eq!(health.delivery, "log");
    }

    #[tokio::test]
    async fn test_router_serves_health() {
        let state = AppState {
            leptos_options: LeptosOptions::builder().output_name("weerlo-site").build(),
            transport: Arc::new(LogTransport::new()),
        };
        let config = SiteConfig {
            delivery: DeliveryConfig::default(),
            assets_dir: "assets".to_string(),
        };

        let response = router(state, &config)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_submit_form_reaches_transport() {
        let transport = Arc::new(CapturingTransport::default());

        let status = post_submission(test_router(transport.clone()), newsletter_body("jane@example.com")).await;

        assert_eq!(status, StatusCode::OK);
        let delivered = transport.delivered();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].form, "newsletter");
        assert_eq!(delivered[0].fields.get("email"), Some("jane@example.com"));
    }

    #[tokio::test]
    async fn test_submit_form_reports_transport_failure() {
        let transport = Arc::new(CapturingTransport::failing());

        let status = post_submission(test_router(transport.clone()), newsletter_body("jane@example.com")).await;

        assert!(status.is_server_error());
        assert!(transport.delivered().is_empty());
    }

    #[tokio::test]
    async fn test_submit_form_rejects_undeclared_forms_and_fields() {
        let transport = Arc::new(CapturingTransport::default());

        let unknown_form = serde_json::json!({
            "submission": {
                "form": "not_a_form",
                "fields": {"not_a_real_field": "x", "admin": "1"},
                "submitted_at": "1999-01-01T00:00:00Z"
            }
        });
        let status = post_submission(test_router(transport.clone()), unknown_form).await;
        assert!(status.is_server_error());

        let extra_field = serde_json::json!({
            "submission": {
                "form": "newsletter",
                "fields": {"email": "jane@example.com", "admin": "1"},
                "submitted_at": "1999-01-01T00:00:00Z"
            }
        });
        let status = post_submission(test_router(transport.clone()), extra_field).await;
        assert!(status.is_server_error());

        assert!(transport.delivered().is_empty());
    }

    #[tokio::test]
    async fn test_submit_form_restamps_submission() {
        let transport = Arc::new(CapturingTransport::default());

        let body = serde_json::json!({
            "submission": {
                "form": "newsletter",
                "fields": {"email": "jane@example.com"},
                "submitted_at": "1999-01-01T00:00:00Z"
            }
        });
        let status = post_submission(test_router(transport.clone()), body).await;

        assert_eq!(status, StatusCode::OK);
        let delivered = transport.delivered();
        assert_eq!(delivered.len(), 1);
        assert!(delivered[0].submitted_at.timestamp() > 946_684_800);
    }
}
