//! JSON webhook transport

use crate::{Transport, TransportError, TransportResult};
use async_trait::async_trait;
use std::time::Duration;
use weerlo_core::Submission;

/// POSTs each submission as JSON to a fixed URL
#[derive(Debug, Clone)]
pub struct WebhookTransport {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl WebhookTransport {
    pub fn new(url: &str, timeout: Duration) -> TransportResult<Self> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| TransportError::Config(format!("invalid webhook URL {}: {}", url, e)))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("weerlo-site/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

#[async_trait]
impl Transport for WebhookTransport {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn send(&self, submission: &Submission) -> TransportResult<()> {
        let response = self
            .client
            .post(self.url.clone())
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Webhook rejected {} submission: {}", submission.form, status);
            return Err(TransportError::Status {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        tracing::info!("Delivered {} submission to webhook", submission.form);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use tokio::sync::mpsc;
    use weerlo_core::FormRecord;

    async fn spawn_hook() -> (String, mpsc::Receiver<serde_json::Value>) {
        let (tx, rx) = mpsc::channel(4);
        let app = Router::new()
            .route(
                "/hook",
                post(move |Json(body): Json<serde_json::Value>| {
                    let tx = tx.clone();
                    async move {
                        let _ = tx.send(body).await;
                        StatusCode::OK
                    }
                }),
            )
            .route("/broken", post(|| async { StatusCode::INTERNAL_SERVER_ERROR }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), rx)
    }

    fn enquiry() -> Submission {
        let record: FormRecord = [
            ("name", "Jane"),
            ("email", "jane@x.com"),
            ("message", "hello"),
        ]
        .into_iter()
        .collect();
        Submission::new("contact", record)
    }

    #[tokio::test]
    async fn test_posts_submission_json() {
        let (base, mut rx) = spawn_hook().await;
        let transport = WebhookTransport::new(&format!("{}/hook", base), Duration::from_secs(5)).unwrap();

        transport.send(&enquiry()).await.unwrap();

        let body = rx.recv().await.unwrap();
        assert_eq!(body["form"], "contact");
        assert_eq!(body["fields"]["name"], "Jane");
        assert_eq!(body["fields"]["message"], "hello");
        assert!(body["submitted_at"].is_string());
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let (base, _rx) = spawn_hook().await;
        let transport = WebhookTransport::new(&format!("{}/broken", base), Duration::from_secs(5)).unwrap();

        let err = transport.send(&enquiry()).await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 500, .. }));
    }

    #[test]
    fn test_invalid_url() {
        assert!(matches!(
            WebhookTransport::new("hooks/without/scheme", Duration::from_secs(1)),
            Err(TransportError::Config(_))
        ));
    }
}
