//! Log-only transport

use crate::{Transport, TransportResult};
use async_trait::async_trait;
use weerlo_core::Submission;

/// Writes submissions to the server log and reports success
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTransport;

impl LogTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transport for LogTransport {
    fn name(&self) -> &str {
        "log"
    }

    async fn send(&self, submission: &Submission) -> TransportResult<()> {
        let fields = serde_json::to_string(&submission.fields)?;
        tracing::info!(
            form = %submission.form,
            submitted_at = %submission.submitted_at,
            "Form submitted: {}",
            fields
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weerlo_core::FormRecord;

    #[tokio::test]
    async fn test_log_transport_accepts_everything() {
        let record: FormRecord = [("email", "crew@minesite.com.au")].into_iter().collect();
        let submission = Submission::new("newsletter", record);

        assert!(LogTransport::new().send(&submission).await.is_ok());
    }
}
