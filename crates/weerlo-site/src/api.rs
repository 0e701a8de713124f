//! Server functions

use leptos::server_fn::codec::Json;
use leptos::*;
use weerlo_core::{FormDelivery, FormResult, Submission};

/// Receive a submitted form and pass it to the configured transport.
///
/// Only the site's declared forms are accepted, with exactly their declared
/// fields.
#[server(name = SubmitForm, prefix = "/api", input = Json)]
pub async fn submit_form(submission: Submission) -> Result<(), ServerFnError> {
    use weerlo_delivery::SharedTransport;

    let transport = use_context::<SharedTransport>()
        .ok_or_else(|| ServerFnError::new("form delivery is not configured"))?;

    let submission = submission.verified().map_err(|e| {
        tracing::warn!("Rejected form submission: {}", e);
        ServerFnError::new(e)
    })?;

    transport.send(&submission).await.map_err(|e| {
        tracing::error!("Failed to deliver {} form: {}", submission.form, e);
        ServerFnError::new(e)
    })
}

pub type SubmitFormAction = Action<SubmitForm, Result<(), ServerFnError>>;

/// Hands forms to the server by dispatching [`SubmitForm`].
///
/// Dispatch never fails locally; transport errors come back through the
/// action's value.
#[derive(Clone, Copy)]
pub struct ServerActionDelivery {
    action: SubmitFormAction,
}

impl ServerActionDelivery {
    pub fn new(action: SubmitFormAction) -> Self {
        Self { action }
    }

    pub fn action(&self) -> SubmitFormAction {
        self.action
    }
}

impl FormDelivery for ServerActionDelivery {
    fn deliver(&self, submission: &Submission) -> FormResult<()> {
        self.action.dispatch(SubmitForm {
            submission: submission.clone(),
        });
        Ok(())
    }
}
