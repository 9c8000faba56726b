//! Push webhook handlers.

use std::sync::Arc;

use actix_web::{web::Bytes, HttpResponse};
use gitup_core::{Repository, UpdateService};
use gitup_crypto::verify_signature;
use tracing::{error, info, warn};

use super::ok_response;
use crate::{Result, ServerError};

/// Check a delivery against the repository secret.
///
/// An empty secret rejects everything, unless unsigned deliveries are
/// explicitly allowed.
fn is_authentic(repository: &Repository, signature: &str, body: &[u8]) -> bool {
    if repository.secret().is_empty() {
        return repository.allows_unsigned();
    }

    verify_signature(signature, repository.secret(), body)
}

#[tracing::instrument(skip_all, fields(repository = repository.name()))]
pub(crate) async fn push_event(
    update_service: Arc<dyn UpdateService>,
    repository: &Arc<Repository>,
    signature: &str,
    body: Result<Bytes>,
) -> Result<HttpResponse> {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, message = "Could not read push payload");
            return Err(ServerError::InvalidWebhookSignature);
        }
    };

    if !is_authentic(repository, signature, &body) {
        warn!("Invalid webhook signature");
        return Err(ServerError::InvalidWebhookSignature);
    }

    repository.update(update_service).await.map_err(|e| {
        error!(error = %e, message = "Repository update failed");
        ServerError::UpdateFailed { source: e }
    })?;

    info!(
        path = %repository.path().display(),
        message = "Repository updated",
    );
    Ok(ok_response())
}
