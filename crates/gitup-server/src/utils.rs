//! Webhook utilities module.

use actix_web::web::{Bytes, BytesMut, Payload};
use futures::stream::StreamExt;

use crate::{Result, ServerError};

/// Read a whole Actix payload into bytes, up to `limit` bytes.
pub async fn convert_payload_to_bytes(payload: &mut Payload, limit: usize) -> Result<Bytes> {
    let mut body = BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| ServerError::PayloadError { source: e })?;
        if body.len() + chunk.len() > limit {
            return Err(ServerError::PayloadTooLarge { limit });
        }

        body.extend_from_slice(&chunk);
    }

    Ok(body.freeze())
}
