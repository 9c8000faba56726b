//! Webhook handlers.

mod ping;
mod push;


use std::convert::TryFrom;

use actix_web::{web, HttpRequest, HttpResponse};
use tracing::debug;

use crate::{
    constants::{GITHUB_EVENT_HEADER, GITHUB_SIGNATURE_HEADER, OK_BODY},
    event_type::EventType,
    server::{not_found, AppContext},
    utils::convert_payload_to_bytes,
    Result, ServerError,
};

pub(crate) fn ok_response() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(OK_BODY)
}

fn extract_header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|x| x.to_str().ok())
}

fn extract_event_from_request(req: &HttpRequest) -> Option<EventType> {
    extract_header(req, GITHUB_EVENT_HEADER).and_then(|x| EventType::try_from(x).ok())
}

#[tracing::instrument(skip_all, fields(routing_name = %path.as_str()))]
pub(crate) async fn update_handler(
    req: HttpRequest,
    path: web::Path<String>,
    mut payload: web::Payload,
    ctx: web::Data<AppContext>,
) -> Result<HttpResponse> {
    let repository = ctx
        .registry
        .find(path.as_str())
        .ok_or(ServerError::RepositoryNotFound)?;

    match extract_event_from_request(&req) {
        Some(EventType::Push) => (),
        Some(EventType::Ping) => return Ok(ping::ping_event(repository)),
        None => {
            debug!(
                event = extract_header(&req, GITHUB_EVENT_HEADER).unwrap_or_default(),
                message = "Ignoring event",
            );
            return Ok(ok_response());
        }
    }

    let signature = extract_header(&req, GITHUB_SIGNATURE_HEADER).unwrap_or_default();
    let body = convert_payload_to_bytes(&mut payload, ctx.config.server.max_payload_size).await;

    push::push_event(ctx.update_service.clone(), repository, signature, body).await
}

/// Configure webhook handlers.
pub fn configure_webhook_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["/{name}", "/{name}/"])
            .route(web::post().to(update_handler))
            .default_service(web::to(not_found)),
    );
}
