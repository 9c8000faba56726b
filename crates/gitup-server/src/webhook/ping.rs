//! Ping webhook handlers.

use actix_web::HttpResponse;
use gitup_core::Repository;
use tracing::info;

use super::ok_response;

pub(crate) fn ping_event(repository: &Repository) -> HttpResponse {
    info!(
        message = "Ping event for repository",
        repository = repository.name(),
    );

    ok_response()
}
