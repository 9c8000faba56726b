//! Server module.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web::{self, Data},
    App, HttpRequest, HttpResponse, HttpServer,
};
use gitup_config::Config;
use gitup_core::{GitUpdateService, RepositoryRegistry, UpdateService};
use tracing::{debug, info};

use crate::{
    constants::UPDATE_PATH_PREFIX, webhook::configure_webhook_handlers, Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Repositories, by routing name.
    pub registry: RepositoryRegistry,
    /// Update adapter.
    pub update_service: Arc<dyn UpdateService>,
}

impl AppContext {
    /// Create new app context.
    pub fn new(config: Config, registry: RepositoryRegistry) -> Self {
        Self {
            config,
            registry,
            update_service: Arc::new(GitUpdateService::new()),
        }
    }

    /// Create new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        registry: RepositoryRegistry,
        update_service: Arc<dyn UpdateService>,
    ) -> Self {
        Self {
            config,
            registry,
            update_service,
        }
    }
}

pub(crate) async fn not_found(req: HttpRequest) -> HttpResponse {
    debug!(method = %req.method(), path = req.path(), message = "No route");
    HttpResponse::NotFound().finish()
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(context)
        .wrap(Logger::default())
        .service(web::scope(UPDATE_PATH_PREFIX).configure(configure_webhook_handlers))
        .default_service(web::to(not_found))
}

/// Run webhook server.
pub async fn run_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        repositories = context.registry.len(),
        message = "Starting webhook server",
    );

    run_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let context = Data::new(context);
    let workers_count = context.config.server.workers_count;

    let mut server = HttpServer::new(move || build_actix_app(context.clone()));

    if let Some(workers) = workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
