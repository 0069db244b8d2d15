pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::email;
pub use modules::link;

use crate::api::openapi::ApiDoc;
use crate::auth::adapter::outgoing::{
    RandomCodeGenerator, SystemClock, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::{
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    verify_user_email::{IVerifyUserEmailUseCase, VerifyUserEmailUseCase},
};
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::UserEmailNotifier;
use crate::email::application::services::UserEmailService;
use crate::link::adapter::outgoing::{LinkQueryPostgres, LinkRepositoryPostgres};
use crate::link::application::ports::incoming::use_cases::{CreateLinkUseCase, GetLinksUseCase};
use crate::link::application::services::{CreateLinkService, GetLinksService};
use crate::shared::config::{AppConfig, SmtpConfig};

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_orchestrator: Arc<UserRegistrationOrchestrator>,
    pub verify_user_email_use_case: Arc<dyn IVerifyUserEmailUseCase + Send + Sync>,
    pub create_link_use_case: Arc<dyn CreateLinkUseCase + Send + Sync>,
    pub get_links_use_case: Arc<dyn GetLinksUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    // SMTP SETUPS
    let smtp_sender = match &config.smtp {
        SmtpConfig::Local { host, port } => {
            info!(host = %host, port = *port, "Using local SMTP server");
            SmtpEmailSender::new_local(host, *port, &config.email_from)
        }
        SmtpConfig::Relay {
            server,
            username,
            password,
        } => SmtpEmailSender::new(server, username, password, &config.email_from).map_err(
            |e| {
                error!(error = %e, "Failed to configure SMTP relay");
                io::Error::new(io::ErrorKind::InvalidInput, e)
            },
        )?,
    };

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!(error = %e, "Failed to connect to database");
        io::Error::new(io::ErrorKind::ConnectionRefused, e)
    })?;

    Migrator::up(&conn, None).await.map_err(|e| {
        error!(error = %e, "Database migration failed");
        io::Error::new(io::ErrorKind::Other, e)
    })?;

    let db_arc = Arc::new(conn);

    // Account components
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let clock = Arc::new(SystemClock);

    let register_user_use_case = RegisterUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        Arc::new(RandomCodeGenerator::new()),
        clock.clone(),
    );
    let register_user_uc_arc: Arc<dyn IRegisterUserUseCase + Send + Sync> =
        Arc::new(register_user_use_case);
    let email_notifier_arc: Arc<dyn UserEmailNotifier + Send + Sync> =
        Arc::new(UserEmailService::new(Arc::new(smtp_sender)));

    let register_user_orchestrator = UserRegistrationOrchestrator::new(
        register_user_uc_arc,
        email_notifier_arc,
        config.email_send_timeout,
    );

    let verify_user_email_use_case =
        VerifyUserEmailUseCase::new(user_query.clone(), user_repo, clock);

    // Link components
    let create_link_use_case = CreateLinkService::new(
        LinkRepositoryPostgres::new(Arc::clone(&db_arc)),
        Arc::new(user_query),
    );
    let get_links_use_case = GetLinksService::new(LinkQueryPostgres::new(Arc::clone(&db_arc)));

    let state = AppState {
        register_user_orchestrator: Arc::new(register_user_orchestrator),
        verify_user_email_use_case: Arc::new(verify_user_email_use_case),
        create_link_use_case: Arc::new(create_link_use_case),
        get_links_use_case: Arc::new(get_links_use_case),
    };

    let server_url = config.server_url();
    info!(url = %server_url, "Server listening");

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_user_email_handler);
    // Links
    cfg.service(crate::link::adapter::incoming::web::routes::get_links_handler);
    cfg.service(crate::link::adapter::incoming::web::routes::create_link_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
