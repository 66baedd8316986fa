use sea_orm::Database;
use tracing::info;

use velvetrope_api::config::ApiConfig;
use velvetrope_api::infra::email::SmtpMailer;
use velvetrope_api::router::build_router;
use velvetrope_api::state::AppState;
use velvetrope_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let mailer = SmtpMailer::new(&config).expect("failed to build SMTP mailer");

    let state = AppState {
        db,
        mailer,
        jwt_secret: config.jwt_secret,
        cookie_domain: config.cookie_domain,
        cookie_secure: config.cookie_secure,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("members api listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
