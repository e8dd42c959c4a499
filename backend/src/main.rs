//! Backend entry-point: loads settings, wires adapters and serves the API.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use flashcards::inbound::http::health::HealthState;
use flashcards::inbound::http::token_config::{BuildMode, token_secret_from_env};

use server::{
    AppSettings, ServerConfig, build_http_state, build_remote_source, build_repositories,
    build_token_codec, create_server,
};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|e| std::io::Error::other(e.to_string()))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let secret = token_secret_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;

    let repositories = build_repositories(&settings).await?;
    let remote = build_remote_source(&settings)?;
    let tokens = build_token_codec(&settings, secret);
    let http_state = build_http_state(repositories, remote, tokens);

    let health_state = web::Data::new(HealthState::new());
    let cors_origins = settings.cors_origins().map_err(std::io::Error::other)?;
    let config = ServerConfig::new(bind_addr, http_state).with_cors_origins(cors_origins);
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "flashcards API listening");
    server.await
}
