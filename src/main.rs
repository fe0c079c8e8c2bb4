//! The Todo HTTP API web server.

mod api;
mod db;
mod todo;

use axum_macros::FromRef;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::api::auth::JwtAuth;

/// The state shared by all request handlers.
#[derive(FromRef, Clone, Debug)]
pub(crate) struct AppState {
    /// The SQLx database pool.
    pub(crate) db_pool: PgPool,

    /// The validator for bearer tokens.
    pub(crate) auth: JwtAuth,
}

/// # Errors
///
/// See implementation.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let address = dotenvy::var("ADDRESS")?;
    let db_url = dotenvy::var("DATABASE_URL")?;
    let jwt_secret = dotenvy::var("JWT_SECRET")?;

    tracing::info!("Connecting to database...");

    let db_pool = db::initialize(&db_url).await?;

    let state = AppState {
        db_pool,
        auth: JwtAuth::new(jwt_secret.as_bytes()),
    };

    let listener = TcpListener::bind(&address).await?;

    tracing::info!(%address, "Ready!");

    axum::serve(listener, api::router(state)).await?;

    Ok(())
}
