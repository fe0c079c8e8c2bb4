//! General database handling.

use sqlx::{postgres::PgPoolOptions, PgPool};

/// Initializes the SQLx database pool and runs pending database migrations, returning the pool
/// once complete.
///
/// # Errors
///
/// Returns an error if the initial database connection or its migrations fail.
pub(crate) async fn initialize(db_url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new().connect(db_url).await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}
