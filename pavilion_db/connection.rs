use sqlx::postgres::{PgPool, PgPoolOptions};
use std::env;

use pavilion_types::ProfileError;

pub type DbPool = PgPool;

pub async fn establish_connection_pool() -> Result<DbPool, ProfileError> {
    dotenvy::dotenv().ok();

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| panic!("DATABASE_URL must be set"));

    PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .map_err(|e| ProfileError::Unavailable(e.to_string()))
}
