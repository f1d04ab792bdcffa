use std::sync::Arc;

use pavilion_app::{Config, roster::RosterClient, storage::R2Store};
use pavilion_db::{PostgresProfileRepository, establish_connection_pool};
use pavilion_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    setup_logging();

    let config = Config::from_env();

    let db_pool = match establish_connection_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Could not connect to the database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = sqlx::migrate!("../migrations").run(&db_pool).await {
        tracing::error!("Migration failed: {e}");
        std::process::exit(1);
    }

    let state = AppState {
        roster: Arc::new(RosterClient::new(&config)),
        store: Arc::new(R2Store::new(&config)),
        profiles: Arc::new(PostgresProfileRepository::new(db_pool)),
    };

    WebRouter::serve(state, config.port).await
}
