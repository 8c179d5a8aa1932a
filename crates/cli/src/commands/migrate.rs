//! Database migration commands.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string
//!
//! Migrations are embedded from `crates/data/migrations/`.

use realtrust_data::config::get_database_url;
use realtrust_data::migrate::{MIGRATOR, run_migrations};
use realtrust_data::{ConfigError, create_pool};

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Apply every pending migration.
///
/// # Errors
///
/// Returns `MigrationError` if the URL is missing, the database is
/// unreachable, or a migration fails.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = get_database_url("DATABASE_URL")?;

    tracing::info!("Connecting to database...");
    let pool = create_pool(&database_url).await?;

    tracing::info!(count = MIGRATOR.iter().count(), "Running migrations...");
    run_migrations(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}

/// Print the embedded migrations.
pub fn list() {
    #[allow(clippy::print_stdout)]
    for migration in MIGRATOR.iter() {
        println!("{:>14}  {}", migration.version, migration.description);
    }
}
