//! Embedded SQL migrations.
//!
//! Files live in `crates/data/migrations/` and are compiled into the binary,
//! so running them needs only a database URL.

use sqlx::PgPool;
use sqlx::migrate::{MigrateError, Migrator};

/// All RealTrust migrations, in version order.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply every pending migration.
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails or the applied history does
/// not match the embedded files.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_embedded_in_order() {
        let versions: Vec<i64> = MIGRATOR.iter().map(|m| m.version).collect();
        assert!(!versions.is_empty());
        assert!(versions.windows(2).all(|w| w[0] < w[1]));
    }
}
