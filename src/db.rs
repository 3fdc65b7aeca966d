use crate::TournamentError;
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::{debug, info};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// opens a connection with foreign key enforcement switched on
pub fn establish(database_url: &str) -> Result<SqliteConnection, TournamentError> {
    debug!("Opening sqlite database at {database_url}");
    let mut conn = SqliteConnection::establish(database_url)?;
    diesel::sql_query("PRAGMA foreign_keys = ON").execute(&mut conn)?;
    Ok(conn)
}

pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), TournamentError> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| TournamentError::MigrationError(e.to_string()))?;
    if !applied.is_empty() {
        info!("Applied {} migration(s)", applied.len());
    }
    Ok(())
}
