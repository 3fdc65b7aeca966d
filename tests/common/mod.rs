use swiss_tournament::db::{establish, run_migrations};
use swiss_tournament::SqliteStore;

pub fn start_store() -> Result<SqliteStore, anyhow::Error> {
    let mut db = establish(":memory:")?;
    run_migrations(&mut db)?;
    Ok(SqliteStore::new(db))
}
