use diesel::SqliteConnection;

use crate::db::{establish, run_migrations};
use crate::store::{SqliteStore, StandingsStore};

pub fn setup_db() -> Result<SqliteConnection, anyhow::Error> {
    let mut db = establish(":memory:")?;
    run_migrations(&mut db)?;
    Ok(db)
}

pub fn setup_store() -> Result<SqliteStore, anyhow::Error> {
    Ok(SqliteStore::in_memory()?)
}

/// returns ids in registration order
pub fn register_players(store: &mut SqliteStore, names: &[&str]) -> anyhow::Result<Vec<i32>> {
    let mut ids = Vec::with_capacity(names.len());
    for name in names {
        ids.push(store.create_player(name)?.id);
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::{register_players, setup_db, setup_store};
    use crate::store::StandingsStore;
    use crate::models::player::NewPlayer;
    use diesel::dsl::count;
    use diesel::prelude::*;

    #[test]
    fn test_database_init() -> anyhow::Result<()> {
        let mut db = setup_db()?;
        NewPlayer::new("name").save(&mut db)?;
        let count = crate::schema::players::table
            .select(count(crate::schema::players::id))
            .get_result::<i64>(&mut db)?;
        assert_eq!(1, count);
        Ok(())
    }

    #[test]
    fn test_each_store_starts_empty() -> anyhow::Result<()> {
        let mut first = setup_store()?;
        register_players(&mut first, &["a", "b"])?;
        let mut second = setup_store()?;
        assert_eq!(0, second.count_players()?);
        assert!(second.get_standings()?.is_empty());
        assert_eq!(2, first.count_players()?);
        Ok(())
    }
}
