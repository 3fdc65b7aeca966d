use crate::save_fn;
use crate::schema::players;
use diesel::prelude::*;
use diesel::SqliteConnection;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: i32,
    pub name: String,
}

impl Player {
    pub fn get_by_id(
        id: i32,
        conn: &mut SqliteConnection,
    ) -> Result<Option<Self>, diesel::result::Error> {
        players::table.find(id).first(conn).optional()
    }

    pub fn count(conn: &mut SqliteConnection) -> Result<i64, diesel::result::Error> {
        players::table.count().get_result(conn)
    }

    pub fn delete_all(conn: &mut SqliteConnection) -> Result<usize, diesel::result::Error> {
        diesel::delete(players::table).execute(conn)
    }
}

/// Names need not be unique; the database hands out the id.
#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name=players)]
pub struct NewPlayer {
    pub name: String,
}

impl NewPlayer {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }

    save_fn!(players::table, Player);
}
