use crate::models::player::Player;
use crate::save_fn;
use crate::schema::{players, standings};
use diesel::prelude::*;
use diesel::SqliteConnection;
use serde::Serialize;

/// The stored win/loss tally; exactly one per player.
#[derive(Queryable, Debug, Clone, PartialEq, Eq)]
pub struct StandingRecord {
    pub player_id: i32,
    pub wins: i32,
    pub losses: i32,
}

impl StandingRecord {
    pub fn get_by_player_id(
        player_id: i32,
        conn: &mut SqliteConnection,
    ) -> Result<Option<Self>, diesel::result::Error> {
        standings::table.find(player_id).first(conn).optional()
    }

    /// returns the number of rows touched, which is 0 if the player has no record
    pub fn add_win(player_id: i32, conn: &mut SqliteConnection) -> QueryResult<usize> {
        diesel::update(standings::table.find(player_id))
            .set(standings::wins.eq(standings::wins + 1))
            .execute(conn)
    }

    /// see [Self::add_win]
    pub fn add_loss(player_id: i32, conn: &mut SqliteConnection) -> QueryResult<usize> {
        diesel::update(standings::table.find(player_id))
            .set(standings::losses.eq(standings::losses + 1))
            .execute(conn)
    }

    pub fn reset_all(conn: &mut SqliteConnection) -> QueryResult<usize> {
        diesel::update(standings::table)
            .set((standings::wins.eq(0), standings::losses.eq(0)))
            .execute(conn)
    }

    pub fn delete_all(conn: &mut SqliteConnection) -> QueryResult<usize> {
        diesel::delete(standings::table).execute(conn)
    }
}

#[derive(Insertable)]
#[diesel(table_name=standings)]
pub struct NewStandingRecord {
    player_id: i32,
    wins: i32,
    losses: i32,
}

impl NewStandingRecord {
    pub fn new(player: &Player) -> Self {
        Self::for_player_id(player.id)
    }

    pub(crate) fn for_player_id(player_id: i32) -> Self {
        Self {
            player_id,
            wins: 0,
            losses: 0,
        }
    }

    save_fn!(standings::table, StandingRecord);
}

/// A player's row in the standings table, as handed to the pairing engine.
#[derive(Queryable, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub player_id: i32,
    pub name: String,
    pub wins: i32,
    /// wins + losses
    pub matches: i32,
}

impl Standing {
    pub fn new<S: Into<String>>(player_id: i32, name: S, wins: i32, matches: i32) -> Self {
        Self {
            player_id,
            name: name.into(),
            wins,
            matches,
        }
    }
}

/// most wins first; ties come out in player id (i.e. registration) order
pub fn current_standings(conn: &mut SqliteConnection) -> QueryResult<Vec<Standing>> {
    players::table
        .inner_join(standings::table)
        .select((
            players::id,
            players::name,
            standings::wins,
            standings::wins + standings::losses,
        ))
        .order((standings::wins.desc(), players::id.asc()))
        .load(conn)
}
