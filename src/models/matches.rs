use crate::models::player::Player;
use crate::save_fn;
use crate::schema::matches;
use diesel::prelude::*;
use diesel::SqliteConnection;
use serde::Serialize;

#[derive(Queryable, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: i32,
    pub player1_id: i32,
    pub player2_id: i32,
    pub winner_id: i32,
}

impl Match {
    pub fn loser_id(&self) -> i32 {
        if self.winner_id == self.player1_id {
            self.player2_id
        } else {
            self.player1_id
        }
    }

    /// the whole match log, oldest first
    pub fn all(conn: &mut SqliteConnection) -> Result<Vec<Self>, diesel::result::Error> {
        matches::table.order(matches::id.asc()).load(conn)
    }

    pub fn count(conn: &mut SqliteConnection) -> Result<i64, diesel::result::Error> {
        matches::table.count().get_result(conn)
    }

    pub fn delete_all(conn: &mut SqliteConnection) -> Result<usize, diesel::result::Error> {
        diesel::delete(matches::table).execute(conn)
    }
}

/// The winner is always stored as player 1.
#[derive(Insertable, Debug)]
#[diesel(table_name=matches)]
pub struct NewMatch {
    player1_id: i32,
    player2_id: i32,
    winner_id: i32,
}

impl NewMatch {
    pub fn new(winner: &Player, loser: &Player) -> Self {
        Self {
            player1_id: winner.id,
            player2_id: loser.id,
            winner_id: winner.id,
        }
    }

    save_fn!(matches::table, Match);
}

#[cfg(test)]
mod tests {
    use super::Match;

    #[test]
    fn test_loser_id() {
        let m = Match {
            id: 1,
            player1_id: 3,
            player2_id: 7,
            winner_id: 7,
        };
        assert_eq!(3, m.loser_id());
    }
}
