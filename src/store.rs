use crate::config::CONFIG;
use crate::db::{establish, run_migrations};
use crate::models::matches::{Match, NewMatch};
use crate::models::player::{NewPlayer, Player};
use crate::models::standings::{current_standings, NewStandingRecord, Standing, StandingRecord};
use crate::TournamentError;
use diesel::{Connection, SqliteConnection};
use log::{debug, info, warn};

/// Durable players, standings and match log.
///
/// Every method that writes more than one row does so in a single transaction.
#[cfg_attr(test, mockall::automock)]
pub trait StandingsStore {
    /// registers a player with a fresh 0-0 record
    fn create_player(&mut self, name: &str) -> Result<Player, TournamentError>;

    /// removes every player and standing record, along with the match log that refers to them.
    /// returns the number of players removed
    fn delete_all_players(&mut self) -> Result<usize, TournamentError>;

    /// clears the match log and sets every record back to 0-0. players are kept.
    /// returns the number of matches removed
    fn delete_all_matches(&mut self) -> Result<usize, TournamentError>;

    fn count_players(&mut self) -> Result<i64, TournamentError>;

    /// sorted by wins, descending
    fn get_standings(&mut self) -> Result<Vec<Standing>, TournamentError>;

    /// appends to the match log and bumps both records, or does nothing at all
    fn record_match_outcome(
        &mut self,
        winner_id: i32,
        loser_id: i32,
    ) -> Result<Match, TournamentError>;
}

pub struct SqliteStore {
    conn: SqliteConnection,
}

impl SqliteStore {
    /// wraps an already-migrated connection
    pub fn new(conn: SqliteConnection) -> Self {
        Self { conn }
    }

    /// opens (creating if needed) the database and brings its schema up to date
    pub fn establish(database_url: &str) -> Result<Self, TournamentError> {
        let mut conn = establish(database_url)?;
        run_migrations(&mut conn)?;
        Ok(Self::new(conn))
    }

    pub fn from_env() -> Result<Self, TournamentError> {
        Self::establish(&CONFIG.database_url)
    }

    pub fn in_memory() -> Result<Self, TournamentError> {
        Self::establish(":memory:")
    }

    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    pub fn standing_record(
        &mut self,
        player_id: i32,
    ) -> Result<Option<StandingRecord>, TournamentError> {
        StandingRecord::get_by_player_id(player_id, &mut self.conn).map_err(From::from)
    }

    pub fn matches(&mut self) -> Result<Vec<Match>, TournamentError> {
        Match::all(&mut self.conn).map_err(From::from)
    }
}

fn require_player(id: i32, conn: &mut SqliteConnection) -> Result<Player, TournamentError> {
    Player::get_by_id(id, conn)?.ok_or(TournamentError::PlayerNotFound(id))
}

impl StandingsStore for SqliteStore {
    fn create_player(&mut self, name: &str) -> Result<Player, TournamentError> {
        let player = self.conn.transaction::<_, TournamentError, _>(|c| {
            let player = NewPlayer::new(name).save(c)?;
            NewStandingRecord::new(&player).save(c)?;
            Ok(player)
        })?;
        info!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    fn delete_all_players(&mut self) -> Result<usize, TournamentError> {
        let deleted = self.conn.transaction::<_, TournamentError, _>(|c| {
            let matches = Match::delete_all(c)?;
            if matches > 0 {
                warn!("Deleting players also removed {matches} logged match(es)");
            }
            StandingRecord::delete_all(c)?;
            Ok(Player::delete_all(c)?)
        })?;
        info!("Deleted {deleted} player(s)");
        Ok(deleted)
    }

    fn delete_all_matches(&mut self) -> Result<usize, TournamentError> {
        let deleted = self.conn.transaction::<_, TournamentError, _>(|c| {
            let deleted = Match::delete_all(c)?;
            StandingRecord::reset_all(c)?;
            Ok(deleted)
        })?;
        info!("Deleted {deleted} match(es) and reset standings");
        Ok(deleted)
    }

    fn count_players(&mut self) -> Result<i64, TournamentError> {
        Ok(Player::count(&mut self.conn)?)
    }

    fn get_standings(&mut self) -> Result<Vec<Standing>, TournamentError> {
        Ok(current_standings(&mut self.conn)?)
    }

    fn record_match_outcome(
        &mut self,
        winner_id: i32,
        loser_id: i32,
    ) -> Result<Match, TournamentError> {
        if winner_id == loser_id {
            return Err(TournamentError::SelfMatch(winner_id));
        }
        let m = self.conn.transaction::<_, TournamentError, _>(|c| {
            let winner = require_player(winner_id, c)?;
            let loser = require_player(loser_id, c)?;
            let m = NewMatch::new(&winner, &loser).save(c)?;
            // a player without a standing record breaks the one-record-per-player rule;
            // bail so the match we just logged is rolled back
            if StandingRecord::add_win(winner.id, c)? != 1 {
                return Err(TournamentError::PlayerNotFound(winner.id));
            }
            if StandingRecord::add_loss(loser.id, c)? != 1 {
                return Err(TournamentError::PlayerNotFound(loser.id));
            }
            Ok(m)
        })?;
        debug!("Recorded match {}: {} beat {}", m.id, winner_id, loser_id);
        Ok(m)
    }
}
