use thiserror::Error;

pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod pairing;
pub mod schema;
pub mod store;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

pub use pairing::{pair, Pairing, PairingEngine};
pub use store::{SqliteStore, StandingsStore};

#[derive(Error, Debug)]
pub enum TournamentError {
    #[error("Player {0} not found")]
    PlayerNotFound(i32),

    #[error("Cannot generate pairings with odd player count ({0}). Byes are not supported")]
    OddPlayerCount(usize),

    #[error("Player {0} cannot play a match against themselves")]
    SelfMatch(i32),

    #[error("Standings store unavailable: {0}")]
    StoreUnavailable(#[from] diesel::ConnectionError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Error running migrations: {0}")]
    MigrationError(String),
}
