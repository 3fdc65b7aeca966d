use crate::models::matches::Match;
use crate::models::standings::Standing;
use crate::store::StandingsStore;
use crate::TournamentError;
use itertools::Itertools;
use log::{debug, info};
use serde::Serialize;
use std::cmp::Reverse;

/// One matchup for the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub player1_id: i32,
    pub player1_name: String,
    pub player2_id: i32,
    pub player2_name: String,
}

impl Pairing {
    fn new(p1: &Standing, p2: &Standing) -> Self {
        Self {
            player1_id: p1.player_id,
            player1_name: p1.name.clone(),
            player2_id: p2.player_id,
            player2_name: p2.name.clone(),
        }
    }
}

/// Pairs up ranked players: 1st with 2nd, 3rd with 4th, and so on.
///
/// `ranked` must already be in standings order. There are no byes, so an odd number of players
/// is an error rather than someone silently sitting out.
pub fn pair(ranked: &[Standing]) -> Result<Vec<Pairing>, TournamentError> {
    if ranked.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(ranked.len()));
    }
    Ok(ranked
        .iter()
        .tuples()
        .map(|(p1, p2)| Pairing::new(p1, p2))
        .collect())
}

/// Ranks players and produces Swiss pairings on top of a [StandingsStore].
pub struct PairingEngine<S> {
    store: S,
}

impl<S: StandingsStore> PairingEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&mut self) -> &mut S {
        &mut self.store
    }

    /// Current standings, most wins first.
    ///
    /// The sort is stable, so players on equal wins stay in the order the store gave them
    /// (registration order for [crate::SqliteStore]).
    pub fn rank_standings(&mut self) -> Result<Vec<Standing>, TournamentError> {
        let standings = self.store.get_standings()?;
        Ok(standings
            .into_iter()
            .sorted_by_key(|s| Reverse(s.wins))
            .collect())
    }

    /// the next round's matchups
    pub fn swiss_pairings(&mut self) -> Result<Vec<Pairing>, TournamentError> {
        let ranked = self.rank_standings()?;
        let pairings = pair(&ranked)?;
        debug!("{:?}", pairings);
        info!(
            "Generated {} pairing(s) for {} player(s)",
            pairings.len(),
            ranked.len()
        );
        Ok(pairings)
    }

    pub fn record_match(&mut self, winner_id: i32, loser_id: i32) -> Result<Match, TournamentError> {
        if winner_id == loser_id {
            return Err(TournamentError::SelfMatch(winner_id));
        }
        self.store.record_match_outcome(winner_id, loser_id)
    }
}
