mod common;

use common::start_store;
use swiss_tournament::{PairingEngine, SqliteStore, StandingsStore, TournamentError};

fn pair_ids(engine: &mut PairingEngine<SqliteStore>) -> anyhow::Result<Vec<(i32, i32)>> {
    Ok(engine
        .swiss_pairings()?
        .into_iter()
        .map(|p| (p.player1_id, p.player2_id))
        .collect())
}

#[test]
fn test_two_rounds() -> Result<(), anyhow::Error> {
    let mut engine = PairingEngine::new(start_store()?);
    for name in ["A", "B", "C", "D"] {
        engine.store().create_player(name)?;
    }
    assert_eq!(4, engine.store().count_players()?);

    let standings = engine
        .rank_standings()?
        .into_iter()
        .map(|s| (s.player_id, s.name, s.wins, s.matches))
        .collect::<Vec<_>>();
    assert_eq!(
        vec![
            (1, "A".to_string(), 0, 0),
            (2, "B".to_string(), 0, 0),
            (3, "C".to_string(), 0, 0),
            (4, "D".to_string(), 0, 0),
        ],
        standings
    );

    let round_1 = engine.swiss_pairings()?;
    assert_eq!(
        vec![("A", "B"), ("C", "D")],
        round_1
            .iter()
            .map(|p| (p.player1_name.as_str(), p.player2_name.as_str()))
            .collect::<Vec<_>>()
    );
    assert_eq!(vec![(1, 2), (3, 4)], pair_ids(&mut engine)?);

    engine.record_match(1, 2)?;
    engine.record_match(3, 4)?;

    let standings = engine.rank_standings()?;
    assert_eq!(
        vec![(1, 1), (3, 1), (2, 0), (4, 0)],
        standings
            .iter()
            .map(|s| (s.player_id, s.wins))
            .collect::<Vec<_>>()
    );
    assert!(standings.iter().all(|s| s.matches == 1));

    assert_eq!(vec![(1, 3), (2, 4)], pair_ids(&mut engine)?);
    Ok(())
}

#[test]
fn test_reset_between_tournaments() -> Result<(), anyhow::Error> {
    let mut engine = PairingEngine::new(start_store()?);
    for name in ["A", "B"] {
        engine.store().create_player(name)?;
    }
    engine.record_match(2, 1)?;
    assert_eq!(vec![(2, 1)], pair_ids(&mut engine)?);

    engine.store().delete_all_matches()?;
    assert_eq!(vec![(1, 2)], pair_ids(&mut engine)?);

    engine.store().delete_all_players()?;
    assert_eq!(0, engine.store().count_players()?);
    assert!(engine.swiss_pairings()?.is_empty());
    Ok(())
}

#[test]
fn test_odd_field_is_rejected() -> Result<(), anyhow::Error> {
    let mut engine = PairingEngine::new(start_store()?);
    for name in ["A", "B", "C"] {
        engine.store().create_player(name)?;
    }
    match engine.swiss_pairings() {
        Err(TournamentError::OddPlayerCount(3)) => Ok(()),
        other => Err(anyhow::anyhow!("expected OddPlayerCount, got {other:?}")),
    }
}

#[test]
fn test_unknown_player() -> Result<(), anyhow::Error> {
    let mut engine = PairingEngine::new(start_store()?);
    engine.store().create_player("A")?;
    assert!(matches!(
        engine.record_match(1, 17),
        Err(TournamentError::PlayerNotFound(17))
    ));
    let standings = engine.rank_standings()?;
    assert_eq!(0, standings[0].matches);
    Ok(())
}
