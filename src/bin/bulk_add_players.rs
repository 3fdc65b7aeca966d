use log::error;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use swiss_tournament::logging::init_logging;
use swiss_tournament::models::player::NewPlayer;
use swiss_tournament::{SqliteStore, StandingsStore};

/// returns how many players could not be saved
fn register_all<S: StandingsStore>(store: &mut S, players: &[NewPlayer]) -> usize {
    let mut failed = 0;
    for player in players {
        match store.create_player(&player.name) {
            Ok(p) => {
                println!("Saved {} as {}", p.name, p.id);
            }
            Err(e) => {
                error!("Error saving {}: {}", player.name, e);
                failed += 1;
            }
        }
    }
    failed
}

// Registers every player in a JSON file shaped like `[{"name": "..."}, ...]`
fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    init_logging()?;
    let mut args = std::env::args().skip(1);
    let filename = args.next().ok_or("Need filename!")?;
    if args.next().is_some() {
        return Err("One argument only!!!!".into());
    }
    let f = File::open(filename)?;
    let br = BufReader::new(f);
    let players: Vec<NewPlayer> = serde_json::from_reader(br)?;
    let mut store = SqliteStore::from_env()?;
    let failed = register_all(&mut store, &players);
    if failed > 0 {
        return Err(format!("{failed} of {} player(s) failed to save", players.len()).into());
    }
    Ok(())
}
