use clap::{Parser, Subcommand};
use swiss_tournament::logging::init_logging;
use swiss_tournament::{PairingEngine, SqliteStore, StandingsStore};

#[derive(Debug, Parser)]
#[command(author, version, about = "Run a Swiss-system tournament")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Register one or more players
    Register {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Number of registered players
    Count,
    /// Current standings, most wins first
    Standings {
        #[arg(long)]
        json: bool,
    },
    /// Pairings for the next round
    Pairings {
        #[arg(long)]
        json: bool,
    },
    /// Record the outcome of a match
    Report { winner: i32, loser: i32 },
    /// Clear the match log and reset everyone to 0-0
    DeleteMatches,
    /// Remove every player (and their matches)
    DeletePlayers,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logging()?;
    let args = Args::parse();
    let mut engine = PairingEngine::new(SqliteStore::from_env()?);

    match args.command {
        Command::Register { names } => {
            for name in names {
                let p = engine.store().create_player(&name)?;
                println!("{}\t{}", p.id, p.name);
            }
        }
        Command::Count => {
            println!("{}", engine.store().count_players()?);
        }
        Command::Standings { json } => {
            let standings = engine.rank_standings()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&standings)?);
            } else {
                for s in standings {
                    println!("{}\t{}\t{}\t{}", s.player_id, s.name, s.wins, s.matches);
                }
            }
        }
        Command::Pairings { json } => {
            let pairings = engine.swiss_pairings()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&pairings)?);
            } else {
                for p in pairings {
                    println!(
                        "{} ({}) vs {} ({})",
                        p.player1_name, p.player1_id, p.player2_name, p.player2_id
                    );
                }
            }
        }
        Command::Report { winner, loser } => {
            let m = engine.record_match(winner, loser)?;
            println!("Recorded match {}", m.id);
        }
        Command::DeleteMatches => {
            let n = engine.store().delete_all_matches()?;
            println!("Deleted {n} match(es)");
        }
        Command::DeletePlayers => {
            let n = engine.store().delete_all_players()?;
            println!("Deleted {n} player(s)");
        }
    }
    Ok(())
}
