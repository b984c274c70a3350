//! Tournament CLI
//!
//! Register players, pair rounds and record results for Swiss tournaments.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use swiss_core::PlayerId;
use tournament::{
    next_round_number, round_report, standings_report, MemoryStore, Outcome, RoundPlanner,
    RunnerConfig, SwissConfig, SwissRunner, TournamentId, TournamentStore,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tournament", about = "Swiss-system tournament runner")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Store file (overrides the config)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Seed for bye draws and simulated results (overrides the config)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a tournament
    Create { name: String },
    /// List tournaments
    List,
    /// Register one or more players
    Register {
        tournament: u32,
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Show standings
    Standings { tournament: u32 },
    /// Pair the next round (records the bye, if any)
    Pair {
        tournament: u32,
        /// Print the round as JSON
        #[arg(long)]
        json: bool,
    },
    /// Record a match result
    Report {
        tournament: u32,
        #[arg(long)]
        winner: u32,
        #[arg(long)]
        loser: u32,
    },
    /// Count registered players
    Count { tournament: u32 },
    /// Delete results of a tournament, or every tournament if none is given
    Reset {
        tournament: Option<u32>,
        /// Delete the players too
        #[arg(long)]
        players: bool,
    },
    /// Play a throwaway tournament with random results
    Simulate {
        #[arg(long, default_value_t = 9)]
        players: u32,
        #[arg(long, default_value_t = 4)]
        rounds: u32,
    },
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("tournament=debug,swiss_core=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => SwissConfig::load(path)?,
        None => SwissConfig::default(),
    };
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    match cli.command {
        Commands::Simulate { players, rounds } => simulate(&config, players, rounds),
        command => run_on_store(&config, command),
    }
}

/// Every command except `simulate` works on the store file.
fn run_on_store(config: &SwissConfig, command: Commands) -> Result<()> {
    let mut store = MemoryStore::load(&config.store_path)
        .with_context(|| format!("loading {}", config.store_path.display()))?;

    match command {
        Commands::Create { name } => {
            let id = store.create_tournament(&name);
            println!("Created tournament {} ({})", id.0, name);
        }
        Commands::List => {
            for t in store.tournaments() {
                println!("{:>4}  {:<30} {:>3} players", t.id.0, t.name, t.players.len());
            }
        }
        Commands::Register { tournament, names } => {
            for name in names {
                let id = store.register_player(TournamentId(tournament), &name)?;
                println!("Registered {} as {}", name, id);
            }
        }
        Commands::Standings { tournament } => {
            let id = TournamentId(tournament);
            let title = store.tournament(id)?.name.clone();
            print!("{}", standings_report(&title, &store.standings(id)?));
        }
        Commands::Pair { tournament, json } => {
            let id = TournamentId(tournament);
            let round = next_round_number(&store.standings(id)?);
            let mut rng = make_rng(config.seed);
            let plan =
                RoundPlanner::from_config(config).next_round_pairings(&mut store, id, &mut rng)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print!("{}", round_report(round, &plan));
            }
        }
        Commands::Report {
            tournament,
            winner,
            loser,
        } => {
            store.record_match(TournamentId(tournament), PlayerId(winner), PlayerId(loser))?;
            println!("Recorded: {} beat {}", PlayerId(winner), PlayerId(loser));
        }
        Commands::Count { tournament } => {
            println!("{}", store.count_players(TournamentId(tournament))?);
        }
        Commands::Reset {
            tournament: Some(tournament),
            players,
        } => {
            let id = TournamentId(tournament);
            let matches = store.delete_matches(id)?;
            println!("Deleted {} match records", matches);
            if players {
                println!("Deleted {} players", store.delete_players(id)?);
            }
        }
        Commands::Reset {
            tournament: None,
            ..
        } => {
            println!("Deleted {} tournaments", store.delete_tournaments());
        }
        Commands::Simulate { players, rounds } => return simulate(config, players, rounds),
    }

    store
        .save(&config.store_path)
        .with_context(|| format!("saving {}", config.store_path.display()))?;
    Ok(())
}

fn simulate(config: &SwissConfig, players: u32, rounds: u32) -> Result<()> {
    let mut store = MemoryStore::new();
    let tournament = store.create_tournament("Simulation");
    for n in 1..=players {
        store.register_player(tournament, &format!("Player {}", n))?;
    }

    let mut rng = make_rng(config.seed);
    let mut coin = StdRng::seed_from_u64(rng.gen());
    let mut oracle = |_: &swiss_core::PairingRow| {
        if coin.gen_bool(0.5) {
            Outcome::FirstWins
        } else {
            Outcome::SecondWins
        }
    };

    let runner = SwissRunner::new(
        RunnerConfig {
            rounds,
            verbose: true,
        },
        RoundPlanner::from_config(config),
    );
    let outcome = runner.run(&mut store, tournament, &mut oracle, &mut rng);

    println!();
    print!("{}", standings_report("Simulation", &store.standings(tournament)?));
    outcome.context("simulation stopped early")?;
    Ok(())
}
