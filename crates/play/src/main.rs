//! Interactive play, batch simulation and search analysis for the pursuit
//! game.
//!
//! The human (or a seeded random mover) is the Player; the Monster's moves
//! come from alpha-beta search.

mod controller;
mod driver;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use controller::{HumanController, RandomController};
use driver::{run_game, GameReport};
use pursuit_core::Agent;
use pursuit_game::{Action, GameState, Layout, Outcome, Pursuit};
use pursuit_search::{search_monster, AlphaBeta, Minimax, SearchConfig, DEFAULT_MAX_DEPTH};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Player/Monster pursuit game with an alpha-beta Monster.
#[derive(Parser)]
#[command(name = "pursuit")]
#[command(about = "Fetch the item and escape before the Monster catches you")]
struct Cli {
    /// JSON layout file (defaults to the classic 4x4 board).
    #[arg(long, global = true)]
    layout: Option<PathBuf>,

    /// Monster search depth in plies.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: usize,

    /// Maximum nodes per Monster search before falling back to the heuristic.
    #[arg(long, global = true)]
    node_budget: Option<u64>,

    /// Disable alpha-beta cutoffs (plain minimax).
    #[arg(long, global = true)]
    no_pruning: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively against the Monster.
    Play,

    /// Play random Players against the Monster and summarise the outcomes.
    Simulate {
        /// Number of games to play.
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Write one JSON report per game to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare alpha-beta with plain minimax on one position.
    Analyze {
        /// Player moves to play first (e.g. `db w w`); the Monster replies
        /// with its searched move after each.
        moves: Vec<String>,

        /// Depth of the comparison searches.
        #[arg(long, default_value = "6")]
        compare_depth: usize,
    },
}

impl Cli {
    fn search_config(&self) -> SearchConfig {
        let mut config = SearchConfig::with_depth(self.depth);
        if self.no_pruning {
            config = config.without_pruning();
        }
        if let Some(budget) = self.node_budget {
            config = config.with_node_budget(budget);
        }
        config
    }
}

/// A simulated game as written to the JSON output.
#[derive(Serialize)]
struct SimulatedGame<'a> {
    seed: u64,
    #[serde(flatten)]
    report: &'a GameReport,
}

fn load_layout(path: Option<&Path>) -> Result<Layout> {
    let Some(path) = path else {
        return Ok(Layout::classic());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse layout file: {:?}", path))
}

/// Run the play command.
fn cmd_play(initial: GameState, config: &SearchConfig) -> Result<()> {
    println!(
        "Collect the item at {} and return to the exit at {} within {} moves.",
        initial.item_pos(),
        initial.exit_pos(),
        initial.max_moves()
    );

    let stdin = io::stdin();
    let mut player = HumanController::new(stdin.lock(), io::stdout());
    run_game(initial, config, &mut player, &mut io::stdout())?;
    Ok(())
}

/// Run the simulate command.
fn cmd_simulate(
    initial: GameState,
    config: &SearchConfig,
    games: usize,
    seed: u64,
    output: Option<PathBuf>,
) -> Result<()> {
    println!(
        "Simulating {} games (depth {}, pruning {})",
        games,
        config.max_depth,
        if config.pruning { "on" } else { "off" }
    );
    let start = Instant::now();

    let reports: Vec<(u64, GameReport)> = (0..games)
        .into_par_iter()
        .map(|i| {
            let game_seed = seed.wrapping_add(i as u64 * 1000);
            let mut player = RandomController::new(ChaCha8Rng::seed_from_u64(game_seed));
            run_game(initial, config, &mut player, &mut io::sink()).map(|r| (game_seed, r))
        })
        .collect::<Result<_>>()?;

    let count = |outcome: Outcome| reports.iter().filter(|(_, r)| r.outcome == outcome).count();
    let total_pruned: u64 = reports.iter().map(|(_, r)| r.total_pruned).sum();
    let total_moves: u32 = reports.iter().map(|(_, r)| r.player_moves).sum();
    let per_game = |total: f64| if games == 0 { 0.0 } else { total / games as f64 };

    println!("\nCompleted in {:.2}s", start.elapsed().as_secs_f64());
    println!(
        "Outcomes: Player wins: {}, Monster wins: {}, Stalemates: {}",
        count(Outcome::PlayerWon),
        count(Outcome::MonsterWon),
        count(Outcome::Stalemate)
    );
    println!("Average game length: {:.1} player moves", per_game(total_moves as f64));
    println!("Average pruned per game: {:.1}", per_game(total_pruned as f64));

    if let Some(path) = output {
        let file =
            File::create(&path).with_context(|| format!("Failed to create file: {:?}", path))?;
        let mut writer = BufWriter::new(file);
        for (game_seed, report) in &reports {
            let record = SimulatedGame {
                seed: *game_seed,
                report,
            };
            serde_json::to_writer(&mut writer, &record)
                .with_context(|| format!("Failed to serialize game {}", game_seed))?;
            writeln!(writer)?;
        }
        writer.flush()?;
        println!("Reports saved to: {:?}", path);
    }

    Ok(())
}

/// Run the analyze command.
fn cmd_analyze(
    initial: GameState,
    config: &SearchConfig,
    moves: &[String],
    compare_depth: usize,
) -> Result<()> {
    if moves.is_empty() {
        bail!("give at least one Player move: the Monster moves second");
    }

    let mut state = initial;
    for (i, token) in moves.iter().enumerate() {
        let action: Action = token.parse()?;
        state = state
            .apply(action, Agent::Player)
            .with_context(|| format!("Player move '{}' is not legal here", token))?;
        if i + 1 == moves.len() || state.outcome(Agent::Monster).is_some() {
            break;
        }

        let reply = search_monster(&state, config)?;
        if let Some(monster) = reply.best_action {
            info!(%monster, "monster replied");
            state = state.apply(monster, Agent::Monster)?;
        }
        if state.outcome(Agent::Player).is_some() {
            break;
        }
    }

    println!("{}", state);
    if let Some(outcome) = state.outcome(Agent::Monster) {
        println!("Game already over: {}", outcome);
        return Ok(());
    }

    println!("\nMonster to move, depth {}", compare_depth);
    let alphabeta = AlphaBeta::new(Pursuit, SearchConfig::with_depth(compare_depth))
        .best_action(&state, Agent::Monster)?;
    let minimax = Minimax::new(Pursuit).search(&state, compare_depth, Agent::Monster)?;

    for (name, result) in [("alpha-beta", &alphabeta), ("minimax", &minimax)] {
        println!(
            "{:<10}  action: {:<5} value: {:>6}  nodes: {:>9}  pruned: {:>8}",
            name,
            result.best_action.map_or("-", |a| a.token()),
            result.typed_value(),
            result.nodes,
            result.pruned
        );
    }
    if minimax.nodes > 0 {
        println!(
            "Pruning visits {:.1}% of the minimax tree",
            alphabeta.nodes as f64 / minimax.nodes as f64 * 100.0
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.search_config();
    let layout = load_layout(cli.layout.as_deref())?;
    let initial = GameState::new(&layout).context("Invalid layout")?;

    match cli.command {
        Commands::Play => cmd_play(initial, &config),
        Commands::Simulate {
            games,
            seed,
            output,
        } => cmd_simulate(initial, &config, games, seed, output),
        Commands::Analyze {
            moves,
            compare_depth,
        } => cmd_analyze(initial, &config, &moves, compare_depth),
    }
}
