//! Blocky -- plays a headless game between computer players.
//!
//! Writes one JSON object per turn to stdout (or `--output`) and a game
//! summary to stderr.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use blocky::config::GameConfig;
use blocky::game::{self, Game};

/// Command-line options. Flags override values from `--config`.
#[derive(Parser, Debug)]
#[command(name = "blocky", about = "Play a headless Blocky game between computer players")]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed, 0 for entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Depth of unit cells
    #[arg(long)]
    max_depth: Option<u8>,

    /// Number of random players
    #[arg(long)]
    random: Option<usize>,

    /// Difficulty of a greedy player (repeat for more players)
    #[arg(long)]
    smart: Vec<usize>,

    /// Number of turns to play
    #[arg(long)]
    turns: Option<usize>,

    /// Output file for the turn log (default: stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Suppress the summary
    #[arg(long)]
    quiet: bool,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig, blocky::config::ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(depth) = self.max_depth {
            config.max_depth = depth;
        }
        if let Some(random) = self.random {
            config.random_players = random;
        }
        if !self.smart.is_empty() {
            config.smart_players = self.smart.clone();
        }
        if let Some(turns) = self.turns {
            config.max_turns = turns;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut game = match cli.game_config().and_then(Game::new) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let turns = game.run();

    let written = match &cli.output {
        Some(path) => File::create(path).and_then(|file| game::write_jsonl(&turns, &mut BufWriter::new(file))),
        None => game::write_jsonl(&turns, &mut BufWriter::new(io::stdout().lock())),
    };
    if let Err(e) = written {
        eprintln!("failed to write turn log: {}", e);
        process::exit(1);
    }

    if !cli.quiet {
        game::print_summary(&game);
    }
}
