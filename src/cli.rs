use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Pairs ladder tennis players for practice matches")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct PoolArgs {
    /// Player to include in the pool (repeat for every player)
    #[arg(short = 'p', long = "player", required_unless_present = "pool_file", conflicts_with = "pool_file")]
    pub players: Vec<String>,
    /// JSON file holding an array of player names
    #[arg(long)]
    pub pool_file: Option<PathBuf>,
    /// Players snapshot to read instead of fetching the rankings page
    #[arg(long)]
    pub players_file: Option<PathBuf>,
    /// Trailing window of match history to consider, in days
    #[arg(short, long)]
    pub days: Option<i64>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Fetch the rankings page and save a players snapshot
    Scrape {
        /// Output file (defaults to PLAYERS_PATH or players.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build every pool player's ranked list of preferred opponents
    Preferences {
        #[command(flatten)]
        pool: PoolArgs,
        /// Output file
        #[arg(short, long, default_value = "player_preferences.json")]
        output: PathBuf,
    },
    /// Pair players from a saved preferences file
    Match {
        /// Preferences file written by `preferences`
        #[arg(long)]
        preferences: PathBuf,
        /// Also write the pairing to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build preferences and pair the pool in one go
    Pair {
        #[command(flatten)]
        pool: PoolArgs,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
