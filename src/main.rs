use anyhow::Result;

use tennis_pairing::cli::Command;
use tennis_pairing::{
    handle_completions, handle_match, handle_pair, handle_preferences, handle_scrape, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Scrape { output } => handle_scrape(output.as_deref()),
        Command::Preferences { pool, output } => handle_preferences(pool, output),
        Command::Match { preferences, output } => handle_match(preferences, output.as_deref()),
        Command::Pair { pool } => handle_pair(pool),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
