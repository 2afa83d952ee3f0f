pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fetchers;
pub mod http;
pub mod matching;
pub mod preferences;
pub mod rate_limiter;
pub mod rating;
pub mod report;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;
use std::path::{Path, PathBuf};

use crate::cache::JsonStore;
use crate::cli::{Command, PoolArgs};
use crate::config::AppConfig;
use crate::domain::{PreferenceMap, SystemClock};
use crate::fetchers::RankingsScraper;
use crate::services::{pair_players, PairingService, PoolRequest, ScrapeService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_scrape(output: Option<&Path>) -> Result<()> {
    let config = AppConfig::new();
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.store.players_path));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let scraper = RankingsScraper::new(config.scraper.clone())?;
        let mut service = ScrapeService::new(scraper);
        service.run(&output).await.map(|_| ())
    })
}

pub fn handle_preferences(pool: &PoolArgs, output: &Path) -> Result<()> {
    let preferences = build_preferences(pool)?;
    JsonStore::new().save(output, &preferences)?;
    report::print_preferences(&preferences);
    Ok(())
}

pub fn handle_match(preferences_path: &Path, output: Option<&Path>) -> Result<()> {
    let store = JsonStore::new();
    let preferences: PreferenceMap = store.load(preferences_path)?;

    let pairing = pair_players(&preferences)?;
    if let Some(path) = output {
        store.save(path, &pairing)?;
    }
    report::print_pairing(&pairing, &preferences);
    Ok(())
}

pub fn handle_pair(pool: &PoolArgs) -> Result<()> {
    let request = pool_request(pool)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let (preferences, pairing) = runtime.block_on(async {
        let mut service = pairing_service()?;
        let preferences = service.build_preferences(&request).await?;
        let pairing = service.pair(&preferences)?;
        Ok::<_, anyhow::Error>((preferences, pairing))
    })?;

    report::print_preferences(&preferences);
    report::print_pairing(&pairing, &preferences);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn build_preferences(pool: &PoolArgs) -> Result<PreferenceMap> {
    let request = pool_request(pool)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut service = pairing_service()?;
        service.build_preferences(&request).await
    })
}

fn pairing_service() -> Result<PairingService<RankingsScraper>> {
    let config = AppConfig::new();
    let scraper = RankingsScraper::new(config.scraper.clone())?;
    Ok(PairingService::new(config, scraper, Box::new(SystemClock)))
}

fn pool_request(pool: &PoolArgs) -> Result<PoolRequest> {
    let names = match &pool.pool_file {
        Some(path) => {
            let names: Vec<String> = JsonStore::new().load(path)?;
            info!("Loaded pool of {} players from {}", names.len(), path.display());
            names
        }
        None => pool.players.clone(),
    };

    Ok(PoolRequest {
        names,
        players_file: pool.players_file.clone(),
        match_history_days: pool.days,
    })
}
