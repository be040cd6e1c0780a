mod cli;

use cardrating::cards::{
    CardQuery, CardSource, InMemoryCardStore, OrderBy, RankKey, SortColumn, SortPreset,
};
use cardrating::config;
use cardrating::engine::batch::score_batch;
use cardrating::error::{RatingError, Result};
use cardrating::report;
use cardrating::types::config::RatingConfig;
use cardrating::types::report::ScoringReport;
use cardrating::types::scoring::{PlayerRecord, Profile};
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load(root: &Path, explicit: Option<&Path>) -> Result<RatingConfig> {
    if !root.exists() {
        return Err(RatingError::PathNotFound(root.display().to_string()));
    }
    match explicit {
        Some(path) => config::load_config_file(path),
        None => config::load_config(root),
    }
}

fn read_players(path: &Path) -> Result<Vec<PlayerRecord>> {
    if !path.exists() {
        return Err(RatingError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn load_cards(path: &Path) -> Result<InMemoryCardStore> {
    let store = InMemoryCardStore::load(path)?;
    if store.is_empty() {
        warn!(path = %path.display(), "card export has no rows");
    }
    Ok(store)
}

fn output_format(format: cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Validate(cmd) => {
            let cfg = load(&cmd.path, cmd.config.as_deref())?;
            cfg.validate()?;

            let profiles = cfg
                .profiles
                .profiles()
                .map(Profile::as_str)
                .collect::<Vec<_>>();
            println!(
                "config ok: {} statistic(s), profiles: {}",
                cfg.stats.len(),
                profiles.join(", ")
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let cfg = load(&cmd.path, cmd.config.as_deref())?;
            let mut options = cfg.scoring_options();
            if cmd.clamp {
                options.clamp_sub_scores = true;
            }
            let engine = cfg.build_engine(options)?;

            let mut players = read_players(&cmd.players)?;
            if let Some(profile) = cmd.profile {
                let profile = match profile {
                    cli::Profile::Attacker => Profile::Attacker,
                    cli::Profile::Midfielder => Profile::Midfielder,
                    cli::Profile::Defender => Profile::Defender,
                    cli::Profile::Goalkeeper => Profile::Goalkeeper,
                };
                info!(%profile, "overriding player profiles");
                for player in &mut players {
                    player.profile = profile;
                }
            }

            let ratings = score_batch(&engine, &players);
            let mut scoring_report =
                ScoringReport::from_batch(&players, ratings, options.clamp_sub_scores);
            scoring_report.sort_by_overall();

            let rendered = report::render(&scoring_report, output_format(cmd.format))?;
            println!("{rendered}");

            if players.is_empty() {
                warn!(path = %cmd.players.display(), "no players to score");
                Ok(exit_code::WARNINGS)
            } else if scoring_report.players.is_empty() {
                Ok(exit_code::BLOCKING)
            } else if !scoring_report.failures.is_empty() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Rank(cmd) => {
            let store = load_cards(&cmd.cards)?;
            let key = match cmd.by {
                cli::RankBy::Overall => RankKey::Overall,
                cli::RankBy::Gol => RankKey::Gol,
                cli::RankBy::Asist => RankKey::Asist,
                cli::RankBy::Regate => RankKey::Regate,
                cli::RankBy::Pase => RankKey::Pase,
                cli::RankBy::Def => RankKey::Def,
            };
            let order = if cmd.ascending {
                OrderBy::asc(SortColumn::Attribute(key))
            } else {
                OrderBy::desc(SortColumn::Attribute(key))
            };

            let mut query = CardQuery::new()
                .season(&cmd.season)
                .country(&cmd.country)
                .club(&cmd.club)
                .series(&cmd.series)
                .order_by(order)
                .limit(cmd.limit);
            if let Some(name) = &cmd.name {
                query = query.name_contains(name);
            }

            let rows = store.query(&query)?;
            info!(matched = rows.len(), total = store.len(), "ranking query");
            let rendered = report::render_ranking(&rows, key, output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::List(cmd) => {
            let store = load_cards(&cmd.cards)?;
            let preset = match cmd.sort {
                cli::SortPreset::Recent => SortPreset::Recent,
                cli::SortPreset::OverallDesc => SortPreset::OverallDesc,
                cli::SortPreset::GolDesc => SortPreset::GolDesc,
                cli::SortPreset::AsistDesc => SortPreset::AsistDesc,
                cli::SortPreset::RegateDesc => SortPreset::RegateDesc,
                cli::SortPreset::PaseDesc => SortPreset::PaseDesc,
                cli::SortPreset::DefDesc => SortPreset::DefDesc,
                cli::SortPreset::NameAsc => SortPreset::NameAsc,
            };

            let mut query = CardQuery::new()
                .series(&cmd.series)
                .preset(preset)
                .limit(cmd.limit);
            if let Some(name) = &cmd.name {
                query = query.name_contains(name);
            }

            let rows = store.query(&query)?;
            let rendered =
                report::render_ranking(&rows, preset.rank_key(), output_format(cmd.format))?;
            println!("{rendered}");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
