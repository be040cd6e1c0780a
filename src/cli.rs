use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cardrating",
    version,
    about = "Player rating card scoring and ranking CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and validate the rating configuration
    Validate(ValidateCommand),
    /// Score a batch of players against the configured reference bests
    Score(ScoreCommand),
    /// List the top cards of an exported cards table
    Rank(RankCommand),
    /// Search cards by name and series with a listing sort
    List(ListCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Profile {
    Attacker,
    Midfielder,
    Defender,
    Goalkeeper,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RankBy {
    Overall,
    Gol,
    Asist,
    Regate,
    Pase,
    Def,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum SortPreset {
    Recent,
    OverallDesc,
    GolDesc,
    AsistDesc,
    RegateDesc,
    PaseDesc,
    DefDesc,
    NameAsc,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub path: PathBuf,
    /// Use this file instead of the layered rating.toml lookup
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,
    /// JSON array of players: {"id", "name", "profile", "stats": {key: value}}
    #[arg(long)]
    pub players: PathBuf,
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Score every player with this profile's weights
    #[arg(long, value_enum)]
    pub profile: Option<Profile>,
    /// Cap sub-scores at 100 regardless of configuration
    #[arg(long)]
    pub clamp: bool,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct RankCommand {
    /// JSON export of the cards table
    #[arg(long)]
    pub cards: PathBuf,
    #[arg(long, value_enum, default_value = "overall")]
    pub by: RankBy,
    #[arg(long, default_value = "all")]
    pub season: String,
    #[arg(long, default_value = "all")]
    pub country: String,
    #[arg(long, default_value = "all")]
    pub club: String,
    #[arg(long, default_value = "all")]
    pub series: String,
    /// Case-insensitive substring of the player name
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub ascending: bool,
    #[arg(long, default_value_t = 50)]
    pub limit: usize,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ListCommand {
    #[arg(long)]
    pub cards: PathBuf,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, default_value = "all")]
    pub series: String,
    #[arg(long, value_enum, default_value = "recent")]
    pub sort: SortPreset,
    #[arg(long, default_value_t = 50)]
    pub limit: usize,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}
