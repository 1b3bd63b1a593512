use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "quarter", about = "Inspect game adapters and replay RAM traces")]
pub struct Args {
    /// Config file (default: <config dir>/quarter/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format; overrides the config file
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List every supported title
    List,

    /// Show a title's actions, modes and difficulties
    Info {
        /// Title name (e.g., "zaxxon", "king-kong")
        title: String,
    },

    /// Step a title's adapter through a recorded RAM trace
    Replay {
        title: String,

        /// TOML trace file with one [[frame]] table per step
        trace: PathBuf,

        /// Keep stepping after the first terminal frame
        #[arg(long)]
        no_stop: bool,

        /// Write the final adapter state as JSON to this file
        #[arg(long)]
        checkpoint: Option<PathBuf>,

        /// Restore adapter state from a JSON checkpoint before replaying
        #[arg(long)]
        resume: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
