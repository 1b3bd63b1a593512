use std::path::Path;

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quarter_core::core::{Action, Game, StateBuffer};
use quarter_games::{Title, registry};

mod args;
mod config;
mod error;
mod trace;

use args::{Args, Command, OutputFormat};
use config::Config;
use error::CliError;
use trace::{FrameReport, Trace};

fn main() {
    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(2);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = args.output.unwrap_or(config.output);
    if let Err(e) = run(args.command, output) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Command, output: OutputFormat) -> Result<(), CliError> {
    match command {
        Command::List => {
            for title in registry::all() {
                print_info(&TitleInfo::of(title), output)?;
            }
            Ok(())
        }
        Command::Info { title } => {
            let title: Title = title.parse()?;
            print_info(&TitleInfo::of(title), output)
        }
        Command::Replay {
            title,
            trace,
            no_stop,
            checkpoint,
            resume,
        } => {
            let title: Title = title.parse()?;
            let trace = Trace::parse(&std::fs::read_to_string(&trace)?)?;
            let mut game = registry::create(title);

            if let Some(path) = resume {
                let mut state: StateBuffer =
                    serde_json::from_str(&std::fs::read_to_string(&path)?)?;
                game.load_state(&mut state)?;
                info!(path = %path.display(), "resumed from checkpoint");
            }

            info!(title = %title, frames = trace.frames.len(), "replaying trace");
            let reports = trace::replay(game.as_mut(), &trace, !no_stop)?;
            print_reports(&reports, output)?;

            if let Some(path) = checkpoint {
                write_checkpoint(game.as_ref(), &path)?;
            }
            Ok(())
        }
    }
}

fn write_checkpoint(game: &dyn Game, path: &Path) -> Result<(), CliError> {
    let mut state = StateBuffer::new();
    game.save_state(&mut state);
    std::fs::write(path, serde_json::to_string(&state)?)?;
    info!(path = %path.display(), "wrote checkpoint");
    Ok(())
}

/// Static facts about a title, as printed by `list` and `info`.
#[derive(Debug, Serialize)]
struct TitleInfo {
    name: &'static str,
    rom: &'static str,
    modes: Vec<u8>,
    default_mode: u8,
    difficulties: Vec<u8>,
    minimal_actions: Vec<String>,
    starting_actions: Vec<String>,
}

impl TitleInfo {
    fn of(title: Title) -> Self {
        let game = registry::create(title);
        Self {
            name: game.title_name(),
            rom: game.rom_name(),
            modes: game.available_modes(),
            default_mode: game.default_mode(),
            difficulties: game.available_difficulties(),
            minimal_actions: Action::all_player_a()
                .filter(|&a| game.is_minimal(a))
                .map(|a| a.to_string())
                .collect(),
            starting_actions: game
                .starting_actions()
                .iter()
                .map(|a| a.to_string())
                .collect(),
        }
    }
}

fn format_modes(modes: &[u8]) -> String {
    modes
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn print_info(info: &TitleInfo, output: OutputFormat) -> Result<(), CliError> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string(info)?),
        OutputFormat::Table => {
            println!("{} (rom: {})", info.name, info.rom);
            println!(
                "  modes:        {} (default {})",
                format_modes(&info.modes),
                info.default_mode
            );
            println!("  difficulties: {}", format_modes(&info.difficulties));
            println!("  actions:      {}", info.minimal_actions.join(" "));
            if !info.starting_actions.is_empty() {
                println!("  start with:   {}", info.starting_actions.join(" "));
            }
        }
    }
    Ok(())
}

fn print_reports(reports: &[FrameReport], output: OutputFormat) -> Result<(), CliError> {
    match output {
        OutputFormat::Json => {
            for report in reports {
                println!("{}", serde_json::to_string(report)?);
            }
        }
        OutputFormat::Table => {
            println!("{:>6} {:>8} {:>10} {:>6}  terminal", "frame", "reward", "score", "lives");
            for r in reports {
                println!(
                    "{:>6} {:>8} {:>10} {:>6}  {}",
                    r.frame, r.reward, r.score, r.lives, r.terminal
                );
            }
        }
    }
    Ok(())
}
