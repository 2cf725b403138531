use clap::{Parser, Subcommand};
use heartguide_core::{generate_fallback_analysis, prompts::CRISIS_RESOURCES, Signals};
use heartguide_types::NonEmptyText;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "heartguide")]
#[command(about = "HeartGuide offline relationship analysis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the offline analysis report for a relationship description
    Analyze {
        /// Description text (reads stdin when neither TEXT nor --file is given)
        text: Option<String>,
        /// Read the description from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Print the signals extracted from a description as JSON
    Signals {
        /// Description text (reads stdin when neither TEXT nor --file is given)
        text: Option<String>,
        /// Read the description from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Print crisis hotline information
    CrisisResources,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze { text, file }) => {
            let input = resolve_input(text, file.as_deref(), std::io::stdin())?;
            println!("{}", generate_fallback_analysis(input.as_str()));
        }
        Some(Commands::Signals { text, file }) => {
            let input = resolve_input(text, file.as_deref(), std::io::stdin())?;
            let signals = Signals::extract(input.as_str());
            println!("{}", serde_json::to_string_pretty(&signals)?);
        }
        Some(Commands::CrisisResources) => {
            println!("{}", CRISIS_RESOURCES);
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

/// Picks the description from the argument, the file, or `stdin`, in that order.
///
/// Blank input is rejected here so the report is only ever produced for real text.
fn resolve_input(
    text: Option<String>,
    file: Option<&Path>,
    mut stdin: impl Read,
) -> Result<NonEmptyText, Box<dyn std::error::Error>> {
    let raw = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?,
        (None, None) => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };

    NonEmptyText::new(&raw).map_err(|_| "Data cannot be empty".into())
}
