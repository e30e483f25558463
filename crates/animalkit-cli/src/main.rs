//! AnimalKit CLI - random animal pictures and facts from the command line

use animalkit::{AnimalClient, AnimalError, Resource, SUPPORTED_ANIMALS};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Output format for picture/fact subcommands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Bare value
    #[default]
    Text,
    /// JSON object
    Json,
}

/// AnimalKit - random animal pictures and facts
#[derive(Parser, Debug)]
#[command(name = "animalkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a random picture URL
    Picture {
        /// Animal name (dog or cat, any casing)
        animal: String,

        #[command(flatten)]
        opts: FetchArgs,
    },
    /// Print a fact
    Fact {
        /// Animal name (dog or cat, any casing)
        animal: String,

        #[command(flatten)]
        opts: FetchArgs,
    },
    /// List supported animals
    Animals,
}

#[derive(clap::Args, Debug)]
struct FetchArgs {
    /// Output format
    #[arg(long, short, default_value = "text")]
    output: OutputFormat,

    /// Custom User-Agent
    #[arg(long)]
    user_agent: Option<String>,
}

/// JSON output record
#[derive(Debug, Serialize)]
struct Output<'a> {
    animal: &'a str,
    kind: Resource,
    value: &'a str,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Picture { animal, opts }) => {
            run_fetch(&animal, Resource::Picture, opts).await;
        }
        Some(Commands::Fact { animal, opts }) => {
            run_fetch(&animal, Resource::Fact, opts).await;
        }
        Some(Commands::Animals) => {
            for animal in SUPPORTED_ANIMALS {
                writeln_safe(animal);
            }
        }
        None => {
            eprintln!("Usage: animalkit picture <ANIMAL>");
            eprintln!("   or: animalkit fact <ANIMAL>");
            eprintln!("   or: animalkit --help");
            std::process::exit(1);
        }
    }
}

async fn run_fetch(animal: &str, resource: Resource, opts: FetchArgs) {
    match fetch(animal, resource, opts.user_agent).await {
        Ok(value) => writeln_safe(&format_output(animal, resource, &value, opts.output)),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn fetch(
    animal: &str,
    resource: Resource,
    user_agent: Option<String>,
) -> Result<String, AnimalError> {
    let mut builder = AnimalClient::builder();
    if let Some(ua) = user_agent {
        builder = builder.user_agent(ua);
    }
    let client = builder.build()?;

    match resource {
        Resource::Picture => client.picture(animal).await,
        Resource::Fact => client.fact(animal).await,
    }
}

fn format_output(animal: &str, kind: Resource, value: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => {
            let record = Output {
                animal,
                kind,
                value,
            };
            serde_json::to_string(&record).unwrap_or_else(|e| {
                eprintln!("Error serializing output: {}", e);
                std::process::exit(1);
            })
        }
    }
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}
