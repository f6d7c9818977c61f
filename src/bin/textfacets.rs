//! textfacets CLI - render decoded text-analysis responses
//!
//! Reads a decoded response document (JSON), normalizes it into typed
//! entities and prints them in descending score order.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;
use textfacets::{
    response_from_value, write_response, AuthorEntity, CategoryEntity, ConceptEntity, Entity,
    FromRawRecord, ImageEntity, KeywordEntity, LanguageEntity, MicroformatEntity, NamedEntity,
    OutputFormat, RelationEntity, ReportConfig, TaxonomyEntity, TitleEntity,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "textfacets")]
#[command(version, about = "Normalize and rank text-analysis results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a decoded response document
    Render {
        /// Which entity list the document carries
        #[arg(short, long, value_enum)]
        kind: Kind,

        /// Path to the decoded JSON document
        #[arg(short, long)]
        input: PathBuf,

        /// Optional YAML report configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format (text, json, ndjson); overrides the config file
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Maximum number of entities to render
        #[arg(short, long)]
        limit: Option<usize>,

        /// Skip scored entities below this score
        #[arg(short, long)]
        min_score: Option<f64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Categories,
    Keywords,
    Taxonomy,
    Concepts,
    Entities,
    Relations,
    Languages,
    Authors,
    Titles,
    Microformats,
    Images,
}

impl Kind {
    /// Array key in the decoded document; `None` for single-record documents.
    fn list_key(self) -> Option<&'static str> {
        match self {
            Kind::Categories => Some("categories"),
            Kind::Keywords => Some("keywords"),
            Kind::Taxonomy => Some("taxonomy"),
            Kind::Concepts => Some("concepts"),
            Kind::Entities => Some("entities"),
            Kind::Relations => Some("relations"),
            Kind::Microformats => Some("microformats"),
            Kind::Languages | Kind::Authors | Kind::Titles | Kind::Images => None,
        }
    }
}

fn render<T: Entity + FromRawRecord>(
    document: &serde_json::Value,
    list_key: Option<&str>,
    config: &ReportConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut response = response_from_value::<T>(document, list_key)?;
    if !response.is_ok() {
        eprintln!(
            "warning: service reported {}: {}",
            response.status(),
            response.status_info().unwrap_or("no details")
        );
    }
    let stdout = io::stdout();
    write_response(&mut response, config, stdout.lock())?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Render {
            kind,
            input,
            config,
            format,
            limit,
            min_score,
        } => {
            let mut report = match config {
                Some(path) => ReportConfig::load_from_file(&path)?,
                None => ReportConfig::default(),
            };
            if let Some(format) = format {
                report.format = format;
            }
            if limit.is_some() {
                report.limit = limit;
            }
            if min_score.is_some() {
                report.min_score = min_score;
            }
            report.validate()?;

            let contents = fs::read_to_string(&input)
                .map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;
            let document: serde_json::Value = serde_json::from_str(&contents)?;
            tracing::info!(kind = ?kind, input = %input.display(), "rendering response");

            let key = kind.list_key();
            match kind {
                Kind::Categories => render::<CategoryEntity>(&document, key, &report),
                Kind::Keywords => render::<KeywordEntity>(&document, key, &report),
                Kind::Taxonomy => render::<TaxonomyEntity>(&document, key, &report),
                Kind::Concepts => render::<ConceptEntity>(&document, key, &report),
                Kind::Entities => render::<NamedEntity>(&document, key, &report),
                Kind::Relations => render::<RelationEntity>(&document, key, &report),
                Kind::Languages => render::<LanguageEntity>(&document, key, &report),
                Kind::Authors => render::<AuthorEntity>(&document, key, &report),
                Kind::Titles => render::<TitleEntity>(&document, key, &report),
                Kind::Microformats => render::<MicroformatEntity>(&document, key, &report),
                Kind::Images => render::<ImageEntity>(&document, key, &report),
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
