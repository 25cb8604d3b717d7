//! rdeck - Main Binary
//!
//! Command line front end for deck list resolution, validation and the
//! draw statistics. Prints the resolved deck model as JSON, or a sorted
//! plain-text listing in renderer order.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use redemption_deck_rs::{
    loader::{parse_deck, CardCatalog, DeckFileFormat},
    resolver::DeckResolver,
    sort::{parse_sort_fields, sort_entries},
    stats::DeckAnalyzer,
    validator::{validate, DeckFormat, ValidationMode},
};
use std::path::{Path, PathBuf};

/// Deck format for validation thresholds
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Type 1: 50-154 main deck cards, up to 10 in reserve
    #[value(name = "type_1")]
    Type1,
    /// Type 2: 50-252 main deck cards, up to 15 in reserve
    #[value(name = "type_2")]
    Type2,
}

impl From<FormatArg> for DeckFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Type1 => DeckFormat::Type1,
            FormatArg::Type2 => DeckFormat::Type2,
        }
    }
}

#[derive(Parser)]
#[command(name = "rdeck")]
#[command(about = "Redemption deck list checker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve and validate a deck file, printing the deck model as JSON
    Check {
        /// Deck list file (.txt tab-delimited or .dek container)
        deck_file: PathBuf,

        /// Card database file (tab-separated with a header row)
        #[arg(long, default_value = "assets/carddata/carddata.txt")]
        catalog: PathBuf,

        /// Deck format for validation thresholds
        #[arg(long, value_enum, default_value = "type_1")]
        format: FormatArg,

        /// Use the looser preview thresholds instead of tournament rules
        #[arg(long)]
        lenient: bool,

        /// Attach the M-count and AoD-count draw statistics
        #[arg(long)]
        stats: bool,

        /// Set random seed for deterministic statistics
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the resolved deck as a sorted listing (renderer order)
    List {
        /// Deck list file (.txt tab-delimited or .dek container)
        deck_file: PathBuf,

        /// Card database file (tab-separated with a header row)
        #[arg(long, default_value = "assets/carddata/carddata.txt")]
        catalog: PathBuf,

        /// Comma separated sort fields: alignment, brigade, type, name
        #[arg(long, default_value = "alignment,brigade,name")]
        sort: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            deck_file,
            catalog,
            format,
            lenient,
            stats,
            seed,
        } => {
            let deck = resolve_deck_file(&deck_file, &catalog)?;

            let mode = if lenient {
                ValidationMode::Lenient
            } else {
                ValidationMode::Strict
            };
            validate(&deck, format.into(), mode)?;

            let (m_count, aod_count) = if stats {
                let mut analyzer = match seed {
                    Some(seed) => DeckAnalyzer::with_seed(seed),
                    None => DeckAnalyzer::new(),
                };
                (Some(analyzer.m_count(&deck)), Some(analyzer.aod_count(&deck)))
            } else {
                (None, None)
            };

            let report = deck.report(m_count, aod_count);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::List {
            deck_file,
            catalog,
            sort,
        } => {
            let deck = resolve_deck_file(&deck_file, &catalog)?;
            let fields = parse_sort_fields(&sort)?;

            for (name, entry) in sort_entries(&deck.main, &fields) {
                println!("{}x {}", entry.quantity, name);
            }
            if !deck.reserve.is_empty() {
                println!("\nReserve:");
                for (name, entry) in sort_entries(&deck.reserve, &fields) {
                    println!("{}x {}", entry.quantity, name);
                }
            }
        }
    }

    Ok(())
}

/// Load the catalog, parse the deck file and resolve it, reporting
/// unknown card names on stderr.
fn resolve_deck_file(
    deck_file: &Path,
    catalog_path: &Path,
) -> anyhow::Result<redemption_deck_rs::resolver::ResolvedDeck> {
    let catalog = CardCatalog::load_from_file(catalog_path)
        .with_context(|| format!("loading card catalog from {}", catalog_path.display()))?;

    let content = std::fs::read_to_string(deck_file)
        .with_context(|| format!("reading deck file {}", deck_file.display()))?;
    let entries = parse_deck(&content, DeckFileFormat::from_path(deck_file))?;

    let deck = DeckResolver::new(&catalog).resolve(&entries)?;
    for name in &deck.skipped {
        eprintln!("Could not find {name}. Skipping it.");
    }

    Ok(deck)
}
