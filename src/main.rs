//! Wordbank - Main entrypoint.
//!
//! Loads configuration and the dictionary, then runs one lookup, suggestion
//! or maintenance command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use wordbank_lib::config::{to_toml, ConfigLoader, LogConfig, WordbankConfig, ENV_PREFIX};
use wordbank_lib::error::{report_error, ErrorContext, WordbankError};
use wordbank_lib::loader::DictionaryFile;
use wordbank_lib::search::{EngineKind, SearchComparator, SearchOutcome, WordIndex};

/// Command line arguments for Wordbank.
#[derive(Parser, Debug)]
#[clap(name = "wordbank", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser, global = true)]
    config: Option<PathBuf>,

    /// Dictionary file, overriding the configured one
    #[clap(short, long, value_parser, global = true)]
    dictionary: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Engine selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineChoice {
    One(EngineKind),
    All,
}

impl std::str::FromStr for EngineChoice {
    type Err = wordbank_lib::search::ParseEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(EngineChoice::All)
        } else {
            s.parse().map(EngineChoice::One)
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a word
    Lookup {
        /// Word to look up
        word: String,

        /// sequential, bst, avl, rb or all
        #[clap(short, long)]
        engine: Option<EngineChoice>,

        /// Print results as JSON
        #[clap(long)]
        json: bool,
    },

    /// List words starting with a prefix
    Suggest {
        /// Prefix to complete
        prefix: String,

        /// Maximum number of suggestions
        #[clap(short, long)]
        limit: Option<usize>,

        /// sequential, bst, avl or rb
        #[clap(short, long)]
        engine: Option<EngineKind>,
    },

    /// Report the shape of every engine
    Stats,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .context("invalid log filter")?;

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(ErrorLayer::default());

    let installed = if log.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_file(log.source_location)
                    .with_line_number(log.source_location)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_file(log.source_location)
                    .with_line_number(log.source_location)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    installed.context("failed to set global tracing subscriber")
}

fn load_index(config: &WordbankConfig) -> Result<WordIndex> {
    let source = DictionaryFile::new(&config.dictionary.path, config.dictionary.skip_malformed);
    WordIndex::from_source(&source)
        .map_err(|err| {
            let reported = ErrorContext::new(WordbankError::Custom(err.to_string()), "loader")
                .with_details(config.dictionary.path.display().to_string())
                .with_span_trace();
            report_error(reported);
            err
        })
        .with_context(|| format!("loading {}", config.dictionary.path.display()))
}

fn print_outcome(outcome: &SearchOutcome) {
    println!("[{}] {:.4} ms", outcome.engine, outcome.elapsed_ms());
    println!("  path: {}", outcome.path_display());
    if outcome.found {
        println!("  meaning: {}", outcome.meaning);
    } else {
        println!("  not found");
    }
}

/// Main entry point for the application.
fn main() -> Result<()> {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let mut config = loader.load().context("failed to load configuration")?;
    if let Some(path) = args.dictionary {
        config.dictionary.path = path;
    }

    init_logging(&config.log)?;
    wordbank_lib::init();

    match args.command {
        Command::Lookup { word, engine, json } => {
            let index = load_index(&config)?;
            let comparator = SearchComparator::new(&index);
            let choice = engine.unwrap_or(EngineChoice::One(config.search.default_engine));
            let outcomes = match choice {
                EngineChoice::One(kind) => vec![comparator.run_and_time(kind, word.trim())],
                EngineChoice::All => comparator.compare_all(word.trim()),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&outcomes)?);
            } else {
                outcomes.iter().for_each(print_outcome);
            }
        }
        Command::Suggest { prefix, limit, engine } => {
            let index = load_index(&config)?;
            let limit = limit.unwrap_or(config.search.prefix_limit);
            let engine = engine.unwrap_or(config.search.suggestion_engine);
            for word in SearchComparator::new(&index).prefix(engine, prefix.trim(), limit) {
                println!("{word}");
            }
        }
        Command::Stats => {
            let index = load_index(&config)?;
            let stats = index.stats();
            println!(
                "{:<12}{:>10}{:>10}{:>10}{:>10}  invariants",
                "engine", "entries", "buckets", "tallest", "height"
            );
            for row in &stats.engines {
                println!(
                    "{:<12}{:>10}{:>10}{:>10}{:>10}  {}",
                    row.engine.label(),
                    row.entries,
                    row.buckets,
                    row.tallest_bucket.map(String::from).unwrap_or_else(|| "-".to_string()),
                    row.max_height,
                    if row.invariants_hold { "ok" } else { "BROKEN" }
                );
            }
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("configuration ok");
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }

            let toml = to_toml(&WordbankConfig::default())?;
            std::fs::write(&output, toml)
                .with_context(|| format!("writing {}", output.display()))?;

            info!("Default configuration written to {:?}", output);
        }
    }

    Ok(())
}
