//! Prefix Tree - command-line entrypoint.
//!
//! Builds a prefix tree from the configured seed words plus the words given on
//! the command line, then runs a single query against it or walks through a
//! sample session.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use prefix_tree_lib::config::{AppConfig, ConfigLoader, LogConfig, OutputFormat, ENV_PREFIX};
use prefix_tree_lib::error::{PrefixError, PrefixResult};
use prefix_tree_lib::PrefixTree;
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Words of the tongue twister used by `demo` when no words are given.
const TONGUE_TWISTER: &str = "Shelly sells seashells by the sea shore";

/// Command line arguments for the prefix tree tool.
#[derive(Parser, Debug)]
#[clap(name = "prefix_tree", version, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Walk through inserting, searching and completing a set of words
    Demo {
        /// Words to store (defaults to a tongue twister)
        words: Vec<String>,
    },

    /// Print every stored word starting with a prefix
    Complete {
        /// Prefix to complete
        prefix: String,

        /// Words to store in addition to the seed words
        words: Vec<String>,
    },

    /// Check whether a word is stored
    Contains {
        /// Word to look up
        word: String,

        /// Words to store in addition to the seed words
        words: Vec<String>,
    },

    /// Print every stored word
    Strings {
        /// Words to store in addition to the seed words
        words: Vec<String>,
    },

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
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> PrefixResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| PrefixError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a tree from the seed words followed by `words`.
fn build_tree(config: &AppConfig, words: &[String]) -> PrefixTree {
    let tree = PrefixTree::from_strings(config.seed.words.iter().chain(words));
    info!(size = tree.size(), nodes = tree.node_count(), "tree built");
    tree
}

/// Prints `strings` one per line or as JSON under `key`.
fn print_strings(format: OutputFormat, key: &str, strings: &[String]) -> PrefixResult<()> {
    match format {
        OutputFormat::Text => {
            for string in strings {
                println!("{string}");
            }
        }
        OutputFormat::Json => {
            let mut document = serde_json::Map::new();
            document.insert(key.to_string(), json!(strings));
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }
    Ok(())
}

/// Runs the sample session over `words`.
fn run_demo(words: &[String]) {
    println!("strings: {words:?}");

    let mut tree = PrefixTree::new();
    println!("\ntree: {tree}");
    println!("root: {}", tree.root());
    println!("strings: {:?}", tree.strings());

    println!("\nInserting strings:");
    for word in words {
        tree.insert(word);
        println!("insert({word:?}), size: {}", tree.size());
    }

    println!("\ntree: {tree}");
    println!("root: {}", tree.root());

    let stored: BTreeSet<&str> = words.iter().map(String::as_str).collect();

    println!("\nSearching for strings in tree:");
    for word in &stored {
        println!("contains({word:?}): {}", tree.contains(word));
    }

    // First half of every word, by symbols
    let prefixes: BTreeSet<String> = stored
        .iter()
        .map(|word| {
            let half = word.chars().count() / 2;
            word.chars().take(half).collect()
        })
        .collect();

    println!("\nSearching for strings not in tree:");
    for prefix in &prefixes {
        if prefix.is_empty() || stored.contains(prefix.as_str()) {
            continue;
        }
        println!("contains({prefix:?}): {}", tree.contains(prefix));
    }

    println!("\nCompleting prefixes in tree:");
    for prefix in &prefixes {
        println!("complete({prefix:?}): {:?}", tree.complete(prefix));
    }

    println!("\nRetrieving all strings:");
    let retrieved = tree.strings();
    println!("strings: {retrieved:?}");
    let matches = retrieved.iter().map(String::as_str).collect::<BTreeSet<_>>() == stored;
    println!("matches? {matches}");
}

/// Executes `command` against the loaded configuration.
fn run(command: Command, config: &AppConfig) -> PrefixResult<()> {
    let format = config.completion.output;

    match command {
        Command::Demo { words } => {
            let words = if words.is_empty() {
                TONGUE_TWISTER.split_whitespace().map(str::to_string).collect()
            } else {
                words
            };
            run_demo(&words);
            Ok(())
        }
        Command::Complete { prefix, words } => {
            let tree = build_tree(config, &words);
            let completions = match config.completion.limit() {
                Some(limit) => tree.complete_with_limit(&prefix, limit),
                None => tree.complete(&prefix),
            };
            info!(prefix = %prefix, found = completions.len(), "completed prefix");
            print_strings(format, "completions", &completions)
        }
        Command::Contains { word, words } => {
            let contained = build_tree(config, &words).contains(&word);
            match format {
                OutputFormat::Text => println!("{contained}"),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({ "word": word, "contained": contained }))?
                ),
            }
            Ok(())
        }
        Command::Strings { words } => {
            let tree = build_tree(config, &words);
            print_strings(format, "strings", &tree.strings())
        }
        Command::Validate => {
            // Loading already validated the configuration
            info!("Configuration validated successfully");
            println!("configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, AppConfig::default().to_toml()?)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() -> PrefixResult<()> {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    init_logging(&config.log)?;

    run(args.command, &config)
}
