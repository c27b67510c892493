//! Lanai Trie - command line entrypoint.
//!
//! Loads key/value pairs from a JSON object into a trie and runs exact
//! lookups or infix searches against it. Also validates and generates the
//! configuration file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use lanai_trie_lib::config::{self, ConfigLoader, LanaiConfig, LogConfig};
use lanai_trie_lib::data_structures::{LanaiTrie, LanaiTrieConfig};
use lanai_trie_lib::error::{LanaiError, LanaiResult};
use tracing::info;

/// Command line arguments for the Lanai Trie tool.
#[derive(Parser, Debug)]
#[clap(name = "Lanai Trie", version, author, about)]
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
    /// List every entry whose key contains the keyword
    Search {
        /// JSON file holding an object of key/value pairs
        #[clap(short, long, value_parser)]
        entries: PathBuf,

        /// Substring to look for
        keyword: String,

        /// Print hits as JSON
        #[clap(long)]
        json: bool,
    },

    /// Print the value stored under a key
    Get {
        /// JSON file holding an object of key/value pairs
        #[clap(short, long, value_parser)]
        entries: PathBuf,

        /// Key to look up
        key: String,
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
fn init_logging(log: &LogConfig) -> LanaiResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| LanaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a trie from a JSON object of key/value pairs.
fn load_entries(path: &Path, trie_config: LanaiTrieConfig) -> LanaiResult<LanaiTrie<serde_json::Value>> {
    let text = std::fs::read_to_string(path)?;
    let entries: BTreeMap<String, serde_json::Value> = serde_json::from_str(&text)?;

    let mut trie = LanaiTrie::with_config(trie_config);
    for (key, value) in entries {
        if trie.try_add(key, value)?.is_some() {
            tracing::warn!("Entries in {:?} collide after case folding", path);
        }
    }

    info!("Loaded {} entries from {:?}", trie.len(), path);
    Ok(trie)
}

/// Main entry point for the application.
fn main() -> LanaiResult<()> {
    let args = Args::parse();

    let loader = match &args.config {
        Some(path) => ConfigLoader::new(Some(path), config::ENV_PREFIX),
        None => ConfigLoader::new(Some(config::DEFAULT_CONFIG_PATH), config::ENV_PREFIX),
    };
    let loaded = match &args.config {
        Some(_) => loader.load(),
        None => loader.load_or_default(),
    };

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    init_logging(&config.log)?;

    match args.command {
        Command::Search {
            entries,
            keyword,
            json,
        } => {
            let trie = load_entries(&entries, config.trie)?;
            let hits = trie.search(&keyword);
            info!("Found {} entries containing {:?}", hits.len(), keyword);

            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                for hit in hits {
                    println!("{}\t{}", hit.key, hit.value);
                }
            }
            Ok(())
        }
        Command::Get { entries, key } => {
            let trie = load_entries(&entries, config.trie)?;
            match trie.get(&key) {
                Some(value) => {
                    println!("{value}");
                    Ok(())
                }
                None => {
                    tracing::error!("Key {:?} not found", key);
                    process::exit(1);
                }
            }
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&LanaiConfig::default())
                .map_err(|e| LanaiError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
