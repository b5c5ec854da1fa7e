// SPDX-License-Identifier: PMPL-1.0-or-later

//! country-translator: pick a country and a language, get the country's name
//! in that language.

use anyhow::Result;
use clap::Parser;
use colored::*;
use country_translator::session::{self, Session};
use country_translator::store::TranslationStore;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "country-translator")]
#[command(version)]
#[command(about = "Show country names translated into other languages")]
#[command(long_about = None)]
struct Cli {
    /// Dataset to load instead of the bundled one (JSON array of records)
    #[arg(short, long, value_name = "PATH", env = "COUNTRY_TRANSLATOR_DATA")]
    data: Option<PathBuf>,

    /// Country to translate, by English name (skips the interactive loop)
    #[arg(short, long, requires = "language")]
    country: Option<String>,

    /// Language to translate into, by English name
    #[arg(short, long, requires = "country")]
    language: Option<String>,

    /// Print the known countries and exit
    #[arg(long, conflicts_with_all = ["country", "language"])]
    list: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn load_store(data: Option<&PathBuf>) -> Result<TranslationStore> {
    match data {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading dataset");
            TranslationStore::from_path(path)
        }
        None => TranslationStore::embedded(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let color = !cli.no_color && io::stdout().is_terminal();
    if !color {
        colored::control::set_override(false);
    }

    let store = load_store(cli.data.as_ref())?;
    if store.is_empty() {
        eprintln!("{}", "warning: dataset contains no countries".yellow());
    }

    if cli.list {
        for name in session::country_names(&store) {
            println!("{}", name);
        }
        return Ok(());
    }

    if let (Some(country), Some(language)) = (&cli.country, &cli.language) {
        println!("{}", session::translate_once(&store, country, language)?);
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(&store, stdin.lock(), stdout.lock())
        .with_color(color)
        .run()
}
