// ABOUTME: Pantry Chef CLI - recipe recommendations from the command line
// ABOUTME: Parses arguments, loads configuration and dispatches to command handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors
//!
//! Usage:
//! ```bash
//! # Best recipe for a vegan with the current pantry
//! pantry-chef recommend --diet vegan --usage-mode optimal
//!
//! # Random eligible recipe, reproducible with a seed
//! pantry-chef recommend --diet vegetarian --usage-mode random --seed 42
//!
//! # Readiness of every eligible recipe
//! pantry-chef scores --diet normal
//!
//! # Browse the catalog
//! pantry-chef catalog list
//! pantry-chef catalog show "Soup"
//! ```

mod commands;
mod helpers;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chef_core::constants::usage_modes;
use clap::{ArgAction, Parser, Subcommand};
use pantry_chef::config::{ChefConfig, ConfigOverrides, LogLevel};
use pantry_chef::logging::LoggingConfig;
use pantry_chef::services::RecommendationService;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pantry-chef",
    version,
    about = "Recipe recommendations from your pantry",
    long_about = "Recommends a recipe from the catalog that complies with a diet and can be cooked with what is in the pantry."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe catalog directory override
    #[arg(long, global = true)]
    catalog_dir: Option<PathBuf>,

    /// Pantry JSON file override
    #[arg(long, global = true)]
    pantry: Option<PathBuf>,

    /// Readiness a recipe must exceed to be recommended
    #[arg(long, global = true)]
    min_readiness: Option<f64>,

    /// Ignore pantry items with quantity at or below this value
    #[arg(long, global = true)]
    minimum_quantity: Option<f64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Recommend one recipe
    Recommend {
        /// Dietary restriction (normal, vegetarian, vegan); unknown values mean normal
        #[arg(long, default_value = "normal")]
        diet: String,

        /// "optimal" picks the best recipe, anything else picks at random
        #[arg(long, default_value = usage_modes::OPTIMAL)]
        usage_mode: String,

        /// Seed for the random policy
        #[arg(long)]
        seed: Option<u64>,

        /// Include readiness, candidate count and policy in the output
        #[arg(long)]
        explain: bool,
    },

    /// Show readiness of every eligible recipe
    Scores {
        /// Dietary restriction (normal, vegetarian, vegan)
        #[arg(long, default_value = "normal")]
        diet: String,
    },

    /// Catalog inspection commands
    Catalog {
        #[command(subcommand)]
        action: CatalogCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CatalogCommand {
    /// List recipe names
    List,

    /// Show one recipe
    Show {
        /// Exact recipe name
        name: String,
    },
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            catalog_dir: self.catalog_dir.clone(),
            pantry_file: self.pantry.clone(),
            min_readiness: self.min_readiness,
            minimum_quantity: self.minimum_quantity,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose > 0 {
        logging = logging.with_level(LogLevel::from_verbosity(cli.verbose));
    }
    logging.init()?;

    // Validated by from_config, after flags have replaced environment values
    let config = ChefConfig::from_env()?.with_overrides(&cli.overrides());
    debug!(?config, "Effective configuration");
    let service = RecommendationService::from_config(&config)?;

    let mut out = io::stdout().lock();
    let outcome = match cli.command {
        Command::Recommend {
            diet,
            usage_mode,
            seed,
            explain,
        } => commands::recommend::run(&service, &diet, &usage_mode, seed, explain, &mut out)?,
        Command::Scores { diet } => commands::scores::run(&service, &diet, &mut out)?,
        Command::Catalog { action } => match action {
            CatalogCommand::List => commands::catalog::list(&service, &mut out)?,
            CatalogCommand::Show { name } => commands::catalog::show(&service, &name, &mut out)?,
        },
    };
    Ok(outcome.into())
}
