//! Potion Crafting Cost Calculator
//!
//! Computes the recursive crafting cost of a potion defined in terms of
//! sub-potions, tokens, geodes and stats, and prints a per-potion
//! breakdown plus aggregated totals.

mod calculator;
mod dataset;
mod format;
mod models;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use log4rs::{
    Config,
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};

use crate::calculator::CostError;
use crate::dataset::Dataset;
use crate::format::plain;
use crate::models::Modifiers;
use crate::render::{TotalsPanel, build_view, render_tree};

#[derive(Parser)]
#[command(name = "potion-calculator")]
#[command(about = "Recursive crafting cost calculator for potions")]
struct Cli {
    /// Path to the potion dataset (JSON)
    #[arg(short, long, default_value = "data/potions.json")]
    data: PathBuf,

    /// Luck multiplier (displayed only, not applied to costs)
    #[arg(long, default_value = "1.0")]
    luck: f64,

    /// Roll speed multiplier (displayed only, not applied to costs)
    #[arg(long, default_value = "1.0")]
    roll_speed: f64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the full crafting cost of a potion
    Calc {
        /// Potion name (e.g., "Health Potion")
        potion: String,

        /// How many to craft
        #[arg(short, long, default_value = "1.0")]
        amount: f64,

        /// Show collapsed sub-potions too
        #[arg(long)]
        expand_all: bool,
    },

    /// List all potions in the dataset
    ListPotions,

    /// Show the definition of a specific potion
    Potion {
        /// Potion name
        name: String,
    },
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;

    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    // The dataset loads before any computation; a load failure leaves
    // nothing to serve.
    let dataset = Dataset::load(&cli.data)
        .with_context(|| format!("cannot load potion dataset from {}", cli.data.display()))?;

    let modifiers = Modifiers {
        luck: cli.luck,
        roll_speed: cli.roll_speed,
    };

    match cli.command {
        Commands::Calc {
            potion,
            amount,
            expand_all,
        } => match calculator::request_costs(&dataset, &potion, amount) {
            Ok(report) => {
                println!(
                    "Crafting x{} {} (luck x{}, roll speed x{})\n",
                    plain(amount),
                    potion,
                    plain(modifiers.luck),
                    plain(modifiers.roll_speed)
                );
                print!("{}", render_tree(&build_view(&report.root), expand_all));
                println!();
                print!("{}", TotalsPanel::new(&report.totals));
            }
            Err(CostError::NotFound(name)) => {
                println!("Potion '{}' not found", name);
            }
            Err(err) => return Err(err.into()),
        },

        Commands::ListPotions => {
            if dataset.is_empty() {
                println!("No potions in dataset.");
            } else {
                println!("{:<30} {:>12}", "Potion", "Base cost");
                println!("{}", "-".repeat(43));
                for potion in dataset.iter() {
                    println!("{:<30} {:>12}", potion.name, plain(potion.cost));
                }
            }
        }

        Commands::Potion { name } => {
            if let Some(potion) = dataset.get(&name) {
                println!("Potion: {}", potion.name);
                println!("  Base cost: {} Tokens", plain(potion.cost));

                if !potion.ingredients.is_empty() {
                    println!("  Ingredients:");
                    for entry in &potion.ingredients {
                        if entry.is_token_cost() {
                            println!("    x{} Tokens (base cost)", plain(entry.amount));
                        } else {
                            println!("    x{} {}", plain(entry.amount), entry.name);
                        }
                    }
                }

                if !potion.geode_yield.is_empty() {
                    println!("  Geodes:");
                    for geode in &potion.geode_yield {
                        println!(
                            "    x{} {} (1/{}), From {} Geode",
                            plain(geode.amount),
                            geode.name,
                            geode.rarity,
                            geode.origin
                        );
                    }
                }

                if !potion.stat_yield.is_empty() {
                    println!("  Stats:");
                    for stat in &potion.stat_yield {
                        println!("    x{} {}", plain(stat.amount), stat.name);
                    }
                }
            } else {
                println!("Potion '{}' not found", name);
            }
        }
    }

    Ok(())
}
