//! CLI definition using clap

use clap::{Parser, Subcommand};
use haulrig_app::AxleDistributionKind;
use haulrig_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "haulrig")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Trailer compatibility and load distribution for heavy-haul rigs")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog file (.json or .toml). Uses config value if not specified.
    #[arg(long, short = 'c', global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logging on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank catalog trailers for a load
    Match {
        /// Load id in the catalog
        load: String,

        /// Towing truck id; adds the coupling offset for rigid trailers
        #[arg(long, short = 't')]
        truck: Option<String>,

        /// Axle load estimation (randomized, nominal). Uses config value if not specified.
        #[arg(long, short = 'd')]
        distribution: Option<AxleDistributionKind>,

        /// Seed for the randomized estimation. Uses config value if not specified.
        #[arg(long)]
        seed: Option<u64>,

        /// Only show trailers that can carry the load
        #[arg(long)]
        carriable: bool,

        /// Limit number of entries shown
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Validate trailer, modular trailer and truck configurations.
    /// Validates the whole catalog when no id is given.
    Validate {
        /// Rigid trailer id
        #[arg(long, conflicts_with_all = ["modular", "truck"])]
        trailer: Option<String>,

        /// Modular trailer id
        #[arg(long, conflicts_with = "truck")]
        modular: Option<String>,

        /// Truck id
        #[arg(long)]
        truck: Option<String>,
    },

    /// Show the coupling offset of a trailer behind a truck
    Offset {
        /// Rigid trailer id
        trailer: String,

        /// Truck id
        truck: String,
    },

    /// Show axle positions and center of gravity of a truck
    Cg {
        /// Truck id
        truck: String,

        /// Recompute with this many axles
        #[arg(long)]
        axles: Option<u32>,
    },

    /// Aggregate figures over catalog entries (all entries when none are given)
    Totals {
        /// Trailer ids (repeatable)
        #[arg(long = "trailer")]
        trailers: Vec<String>,

        /// Modular trailer ids (repeatable)
        #[arg(long = "modular")]
        modular: Vec<String>,

        /// Truck ids (repeatable)
        #[arg(long = "truck")]
        trucks: Vec<String>,

        /// Load ids (repeatable)
        #[arg(long = "load")]
        loads: Vec<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default catalog file
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set axle load estimation (randomized, nominal)
        #[arg(long)]
        set_distribution: Option<AxleDistributionKind>,

        /// Set seed for the randomized estimation
        #[arg(long)]
        set_seed: Option<u64>,

        /// Remove the configured seed
        #[arg(long, conflicts_with = "set_seed")]
        clear_seed: bool,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
