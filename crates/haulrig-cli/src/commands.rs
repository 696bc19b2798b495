//! Command implementations

use crate::cli::{Cli, Commands};
use crate::output;
use haulrig_app::app::{
    build_totals, find_matches_for_load, rig_offset, truck_profile, validate_catalog,
    validate_entry, BuildSelection, EntryKind, MatchOptions,
};
use haulrig_app::repository::open_catalog_repo;
use haulrig_app::{AxleDistributionKind, Config};
use haulrig_types::{OutputFormat, Result};
use std::path::PathBuf;
use tracing::warn;

/// Exit status when validation finds a save-blocking error
pub const EXIT_VALIDATION_FAILED: i32 = 2;

/// Run the parsed command and return the process exit status
pub fn execute(cli: Cli) -> Result<i32> {
    // Load config
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Match {
            load,
            truck,
            distribution,
            seed,
            carriable,
            limit,
        } => {
            let options = MatchOptions::from_config(&config)
                .with_distribution(distribution.unwrap_or(config.axle_distribution))
                .with_seed(*seed)
                .with_truck(truck.clone())
                .with_carriable_only(*carriable)
                .with_limit(*limit);
            cmd_match(&config, cli.catalog.clone(), load, &options, output_format)
        }

        Commands::Validate {
            trailer,
            modular,
            truck,
        } => {
            let target = match (trailer, modular, truck) {
                (Some(id), _, _) => Some((EntryKind::Trailer, id.as_str())),
                (_, Some(id), _) => Some((EntryKind::ModularTrailer, id.as_str())),
                (_, _, Some(id)) => Some((EntryKind::Truck, id.as_str())),
                _ => None,
            };
            cmd_validate(&config, cli.catalog.clone(), target, output_format)
        }

        Commands::Offset { trailer, truck } => {
            cmd_offset(&config, cli.catalog.clone(), trailer, truck, output_format)
        }

        Commands::Cg { truck, axles } => {
            cmd_cg(&config, cli.catalog.clone(), truck, *axles, output_format)
        }

        Commands::Totals {
            trailers,
            modular,
            trucks,
            loads,
        } => {
            let selection = BuildSelection {
                trailer_ids: trailers.clone(),
                modular_ids: modular.clone(),
                truck_ids: trucks.clone(),
                load_ids: loads.clone(),
            };
            cmd_totals(&config, cli.catalog.clone(), &selection, output_format)
        }

        Commands::Config {
            show,
            set_catalog,
            set_output,
            set_distribution,
            set_seed,
            clear_seed,
            reset,
        } => cmd_config(
            *show,
            set_catalog.clone(),
            *set_output,
            *set_distribution,
            *set_seed,
            *clear_seed,
            *reset,
        ),
    }
}

fn cmd_match(
    config: &Config,
    catalog: Option<PathBuf>,
    load_id: &str,
    options: &MatchOptions,
    output_format: OutputFormat,
) -> Result<i32> {
    let repo = open_catalog_repo(config, catalog)?;
    let report = find_matches_for_load(&repo, load_id, options)?;

    if report.carriable_count() == 0 {
        warn!(load = %load_id, "no trailer in the catalog can carry this load");
    }

    output::print_match_report(output_format, &report)?;
    Ok(0)
}

fn cmd_validate(
    config: &Config,
    catalog: Option<PathBuf>,
    target: Option<(EntryKind, &str)>,
    output_format: OutputFormat,
) -> Result<i32> {
    let repo = open_catalog_repo(config, catalog)?;
    let reports = match target {
        Some((kind, id)) => vec![validate_entry(&repo, kind, id)?],
        None => validate_catalog(&repo)?,
    };

    output::print_validation_reports(output_format, &reports)?;

    if reports.iter().any(|r| r.blocks_save()) {
        Ok(EXIT_VALIDATION_FAILED)
    } else {
        Ok(0)
    }
}

fn cmd_offset(
    config: &Config,
    catalog: Option<PathBuf>,
    trailer_id: &str,
    truck_id: &str,
    output_format: OutputFormat,
) -> Result<i32> {
    let repo = open_catalog_repo(config, catalog)?;
    let pairing = rig_offset(&repo, trailer_id, truck_id)?;
    output::print_rig_pairing(output_format, trailer_id, &pairing)?;
    Ok(0)
}

fn cmd_cg(
    config: &Config,
    catalog: Option<PathBuf>,
    truck_id: &str,
    axles: Option<u32>,
    output_format: OutputFormat,
) -> Result<i32> {
    let repo = open_catalog_repo(config, catalog)?;
    let profile = truck_profile(&repo, truck_id, axles)?;
    output::print_truck_profile(output_format, &profile)?;
    Ok(0)
}

fn cmd_totals(
    config: &Config,
    catalog: Option<PathBuf>,
    selection: &BuildSelection,
    output_format: OutputFormat,
) -> Result<i32> {
    let repo = open_catalog_repo(config, catalog)?;
    let totals = build_totals(&repo, selection)?;
    output::print_build_totals(output_format, &totals)?;
    Ok(0)
}

fn cmd_config(
    show: bool,
    set_catalog: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_distribution: Option<AxleDistributionKind>,
    set_seed: Option<u64>,
    clear_seed: bool,
    reset: bool,
) -> Result<i32> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(0);
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(path) = set_catalog {
        config.catalog_path = Some(path);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(distribution) = set_distribution {
        config.axle_distribution = distribution;
        modified = true;
    }

    if let Some(seed) = set_seed {
        config.seed = Some(seed);
        modified = true;
    }

    if clear_seed {
        config.seed = None;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(0)
}
