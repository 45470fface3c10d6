use std::{error::Error, fs, path::Path, process::ExitCode};

use clap::Parser;
use log::{error, info, LevelFilter};
use mapgen_core::{
    config::{load_config, load_configs_from_dir, SweepConfig},
    generator::ExternalGenerator,
    sweep::{Sweep, SweepReport},
};
use simple_logger::SimpleLogger;

use crate::args::Args;

pub mod args;

fn resolve_config(args: &Args) -> Result<SweepConfig, Box<dyn Error>> {
    let base = if let Some(path) = &args.config {
        load_config(path)?
    } else if let Some(name) = &args.preset {
        let mut presets = load_configs_from_dir::<SweepConfig, _>(&args.config_dir)?;
        presets
            .remove(name)
            .ok_or_else(|| format!("preset '{}' not found in {}", name, args.config_dir.display()))?
    } else {
        SweepConfig::default()
    };

    Ok(args.apply_to(base))
}

fn list_presets(config_dir: &Path) -> Result<(), Box<dyn Error>> {
    let presets = load_configs_from_dir::<SweepConfig, _>(config_dir)?;
    let mut names: Vec<_> = presets.keys().collect();
    names.sort();

    for name in names {
        let preset = &presets[name];
        println!(
            "{:<12} {}",
            name,
            preset.description.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

fn write_report(path: &Path, report: &SweepReport) -> Result<(), Box<dyn Error>> {
    let data = serde_json::to_string_pretty(report)?;
    fs::write(path, data)?;
    info!("report written to {}", path.display());
    Ok(())
}

fn run(args: &Args) -> Result<bool, Box<dyn Error>> {
    if args.list_presets {
        list_presets(&args.config_dir)?;
        return Ok(true);
    }

    let config = resolve_config(args)?;
    let sweep = Sweep::new(config)?;

    if args.dry_run {
        for (params, path) in sweep.plan() {
            println!(
                "N={} K={} seed={} -> {}",
                params.size,
                params.mines,
                params.seed,
                path.display()
            );
        }
        return Ok(true);
    }

    let config = sweep.config();
    let mut generator =
        ExternalGenerator::new(config.generator.clone(), config.generator_args.clone());

    let report = sweep.run(&mut generator)?;

    if let Some(path) = &args.report {
        write_report(path, &report)?;
    }

    Ok(!config.strict || report.is_clean())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(err) = SimpleLogger::new().with_level(level).init() {
        eprintln!("failed to initialize logger: {}", err);
    }

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
