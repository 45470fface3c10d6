use std::path::PathBuf;

use clap::{crate_version, Parser};
use mapgen_core::{config::SweepConfig, random::Seed};

#[derive(Parser, Debug)]
#[command(name = "generate-example-maps")]
#[command(version = crate_version!())]
#[command(about = "Generate the example minesweeper maps by sweeping the map generator over all sizes", long_about = None)]
pub struct Args {
    /// debug to console
    #[arg(short, long)]
    pub verbose: bool,

    /// path to a sweep config (json)
    #[arg(short, long, conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// directory with named sweep presets
    #[arg(long, default_value = "./data/configs/sweep")]
    pub config_dir: PathBuf,

    /// select a preset from config_dir by name
    #[arg(short, long)]
    pub preset: Option<String>,

    /// print available presets and exit
    #[arg(long)]
    pub list_presets: bool,

    /// path to the map generator executable
    #[arg(short, long)]
    pub generator: Option<PathBuf>,

    /// extra argument passed to the generator before N K seed (repeatable)
    #[arg(long = "generator-arg", allow_hyphen_values = true)]
    pub generator_args: Vec<String>,

    /// directory that is wiped and filled with the generated maps
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// smallest map is 2^min_exponent
    #[arg(long)]
    pub min_exponent: Option<u32>,

    /// largest map is 2^max_exponent
    #[arg(long)]
    pub max_exponent: Option<u32>,

    /// K = N*N / mine_divisor
    #[arg(long)]
    pub mine_divisor: Option<u64>,

    /// seed for every map, numbers are used as is and text is hashed
    #[arg(short, long, conflicts_with = "random_seed")]
    pub seed: Option<String>,

    /// draw one seed from entropy for the whole sweep
    #[arg(long)]
    pub random_seed: bool,

    /// file extension of the generated maps
    #[arg(long)]
    pub extension: Option<String>,

    /// abort if the generator is missing and exit non-zero if any map failed
    #[arg(long)]
    pub strict: bool,

    /// write a json report of all invocations to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// only print the planned invocations
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// command line flags take precedence over the loaded config
    pub fn apply_to(&self, mut config: SweepConfig) -> SweepConfig {
        if let Some(generator) = &self.generator {
            config.generator = generator.clone();
        }
        if !self.generator_args.is_empty() {
            config.generator_args = self.generator_args.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(min_exponent) = self.min_exponent {
            config.min_exponent = min_exponent;
        }
        if let Some(max_exponent) = self.max_exponent {
            config.max_exponent = max_exponent;
        }
        if let Some(mine_divisor) = self.mine_divisor {
            config.mine_divisor = mine_divisor;
        }
        if let Some(seed) = &self.seed {
            config.seed = Seed::parse(seed);
        } else if self.random_seed {
            config.seed = Seed::random();
        }
        if let Some(extension) = &self.extension {
            config.extension = extension.clone();
        }
        if self.strict {
            config.strict = true;
        }

        config
    }
}
