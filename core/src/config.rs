use std::error::Error;
use std::{collections::HashMap, fs, path::Path, path::PathBuf};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::SweepError;
use crate::map::{sweep_sizes, MapParams};
use crate::random::Seed;

/// sizes above 2^31 would overflow N² in u64
pub const MAX_EXPONENT: u32 = 31;

#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct SweepConfig {
    /// this can contain any description of the sweep preset
    pub description: Option<String>,

    /// path to the external map generator
    pub generator: PathBuf,

    /// extra arguments placed before N, K and seed
    pub generator_args: Vec<String>,

    /// directory that is wiped and refilled with generated maps
    pub output_dir: PathBuf,

    /// smallest map is 2^min_exponent
    pub min_exponent: u32,

    /// largest map is 2^max_exponent (inclusive)
    pub max_exponent: u32,

    /// K = N² / mine_divisor
    pub mine_divisor: u64,

    /// seed passed to every invocation
    pub seed: Seed,

    /// file extension of generated maps
    pub extension: String,

    /// abort on a missing generator and report failed invocations via exit status
    pub strict: bool,
}

impl SweepConfig {
    /// returns an error if the configuration can't produce a valid sweep
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.min_exponent > self.max_exponent {
            return Err("min_exponent must not be larger than max_exponent");
        }

        if self.max_exponent > MAX_EXPONENT {
            return Err("max_exponent must be at most 31");
        }

        if self.mine_divisor == 0 {
            return Err("mine_divisor must be larger than zero");
        }

        if self.extension.is_empty() {
            return Err("extension must not be empty");
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err("output_dir must not be empty");
        }

        if self.generator.as_os_str().is_empty() {
            return Err("generator must not be empty");
        }

        Ok(())
    }

    /// all map parameters of this sweep, smallest map first
    pub fn map_params(&self) -> Vec<MapParams> {
        sweep_sizes(self.min_exponent, self.max_exponent)
            .into_iter()
            .map(|size| MapParams::new(size, self.mine_divisor, self.seed))
            .collect()
    }

    pub fn output_path(&self, params: &MapParams) -> PathBuf {
        self.output_dir.join(params.file_name(&self.extension))
    }
}

impl Default for SweepConfig {
    /// mirrors the example map set that ships with the minesweeper judge
    fn default() -> SweepConfig {
        SweepConfig {
            description: None,
            generator: PathBuf::from("./map_generator"),
            generator_args: Vec::new(),
            output_dir: PathBuf::from("map"),
            min_exponent: 4,
            max_exponent: 16,
            mine_divisor: 8,
            seed: Seed(0),
            extension: "map".to_string(),
            strict: false,
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SweepConfig, SweepError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| SweepError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&data).map_err(|source| SweepError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// loads every `*.json` file in `path`, keyed by file stem
pub fn load_configs_from_dir<C, P>(path: P) -> Result<HashMap<String, C>, Box<dyn Error>>
where
    C: DeserializeOwned,
    P: AsRef<Path>,
{
    let mut configs = HashMap::new();

    for file_path in fs::read_dir(path)? {
        let file_path = file_path?.path();

        if file_path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        let file_name = match file_path.file_stem().and_then(|stem| stem.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        let data = fs::read_to_string(&file_path)?;

        configs.insert(file_name, serde_json::from_str::<C>(&data)?);
    }

    Ok(configs)
}
