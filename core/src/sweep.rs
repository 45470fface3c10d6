use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use log::{debug, error, info, warn};
use serde::Serialize;

use crate::{
    config::SweepConfig,
    error::SweepError,
    generator::{InvocationOutcome, MapGenerator},
    map::MapParams,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvocationRecord {
    pub params: MapParams,
    pub path: PathBuf,
    pub outcome: InvocationOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    /// result of the precondition check, the sweep runs either way unless strict
    pub generator_found: bool,
    pub records: Vec<InvocationRecord>,
}

impl SweepReport {
    pub fn succeeded(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.records.len() - self.succeeded()
    }

    pub fn is_clean(&self) -> bool {
        self.generator_found && self.failed() == 0
    }
}

/// removes `path` if present (ignoring errors) and creates it again
pub fn reset_output_dir(path: &Path) -> Result<(), SweepError> {
    if path.exists() {
        if let Err(err) = fs::remove_dir_all(path) {
            debug!("ignoring failure to remove {}: {}", path.display(), err);
        }
    }

    fs::create_dir(path).map_err(|source| SweepError::OutputDir {
        path: path.to_path_buf(),
        source,
    })
}

pub struct Sweep {
    config: SweepConfig,
}

impl Sweep {
    pub fn new(config: SweepConfig) -> Result<Sweep, SweepError> {
        config.validate().map_err(SweepError::InvalidConfig)?;
        Ok(Sweep { config })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// what `run` would do, without touching the filesystem
    pub fn plan(&self) -> Vec<(MapParams, PathBuf)> {
        self.config
            .map_params()
            .into_iter()
            .map(|params| {
                let path = self.config.output_path(&params);
                (params, path)
            })
            .collect()
    }

    fn check_generator<G: MapGenerator>(&self, generator: &G) -> Result<bool, SweepError> {
        if generator.is_available() {
            return Ok(true);
        }

        let generator_path = &self.config.generator;
        let name = generator_path
            .file_name()
            .unwrap_or(generator_path.as_os_str())
            .to_string_lossy();
        error!(
            "Error: `{}` does not exist. Maybe you should run `make` first?",
            name
        );

        if self.config.strict {
            return Err(SweepError::MissingGenerator(self.config.generator.clone()));
        }

        Ok(false)
    }

    /// generates every planned map in order, one blocking invocation at a time
    pub fn run<G: MapGenerator>(&self, generator: &mut G) -> Result<SweepReport, SweepError> {
        let generator_found = self.check_generator(generator)?;

        reset_output_dir(&self.config.output_dir)?;

        let mut records = Vec::new();
        for (params, path) in self.plan() {
            info!(
                "Generating map with N={}, K={}, seed={}",
                params.size, params.mines, params.seed
            );

            let output = File::create(&path).map_err(|source| SweepError::OutputFile {
                path: path.clone(),
                source,
            })?;

            let outcome = generator.generate(&params, output);
            if !outcome.is_success() {
                warn!("{}", outcome);
            }

            records.push(InvocationRecord {
                params,
                path,
                outcome,
            });
        }

        let report = SweepReport {
            generator_found,
            records,
        };
        info!(
            "generated {} of {} maps in {}",
            report.succeeded(),
            report.records.len(),
            self.config.output_dir.display()
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Seed;

    #[test]
    fn reset_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("map");

        reset_output_dir(&out).unwrap();
        assert!(out.is_dir());
    }

    #[test]
    fn reset_clears_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("map");
        fs::create_dir_all(out.join("nested")).unwrap();
        fs::write(out.join("stale.map"), b"old").unwrap();
        fs::write(out.join("nested").join("deep.map"), b"old").unwrap();

        reset_output_dir(&out).unwrap();
        assert!(out.is_dir());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn reset_fails_when_parent_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("map");

        assert!(matches!(
            reset_output_dir(&out),
            Err(SweepError::OutputDir { .. })
        ));
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = SweepConfig {
            mine_divisor: 0,
            ..Default::default()
        };
        assert!(matches!(
            Sweep::new(config),
            Err(SweepError::InvalidConfig(_))
        ));
    }

    #[test]
    fn plan_lists_every_output_file() {
        let config = SweepConfig {
            output_dir: PathBuf::from("out"),
            seed: Seed(5),
            min_exponent: 4,
            max_exponent: 5,
            ..Default::default()
        };
        let plan = Sweep::new(config).unwrap().plan();

        let paths: Vec<_> = plan.iter().map(|(_, path)| path.clone()).collect();
        assert_eq!(
            paths,
            [
                PathBuf::from("out").join("16_32_5.map"),
                PathBuf::from("out").join("32_128_5.map"),
            ]
        );
    }
}
