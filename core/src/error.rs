use std::{io, path::PathBuf};

use thiserror::Error;

/// failures that stop a sweep; failed generator runs are reported, not raised
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("invalid sweep config: {0}")]
    InvalidConfig(&'static str),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("generator {0} does not exist")]
    MissingGenerator(PathBuf),

    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create output file {path}: {source}")]
    OutputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
