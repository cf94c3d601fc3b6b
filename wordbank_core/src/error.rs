use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("Invalid label spec: {0}")]
    InvalidLabelSpec(String),

    #[error("Auto labels directory not found: {}", display_dir(.0.as_deref()))]
    AutoLabelsDir(Option<PathBuf>),

    #[error("Output would overwrite the input file: {}", .0.display())]
    OutputIsInput(PathBuf),
}

fn display_dir(dir: Option<&Path>) -> String {
    dir.map_or_else(|| "(none)".to_string(), |dir| dir.display().to_string())
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
