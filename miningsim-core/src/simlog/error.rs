use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("invalid log format (line {line})")]
    Format { line: usize },

    #[error("failed to open simulation log {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read simulation log: {0}")]
    Read(#[from] std::io::Error),
}

impl LogError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatisticsError {
    /// An average was requested over an empty population.
    #[error("cannot compute {metric}: nothing was counted")]
    ZeroDenominator { metric: &'static str },

    #[error("simulation data has no begin timestamp")]
    MissingHeader,

    #[error("simulation log contains no events after the header")]
    NoEvents,

    #[error("lorry {lorry_id} was filled but never transported")]
    MissingLorryTransport { lorry_id: i64 },
}
