//! Query layer errors
//!
//! Missing chains and missing expirations are not errors; the queries
//! report them as `None`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Multiple option chains keyed to underlying {underlying}")]
    DuplicateChain { underlying: String },
}

pub type Result<T> = std::result::Result<T, Error>;
