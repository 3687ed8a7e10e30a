use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The seed file named by `INBOUND_SEED_PATH` could not be read.
    #[error("Failed to read seed file {path}: {source}")]
    SeedUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a valid `{campaigns, queues, routes}` document.
    #[error("Invalid seed file {path}: {source}")]
    InvalidSeed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
