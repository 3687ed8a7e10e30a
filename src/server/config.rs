use std::path::PathBuf;

use crate::server::error::AppError;

/// Environment variable naming a JSON seed file for the route store.
pub const SEED_PATH_VAR: &str = "INBOUND_SEED_PATH";

pub struct Config {
    /// Seed file to load at startup, the built-in demo data is used when unset.
    pub seed_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let seed_path = std::env::var(SEED_PATH_VAR)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self { seed_path })
    }
}
