use dioxus_logger::tracing;

use crate::server::{
    config::Config,
    data::store::Store,
    error::{config::ConfigError, AppError},
    model::inbound_route::Seed,
};

/// Builds the route store from the configured seed.
///
/// Reads and parses the JSON seed named by the configuration, or falls back
/// to the built-in demo data when no seed path is set.
///
/// # Returns
/// - `Ok(Store)` - Store filled with the seed data
/// - `Err(ConfigErr)` - Seed file missing, unreadable or malformed
pub fn load_store(config: &Config) -> Result<Store, AppError> {
    let seed = match &config.seed_path {
        Some(path) => {
            let contents =
                std::fs::read_to_string(path).map_err(|source| ConfigError::SeedUnreadable {
                    path: path.clone(),
                    source,
                })?;
            let seed: Seed =
                serde_json::from_str(&contents).map_err(|source| ConfigError::InvalidSeed {
                    path: path.clone(),
                    source,
                })?;

            tracing::info!("Loaded seed from {}", path.display());
            seed
        }
        None => {
            tracing::info!("No seed configured, using demo data");
            Seed::demo()
        }
    };

    Ok(Store::from_seed(seed))
}
