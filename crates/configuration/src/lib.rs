use crate::error::ConfigError;
use std::collections::HashMap;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::Settings;

/// The environment variable holding the MongoDB connection string.
pub const MONGODB_URI_VAR: &str = "MONGODB_URI";
/// Prefix for every other environment override, e.g. `QUIZAPP_BIND_ADDRESS`.
pub const ENV_PREFIX: &str = "QUIZAPP";

/// Loads the settings from an optional TOML file and an explicit set of
/// environment variables.
///
/// Sources are layered lowest to highest: built-in defaults, the file,
/// `QUIZAPP_*` variables, then `MONGODB_URI`. The result is validated before
/// it is returned.
pub fn load_settings_from(
    file: &Path,
    env: HashMap<String, String>,
) -> Result<Settings, ConfigError> {
    let mongodb_uri = env.get(MONGODB_URI_VAR).cloned();

    let builder = config::Config::builder()
        .set_default("database_name", settings::DEFAULT_DATABASE_NAME)?
        .set_default("collection_name", settings::DEFAULT_COLLECTION_NAME)?
        .set_default("bind_address", settings::DEFAULT_BIND_ADDRESS)?
        .set_default("log_filter", settings::DEFAULT_LOG_FILTER)?
        .add_source(config::File::from(file).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).source(Some(env)))
        .set_override_option("mongodb_uri", mongodb_uri)?
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    tracing::debug!(
        database = %settings.database_name,
        collection = %settings.collection_name,
        bind_address = %settings.bind_address,
        "Settings loaded."
    );
    Ok(settings)
}
