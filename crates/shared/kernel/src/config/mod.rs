use config::{Config, Environment, File};
use confdrift_domain::constants::ENV_PREFIX;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[confdrift_derive::confdrift_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration structure from a file with environment overrides.
///
/// Layering:
/// 1. **Base file**: `path` (any format the `config` crate recognises by extension; the
///    extension may be omitted). Defaults to `confdrift` in the working directory.
/// 2. **Environment**: variables prefixed with `CONFDRIFT__`, nested with `__`
///    (e.g. `CONFDRIFT__STRICTNESS__ERROR_IF_MISSING_CONSTANTS=false`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, an override is malformed, or
/// the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use confdrift_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     resource_roots: Vec<String>,
/// }
///
/// let settings: Settings = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from("confdrift"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context(format!("Failed to build config from {}", effective_path.display()))?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
