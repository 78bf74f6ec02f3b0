use crate::{AppSettings, RawSettings};
use color_eyre::eyre::Result;
use std::path::Path;
use tracing::debug;

pub fn load_app_settings() -> Result<AppSettings> {
    // Need to load from dotenv to get it to overwrite settings from env.
    dotenv::from_path(".env").ok();
    load_app_settings_from(Path::new("config/settings.yaml"))
}

/// Reads the yaml file at `config_path`, overridden by `APP__*` environment variables.
pub fn load_app_settings_from(config_path: &Path) -> Result<AppSettings> {
    let config_path = config_path.canonicalize()?;
    debug!("Loading settings from {}", config_path.display());

    let builder = config::Config::builder()
        .add_source(config::File::from(config_path))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

    let raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    AppSettings::try_from(raw_settings)
}
