use std::path::PathBuf;

use color_eyre::eyre::Result;
use serde::Deserialize;

use street_art::street::UnknownTokens;

const CONFIG: &str = include_str!("../.config/config.yaml");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct StreetConfig {
    pub prompt: String,
    pub unknown_tokens: UnknownTokens,
}

impl Default for StreetConfig {
    fn default() -> Self {
        Self { prompt: "Street: ".to_string(), unknown_tokens: UnknownTokens::default() }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub street: StreetConfig,
}

impl Config {
    /// Layers the bundled defaults, an optional `config.yaml` in the config
    /// directory and `STREET_ART_*` environment variables, in that order.
    pub fn new() -> Result<Self> {
        let default_config: Config = serde_yaml::from_str(CONFIG)?;
        let data_dir = crate::utils::get_data_dir();
        let config_dir = crate::utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?
            .set_default("street.prompt", default_config.street.prompt)?
            .set_default("street.unknown_tokens", default_config.street.unknown_tokens.to_string())?;

        let config_files = [("config.yaml", config::FileFormat::Yaml)];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(config::File::from(config_dir.join(file)).format(*format).required(false));
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!("No configuration file found in {}, using defaults", config_dir.display());
        }
        builder = builder.add_source(
            config::Environment::with_prefix(crate::utils::PROJECT_NAME.as_str()).prefix_separator("_").separator("__"),
        );

        let cfg: Self = builder.build()?.try_deserialize()?;
        tracing::debug!("Unknown token policy: {}", cfg.street.unknown_tokens);
        Ok(cfg)
    }
}
