use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Base URL of the asset storage service (uploads and listings)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// API key sent with asset service requests, if the service needs one
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL the built-in icon catalogs are served from
    #[serde(default = "default_icons_base_url")]
    pub icons_base_url: String,
}

fn default_api_base_url() -> String {
    "http://localhost:4000/api/v1".to_string()
}

fn default_icons_base_url() -> String {
    "https://assets.mapstyler.dev/icons".to_string()
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_key: None,
            icons_base_url: default_icons_base_url(),
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
        }
    }
}

/// Load configuration from disk, falling back to defaults on any error.
fn load_config() -> AppConfig {
    let config_path = crate::paths::config_file();

    let data = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    data
                }
                Err(e) => {
                    warn!("Failed to parse config file, using defaults: {}", e);
                    AppConfigData::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file, using defaults: {}", e);
                AppConfigData::default()
            }
        }
    } else {
        info!("No config file found, writing defaults");
        let data = AppConfigData::default();
        save_config(&config_path, &data);
        data
    };

    AppConfig { data, config_path }
}

/// Save configuration to disk
fn save_config(config_path: &Path, data: &AppConfigData) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(mut config: ResMut<AppConfig>) {
    *config = load_config();
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded));
    }
}
