use bevy::log::{info, warn};
use bevy::prelude::Resource;
use marinelife::ConfigError;
use marinelife::SceneConfig;
use marinelife::constants::DEFAULT_CONFIG_PATH;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Resource, Clone, Debug)]
pub struct SceneSettings {
    pub inner: SceneConfig,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            inner: load_scene_config(DEFAULT_CONFIG_PATH),
        }
    }
}

/// Reads the scene config, falling back to defaults when the file is absent
/// or unusable
pub fn load_scene_config(path: impl AsRef<Path>) -> SceneConfig {
    let path = path.as_ref();
    match SceneConfig::load_from_file(path) {
        Ok(config) => {
            info!("Loaded scene config from {}", path.display());
            config
        }
        Err(ConfigError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            info!("No scene config at {}, using defaults", path.display());
            SceneConfig::default()
        }
        Err(err) => {
            warn!("Ignoring scene config: {err}");
            SceneConfig::default()
        }
    }
}
