//! Defaults for freshly created boards, loaded from TOML.
//!
//! Every key is optional:
//!
//! ```toml
//! width = 1024
//! height = 768
//! enemy_spawn_rate = 0.8
//!
//! [player]
//! color = "#00ff88"
//! life = 5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codec::{self, Format};
use crate::error::LoadError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: f64,
    pub height: f64,
    pub enemy_spawn_rate: f64,
    pub scale_multiplier: f64,
    pub player: PlayerConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub reload_speed: f64,
    pub color: String,
    pub scale: f64,
    pub life: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            enemy_spawn_rate: 0.5,
            scale_multiplier: 1.0,
            player: PlayerConfig::default(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            reload_speed: 1.0,
            color: "blue".to_string(),
            scale: 1.0,
            life: 3,
        }
    }
}

impl BoardConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, LoadError> {
        codec::decode(text, Format::Toml)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = codec::read_file(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded board config");
        Ok(config)
    }
}
