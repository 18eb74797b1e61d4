use crate::assets::AssetLoader;
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Directory rendered artifacts are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Grid width when a generate request omits one
    #[serde(default = "default_width")]
    pub default_width: u32,

    /// Grid height when a generate request omits one
    #[serde(default = "default_height")]
    pub default_height: u32,

    /// Palette size when a generate request omits one
    #[serde(default = "default_colors")]
    pub default_colors: usize,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_width() -> u32 {
    110
}

fn default_height() -> u32 {
    110
}

fn default_colors() -> usize {
    7
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        output_dir = %config.output_dir.display(),
                        default_width = config.default_width,
                        default_height = config.default_height,
                        default_colors = config.default_colors,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            default_width: default_width(),
            default_height: default_height(),
            default_colors: default_colors(),
        }
    }
}
