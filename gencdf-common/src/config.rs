use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: String,
}

fn default_comment_prefix() -> String {
    "#".into()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            comment_prefix: default_comment_prefix(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaddingConfig {
    #[serde(default = "default_increment")]
    pub default_increment: f64,
}

fn default_increment() -> f64 {
    1.0
}

impl Default for PaddingConfig {
    fn default() -> Self {
        Self {
            default_increment: default_increment(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub padding: PaddingConfig,
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gencdf")
            .join("config.toml")
    }

    pub fn load() -> crate::Result<Self> {
        let path = if let Ok(env_path) = std::env::var("GENCDF_CONFIG") {
            PathBuf::from(env_path) // $GENCDF_CONFIG overrides default config path
        } else {
            Self::config_path()
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let cfg: Self =
            toml::from_str(&content).map_err(|e| crate::CdfError::Config(e.to_string()))?;
        Ok(cfg)
    }

    pub fn save(&self) -> crate::Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::CdfError::Config(e.to_string()))?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}
