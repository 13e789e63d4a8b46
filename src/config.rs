use crate::error::Result;
use crate::message::Descriptor;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// 构建器配置
///
/// ```toml
/// [template]
/// provider_name = "TFProvider"
/// resource_name = "VM"
/// state = "CREATING"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub template: Descriptor,
}

impl Config {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded diagnostic template config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
