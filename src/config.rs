use anyhow::Context;
use serde::Deserialize;
use std::fs;

pub const DEFAULT_PROVISIONER_ADDRESS: &str = "192.168.131.131:50001";

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct HarnessConfig {
    pub provisioner: ProvisionerConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ProvisionerConfig {
    //host:port, plaintext only
    pub address: String,
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        ProvisionerConfig {
            address: DEFAULT_PROVISIONER_ADDRESS.to_string(),
        }
    }
}

impl HarnessConfig {
    pub fn load_config(path: &str) -> anyhow::Result<HarnessConfig> {
        let content =
            fs::read_to_string(path).with_context(|| format!("read config {} failed", path))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<HarnessConfig> {
        let config = serde_yaml::from_str(content)?;
        Ok(config)
    }
}
