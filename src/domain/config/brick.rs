// Copyright 2025 Brickctl Team.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tool configuration. Every field has a default so running without a config
//! file is the normal case.

use crate::infrastructure::constants::{
    BRICKCTL_CONF_ENV, DEFAULT_INSIGHT_BASE_URL, DEFAULT_INSIGHT_MAX_TOKENS,
    DEFAULT_INSIGHT_MODEL, DEFAULT_INSIGHT_TEMPERATURE, DEFAULT_INSIGHT_TIMEOUT_MS,
    DEFAULT_KUBECTL_BIN, OPENAI_API_KEY_ENV,
};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;

/// Main tool configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickConf {
    pub kubectl: KubectlConf,
    pub insights: InsightsConf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KubectlConf {
    /// Binary name or path of the external cluster tool
    pub binary: String,
}

impl Default for KubectlConf {
    fn default() -> Self {
        Self {
            binary: DEFAULT_KUBECTL_BIN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConf {
    pub enabled: bool,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub base_url: String,
    pub timeout_ms: u64,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
}

impl Default for InsightsConf {
    fn default() -> Self {
        Self {
            enabled: true,
            model: DEFAULT_INSIGHT_MODEL.to_string(),
            max_tokens: DEFAULT_INSIGHT_MAX_TOKENS,
            temperature: DEFAULT_INSIGHT_TEMPERATURE,
            base_url: DEFAULT_INSIGHT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_INSIGHT_TIMEOUT_MS,
            api_key_env: OPENAI_API_KEY_ENV.to_string(),
        }
    }
}

impl BrickConf {
    /// Load configuration from a TOML file
    pub fn from<T: AsRef<str>>(path: T) -> anyhow::Result<Self> {
        let content = read_to_string(path.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to read config file {}: {}", path.as_ref(), e))?;

        let conf: Self =
            toml::from_str(&content).map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))?;

        Ok(conf)
    }

    /// Resolve configuration at startup: the file named by `BRICKCTL_CONF_FILE`
    /// when set, defaults otherwise. A named but broken file is an error.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var(BRICKCTL_CONF_ENV) {
            Ok(path) if !path.is_empty() => Self::from(&path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let conf = BrickConf::default();
        assert_eq!(conf.kubectl.binary, "kubectl");
        assert!(conf.insights.enabled);
        assert_eq!(conf.insights.max_tokens, 150);
        assert_eq!(conf.insights.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_from_file_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[kubectl]
binary = "/usr/local/bin/kubectl"

[insights]
enabled = false
model = "gpt-4o"
"#
        )
        .unwrap();

        let conf = BrickConf::from(file.path().to_str().unwrap()).unwrap();
        assert_eq!(conf.kubectl.binary, "/usr/local/bin/kubectl");
        assert!(!conf.insights.enabled);
        assert_eq!(conf.insights.model, "gpt-4o");
        // untouched sections keep their defaults
        assert_eq!(conf.insights.max_tokens, 150);
    }

    #[test]
    fn test_from_missing_file() {
        assert!(BrickConf::from("/nonexistent/brickctl.toml").is_err());
    }

    #[test]
    fn test_from_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[kubectl\nbinary=").unwrap();
        assert!(BrickConf::from(file.path().to_str().unwrap()).is_err());
    }
}
