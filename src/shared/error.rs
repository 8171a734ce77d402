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

use thiserror::Error;
pub type Result<T> = std::result::Result<T, BrickError>;

#[derive(Error, Debug)]
pub enum BrickError {
    #[error("Kubernetes API error: {0}")]
    KubeApi(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported resource type: {0}")]
    UnsupportedResource(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    // Carries the external tool's own exit code so it can be propagated.
    #[error("'{command}' exited with code {code}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Completion API key not set ({env_var})")]
    ApiKeyMissing { env_var: String },

    #[error("Completion API error ({status}): {message}")]
    CompletionApi { status: u16, message: String },

    #[error("Completion request failed: {0}")]
    CompletionTransport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl From<kube::Error> for BrickError {
    fn from(err: kube::Error) -> Self {
        BrickError::KubeApi(err.to_string())
    }
}

impl BrickError {
    pub fn config(context: impl Into<String>) -> Self {
        Self::Config(context.into())
    }

    pub fn invalid_input(context: impl Into<String>) -> Self {
        Self::InvalidInput(context.into())
    }

    /// Process exit code for this error. External-tool failures propagate the
    /// tool's own code; everything else is a plain failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }
}
