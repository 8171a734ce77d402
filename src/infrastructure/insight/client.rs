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

//! Client for the external text-completion service.
//!
//! One blocking request per listing, fixed parameters, no retries. The API
//! key is read from the environment at request time and never stored.

use crate::domain::config::InsightsConf;
use crate::shared::error::{BrickError, Result};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

pub struct InsightClient {
    conf: InsightsConf,
    agent: ureq::Agent,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl InsightClient {
    /// Create a client. Fails fast when the key environment variable is
    /// missing so callers can degrade before printing anything.
    pub fn new(conf: InsightsConf) -> Result<Self> {
        if resolve_api_key(&conf).is_none() {
            return Err(BrickError::ApiKeyMissing {
                env_var: conf.api_key_env.clone(),
            });
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_millis(conf.timeout_ms))
            .build();

        Ok(Self { conf, agent })
    }

    /// Send one completion request and return the response text, trimmed.
    pub fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = resolve_api_key(&self.conf).ok_or_else(|| BrickError::ApiKeyMissing {
            env_var: self.conf.api_key_env.clone(),
        })?;

        let body = json!({
            "model": self.conf.model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": self.conf.max_tokens,
            "temperature": self.conf.temperature,
        });

        let url = format!(
            "{}/chat/completions",
            self.conf.base_url.trim_end_matches('/')
        );

        let response = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", api_key))
            .set("Content-Type", "application/json")
            .send_json(&body);

        match response {
            Ok(resp) => {
                let chat: ChatResponse = resp
                    .into_json()
                    .map_err(|e| BrickError::CompletionTransport(e.to_string()))?;
                let text = chat
                    .choices
                    .into_iter()
                    .next()
                    .map(|c| c.message.content)
                    .unwrap_or_default();
                Ok(text.trim().to_string())
            }
            Err(ureq::Error::Status(status, resp)) => {
                let message = resp
                    .into_json::<ApiErrorBody>()
                    .map(|e| e.error.message)
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(BrickError::CompletionApi { status, message })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(BrickError::CompletionTransport(transport.to_string()))
            }
        }
    }
}

fn resolve_api_key(conf: &InsightsConf) -> Option<String> {
    std::env::var(&conf.api_key_env)
        .ok()
        .filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conf_with_key_env(env_var: &str) -> InsightsConf {
        InsightsConf {
            api_key_env: env_var.to_string(),
            ..InsightsConf::default()
        }
    }

    #[test]
    fn test_client_creation_requires_key() {
        let conf = conf_with_key_env("BRICKCTL_TEST_MISSING_KEY");
        std::env::remove_var("BRICKCTL_TEST_MISSING_KEY");

        let result = InsightClient::new(conf);
        assert!(matches!(result, Err(BrickError::ApiKeyMissing { .. })));
    }

    #[test]
    fn test_client_with_key() {
        std::env::set_var("BRICKCTL_TEST_KEY", "test-key-123");

        let client = InsightClient::new(conf_with_key_env("BRICKCTL_TEST_KEY"));
        assert!(client.is_ok());

        std::env::remove_var("BRICKCTL_TEST_KEY");
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        std::env::set_var("BRICKCTL_TEST_EMPTY_KEY", "");

        let result = InsightClient::new(conf_with_key_env("BRICKCTL_TEST_EMPTY_KEY"));
        assert!(matches!(result, Err(BrickError::ApiKeyMissing { .. })));

        std::env::remove_var("BRICKCTL_TEST_EMPTY_KEY");
    }
}
