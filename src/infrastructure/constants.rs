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

/// External cluster tool
pub const DEFAULT_KUBECTL_BIN: &str = "kubectl";
pub const NAMESPACE_FLAG: &str = "-n";

/// Default namespace for namespaced listings
pub const DEFAULT_NAMESPACE: &str = "default";

/// Environment
pub const BRICKCTL_CONF_ENV: &str = "BRICKCTL_CONF_FILE";
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Completion service defaults
pub const DEFAULT_INSIGHT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_INSIGHT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_INSIGHT_MAX_TOKENS: u32 = 150;
pub const DEFAULT_INSIGHT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_INSIGHT_TIMEOUT_MS: u64 = 30_000;

/// Insight section header printed after decorated listings
pub const INSIGHTS_HEADER: &str = "AI Insights:";
