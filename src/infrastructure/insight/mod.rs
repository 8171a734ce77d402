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

//! Completion-service integration

pub mod client;

pub use client::InsightClient;

use crate::domain::resource::ResourceKind;

/// Canned prompt attached to a resource listing.
pub fn listing_prompt(kind: ResourceKind, namespace: &str) -> String {
    format!(
        "Provide insights for Kubernetes {} in namespace {}:",
        kind.plural(),
        namespace
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_prompt() {
        assert_eq!(
            listing_prompt(ResourceKind::Deployments, "prod"),
            "Provide insights for Kubernetes deployments in namespace prod:"
        );
        assert_eq!(
            listing_prompt(ResourceKind::Pods, "default"),
            "Provide insights for Kubernetes pods in namespace default:"
        );
    }
}
