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

//! Closed keyword sets for the command router.
//!
//! Every keyword the CLI dispatches on is an enum with an exhaustive match,
//! so adding a command or resource kind is a compile-time-checked change.

use crate::shared::error::BrickError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Resource kinds the `get` command can list through the Kubernetes API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Deployments,
    Pods,
    Namespaces,
    Services,
    ServiceAccounts,
    StatefulSets,
}

impl ResourceKind {
    /// Plural lowercase name as kubectl prints it.
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Deployments => "deployments",
            Self::Pods => "pods",
            Self::Namespaces => "namespaces",
            Self::Services => "services",
            Self::ServiceAccounts => "serviceaccounts",
            Self::StatefulSets => "statefulsets",
        }
    }

    /// Kinds that live inside a namespace. Namespaces themselves do not.
    pub fn namespaced(&self) -> bool {
        !matches!(self, Self::Namespaces)
    }
}

impl FromStr for ResourceKind {
    type Err = BrickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deployment" | "deployments" | "deploy" => Ok(Self::Deployments),
            "pod" | "pods" | "po" => Ok(Self::Pods),
            "namespace" | "namespaces" | "ns" => Ok(Self::Namespaces),
            "service" | "services" | "svc" => Ok(Self::Services),
            "serviceaccount" | "serviceaccounts" | "sa" => Ok(Self::ServiceAccounts),
            "statefulset" | "statefulsets" | "sts" => Ok(Self::StatefulSets),
            _ => Err(BrickError::UnsupportedResource(s.to_string())),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

/// Node scheduling actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeAction {
    Cordon,
    Uncordon,
    Drain,
}

impl NodeAction {
    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Cordon => "cordon",
            Self::Uncordon => "uncordon",
            Self::Drain => "drain",
        }
    }
}

impl FromStr for NodeAction {
    type Err = BrickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cordon" => Ok(Self::Cordon),
            "uncordon" => Ok(Self::Uncordon),
            "drain" => Ok(Self::Drain),
            _ => Err(BrickError::invalid_input(format!(
                "Invalid node action '{}' (allowed: cordon, uncordon, drain)",
                s
            ))),
        }
    }
}

/// Rollout subcommand actions, matching kubectl's own set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolloutAction {
    Status,
    History,
    Pause,
    Resume,
    Restart,
    Undo,
}

impl RolloutAction {
    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::History => "history",
            Self::Pause => "pause",
            Self::Resume => "resume",
            Self::Restart => "restart",
            Self::Undo => "undo",
        }
    }
}

impl FromStr for RolloutAction {
    type Err = BrickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "status" => Ok(Self::Status),
            "history" => Ok(Self::History),
            "pause" => Ok(Self::Pause),
            "resume" => Ok(Self::Resume),
            "restart" => Ok(Self::Restart),
            "undo" => Ok(Self::Undo),
            _ => Err(BrickError::invalid_input(format!(
                "Invalid rollout action '{}' (allowed: status, history, pause, resume, restart, undo)",
                s
            ))),
        }
    }
}

/// Taint effects accepted by the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaintEffect {
    NoSchedule,
    PreferNoSchedule,
    NoExecute,
}

impl TaintEffect {
    pub fn as_token(&self) -> &'static str {
        match self {
            Self::NoSchedule => "NoSchedule",
            Self::PreferNoSchedule => "PreferNoSchedule",
            Self::NoExecute => "NoExecute",
        }
    }
}

impl FromStr for TaintEffect {
    type Err = BrickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "noschedule" => Ok(Self::NoSchedule),
            "prefernoschedule" => Ok(Self::PreferNoSchedule),
            "noexecute" => Ok(Self::NoExecute),
            _ => Err(BrickError::invalid_input(format!(
                "Invalid taint effect '{}' (allowed: NoSchedule, PreferNoSchedule, NoExecute)",
                s
            ))),
        }
    }
}

/// One node taint, rendered into kubectl's `key=value:EFFECT` argument form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaintSpec {
    pub key: String,
    pub value: Option<String>,
    pub effect: TaintEffect,
}

impl TaintSpec {
    pub fn new(key: impl Into<String>, value: Option<String>, effect: TaintEffect) -> Self {
        Self {
            key: key.into(),
            value,
            effect,
        }
    }

    /// `key=value:EFFECT`, or `key:EFFECT` when no value was given.
    pub fn render(&self) -> String {
        match self.value.as_deref() {
            Some(v) if !v.is_empty() => format!("{}={}:{}", self.key, v, self.effect.as_token()),
            _ => format!("{}:{}", self.key, self.effect.as_token()),
        }
    }
}

/// Targets for `top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopTarget {
    Pods,
    Nodes,
}

impl TopTarget {
    pub fn as_token(&self) -> &'static str {
        match self {
            Self::Pods => "pods",
            Self::Nodes => "nodes",
        }
    }

    /// `top nodes` is cluster-scoped; only `top pods` takes a namespace.
    pub fn namespaced(&self) -> bool {
        matches!(self, Self::Pods)
    }
}

impl FromStr for TopTarget {
    type Err = BrickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pod" | "pods" | "po" => Ok(Self::Pods),
            "node" | "nodes" | "no" => Ok(Self::Nodes),
            _ => Err(BrickError::invalid_input(format!(
                "Invalid top target '{}' (allowed: pods, nodes)",
                s
            ))),
        }
    }
}

/// Normalize a pass-through resource type the way the CLI has always done:
/// lowercase, pluralized with a trailing `s` unless one is already present.
pub fn normalize_resource_type(resource_type: &str) -> String {
    let lowered = resource_type.to_lowercase();
    if lowered.ends_with('s') {
        lowered
    } else {
        format!("{}s", lowered)
    }
}

/// Validate a node name as an RFC 1123 DNS label before handing it to the
/// external tool.
pub fn validate_node_name(name: &str) -> Result<(), BrickError> {
    let re = Regex::new(r"^[a-z0-9]([-a-z0-9.]*[a-z0-9])?$")
        .map_err(|e| BrickError::invalid_input(e.to_string()))?;
    if name.is_empty() || name.len() > 253 || !re.is_match(name) {
        return Err(BrickError::invalid_input(format!(
            "Invalid node name '{}': must be a lowercase RFC 1123 subdomain",
            name
        )));
    }
    Ok(())
}

/// Split a `key=value` argument for `label` and `annotate`. The key must be
/// non-empty; the value may be empty.
pub fn parse_key_value(arg: &str) -> Result<(String, String), BrickError> {
    let (key, value) = arg.split_once('=').ok_or_else(|| {
        BrickError::invalid_input(format!("Invalid argument '{}': expected key=value", arg))
    })?;
    if key.is_empty() {
        return Err(BrickError::invalid_input(format!(
            "Invalid argument '{}': empty key",
            arg
        )));
    }
    Ok((key.to_string(), value.to_string()))
}
