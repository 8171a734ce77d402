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

//! Token sequences for external tool invocations.
//!
//! One constructor per operation. Each constructor fully determines the
//! argument ordering, so the mapping from operation to command line lives in
//! exactly one place and is covered by tests.

use crate::domain::resource::{NodeAction, RolloutAction, TaintSpec, TopTarget};
use crate::infrastructure::constants::NAMESPACE_FLAG;

/// An ordered argument list for one external tool invocation. Built fresh per
/// command and discarded after the process returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<String>,
}

impl Invocation {
    fn new(subcommand: &str) -> Self {
        Self {
            args: vec![subcommand.to_string()],
        }
    }

    fn push(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append `-n <namespace>` when a namespace was supplied.
    fn namespace(mut self, namespace: Option<&str>) -> Self {
        if let Some(ns) = namespace {
            self.args.push(NAMESPACE_FLAG.to_string());
            self.args.push(ns.to_string());
        }
        self
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn into_args(self) -> Vec<String> {
        self.args
    }

    /// Full command line for logs and error messages.
    pub fn command_line(&self, binary: &str) -> String {
        let mut line = binary.to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    pub fn create(file: &str) -> Self {
        Self::new("create").push("-f").push(file)
    }

    pub fn apply(file: &str) -> Self {
        Self::new("apply").push("-f").push(file)
    }

    pub fn delete(resource_type: &str, name: &str, namespace: Option<&str>) -> Self {
        Self::new("delete")
            .push(resource_type)
            .push(name)
            .namespace(namespace)
    }

    pub fn describe(resource_type: &str, name: &str, namespace: Option<&str>) -> Self {
        Self::new("describe")
            .push(resource_type)
            .push(name)
            .namespace(namespace)
    }

    pub fn logs(pod: &str, namespace: Option<&str>) -> Self {
        Self::new("logs").push(pod).namespace(namespace)
    }

    pub fn edit(resource_type: &str, name: &str, namespace: Option<&str>) -> Self {
        Self::new("edit")
            .push(resource_type)
            .push(name)
            .namespace(namespace)
    }

    pub fn rollout(
        action: RolloutAction,
        resource_type: &str,
        name: &str,
        namespace: Option<&str>,
    ) -> Self {
        Self::new("rollout")
            .push(action.as_token())
            .push(resource_type)
            .push(name)
            .namespace(namespace)
    }

    pub fn scale(
        resource_type: &str,
        name: &str,
        replicas: u32,
        namespace: Option<&str>,
    ) -> Self {
        Self::new("scale")
            .push(resource_type)
            .push(name)
            .push("--replicas")
            .push(replicas.to_string())
            .namespace(namespace)
    }

    pub fn taint(node: &str, taint: &TaintSpec) -> Self {
        Self::new("taint").push("nodes").push(node).push(taint.render())
    }

    pub fn top(target: TopTarget, namespace: Option<&str>) -> Self {
        let inv = Self::new("top").push(target.as_token());
        if target.namespaced() {
            inv.namespace(namespace)
        } else {
            inv
        }
    }

    pub fn annotate(
        resource_type: &str,
        name: &str,
        annotation: &str,
        namespace: Option<&str>,
    ) -> Self {
        Self::new("annotate")
            .push(resource_type)
            .push(name)
            .push(annotation)
            .namespace(namespace)
    }

    pub fn label(
        resource_type: &str,
        name: &str,
        label: &str,
        namespace: Option<&str>,
    ) -> Self {
        Self::new("label")
            .push(resource_type)
            .push(name)
            .push(label)
            .namespace(namespace)
    }

    pub fn node(action: NodeAction, node: &str) -> Self {
        Self::new(action.as_token()).push(node)
    }

    pub fn exec(pod: &str, namespace: Option<&str>, command: &[String]) -> Self {
        let mut inv = Self::new("exec").push(pod).namespace(namespace).push("--");
        for part in command {
            inv = inv.push(part);
        }
        inv
    }

    pub fn expose(
        resource_type: &str,
        name: &str,
        port: u16,
        target_port: Option<u16>,
        namespace: Option<&str>,
    ) -> Self {
        let mut inv = Self::new("expose")
            .push(resource_type)
            .push(name)
            .push("--port")
            .push(port.to_string());
        if let Some(tp) = target_port {
            inv = inv.push("--target-port").push(tp.to_string());
        }
        inv.namespace(namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resource::TaintEffect;

    fn tokens(inv: &Invocation) -> Vec<&str> {
        inv.args().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_delete_with_namespace() {
        let inv = Invocation::delete("pods", "web-0", Some("prod"));
        assert_eq!(tokens(&inv), ["delete", "pods", "web-0", "-n", "prod"]);
    }

    #[test]
    fn test_delete_without_namespace() {
        let inv = Invocation::delete("pods", "web-0", None);
        assert_eq!(tokens(&inv), ["delete", "pods", "web-0"]);
    }

    #[test]
    fn test_create_and_apply() {
        assert_eq!(
            tokens(&Invocation::create("deploy.yaml")),
            ["create", "-f", "deploy.yaml"]
        );
        assert_eq!(
            tokens(&Invocation::apply("deploy.yaml")),
            ["apply", "-f", "deploy.yaml"]
        );
    }

    #[test]
    fn test_rollout() {
        let inv = Invocation::rollout(RolloutAction::Restart, "deployments", "web", Some("prod"));
        assert_eq!(
            tokens(&inv),
            ["rollout", "restart", "deployments", "web", "-n", "prod"]
        );
    }

    #[test]
    fn test_scale() {
        let inv = Invocation::scale("statefulsets", "db", 5, None);
        assert_eq!(
            tokens(&inv),
            ["scale", "statefulsets", "db", "--replicas", "5"]
        );
    }

    #[test]
    fn test_taint() {
        let taint = TaintSpec::new("dedicated", None, TaintEffect::NoSchedule);
        let inv = Invocation::taint("worker-1", &taint);
        assert_eq!(
            tokens(&inv),
            ["taint", "nodes", "worker-1", "dedicated:NoSchedule"]
        );
    }

    #[test]
    fn test_top_nodes_ignores_namespace() {
        let inv = Invocation::top(TopTarget::Nodes, Some("prod"));
        assert_eq!(tokens(&inv), ["top", "nodes"]);

        let inv = Invocation::top(TopTarget::Pods, Some("prod"));
        assert_eq!(tokens(&inv), ["top", "pods", "-n", "prod"]);
    }

    #[test]
    fn test_node_actions() {
        assert_eq!(
            tokens(&Invocation::node(NodeAction::Cordon, "worker-1")),
            ["cordon", "worker-1"]
        );
        assert_eq!(
            tokens(&Invocation::node(NodeAction::Drain, "worker-1")),
            ["drain", "worker-1"]
        );
    }

    #[test]
    fn test_exec_places_namespace_before_separator() {
        let cmd = vec!["sh".to_string(), "-c".to_string(), "ls /".to_string()];
        let inv = Invocation::exec("web-0", Some("prod"), &cmd);
        assert_eq!(
            tokens(&inv),
            ["exec", "web-0", "-n", "prod", "--", "sh", "-c", "ls /"]
        );
    }

    #[test]
    fn test_expose() {
        let inv = Invocation::expose("deployments", "web", 80, Some(8080), Some("prod"));
        assert_eq!(
            tokens(&inv),
            [
                "expose",
                "deployments",
                "web",
                "--port",
                "80",
                "--target-port",
                "8080",
                "-n",
                "prod"
            ]
        );
    }

    #[test]
    fn test_command_line() {
        let inv = Invocation::logs("web-0", Some("prod"));
        assert_eq!(inv.command_line("kubectl"), "kubectl logs web-0 -n prod");
    }
}
