//! Commands delegated to the external cluster tool
//!
//! Each command assembles its token sequence and hands it to the runner.
//! Captured output is printed trimmed; a non-zero exit from the tool is
//! surfaced as an error carrying the tool's own exit code.

use crate::domain::config::BrickConf;
use crate::domain::resource::{
    normalize_resource_type, parse_key_value, validate_node_name, NodeAction, RolloutAction,
    TaintEffect, TaintSpec, TopTarget,
};
use crate::infrastructure::kubectl::{Invocation, Kubectl, KubectlRunner};
use crate::shared::error::BrickError;
use clap::Parser;

async fn run_captured(conf: &BrickConf, invocation: &Invocation) -> anyhow::Result<()> {
    let runner = Kubectl::new(conf.kubectl.binary.clone());
    let output = runner.run(invocation).await?;
    println!("{}", output.stdout.trim());
    Ok(())
}

async fn run_interactive(conf: &BrickConf, invocation: &Invocation) -> anyhow::Result<()> {
    let runner = Kubectl::new(conf.kubectl.binary.clone());
    runner.run_interactive(invocation).await?;
    Ok(())
}

#[derive(Parser, Debug)]
pub struct CreateCommand {
    /// Path to the resource manifest file
    pub file: String,
}

impl CreateCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        run_captured(conf, &Invocation::create(&self.file)).await
    }
}

#[derive(Parser, Debug)]
pub struct ApplyCommand {
    /// Path to the resource manifest file
    pub file: String,
}

impl ApplyCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        run_captured(conf, &Invocation::apply(&self.file)).await
    }
}

#[derive(Parser, Debug)]
pub struct DeleteCommand {
    /// Resource type to delete (e.g., deployments, pods)
    pub resource_type: String,

    /// Name of the resource to delete
    pub name: String,

    /// Namespace of the resource
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,
}

impl DeleteCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        let resource_type = normalize_resource_type(&self.resource_type);
        let inv = Invocation::delete(&resource_type, &self.name, self.namespace.as_deref());
        run_captured(conf, &inv).await
    }
}

#[derive(Parser, Debug)]
pub struct DescribeCommand {
    /// Resource type to describe (e.g., deployments, pods)
    pub resource_type: String,

    /// Name of the resource to describe
    pub name: String,

    /// Namespace of the resource
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,
}

impl DescribeCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        let resource_type = normalize_resource_type(&self.resource_type);
        let inv = Invocation::describe(&resource_type, &self.name, self.namespace.as_deref());
        run_captured(conf, &inv).await
    }
}

#[derive(Parser, Debug)]
pub struct LogsCommand {
    /// Name of the pod
    pub name: String,

    /// Namespace of the pod
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,
}

impl LogsCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        let inv = Invocation::logs(&self.name, self.namespace.as_deref());
        run_captured(conf, &inv).await
    }
}

#[derive(Parser, Debug)]
pub struct EditCommand {
    /// Resource type to edit (e.g., deployments, pods)
    pub resource_type: String,

    /// Name of the resource to edit
    pub name: String,

    /// Namespace of the resource
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,
}

impl EditCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        let resource_type = normalize_resource_type(&self.resource_type);
        let inv = Invocation::edit(&resource_type, &self.name, self.namespace.as_deref());
        // The editor needs the terminal
        run_interactive(conf, &inv).await
    }
}

#[derive(Parser, Debug)]
pub struct RolloutCommand {
    /// Rollout action (status, history, pause, resume, restart, undo)
    pub action: String,

    /// Resource type (e.g., deployments, statefulsets)
    pub resource_type: String,

    /// Name of the resource
    pub name: String,

    /// Namespace of the resource
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,
}

impl RolloutCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        let action: RolloutAction = self.action.parse()?;
        let resource_type = normalize_resource_type(&self.resource_type);
        let inv = Invocation::rollout(action, &resource_type, &self.name, self.namespace.as_deref());
        run_captured(conf, &inv).await
    }
}

#[derive(Parser, Debug)]
pub struct ScaleCommand {
    /// Resource type to scale (e.g., deployments, statefulsets)
    pub resource_type: String,

    /// Name of the resource
    pub name: String,

    /// Desired replica count
    #[arg(long)]
    pub replicas: u32,

    /// Namespace of the resource
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,
}

impl ScaleCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        let resource_type = normalize_resource_type(&self.resource_type);
        let inv = Invocation::scale(
            &resource_type,
            &self.name,
            self.replicas,
            self.namespace.as_deref(),
        );
        run_captured(conf, &inv).await
    }
}

#[derive(Parser, Debug)]
pub struct TaintCommand {
    /// Node to taint
    pub node: String,

    /// Taint key
    pub key: String,

    /// Taint effect (NoSchedule, PreferNoSchedule, NoExecute)
    pub effect: String,

    /// Taint value; the taint renders as key:EFFECT when omitted
    #[arg(long)]
    pub value: Option<String>,
}

impl TaintCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        validate_node_name(&self.node)?;
        let effect: TaintEffect = self.effect.parse()?;
        let taint = TaintSpec::new(self.key.clone(), self.value.clone(), effect);
        let inv = Invocation::taint(&self.node, &taint);
        run_captured(conf, &inv).await
    }
}

#[derive(Parser, Debug)]
pub struct TopCommand {
    /// Metrics target (pods or nodes)
    pub target: String,

    /// Namespace (pods only)
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,
}

impl TopCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        let target: TopTarget = self.target.parse()?;
        let inv = Invocation::top(target, self.namespace.as_deref());
        run_captured(conf, &inv).await
    }
}

#[derive(Parser, Debug)]
pub struct AnnotateCommand {
    /// Resource type to annotate (e.g., deployments, pods)
    pub resource_type: String,

    /// Name of the resource
    pub name: String,

    /// Annotation in key=value form
    pub annotation: String,

    /// Namespace of the resource
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,
}

impl AnnotateCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        parse_key_value(&self.annotation)?;
        let resource_type = normalize_resource_type(&self.resource_type);
        let inv = Invocation::annotate(
            &resource_type,
            &self.name,
            &self.annotation,
            self.namespace.as_deref(),
        );
        run_captured(conf, &inv).await
    }
}

#[derive(Parser, Debug)]
pub struct LabelCommand {
    /// Resource type to label (e.g., deployments, pods)
    pub resource_type: String,

    /// Name of the resource
    pub name: String,

    /// Label in key=value form
    pub label: String,

    /// Namespace of the resource
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,
}

impl LabelCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        parse_key_value(&self.label)?;
        let resource_type = normalize_resource_type(&self.resource_type);
        let inv = Invocation::label(
            &resource_type,
            &self.name,
            &self.label,
            self.namespace.as_deref(),
        );
        run_captured(conf, &inv).await
    }
}

#[derive(Parser, Debug)]
pub struct CordonCommand {
    /// Node to mark unschedulable
    pub node: String,
}

impl CordonCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        validate_node_name(&self.node)?;
        let inv = Invocation::node(NodeAction::Cordon, &self.node);
        run_captured(conf, &inv).await
    }
}

#[derive(Parser, Debug)]
pub struct UncordonCommand {
    /// Node to mark schedulable again
    pub node: String,
}

impl UncordonCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        validate_node_name(&self.node)?;
        let inv = Invocation::node(NodeAction::Uncordon, &self.node);
        run_captured(conf, &inv).await
    }
}

#[derive(Parser, Debug)]
pub struct DrainCommand {
    /// Node to drain
    pub node: String,
}

impl DrainCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        validate_node_name(&self.node)?;
        let inv = Invocation::node(NodeAction::Drain, &self.node);
        run_captured(conf, &inv).await
    }
}

#[derive(Parser, Debug)]
pub struct ExecCommand {
    /// Name of the pod
    pub pod: String,

    /// Namespace of the pod
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Command to run inside the container (after --)
    #[arg(last = true)]
    pub command: Vec<String>,
}

impl ExecCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        if self.command.is_empty() {
            return Err(BrickError::invalid_input(
                "exec requires a command (usage: brickctl exec <pod> [-n <namespace>] -- <command...>)",
            )
            .into());
        }

        let inv = Invocation::exec(&self.pod, self.namespace.as_deref(), &self.command);
        run_interactive(conf, &inv).await
    }
}

#[derive(Parser, Debug)]
pub struct ExposeCommand {
    /// Resource type to expose (e.g., deployments, pods)
    pub resource_type: String,

    /// Name of the resource
    pub name: String,

    /// Service port
    #[arg(long)]
    pub port: u16,

    /// Container port the service forwards to
    #[arg(long)]
    pub target_port: Option<u16>,

    /// Namespace of the resource
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,
}

impl ExposeCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        let resource_type = normalize_resource_type(&self.resource_type);
        let inv = Invocation::expose(
            &resource_type,
            &self.name,
            self.port,
            self.target_port,
            self.namespace.as_deref(),
        );
        run_captured(conf, &inv).await
    }
}
