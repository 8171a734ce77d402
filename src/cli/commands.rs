// CLI command definitions

use super::kubectl::{
    AnnotateCommand, ApplyCommand, CordonCommand, CreateCommand, DeleteCommand, DescribeCommand,
    DrainCommand, EditCommand, ExecCommand, ExposeCommand, LabelCommand, LogsCommand,
    RolloutCommand, ScaleCommand, TaintCommand, TopCommand, UncordonCommand,
};
use super::resources::{GetCommand, ServiceAccountCommand, ServicesCommand, StatefulSetsCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "brickctl",
    version,
    about = "A CLI tool to provide AI insights into K8s deployments",
    long_about = "A CLI wrapper around kubectl with AI-generated insights for resource listings"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Get resources from the cluster
    Get(GetCommand),

    /// Create a resource from a file
    Create(CreateCommand),

    /// Delete a resource
    Delete(DeleteCommand),

    /// Apply a resource from a file
    Apply(ApplyCommand),

    /// Describe a resource
    Describe(DescribeCommand),

    /// Get logs of a container
    Logs(LogsCommand),

    /// Edit a resource in the default editor
    Edit(EditCommand),

    /// Manage the rollout of a resource
    Rollout(RolloutCommand),

    /// Set a new replica count for a resource
    Scale(ScaleCommand),

    /// Update taints on a node
    Taint(TaintCommand),

    /// Show resource usage of pods or nodes
    Top(TopCommand),

    /// Update annotations on a resource
    Annotate(AnnotateCommand),

    /// Mark a node as unschedulable
    Cordon(CordonCommand),

    /// Mark a node as schedulable
    Uncordon(UncordonCommand),

    /// Drain a node in preparation for maintenance
    Drain(DrainCommand),

    /// Update labels on a resource
    Label(LabelCommand),

    /// Execute a command in a container
    Exec(ExecCommand),

    /// Expose a resource as a new service
    Expose(ExposeCommand),

    /// List services
    Services(ServicesCommand),

    /// List service accounts
    #[command(name = "serviceaccount")]
    ServiceAccount(ServiceAccountCommand),

    /// List statefulsets
    #[command(name = "statefulsets")]
    StatefulSets(StatefulSetsCommand),
}
