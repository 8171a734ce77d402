//! Resource listing commands backed by the Kubernetes API
//!
//! `get` resolves its resource keyword against the closed `ResourceKind` set,
//! lists through the API client and renders a table. Deployment and pod
//! listings are decorated with an AI-insights section; a missing API key or a
//! failed completion request degrades to a warning, never a failed listing.

use crate::cli::display::TableRenderer;
use crate::domain::config::BrickConf;
use crate::domain::resource::ResourceKind;
use crate::infrastructure::constants::{DEFAULT_NAMESPACE, INSIGHTS_HEADER};
use crate::infrastructure::insight::{listing_prompt, InsightClient};
use crate::infrastructure::kubernetes::{BrickKubeClient, BrickKubeClientImpl};
use clap::Parser;
use colored::Colorize;
use tracing::warn;

async fn build_client(
    namespace: String,
    kubeconfig: Option<String>,
    context: Option<String>,
) -> Result<BrickKubeClientImpl, crate::shared::BrickError> {
    if kubeconfig.is_some() || context.is_some() {
        BrickKubeClientImpl::new_with_config(namespace, kubeconfig, context).await
    } else {
        BrickKubeClientImpl::new(namespace).await
    }
}

/// Print the insights section for a decorated listing. Never fails the
/// surrounding command.
fn print_insights(conf: &BrickConf, kind: ResourceKind, namespace: &str) {
    if !conf.insights.enabled {
        return;
    }

    let client = match InsightClient::new(conf.insights.clone()) {
        Ok(client) => client,
        Err(err) => {
            warn!("skipping insights: {}", err);
            return;
        }
    };

    match client.generate(&listing_prompt(kind, namespace)) {
        Ok(text) if !text.is_empty() => {
            println!();
            println!("{}", INSIGHTS_HEADER.cyan().bold());
            println!("{}", text);
        }
        Ok(_) => {}
        Err(err) => warn!("insight request failed: {}", err),
    }
}

#[derive(Parser, Debug)]
pub struct GetCommand {
    /// Resource type to get (e.g., deployments, pods)
    pub resource: String,

    /// Namespace of the resource
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Path to kubeconfig file
    /// If not specified, uses default kubeconfig resolution (KUBECONFIG env or ~/.kube/config)
    #[arg(long)]
    pub kubeconfig: Option<String>,

    /// Kubernetes context to use
    #[arg(long)]
    pub context: Option<String>,
}

impl GetCommand {
    pub async fn execute(&self, conf: &BrickConf) -> anyhow::Result<()> {
        let kind: ResourceKind = self.resource.parse()?;
        let namespace = self
            .namespace
            .clone()
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());

        let client = build_client(
            namespace.clone(),
            self.kubeconfig.clone(),
            self.context.clone(),
        )
        .await?;

        let renderer = TableRenderer::new();
        match kind {
            ResourceKind::Deployments => {
                let deployments = client.list_deployments().await?;
                println!("{}", renderer.render_deployments(&deployments));
                print_insights(conf, kind, &namespace);
            }
            ResourceKind::Pods => {
                let pods = client.list_pods().await?;
                println!("{}", renderer.render_pods(&pods));
                print_insights(conf, kind, &namespace);
            }
            ResourceKind::Namespaces => {
                let namespaces = client.list_namespaces().await?;
                println!("{}", renderer.render_namespaces(&namespaces));
            }
            ResourceKind::Services => {
                let services = client.list_services().await?;
                println!("{}", renderer.render_services(&services));
            }
            ResourceKind::ServiceAccounts => {
                let accounts = client.list_service_accounts().await?;
                println!("{}", renderer.render_service_accounts(&accounts));
            }
            ResourceKind::StatefulSets => {
                let statefulsets = client.list_statefulsets().await?;
                println!("{}", renderer.render_statefulsets(&statefulsets));
            }
        }

        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct ServicesCommand {
    /// Namespace to list services in
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Path to kubeconfig file
    #[arg(long)]
    pub kubeconfig: Option<String>,

    /// Kubernetes context to use
    #[arg(long)]
    pub context: Option<String>,
}

impl ServicesCommand {
    pub async fn execute(&self, _conf: &BrickConf) -> anyhow::Result<()> {
        let namespace = self
            .namespace
            .clone()
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        let client =
            build_client(namespace, self.kubeconfig.clone(), self.context.clone()).await?;

        let services = client.list_services().await?;
        println!("{}", TableRenderer::new().render_services(&services));
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct ServiceAccountCommand {
    /// Namespace to list service accounts in
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Path to kubeconfig file
    #[arg(long)]
    pub kubeconfig: Option<String>,

    /// Kubernetes context to use
    #[arg(long)]
    pub context: Option<String>,
}

impl ServiceAccountCommand {
    pub async fn execute(&self, _conf: &BrickConf) -> anyhow::Result<()> {
        let namespace = self
            .namespace
            .clone()
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        let client =
            build_client(namespace, self.kubeconfig.clone(), self.context.clone()).await?;

        let accounts = client.list_service_accounts().await?;
        println!("{}", TableRenderer::new().render_service_accounts(&accounts));
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct StatefulSetsCommand {
    /// Namespace to list statefulsets in
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Path to kubeconfig file
    #[arg(long)]
    pub kubeconfig: Option<String>,

    /// Kubernetes context to use
    #[arg(long)]
    pub context: Option<String>,
}

impl StatefulSetsCommand {
    pub async fn execute(&self, _conf: &BrickConf) -> anyhow::Result<()> {
        let namespace = self
            .namespace
            .clone()
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        let client =
            build_client(namespace, self.kubeconfig.clone(), self.context.clone()).await?;

        let statefulsets = client.list_statefulsets().await?;
        println!("{}", TableRenderer::new().render_statefulsets(&statefulsets));
        Ok(())
    }
}
