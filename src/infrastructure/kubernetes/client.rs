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

use crate::shared::error::BrickError;
use chrono::{DateTime, Utc};
use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};
use k8s_openapi::api::core::v1::{Namespace, Pod, Service, ServiceAccount};
use kube::{Api, Client};

/// Row data extracted from a Deployment for listing.
#[derive(Debug, Clone)]
pub struct DeploymentSummary {
    pub name: String,
    pub ready_replicas: u32,
    pub replicas: u32,
    pub created: Option<DateTime<Utc>>,
}

/// Row data extracted from a Pod for listing.
#[derive(Debug, Clone)]
pub struct PodSummary {
    pub name: String,
    pub phase: String,
    pub ready_containers: u32,
    pub total_containers: u32,
    pub restarts: u32,
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NamespaceSummary {
    pub name: String,
    pub status: String,
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ServiceSummary {
    pub name: String,
    pub service_type: String,
    pub cluster_ip: String,
    pub ports: String,
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct ServiceAccountSummary {
    pub name: String,
    pub secrets: usize,
    pub created: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct StatefulSetSummary {
    pub name: String,
    pub ready_replicas: u32,
    pub replicas: u32,
    pub created: Option<DateTime<Utc>>,
}

#[async_trait::async_trait]
pub trait BrickKubeClient: Send + Sync {
    async fn list_deployments(&self) -> Result<Vec<DeploymentSummary>, BrickError>;

    async fn list_pods(&self) -> Result<Vec<PodSummary>, BrickError>;

    async fn list_namespaces(&self) -> Result<Vec<NamespaceSummary>, BrickError>;

    async fn list_services(&self) -> Result<Vec<ServiceSummary>, BrickError>;

    async fn list_service_accounts(&self) -> Result<Vec<ServiceAccountSummary>, BrickError>;

    async fn list_statefulsets(&self) -> Result<Vec<StatefulSetSummary>, BrickError>;
}

pub struct BrickKubeClientImpl {
    client: Client,
    namespace: String,
}

impl BrickKubeClientImpl {
    pub async fn new(namespace: String) -> Result<Self, BrickError> {
        let client = Client::try_default().await.map_err(|e| {
            BrickError::KubeApi(format!("Failed to create Kubernetes client: {}", e))
        })?;

        Ok(Self { client, namespace })
    }

    pub async fn new_with_config(
        namespace: String,
        kubeconfig_path: Option<String>,
        context: Option<String>,
    ) -> Result<Self, BrickError> {
        use kube::config::{KubeConfigOptions, Kubeconfig};

        let kubeconfig = if let Some(path) = kubeconfig_path {
            Kubeconfig::read_from(path)
                .map_err(|e| BrickError::KubeApi(format!("Failed to load kubeconfig: {}", e)))?
        } else {
            Kubeconfig::read()
                .map_err(|e| BrickError::KubeApi(format!("Failed to load kubeconfig: {}", e)))?
        };

        let config_options = KubeConfigOptions {
            context,
            cluster: None,
            user: None,
        };

        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &config_options)
            .await
            .map_err(|e| {
                BrickError::KubeApi(format!("Failed to create Kubernetes config: {}", e))
            })?;

        let client = Client::try_from(config).map_err(|e| {
            BrickError::KubeApi(format!("Failed to create Kubernetes client: {}", e))
        })?;

        Ok(Self { client, namespace })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

fn creation_time(
    meta: &k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta,
) -> Option<DateTime<Utc>> {
    meta.creation_timestamp.as_ref().map(|t| t.0)
}

#[async_trait::async_trait]
impl BrickKubeClient for BrickKubeClientImpl {
    async fn list_deployments(&self) -> Result<Vec<DeploymentSummary>, BrickError> {
        let api: Api<Deployment> = Api::namespaced(self.client.clone(), &self.namespace);
        let list = api.list(&Default::default()).await?;

        let summaries = list
            .items
            .into_iter()
            .filter_map(|d| {
                let name = d.metadata.name.clone()?;
                let status = d.status.as_ref();
                Some(DeploymentSummary {
                    name,
                    ready_replicas: status
                        .and_then(|s| s.ready_replicas)
                        .unwrap_or(0)
                        .max(0) as u32,
                    replicas: d
                        .spec
                        .as_ref()
                        .and_then(|s| s.replicas)
                        .unwrap_or(0)
                        .max(0) as u32,
                    created: creation_time(&d.metadata),
                })
            })
            .collect();

        Ok(summaries)
    }

    async fn list_pods(&self) -> Result<Vec<PodSummary>, BrickError> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), &self.namespace);
        let list = api.list(&Default::default()).await?;

        let summaries = list
            .items
            .into_iter()
            .filter_map(|p| {
                let name = p.metadata.name.clone()?;
                let status = p.status.as_ref();
                let containers = status.and_then(|s| s.container_statuses.as_ref());

                let ready_containers = containers
                    .map(|cs| cs.iter().filter(|c| c.ready).count() as u32)
                    .unwrap_or(0);
                let total_containers = containers.map(|cs| cs.len() as u32).unwrap_or(0);
                let restarts = containers
                    .map(|cs| cs.iter().map(|c| c.restart_count.max(0) as u32).sum::<u32>())
                    .unwrap_or(0);

                Some(PodSummary {
                    name,
                    phase: status
                        .and_then(|s| s.phase.clone())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    ready_containers,
                    total_containers,
                    restarts,
                    created: creation_time(&p.metadata),
                })
            })
            .collect();

        Ok(summaries)
    }

    async fn list_namespaces(&self) -> Result<Vec<NamespaceSummary>, BrickError> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        let list = api.list(&Default::default()).await?;

        let summaries = list
            .items
            .into_iter()
            .filter_map(|ns| {
                let name = ns.metadata.name.clone()?;
                Some(NamespaceSummary {
                    name,
                    status: ns
                        .status
                        .as_ref()
                        .and_then(|s| s.phase.clone())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    created: creation_time(&ns.metadata),
                })
            })
            .collect();

        Ok(summaries)
    }

    async fn list_services(&self) -> Result<Vec<ServiceSummary>, BrickError> {
        let api: Api<Service> = Api::namespaced(self.client.clone(), &self.namespace);
        let list = api.list(&Default::default()).await?;

        let summaries = list
            .items
            .into_iter()
            .filter_map(|svc| {
                let name = svc.metadata.name.clone()?;
                let spec = svc.spec.as_ref();

                let ports = spec
                    .and_then(|s| s.ports.as_ref())
                    .map(|ports| {
                        ports
                            .iter()
                            .map(|p| {
                                format!(
                                    "{}/{}",
                                    p.port,
                                    p.protocol.as_deref().unwrap_or("TCP")
                                )
                            })
                            .collect::<Vec<_>>()
                            .join(",")
                    })
                    .unwrap_or_default();

                Some(ServiceSummary {
                    name,
                    service_type: spec
                        .and_then(|s| s.type_.clone())
                        .unwrap_or_else(|| "ClusterIP".to_string()),
                    cluster_ip: spec
                        .and_then(|s| s.cluster_ip.clone())
                        .unwrap_or_else(|| "<none>".to_string()),
                    ports,
                    created: creation_time(&svc.metadata),
                })
            })
            .collect();

        Ok(summaries)
    }

    async fn list_service_accounts(&self) -> Result<Vec<ServiceAccountSummary>, BrickError> {
        let api: Api<ServiceAccount> = Api::namespaced(self.client.clone(), &self.namespace);
        let list = api.list(&Default::default()).await?;

        let summaries = list
            .items
            .into_iter()
            .filter_map(|sa| {
                let name = sa.metadata.name.clone()?;
                Some(ServiceAccountSummary {
                    name,
                    secrets: sa.secrets.as_ref().map(|s| s.len()).unwrap_or(0),
                    created: creation_time(&sa.metadata),
                })
            })
            .collect();

        Ok(summaries)
    }

    async fn list_statefulsets(&self) -> Result<Vec<StatefulSetSummary>, BrickError> {
        let api: Api<StatefulSet> = Api::namespaced(self.client.clone(), &self.namespace);
        let list = api.list(&Default::default()).await?;

        let summaries = list
            .items
            .into_iter()
            .filter_map(|sts| {
                let name = sts.metadata.name.clone()?;
                Some(StatefulSetSummary {
                    name,
                    ready_replicas: sts
                        .status
                        .as_ref()
                        .and_then(|s| s.ready_replicas)
                        .unwrap_or(0)
                        .max(0) as u32,
                    replicas: sts
                        .spec
                        .as_ref()
                        .and_then(|s| s.replicas)
                        .unwrap_or(0)
                        .max(0) as u32,
                    created: creation_time(&sts.metadata),
                })
            })
            .collect();

        Ok(summaries)
    }
}
