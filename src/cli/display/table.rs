//! Table rendering for resource listings

use super::{ColorTheme, StatusIcon};
use crate::infrastructure::kubernetes::{
    DeploymentSummary, NamespaceSummary, PodSummary, ServiceAccountSummary, ServiceSummary,
    StatefulSetSummary,
};
use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Table};

/// kubectl-style age: the largest whole unit of the elapsed time.
pub fn format_age(created: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(created) = created else {
        return "<unknown>".to_string();
    };

    let secs = (now - created).num_seconds().max(0);
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86400)
    }
}

/// Table renderer for formatted output
pub struct TableRenderer {
    theme: ColorTheme,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TableRenderer {
    /// Create a new table renderer with default theme
    pub fn new() -> Self {
        Self {
            theme: ColorTheme::default(),
        }
    }

    fn base_table(headers: &[&str]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(
                headers
                    .iter()
                    .map(|h| Cell::new(h).set_alignment(CellAlignment::Left))
                    .collect::<Vec<_>>(),
            );
        table
    }

    pub fn render_deployments(&self, deployments: &[DeploymentSummary]) -> String {
        if deployments.is_empty() {
            return "No deployments found".to_string();
        }

        let now = Utc::now();
        let mut table = Self::base_table(&["NAME", "READY", "AGE"]);
        for d in deployments {
            let icon = StatusIcon::get_ready_icon(d.ready_replicas, d.replicas);
            let color = self.theme.get_ready_color(d.ready_replicas, d.replicas);
            table.add_row(vec![
                Cell::new(&d.name),
                Cell::new(format!("{} {}/{}", icon, d.ready_replicas, d.replicas)).fg(color),
                Cell::new(format_age(d.created, now)),
            ]);
        }

        table.to_string()
    }

    pub fn render_pods(&self, pods: &[PodSummary]) -> String {
        if pods.is_empty() {
            return "No pods found".to_string();
        }

        let now = Utc::now();
        let mut table = Self::base_table(&["NAME", "READY", "STATUS", "RESTARTS", "AGE"]);
        for p in pods {
            let ready_color = self
                .theme
                .get_ready_color(p.ready_containers, p.total_containers);
            let phase_icon = StatusIcon::get_phase_icon(&p.phase);
            let phase_color = self.theme.get_phase_color(&p.phase);
            table.add_row(vec![
                Cell::new(&p.name),
                Cell::new(format!("{}/{}", p.ready_containers, p.total_containers))
                    .fg(ready_color),
                Cell::new(format!("{} {}", phase_icon, p.phase)).fg(phase_color),
                Cell::new(p.restarts.to_string()).set_alignment(CellAlignment::Right),
                Cell::new(format_age(p.created, now)),
            ]);
        }

        table.to_string()
    }

    pub fn render_namespaces(&self, namespaces: &[NamespaceSummary]) -> String {
        if namespaces.is_empty() {
            return "No namespaces found".to_string();
        }

        let now = Utc::now();
        let mut table = Self::base_table(&["NAME", "STATUS", "AGE"]);
        for ns in namespaces {
            let color = self.theme.get_phase_color(&ns.status);
            table.add_row(vec![
                Cell::new(&ns.name),
                Cell::new(&ns.status).fg(color),
                Cell::new(format_age(ns.created, now)),
            ]);
        }

        table.to_string()
    }

    pub fn render_services(&self, services: &[ServiceSummary]) -> String {
        if services.is_empty() {
            return "No services found".to_string();
        }

        let now = Utc::now();
        let mut table = Self::base_table(&["NAME", "TYPE", "CLUSTER-IP", "PORT(S)", "AGE"]);
        for svc in services {
            table.add_row(vec![
                Cell::new(&svc.name),
                Cell::new(&svc.service_type).fg(self.theme.info),
                Cell::new(&svc.cluster_ip),
                Cell::new(&svc.ports),
                Cell::new(format_age(svc.created, now)),
            ]);
        }

        table.to_string()
    }

    pub fn render_service_accounts(&self, accounts: &[ServiceAccountSummary]) -> String {
        if accounts.is_empty() {
            return "No serviceaccounts found".to_string();
        }

        let now = Utc::now();
        let mut table = Self::base_table(&["NAME", "SECRETS", "AGE"]);
        for sa in accounts {
            table.add_row(vec![
                Cell::new(&sa.name),
                Cell::new(sa.secrets.to_string()).set_alignment(CellAlignment::Right),
                Cell::new(format_age(sa.created, now)),
            ]);
        }

        table.to_string()
    }

    pub fn render_statefulsets(&self, statefulsets: &[StatefulSetSummary]) -> String {
        if statefulsets.is_empty() {
            return "No statefulsets found".to_string();
        }

        let now = Utc::now();
        let mut table = Self::base_table(&["NAME", "READY", "AGE"]);
        for sts in statefulsets {
            let icon = StatusIcon::get_ready_icon(sts.ready_replicas, sts.replicas);
            let color = self
                .theme
                .get_ready_color(sts.ready_replicas, sts.replicas);
            table.add_row(vec![
                Cell::new(&sts.name),
                Cell::new(format!("{} {}/{}", icon, sts.ready_replicas, sts.replicas)).fg(color),
                Cell::new(format_age(sts.created, now)),
            ]);
        }

        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_age() {
        let now = Utc::now();
        assert_eq!(format_age(Some(now - Duration::seconds(30)), now), "30s");
        assert_eq!(format_age(Some(now - Duration::minutes(12)), now), "12m");
        assert_eq!(format_age(Some(now - Duration::hours(3)), now), "3h");
        assert_eq!(format_age(Some(now - Duration::days(5)), now), "5d");
        assert_eq!(format_age(None, now), "<unknown>");
    }

    #[test]
    fn test_render_empty_deployments() {
        let renderer = TableRenderer::new();
        let output = renderer.render_deployments(&[]);
        assert!(output.contains("No deployments found"));
    }

    #[test]
    fn test_render_single_pod() {
        let renderer = TableRenderer::new();
        let pods = vec![PodSummary {
            name: "web-0".to_string(),
            phase: "Running".to_string(),
            ready_containers: 2,
            total_containers: 2,
            restarts: 1,
            created: Some(Utc::now() - Duration::hours(2)),
        }];

        let output = renderer.render_pods(&pods);
        assert!(output.contains("web-0"));
        assert!(output.contains("2/2"));
        assert!(output.contains("Running"));
        assert!(output.contains("2h"));
    }

    #[test]
    fn test_render_services() {
        let renderer = TableRenderer::new();
        let services = vec![ServiceSummary {
            name: "web".to_string(),
            service_type: "ClusterIP".to_string(),
            cluster_ip: "10.0.0.12".to_string(),
            ports: "80/TCP,443/TCP".to_string(),
            created: None,
        }];

        let output = renderer.render_services(&services);
        assert!(output.contains("web"));
        assert!(output.contains("10.0.0.12"));
        assert!(output.contains("80/TCP,443/TCP"));
        assert!(output.contains("<unknown>"));
    }
}
