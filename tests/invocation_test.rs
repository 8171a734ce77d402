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

#[cfg(test)]
mod tests {
    use brickctl::domain::resource::normalize_resource_type;
    use brickctl::*;

    fn tokens(inv: &Invocation) -> Vec<&str> {
        inv.args().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_delete_flag_ordering() {
        let inv = Invocation::delete("deployments", "web", Some("prod"));
        assert_eq!(tokens(&inv), ["delete", "deployments", "web", "-n", "prod"]);

        let inv = Invocation::delete("deployments", "web", None);
        assert_eq!(tokens(&inv), ["delete", "deployments", "web"]);
    }

    #[test]
    fn test_file_backed_operations() {
        assert_eq!(
            tokens(&Invocation::create("manifest.yaml")),
            ["create", "-f", "manifest.yaml"]
        );
        assert_eq!(
            tokens(&Invocation::apply("manifest.yaml")),
            ["apply", "-f", "manifest.yaml"]
        );
    }

    #[test]
    fn test_describe_and_logs() {
        assert_eq!(
            tokens(&Invocation::describe("pods", "web-0", Some("prod"))),
            ["describe", "pods", "web-0", "-n", "prod"]
        );
        assert_eq!(tokens(&Invocation::logs("web-0", None)), ["logs", "web-0"]);
    }

    #[test]
    fn test_rollout_actions() {
        for (action, token) in [
            (RolloutAction::Status, "status"),
            (RolloutAction::History, "history"),
            (RolloutAction::Pause, "pause"),
            (RolloutAction::Resume, "resume"),
            (RolloutAction::Restart, "restart"),
            (RolloutAction::Undo, "undo"),
        ] {
            let inv = Invocation::rollout(action, "deployments", "web", None);
            assert_eq!(tokens(&inv), ["rollout", token, "deployments", "web"]);
        }
    }

    #[test]
    fn test_scale_tokens() {
        let inv = Invocation::scale("deployments", "web", 3, Some("prod"));
        assert_eq!(
            tokens(&inv),
            ["scale", "deployments", "web", "--replicas", "3", "-n", "prod"]
        );
    }

    #[test]
    fn test_taint_rendering_in_tokens() {
        let with_value = TaintSpec::new(
            "dedicated",
            Some("gpu".to_string()),
            TaintEffect::NoSchedule,
        );
        assert_eq!(
            tokens(&Invocation::taint("worker-1", &with_value)),
            ["taint", "nodes", "worker-1", "dedicated=gpu:NoSchedule"]
        );

        // Empty value renders with nothing before the colon separator
        let without_value = TaintSpec::new("dedicated", None, TaintEffect::NoExecute);
        assert_eq!(
            tokens(&Invocation::taint("worker-1", &without_value)),
            ["taint", "nodes", "worker-1", "dedicated:NoExecute"]
        );
    }

    #[test]
    fn test_node_operations_take_no_namespace() {
        assert_eq!(
            tokens(&Invocation::node(NodeAction::Cordon, "worker-1")),
            ["cordon", "worker-1"]
        );
        assert_eq!(
            tokens(&Invocation::node(NodeAction::Uncordon, "worker-1")),
            ["uncordon", "worker-1"]
        );
        assert_eq!(
            tokens(&Invocation::node(NodeAction::Drain, "worker-1")),
            ["drain", "worker-1"]
        );
    }

    #[test]
    fn test_node_action_keyword_set_is_closed() {
        assert!("cordon".parse::<NodeAction>().is_ok());
        assert!("uncordon".parse::<NodeAction>().is_ok());
        assert!("drain".parse::<NodeAction>().is_ok());

        let err = "reboot".parse::<NodeAction>().unwrap_err();
        assert_eq!(err.exit_code(), 1);
        let msg = err.to_string();
        assert!(msg.contains("cordon") && msg.contains("uncordon") && msg.contains("drain"));
    }

    #[test]
    fn test_unsupported_get_resource() {
        let err = "secrets".parse::<ResourceKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported resource type: secrets");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_annotate_and_label_tokens() {
        assert_eq!(
            tokens(&Invocation::annotate("pods", "web-0", "team=infra", Some("prod"))),
            ["annotate", "pods", "web-0", "team=infra", "-n", "prod"]
        );
        assert_eq!(
            tokens(&Invocation::label("pods", "web-0", "app=web", None)),
            ["label", "pods", "web-0", "app=web"]
        );
    }

    #[test]
    fn test_exec_command_tokens() {
        let command = vec!["env".to_string()];
        let inv = Invocation::exec("web-0", None, &command);
        assert_eq!(tokens(&inv), ["exec", "web-0", "--", "env"]);
    }

    #[test]
    fn test_top_tokens() {
        assert_eq!(
            tokens(&Invocation::top(TopTarget::Pods, Some("prod"))),
            ["top", "pods", "-n", "prod"]
        );
        assert_eq!(
            tokens(&Invocation::top(TopTarget::Nodes, None)),
            ["top", "nodes"]
        );
    }

    #[test]
    fn test_expose_tokens() {
        let inv = Invocation::expose("deployments", "web", 80, None, None);
        assert_eq!(
            tokens(&inv),
            ["expose", "deployments", "web", "--port", "80"]
        );
    }

    #[test]
    fn test_pass_through_type_normalization() {
        assert_eq!(normalize_resource_type("Pod"), "pods");
        assert_eq!(normalize_resource_type("deployments"), "deployments");
    }
}
