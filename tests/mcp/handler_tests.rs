//! Protocol handler tests against a scanned documentation tree

#[cfg(test)]
mod tests {
    use crate::common::{start_services, tool_text, DocTree};
    use docindex::mcp::handlers::ProtocolHandlers;
    use docindex::mcp::protocol::*;
    use docindex::mcp::tools::{DocsPluginHandler, DocsSubsystemHandler, McpToolHandler};
    use serde_json::{json, Value};

    fn call(id: i64, name: &str, arguments: Value) -> JsonRpcRequest {
        JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(id)),
            method: "tools/call".to_string(),
            params: Some(json!({"name": name, "arguments": arguments})),
        }
    }

    fn result_text(response: &JsonRpcResponse) -> String {
        response.result.as_ref().unwrap()["content"][0]["text"]
            .as_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_plugin_backup_via_tools_call() {
        let tree = DocTree::middleware();
        let handlers = ProtocolHandlers::new(start_services(tree.path()));

        let response = handlers
            .dispatch(call(1, "docs_plugin", json!({"plugin_name": "backup"})))
            .await
            .unwrap();
        assert!(result_text(&response).contains("BackupService"));
    }

    #[tokio::test]
    async fn test_subsystem_miss_is_tool_error_with_suggestions() {
        let tree = DocTree::middleware();
        let handlers = ProtocolHandlers::new(start_services(tree.path()));

        let response = handlers
            .dispatch(call(2, "docs_subsystem", json!({"subsystem": "nonexistent"})))
            .await
            .unwrap();

        assert!(response.error.is_none());
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("- `account`\n- `alert`"));

        let detail: Value =
            serde_json::from_str(result["content"][1]["text"].as_str().unwrap()).unwrap();
        assert_eq!(detail["kind"], "not_found");
        assert_eq!(detail["requested_key"], "nonexistent");
        assert_eq!(detail["available_keys"], json!(["account", "alert"]));
    }

    #[tokio::test]
    async fn test_resource_miss_carries_error_data() {
        let tree = DocTree::middleware();
        let handlers = ProtocolHandlers::new(start_services(tree.path()));

        let response = handlers
            .dispatch(JsonRpcRequest {
                jsonrpc: "2.0".to_string(),
                id: Some(json!(10)),
                method: "resources/read".to_string(),
                params: Some(json!({"uri": "docs://plugin/nfs"})),
            })
            .await
            .unwrap();

        let error = response.error.unwrap();
        assert_eq!(error.code, DOC_NOT_FOUND);
        let data = error.data.unwrap();
        assert_eq!(data["kind"], "not_found");
        assert_eq!(data["requested_key"], "nfs");
        assert_eq!(data["available_keys"], json!(["backup", "pool", "smb"]));
    }

    #[tokio::test]
    async fn test_empty_search_is_tool_error() {
        let tree = DocTree::middleware();
        let handlers = ProtocolHandlers::new(start_services(tree.path()));

        let response = handlers
            .dispatch(call(3, "docs_search", json!({"query": ""})))
            .await
            .unwrap();
        assert_eq!(response.result.unwrap()["isError"], true);
    }

    #[tokio::test]
    async fn test_search_results_render_uris() {
        let tree = DocTree::middleware();
        let handlers = ProtocolHandlers::new(start_services(tree.path()));

        let response = handlers
            .dispatch(call(4, "docs_search", json!({"query": "pool scrub", "limit": 5})))
            .await
            .unwrap();
        let text = result_text(&response);
        assert!(text.contains("`docs://plugin/pool`"));
    }

    #[tokio::test]
    async fn test_resources_round_trip() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());
        let handlers = ProtocolHandlers::new(services.clone());

        let list = handlers
            .dispatch(JsonRpcRequest {
                jsonrpc: "2.0".to_string(),
                id: Some(json!(5)),
                method: "resources/list".to_string(),
                params: None,
            })
            .await
            .unwrap();
        let resources = list.result.unwrap()["resources"].as_array().unwrap().clone();
        assert_eq!(resources.len(), 10);

        for resource in resources {
            let uri = resource["uri"].as_str().unwrap();
            let read = handlers
                .dispatch(JsonRpcRequest {
                    jsonrpc: "2.0".to_string(),
                    id: Some(json!(6)),
                    method: "resources/read".to_string(),
                    params: Some(json!({"uri": uri})),
                })
                .await
                .unwrap();
            let contents = &read.result.unwrap()["contents"][0];
            assert_eq!(contents["uri"], uri);
            assert!(!contents["text"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_resource_and_tool_agree() {
        let tree = DocTree::middleware();
        let services = start_services(tree.path());
        let handlers = ProtocolHandlers::new(services.clone());

        let tool = DocsPluginHandler::new(services.clone())
            .execute(json!({"plugin_name": "smb", "topic": "shares"}))
            .await
            .unwrap();

        let read = handlers
            .dispatch(JsonRpcRequest {
                jsonrpc: "2.0".to_string(),
                id: Some(json!(7)),
                method: "resources/read".to_string(),
                params: Some(json!({"uri": "docs://plugin/smb/shares"})),
            })
            .await
            .unwrap();

        assert_eq!(
            read.result.unwrap()["contents"][0]["text"].as_str().unwrap(),
            tool_text(&tool)
        );
    }

    #[tokio::test]
    async fn test_refresh_then_status() {
        let tree = DocTree::middleware();
        let handlers = ProtocolHandlers::new(start_services(tree.path()));

        tree.write("src/middlewared/subsystems/vm/CLAUDE.md", "# VM\n");
        let refresh = handlers
            .dispatch(call(8, "docs_refresh", json!({})))
            .await
            .unwrap();
        assert!(result_text(&refresh).contains("**Generation:** 2"));

        let status = handlers
            .dispatch(call(9, "docs_status", json!({})))
            .await
            .unwrap();
        let text = result_text(&status);
        assert!(text.contains("**Generation:** 2"));
        assert!(text.contains("- Subsystems: 3"));
    }

    #[tokio::test]
    async fn test_subsystem_schema_requires_name() {
        let tree = DocTree::middleware();
        let handler = DocsSubsystemHandler::new(start_services(tree.path()));

        let schema = handler.schema();
        assert_eq!(schema.input_schema["required"][0], "subsystem");
    }
}
