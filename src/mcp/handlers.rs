//! MCP protocol method handlers

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::protocol::*;
use crate::mcp::resources::ResourceProvider;
use crate::mcp::tools::{
    DocsApiHandler, DocsDevelopmentHandler, DocsOverviewHandler, DocsPluginHandler,
    DocsRefreshHandler, DocsSearchHandler, DocsStatusHandler, DocsSubsystemHandler,
    DocsTestingHandler, McpToolHandler, ToolRegistry,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub const SERVER_NAME: &str = "docindex-mcp";

pub struct ProtocolHandlers {
    initialized: AtomicBool,
    tool_registry: ToolRegistry,
    resources: ResourceProvider,
}

impl ProtocolHandlers {
    pub fn new(services: Arc<Services>) -> Self {
        let tools: [Arc<dyn McpToolHandler>; 9] = [
            Arc::new(DocsOverviewHandler::new(Arc::clone(&services))),
            Arc::new(DocsPluginHandler::new(Arc::clone(&services))),
            Arc::new(DocsApiHandler::new(Arc::clone(&services))),
            Arc::new(DocsTestingHandler::new(Arc::clone(&services))),
            Arc::new(DocsSubsystemHandler::new(Arc::clone(&services))),
            Arc::new(DocsDevelopmentHandler::new(Arc::clone(&services))),
            Arc::new(DocsSearchHandler::new(Arc::clone(&services))),
            Arc::new(DocsRefreshHandler::new(Arc::clone(&services))),
            Arc::new(DocsStatusHandler::new(Arc::clone(&services))),
        ];
        let registry: ToolRegistry = tools.into_iter().collect();

        Self {
            initialized: AtomicBool::new(false),
            tool_registry: registry,
            resources: ResourceProvider::new(services),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    /// Route a request to its method handler
    pub async fn dispatch(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request).await,
            "initialized" | "notifications/initialized" => {
                self.handle_initialized(request).await
            }
            "ping" => self.handle_ping(request).await,
            "tools/list" => self.handle_tools_list(request).await,
            "tools/call" => self.handle_tools_call(request).await,
            "resources/list" => self.handle_resources_list(request).await,
            "resources/read" => self.handle_resources_read(request).await,
            _ if request.id.is_none() => {
                // Unknown notification
                Ok(JsonRpcResponse::empty())
            }
            _ => Ok(create_error_response(
                request.id,
                METHOD_NOT_FOUND,
                format!("Unknown method: {}", request.method),
            )),
        }
    }

    /// Handle initialize request
    pub async fn handle_initialize(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: InitializeParams = match request.params {
            Some(params) => serde_json::from_value(params)
                .map_err(|e| McpError::InvalidParams(e.to_string()))?,
            None => InitializeParams::default(),
        };

        match &params.client_info {
            Some(client) => info!("Client initialized: {}", client.name),
            None => info!("Client initialized"),
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
                resources: ResourcesCapability {
                    subscribe: false,
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        Ok(JsonRpcResponse::success(
            request.id,
            serde_json::to_value(result)?,
        ))
    }

    /// Handle initialized notification
    pub async fn handle_initialized(
        &self,
        _request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        self.initialized.store(true, Ordering::SeqCst);
        info!("Server initialized");

        // Initialized is a notification, no response needed
        Ok(JsonRpcResponse::empty())
    }

    /// Handle tools/list request
    pub async fn handle_tools_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let tools = self.tool_registry.list();
        Ok(JsonRpcResponse::success(
            request.id,
            json!({ "tools": tools }),
        ))
    }

    /// Handle tools/call request
    pub async fn handle_tools_call(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params_value = match request.params {
            Some(v) => v,
            None => {
                return Ok(create_error_response(
                    request.id,
                    INVALID_PARAMS,
                    "Missing params".to_string(),
                ));
            }
        };

        let params: ToolCallParams = match serde_json::from_value(params_value) {
            Ok(p) => p,
            Err(e) => {
                return Ok(create_error_response(
                    request.id,
                    INVALID_PARAMS,
                    format!("Invalid params: {e}"),
                ));
            }
        };

        let handler = match self.tool_registry.get(&params.name) {
            Some(h) => h,
            None => {
                return Ok(create_error_response(
                    request.id,
                    INVALID_PARAMS,
                    format!("Tool not found: {}", params.name),
                ));
            }
        };

        match handler.execute(params.arguments).await {
            Ok(result) => Ok(JsonRpcResponse::success(
                request.id,
                serde_json::to_value(result)?,
            )),
            Err(e) => {
                warn!("Tool {} failed: {}", params.name, e);
                Ok(error_response(request.id, &e))
            }
        }
    }

    /// Handle resources/list request
    pub async fn handle_resources_list(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        match self.resources.list() {
            Ok(resources) => Ok(JsonRpcResponse::success(
                request.id,
                json!({ "resources": resources }),
            )),
            Err(e) => {
                Ok(error_response(request.id, &e))
            }
        }
    }

    /// Handle resources/read request
    pub async fn handle_resources_read(
        &self,
        request: JsonRpcRequest,
    ) -> Result<JsonRpcResponse, McpError> {
        let params: ResourceReadParams =
            match request.params.map(serde_json::from_value).transpose() {
                Ok(Some(p)) => p,
                Ok(None) => {
                    return Ok(create_error_response(
                        request.id,
                        INVALID_PARAMS,
                        "Missing params".to_string(),
                    ));
                }
                Err(e) => {
                    return Ok(create_error_response(
                        request.id,
                        INVALID_PARAMS,
                        format!("Invalid params: {e}"),
                    ));
                }
            };

        match self.resources.read(&params.uri) {
            Ok(contents) => Ok(JsonRpcResponse::success(
                request.id,
                json!({ "contents": [contents] }),
            )),
            Err(e) => {
                Ok(error_response(request.id, &e))
            }
        }
    }

    /// Handle ping request
    pub async fn handle_ping(&self, request: JsonRpcRequest) -> Result<JsonRpcResponse, McpError> {
        Ok(JsonRpcResponse::success(request.id, json!({})))
    }
}

/// Create an error response with proper structure
pub fn create_error_response(id: Option<Value>, code: i32, message: String) -> JsonRpcResponse {
    JsonRpcResponse::error(id, code, message)
}

/// Error response for a failed handler, with structured `data` when
/// the failure came from the documentation index
pub fn error_response(id: Option<Value>, err: &McpError) -> JsonRpcResponse {
    let (code, message) = err.code_and_message();
    JsonRpcResponse::error_with_data(id, code, message, err.data())
}
