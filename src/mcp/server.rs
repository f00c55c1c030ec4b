//! MCP server implementation
//!
//! Reads newline-delimited JSON-RPC requests and serves them
//! concurrently, bounded by a semaphore. Responses go through one
//! writer task that owns the transport.

use crate::core::services::Services;
use crate::mcp::error::McpError;
use crate::mcp::handlers::{create_error_response, error_response, ProtocolHandlers};
use crate::mcp::protocol::*;
use crate::mcp::transport::StdioTransport;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, BufReader};
use tokio::sync::{mpsc, Semaphore};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, error, info, warn};

const RESPONSE_QUEUE: usize = 64;

pub struct McpServer {
    services: Arc<Services>,
    handlers: Arc<ProtocolHandlers>,
    limiter: Arc<Semaphore>,
}

impl McpServer {
    pub fn new(services: Arc<Services>) -> Self {
        let permits = services.config.limits.max_concurrent_queries.max(1);
        Self {
            handlers: Arc::new(ProtocolHandlers::new(Arc::clone(&services))),
            limiter: Arc::new(Semaphore::new(permits)),
            services,
        }
    }

    /// Run the MCP server on stdin/stdout until EOF or Ctrl+C
    pub async fn run(&self) -> Result<(), McpError> {
        info!("Starting docindex MCP server");

        let monitor = spawn_staleness_monitor(Arc::clone(&self.services));
        let result = self
            .serve(tokio::io::stdin(), tokio::io::stdout())
            .await
            .map(|_| ());

        if let Some(monitor) = monitor {
            monitor.abort();
        }

        info!("MCP server shutting down");
        result
    }

    /// Serve requests from `input`, writing responses to `output`
    ///
    /// Returns the writer once every in-flight request has been
    /// answered.
    pub async fn serve<R, W>(&self, input: R, output: W) -> Result<W, McpError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<JsonRpcResponse>(RESPONSE_QUEUE);
        let writer = tokio::spawn(write_responses(StdioTransport::with_writer(output), rx));

        let mut reader = BufReader::new(input).lines();
        let mut tasks = JoinSet::new();

        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                line = reader.next_line() => {
                    match line? {
                        Some(line) if !line.trim().is_empty() => {
                            let permit = Arc::clone(&self.limiter)
                                .acquire_owned()
                                .await
                                .map_err(|e| McpError::InternalError(e.to_string()))?;
                            let handlers = Arc::clone(&self.handlers);
                            let tx = tx.clone();
                            tasks.spawn(async move {
                                let response = process_message(&handlers, &line).await;
                                drop(permit);
                                if tx.send(response).await.is_err() {
                                    warn!("Response writer closed; dropping response");
                                }
                            });
                        }
                        None => break, // EOF
                        _ => continue,
                    }
                }

                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    if let Err(e) = joined {
                        error!("Request task failed: {}", e);
                    }
                }

                _ = &mut shutdown => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        // Drain in-flight requests before closing the writer
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                error!("Request task failed: {}", e);
            }
        }
        drop(tx);

        let transport = writer
            .await
            .map_err(|e| McpError::InternalError(format!("Writer task failed: {e}")))??;
        Ok(transport.into_inner())
    }
}

async fn write_responses<W>(
    mut transport: StdioTransport<W>,
    mut rx: mpsc::Receiver<JsonRpcResponse>,
) -> Result<StdioTransport<W>, McpError>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        transport.send_response(response).await?;
    }
    Ok(transport)
}

async fn process_message(handlers: &ProtocolHandlers, line: &str) -> JsonRpcResponse {
    debug!("Received: {}", line);

    let request: JsonRpcRequest = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => {
            warn!("Unparseable message: {}", e);
            return create_error_response(None, PARSE_ERROR, e.to_string());
        }
    };

    let id = request.id.clone();
    match handlers.dispatch(request).await {
        Ok(response) => response,
        Err(e) => {
            error!("Error processing message: {}", e);
            error_response(id, &e)
        }
    }
}

/// Poll the documentation tree for changes when an interval is configured
///
/// Rebuilds run on the blocking pool and share the cache's refresh
/// lock, so they coalesce with explicit refreshes.
pub fn spawn_staleness_monitor(services: Arc<Services>) -> Option<JoinHandle<()>> {
    let secs = services.config.cache.refresh_interval_sec;
    if secs == 0 {
        return None;
    }

    info!("Checking documentation for changes every {}s", secs);
    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(secs));
        // First tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let cache = Arc::clone(&services.cache);
            match tokio::task::spawn_blocking(move || cache.refresh_if_stale()).await {
                Ok(Ok(Some(outcome))) => info!(
                    "Documentation refreshed to generation {}",
                    outcome.snapshot().generation()
                ),
                Ok(Ok(None)) => debug!("Documentation unchanged"),
                Ok(Err(e)) => warn!("Staleness check failed: {}", e),
                Err(e) => error!("Staleness task failed: {}", e),
            }
        }
    }))
}
