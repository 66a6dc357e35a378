//! Server lifecycle: bind, serve, graceful shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::site::router::build_router;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("No free port in range {start}..={end}")]
    NoFreePort { start: u16, end: u16 },

    #[error("Server was not bound before run()")]
    NotBound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct SiteServer {
    config: Arc<Config>,
    /// The bound listener, kept alive between try_bind() and run() so
    /// another process cannot claim the port in between.
    listener: Option<TcpListener>,
}

impl SiteServer {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            listener: None,
        }
    }

    /// Bind the configured address, scanning upward when the port is busy.
    /// Returns the address actually bound.
    pub async fn try_bind(&mut self) -> Result<SocketAddr, ServerError> {
        let addr_str = &self.config.server.bind_addr;
        let bind_addr: SocketAddr =
            addr_str
                .parse()
                .map_err(|source| ServerError::InvalidBindAddr {
                    addr: addr_str.clone(),
                    source,
                })?;

        let start_port = bind_addr.port();
        let end_port = start_port.saturating_add(100);
        for port in start_port..=end_port {
            let candidate = SocketAddr::new(bind_addr.ip(), port);
            match TcpListener::bind(candidate).await {
                Ok(listener) => {
                    let addr = listener.local_addr()?;
                    self.listener = Some(listener);
                    return Ok(addr);
                }
                Err(err) => {
                    warn!(%candidate, %err, "bind failed, trying next port");
                }
            }
        }
        Err(ServerError::NoFreePort {
            start: start_port,
            end: end_port,
        })
    }

    /// Serve until the shutdown handle fires.
    pub async fn run(mut self, shutdown: ShutdownHandle) -> Result<(), ServerError> {
        let listener = self.listener.take().ok_or(ServerError::NotBound)?;
        let router = build_router(Arc::clone(&self.config));
        axum::serve(listener, router)
            .with_graceful_shutdown(async move { shutdown.wait().await })
            .await?;
        info!("site server stopped");
        Ok(())
    }
}
