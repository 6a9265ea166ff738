use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde::Deserialize;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{error, info};

use crate::controllers::marker::ports::MarkerSink;
use crate::input::network::errors::ListenerError;
use crate::input::network::http::serve_http;
use crate::input::network::tcp::TcpPositionListener;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListenerProtocol {
    #[default]
    Http,
    Tcp,
}

impl ListenerProtocol {
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Tcp => "tcp",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ListenerSettings {
    pub protocol: ListenerProtocol,
    pub addr: SocketAddr,
    pub read_timeout: Duration,
    pub max_payload_bytes: usize,
}

/// Owns the listener thread and its tokio runtime.
pub struct ListenerHandle {
    local_addr: SocketAddr,
    protocol: ListenerProtocol,
    shutdown: Option<oneshot::Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl ListenerHandle {
    /// Binds the configured address and starts serving on a background thread.
    ///
    /// Binding happens before this returns, so a busy port is reported to
    /// the caller rather than logged from the thread.
    pub fn spawn(
        settings: ListenerSettings,
        sink: Arc<dyn MarkerSink>,
    ) -> Result<Self, ListenerError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ListenerError::Runtime)?;

        let listener = runtime
            .block_on(TcpListener::bind(settings.addr))
            .map_err(|source| ListenerError::Bind {
                addr: settings.addr,
                source,
            })?;
        let local_addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let worker = thread::Builder::new()
            .name("gaze-listener".to_string())
            .spawn(move || {
                let result = runtime.block_on(async move {
                    match settings.protocol {
                        ListenerProtocol::Http => serve_http(listener, sink, shutdown_rx).await,
                        ListenerProtocol::Tcp => {
                            TcpPositionListener::from_listener(
                                listener,
                                settings.read_timeout,
                                settings.max_payload_bytes,
                            )
                            .serve(sink, shutdown_rx)
                            .await
                        }
                    }
                });

                if let Err(err) = result {
                    error!(error = %err, "listener stopped");
                }
            })
            .map_err(ListenerError::Thread)?;

        info!(
            addr = %local_addr,
            protocol = settings.protocol.display_name(),
            "listener started"
        );

        Ok(Self {
            local_addr,
            protocol: settings.protocol,
            shutdown: Some(shutdown_tx),
            worker: Some(worker),
        })
    }

    #[must_use]
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    #[must_use]
    pub fn protocol(&self) -> ListenerProtocol {
        self.protocol
    }

    pub fn shutdown(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
