//! Raw TCP variant: one read, one reply, close.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

use crate::controllers::marker::ports::MarkerSink;
use crate::input::network::errors::ListenerError;
use crate::input::network::reply::{Reply, process_payload};

const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

pub struct TcpPositionListener {
    listener: TcpListener,
    read_timeout: Duration,
    max_payload_bytes: usize,
}

impl TcpPositionListener {
    #[must_use]
    pub fn from_listener(
        listener: TcpListener,
        read_timeout: Duration,
        max_payload_bytes: usize,
    ) -> Self {
        Self {
            listener,
            read_timeout,
            max_payload_bytes,
        }
    }

    pub fn local_addr(&self) -> Result<SocketAddr, ListenerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections one at a time until `shutdown` fires or its sender is dropped.
    ///
    /// A client is served completely before the next one is accepted; the
    /// read timeout bounds how long a silent client can hold the loop.
    pub async fn serve(
        self,
        sink: Arc<dyn MarkerSink>,
        mut shutdown: oneshot::Receiver<()>,
    ) -> Result<(), ListenerError> {
        info!(addr = %self.local_addr()?, "tcp listener ready");

        loop {
            let (stream, peer) = tokio::select! {
                _ = &mut shutdown => {
                    info!("tcp listener shutting down");
                    return Ok(());
                }
                accepted = self.listener.accept() => match accepted {
                    Ok(accepted) => accepted,
                    Err(err) => {
                        error!(error = %err, "failed to accept connection");
                        tokio::time::sleep(ACCEPT_BACKOFF).await;
                        continue;
                    }
                },
            };

            debug!(peer = %peer, "connection accepted");

            if let Err(err) = self.handle_connection(stream, sink.as_ref()).await {
                warn!(peer = %peer, error = %err, "connection closed with error");
            }
        }
    }

    async fn handle_connection(
        &self,
        mut stream: TcpStream,
        sink: &dyn MarkerSink,
    ) -> std::io::Result<()> {
        let mut buffer = vec![0u8; self.max_payload_bytes];

        let reply = match tokio::time::timeout(self.read_timeout, stream.read(&mut buffer)).await {
            Ok(Ok(read)) => process_payload(sink, &buffer[..read]),
            Ok(Err(err)) => Reply::failed(sink, format!("failed to read payload: {err}")),
            Err(_) => Reply::failed(
                sink,
                format!("no payload received within {} ms", self.read_timeout.as_millis()),
            ),
        };

        stream.write_all(reply.text().as_bytes()).await?;
        stream.shutdown().await
    }
}
