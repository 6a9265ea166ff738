use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    #[error("failed to start listener runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to spawn listener thread: {0}")]
    Thread(#[source] std::io::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("listener I/O error: {0}")]
    Io(#[from] std::io::Error),
}
