//! HTTP variant: `GET /?x=<float>&y=<float>`.

use std::sync::Arc;

use axum::Router;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::info;

use crate::controllers::marker::ports::MarkerSink;
use crate::input::network::errors::ListenerError;
use crate::input::network::payload::parse_pairs;
use crate::input::network::reply::{Reply, process_position};

pub fn router(sink: Arc<dyn MarkerSink>) -> Router {
    Router::new()
        .route("/", get(update_position))
        .with_state(sink)
}

/// The query is form-urlencoded, so keys and values are percent-decoded
/// before they reach the coordinate parser.
async fn update_position(
    State(sink): State<Arc<dyn MarkerSink>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Reply {
    match query {
        Ok(Query(pairs)) => process_position(sink.as_ref(), parse_pairs(pairs)),
        Err(rejection) => Reply::failed(sink.as_ref(), rejection.body_text()),
    }
}

/// Serves the router until `shutdown` fires or its sender is dropped.
pub async fn serve_http(
    listener: TcpListener,
    sink: Arc<dyn MarkerSink>,
    shutdown: oneshot::Receiver<()>,
) -> Result<(), ListenerError> {
    info!(addr = %listener.local_addr()?, "http listener ready");

    axum::serve(listener, router(sink))
        .with_graceful_shutdown(async move {
            let _ = shutdown.await;
            info!("http listener shutting down");
        })
        .await?;

    Ok(())
}
