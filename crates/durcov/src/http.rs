//! Plain-text HTTP surface.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/message` | Body: the message text. Reply: the answer text. |
//! | `GET`  | `/health`  | Always `ok`. |
//!
//! Provider-specific webhook envelopes and signature checks belong to
//! whatever sits in front of this router.

use std::sync::Arc;

use axum::{
  Router,
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::{get, post},
};
use bytes::Bytes;
use durcov_bot::Responder;
use durcov_core::store::MetricView;
use tower_http::trace::TraceLayer;

/// Shared state threaded through the handlers.
pub struct AppState<V> {
  pub responder: Arc<Responder<V>>,
}

impl<V> AppState<V> {
  pub fn new(view: V) -> Self
  where
    V: MetricView,
  {
    Self { responder: Arc::new(Responder::new(view)) }
  }
}

impl<V> Clone for AppState<V> {
  fn clone(&self) -> Self { Self { responder: Arc::clone(&self.responder) } }
}

/// Build the router for `state`.
pub fn router<V>(state: AppState<V>) -> Router
where
  V: MetricView + 'static,
{
  Router::new()
    .route("/message", post(message::<V>))
    .route("/health", get(health))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

async fn message<V>(State(state): State<AppState<V>>, body: Bytes) -> Response
where
  V: MetricView + 'static,
{
  match std::str::from_utf8(&body) {
    Ok(text) => state.responder.respond(text).await.into_response(),
    Err(_) => (StatusCode::BAD_REQUEST, "body is not valid UTF-8").into_response(),
  }
}

async fn health() -> &'static str { "ok" }
