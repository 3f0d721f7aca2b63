//! [`Responder`] — turns an inbound message into the reply text.

use durcov_core::store::MetricView;

use crate::{
  Diagnostic, Result,
  format::group_thousands,
  parse::{Target, parse},
};

/// Answers messages from a [`MetricView`]. Holds no state of its own, so a
/// single instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Responder<V> {
  view: V,
}

impl<V: MetricView> Responder<V> {
  pub fn new(view: V) -> Self { Self { view } }

  /// Reply to `message`. Never fails: any error becomes a user-safe sentence
  /// and a logged [`Diagnostic`].
  pub async fn respond(&self, message: &str) -> String {
    match self.answer(message).await {
      Ok(reply) => reply,
      Err(err) => {
        Diagnostic::new(message, &err).emit();
        err.reply().to_owned()
      }
    }
  }

  async fn answer(&self, message: &str) -> Result<String> {
    let request = parse(message)?;
    let metric = request.kind.metric();
    tracing::debug!(?request, ?metric, "parsed request");

    let reply = match request.target {
      Target::Total => {
        let value = self.view.global_metric(metric).await?;
        format!("Total {}: {}", metric.label(), group_thousands(value))
      }
      Target::Region(code) => {
        let (name, value) = self.view.region_metric(&code, metric).await?;
        format!("[{code}] {name} {}: {}", metric.label(), group_thousands(value))
      }
    };
    Ok(reply)
  }
}
