//! Diagnostic records for failed requests.
//!
//! The user only ever sees [`crate::Error::reply`]; the operator gets the
//! underlying error plus numbered context lines through `tracing`.

use std::fmt;

use crate::{Error, ErrorClass};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
  pub class:   ErrorClass,
  pub error:   String,
  pub context: Vec<String>,
}

impl Diagnostic {
  /// Build the record for `err` raised while answering `request`.
  pub fn new(request: &str, err: &Error) -> Self {
    let mut context = vec![format!("Request message: {request}")];
    context.extend(err.context());
    Self { class: err.class(), error: err.to_string(), context }
  }

  /// Log the record at a level matching its class.
  pub fn emit(&self) {
    match self.class {
      ErrorClass::InputRejection => tracing::debug!(class = ?self.class, "{}", self),
      ErrorClass::DomainAbsence => tracing::info!(class = ?self.class, "{}", self),
      ErrorClass::Infrastructure => tracing::warn!(class = ?self.class, "{}", self),
      ErrorClass::LogicDrift => tracing::error!(class = ?self.class, "{}", self),
    }
  }
}

impl fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Error: {}\nContext:", self.error)?;
    for (i, line) in self.context.iter().enumerate() {
      write!(f, "\n{i}) {line}")?;
    }
    Ok(())
  }
}
