//! Bot error taxonomy and the user-facing sentence for each failure.

use durcov_core::Error as ViewError;
use thiserror::Error;

pub const TOO_LONG_REPLY: &str = "Sorry, that message is too long for me.";
pub const UNMATCHED_REPLY: &str = "Sorry, I'm not sure how to respond to that.";
pub const CONFUSED_REPLY: &str = "Oops, I've got myself confused :(";
pub const NO_REGION_REPLY: &str = "Sorry, that code doesn't match any countries I know.";
pub const NO_RESULTS_REPLY: &str = "Sorry, I don't have the results right now.";

#[derive(Debug, Error)]
pub enum Error {
  #[error("request message too long: {length} characters")]
  MessageTooLong { message: String, length: usize },

  #[error("unmatched request message")]
  UnmatchedRequest { message: String },

  /// The grammar accepted a command the mapping table does not know.
  #[error("unhandled command {command:?}")]
  UnhandledCommand { command: String, target: String },

  #[error(transparent)]
  View(#[from] ViewError),
}

/// How seriously a failure should be taken by whoever reads the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
  /// User-caused and expected.
  InputRejection,
  /// Unknown region code; expected.
  DomainAbsence,
  /// Grammar and mapping disagree. A bug.
  LogicDrift,
  /// The store could not answer.
  Infrastructure,
}

impl Error {
  pub fn class(&self) -> ErrorClass {
    match self {
      Self::MessageTooLong { .. } | Self::UnmatchedRequest { .. } => {
        ErrorClass::InputRejection
      }
      Self::UnhandledCommand { .. } => ErrorClass::LogicDrift,
      Self::View(ViewError::NoRegionMatched { .. }) => ErrorClass::DomainAbsence,
      Self::View(ViewError::UnsupportedMetric(_) | ViewError::ReservedRegionCode(_)) => {
        ErrorClass::LogicDrift
      }
      Self::View(ViewError::Storage(_) | ViewError::Overflow(_)) => ErrorClass::Infrastructure,
    }
  }

  /// The sentence shown to the user in place of an answer.
  pub fn reply(&self) -> &'static str {
    match self {
      Self::MessageTooLong { .. } => TOO_LONG_REPLY,
      Self::UnmatchedRequest { .. } => UNMATCHED_REPLY,
      Self::View(ViewError::NoRegionMatched { .. }) => NO_REGION_REPLY,
      Self::View(ViewError::Storage(_) | ViewError::Overflow(_)) => NO_RESULTS_REPLY,
      Self::UnhandledCommand { .. }
      | Self::View(ViewError::UnsupportedMetric(_) | ViewError::ReservedRegionCode(_)) => {
        CONFUSED_REPLY
      }
    }
  }

  /// Extra lines for the diagnostic record.
  pub fn context(&self) -> Vec<String> {
    match self {
      Self::MessageTooLong { message, .. } => vec![format!("Message too long: {message}")],
      Self::UnmatchedRequest { message } => vec![format!("Unmatchable message: {message}")],
      Self::UnhandledCommand { command, target } => vec![
        format!("Unhandled command: {command}"),
        format!("Code in request: {target}"),
      ],
      Self::View(ViewError::NoRegionMatched { attempted_code }) => {
        vec![format!("Attempted code: {attempted_code}")]
      }
      Self::View(ViewError::UnsupportedMetric(metric)) => {
        vec![format!("Requested metric: {metric:?}")]
      }
      Self::View(ViewError::Overflow(metric)) => vec![format!("Overflowing metric: {metric:?}")],
      Self::View(_) => Vec::new(),
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
