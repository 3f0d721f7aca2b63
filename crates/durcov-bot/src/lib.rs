//! Conversational surface for durcov.
//!
//! Parses short commands such as `CASES US` or `DEATHS TOTAL`, answers them
//! from any [`durcov_core::store::MetricView`], and turns every failure into
//! a user-safe sentence. Transport (webhooks, message delivery) is the
//! caller's responsibility.
//!
//! ```rust,ignore
//! let responder = durcov_bot::Responder::new(store);
//! let reply = responder.respond("cases af").await;
//! ```

mod diagnostic;
mod format;

pub mod error;
pub mod parse;
pub mod respond;

pub use diagnostic::Diagnostic;
pub use error::{Error, ErrorClass, Result};
pub use format::group_thousands;
pub use parse::{MAX_MESSAGE_LEN, ParsedRequest, RequestKind, Target, parse};
pub use respond::Responder;
