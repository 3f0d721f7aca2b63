//! Command parser.
//!
//! ```text
//! request := command WS+ target
//! command := "CASES" | "DEATHS"
//! target  := "TOTAL" | two ASCII letters
//! ```
//!
//! Matching is case-insensitive and anchored at both ends of the trimmed
//! message. Parsing runs in three stages, each with its own failure: length
//! check, grammar match, then mapping the matched command onto
//! [`RequestKind`].

use durcov_core::metric::Metric;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Result};

/// Longest trimmed message (in characters) the parser will look at.
pub const MAX_MESSAGE_LEN: usize = 40;

const TOTAL: &str = "TOTAL";

/// The whole request grammar. Letters match ASCII only; the separator is any
/// Unicode whitespace. Mapping onto [`RequestKind`] happens separately in
/// [`to_request`].
static REQUEST: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^(?i-u:(?P<command>CASES|DEATHS))\s+(?i-u:(?P<target>TOTAL|[A-Z]{2}))$")
    .expect("request grammar compiles")
});

// ─── Parsed request ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
  Cases,
  Deaths,
}

impl RequestKind {
  /// "Cases" are reported as currently active cases.
  pub fn metric(self) -> Metric {
    match self {
      Self::Cases => Metric::Active,
      Self::Deaths => Metric::Deaths,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
  /// The global aggregate.
  Total,
  /// An upper-cased two-letter region code.
  Region(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
  pub kind:   RequestKind,
  pub target: Target,
}

// ─── Stages ──────────────────────────────────────────────────────────────────

/// Parse a raw inbound message.
pub fn parse(raw: &str) -> Result<ParsedRequest> {
  let trimmed = raw.trim();

  let length = trimmed.chars().count();
  if length > MAX_MESSAGE_LEN {
    return Err(Error::MessageTooLong { message: raw.to_owned(), length });
  }

  let caps = REQUEST
    .captures(trimmed)
    .ok_or_else(|| Error::UnmatchedRequest { message: raw.to_owned() })?;

  to_request(
    &caps["command"].to_ascii_uppercase(),
    &caps["target"].to_ascii_uppercase(),
  )
}

/// Map upper-cased tokens onto a typed request.
fn to_request(command: &str, target: &str) -> Result<ParsedRequest> {
  let kind = match command {
    "CASES" => RequestKind::Cases,
    "DEATHS" => RequestKind::Deaths,
    _ => {
      return Err(Error::UnhandledCommand {
        command: command.to_owned(),
        target:  target.to_owned(),
      });
    }
  };

  let target = if target == TOTAL {
    Target::Total
  } else {
    Target::Region(target.to_owned())
  };

  Ok(ParsedRequest { kind, target })
}
