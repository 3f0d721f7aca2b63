//! Core types and trait definitions for the durcov statistics bot.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The feed decoder, the storage backend and the bot all depend on it.

// We intentionally use native `async fn` in traits.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod metric;
pub mod snapshot;
pub mod store;

pub use error::{Error, Result};
