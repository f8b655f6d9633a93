//! # Order Gateway
//!
//! Feeds batches of JSON requests through the order registry and the
//! message factory.
//!
//! ## Modules
//! - `config`: Layered settings (files, then environment).
//! - `gateway`: Per-request processing and batch runs.
//! - `io`: Command line arguments and request loading.

pub mod config;
pub mod gateway;
pub mod io;

pub use config::Settings;
pub use gateway::{Gateway, Outcome, Request, Summary};
