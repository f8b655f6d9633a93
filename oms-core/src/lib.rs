//! # Order-State Core
//!
//! The stateful half of the order management system.
//!
//! ## Modules
//! - `registry`: Thread-safe store of orders, crosses and executions.
//! - `clord_id`: Client order id generation strategies.
//! - `fix`: Per-version outbound message construction and validation.

pub mod clord_id;
pub mod fix;
pub mod registry;

pub use clord_id::{SequenceClOrdIdGenerator, UuidClOrdIdGenerator};
pub use fix::{FixFactory, Message, ProtocolVersion};
pub use registry::OrderManager;
