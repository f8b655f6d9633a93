//! Entities the order-state core tracks.
//!
//! Each entity comes in up to three shapes: a raw *ticket* from the input
//! layer (textual quantities and prices), a normalized *new* value, and the
//! saved entity that carries its registry-assigned identifiers.
//!
//! # Submodules
//! - [`order`]: Single-sided orders.
//! - [`cross`]: Two-sided crosses and their legs.
//! - [`execution`]: Execution reports recorded by the registry.

pub mod cross;
pub mod enums;
pub mod execution;
pub mod identity;
pub mod order;
pub mod security;

pub use cross::{Cross, CrossLeg, CrossTicket, NewCross};
pub use enums::{CrossPrioritization, CrossType, OrdType, PutOrCall, Side};
pub use execution::{Execution, ExecutionReport, ExecutionStatus};
pub use identity::{ExecutionId, OrderId, SessionId};
pub use order::{NewOrder, Order, OrderTicket};
pub use security::{SecurityDefinitionRequest, SecurityDetails};
