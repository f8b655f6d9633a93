//! # Order-State API
//!
//! Types shared between the order registry, the message factory, and the
//! layers that feed them.
//!
//! ## Modules
//! - `model`: Orders, crosses, executions and their enumerations.
//! - `normalize`: Decimal normalization of textual quantities and prices.
//! - `traits`: The seams the core plugs strategies into.
//! - `error`: The error taxonomy shared by every component.

pub mod error;
pub mod model;
pub mod normalize;
pub mod traits;

pub use error::{OmsError, Result, ValidationError};
pub use model::{
    Cross, CrossLeg, CrossPrioritization, CrossTicket, CrossType, Execution, ExecutionId,
    ExecutionReport, ExecutionStatus, NewCross, NewOrder, OrdType, Order, OrderId, OrderTicket,
    PutOrCall, SecurityDefinitionRequest, SecurityDetails, SessionId, Side,
};
pub use traits::clord_id::ClOrdIdGenerator;
pub use traits::message_factory::MessageFactory;

pub mod prelude {
    pub use crate::model::*;
    pub use crate::traits::clord_id::ClOrdIdGenerator;
    pub use crate::traits::message_factory::MessageFactory;
    pub use crate::{OmsError, Result};
}
