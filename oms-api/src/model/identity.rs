//! Identity of stored entities and of the session that owns them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric id shared by orders and crosses.
pub type OrderId = u64;

/// Numeric id of a recorded execution.
pub type ExecutionId = u64;

/// Opaque handle on the connection an order belongs to.
///
/// `begin_string` is the protocol version tag (e.g. `FIX.4.2`, `FIXT.1.1`)
/// the message factory dispatches on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId {
    begin_string: String,
    sender_comp_id: String,
    target_comp_id: String,
}

impl SessionId {
    pub fn new(
        begin_string: impl Into<String>,
        sender_comp_id: impl Into<String>,
        target_comp_id: impl Into<String>,
    ) -> Self {
        Self {
            begin_string: begin_string.into(),
            sender_comp_id: sender_comp_id.into(),
            target_comp_id: target_comp_id.into(),
        }
    }

    pub fn begin_string(&self) -> &str {
        &self.begin_string
    }

    pub fn sender_comp_id(&self) -> &str {
        &self.sender_comp_id
    }

    pub fn target_comp_id(&self) -> &str {
        &self.target_comp_id
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}->{}",
            self.begin_string, self.sender_comp_id, self.target_comp_id
        )
    }
}
