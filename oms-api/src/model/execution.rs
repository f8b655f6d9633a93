use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::Side;
use super::identity::ExecutionId;

/// Order status reported by the counterparty (tag 39).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionStatus {
    /// Order has been acknowledged by the counterparty.
    New,
    /// Order has been partially filled.
    PartiallyFilled,
    /// Order has been fully filled.
    Filled,
    /// Order has been cancelled.
    Cancelled,
    /// Cancel request acknowledged but not yet applied.
    PendingCancel,
    /// Order has been rejected by the broker or exchange.
    Rejected,
    /// Order has expired.
    Expired,
}

/// A fill or state change reported from outside the core.
///
/// The registry stores these as-is; nothing in here is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// Client order id the report answers.
    #[serde(rename = "clord_id")]
    pub cl_ord_id: String,
    /// Counterparty order id.
    #[serde(default)]
    pub order_id: String,
    /// Counterparty execution id.
    #[serde(default)]
    pub exec_id: String,
    pub symbol: String,
    pub side: Side,
    pub status: ExecutionStatus,
    #[serde(default)]
    pub last_qty: Decimal,
    #[serde(default)]
    pub last_px: Decimal,
    #[serde(default)]
    pub cum_qty: Decimal,
    #[serde(default)]
    pub leaves_qty: Decimal,
    #[serde(default)]
    pub avg_px: Decimal,
    #[serde(default)]
    pub transact_time: Option<DateTime<Utc>>,
    /// Optional rejection reason or free text.
    #[serde(default)]
    pub text: Option<String>,
}

impl ExecutionReport {
    pub fn new(
        cl_ord_id: impl Into<String>,
        symbol: impl Into<String>,
        side: Side,
        status: ExecutionStatus,
    ) -> Self {
        Self {
            cl_ord_id: cl_ord_id.into(),
            order_id: String::new(),
            exec_id: String::new(),
            symbol: symbol.into(),
            side,
            status,
            last_qty: Decimal::ZERO,
            last_px: Decimal::ZERO,
            cum_qty: Decimal::ZERO,
            leaves_qty: Decimal::ZERO,
            avg_px: Decimal::ZERO,
            transact_time: None,
            text: None,
        }
    }

    pub fn with_fill(
        mut self,
        last_qty: Decimal,
        last_px: Decimal,
        cum_qty: Decimal,
        avg_px: Decimal,
    ) -> Self {
        self.last_qty = last_qty;
        self.last_px = last_px;
        self.cum_qty = cum_qty;
        self.avg_px = avg_px;
        self
    }

    pub fn with_leaves(mut self, leaves_qty: Decimal) -> Self {
        self.leaves_qty = leaves_qty;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// An execution report held by the registry under its own id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Execution {
    id: ExecutionId,
    #[serde(flatten)]
    report: ExecutionReport,
}

impl Execution {
    pub fn new(id: ExecutionId, report: ExecutionReport) -> Self {
        Self { id, report }
    }

    pub fn id(&self) -> ExecutionId {
        self.id
    }

    pub fn report(&self) -> &ExecutionReport {
        &self.report
    }
}
