use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{OrdType, PutOrCall, Side};
use super::identity::{OrderId, SessionId};
use super::security::{SecurityDetails, non_empty};
use crate::error::ValidationError;
use crate::normalize;

/// A single-sided order exactly as the input layer submitted it.
///
/// Quantity and prices are still text; nothing has been validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderTicket {
    pub symbol: String,
    pub quantity: String,
    pub account: String,
    /// Name of the configured session the order is routed through.
    pub session_id: String,
    pub side: Option<Side>,
    pub ord_type: Option<OrdType>,
    pub price: String,
    pub stop_price: String,
    pub security_type: String,
    pub security_id: String,
    pub security_id_source: String,
    pub security_desc: String,
    pub exec_inst: String,
    pub maturity_month_year: String,
    pub maturity_day: Option<u32>,
    pub put_or_call: Option<PutOrCall>,
    pub strike_price: String,
}

impl OrderTicket {
    /// Converts the textual fields into exact decimals.
    ///
    /// # Arguments
    ///
    /// * `session` - The session resolved from `session_id`.
    ///
    /// # Returns
    ///
    /// * `Ok(NewOrder)` ready to be saved.
    /// * `Err(ValidationError)` naming the first field that failed.
    pub fn normalize(self, session: SessionId) -> Result<NewOrder, ValidationError> {
        let side = self.side.ok_or(ValidationError::MissingField("side"))?;
        let ord_type = self.ord_type.ok_or(ValidationError::MissingField("ord_type"))?;
        let quantity = normalize::quantity(&self.quantity)?;
        let price = normalize::price(ord_type, &self.price)?;
        let stop_price = normalize::stop_price(ord_type, &self.stop_price)?;
        let strike_price = normalize::strike_price(&self.strike_price)?;

        Ok(NewOrder {
            session,
            symbol: self.symbol,
            side,
            ord_type,
            quantity,
            price,
            stop_price,
            account: non_empty(self.account),
            exec_inst: non_empty(self.exec_inst),
            security: SecurityDetails {
                security_type: non_empty(self.security_type),
                security_id: non_empty(self.security_id),
                security_id_source: non_empty(self.security_id_source),
                security_desc: non_empty(self.security_desc),
                maturity_month_year: non_empty(self.maturity_month_year),
                maturity_day: self.maturity_day,
                put_or_call: self.put_or_call,
                strike_price,
            },
        })
    }
}

/// A normalized order that has not been saved yet.
///
/// `price` is `Some` exactly when the order type needs a limit price and
/// `stop_price` exactly when it needs a stop price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub session: SessionId,
    pub symbol: String,
    pub side: Side,
    pub ord_type: OrdType,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub stop_price: Option<Decimal>,
    pub account: Option<String>,
    pub exec_inst: Option<String>,
    #[serde(flatten)]
    pub security: SecurityDetails,
}

impl NewOrder {
    pub fn new(
        session: SessionId,
        symbol: impl Into<String>,
        side: Side,
        ord_type: OrdType,
        quantity: Decimal,
    ) -> Self {
        Self {
            session,
            symbol: symbol.into(),
            side,
            ord_type,
            quantity,
            price: None,
            stop_price: None,
            account: None,
            exec_inst: None,
            security: SecurityDetails::default(),
        }
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_stop_price(mut self, stop_price: Decimal) -> Self {
        self.stop_price = Some(stop_price);
        self
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn with_exec_inst(mut self, exec_inst: impl Into<String>) -> Self {
        self.exec_inst = Some(exec_inst.into());
        self
    }

    pub fn with_security(mut self, security: SecurityDetails) -> Self {
        self.security = security;
        self
    }
}

/// An order held by the registry.
///
/// The numeric id and client order id are bound once, at save time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    #[serde(rename = "clord_id")]
    cl_ord_id: String,
    #[serde(flatten)]
    details: NewOrder,
}

impl Order {
    pub fn new(id: OrderId, cl_ord_id: impl Into<String>, details: NewOrder) -> Self {
        Self {
            id,
            cl_ord_id: cl_ord_id.into(),
            details,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn cl_ord_id(&self) -> &str {
        &self.cl_ord_id
    }

    pub fn details(&self) -> &NewOrder {
        &self.details
    }

    pub fn session(&self) -> &SessionId {
        &self.details.session
    }

    pub fn symbol(&self) -> &str {
        &self.details.symbol
    }

    pub fn side(&self) -> Side {
        self.details.side
    }

    pub fn ord_type(&self) -> OrdType {
        self.details.ord_type
    }

    pub fn quantity(&self) -> Decimal {
        self.details.quantity
    }

    pub fn price(&self) -> Option<Decimal> {
        self.details.price
    }

    pub fn stop_price(&self) -> Option<Decimal> {
        self.details.stop_price
    }

    pub fn account(&self) -> Option<&str> {
        self.details.account.as_deref()
    }

    pub fn exec_inst(&self) -> Option<&str> {
        self.details.exec_inst.as_deref()
    }

    pub fn security(&self) -> &SecurityDetails {
        &self.details.security
    }
}
