use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{CrossPrioritization, CrossType, OrdType, PutOrCall, Side};
use super::identity::{OrderId, SessionId};
use super::security::{SecurityDetails, non_empty};
use crate::error::ValidationError;
use crate::normalize;

/// A two-sided cross exactly as the input layer submitted it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossTicket {
    pub cross_type: Option<CrossType>,
    pub cross_prioritization: Option<CrossPrioritization>,
    pub symbol: String,
    pub quantity: String,
    pub session_id: String,
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
    #[serde(rename = "buy_clord_id")]
    pub buy_cl_ord_id: String,
    pub buy_account: String,
    pub buy_designation: String,
    #[serde(rename = "sell_clord_id")]
    pub sell_cl_ord_id: String,
    pub sell_account: String,
    pub sell_designation: String,
    pub sender_sub_id: String,
}

impl CrossTicket {
    /// Converts the textual fields into exact decimals and builds both legs.
    ///
    /// Leg client order ids may be left empty; the registry fills them in.
    pub fn normalize(self, session: SessionId) -> Result<NewCross, ValidationError> {
        let cross_type = self
            .cross_type
            .ok_or(ValidationError::MissingField("cross_type"))?;
        let ord_type = self.ord_type.ok_or(ValidationError::MissingField("ord_type"))?;
        let quantity = normalize::quantity(&self.quantity)?;
        let strike_price = normalize::strike_price(&self.strike_price)?;
        let price = normalize::price(ord_type, &self.price)?;
        let stop_price = normalize::stop_price(ord_type, &self.stop_price)?;

        if !self.buy_cl_ord_id.is_empty() && self.buy_cl_ord_id == self.sell_cl_ord_id {
            return Err(ValidationError::DuplicateLegClOrdId(self.buy_cl_ord_id));
        }

        Ok(NewCross {
            session,
            cross_type,
            cross_prioritization: self.cross_prioritization.unwrap_or_default(),
            symbol: self.symbol,
            ord_type,
            quantity,
            price,
            stop_price,
            exec_inst: non_empty(self.exec_inst),
            sender_sub_id: non_empty(self.sender_sub_id),
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
            buy: CrossLeg {
                side: Side::Buy,
                cl_ord_id: self.buy_cl_ord_id,
                account: non_empty(self.buy_account),
                designation: non_empty(self.buy_designation),
            },
            sell: CrossLeg {
                side: Side::Sell,
                cl_ord_id: self.sell_cl_ord_id,
                account: non_empty(self.sell_account),
                designation: non_empty(self.sell_designation),
            },
        })
    }
}

/// One side of a cross.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossLeg {
    pub side: Side,
    /// Empty until the registry assigns one, unless the submitter chose it.
    #[serde(rename = "clord_id")]
    pub cl_ord_id: String,
    pub account: Option<String>,
    pub designation: Option<String>,
}

impl CrossLeg {
    pub fn buy() -> Self {
        Self::new(Side::Buy)
    }

    pub fn sell() -> Self {
        Self::new(Side::Sell)
    }

    fn new(side: Side) -> Self {
        Self {
            side,
            cl_ord_id: String::new(),
            account: None,
            designation: None,
        }
    }

    pub fn with_cl_ord_id(mut self, cl_ord_id: impl Into<String>) -> Self {
        self.cl_ord_id = cl_ord_id.into();
        self
    }

    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    pub fn with_designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = Some(designation.into());
        self
    }
}

/// A normalized cross that has not been saved yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCross {
    pub session: SessionId,
    pub cross_type: CrossType,
    pub cross_prioritization: CrossPrioritization,
    pub symbol: String,
    pub ord_type: OrdType,
    pub quantity: Decimal,
    pub price: Option<Decimal>,
    pub stop_price: Option<Decimal>,
    pub exec_inst: Option<String>,
    pub sender_sub_id: Option<String>,
    #[serde(flatten)]
    pub security: SecurityDetails,
    pub buy: CrossLeg,
    pub sell: CrossLeg,
}

impl NewCross {
    pub fn new(
        session: SessionId,
        cross_type: CrossType,
        symbol: impl Into<String>,
        ord_type: OrdType,
        quantity: Decimal,
        buy: CrossLeg,
        sell: CrossLeg,
    ) -> Self {
        Self {
            session,
            cross_type,
            cross_prioritization: CrossPrioritization::default(),
            symbol: symbol.into(),
            ord_type,
            quantity,
            price: None,
            stop_price: None,
            exec_inst: None,
            sender_sub_id: None,
            security: SecurityDetails::default(),
            buy,
            sell,
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

    pub fn with_prioritization(mut self, prioritization: CrossPrioritization) -> Self {
        self.cross_prioritization = prioritization;
        self
    }
}

/// A cross held by the registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cross {
    id: OrderId,
    #[serde(rename = "clord_id")]
    cl_ord_id: String,
    #[serde(flatten)]
    details: NewCross,
}

impl Cross {
    pub fn new(id: OrderId, cl_ord_id: impl Into<String>, details: NewCross) -> Self {
        Self {
            id,
            cl_ord_id: cl_ord_id.into(),
            details,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    /// CrossID (tag 548) sent on the wire, derived from the numeric id.
    pub fn cross_id(&self) -> String {
        self.id.to_string()
    }

    pub fn cl_ord_id(&self) -> &str {
        &self.cl_ord_id
    }

    pub fn details(&self) -> &NewCross {
        &self.details
    }

    pub fn session(&self) -> &SessionId {
        &self.details.session
    }

    pub fn symbol(&self) -> &str {
        &self.details.symbol
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

    pub fn buy(&self) -> &CrossLeg {
        &self.details.buy
    }

    pub fn sell(&self) -> &CrossLeg {
        &self.details.sell
    }
}
