//! Builds version-specific outbound messages from saved orders and crosses.
//!
//! Each build runs in three steps:
//! 1. resolve the session's BeginString to a [`ProtocolVersion`] and run that
//!    version's builder, which sets the fields the version makes mandatory
//!    plus the optional fields it knows about;
//! 2. apply the order-type price rules and the account, once, for every
//!    version;
//! 3. check the result against the [`dictionary`](super::dictionary).
//!
//! Any failure returns an error and no message.

mod cancel;
mod cross;
mod new_order;
mod populate;

use chrono::{DateTime, Utc};
use log::debug;
use oms::{Cross, MessageFactory, OmsError, Order, Result, SecurityDefinitionRequest};

use super::dictionary;
use super::message::{Message, MsgType};
use super::version::ProtocolVersion;

pub const DEFAULT_QUANTITY_SCALE: u32 = 0;
pub const DEFAULT_PRICE_SCALE: u32 = 2;

/// Stateless message factory. Safe to share between threads.
#[derive(Debug, Clone)]
pub struct FixFactory {
    quantity_scale: u32,
    price_scale: u32,
    clock: fn() -> DateTime<Utc>,
}

impl Default for FixFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl FixFactory {
    pub fn new() -> Self {
        Self {
            quantity_scale: DEFAULT_QUANTITY_SCALE,
            price_scale: DEFAULT_PRICE_SCALE,
            clock: Utc::now,
        }
    }

    /// Overrides the number of decimals written for quantities and prices.
    pub fn with_scales(mut self, quantity_scale: u32, price_scale: u32) -> Self {
        self.quantity_scale = quantity_scale;
        self.price_scale = price_scale;
        self
    }

    /// Overrides the source of TransactTime.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn quantity_scale(&self) -> u32 {
        self.quantity_scale
    }

    pub fn price_scale(&self) -> u32 {
        self.price_scale
    }

    /// Resolves `begin_string` and checks that `msg_type` can be built for it.
    ///
    /// Lets callers refuse a request before touching the registry.
    pub fn supported_version(msg_type: MsgType, begin_string: &str) -> Result<ProtocolVersion> {
        let version = ProtocolVersion::resolve(msg_type.name(), begin_string)?;
        match dictionary::required_fields(version, msg_type) {
            Some(_) => Ok(version),
            None => Err(OmsError::unsupported(msg_type.name(), begin_string)),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    fn finish(msg: Message) -> Result<Message> {
        dictionary::validate(&msg)?;
        debug!("Built {} {}: {}", msg.version(), msg.msg_type().name(), msg);
        Ok(msg)
    }
}

impl MessageFactory for FixFactory {
    type Message = Message;

    fn new_order_single(&self, order: &Order) -> Result<Message> {
        let version =
            ProtocolVersion::resolve("NewOrderSingle", order.session().begin_string())?;

        let mut msg = match version {
            ProtocolVersion::Fix40 => new_order::nos40(self, order),
            ProtocolVersion::Fix41 => new_order::nos41(self, order),
            ProtocolVersion::Fix42 => new_order::nos42(self, order),
            ProtocolVersion::Fix43 => new_order::nos43(self, order),
            ProtocolVersion::Fix44 => new_order::nos44(self, order),
            ProtocolVersion::Fixt11 => new_order::nos50(self, order),
        };
        populate::prices(
            &mut msg.body,
            order.ord_type(),
            order.price(),
            order.stop_price(),
            self.price_scale,
        )?;
        msg.body.set_optional(super::tag::ACCOUNT, order.account());

        Self::finish(msg)
    }

    fn new_order_cross(&self, cross: &Cross) -> Result<Message> {
        let version =
            ProtocolVersion::resolve("NewOrderCross", cross.session().begin_string())?;

        let mut msg = match version {
            ProtocolVersion::Fixt11 => cross::cross50(self, cross),
            other => {
                return Err(OmsError::unsupported("NewOrderCross", other.begin_string()));
            }
        };
        populate::prices(
            &mut msg.body,
            cross.ord_type(),
            cross.price(),
            cross.stop_price(),
            self.price_scale,
        )?;

        Self::finish(msg)
    }

    fn order_cancel_request(&self, order: &Order, cl_ord_id: &str) -> Result<Message> {
        let version =
            ProtocolVersion::resolve("OrderCancelRequest", order.session().begin_string())?;

        let msg = match version {
            ProtocolVersion::Fix42 => cancel::cxl42(self, order, cl_ord_id),
            other => {
                return Err(OmsError::unsupported(
                    "OrderCancelRequest",
                    other.begin_string(),
                ));
            }
        };

        Self::finish(msg)
    }

    fn security_definition_request(
        &self,
        _request: &SecurityDefinitionRequest,
    ) -> Result<Message> {
        Err(OmsError::Unimplemented("SecurityDefinitionRequest"))
    }
}
