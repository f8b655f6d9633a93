//! NewOrderSingle builders, one per protocol version.
//!
//! Each builder first sets the fields its version requires, then the
//! remaining fields the version carries. Price, StopPx and Account are
//! applied by the caller.

use oms::Order;

use super::populate::{self, HANDL_INST_AUTOMATED};
use super::FixFactory;
use crate::fix::message::{Message, MsgType};
use crate::fix::tag;
use crate::fix::version::ProtocolVersion;

fn start(version: ProtocolVersion) -> Message {
    Message::new(version, MsgType::NewOrderSingle)
}

pub(super) fn nos40(factory: &FixFactory, order: &Order) -> Message {
    let mut msg = start(ProtocolVersion::Fix40);
    msg.body
        .set(tag::CL_ORD_ID, order.cl_ord_id())
        .set_char(tag::HANDL_INST, HANDL_INST_AUTOMATED)
        .set(tag::SYMBOL, order.symbol())
        .set_char(tag::SIDE, order.side().fix_value())
        .set_decimal(tag::ORDER_QTY, order.quantity(), factory.quantity_scale)
        .set_char(tag::ORD_TYPE, order.ord_type().fix_value());
    msg
}

pub(super) fn nos41(factory: &FixFactory, order: &Order) -> Message {
    let mut msg = start(ProtocolVersion::Fix41);
    msg.body
        .set(tag::CL_ORD_ID, order.cl_ord_id())
        .set_char(tag::HANDL_INST, HANDL_INST_AUTOMATED)
        .set(tag::SYMBOL, order.symbol())
        .set_char(tag::SIDE, order.side().fix_value())
        .set_char(tag::ORD_TYPE, order.ord_type().fix_value());

    // Optional from 4.1 on.
    msg.body
        .set_decimal(tag::ORDER_QTY, order.quantity(), factory.quantity_scale);
    msg
}

pub(super) fn nos42(factory: &FixFactory, order: &Order) -> Message {
    let mut msg = start(ProtocolVersion::Fix42);
    msg.body
        .set(tag::CL_ORD_ID, order.cl_ord_id())
        .set_char(tag::HANDL_INST, HANDL_INST_AUTOMATED)
        .set(tag::SYMBOL, order.symbol())
        .set_char(tag::SIDE, order.side().fix_value())
        .set_timestamp(tag::TRANSACT_TIME, factory.now())
        .set_char(tag::ORD_TYPE, order.ord_type().fix_value());

    msg.body
        .set_decimal(tag::ORDER_QTY, order.quantity(), factory.quantity_scale);
    msg
}

pub(super) fn nos43(factory: &FixFactory, order: &Order) -> Message {
    let mut msg = start(ProtocolVersion::Fix43);
    msg.body
        .set(tag::CL_ORD_ID, order.cl_ord_id())
        .set_char(tag::HANDL_INST, HANDL_INST_AUTOMATED)
        .set_char(tag::SIDE, order.side().fix_value())
        .set_timestamp(tag::TRANSACT_TIME, factory.now())
        .set_char(tag::ORD_TYPE, order.ord_type().fix_value());

    // Symbol moved into the Instrument component in 4.3.
    msg.body
        .set_decimal(tag::ORDER_QTY, order.quantity(), factory.quantity_scale)
        .set(tag::SYMBOL, order.symbol());
    msg
}

pub(super) fn nos44(factory: &FixFactory, order: &Order) -> Message {
    let mut msg = start(ProtocolVersion::Fix44);
    msg.body
        .set(tag::CL_ORD_ID, order.cl_ord_id())
        .set_char(tag::SIDE, order.side().fix_value())
        .set_timestamp(tag::TRANSACT_TIME, factory.now())
        .set_char(tag::ORD_TYPE, order.ord_type().fix_value());

    msg.body
        .set_decimal(tag::ORDER_QTY, order.quantity(), factory.quantity_scale)
        .set(tag::SYMBOL, order.symbol())
        .set_char(tag::HANDL_INST, HANDL_INST_AUTOMATED);
    msg
}

/// FIX 5.0 over FIXT.1.1. The only version that carries instrument
/// identification beyond Symbol.
pub(super) fn nos50(factory: &FixFactory, order: &Order) -> Message {
    let mut msg = start(ProtocolVersion::Fixt11);
    msg.body
        .set(tag::CL_ORD_ID, order.cl_ord_id())
        .set_char(tag::SIDE, order.side().fix_value())
        .set_timestamp(tag::TRANSACT_TIME, factory.now())
        .set_char(tag::ORD_TYPE, order.ord_type().fix_value());

    msg.body
        .set_char(tag::HANDL_INST, HANDL_INST_AUTOMATED)
        .set_decimal(tag::ORDER_QTY, order.quantity(), factory.quantity_scale)
        .set_optional(tag::SYMBOL, Some(order.symbol()));
    populate::security(&mut msg.body, order.security(), factory.price_scale);
    msg.body.set_optional(tag::EXEC_INST, order.exec_inst());
    msg
}
