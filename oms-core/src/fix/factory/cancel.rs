use oms::Order;

use super::FixFactory;
use crate::fix::message::{Message, MsgType};
use crate::fix::tag;
use crate::fix::version::ProtocolVersion;

/// OrderCancelRequest for FIX 4.2. `cl_ord_id` identifies the cancel itself;
/// the order's current ClOrdID becomes OrigClOrdID.
pub(super) fn cxl42(factory: &FixFactory, order: &Order, cl_ord_id: &str) -> Message {
    let mut msg = Message::new(ProtocolVersion::Fix42, MsgType::OrderCancelRequest);
    msg.body
        .set(tag::ORIG_CL_ORD_ID, order.cl_ord_id())
        .set(tag::CL_ORD_ID, cl_ord_id)
        .set(tag::SYMBOL, order.symbol())
        .set_char(tag::SIDE, order.side().fix_value())
        .set_timestamp(tag::TRANSACT_TIME, factory.now());

    msg.body
        .set_decimal(tag::ORDER_QTY, order.quantity(), factory.quantity_scale)
        .set_optional(tag::ACCOUNT, order.account());
    msg
}
