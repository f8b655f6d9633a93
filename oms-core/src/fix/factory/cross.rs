use oms::{Cross, CrossLeg};

use super::populate::{self, HANDL_INST_AUTOMATED};
use super::FixFactory;
use crate::fix::message::{FieldMap, Message, MsgType, RepeatingGroup};
use crate::fix::tag;
use crate::fix::version::ProtocolVersion;

/// NewOrderCross for FIX 5.0. Sides are listed buy first, then sell.
pub(super) fn cross50(factory: &FixFactory, cross: &Cross) -> Message {
    let details = cross.details();
    let mut msg = Message::new(ProtocolVersion::Fixt11, MsgType::NewOrderCross);

    msg.header
        .set_optional(tag::SENDER_SUB_ID, details.sender_sub_id.as_deref());

    msg.body
        .set(tag::CROSS_ID, cross.cross_id())
        .set_char(tag::CROSS_TYPE, details.cross_type.fix_value())
        .set_char(
            tag::CROSS_PRIORITIZATION,
            details.cross_prioritization.fix_value(),
        )
        .set_timestamp(tag::TRANSACT_TIME, factory.now())
        .set_char(tag::ORD_TYPE, cross.ord_type().fix_value());

    msg.body
        .set_char(tag::HANDL_INST, HANDL_INST_AUTOMATED)
        .set_decimal(tag::ORDER_QTY, cross.quantity(), factory.quantity_scale)
        .set_optional(tag::SYMBOL, Some(cross.symbol()));
    populate::security(&mut msg.body, &details.security, factory.price_scale);
    msg.body
        .set_optional(tag::EXEC_INST, details.exec_inst.as_deref());

    let mut sides = RepeatingGroup::new(tag::NO_SIDES);
    side(sides.add(), cross.buy());
    side(sides.add(), cross.sell());
    msg.body.set_group(sides);

    msg
}

fn side(entry: &mut FieldMap, leg: &CrossLeg) {
    entry
        .set_char(tag::SIDE, leg.side.fix_value())
        .set(tag::CL_ORD_ID, leg.cl_ord_id.as_str())
        .set_optional(tag::DESIGNATION, leg.designation.as_deref())
        .set_optional(tag::ACCOUNT, leg.account.as_deref());
}
