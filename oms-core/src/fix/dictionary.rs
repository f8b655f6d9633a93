//! Mandatory body fields per protocol version and message type.
//!
//! Only the messages this crate builds are listed. A message passes when
//! every listed tag is present with a non-empty value.

use oms::{OmsError, Result};

use super::message::{Message, MsgType};
use super::tag::{self, Tag};
use super::version::ProtocolVersion;

const NOS_40: &[Tag] = &[
    tag::CL_ORD_ID,
    tag::HANDL_INST,
    tag::SYMBOL,
    tag::SIDE,
    tag::ORDER_QTY,
    tag::ORD_TYPE,
];
const NOS_41: &[Tag] = &[
    tag::CL_ORD_ID,
    tag::HANDL_INST,
    tag::SYMBOL,
    tag::SIDE,
    tag::ORD_TYPE,
];
const NOS_42: &[Tag] = &[
    tag::CL_ORD_ID,
    tag::HANDL_INST,
    tag::SYMBOL,
    tag::SIDE,
    tag::TRANSACT_TIME,
    tag::ORD_TYPE,
];
const NOS_43: &[Tag] = &[
    tag::CL_ORD_ID,
    tag::HANDL_INST,
    tag::SIDE,
    tag::TRANSACT_TIME,
    tag::ORD_TYPE,
];
const NOS_44_50: &[Tag] = &[tag::CL_ORD_ID, tag::SIDE, tag::TRANSACT_TIME, tag::ORD_TYPE];
const CROSS_50: &[Tag] = &[
    tag::CROSS_ID,
    tag::CROSS_TYPE,
    tag::CROSS_PRIORITIZATION,
    tag::TRANSACT_TIME,
    tag::ORD_TYPE,
];
const CROSS_50_SIDE: &[Tag] = &[tag::SIDE, tag::CL_ORD_ID];
const CXL_42: &[Tag] = &[
    tag::ORIG_CL_ORD_ID,
    tag::CL_ORD_ID,
    tag::SYMBOL,
    tag::SIDE,
    tag::TRANSACT_TIME,
];

/// Mandatory body tags, or `None` when the pair is not in the dictionary.
pub fn required_fields(version: ProtocolVersion, msg_type: MsgType) -> Option<&'static [Tag]> {
    use MsgType::*;
    use ProtocolVersion::*;

    match (version, msg_type) {
        (Fix40, NewOrderSingle) => Some(NOS_40),
        (Fix41, NewOrderSingle) => Some(NOS_41),
        (Fix42, NewOrderSingle) => Some(NOS_42),
        (Fix43, NewOrderSingle) => Some(NOS_43),
        (Fix44, NewOrderSingle) | (Fixt11, NewOrderSingle) => Some(NOS_44_50),
        (Fixt11, NewOrderCross) => Some(CROSS_50),
        (Fix42, OrderCancelRequest) => Some(CXL_42),
        _ => None,
    }
}

/// Checks `message` against its dictionary entry.
///
/// Messages without an entry have nothing to check and pass. A NewOrderCross
/// must also carry the NoSides group with every entry complete.
pub fn validate(message: &Message) -> Result<()> {
    let msg_type = message.msg_type();
    let missing = |tag: Tag| OmsError::MissingRequiredField {
        msg_type: msg_type.name(),
        tag,
    };

    let Some(required) = required_fields(message.version(), msg_type) else {
        return Ok(());
    };
    for &tag in required {
        if message.body.get(tag).map_or(true, str::is_empty) {
            return Err(missing(tag));
        }
    }

    if msg_type == MsgType::NewOrderCross {
        let sides = message
            .body
            .group(tag::NO_SIDES)
            .filter(|g| !g.is_empty())
            .ok_or_else(|| missing(tag::NO_SIDES))?;
        for entry in sides.entries() {
            for &tag in CROSS_50_SIDE {
                if entry.get(tag).map_or(true, str::is_empty) {
                    return Err(missing(tag));
                }
            }
        }
    }

    Ok(())
}
