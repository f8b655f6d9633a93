//! Field tags used by the messages this crate builds.

pub type Tag = u32;

pub const ACCOUNT: Tag = 1;
pub const BEGIN_STRING: Tag = 8;
pub const CL_ORD_ID: Tag = 11;
pub const EXEC_INST: Tag = 18;
pub const HANDL_INST: Tag = 21;
pub const SECURITY_ID_SOURCE: Tag = 22;
pub const MSG_TYPE: Tag = 35;
pub const ORDER_QTY: Tag = 38;
pub const ORD_TYPE: Tag = 40;
pub const ORIG_CL_ORD_ID: Tag = 41;
pub const PRICE: Tag = 44;
pub const SECURITY_ID: Tag = 48;
pub const SENDER_SUB_ID: Tag = 50;
pub const SIDE: Tag = 54;
pub const SYMBOL: Tag = 55;
pub const TRANSACT_TIME: Tag = 60;
pub const STOP_PX: Tag = 99;
pub const SECURITY_DESC: Tag = 107;
pub const SECURITY_TYPE: Tag = 167;
pub const MATURITY_MONTH_YEAR: Tag = 200;
pub const PUT_OR_CALL: Tag = 201;
pub const STRIKE_PRICE: Tag = 202;
pub const MATURITY_DAY: Tag = 205;
pub const SECURITY_REQ_ID: Tag = 320;
pub const DESIGNATION: Tag = 494;
pub const CROSS_ID: Tag = 548;
pub const CROSS_TYPE: Tag = 549;
pub const CROSS_PRIORITIZATION: Tag = 550;
pub const NO_SIDES: Tag = 552;
pub const APPL_VER_ID: Tag = 1128;
