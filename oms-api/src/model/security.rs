use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::PutOrCall;

/// Optional instrument descriptors carried by orders and crosses.
///
/// Every field is absent unless the submitter supplied a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecurityDetails {
    pub security_type: Option<String>,
    pub security_id: Option<String>,
    pub security_id_source: Option<String>,
    pub security_desc: Option<String>,
    pub maturity_month_year: Option<String>,
    pub maturity_day: Option<u32>,
    pub put_or_call: Option<PutOrCall>,
    pub strike_price: Option<Decimal>,
}

/// Request for the definition of a security from the counterparty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityDefinitionRequest {
    pub security_req_id: String,
    pub symbol: String,
    pub security_type: Option<String>,
}

/// Maps empty text to `None`, the way optional ticket fields are read.
pub(crate) fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}
