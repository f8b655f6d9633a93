//! Field rules shared by every version's builder.

use oms::{OrdType, Result, SecurityDetails, ValidationError};
use rust_decimal::Decimal;

use crate::fix::message::FieldMap;
use crate::fix::tag;

/// HandlInst: automated execution, no broker intervention.
pub(super) const HANDL_INST_AUTOMATED: char = '1';

/// Sets Price for LIMIT/STOP_LIMIT and StopPx for STOP/STOP_LIMIT.
///
/// Other order types never carry either field, whatever the entity holds.
/// A required price that is absent means the entity skipped normalization.
pub(super) fn prices(
    body: &mut FieldMap,
    ord_type: OrdType,
    price: Option<Decimal>,
    stop_price: Option<Decimal>,
    scale: u32,
) -> Result<()> {
    if ord_type.requires_price() {
        let price = price.ok_or_else(|| ValidationError::InvalidPrice(String::new()))?;
        body.set_decimal(tag::PRICE, price, scale);
    }
    if ord_type.requires_stop_price() {
        let stop_price =
            stop_price.ok_or_else(|| ValidationError::InvalidStopPrice(String::new()))?;
        body.set_decimal(tag::STOP_PX, stop_price, scale);
    }
    Ok(())
}

/// Instrument identification understood by FIX 5.0 messages.
///
/// SecurityIDSource only travels with a SecurityID.
pub(super) fn security(body: &mut FieldMap, security: &SecurityDetails, price_scale: u32) {
    body.set_optional(tag::SECURITY_TYPE, security.security_type.as_deref());

    if security.security_id.as_deref().is_some_and(|id| !id.is_empty()) {
        body.set_optional(tag::SECURITY_ID, security.security_id.as_deref());
        body.set_optional(
            tag::SECURITY_ID_SOURCE,
            security.security_id_source.as_deref(),
        );
    }

    body.set_optional(tag::SECURITY_DESC, security.security_desc.as_deref());
    body.set_optional(
        tag::MATURITY_MONTH_YEAR,
        security.maturity_month_year.as_deref(),
    );
    if let Some(day) = security.maturity_day {
        body.set_int(tag::MATURITY_DAY, u64::from(day));
    }
    if let Some(put_or_call) = security.put_or_call {
        body.set_char(tag::PUT_OR_CALL, put_or_call.fix_value());
    }
    if let Some(strike) = security.strike_price {
        body.set_decimal(tag::STRIKE_PRICE, strike, price_scale);
    }
}
