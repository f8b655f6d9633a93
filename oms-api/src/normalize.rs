//! Decimal normalization of user-supplied quantity and price text.
//!
//! Every function here is pure: the same input always yields the same
//! decimal (or the same rejection), so callers may normalize as often as
//! they like before handing an entity to the registry.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::model::enums::OrdType;

/// Parses decimal text in plain (`"150.25"`) or scientific (`"1e3"`) form.
///
/// Blank input is not a number and is rejected like any other bad text.
/// So is text that would only parse by dropping digits: a value needs to
/// fit the 28 decimal places a [`Decimal`] holds, and digit separators
/// (`"1_000"`) are not accepted.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.trim().is_empty() || text.contains('_') {
        return None;
    }
    let value = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()?;
    let mantissa = text.split(['e', 'E']).next().unwrap_or(text);
    (significant_digits(mantissa) == significant_digits(&value.normalize().to_string()))
        .then_some(value)
}

/// Digits of `text` without sign, point, or leading and trailing zeros.
fn significant_digits(text: &str) -> String {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.trim_start_matches('0').trim_end_matches('0').to_string()
}

/// Quantity is mandatory for every order type.
pub fn quantity(text: &str) -> Result<Decimal, ValidationError> {
    parse_decimal(text).ok_or_else(|| ValidationError::InvalidQuantity(text.to_string()))
}

/// Limit price, parsed only when `ord_type` carries one.
///
/// For every other order type the text is ignored and the price is absent.
pub fn price(ord_type: OrdType, text: &str) -> Result<Option<Decimal>, ValidationError> {
    if !ord_type.requires_price() {
        return Ok(None);
    }
    parse_decimal(text)
        .map(Some)
        .ok_or_else(|| ValidationError::InvalidPrice(text.to_string()))
}

/// Stop price, parsed only when `ord_type` carries one.
pub fn stop_price(ord_type: OrdType, text: &str) -> Result<Option<Decimal>, ValidationError> {
    if !ord_type.requires_stop_price() {
        return Ok(None);
    }
    parse_decimal(text)
        .map(Some)
        .ok_or_else(|| ValidationError::InvalidStopPrice(text.to_string()))
}

/// Strike price is optional: empty text means "no strike".
pub fn strike_price(text: &str) -> Result<Option<Decimal>, ValidationError> {
    if text.is_empty() {
        return Ok(None);
    }
    parse_decimal(text)
        .map(Some)
        .ok_or_else(|| ValidationError::InvalidStrikePrice(text.to_string()))
}
