//! Outbound message values.
//!
//! A `Message` is plain data: ordered tag/value pairs split into header and
//! body, with repeating groups hanging off the body. Values are stored in
//! their wire text form. Framing (BodyLength, CheckSum, sequence numbers)
//! belongs to the session layer that transmits the message.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

use super::tag::{self, Tag};
use super::version::ProtocolVersion;

/// Application message types the factory produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MsgType {
    NewOrderSingle,
    NewOrderCross,
    OrderCancelRequest,
    SecurityDefinitionRequest,
}

impl MsgType {
    /// Value of tag 35.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NewOrderSingle => "D",
            Self::NewOrderCross => "s",
            Self::OrderCancelRequest => "F",
            Self::SecurityDefinitionRequest => "c",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::NewOrderSingle => "NewOrderSingle",
            Self::NewOrderCross => "NewOrderCross",
            Self::OrderCancelRequest => "OrderCancelRequest",
            Self::SecurityDefinitionRequest => "SecurityDefinitionRequest",
        }
    }
}

/// Renders `value` with exactly `scale` decimal places, rounding half away
/// from zero.
pub fn format_decimal(value: Decimal, scale: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded.to_string()
}

/// UTCTimestamp with millisecond precision.
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.format("%Y%m%d-%H:%M:%S%.3f").to_string()
}

/// Ordered tag/value pairs. Setting a tag twice replaces the first value in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldMap {
    fields: Vec<(Tag, String)>,
    groups: Vec<RepeatingGroup>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, tag: Tag, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.fields.iter_mut().find(|(t, _)| *t == tag) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((tag, value)),
        }
        self
    }

    pub fn set_char(&mut self, tag: Tag, value: char) -> &mut Self {
        self.set(tag, value.to_string())
    }

    pub fn set_int(&mut self, tag: Tag, value: u64) -> &mut Self {
        self.set(tag, value.to_string())
    }

    pub fn set_decimal(&mut self, tag: Tag, value: Decimal, scale: u32) -> &mut Self {
        self.set(tag, format_decimal(value, scale))
    }

    pub fn set_timestamp(&mut self, tag: Tag, value: DateTime<Utc>) -> &mut Self {
        self.set(tag, format_timestamp(value))
    }

    /// Sets the field only when `value` is present and non-empty.
    pub fn set_optional(&mut self, tag: Tag, value: Option<&str>) -> &mut Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.set(tag, v);
        }
        self
    }

    pub fn get(&self, tag: Tag) -> Option<&str> {
        self.fields
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, tag: Tag) -> bool {
        self.get(tag).is_some()
    }

    /// Tags in the order they were first set.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.fields.iter().map(|(t, _)| *t)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.groups.is_empty()
    }

    /// Attaches a group, replacing any group with the same count tag.
    pub fn set_group(&mut self, group: RepeatingGroup) -> &mut Self {
        match self
            .groups
            .iter_mut()
            .find(|g| g.count_tag == group.count_tag)
        {
            Some(slot) => *slot = group,
            None => self.groups.push(group),
        }
        self
    }

    pub fn group(&self, count_tag: Tag) -> Option<&RepeatingGroup> {
        self.groups.iter().find(|g| g.count_tag == count_tag)
    }
}

impl fmt::Display for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (tag, value) in &self.fields {
            write!(f, "{}={}|", tag, value)?;
        }
        for group in &self.groups {
            write!(f, "{}", group)?;
        }
        Ok(())
    }
}

/// A repeating group: a count tag followed by ordered entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepeatingGroup {
    count_tag: Tag,
    entries: Vec<FieldMap>,
}

impl RepeatingGroup {
    pub fn new(count_tag: Tag) -> Self {
        Self {
            count_tag,
            entries: Vec::new(),
        }
    }

    /// Appends an empty entry and returns it for population.
    pub fn add(&mut self) -> &mut FieldMap {
        self.entries.push(FieldMap::new());
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    pub fn count_tag(&self) -> Tag {
        self.count_tag
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FieldMap> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[FieldMap] {
        &self.entries
    }
}

impl fmt::Display for RepeatingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}|", self.count_tag, self.entries.len())?;
        for entry in &self.entries {
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// A fully built application message for one protocol version.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    version: ProtocolVersion,
    msg_type: MsgType,
    pub header: FieldMap,
    pub body: FieldMap,
}

impl Message {
    /// Starts a message with its standard header populated.
    pub fn new(version: ProtocolVersion, msg_type: MsgType) -> Self {
        let mut header = FieldMap::new();
        header
            .set(tag::BEGIN_STRING, version.begin_string())
            .set(tag::MSG_TYPE, msg_type.code());
        if let Some(appl_ver_id) = version.appl_ver_id() {
            header.set(tag::APPL_VER_ID, appl_ver_id);
        }

        Self {
            version,
            msg_type,
            header,
            body: FieldMap::new(),
        }
    }

    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    pub fn msg_type(&self) -> MsgType {
        self.msg_type
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.header, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_decimal_pads_and_rounds() {
        assert_eq!(format_decimal(dec!(150.25), 2), "150.25");
        assert_eq!(format_decimal(dec!(150.2), 2), "150.20");
        assert_eq!(format_decimal(dec!(100), 0), "100");
        assert_eq!(format_decimal(dec!(100.000), 0), "100");
        assert_eq!(format_decimal(dec!(5.45), 1), "5.5");
        assert_eq!(format_decimal(dec!(-5.45), 1), "-5.5");
        assert_eq!(format_decimal(dec!(2.5), 0), "3");
    }

    #[test]
    fn test_format_timestamp() {
        let t = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(format_timestamp(t), "20240309-14:05:07.000");
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut map = FieldMap::new();
        map.set(tag::CL_ORD_ID, "A").set(tag::SYMBOL, "IBM");
        map.set(tag::CL_ORD_ID, "B");

        assert_eq!(map.get(tag::CL_ORD_ID), Some("B"));
        assert_eq!(map.tags().collect::<Vec<_>>(), vec![tag::CL_ORD_ID, tag::SYMBOL]);
    }

    #[test]
    fn test_set_optional_skips_empty() {
        let mut map = FieldMap::new();
        map.set_optional(tag::ACCOUNT, Some(""))
            .set_optional(tag::EXEC_INST, None)
            .set_optional(tag::SECURITY_ID, Some("459200101"));

        assert!(!map.has(tag::ACCOUNT));
        assert!(!map.has(tag::EXEC_INST));
        assert_eq!(map.get(tag::SECURITY_ID), Some("459200101"));
    }

    #[test]
    fn test_display_renders_header_body_and_groups() {
        let mut msg = Message::new(ProtocolVersion::Fix42, MsgType::NewOrderSingle);
        msg.body.set(tag::CL_ORD_ID, "1");

        let mut sides = RepeatingGroup::new(tag::NO_SIDES);
        sides.add().set_char(tag::SIDE, '1');
        sides.add().set_char(tag::SIDE, '2');
        msg.body.set_group(sides);

        assert_eq!(msg.to_string(), "8=FIX.4.2|35=D|11=1|552=2|54=1|54=2|");
    }

    #[test]
    fn test_fixt_header_carries_appl_ver_id() {
        let msg = Message::new(ProtocolVersion::Fixt11, MsgType::NewOrderCross);
        assert_eq!(msg.header.get(tag::BEGIN_STRING), Some("FIXT.1.1"));
        assert_eq!(msg.header.get(tag::MSG_TYPE), Some("s"));
        assert_eq!(msg.header.get(tag::APPL_VER_ID), Some("7"));
    }
}
