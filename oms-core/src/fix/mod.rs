//! Protocol-version-specific message construction.
//!
//! - `version`: the supported BeginStrings.
//! - `message`: the tag/value message model.
//! - `dictionary`: mandatory fields per version and message type.
//! - `factory`: builds messages from saved entities.

pub mod dictionary;
pub mod factory;
pub mod message;
pub mod tag;
pub mod version;

pub use factory::FixFactory;
pub use message::{FieldMap, Message, MsgType, RepeatingGroup};
pub use version::ProtocolVersion;
