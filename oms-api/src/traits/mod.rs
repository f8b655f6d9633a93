pub mod clord_id;
pub mod message_factory;
