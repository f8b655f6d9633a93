//! Client order id strategies the registry can be built with.

use oms::ClOrdIdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Hands out `{prefix}{n}` with `n` counting up from 1.
///
/// Uniqueness holds per instance; two generators with the same prefix will
/// collide, so give each registry its own.
#[derive(Debug, Default)]
pub struct SequenceClOrdIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequenceClOrdIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// Resumes numbering after `last`, e.g. to stay clear of ids used by an
    /// earlier process on the same session.
    pub fn starting_after(prefix: impl Into<String>, last: u64) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(last),
        }
    }
}

impl ClOrdIdGenerator for SequenceClOrdIdGenerator {
    fn next(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{}", self.prefix, n)
    }
}

/// Hands out `{prefix}{uuid}` using random v4 UUIDs without hyphens.
#[derive(Debug, Default)]
pub struct UuidClOrdIdGenerator {
    prefix: String,
}

impl UuidClOrdIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl ClOrdIdGenerator for UuidClOrdIdGenerator {
    fn next(&self) -> String {
        format!("{}{}", self.prefix, Uuid::new_v4().as_simple())
    }
}
