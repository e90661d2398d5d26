//! Canonical model for FIWARE context-broker notifications.
//!
//! This crate defines the dialect-neutral types that the parsers produce and
//! that downstream stages consume:
//! - [`NotificationEvent`]: one parsed notification (tenant, timestamp, entities)
//! - [`Entity`]: a context entity identified by `(id, type)`
//! - [`Attribute`] / [`Metadata`]: NGSI v2 attributes with flat metadata
//! - [`AttributeLd`] / [`SubAttributeLd`]: NGSI-LD attributes, one nesting level deep
//! - [`keys`]: the reserved key sets shared by both parsers
//!
//! Nothing in here performs I/O or holds shared state; every type is plain
//! owned data and is `Send + Sync`.

mod attribute;
mod dialect;
mod entity;
mod event;
pub mod keys;
mod ld;
mod timestamp;
mod value;

pub use attribute::{Attribute, Metadata};
pub use dialect::Dialect;
pub use entity::{Entity, EntityAttributes};
pub use event::NotificationEvent;
pub use ld::{AttributeLd, LdAttrType, SubAttributeLd};
pub use timestamp::CreationTime;
pub use value::{LdValue, stringify};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building model values from caller input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown NGSI dialect: {0:?} (expected \"v2\" or \"ld\")")]
    UnknownDialect(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
