//! Dual-dialect parser for FIWARE context-broker notifications.
//!
//! Turns raw NGSI v2 and NGSI-LD notification bodies into the canonical
//! model from [`ngsi_types`]:
//!
//! - [`parse`] / [`NotificationParser`]: payload bytes to [`NotificationEvent`]
//! - [`parse_v2_entities`]: the `data` array of a v2 body
//! - [`parse_ld_entities`]: an NGSI-LD entity array
//! - [`NotificationHeaders`]: case-insensitive tenant header lookup
//!
//! Parsing is pure and synchronous: no I/O, no shared state. Structural
//! problems fail with a [`ParseError`]; a bad individual LD attribute is
//! skipped and reported as a [`Diagnostic`] instead.
//!
//! [`NotificationEvent`]: ngsi_types::NotificationEvent

mod diagnostics;
mod error;
mod fields;
pub mod headers;
mod ld;
mod parser;
mod v2;

pub use diagnostics::{Diagnostic, JsonShape, ParseOutcome};
pub use error::{ParseError, ParseResult};
pub use headers::{NotificationHeaders, Tenant, normalize_headers};
pub use ld::{parse_ld_entities, parse_ld_entities_with_diagnostics};
pub use parser::{DEFAULT_MAX_PAYLOAD_SIZE, NotificationParser, ParserConfig, parse};
pub use v2::parse_v2_entities;
