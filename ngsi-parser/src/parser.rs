//! The parse entry point: dialect dispatch, size guard and event assembly.

use crate::diagnostics::ParseOutcome;
use crate::error::{ParseError, ParseResult};
use crate::headers::NotificationHeaders;
use crate::ld::parse_ld_entities_with_diagnostics;
use crate::v2::parse_v2_entities;
use ngsi_types::{CreationTime, Dialect, NotificationEvent};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default maximum payload size (16 MB).
pub const DEFAULT_MAX_PAYLOAD_SIZE: usize = 16 * 1024 * 1024;

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Payloads larger than this are rejected before decoding.
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

fn default_max_payload_size() -> usize {
    DEFAULT_MAX_PAYLOAD_SIZE
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_payload_size: default_max_payload_size(),
        }
    }
}

/// Reusable, stateless notification parser.
///
/// Holds only its configuration, so one instance can be shared across
/// threads and called concurrently.
#[derive(Debug, Clone, Default)]
pub struct NotificationParser {
    config: ParserConfig,
}

impl NotificationParser {
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn with_max_payload_size(mut self, max_payload_size: usize) -> Self {
        self.config.max_payload_size = max_payload_size;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a payload into an event. Diagnostics are logged and dropped.
    pub fn parse(
        &self,
        payload: &[u8],
        dialect: Dialect,
        tenant: &str,
        tenant_path: &str,
        creation_time: CreationTime,
    ) -> ParseResult<NotificationEvent> {
        self.parse_outcome(payload, dialect, tenant, tenant_path, creation_time)
            .map(|outcome| outcome.value)
    }

    /// Parses a payload into an event, returning the diagnostics as well.
    ///
    /// `tenant_path` is ignored for NGSI-LD, which has no service path.
    pub fn parse_outcome(
        &self,
        payload: &[u8],
        dialect: Dialect,
        tenant: &str,
        tenant_path: &str,
        creation_time: CreationTime,
    ) -> ParseResult<ParseOutcome<NotificationEvent>> {
        let limit = self.config.max_payload_size;
        if payload.len() > limit {
            return Err(ParseError::PayloadTooLarge {
                size: payload.len(),
                limit,
            });
        }
        let json = std::str::from_utf8(payload)?;

        match dialect {
            Dialect::V2 => {
                let entities = parse_v2_entities(json)?;
                Ok(ParseOutcome::clean(NotificationEvent::v2(
                    creation_time,
                    tenant,
                    tenant_path,
                    entities,
                )))
            }
            Dialect::Ld => {
                let outcome = parse_ld_entities_with_diagnostics(json)?;
                Ok(outcome.map(|entities| NotificationEvent::ld(creation_time, tenant, entities)))
            }
        }
    }

    /// Parses a notification as handed over by a transport: a version tag,
    /// the raw request headers and the payload.
    pub fn parse_notification(
        &self,
        payload: &[u8],
        version: &str,
        headers: &NotificationHeaders,
        creation_time: CreationTime,
    ) -> ParseResult<ParseOutcome<NotificationEvent>> {
        let dialect: Dialect = version.parse()?;
        let tenant = headers.tenant();
        debug!(
            dialect = %dialect,
            service = %tenant.service,
            service_path = %tenant.service_path,
            "Parsing notification of {} bytes",
            payload.len()
        );
        self.parse_outcome(payload, dialect, &tenant.service, &tenant.service_path, creation_time)
    }
}

/// Parses a payload with the default configuration.
pub fn parse(
    payload: &[u8],
    dialect: Dialect,
    tenant: &str,
    tenant_path: &str,
    creation_time: CreationTime,
) -> ParseResult<NotificationEvent> {
    NotificationParser::default().parse(payload, dialect, tenant, tenant_path, creation_time)
}
