//! Support code for the `ngsi-inspect` binary: payload reading,
//! header assembly and output rendering around [`ngsi_parser`].

use anyhow::{Context, Result};
use ngsi_parser::headers::{FIWARE_SERVICE, FIWARE_SERVICE_PATH};
use ngsi_parser::{NotificationHeaders, NotificationParser, ParseOutcome, ParseResult};
use ngsi_types::{CreationTime, Dialect, NotificationEvent};
use std::io::Read;
use std::path::Path;

/// Everything besides the payload that a parse needs.
#[derive(Debug, Clone)]
pub struct InspectOptions {
    pub dialect: Dialect,
    pub headers: NotificationHeaders,
    pub creation_time: CreationTime,
    pub max_payload_size: usize,
}

/// Parses `payload` the way a transport would hand it over.
pub fn inspect(payload: &[u8], options: &InspectOptions) -> ParseResult<ParseOutcome<NotificationEvent>> {
    NotificationParser::default()
        .with_max_payload_size(options.max_payload_size)
        .parse_notification(payload, options.dialect.as_str(), &options.headers, options.creation_time)
}

/// Parses a `name:value` header argument. The value may itself contain `:`.
pub fn parse_header_arg(arg: &str) -> std::result::Result<(String, String), String> {
    let (name, value) = arg
        .split_once(':')
        .ok_or_else(|| format!("expected name:value, got {arg:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in {arg:?}"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// Builds the header map. Explicit service flags win over `--header` pairs.
pub fn build_headers(
    pairs: Vec<(String, String)>,
    service: Option<String>,
    service_path: Option<String>,
) -> NotificationHeaders {
    let mut headers: NotificationHeaders = pairs.into_iter().collect();
    if let Some(service) = service {
        headers.insert(FIWARE_SERVICE, service);
    }
    if let Some(service_path) = service_path {
        headers.insert(FIWARE_SERVICE_PATH, service_path);
    }
    headers
}

/// Reads the payload from a file, or from stdin when no path is given.
pub fn read_payload(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read payload from {}", path.display())),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read payload from stdin")?;
            Ok(buf)
        }
    }
}

/// Renders the event as JSON.
pub fn render(event: &NotificationEvent, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(event)
    } else {
        serde_json::to_string(event)
    };
    text.context("Failed to serialize event")
}
