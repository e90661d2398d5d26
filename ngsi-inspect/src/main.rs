//! NGSI notification inspector
//!
//! Reads a context-broker notification body, parses it as NGSI v2 or
//! NGSI-LD and prints the canonical event as JSON on stdout. Logs and
//! diagnostics go to stderr.
//!
//! Usage:
//!   ngsi-inspect --dialect ld notification.json
//!   curl -s ... | ngsi-inspect -H fiware-service:smartcity -H fiware-servicepath:/rooms

use anyhow::{Result, bail};
use clap::Parser;
use ngsi_inspect::{InspectOptions, build_headers, inspect, parse_header_arg, read_payload, render};
use ngsi_parser::DEFAULT_MAX_PAYLOAD_SIZE;
use ngsi_types::{CreationTime, Dialect};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "ngsi-inspect")]
#[command(about = "Parse an NGSI v2 / NGSI-LD notification and print the canonical event")]
struct Args {
    /// Notification body (read from stdin when omitted)
    payload: Option<PathBuf>,

    /// Notification dialect: v2 or ld
    #[arg(short, long, default_value = "v2")]
    dialect: Dialect,

    /// Request header as name:value (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header_arg)]
    headers: Vec<(String, String)>,

    /// Tenant, overrides any fiware-service header
    #[arg(long)]
    service: Option<String>,

    /// Tenant path, overrides any fiware-servicepath header
    #[arg(long)]
    service_path: Option<String>,

    /// Creation time in milliseconds since the epoch (defaults to now)
    #[arg(long)]
    creation_time: Option<CreationTime>,

    /// Reject payloads larger than this many bytes
    #[arg(long, default_value_t = DEFAULT_MAX_PAYLOAD_SIZE)]
    max_payload_bytes: usize,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Exit with an error if any attribute was skipped
    #[arg(long)]
    strict: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_filter = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let payload = read_payload(args.payload.as_deref())?;
    let options = InspectOptions {
        dialect: args.dialect,
        headers: build_headers(args.headers, args.service, args.service_path),
        creation_time: args.creation_time.unwrap_or_else(CreationTime::now),
        max_payload_size: args.max_payload_bytes,
    };

    let outcome = inspect(&payload, &options)?;
    info!(
        "Parsed {} notification: {} entities, {} skipped attributes",
        options.dialect,
        outcome.value.entity_count(),
        outcome.diagnostics.len()
    );
    if args.strict && !outcome.is_clean() {
        bail!("{} attributes were skipped", outcome.diagnostics.len());
    }

    println!("{}", render(&outcome.value, args.pretty)?);
    Ok(())
}
