//! `traceroute` and `portscan`, which receive the raw remainder of the line.

use std::net::SocketAddr;
use std::ops::RangeInclusive;
use std::time::Duration;

use launcher_contract::{NetworkCommandKind, ShellError};

use crate::context::ExecutionContext;

const NETWORK_USAGE: &str = "Invalid network command. Use:
- traceroute <host>
- portscan <host> [start_port] [end_port]";

const DEFAULT_PORTS: RangeInclusive<u16> = 1..=1024;

/// Service label for well-known ports.
pub fn well_known_service(port: u16) -> &'static str {
    match port {
        20 => "FTP (Data)",
        21 => "FTP (Control)",
        22 => "SSH",
        23 => "Telnet",
        25 => "SMTP",
        80 => "HTTP",
        443 => "HTTPS",
        3306 => "MySQL",
        5432 => "PostgreSQL",
        _ => "Unknown Service",
    }
}

/// Parsed `portscan` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortScanRequest {
    /// Host name or address to scan.
    pub host: String,
    /// Ports probed, in ascending order.
    pub ports: RangeInclusive<u16>,
}

fn parse_port(word: &str) -> Result<u32, ShellError> {
    word.parse::<u32>()
        .map_err(|_| ShellError::usage(format!("Error: Invalid port number '{word}'.")))
}

impl PortScanRequest {
    /// Parses `<host> [start] [end]`.
    ///
    /// # Errors
    ///
    /// Returns a usage error for a missing host, a non-numeric port, or a range outside
    /// `1..=65535` whose start exceeds its end.
    pub fn parse(raw: &str) -> Result<Self, ShellError> {
        let mut words = raw.split_whitespace();
        let host = words
            .next()
            .ok_or_else(|| ShellError::usage(NETWORK_USAGE))?
            .to_string();
        let start = match words.next() {
            Some(word) => parse_port(word)?,
            None => u32::from(*DEFAULT_PORTS.start()),
        };
        let end = match words.next() {
            Some(word) => parse_port(word)?,
            None => u32::from(*DEFAULT_PORTS.end()),
        };
        let invalid = || ShellError::usage("Invalid port range. Must be between 1 and 65535.");
        let start = u16::try_from(start).map_err(|_| invalid())?;
        let end = u16::try_from(end).map_err(|_| invalid())?;
        if start == 0 || start > end {
            return Err(invalid());
        }
        Ok(Self {
            host,
            ports: start..=end,
        })
    }
}

fn traceroute(raw: &str, ctx: &mut ExecutionContext<'_>) -> Result<(), ShellError> {
    let host = raw
        .split_whitespace()
        .next()
        .ok_or_else(|| ShellError::usage(NETWORK_USAGE))?;
    let report = ctx.services.network.traceroute(host).map_err(|err| {
        ShellError::execution(format!(
            "Traceroute error: Unable to trace route to {host}. {err}"
        ))
    })?;
    ctx.info(format!("Traceroute to {host}:\n{report}"));
    Ok(())
}

fn portscan(raw: &str, ctx: &mut ExecutionContext<'_>) -> Result<(), ShellError> {
    let request = PortScanRequest::parse(raw)?;
    let ip = ctx.services.network.resolve(&request.host).map_err(|err| {
        tracing::debug!(host = %request.host, "resolve failed: {err}");
        ShellError::execution(format!(
            "Error: Could not resolve hostname {}",
            request.host
        ))
    })?;
    let timeout = Duration::from_millis(ctx.config.portscan_timeout_ms);
    tracing::info!(host = %request.host, %ip, ports = ?request.ports, "port scan started");

    let open = request
        .ports
        .clone()
        .filter(|port| {
            ctx.services
                .network
                .port_open(SocketAddr::new(ip, *port), timeout)
        })
        .map(|port| format!("Port {port}: {}", well_known_service(port)))
        .collect::<Vec<_>>();
    let body = if open.is_empty() {
        "No open ports found".to_string()
    } else {
        open.join("\n")
    };
    ctx.info(format!("Port scan results for {}:\n{body}", request.host));
    Ok(())
}

pub(crate) fn run_network(
    command: NetworkCommandKind,
    raw: &str,
    ctx: &mut ExecutionContext<'_>,
) -> Result<(), ShellError> {
    match command {
        NetworkCommandKind::Traceroute => traceroute(raw, ctx),
        NetworkCommandKind::Portscan => portscan(raw, ctx),
    }
}

#[cfg(test)]
mod tests {
    use launcher_contract::ShellErrorCode;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_to_first_1024_ports() {
        assert_eq!(
            PortScanRequest::parse("example.com"),
            Ok(PortScanRequest {
                host: "example.com".to_string(),
                ports: 1..=1024,
            })
        );
        assert_eq!(
            PortScanRequest::parse("example.com 1000").map(|request| request.ports),
            Ok(1000..=1024)
        );
    }

    #[test]
    fn explicit_range_is_inclusive() {
        assert_eq!(
            PortScanRequest::parse("10.0.0.1  20 25").map(|request| request.ports),
            Ok(20..=25)
        );
        assert_eq!(
            PortScanRequest::parse("10.0.0.1 65535 65535").map(|request| request.ports),
            Ok(65535..=65535)
        );
    }

    #[test]
    fn out_of_range_ports_are_rejected() {
        for raw in ["h 0 10", "h 10 65536", "h 30 20", "h 8000"] {
            let err = PortScanRequest::parse(raw).expect_err("invalid range");
            assert_eq!(err.code, ShellErrorCode::Usage);
            assert_eq!(
                err.message,
                "Invalid port range. Must be between 1 and 65535."
            );
        }
        let err = PortScanRequest::parse("h twenty").expect_err("not a number");
        assert_eq!(err.message, "Error: Invalid port number 'twenty'.");
    }

    #[test]
    fn well_known_ports_are_labelled() {
        assert_eq!(well_known_service(22), "SSH");
        assert_eq!(well_known_service(5432), "PostgreSQL");
        assert_eq!(well_known_service(8080), "Unknown Service");
    }
}
