//! Network diagnostics collaborator.

use std::net::{IpAddr, SocketAddr, TcpStream, ToSocketAddrs};
use std::process::Command;
use std::time::Duration;

use super::process::ProcessOutput;

/// Host service behind `traceroute` and `portscan`.
pub trait NetworkDiagnostics {
    /// Resolves `host` to one address.
    fn resolve(&self, host: &str) -> Result<IpAddr, String>;

    /// Returns whether a TCP connection to `addr` succeeds within `timeout`.
    fn port_open(&self, addr: SocketAddr, timeout: Duration) -> bool;

    /// Runs the platform route tracer against `host` and returns its report.
    fn traceroute(&self, host: &str) -> Result<String, String>;
}

/// Rewrites every address token in a tracer report as `ip (hostname)` when `reverse` names it.
///
/// Tokens on each line are re-joined with single spaces. Addresses without a name stay bare.
pub fn annotate_hops(report: &str, reverse: impl Fn(IpAddr) -> Option<String>) -> String {
    report
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(|token| {
                    let host = token
                        .parse::<IpAddr>()
                        .ok()
                        .and_then(&reverse)
                        .filter(|host| host != token);
                    match host {
                        Some(host) => format!("{token} ({host})"),
                        None => token.to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy, Default)]
/// Diagnostics backed by the standard library resolver, TCP connects, and the platform tracer.
pub struct SystemNetworkDiagnostics;

impl SystemNetworkDiagnostics {
    fn tracer_command(host: &str) -> Command {
        let mut command = if cfg!(windows) {
            let mut command = Command::new("tracert");
            command.arg("-d");
            command
        } else {
            let mut command = Command::new("traceroute");
            command.arg("-n");
            command
        };
        command.arg(host);
        command
    }
}

impl NetworkDiagnostics for SystemNetworkDiagnostics {
    fn resolve(&self, host: &str) -> Result<IpAddr, String> {
        (host, 0)
            .to_socket_addrs()
            .map_err(|err| err.to_string())?
            .next()
            .map(|addr| addr.ip())
            .ok_or_else(|| format!("no addresses for {host}"))
    }

    fn port_open(&self, addr: SocketAddr, timeout: Duration) -> bool {
        TcpStream::connect_timeout(&addr, timeout).is_ok()
    }

    fn traceroute(&self, host: &str) -> Result<String, String> {
        let mut command = Self::tracer_command(host);
        tracing::debug!(host, "running route tracer");
        let output = command
            .output()
            .map(ProcessOutput::from)
            .map_err(|err| format!("{}: {err}", command.get_program().to_string_lossy()))?;
        Ok(annotate_hops(output.text().trim_end(), |ip| {
            dns_lookup::lookup_addr(&ip).ok()
        }))
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Diagnostics for hosts without network access.
pub struct NoopNetworkDiagnostics;

impl NetworkDiagnostics for NoopNetworkDiagnostics {
    fn resolve(&self, host: &str) -> Result<IpAddr, String> {
        Err(format!("cannot resolve {host}: networking is unavailable"))
    }

    fn port_open(&self, _addr: SocketAddr, _timeout: Duration) -> bool {
        false
    }

    fn traceroute(&self, _host: &str) -> Result<String, String> {
        Err("networking is unavailable".to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, TcpListener};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn resolves_literal_addresses_without_dns() {
        assert_eq!(
            SystemNetworkDiagnostics.resolve("127.0.0.1"),
            Ok(IpAddr::V4(Ipv4Addr::LOCALHOST))
        );
    }

    #[test]
    fn detects_listening_port() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        assert!(SystemNetworkDiagnostics.port_open(addr, Duration::from_millis(500)));
    }

    #[test]
    fn hops_gain_reverse_names_when_known() {
        let report = "traceroute to example.com (93.184.216.34), 30 hops max\n 1  192.168.1.1  0.512 ms\n 2  10.0.0.9  4.1 ms\n 3  * * *";
        let names = |ip: IpAddr| match ip.to_string().as_str() {
            "192.168.1.1" => Some("router.lan".to_string()),
            "10.0.0.9" => Some("10.0.0.9".to_string()),
            _ => None,
        };
        assert_eq!(
            annotate_hops(report, names),
            "traceroute to example.com (93.184.216.34), 30 hops max\n1 192.168.1.1 (router.lan) 0.512 ms\n2 10.0.0.9 4.1 ms\n3 * * *"
        );
    }

    #[test]
    fn tracer_uses_numeric_output() {
        let command = SystemNetworkDiagnostics::tracer_command("example.com");
        let args = command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        if cfg!(windows) {
            assert_eq!(args, vec!["-d", "example.com"]);
        } else {
            assert_eq!(args, vec!["-n", "example.com"]);
        }
    }
}
