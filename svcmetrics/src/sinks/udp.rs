// svcmetrics - Service metrics over Statsd for Rust
//
// Copyright 2026 svcmetrics developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};

use crate::sinks::core::{MetricSink, SinkStats, SocketStats};
use crate::types::{ErrorKind, MetricError, MetricResult};

/// Attempt to convert anything implementing the `ToSocketAddrs` trait
/// into a concrete IPv4 `SocketAddr` instance, returning an `InvalidInput`
/// error if the address could not be parsed or has no IPv4 address.
#[allow(clippy::needless_pass_by_value)]
fn get_addr<A: ToSocketAddrs>(addr: A) -> MetricResult<SocketAddr> {
    match addr.to_socket_addrs()?.find(SocketAddr::is_ipv4) {
        Some(addr) => Ok(addr),
        None => Err(MetricError::from((
            ErrorKind::InvalidInput,
            "No IPv4 socket addresses yielded",
        ))),
    }
}

/// Implementation of a `MetricSink` that emits metrics over UDP.
///
/// Each metric is sent to the Statsd server as its own datagram when the
/// `.emit()` method is called, in the thread of the caller. Nothing is
/// buffered and nothing is read back: UDP is fire-and-forget, so a metric
/// that the network drops is simply gone.
///
/// Only IPv4 destinations are supported. When a hostname resolves to several
/// addresses the first IPv4 one is used.
#[derive(Debug)]
pub struct UdpMetricSink {
    addr: SocketAddr,
    socket: UdpSocket,
    stats: SocketStats,
}

impl UdpMetricSink {
    /// Construct a new `UdpMetricSink` instance.
    ///
    /// The address should be the address of the remote metric server to
    /// emit metrics to over UDP. The socket should already be bound to a
    /// local address with any desired configuration applied (blocking vs
    /// non-blocking, timeouts, etc.).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::net::UdpSocket;
    /// use svcmetrics::{UdpMetricSink, DEFAULT_PORT};
    ///
    /// let socket = UdpSocket::bind("0.0.0.0:0").unwrap();
    /// let host = ("metrics.example.com", DEFAULT_PORT);
    /// let sink = UdpMetricSink::from(host, socket);
    /// ```
    ///
    /// # Failures
    ///
    /// This method may fail if:
    ///
    /// * It is unable to resolve the hostname of the metric server.
    /// * The host has no IPv4 address or is otherwise unable to be parsed
    pub fn from<A>(to_addr: A, socket: UdpSocket) -> MetricResult<UdpMetricSink>
    where
        A: ToSocketAddrs,
    {
        let addr = get_addr(to_addr)?;
        let stats = SocketStats::default();
        Ok(UdpMetricSink { addr, socket, stats })
    }

    /// Construct a new `UdpMetricSink` sending to the given host and port
    /// from an ephemeral, non-blocking local socket.
    ///
    /// # Example
    ///
    /// ```
    /// use svcmetrics::{UdpMetricSink, DEFAULT_PORT};
    ///
    /// let sink = UdpMetricSink::connect("127.0.0.1", DEFAULT_PORT).unwrap();
    /// assert_eq!(DEFAULT_PORT, sink.addr().port());
    /// ```
    ///
    /// # Failures
    ///
    /// This method may fail if the host can't be resolved to an IPv4 address
    /// or a local socket can't be bound.
    pub fn connect(host: &str, port: u16) -> MetricResult<UdpMetricSink> {
        let addr = get_addr((host, port))?;
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.set_nonblocking(true)?;
        Ok(UdpMetricSink {
            addr,
            socket,
            stats: SocketStats::default(),
        })
    }

    /// Address of the metric server datagrams are sent to
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl MetricSink for UdpMetricSink {
    fn emit(&self, metric: &str) -> io::Result<usize> {
        self.stats
            .update(self.socket.send_to(metric.as_bytes(), self.addr), metric.len())
    }

    fn stats(&self) -> SinkStats {
        (&self.stats).into()
    }
}

#[cfg(test)]
mod tests {
    use super::{get_addr, MetricSink, UdpMetricSink};
    use crate::types::ErrorKind;
    use std::net::UdpSocket;
    use std::time::Duration;

    #[test]
    fn test_get_addr_bad_address() {
        let res = get_addr("asdf");
        assert!(res.is_err());
    }

    #[test]
    fn test_get_addr_valid_address() {
        let res = get_addr("127.0.0.1:8125");
        assert!(res.is_ok());
    }

    #[test]
    fn test_get_addr_ipv6_only() {
        let res = get_addr("[::1]:8125");
        assert_eq!(ErrorKind::InvalidInput, res.unwrap_err().kind());
    }

    #[test]
    fn test_udp_metric_sink() {
        let socket = UdpSocket::bind("0.0.0.0:0").unwrap();
        let sink = UdpMetricSink::from("127.0.0.1:8125", socket).unwrap();
        assert_eq!(7, sink.emit("buz:1|c").unwrap());
    }

    #[test]
    fn test_non_blocking_udp_metric_sink() {
        let sink = UdpMetricSink::connect("127.0.0.1", 8125).unwrap();
        assert_eq!(7, sink.emit("baz:1|g").unwrap());
    }

    #[test]
    fn test_udp_metric_sink_stats() {
        let sink = UdpMetricSink::connect("127.0.0.1", 8125).unwrap();
        sink.emit("foo:54|c").unwrap();
        sink.emit("foo:67|c").unwrap();

        let stats = sink.stats();
        assert_eq!(2, stats.packets_sent);
        assert_eq!(16, stats.bytes_sent);
    }

    #[test]
    fn test_udp_metric_sink_one_datagram_per_emit() {
        let server = UdpSocket::bind("127.0.0.1:0").unwrap();
        server.set_read_timeout(Some(Duration::from_secs(2))).unwrap();
        let port = server.local_addr().unwrap().port();

        let sink = UdpMetricSink::connect("127.0.0.1", port).unwrap();
        sink.emit("a.b:1|c").unwrap();
        sink.emit("a.c:2|c").unwrap();

        let mut buf = [0u8; 512];
        let n = server.recv(&mut buf).unwrap();
        assert_eq!(b"a.b:1|c", &buf[..n]);
        let n = server.recv(&mut buf).unwrap();
        assert_eq!(b"a.c:2|c", &buf[..n]);
    }
}
