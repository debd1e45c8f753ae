use std::collections::VecDeque;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ipnotify_core::notifier::{Notifier, NotifyError};
use ipnotify_core::report::Report;
use ipnotify_core::scanner::InterfaceSource;
use pnet::datalink::{MacAddr, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};

pub fn ni(name: &str, index: u32, mac: Option<MacAddr>, ips: &[IpNetwork], flags: u32) -> NetworkInterface {
    NetworkInterface {
        name: name.into(),
        description: "".into(),
        index,
        mac,
        ips: ips.to_vec(),
        flags,
    }
}

pub fn v4(a: u8, b: u8, c: u8, d: u8, p: u8) -> IpNetwork {
    IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(a, b, c, d), p).unwrap())
}

pub fn v6(s: &str, p: u8) -> IpNetwork {
    IpNetwork::V6(Ipv6Network::new(s.parse::<Ipv6Addr>().unwrap(), p).unwrap())
}

pub fn lo() -> NetworkInterface {
    ni(
        "lo",
        1,
        Some(MacAddr::new(0, 0, 0, 0, 0, 0)),
        &[v4(127, 0, 0, 1, 8), v6("::1", 128)],
        65609,
    )
}

pub fn eth1() -> NetworkInterface {
    ni(
        "eth1",
        4,
        Some(MacAddr::new(0x52, 0x54, 0x00, 0x12, 0x34, 0x56)),
        &[v4(10, 0, 0, 5, 24)],
        69699,
    )
}

pub fn wlan0() -> NetworkInterface {
    ni(
        "wlan0",
        3,
        Some(MacAddr::new(0x34, 0xcf, 0xf6, 0x9a, 0x11, 0x22)),
        &[v4(192, 168, 1, 20, 24), v6("fe80::36cf:f6ff:fe9a:1122", 64)],
        69699,
    )
}

/// Hands out one interface snapshot per call; the last one repeats.
pub struct SnapshotInterfaces {
    snapshots: Mutex<VecDeque<Vec<NetworkInterface>>>,
    calls: Arc<Mutex<u32>>,
}

impl SnapshotInterfaces {
    pub fn new(snapshots: Vec<Vec<NetworkInterface>>) -> (Self, Arc<Mutex<u32>>) {
        let calls = Arc::new(Mutex::new(0));
        let source = Self {
            snapshots: Mutex::new(snapshots.into()),
            calls: calls.clone(),
        };
        (source, calls)
    }
}

impl InterfaceSource for SnapshotInterfaces {
    fn interfaces(&self) -> anyhow::Result<Vec<NetworkInterface>> {
        *self.calls.lock().unwrap() += 1;
        let mut snapshots = self.snapshots.lock().unwrap();
        if snapshots.len() > 1 {
            Ok(snapshots.pop_front().unwrap_or_default())
        } else {
            Ok(snapshots.front().cloned().unwrap_or_default())
        }
    }
}

/// Source whose OS query always fails.
pub struct FailingInterfaces;

impl InterfaceSource for FailingInterfaces {
    fn interfaces(&self) -> anyhow::Result<Vec<NetworkInterface>> {
        anyhow::bail!("getifaddrs: operation not permitted")
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub sent: Arc<Mutex<Vec<Report>>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, report: &Report) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(report.clone());
        Ok(())
    }
}

pub struct RejectingNotifier;

#[async_trait]
impl Notifier for RejectingNotifier {
    async fn notify(&self, _report: &Report) -> Result<(), NotifyError> {
        Err(NotifyError::Status(reqwest::StatusCode::UNAUTHORIZED))
    }
}
