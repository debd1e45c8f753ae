//! The single-attempt **address scan**.
//!
//! A scan asks an [`InterfaceSource`] for the current interfaces and keeps the
//! qualifying IPv4 addresses. It never retries and never waits; that belongs to
//! [`crate::discovery`].
//!
//! The OS query sits behind [`InterfaceSource`] so the filtering rules can be
//! exercised against hand-built interfaces.

use std::net::Ipv4Addr;
use std::slice;

use ipnotify_common::network::interface::qualifying_addresses;
use ipnotify_common::network::subnet::SubnetFilter;
use pnet::datalink::NetworkInterface;
use thiserror::Error;
use tracing::debug;

mod local;

pub use local::LocalInterfaces;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The OS could not enumerate its network interfaces.
    #[error("failed to enumerate network interfaces: {0}")]
    InterfaceQueryFailed(String),
    /// Enumeration worked but no address carries the wanted prefix.
    #[error("no IPv4 address starting with {prefix} is assigned to this host")]
    NoMatchingAddress { prefix: String },
}

/// Non-empty list of discovered addresses, in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressList(Vec<Ipv4Addr>);

impl AddressList {
    /// Returns `None` for an empty list.
    pub fn new(addresses: Vec<Ipv4Addr>) -> Option<Self> {
        if addresses.is_empty() {
            None
        } else {
            Some(Self(addresses))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Ipv4Addr> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Ipv4Addr] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a AddressList {
    type Item = &'a Ipv4Addr;
    type IntoIter = slice::Iter<'a, Ipv4Addr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Where interfaces come from.
pub trait InterfaceSource: Send + Sync {
    fn interfaces(&self) -> anyhow::Result<Vec<NetworkInterface>>;
}

/// One scan attempt.
pub trait AddressScanner: Send + Sync {
    fn scan(&self) -> Result<AddressList, ScanError>;
}

pub struct InterfaceScanner {
    source: Box<dyn InterfaceSource>,
    filter: SubnetFilter,
}

impl InterfaceScanner {
    pub fn new(source: Box<dyn InterfaceSource>, filter: SubnetFilter) -> Self {
        Self { source, filter }
    }

    /// Scanner over the live interfaces of this machine.
    pub fn local(filter: SubnetFilter) -> Self {
        Self::new(Box::new(LocalInterfaces), filter)
    }

    pub fn filter(&self) -> &SubnetFilter {
        &self.filter
    }
}

impl AddressScanner for InterfaceScanner {
    fn scan(&self) -> Result<AddressList, ScanError> {
        let interfaces = self
            .source
            .interfaces()
            .map_err(|e| ScanError::InterfaceQueryFailed(format!("{e:#}")))?;
        debug!("Identified {} network interface(s)", interfaces.len());

        AddressList::new(qualifying_addresses(&interfaces, &self.filter)).ok_or_else(|| {
            ScanError::NoMatchingAddress {
                prefix: self.filter.prefix().to_string(),
            }
        })
    }
}
