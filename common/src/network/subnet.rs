use std::fmt;
use std::net::Ipv4Addr;

pub const DEFAULT_SUBNET_PREFIX: &str = "192.168";

/// Textual prefix an address must start with to be reported.
///
/// The match is done on the dotted-quad text, not on network bits, so
/// `"192.16"` also accepts `192.168.1.1`. End the prefix on a dot when the
/// octet boundary matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetFilter {
    prefix: String,
}

impl SubnetFilter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn matches(&self, ip: &Ipv4Addr) -> bool {
        ip.to_string().starts_with(&self.prefix)
    }
}

impl Default for SubnetFilter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBNET_PREFIX)
    }
}

impl fmt::Display for SubnetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix)
    }
}
