use std::panic;

use pnet::datalink::{self, NetworkInterface};

use super::InterfaceSource;

/// Interfaces of the running host, as reported by `pnet`.
pub struct LocalInterfaces;

impl InterfaceSource for LocalInterfaces {
    fn interfaces(&self) -> anyhow::Result<Vec<NetworkInterface>> {
        // pnet swallows getifaddrs failures on unix and panics on some other
        // platforms, so both are turned into errors here.
        let interfaces = panic::catch_unwind(datalink::interfaces)
            .map_err(|_| anyhow::anyhow!("interface enumeration aborted"))?;

        if interfaces.is_empty() {
            anyhow::bail!("the operating system reported no network interfaces");
        }
        Ok(interfaces)
    }
}
