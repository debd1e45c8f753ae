use std::net::Ipv4Addr;

use pnet::datalink::NetworkInterface;

use crate::network::subnet::SubnetFilter;
use crate::utils::interface::NetworkInterfaceExtension;

/// Collects every IPv4, non-loopback address that passes `filter`.
///
/// Addresses keep the order in which the interfaces and their address lists
/// were enumerated. Interface flags are not consulted: an address is judged
/// on its own, so a down or point-to-point interface still contributes.
pub fn qualifying_addresses(
    interfaces: &[NetworkInterface],
    filter: &SubnetFilter,
) -> Vec<Ipv4Addr> {
    interfaces
        .iter()
        .flat_map(|interface| interface.get_ipv4_addrs())
        .filter(|ip| is_qualifying(ip, filter))
        .collect()
}

pub fn is_qualifying(ip: &Ipv4Addr, filter: &SubnetFilter) -> bool {
    !ip.is_loopback() && filter.matches(ip)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
