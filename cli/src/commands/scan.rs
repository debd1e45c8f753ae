use std::path::Path;

use anyhow::Context;

use super::load_config;
use crate::terminal::print;
use ipnotify_common::network::subnet::SubnetFilter;
use ipnotify_core::scanner::{AddressScanner, InterfaceScanner};

/// One scan, no retries, no notification. The config file is optional here.
pub fn scan(config_path: &Path, prefix: Option<String>) -> anyhow::Result<()> {
    let cfg = load_config(config_path, true)?;
    cfg.validate_discovery()?;

    let filter = match prefix {
        Some(prefix) if !prefix.trim().is_empty() => SubnetFilter::new(prefix),
        Some(_) => anyhow::bail!("the address prefix must not be empty"),
        None => cfg.discovery.subnet_filter(),
    };

    let scanner = InterfaceScanner::local(filter);
    let addresses = scanner
        .scan()
        .with_context(|| format!("scan for {} addresses failed", scanner.filter()))?;

    print::aligned_line("Found", format!("{} address(es)", addresses.len()));
    print::as_tree_one_level(addresses.as_slice());
    Ok(())
}
