use anyhow::Context;
use tracing::warn;

/// Stands in for the hostname when the OS cannot provide one.
pub const UNKNOWN_HOST: &str = "unknown-host";

pub fn hostname() -> anyhow::Result<String> {
    let name = sys_info::hostname().context("failed to read hostname")?;
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("the operating system returned an empty hostname");
    }
    Ok(name.to_string())
}

/// Turns a hostname lookup into the name used in reports.
///
/// A failed lookup or a blank name is logged and replaced by [`UNKNOWN_HOST`].
pub fn hostname_or_placeholder(lookup: anyhow::Result<String>) -> String {
    match lookup {
        Ok(name) if !name.trim().is_empty() => name.trim().to_string(),
        Ok(_) => {
            warn!("hostname is empty, reporting as {UNKNOWN_HOST}");
            UNKNOWN_HOST.to_string()
        }
        Err(e) => {
            warn!("{e:#}, reporting as {UNKNOWN_HOST}");
            UNKNOWN_HOST.to_string()
        }
    }
}
