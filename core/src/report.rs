use std::fmt::Write;

use crate::discovery::DiscoveryOutcome;

/// Title and body of the single notification sent per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub body: String,
}

impl Report {
    pub fn from_outcome(hostname: &str, outcome: &DiscoveryOutcome) -> Self {
        match outcome {
            DiscoveryOutcome::Found(addresses) => {
                let mut body = format!("Host: {hostname}\nDiscovered the following IP addresses:\n");
                for ip in addresses {
                    let _ = writeln!(body, "- {ip}");
                }
                Self {
                    title: format!("[{hostname}] IP address notice"),
                    body,
                }
            }
            DiscoveryOutcome::Failed {
                last_error,
                elapsed,
                attempts,
            } => Self {
                title: format!("[{hostname}] IP address lookup failed"),
                body: format!(
                    "Failed to obtain an IP address: gave up after {attempts} attempt(s) in {:.0}s. Last error: {last_error}",
                    elapsed.as_secs_f64()
                ),
            },
        }
    }
}
