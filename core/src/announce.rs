//! # Announce
//!
//! The whole run in one call: discover once, build the report, hand it to the
//! notifier once.

use tracing::info;

use crate::discovery::{DiscoveryBudget, RetryingDiscoverer};
use crate::notifier::{Notifier, NotifyError};
use crate::report::Report;

/// Returns the report that was delivered.
pub async fn announce(
    discoverer: &RetryingDiscoverer,
    budget: &DiscoveryBudget,
    hostname: &str,
    notifier: &dyn Notifier,
) -> Result<Report, NotifyError> {
    let outcome = discoverer.discover(budget).await;
    let report = Report::from_outcome(hostname, &outcome);

    notifier.notify(&report).await?;
    info!(title = %report.title, "notification delivered");
    Ok(report)
}
