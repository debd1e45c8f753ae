//! # Address Discovery
//!
//! Repeats a [`AddressScanner::scan`] until it yields addresses or the
//! [`DiscoveryBudget`] runs out.
//!
//! The loop is a two-state machine. It stays in *polling* while attempts fail
//! and budget remains, and leaves it exactly once: either with
//! [`DiscoveryOutcome::Found`] as soon as a scan succeeds, or with
//! [`DiscoveryOutcome::Failed`] when a failed attempt finishes after the budget
//! is spent. The budget is only checked after an attempt, so an attempt is
//! never cut short and no sleep follows the final check.

use std::time::Duration;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::clock::Clock;
use crate::scanner::{AddressList, AddressScanner, ScanError};

pub const DEFAULT_MAX_DURATION: Duration = Duration::from_secs(60);
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BudgetError {
    #[error("the maximum discovery duration must be greater than zero")]
    ZeroDuration,
    #[error("the retry interval must be greater than zero")]
    ZeroInterval,
}

/// How long to keep trying, and how long to wait between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryBudget {
    max_duration: Duration,
    retry_interval: Duration,
}

impl DiscoveryBudget {
    pub fn new(max_duration: Duration, retry_interval: Duration) -> Result<Self, BudgetError> {
        if max_duration.is_zero() {
            return Err(BudgetError::ZeroDuration);
        }
        if retry_interval.is_zero() {
            return Err(BudgetError::ZeroInterval);
        }
        Ok(Self {
            max_duration,
            retry_interval,
        })
    }

    pub fn max_duration(&self) -> Duration {
        self.max_duration
    }

    pub fn retry_interval(&self) -> Duration {
        self.retry_interval
    }
}

impl Default for DiscoveryBudget {
    fn default() -> Self {
        Self {
            max_duration: DEFAULT_MAX_DURATION,
            retry_interval: DEFAULT_RETRY_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    Found(AddressList),
    Failed {
        /// Error of the final attempt.
        last_error: ScanError,
        elapsed: Duration,
        attempts: u32,
    },
}

/// Drives the scan-sleep loop.
pub struct RetryingDiscoverer {
    scanner: Box<dyn AddressScanner>,
    clock: Box<dyn Clock>,
}

impl RetryingDiscoverer {
    pub fn new(scanner: Box<dyn AddressScanner>, clock: Box<dyn Clock>) -> Self {
        Self { scanner, clock }
    }

    pub async fn discover(&self, budget: &DiscoveryBudget) -> DiscoveryOutcome {
        let start = self.clock.now();
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;

            let last_error = match self.scanner.scan() {
                Ok(addresses) => {
                    info!(attempts, "Found {} qualifying address(es)", addresses.len());
                    return DiscoveryOutcome::Found(addresses);
                }
                Err(e) => e,
            };

            let elapsed = self.clock.now().saturating_duration_since(start);
            if elapsed >= budget.max_duration() {
                error!(
                    attempts,
                    "No qualifying address within {:.1}s: {}",
                    elapsed.as_secs_f64(),
                    last_error
                );
                return DiscoveryOutcome::Failed {
                    last_error,
                    elapsed,
                    attempts,
                };
            }

            warn!(
                attempt = attempts,
                "{}, retrying in {}s",
                last_error,
                budget.retry_interval().as_secs_f64()
            );
            self.clock.sleep(budget.retry_interval()).await;
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
