//! Discovery and reporting for `ipnotify`.
//!
//! * [`scanner`]: one pass over the host's interfaces, filtered to the target subnet.
//! * [`discovery`]: the bounded retry loop around the scanner.
//! * [`report`]: turns a discovery outcome into a notification title and body.
//! * [`notifier`]: delivers the report.
//! * [`announce`]: ties the above together for one run.

pub mod announce;
pub mod clock;
pub mod discovery;
pub mod notifier;
pub mod report;
pub mod scanner;
pub mod system;
