use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;

use super::load_config;
use crate::terminal::print;
use ipnotify_core::announce::announce;
use ipnotify_core::clock::TokioClock;
use ipnotify_core::discovery::{DiscoveryBudget, RetryingDiscoverer};
use ipnotify_core::notifier::{GotifyNotifier, Notifier, NotifyError};
use ipnotify_core::report::Report;
use ipnotify_core::scanner::InterfaceScanner;
use ipnotify_core::system;

/// Prints the report instead of delivering it.
struct TerminalNotifier;

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn notify(&self, report: &Report) -> Result<(), NotifyError> {
        print::notification(&report.title, &report.body);
        Ok(())
    }
}

pub async fn notify(config_path: &Path, dry_run: bool, quiet: bool) -> anyhow::Result<()> {
    // The file is optional for dry runs.
    let cfg = load_config(config_path, dry_run)?;
    if dry_run {
        cfg.validate_discovery()?;
    } else {
        cfg.validate()?;
    }

    let hostname = system::hostname_or_placeholder(system::hostname());
    let budget = DiscoveryBudget::default();

    if !quiet {
        print::aligned_line("Host", &hostname);
        print::aligned_line("Prefix", &cfg.discovery.subnet_prefix);
        print::aligned_line(
            "Budget",
            format!(
                "{}s, retry every {}s",
                budget.max_duration().as_secs(),
                budget.retry_interval().as_secs()
            ),
        );
    }

    let scanner = InterfaceScanner::local(cfg.discovery.subnet_filter());
    let discoverer = RetryingDiscoverer::new(Box::new(scanner), Box::new(TokioClock));

    let notifier: Box<dyn Notifier> = if dry_run {
        Box::new(TerminalNotifier)
    } else {
        Box::new(GotifyNotifier::from_config(&cfg.gotify)?)
    };

    announce(&discoverer, &budget, &hostname, notifier.as_ref())
        .await
        .context("failed to send notification")?;

    if !dry_run {
        print::print_status("Notification sent");
    }
    Ok(())
}
