#![cfg(test)]
use std::net::Ipv4Addr;
use std::time::Duration;

use ipnotify_common::network::subnet::SubnetFilter;
use ipnotify_core::announce::announce;
use ipnotify_core::clock::TokioClock;
use ipnotify_core::discovery::{DiscoveryBudget, DiscoveryOutcome, RetryingDiscoverer};
use ipnotify_core::notifier::NotifyError;
use ipnotify_core::scanner::{InterfaceScanner, InterfaceSource, ScanError};
use tokio::time::Instant;

use crate::util::{FailingInterfaces, RecordingNotifier, RejectingNotifier, SnapshotInterfaces, eth1, lo, wlan0};

fn discoverer_over(source: impl InterfaceSource + 'static) -> RetryingDiscoverer {
    let scanner = InterfaceScanner::new(Box::new(source), SubnetFilter::default());
    RetryingDiscoverer::new(Box::new(scanner), Box::new(TokioClock))
}

/// Address present from the start: found on the first attempt, no time passes.
#[tokio::test(start_paused = true)]
async fn discovery_immediate_success() {
    let (source, calls) = SnapshotInterfaces::new(vec![vec![lo(), eth1(), wlan0()]]);
    let discoverer = discoverer_over(source);

    let start = Instant::now();
    let outcome = discoverer.discover(&DiscoveryBudget::default()).await;

    match outcome {
        DiscoveryOutcome::Found(addresses) => {
            assert_eq!(addresses.as_slice(), &[Ipv4Addr::new(192, 168, 1, 20)]);
        }
        other => panic!("Expected Found, received: {other:?}"),
    }
    assert_eq!(*calls.lock().unwrap(), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

/// DHCP finishes between the second and third attempt.
#[tokio::test(start_paused = true)]
async fn discovery_waits_for_dhcp() {
    let (source, calls) = SnapshotInterfaces::new(vec![
        vec![lo()],
        vec![lo(), eth1()],
        vec![lo(), eth1(), wlan0()],
    ]);
    let discoverer = discoverer_over(source);

    let start = Instant::now();
    let outcome = discoverer.discover(&DiscoveryBudget::default()).await;

    assert!(matches!(outcome, DiscoveryOutcome::Found(_)));
    assert_eq!(*calls.lock().unwrap(), 3);
    assert_eq!(start.elapsed(), Duration::from_secs(10));
}

/// No qualifying address ever shows up: the full minute is spent.
#[tokio::test(start_paused = true)]
async fn discovery_times_out_after_one_minute() {
    let (source, calls) = SnapshotInterfaces::new(vec![vec![lo(), eth1()]]);
    let discoverer = discoverer_over(source);

    let start = Instant::now();
    let outcome = discoverer.discover(&DiscoveryBudget::default()).await;

    match outcome {
        DiscoveryOutcome::Failed {
            last_error,
            elapsed,
            attempts,
        } => {
            assert_eq!(
                last_error,
                ScanError::NoMatchingAddress {
                    prefix: "192.168".to_string()
                }
            );
            assert!(elapsed >= Duration::from_secs(60));
            assert!(attempts >= 12);
        }
        other => panic!("Expected Failed, received: {other:?}"),
    }
    assert!(*calls.lock().unwrap() >= 12);
    assert_eq!(start.elapsed(), Duration::from_secs(60));
}

#[tokio::test(start_paused = true)]
async fn query_failure_survives_to_the_outcome() {
    let discoverer = discoverer_over(FailingInterfaces);
    let budget = DiscoveryBudget::new(Duration::from_secs(10), Duration::from_secs(5)).unwrap();

    let outcome = discoverer.discover(&budget).await;

    match outcome {
        DiscoveryOutcome::Failed { last_error, attempts, .. } => {
            assert!(matches!(last_error, ScanError::InterfaceQueryFailed(_)));
            assert_eq!(attempts, 3);
        }
        other => panic!("Expected Failed, received: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn announce_sends_exactly_one_success_report() {
    let (source, _) = SnapshotInterfaces::new(vec![vec![lo(), eth1(), wlan0()]]);
    let discoverer = discoverer_over(source);
    let notifier = RecordingNotifier::default();

    let report = announce(&discoverer, &DiscoveryBudget::default(), "host1", &notifier)
        .await
        .unwrap();

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], report);
    assert_eq!(report.title, "[host1] IP address notice");
    assert_eq!(
        report.body.lines().filter(|line| line.starts_with("- ")).collect::<Vec<_>>(),
        vec!["- 192.168.1.20"]
    );
}

#[tokio::test(start_paused = true)]
async fn announce_reports_failure_once() {
    let (source, _) = SnapshotInterfaces::new(vec![vec![lo()]]);
    let discoverer = discoverer_over(source);
    let notifier = RecordingNotifier::default();

    let report = announce(&discoverer, &DiscoveryBudget::default(), "host1", &notifier)
        .await
        .unwrap();

    assert_eq!(notifier.sent.lock().unwrap().len(), 1);
    assert_eq!(report.title, "[host1] IP address lookup failed");
    assert!(report.body.contains("no IPv4 address starting with 192.168"));
}

#[tokio::test(start_paused = true)]
async fn announce_surfaces_delivery_failure() {
    let (source, _) = SnapshotInterfaces::new(vec![vec![wlan0()]]);
    let discoverer = discoverer_over(source);

    let result = announce(&discoverer, &DiscoveryBudget::default(), "host1", &RejectingNotifier).await;

    assert!(matches!(result, Err(NotifyError::Status(status)) if status.as_u16() == 401));
}
