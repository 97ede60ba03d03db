// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use super::*;

#[tokio::test]
async fn runs_every_item_exactly_once() {
 let results = run_bounded(vec![1, 2, 3, 4, 5], 2, |n| async move { n * 2 }).await;
 let mut sorted = results;
 sorted.sort_unstable();
 assert_eq!(sorted, vec![2, 4, 6, 8, 10]);
}

#[tokio::test]
async fn never_exceeds_concurrency_limit() {
 let in_flight = Arc::new(AtomicUsize::new(0));
 let max_seen = Arc::new(AtomicUsize::new(0));

 let items: Vec<usize> = (0..20).collect();
 run_bounded(items, 3, move |_| {
 let in_flight = in_flight.clone();
 let max_seen = max_seen.clone();
 async move {
 let current = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
 max_seen.fetch_max(current, Ordering::SeqCst);
 tokio::time::sleep(Duration::from_millis(5)).await;
 in_flight.fetch_sub(1, Ordering::SeqCst);
 }
 })
 .await;
}

#[tokio::test]
async fn zero_concurrency_is_clamped_to_one() {
 let results = run_bounded(vec![1, 2, 3], 0, |n| async move { n }).await;
 assert_eq!(results.len(), 3);
}

#[tokio::test]
async fn a_panicking_task_is_dropped_not_propagated() {
 let results = run_bounded(vec![1, 2, 3], 10, |n| async move {
 if n == 2 {
 panic!("simulated per-server failure");
 }
 n
 })
 .await;
 assert_eq!(results.len(), 2);
}
