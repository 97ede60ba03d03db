// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded concurrency for per-server work. Fetch and per-server diff/push
//! run through here; merge, prune, and the already-synced pass stay
//! single-threaded and are never routed through a pool.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Default worker pool size when no override is configured.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Runs `f` over every item in `items` with at most `concurrency` futures
/// in flight at once. Results are returned in completion order, not input
/// order — callers that need to associate a result with its input should
/// have `f` carry the key through into its output.
///
/// A panicking task is dropped from the result set; it does not unwind
/// the caller. This mirrors per-server isolation: one server's worker
/// misbehaving must not take down the others still in flight.
// Allow expect here as the semaphore is never closed while this function holds it
#[allow(clippy::expect_used)]
pub async fn run_bounded<T, R, F, Fut>(items: Vec<T>, concurrency: usize, f: F) -> Vec<R>
where
 T: Send + 'static,
 R: Send + 'static,
 F: Fn(T) -> Fut + Send + Sync + 'static,
 Fut: Future<Output = R> + Send + 'static,
{
 let concurrency = concurrency.max(1);
 let semaphore = Arc::new(Semaphore::new(concurrency));
 let f = Arc::new(f);
 let mut set = JoinSet::new();

 for item in items {
 let semaphore = semaphore.clone();
 let f = f.clone();
 set.spawn(async move {
 let _permit = semaphore
 .acquire_owned()
 .await
 .expect("pool semaphore is never closed while tasks are spawning");
 f(item).await
 });
 }

 let mut results = Vec::new();
 while let Some(joined) = set.join_next().await {
 if let Ok(result) = joined {
 results.push(result);
 }
 }
 results
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
