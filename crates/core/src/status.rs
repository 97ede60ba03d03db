// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Watch status and the "in progress" threshold.

use serde::{Deserialize, Serialize};

/// Progress below this many milliseconds is treated as "not started" for
/// diff purposes, and progress deltas below it are not worth a
/// round trip to a server.
pub const PROGRESS_THRESHOLD_MS: i64 = 60_000;

/// Watch status of a single movie or episode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchedStatus {
 pub completed: bool,
 #[serde(default)]
 pub time_ms: i64,
 #[serde(default, skip_serializing_if = "Option::is_none")]
 pub last_viewed_at: Option<i64>,
}

impl WatchedStatus {
 pub fn completed(last_viewed_at: Option<i64>) -> Self {
 Self {
 completed: true,
 time_ms: 0,
 last_viewed_at,
 }
 }

 pub fn in_progress(time_ms: i64, last_viewed_at: Option<i64>) -> Self {
 Self {
 completed: false,
 time_ms,
 last_viewed_at,
 }
 }

 /// progress below 60_000ms counts as "not started".
 pub fn is_started(&self) -> bool {
 self.completed || self.time_ms >= PROGRESS_THRESHOLD_MS
 }

 fn viewed_at_or_zero(&self) -> i64 {
 self.last_viewed_at.unwrap_or(0)
 }

 /// rule 2: larger `last_viewed_at` wins, absent treated as 0.
 pub fn timestamp_precedes(&self, other: &WatchedStatus) -> bool {
 self.viewed_at_or_zero() < other.viewed_at_or_zero()
 }

 /// Two statuses are "effectively identical" when their completed flags
 /// match, and when not completed the progress delta is below the
 /// threshold.
 pub fn effectively_equal(&self, other: &WatchedStatus) -> bool {
 if self.completed != other.completed {
 return false;
 }
 self.completed || (self.time_ms - other.time_ms).abs() < PROGRESS_THRESHOLD_MS
 }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
