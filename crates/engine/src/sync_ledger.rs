// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mark-Already-Synced pass: stamp the ledger for any item whose status
//! already agrees with what a server reports, so the first cycle after
//! adoption does not push redundant writes.

use msr_core::{media_items_match, MediaItem, Series};

/// Stamps `global`'s ledger entry for `server_id` wherever a matching
/// server item's status is "effectively identical" (completed equal, and
/// if not completed, `|time_ms diff| < 60_000`).
pub fn mark_already_synced_movies(global: &mut [MediaItem], server_items: &[MediaItem], server_id: &str, now: i64) {
 for item in global.iter_mut() {
 let agrees = server_items
 .iter()
 .find(|s| media_items_match(&s.identifiers, &item.identifiers))
 .is_some_and(|s| s.status.effectively_equal(&item.status));
 if agrees {
 item.stamp_synced(server_id, now);
 }
 }
}

/// Series analogue: matches series by identity, then marks episodes.
pub fn mark_already_synced_series(global: &mut [Series], server_series: &[Series], server_id: &str, now: i64) {
 for series in global.iter_mut() {
 if let Some(matched) = server_series
 .iter()
 .find(|s| media_items_match(&s.identifiers, &series.identifiers))
 {
 mark_already_synced_movies(&mut series.episodes, &matched.episodes, server_id, now);
 }
 }
}

#[cfg(test)]
#[path = "sync_ledger_tests.rs"]
mod tests;
