// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Merge stage: fold a server's snapshot into the global state, applying
//! conflict resolution and honoring this cycle's tombstones. Identifier
//! enrichment only happens on the "keep existing" branch, via
//! [`MediaIdentifiers::enrich_from`].

use msr_core::{media_items_match, MediaIdentifiers, MediaItem, Series};

use crate::prune::{Tombstone, TombstoneKind};

fn is_tombstoned(identifiers: &MediaIdentifiers, tombstones: &[Tombstone], kind: TombstoneKind) -> bool {
 tombstones
 .iter()
 .any(|t| t.kind == kind && media_items_match(identifiers, &t.identifiers))
}

/// Applies conflict resolution, in order: recent-change precedence,
/// timestamp precedence, completion precedence, progress precedence, else
/// keep existing. Returns `true` when `incoming` should replace `existing`.
fn incoming_wins(existing: &MediaItem, incoming: &MediaItem) -> bool {
 let existing_recent = existing.has_any_recent_change();
 let incoming_recent = incoming.has_any_recent_change();
 if incoming_recent != existing_recent {
 return incoming_recent;
 }

 if existing.status.timestamp_precedes(&incoming.status) {
 return true;
 }
 if incoming.status.timestamp_precedes(&existing.status) {
 return false;
 }

 if !existing.status.completed && incoming.status.completed {
 return true;
 }
 if existing.status.completed && !incoming.status.completed {
 return false;
 }

 if !existing.status.completed && !incoming.status.completed {
 return incoming.status.time_ms > existing.status.time_ms;
 }

 false
}

/// Folds one incoming item into `target`, matching by identity.
/// Skips items with no usable identifier and items matching a
/// current-cycle tombstone, preventing a lagging server from resurrecting
/// a just-deleted item.
pub fn merge_item_into_list(target: &mut Vec<MediaItem>, incoming: MediaItem, tombstones: &[Tombstone]) {
 if !incoming.identifiers.is_matchable() {
 tracing::warn!("skipping item with no usable identifier during merge");
 return;
 }
 if is_tombstoned(&incoming.identifiers, tombstones, TombstoneKind::Item) {
 return;
 }

 if let Some(existing) = target
 .iter_mut()
 .find(|t| media_items_match(&t.identifiers, &incoming.identifiers))
 {
 if incoming_wins(existing, &incoming) {
 *existing = incoming;
 } else {
 existing.identifiers.enrich_from(&incoming.identifiers);
 }
 return;
 }

 target.push(incoming);
}

/// Folds one incoming series into `target`: matches (or creates) the
/// series by identity, then merges episodes into it. Skips a series that
/// matches a current-cycle series-level tombstone, and skips individual
/// episodes that match an item-level tombstone.
pub fn merge_series_into_list(target: &mut Vec<Series>, incoming: Series, tombstones: &[Tombstone]) {
 if is_tombstoned(&incoming.identifiers, tombstones, TombstoneKind::Series) {
 return;
 }

 let idx = target
 .iter()
 .position(|s| media_items_match(&s.identifiers, &incoming.identifiers))
 .unwrap_or_else(|| {
 target.push(Series::new(incoming.identifiers.clone()));
 target.len() - 1
 });

 let existing = &mut target[idx];
 for episode in incoming.episodes {
 merge_item_into_list(&mut existing.episodes, episode, tombstones);
 }
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
