// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Prune stage: drop items the merge stage previously tracked that no
//! longer appear on every reachable server with access to their user and
//! library, and record a per-cycle tombstone for each drop. A single
//! reachable server reporting an item absent is enough to remove it — a
//! deletion on one server is authoritative. Tombstones exist only in memory
//! for the duration of one cycle; they are not persisted and do not survive
//! a restart.

use msr_core::{media_items_match, MediaIdentifiers, MediaItem, Series};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TombstoneKind {
 Item,
 Series,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tombstone {
 pub kind: TombstoneKind,
 pub identifiers: MediaIdentifiers,
}

/// `true` iff `identifiers` matches something in every one of `per_server`'s
/// lists. An empty `per_server` (no reachable server has access to this
/// user+library this cycle) is vacuously `true` — an unreachable library
/// cannot veto anything already in global state.
fn present_on_every_server(identifiers: &MediaIdentifiers, per_server: &[&[MediaIdentifiers]]) -> bool {
 per_server
 .iter()
 .all(|server_items| server_items.iter().any(|other| media_items_match(identifiers, other)))
}

/// Removes movies missing from at least one reachable, access-having
/// server and tombstones them. `per_server` holds one slice of identifiers
/// per such server.
pub fn prune_movies(existing: &mut Vec<MediaItem>, per_server: &[&[MediaIdentifiers]]) -> Vec<Tombstone> {
 let mut tombstones = Vec::new();
 existing.retain(|item| {
 let keep = present_on_every_server(&item.identifiers, per_server);
 if !keep {
 tombstones.push(Tombstone {
 kind: TombstoneKind::Item,
 identifiers: item.identifiers.clone(),
 });
 }
 keep
 });
 tombstones
}

/// Two-tier series pruning. `per_server` holds one slice of this
/// user+library's series (as reported by that server) per reachable,
/// access-having server.
///
/// Tier one: a series missing from at least one such server's series list
/// entirely is pruned whole, with a series-kind tombstone, so a lagging
/// server can't resurrect it episode-by-episode later this cycle.
///
/// Tier two: for a series present everywhere, its episodes are pruned
/// individually against the matching series' episode list on each server
/// that has it; a series left with no surviving episodes is pruned too.
pub fn prune_series(existing: &mut Vec<Series>, per_server: &[&[Series]]) -> Vec<Tombstone> {
 let mut tombstones = Vec::new();
 existing.retain_mut(|series| {
 let absent_somewhere = per_server
 .iter()
 .any(|server_series| !server_series.iter().any(|s| media_items_match(&series.identifiers, &s.identifiers)));
 if absent_somewhere {
 tombstones.push(Tombstone {
 kind: TombstoneKind::Series,
 identifiers: series.identifiers.clone(),
 });
 return false;
 }

 let matching_episodes: Vec<&[MediaItem]> = per_server
 .iter()
 .filter_map(|server_series| {
 server_series
 .iter()
 .find(|s| media_items_match(&series.identifiers, &s.identifiers))
 .map(|s| s.episodes.as_slice())
 })
 .collect();

 series.episodes.retain(|ep| {
 let keep = matching_episodes
 .iter()
 .all(|server_eps| server_eps.iter().any(|e| media_items_match(&ep.identifiers, &e.identifiers)));
 if !keep {
 tombstones.push(Tombstone {
 kind: TombstoneKind::Item,
 identifiers: ep.identifiers.clone(),
 });
 }
 keep
 });

 if series.is_empty() {
 tombstones.push(Tombstone {
 kind: TombstoneKind::Series,
 identifiers: series.identifiers.clone(),
 });
 false
 } else {
 true
 }
 });
 tombstones
}

#[cfg(test)]
#[path = "prune_tests.rs"]
mod tests;
