// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture builders shared across crates' tests.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]` so
//! `msr-drivers`, `msr-storage`, and `msr-engine` can depend on
//! `msr-core`'s `test-support` feature instead of duplicating these.

use crate::identifiers::MediaIdentifiers;
use crate::item::MediaItem;
use crate::series::Series;
use crate::status::WatchedStatus;
use crate::sync::ServerSyncInfo;

/// A [`MediaIdentifiers`] carrying a single external id, enough to be
/// matchable by rule 1.
pub fn identifiers_with_imdb(imdb_id: impl Into<String>) -> MediaIdentifiers {
 MediaIdentifiers {
 imdb_id: Some(imdb_id.into()),
 ..Default::default()
 }
}

/// A [`MediaIdentifiers`] carrying a single filesystem location, matchable
/// by rule 3.
pub fn identifiers_with_location(location: impl Into<String>) -> MediaIdentifiers {
 MediaIdentifiers {
 locations: vec![location.into()],
 ..Default::default()
 }
}

pub fn movie(imdb_id: impl Into<String>, status: WatchedStatus) -> MediaItem {
 MediaItem::new(identifiers_with_imdb(imdb_id), status)
}

pub fn episode(imdb_id: impl Into<String>, status: WatchedStatus) -> MediaItem {
 movie(imdb_id, status)
}

pub fn series(imdb_id: impl Into<String>, episodes: Vec<MediaItem>) -> Series {
 Series {
 identifiers: identifiers_with_imdb(imdb_id),
 episodes,
 }
}

/// Stamps `item` as synced to `server_id` at `synced_at`, recording its
/// *current* status as the ledger entry — i.e. in agreement, not drifted.
pub fn stamp_in_sync(item: &mut MediaItem, server_id: &str, synced_at: i64) {
 item.synced_to_servers
 .insert(server_id.to_string(), ServerSyncInfo::new(synced_at, item.status));
}

/// Proptest strategies for property tests that need arbitrary identifiers
/// or statuses (match symmetry, merge monotonicity).
pub mod strategies {
 use super::*;
 use proptest::prelude::*;

 pub fn arb_identifiers() -> impl Strategy<Value = MediaIdentifiers> {
 (
 proptest::option::of("[a-z0-9]{0,6}"),
 proptest::option::of("[a-z0-9]{0,6}"),
 proptest::option::of("[a-z0-9]{0,6}"),
 proptest::option::of("[a-z:/0-9]{0,16}"),
 proptest::collection::vec("[a-zA-Z0-9_./]{0,12}", 0..3),
 )
 .prop_map(|(imdb_id, tvdb_id, tmdb_id, native_guid, locations)| MediaIdentifiers {
 imdb_id,
 tvdb_id,
 tmdb_id,
 native_guid,
 locations,
 ..Default::default()
 })
 }

 pub fn arb_status() -> impl Strategy<Value = WatchedStatus> {
 (any::<bool>(), 0i64..7_200_000, proptest::option::of(0i64..2_000_000_000)).prop_map(
 |(completed, time_ms, last_viewed_at)| WatchedStatus {
 completed,
 time_ms,
 last_viewed_at,
 },
 )
 }
}
