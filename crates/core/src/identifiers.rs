// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-server identity: the bag of identifiers used to recognize "the same
//! item" across independently administered media servers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sync::ServerSyncInfo;

/// Identifiers carried by a movie, episode, or playlist entry.
///
/// At least one of `native_guid`, an external id, or `locations` must be
/// non-empty for the item to be matchable (see [`MediaIdentifiers::is_matchable`]).
/// `synced_to_servers` lives here (rather than only on [`crate::item::MediaItem`])
/// so that bare playlist entries carry their own ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaIdentifiers {
 #[serde(default, skip_serializing_if = "Option::is_none")]
 pub title: Option<String>,
 #[serde(default, skip_serializing_if = "Vec::is_empty")]
 pub locations: Vec<String>,
 #[serde(default, skip_serializing_if = "Option::is_none")]
 pub imdb_id: Option<String>,
 #[serde(default, skip_serializing_if = "Option::is_none")]
 pub tvdb_id: Option<String>,
 #[serde(default, skip_serializing_if = "Option::is_none")]
 pub tmdb_id: Option<String>,
 #[serde(default, skip_serializing_if = "Option::is_none")]
 pub native_guid: Option<String>,
 #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
 pub synced_to_servers: BTreeMap<String, ServerSyncInfo>,
}

impl MediaIdentifiers {
 pub fn new() -> Self {
 Self::default()
 }

 /// invariant: unmatchable items (no native guid, no external id,
 /// no locations) are skipped on ingest.
 pub fn is_matchable(&self) -> bool {
 self.native_guid.is_some()
 || self.imdb_id.is_some()
 || self.tvdb_id.is_some()
 || self.tmdb_id.is_some()
 || !self.locations.is_empty()
 }

 /// The comparable key for a location: its last path segment, treating
 /// both `/` and `\` as separators.
 pub fn location_basenames(&self) -> impl Iterator<Item = &str> {
 self.locations.iter().map(|l| basename(l))
 }

 /// The comparable form of `native_guid`: the substring after the last
 /// `://`, or the full string if there is no scheme separator.
 pub fn native_guid_suffix(&self) -> Option<&str> {
 self.native_guid.as_deref().map(guid_suffix)
 }

 /// Fold `other`'s identifiers into `self` without discarding anything
 /// `self` already has.
 pub fn enrich_from(&mut self, other: &MediaIdentifiers) {
 if self.imdb_id.is_none() {
 self.imdb_id = other.imdb_id.clone();
 }
 if self.tvdb_id.is_none() {
 self.tvdb_id = other.tvdb_id.clone();
 }
 if self.tmdb_id.is_none() {
 self.tmdb_id = other.tmdb_id.clone();
 }
 for loc in &other.locations {
 if !self.locations.contains(loc) {
 self.locations.push(loc.clone());
 }
 }
 }
}

fn basename(path: &str) -> &str {
 let normalized_end = path.rfind(['/', '\\']).map(|i| i + 1).unwrap_or(0);
 &path[normalized_end..]
}

fn guid_suffix(guid: &str) -> &str {
 match guid.rfind("://") {
 Some(idx) => &guid[idx + 3..],
 None => guid,
 }
}

#[cfg(test)]
#[path = "identifiers_tests.rs"]
mod tests;
