// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single watchable unit: a movie, or one episode of a series.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::identifiers::MediaIdentifiers;
use crate::status::WatchedStatus;
use crate::sync::ServerSyncInfo;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
 pub identifiers: MediaIdentifiers,
 pub status: WatchedStatus,
 #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
 pub synced_to_servers: BTreeMap<String, ServerSyncInfo>,
}

impl MediaItem {
 pub fn new(identifiers: MediaIdentifiers, status: WatchedStatus) -> Self {
 Self {
 identifiers,
 status,
 synced_to_servers: BTreeMap::new(),
 }
 }

 /// whether this item's current status disagrees with the
 /// ledger entry for `server_id` ("recent change").
 pub fn has_recent_change_against(&self, server_id: &str) -> bool {
 self.synced_to_servers
 .get(server_id)
 .is_some_and(|info| info.is_recent_change_against(&self.status))
 }

 /// True if *any* server's ledger entry disagrees with the current status.
 /// Used by merge conflict resolution's recent-change rule, which
 /// considers a recent change against any server, not a specific one.
 pub fn has_any_recent_change(&self) -> bool {
 self.synced_to_servers
 .values()
 .any(|info| info.is_recent_change_against(&self.status))
 }

 pub fn stamp_synced(&mut self, server_id: &str, synced_at: i64) {
 self.synced_to_servers.insert(
 server_id.to_string(),
 ServerSyncInfo::new(synced_at, self.status),
 );
 }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
