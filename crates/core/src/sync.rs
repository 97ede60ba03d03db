// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-item, per-server sync ledger entry.

use serde::{Deserialize, Serialize};

use crate::status::WatchedStatus;

/// The snapshot of an item's global status at the moment it was last
/// confirmed equivalent (pushed to, or observed agreeing with) a server.
///
/// Keyed by server `machine_id` in [`crate::item::MediaItem::synced_to_servers`]
/// and [`crate::identifiers::MediaIdentifiers::synced_to_servers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSyncInfo {
 pub synced_at: i64,
 pub synced_status: WatchedStatus,
}

impl ServerSyncInfo {
 pub fn new(synced_at: i64, synced_status: WatchedStatus) -> Self {
 Self {
 synced_at,
 synced_status,
 }
 }

 /// True when the item's current status disagrees with what this ledger
 /// entry last recorded — a real user action since the last sync.
 pub fn is_recent_change_against(&self, current: &WatchedStatus) -> bool {
 self.synced_status.completed != current.completed
 }
}
