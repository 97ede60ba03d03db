// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::sync::ServerSyncInfo;

#[test]
fn no_ledger_entry_means_no_recent_change() {
 let item = MediaItem::new(MediaIdentifiers::new(), WatchedStatus::completed(None));
 assert!(!item.has_recent_change_against("srv-a"));
}

#[test]
fn unmark_after_sync_is_a_recent_change() {
 let mut item = MediaItem::new(MediaIdentifiers::new(), WatchedStatus::completed(None));
 item.synced_to_servers.insert(
 "srv-a".into(),
 ServerSyncInfo::new(1, WatchedStatus::completed(None)),
 );
 item.status.completed = false;
 assert!(item.has_recent_change_against("srv-a"));
 assert!(item.has_any_recent_change());
}

#[test]
fn stamp_synced_records_current_status() {
 let mut item = MediaItem::new(MediaIdentifiers::new(), WatchedStatus::in_progress(1000, Some(5)));
 item.stamp_synced("srv-a", 42);
 let entry = item.synced_to_servers.get("srv-a").unwrap();
 assert_eq!(entry.synced_at, 42);
 assert_eq!(entry.synced_status, item.status);
}
