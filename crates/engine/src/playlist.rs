// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The playlist reconciliation pipeline: deletions detected first so a
//! lagging server can't resurrect an item another server already removed,
//! then additions merged, then a Mark-Already-Synced pass, then per-server
//! actions computed and pushed.

use std::collections::HashMap;

use msr_core::{media_items_match, MediaIdentifiers, PlaylistState, ServerSyncInfo, UserPlaylists, WatchedStatus};
use msr_drivers::{DriverError, ServerDriver};

/// Items removed from the global playlist state this cycle, keyed by
/// `(user, playlist title)`, so the merge phase doesn't re-add something a
/// deletion pass just took out.
#[derive(Debug, Default)]
pub struct TrashedItems {
 entries: HashMap<(String, String), Vec<MediaIdentifiers>>,
}

impl TrashedItems {
 pub fn new() -> Self {
 Self::default()
 }

 pub fn record(&mut self, user: &str, title: &str, identifiers: MediaIdentifiers) {
 self.entries
 .entry((user.to_string(), title.to_string()))
 .or_default()
 .push(identifiers);
 }

 pub fn contains(&self, user: &str, title: &str, identifiers: &MediaIdentifiers) -> bool {
 self.entries
 .get(&(user.to_string(), title.to_string()))
 .is_some_and(|items| items.iter().any(|t| media_items_match(t, identifiers)))
 }
}

/// One per-server action the Playlist Reconciler wants applied.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaylistAction {
 CreatePlaylist { title: String },
 AddItem { title: String, item: MediaIdentifiers },
 RemoveItem { title: String, item: MediaIdentifiers },
 DeletePlaylist { title: String },
}

/// Phase 1: drop any global item that was previously confirmed synced to
/// `server_id` but is no longer present there, registering it in `trashed`
/// so phase 2 doesn't bring it right back.
pub fn detect_deletions(
 global: &mut PlaylistState,
 server_snapshot: &HashMap<String, UserPlaylists>,
 server_id: &str,
 trashed: &mut TrashedItems,
) {
 for (user, user_playlists) in global.users.iter_mut() {
 let server_user = server_snapshot.get(user);
 for (title, playlist) in user_playlists.playlists.iter_mut() {
 let server_items: &[MediaIdentifiers] = server_user
 .and_then(|u| u.playlists.get(title))
 .map(|p| p.items.as_slice())
 .unwrap_or(&[]);

 playlist.items.retain(|item| {
 if !item.synced_to_servers.contains_key(server_id) {
 return true;
 }
 let still_present = server_items.iter().any(|s| media_items_match(s, item));
 if !still_present {
 trashed.record(user, title, item.clone());
 }
 still_present
 });
 }
 }
}

fn merge_playlist_item(target: &mut Vec<MediaIdentifiers>, incoming: MediaIdentifiers) {
 if !incoming.is_matchable() {
 return;
 }
 if let Some(existing) = target.iter_mut().find(|t| media_items_match(t, &incoming)) {
 existing.enrich_from(&incoming);
 } else {
 target.push(incoming);
 }
}

/// Phase 2: fold the server's playlists into the global state, skipping
/// anything `trashed` just removed.
pub fn merge_additions(global: &mut PlaylistState, server_snapshot: HashMap<String, UserPlaylists>, trashed: &TrashedItems) {
 for (user, user_playlists) in server_snapshot {
 let target_user = global.user_mut(&user);
 for (title, playlist) in user_playlists.playlists {
 let target_items = &mut target_user.playlist_mut(&title).items;
 for item in playlist.items {
 if trashed.contains(&user, &title, &item) {
 continue;
 }
 merge_playlist_item(target_items, item);
 }
 }
 }
}

/// Phase 3: stamp a fixed presence marker (not a real watch status) for
/// any global item a server already carries in the same
/// playlist, so the next cycle doesn't re-push it.
pub fn mark_already_synced(global: &mut PlaylistState, server_snapshot: &HashMap<String, UserPlaylists>, server_id: &str, now: i64) {
 for (user, user_playlists) in global.users.iter_mut() {
 let Some(server_user) = server_snapshot.get(user) else {
 continue;
 };
 for (title, playlist) in user_playlists.playlists.iter_mut() {
 let Some(server_playlist) = server_user.playlists.get(title) else {
 continue;
 };
 for item in playlist.items.iter_mut() {
 if server_playlist.items.iter().any(|s| media_items_match(s, item)) {
 item.synced_to_servers
 .insert(server_id.to_string(), ServerSyncInfo::new(now, WatchedStatus::completed(None)));
 }
 }
 }
 }
}

/// Phase 4: the per-user actions needed to bring `server_id` in line with
/// the (already merged, already marked) global playlist state.
pub fn compute_actions(
 global: &PlaylistState,
 server_snapshot: &HashMap<String, UserPlaylists>,
 server_id: &str,
) -> HashMap<String, Vec<PlaylistAction>> {
 let mut out: HashMap<String, Vec<PlaylistAction>> = HashMap::new();

 for (user, global_user) in &global.users {
 let Some(server_user) = server_snapshot.get(user) else {
 continue;
 };
 let mut actions = Vec::new();

 for (title, playlist) in &global_user.playlists {
 if !server_user.playlists.contains_key(title) {
 actions.push(PlaylistAction::CreatePlaylist { title: title.clone() });
 }

 let server_items = server_user
 .playlists
 .get(title)
 .map(|p| p.items.as_slice())
 .unwrap_or(&[]);

 for item in &playlist.items {
 let already_synced = item.synced_to_servers.contains_key(server_id);
 let present_on_server = server_items.iter().any(|s| media_items_match(s, item));
 if !already_synced && !present_on_server {
 actions.push(PlaylistAction::AddItem {
 title: title.clone(),
 item: item.clone(),
 });
 }
 }
 }

 for (title, server_playlist) in &server_user.playlists {
 // A server playlist with no global counterpart at all still only
 // yields per-item removals here — whole-playlist deletion is wired
 // through the driver but not triggered by this baseline diff.
 let global_items: &[MediaIdentifiers] = global_user
 .playlists
 .get(title)
 .map(|p| p.items.as_slice())
 .unwrap_or(&[]);
 for server_item in &server_playlist.items {
 if !global_items.iter().any(|g| media_items_match(g, server_item)) {
 actions.push(PlaylistAction::RemoveItem {
 title: title.clone(),
 item: server_item.clone(),
 });
 }
 }
 }

 if !actions.is_empty() {
 out.insert(user.clone(), actions);
 }
 }

 out
}

/// Applies `actions` through the driver: creates/adds batch into one
/// [`ServerDriver::update_playlists`] call (stamping the ledger for every
/// item that batch actually covers), while deletes and removes are issued
/// individually, one driver call per action.
pub async fn push_playlist_actions(
 driver: &dyn ServerDriver,
 global: &mut PlaylistState,
 actions: &HashMap<String, Vec<PlaylistAction>>,
 user_mapping: &HashMap<String, String>,
 dryrun: bool,
 now: i64,
) -> Result<(), DriverError> {
 let server_id = driver.machine_id().to_string();

 let mut additions: HashMap<String, UserPlaylists> = HashMap::new();
 for (user, user_actions) in actions {
 for action in user_actions {
 match action {
 PlaylistAction::CreatePlaylist { title } => {
 additions.entry(user.clone()).or_default().playlist_mut(title);
 }
 PlaylistAction::AddItem { title, item } => {
 additions
 .entry(user.clone())
 .or_default()
 .playlist_mut(title)
 .items
 .push(item.clone());
 }
 _ => {}
 }
 }
 }

 if !additions.is_empty() {
 driver.update_playlists(&additions, user_mapping, dryrun).await?;
 for (user, user_playlists) in &additions {
 let Some(global_user) = global.users.get_mut(user) else {
 continue;
 };
 for (title, playlist) in &user_playlists.playlists {
 let Some(global_playlist) = global_user.playlists.get_mut(title) else {
 continue;
 };
 for item in &playlist.items {
 if let Some(global_item) = global_playlist.items.iter_mut().find(|g| media_items_match(g, item)) {
 global_item
 .synced_to_servers
 .insert(server_id.clone(), ServerSyncInfo::new(now, WatchedStatus::completed(None)));
 }
 }
 }
 }
 }

 for (user, user_actions) in actions {
 for action in user_actions {
 match action {
 PlaylistAction::DeletePlaylist { title } => {
 driver.delete_playlist_by_title(user, title, dryrun).await?;
 }
 PlaylistAction::RemoveItem { title, item } => {
 driver.remove_item_from_playlist(user, title, item, dryrun).await?;
 }
 _ => {}
 }
 }
 }

 Ok(())
}

#[cfg(test)]
#[path = "playlist_tests.rs"]
mod tests;
