// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diff & Push stage: compute the minimal per-server
//! additions/updates and removals, apply them through the driver, and
//! advance the ledger for whatever was successfully pushed.

use std::collections::HashMap;

use msr_core::{media_items_match, LibraryData, MediaItem, Series, UserData, WatchedState, PROGRESS_THRESHOLD_MS};
use msr_drivers::{DriverError, ServerDriver};

fn needs_addition(item: &MediaItem, server_id: &str) -> bool {
 match item.synced_to_servers.get(server_id) {
 None => true,
 Some(info) => {
 info.synced_status.completed != item.status.completed
 || (!item.status.completed
 && (item.status.time_ms - info.synced_status.time_ms).abs() >= PROGRESS_THRESHOLD_MS)
 }
 }
}

/// Items in `global_lib` this server hasn't seen, or whose status drifted
/// from what was last pushed to it. `None` when there is nothing to push.
pub fn diff_additions_library(global_lib: &LibraryData, server_id: &str) -> Option<LibraryData> {
 let mut diff = LibraryData::new(global_lib.title.clone());
 let mut any = false;

 for movie in &global_lib.movies {
 if needs_addition(movie, server_id) {
 diff.movies.push(movie.clone());
 any = true;
 }
 }

 for series in &global_lib.series {
 let episodes: Vec<MediaItem> = series
 .episodes
 .iter()
 .filter(|ep| needs_addition(ep, server_id))
 .cloned()
 .collect();
 if !episodes.is_empty() {
 diff.series.push(Series {
 identifiers: series.identifiers.clone(),
 episodes,
 });
 any = true;
 }
 }

 any.then_some(diff)
}

/// Items present (watched or in-progress) on the server but with no global
/// counterpart — these need to be unmarked there. `None` when nothing
/// needs removing.
pub fn diff_removals_library(server_lib: &LibraryData, global_lib: &LibraryData) -> Option<LibraryData> {
 let mut out = LibraryData::new(server_lib.title.clone());
 let mut any = false;

 for server_movie in &server_lib.movies {
 let gone = server_movie.status.is_started()
 && !global_lib
 .movies
 .iter()
 .any(|g| media_items_match(&g.identifiers, &server_movie.identifiers));
 if gone {
 out.movies.push(server_movie.clone());
 any = true;
 }
 }

 for server_series in &server_lib.series {
 match global_lib
 .series
 .iter()
 .find(|g| media_items_match(&g.identifiers, &server_series.identifiers))
 {
 None => {
 let started: Vec<MediaItem> = server_series
 .episodes
 .iter()
 .filter(|ep| ep.status.is_started())
 .cloned()
 .collect();
 if !started.is_empty() {
 out.series.push(Series {
 identifiers: server_series.identifiers.clone(),
 episodes: started,
 });
 any = true;
 }
 }
 Some(global_series) => {
 let missing: Vec<MediaItem> = server_series
 .episodes
 .iter()
 .filter(|ep| {
 ep.status.is_started()
 && !global_series
 .episodes
 .iter()
 .any(|g| media_items_match(&g.identifiers, &ep.identifiers))
 })
 .cloned()
 .collect();
 if !missing.is_empty() {
 out.series.push(Series {
 identifiers: server_series.identifiers.clone(),
 episodes: missing,
 });
 any = true;
 }
 }
 }
 }

 any.then_some(out)
}

/// Computes the full per-user additions/removals payload for one server.
/// Users and libraries absent from `server_snapshot` are skipped entirely —
/// there is nothing to diff against without the server's own view of them.
pub fn compute_watched_diff(
 global: &WatchedState,
 server_snapshot: &HashMap<String, UserData>,
 server_id: &str,
) -> (HashMap<String, UserData>, HashMap<String, UserData>) {
 let mut additions = HashMap::new();
 let mut removals = HashMap::new();

 for (user, global_user) in &global.users {
 let Some(server_user) = server_snapshot.get(user) else {
 continue;
 };
 if server_user.libraries.is_empty() {
 continue;
 }

 let mut user_additions = UserData::default();
 let mut user_removals = UserData::default();

 for (lib_name, global_lib) in &global_user.libraries {
 let Some(server_lib) = server_user.libraries.get(lib_name) else {
 continue;
 };

 if let Some(diff_lib) = diff_additions_library(global_lib, server_id) {
 user_additions.libraries.insert(lib_name.clone(), diff_lib);
 }
 if let Some(removal_lib) = diff_removals_library(server_lib, global_lib) {
 user_removals.libraries.insert(lib_name.clone(), removal_lib);
 }
 }

 if !user_additions.libraries.is_empty() {
 additions.insert(user.clone(), user_additions);
 }
 if !user_removals.libraries.is_empty() {
 removals.insert(user.clone(), user_removals);
 }
 }

 (additions, removals)
}

/// Stamps the ledger for every item that was part of a successful push:
/// `synced_to_servers[server-id]` advances to the pushed status. Removals
/// need no ledger update — the item no longer exists globally.
pub fn stamp_pushed(global: &mut WatchedState, additions: &HashMap<String, UserData>, server_id: &str, now: i64) {
 for (user, diff_user) in additions {
 let Some(global_user) = global.users.get_mut(user) else {
 continue;
 };
 for (lib_name, diff_lib) in &diff_user.libraries {
 let Some(global_lib) = global_user.libraries.get_mut(lib_name) else {
 continue;
 };
 for diff_movie in &diff_lib.movies {
 if let Some(global_movie) = global_lib
 .movies
 .iter_mut()
 .find(|g| media_items_match(&g.identifiers, &diff_movie.identifiers))
 {
 global_movie.stamp_synced(server_id, now);
 }
 }
 for diff_series in &diff_lib.series {
 let Some(global_series) = global_lib
 .series
 .iter_mut()
 .find(|g| media_items_match(&g.identifiers, &diff_series.identifiers))
 else {
 continue;
 };
 for diff_ep in &diff_series.episodes {
 if let Some(global_ep) = global_series
 .episodes
 .iter_mut()
 .find(|g| media_items_match(&g.identifiers, &diff_ep.identifiers))
 {
 global_ep.stamp_synced(server_id, now);
 }
 }
 }
 }
 }
}

/// Computes, applies, and (on success) advances the ledger for one
/// server's watched-state push. A no-op diff never calls the driver at all,
/// so a second cycle against unchanged servers stays idle.
pub async fn push_watched_diff(
 driver: &dyn ServerDriver,
 global: &mut WatchedState,
 server_snapshot: &HashMap<String, UserData>,
 user_mapping: &HashMap<String, String>,
 library_mapping: &HashMap<String, String>,
 dryrun: bool,
 now: i64,
) -> Result<(), DriverError> {
 let server_id = driver.machine_id().to_string();
 let (additions, removals) = compute_watched_diff(global, server_snapshot, &server_id);

 if additions.is_empty() && removals.is_empty() {
 return Ok(());
 }

 driver
 .update_watched(&additions, &removals, user_mapping, library_mapping, dryrun)
 .await?;
 stamp_pushed(global, &additions, &server_id, now);
 Ok(())
}

#[cfg(test)]
#[path = "diff_push_tests.rs"]
mod tests;
