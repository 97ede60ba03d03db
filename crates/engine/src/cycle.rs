// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level per-cycle orchestration: Fetch → Prune
//! → Merge → Mark-Already-Synced → Diff & Push, run once for watched state
//! and, if enabled, once more for playlists, then persisted.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;

use msr_core::{MediaItem, Series, UserData, UserPlaylists};
use msr_drivers::ServerDriver;
use msr_storage::{load_playlist_state, load_watched_state, save_playlist_state, save_watched_state};

use crate::canonical::{canonicalize_playlists, canonicalize_watched};
use crate::diff_push;
use crate::error::EngineError;
use crate::fetch::{fetch_playlists, fetch_watched, PlaylistFetchRequest, ServerFetchRequest};
use crate::filter::{LibraryFilter, NameFilter};
use crate::mapping::NameMapping;
use crate::merge::{merge_item_into_list, merge_series_into_list};
use crate::playlist::{self, TrashedItems};
use crate::prune::{prune_movies, prune_series};
use crate::sync_ledger::{mark_already_synced_movies, mark_already_synced_series};

/// One configured media server. User enumeration and allow/deny filtering
/// happen fresh every cycle via [`resolve_users`], so a server's
/// account list never needs to be threaded in from outside the engine.
pub struct ServerEntry {
 pub driver: Arc<dyn ServerDriver>,
}

/// Everything a cycle run needs that isn't read from the persisted state
/// files themselves — loading these values from the environment happens
/// in the CLI layer, not here.
pub struct CycleConfig {
 pub watched_state_path: PathBuf,
 pub playlist_state_path: PathBuf,
 pub user_mapping: NameMapping,
 pub library_mapping: NameMapping,
 pub library_filter: LibraryFilter,
 pub user_filter: NameFilter,
 pub sync_playlists: bool,
 pub dryrun: bool,
 pub concurrency: Option<usize>,
}

/// Fetch stage step 1: enumerate this server's users, drop any without
/// access to the server, then apply the configured allow/deny list. Names
/// returned are server-local; canonicalization happens after fetch, the
/// same as library names.
async fn resolve_users(driver: &dyn ServerDriver, filter: &NameFilter) -> Result<Vec<String>, msr_drivers::DriverError> {
 let users = driver.list_users().await?;
 Ok(users
 .into_iter()
 .filter(|u| u.access_to_this_server && filter.permits(&u.name))
 .map(|u| u.name)
 .collect())
}

/// Summary of one completed cycle, logged by the CLI scheduler.
#[derive(Debug, Default)]
pub struct CycleReport {
 pub servers_reachable: usize,
 pub servers_total: usize,
}

/// Builds one server's fetch request, resolving its library allow/deny
/// list against what the server actually reports having.
/// A server whose library list can't be fetched is dropped for the whole
/// cycle and logged, same as any other per-server fetch failure.
async fn build_watched_request(server: &ServerEntry, config: &CycleConfig) -> Option<ServerFetchRequest> {
 let users = match resolve_users(server.driver.as_ref(), &config.user_filter).await {
 Ok(users) => users,
 Err(err) => {
 tracing::warn!(server = %server.driver.info(), error = %err, "failed to list users; skipping server this cycle");
 return None;
 }
 };

 match server.driver.list_libraries().await {
 Ok(libraries) => {
 let library_filter = libraries
 .into_iter()
 .filter(|(name, kind)| config.library_filter.permits(name, *kind))
 .collect();
 Some(ServerFetchRequest {
 driver: server.driver.clone(),
 users,
 library_filter,
 })
 }
 Err(err) => {
 tracing::warn!(server = %server.driver.info(), error = %err, "failed to list libraries; skipping server this cycle");
 None
 }
 }
}

/// Runs one full watched-state cycle across every configured server and
/// persists the result. Returns an error only when every server failed to
/// answer; partial failures are logged and the cycle proceeds with
/// whoever answered.
pub async fn run_watched_cycle(servers: &[ServerEntry], config: &CycleConfig, now: i64) -> Result<CycleReport, EngineError> {
 let previous_state = load_watched_state(&config.watched_state_path);

 let mut requests = Vec::with_capacity(servers.len());
 for server in servers {
 if let Some(request) = build_watched_request(server, config).await {
 requests.push(request);
 }
 }
 let servers_total = servers.len();

 let fetch_results = fetch_watched(requests, &previous_state, config.concurrency).await;

 let mut canonical_snapshots: HashMap<String, HashMap<String, UserData>> = HashMap::new();
 for result in &fetch_results {
 if let Ok(raw) = &result.result {
 let canonical = canonicalize_watched(raw.clone(), &config.user_mapping, &config.library_mapping);
 canonical_snapshots.insert(result.machine_id.clone(), canonical);
 }
 }
 let servers_reachable = canonical_snapshots.len();
 if servers_reachable == 0 && servers_total > 0 {
 return Err(EngineError::NoServersAvailable);
 }

 let mut global = previous_state;

 let reachable_users: HashSet<String> = canonical_snapshots.values().flat_map(|s| s.keys().cloned()).collect();

 for user in reachable_users {
 // a library only "counts" for pruning if at least one
 // reachable server actually reports having it for this user — a
 // library no reachable server mentions cannot veto anything, so its
 // existing global items are left untouched rather than tombstoned.
 let mut library_titles: HashSet<String> = HashSet::new();
 for snapshot in canonical_snapshots.values() {
 if let Some(user_data) = snapshot.get(&user) {
 library_titles.extend(user_data.libraries.keys().cloned());
 }
 }

 for lib_title in library_titles {
 // One slice of this server's movies/series per reachable server that
 // actually has this user+library, so pruning can require presence on
 // every one of them rather than merely any one of them.
 let per_server_movies: Vec<&[MediaItem]> = canonical_snapshots
 .values()
 .filter_map(|s| s.get(&user))
 .filter_map(|u| u.libraries.get(&lib_title))
 .map(|l| l.movies.as_slice())
 .collect();
 let per_server_series: Vec<&[Series]> = canonical_snapshots
 .values()
 .filter_map(|s| s.get(&user))
 .filter_map(|u| u.libraries.get(&lib_title))
 .map(|l| l.series.as_slice())
 .collect();

 let global_user = global.user_mut(&user);
 let global_lib = global_user.library_mut(&lib_title);
 let movie_tombstones = prune_movies(&mut global_lib.movies, &per_server_movies);
 let series_tombstones = prune_series(&mut global_lib.series, &per_server_series);
 let tombstones: Vec<_> = movie_tombstones.into_iter().chain(series_tombstones).collect();

 for snapshot in canonical_snapshots.values() {
 let Some(lib_data) = snapshot.get(&user).and_then(|u| u.libraries.get(&lib_title)) else {
 continue;
 };
 for movie in lib_data.movies.iter().cloned() {
 merge_item_into_list(&mut global_lib.movies, movie, &tombstones);
 }
 for series in lib_data.series.iter().cloned() {
 merge_series_into_list(&mut global_lib.series, series, &tombstones);
 }
 }
 }
 }

 for (machine_id, snapshot) in &canonical_snapshots {
 for (user, user_data) in snapshot {
 let Some(global_user) = global.users.get_mut(user) else {
 continue;
 };
 for (lib_name, lib_data) in &user_data.libraries {
 let Some(global_lib) = global_user.libraries.get_mut(lib_name) else {
 continue;
 };
 mark_already_synced_movies(&mut global_lib.movies, &lib_data.movies, machine_id, now);
 mark_already_synced_series(&mut global_lib.series, &lib_data.series, machine_id, now);
 }
 }
 }

 for server in servers {
 let Some(snapshot) = canonical_snapshots.get(server.driver.machine_id()) else {
 continue;
 };
 if let Err(err) = diff_push::push_watched_diff(
 server.driver.as_ref(),
 &mut global,
 snapshot,
 &config.user_mapping.as_driver_table(),
 &config.library_mapping.as_driver_table(),
 config.dryrun,
 now,
 )
 .await
 {
 tracing::warn!(server = %server.driver.info(), error = %err, "failed to push watched-state diff");
 }
 }

 save_watched_state(&config.watched_state_path, &global)?;

 Ok(CycleReport {
 servers_reachable,
 servers_total,
 })
}

/// Runs one full playlist cycle: deletions before additions,
/// then a Mark-Already-Synced pass, then per-server actions.
pub async fn run_playlist_cycle(servers: &[ServerEntry], config: &CycleConfig, now: i64) -> Result<CycleReport, EngineError> {
 let previous_state = load_playlist_state(&config.playlist_state_path);

 let mut requests = Vec::with_capacity(servers.len());
 for server in servers {
 match resolve_users(server.driver.as_ref(), &config.user_filter).await {
 Ok(users) => requests.push(PlaylistFetchRequest {
 driver: server.driver.clone(),
 users,
 }),
 Err(err) => {
 tracing::warn!(server = %server.driver.info(), error = %err, "failed to list users; skipping server this cycle");
 }
 }
 }

 let servers_total = servers.len();
 let fetch_results = fetch_playlists(requests, &previous_state, config.concurrency).await;

 let mut canonical_snapshots: HashMap<String, HashMap<String, UserPlaylists>> = HashMap::new();
 for result in &fetch_results {
 if let Ok(raw) = &result.result {
 let canonical = canonicalize_playlists(raw.clone(), &config.user_mapping);
 canonical_snapshots.insert(result.machine_id.clone(), canonical);
 }
 }
 let servers_reachable = canonical_snapshots.len();
 if servers_reachable == 0 && servers_total > 0 {
 return Err(EngineError::NoServersAvailable);
 }

 let mut global = previous_state;
 let mut trashed = TrashedItems::new();

 for (machine_id, snapshot) in &canonical_snapshots {
 playlist::detect_deletions(&mut global, snapshot, machine_id, &mut trashed);
 }
 for snapshot in canonical_snapshots.values() {
 playlist::merge_additions(&mut global, snapshot.clone(), &trashed);
 }
 for (machine_id, snapshot) in &canonical_snapshots {
 playlist::mark_already_synced(&mut global, snapshot, machine_id, now);
 }

 for server in servers {
 let Some(snapshot) = canonical_snapshots.get(server.driver.machine_id()) else {
 continue;
 };
 let actions = playlist::compute_actions(&global, snapshot, server.driver.machine_id());
 if actions.is_empty() {
 continue;
 }
 if let Err(err) = playlist::push_playlist_actions(
 server.driver.as_ref(),
 &mut global,
 &actions,
 &config.user_mapping.as_driver_table(),
 config.dryrun,
 now,
 )
 .await
 {
 tracing::warn!(server = %server.driver.info(), error = %err, "failed to push playlist actions");
 }
 }

 save_playlist_state(&config.playlist_state_path, &global)?;

 Ok(CycleReport {
 servers_reachable,
 servers_total,
 })
}

#[cfg(test)]
#[path = "cycle_tests.rs"]
mod tests;
