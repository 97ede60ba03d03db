// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The run-once/scheduled/cron loop: run a cycle, log the running average
//! cycle time, sleep (cron-computed wait when `SYNC_CRON` is set and
//! valid, else the fixed `SLEEP_DURATION`), repeat until `RUN_ONLY_ONCE`
//! or an interrupt, then close every driver.

use std::str::FromStr;
use std::time::{Duration, Instant};

use chrono::Utc;
use cron::Schedule;
use msr_core::{Clock, SystemClock};
use msr_engine::{CycleConfig, CycleReport, EngineError, ServerEntry};

use crate::config::Config;

/// Running average of cycle durations, kept as a running mean rather than
/// the full history so memory stays bounded across a long-lived scheduled
/// process.
#[derive(Debug, Default, Clone, Copy)]
pub struct CycleTimes {
 count: u64,
 total: Duration,
}

impl CycleTimes {
 pub fn record(&mut self, elapsed: Duration) {
 self.count += 1;
 self.total += elapsed;
 }

 pub fn average(&self) -> Option<Duration> {
 (self.count > 0).then(|| self.total / self.count as u32)
 }
}

/// How long to sleep before the next cycle. `sync_cron`, when present and
/// valid, overrides `sleep_duration_seconds`; an invalid cron
/// expression falls back to the fixed sleep duration rather than failing
/// the whole process.
pub fn next_wait(config: &Config) -> Duration {
 if let Some(expr) = &config.sync_cron {
 match Schedule::from_str(expr) {
 Ok(schedule) => {
 let now = Utc::now();
 if let Some(next) = schedule.upcoming(Utc).next() {
 let wait = (next - now).to_std().unwrap_or(Duration::ZERO);
 tracing::info!(next_run = %next, cron = %expr, "scheduled next run via cron");
 return wait;
 }
 }
 Err(err) => {
 tracing::error!(cron = %expr, error = %err, "invalid cron expression, falling back to SLEEP_DURATION");
 }
 }
 }
 Duration::from_secs_f64(config.sleep_duration_seconds.max(0.0))
}

fn cycle_config(config: &Config) -> CycleConfig {
 CycleConfig {
 watched_state_path: config.watched_state_path.clone(),
 playlist_state_path: config.playlist_state_path.clone(),
 user_mapping: crate::mapping_from_config(&config.user_mapping),
 library_mapping: crate::mapping_from_config(&config.library_mapping),
 library_filter: crate::library_filter_from_config(config),
 user_filter: crate::user_filter_from_config(config),
 sync_playlists: config.sync_playlists,
 dryrun: config.dryrun,
 concurrency: Some(config.max_threads),
 }
}

async fn run_one_cycle(servers: &[ServerEntry], config: &Config, now: i64) -> Result<CycleReport, EngineError> {
 let cfg = cycle_config(config);
 let watched_report = msr_engine::cycle::run_watched_cycle(servers, &cfg, now).await?;
 tracing::info!(
 reachable = watched_report.servers_reachable,
 total = watched_report.servers_total,
 "watched-state synchronization finished"
 );

 if config.sync_playlists {
 let playlist_report = msr_engine::cycle::run_playlist_cycle(servers, &cfg, now).await?;
 tracing::info!(
 reachable = playlist_report.servers_reachable,
 total = playlist_report.servers_total,
 "playlist synchronization finished"
 );
 }

 Ok(watched_report)
}

/// Runs cycles until `config.run_only_once` or an interrupt signal, then
/// closes every driver. Returns the process exit code (0 on clean
/// shutdown).
pub async fn run(servers: Vec<ServerEntry>, config: Config) -> i32 {
 let mut times = CycleTimes::default();

 loop {
 let start = Instant::now();
 let now = SystemClock.epoch_secs();
 match run_one_cycle(&servers, &config, now).await {
 Ok(_) => {}
 Err(err) => {
 tracing::error!(error = %err, "reconciliation cycle failed");
 }
 }
 times.record(start.elapsed());
 if let Some(avg) = times.average() {
 tracing::info!(average_cycle_seconds = avg.as_secs_f64(), "cycle completed");
 }

 if config.run_only_once {
 break;
 }

 let wait = next_wait(&config);
 tracing::info!(sleep_seconds = wait.as_secs_f64(), "sleeping until next cycle");
 tokio::select! {
 _ = tokio::time::sleep(wait) => {}
 _ = tokio::signal::ctrl_c() => {
 tracing::info!("received interrupt, shutting down");
 break;
 }
 }
 }

 for server in &servers {
 if let Err(err) = server.driver.close().await {
 tracing::warn!(server = %server.driver.info(), error = %err, "error closing server connection");
 }
 }

 if let Some(avg) = times.average() {
 tracing::info!(average_cycle_seconds = avg.as_secs_f64(), "final average cycle time");
 }

 0
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
