// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use msr_drivers::FakeDriver;
use msr_engine::ServerEntry;

use super::*;
use crate::config::Config;

fn base_config_map(dir: &std::path::Path) -> HashMap<String, String> {
 HashMap::from([
 ("CONFIG_DIR".to_string(), dir.display().to_string()),
 ("RUN_ONLY_ONCE".to_string(), "true".to_string()),
 ("SYNC_PLAYLISTS".to_string(), "false".to_string()),
 ])
}

#[test]
fn cycle_times_average_is_none_before_any_record() {
 let times = CycleTimes::default();
 assert!(times.average().is_none());
}

#[test]
fn cycle_times_average_is_the_mean_of_recorded_durations() {
 let mut times = CycleTimes::default();
 times.record(Duration::from_secs(2));
 times.record(Duration::from_secs(4));
 assert_eq!(times.average(), Some(Duration::from_secs(3)));
}

#[test]
fn next_wait_uses_sleep_duration_when_no_cron_is_set() {
 let dir = tempfile::tempdir().expect("tempdir");
 let mut map = base_config_map(dir.path());
 map.insert("SLEEP_DURATION".to_string(), "42".to_string());
 let config = Config::from_map(&map).expect("parses");
 assert_eq!(next_wait(&config), Duration::from_secs_f64(42.0));
}

#[test]
fn next_wait_falls_back_to_sleep_duration_on_invalid_cron() {
 let dir = tempfile::tempdir().expect("tempdir");
 let mut map = base_config_map(dir.path());
 map.insert("SLEEP_DURATION".to_string(), "99".to_string());
 map.insert("SYNC_CRON".to_string(), "not a cron expression".to_string());
 let config = Config::from_map(&map).expect("parses");
 assert_eq!(next_wait(&config), Duration::from_secs_f64(99.0));
}

#[tokio::test]
async fn run_once_closes_every_driver() {
 let dir = tempfile::tempdir().expect("tempdir");
 let config = Config::from_map(&base_config_map(dir.path())).expect("parses");

 let driver_a = Arc::new(FakeDriver::new("srv-a", "Server A"));
 let driver_b = Arc::new(FakeDriver::new("srv-b", "Server B"));
 let servers = vec![
 ServerEntry {
 driver: driver_a.clone(),
 },
 ServerEntry {
 driver: driver_b.clone(),
 },
 ];

 let exit_code = run(servers, config).await;
 assert_eq!(exit_code, 0);
 assert!(driver_a.was_closed());
 assert!(driver_b.was_closed());
}

#[tokio::test]
async fn run_once_persists_empty_state_with_no_servers() {
 let dir = tempfile::tempdir().expect("tempdir");
 let config = Config::from_map(&base_config_map(dir.path())).expect("parses");
 let watched_path = config.watched_state_path.clone();

 let exit_code = run(Vec::new(), config).await;
 assert_eq!(exit_code, 0);
 assert!(watched_path.exists());
}
