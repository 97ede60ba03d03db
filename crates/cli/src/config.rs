// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The configuration surface, loaded from environment variables: server
//! endpoint shapes with a length-mismatch check, log level validation,
//! `RUN_ONLY_ONCE`, `SLEEP_DURATION`, `SYNC_CRON`, `SYNC_PLAYLISTS`, and
//! the allow/deny and name-mapping tables. `Config::from_env` is a thin
//! wrapper over `Config::from_map` so loading stays unit-testable without
//! mutating the process environment.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use thiserror::Error;

/// Only `INFO`, `DEBUG`, and `TRACE` are accepted; anything else fails
/// config loading outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
 Info,
 Debug,
 Trace,
}

impl LogLevel {
 fn parse(raw: &str) -> Option<Self> {
 match raw.to_ascii_uppercase().as_str() {
 "INFO" => Some(Self::Info),
 "DEBUG" => Some(Self::Debug),
 "TRACE" => Some(Self::Trace),
 _ => None,
 }
 }

 /// The `tracing_subscriber::EnvFilter` directive for this level.
 pub fn as_filter_directive(&self) -> &'static str {
 match self {
 Self::Info => "info",
 Self::Debug => "debug",
 Self::Trace => "trace",
 }
 }
}

/// Server endpoints: either a list of (base URL, token) pairs or a
/// list of (account, password, server-name) triples. Both shapes require
/// equal-length fields; a server connector outside this crate is
/// responsible for turning these into a `Vec<ServerEntry>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServerEndpoints {
 #[default]
 None,
 UrlToken(Vec<UrlTokenEndpoint>),
 Credentials(Vec<CredentialsEndpoint>),
}

impl ServerEndpoints {
 pub fn is_empty(&self) -> bool {
 matches!(self, Self::None)
 }

 pub fn len(&self) -> usize {
 match self {
 Self::None => 0,
 Self::UrlToken(v) => v.len(),
 Self::Credentials(v) => v.len(),
 }
 }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTokenEndpoint {
 pub base_url: String,
 pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialsEndpoint {
 pub username: String,
 pub password: String,
 pub server_name: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
 #[error("PLEX_BASEURL and PLEX_TOKEN must have the same number of entries")]
 UrlTokenLengthMismatch,
 #[error("PLEX_USERNAME, PLEX_PASSWORD and PLEX_SERVERNAME must have the same number of entries")]
 CredentialsLengthMismatch,
 #[error("invalid DEBUG_LEVEL '{0}', must be one of INFO, DEBUG, TRACE")]
 InvalidLogLevel(String),
 #[error("invalid JSON in {field}: {source}")]
 InvalidMapping {
 field: &'static str,
 #[source]
 source: serde_json::Error,
 },
 #[error("invalid number in {field}: '{value}'")]
 InvalidNumber { field: &'static str, value: String },
}

/// The fully parsed configuration surface for one reconciler run.
#[derive(Debug, Clone)]
pub struct Config {
 pub server_endpoints: ServerEndpoints,
 pub ssl_bypass: bool,

 pub user_allow: Option<HashSet<String>>,
 pub user_deny: HashSet<String>,
 pub library_allow: Option<HashSet<String>>,
 pub library_deny: HashSet<String>,
 pub library_type_allow: Option<HashSet<String>>,
 pub library_type_deny: HashSet<String>,

 pub user_mapping: HashMap<String, String>,
 pub library_mapping: HashMap<String, String>,

 pub generate_guids: bool,
 pub generate_locations: bool,

 pub dryrun: bool,
 pub run_only_once: bool,
 pub sleep_duration_seconds: f64,
 pub sync_cron: Option<String>,
 pub sync_playlists: bool,
 pub max_threads: usize,

 pub log_level: LogLevel,
 pub config_dir: PathBuf,
 pub watched_state_path: PathBuf,
 pub playlist_state_path: PathBuf,
 pub log_file: PathBuf,
}

fn parse_bool(raw: &str, default: bool) -> bool {
 match raw.trim().to_ascii_lowercase().as_str() {
 "" => default,
 "true" | "1" | "yes" | "on" => true,
 "false" | "0" | "no" | "off" => false,
 _ => default,
 }
}

/// Parses a comma-separated allow/deny list: whitespace-trimmed, empty
/// entries dropped.
fn parse_list(raw: &str) -> HashSet<String> {
 raw.split(',')
 .map(|s| s.trim())
 .filter(|s| !s.is_empty())
 .map(|s| s.to_string())
 .collect()
}

fn parse_mapping(raw: &str, field: &'static str) -> Result<HashMap<String, String>, ConfigError> {
 if raw.trim().is_empty() {
 return Ok(HashMap::new());
 }
 serde_json::from_str(raw).map_err(|source| ConfigError::InvalidMapping { field, source })
}

fn split_csv(raw: &str) -> Vec<String> {
 raw.split(',').map(|s| s.trim().to_string()).collect()
}

impl Config {
 /// Loads configuration from the process environment, after loading a
 /// `.env` file dropped in the resolved config directory. Missing `.env`
 /// is not an error.
 pub fn from_env() -> Result<Self, ConfigError> {
 let config_dir = std::env::var("CONFIG_DIR").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("."));
 let _ = dotenvy::from_path(config_dir.join(".env"));

 let map: HashMap<String, String> = std::env::vars().collect();
 Self::from_map(&map)
 }

 /// Pure constructor over an explicit key/value map, so tests never need
 /// to mutate the real process environment.
 pub fn from_map(map: &HashMap<String, String>) -> Result<Self, ConfigError> {
 let get = |key: &str| map.get(key).map(|s| s.as_str());

 let server_endpoints = parse_server_endpoints(&get)?;

 let ssl_bypass = parse_bool(get("SSL_BYPASS").unwrap_or(""), false);

 let user_deny = get("BLACKLIST_USERS").map(parse_list).unwrap_or_default();
 let user_allow = get("WHITELIST_USERS").map(parse_list);
 let library_deny = get("BLACKLIST_LIBRARY").map(parse_list).unwrap_or_default();
 let library_allow = get("WHITELIST_LIBRARY").map(parse_list);
 let library_type_deny = get("BLACKLIST_LIBRARY_TYPE").map(parse_list).unwrap_or_default();
 let library_type_allow = get("WHITELIST_LIBRARY_TYPE").map(parse_list);

 let user_mapping = parse_mapping(get("USER_MAPPING").unwrap_or(""), "USER_MAPPING")?;
 let library_mapping = parse_mapping(get("LIBRARY_MAPPING").unwrap_or(""), "LIBRARY_MAPPING")?;

 let generate_guids = parse_bool(get("GENERATE_GUIDS").unwrap_or(""), true);
 let generate_locations = parse_bool(get("GENERATE_LOCATIONS").unwrap_or(""), true);

 let dryrun = parse_bool(get("DRYRUN").unwrap_or(""), false);
 let run_only_once = parse_bool(get("RUN_ONLY_ONCE").unwrap_or(""), false);

 let sleep_duration_seconds = match get("SLEEP_DURATION") {
 Some(raw) if !raw.trim().is_empty() => raw.trim().parse::<f64>().map_err(|_| ConfigError::InvalidNumber {
 field: "SLEEP_DURATION",
 value: raw.to_string(),
 })?,
 _ => 3600.0,
 };

 let sync_cron = get("SYNC_CRON").map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
 let sync_playlists = parse_bool(get("SYNC_PLAYLISTS").unwrap_or(""), true);

 let max_threads = match get("MAX_THREADS") {
 Some(raw) if !raw.trim().is_empty() => raw.trim().parse::<usize>().map_err(|_| ConfigError::InvalidNumber {
 field: "MAX_THREADS",
 value: raw.to_string(),
 })?,
 _ => msr_engine::pool::DEFAULT_CONCURRENCY,
 };

 let log_level_raw = get("DEBUG_LEVEL").unwrap_or("INFO");
 let log_level = LogLevel::parse(log_level_raw).ok_or_else(|| ConfigError::InvalidLogLevel(log_level_raw.to_string()))?;

 let config_dir = get("CONFIG_DIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
 let watched_state_path = resolve_path(&config_dir, get("WATCHED_STATE_FILE").unwrap_or("watched_state.json"));
 let playlist_state_path = resolve_path(&config_dir, get("PLAYLIST_STATE_FILE").unwrap_or("playlist_state.json"));
 let log_file = resolve_path(&config_dir, get("LOG_FILE").unwrap_or("log.log"));

 Ok(Config {
 server_endpoints,
 ssl_bypass,
 user_allow,
 user_deny,
 library_allow,
 library_deny,
 library_type_allow,
 library_type_deny,
 user_mapping,
 library_mapping,
 generate_guids,
 generate_locations,
 dryrun,
 run_only_once,
 sleep_duration_seconds,
 sync_cron,
 sync_playlists,
 max_threads,
 log_level,
 config_dir,
 watched_state_path,
 playlist_state_path,
 log_file,
 })
 }
}

/// Resolves a configured path against `config_dir` unless it is already
/// absolute, mirroring `.env` discovery relative to a config directory.
fn resolve_path(config_dir: &std::path::Path, raw: &str) -> PathBuf {
 let path = PathBuf::from(raw);
 if path.is_absolute() {
 path
 } else {
 config_dir.join(path)
 }
}

fn parse_server_endpoints(get: &impl Fn(&str) -> Option<&str>) -> Result<ServerEndpoints, ConfigError> {
 if let (Some(urls), Some(tokens)) = (get("PLEX_BASEURL"), get("PLEX_TOKEN")) {
 let urls = split_csv(urls);
 let tokens = split_csv(tokens);
 if urls.len() != tokens.len() {
 return Err(ConfigError::UrlTokenLengthMismatch);
 }
 return Ok(ServerEndpoints::UrlToken(
 urls.into_iter()
 .zip(tokens)
 .map(|(base_url, token)| UrlTokenEndpoint { base_url, token })
 .collect(),
 ));
 }

 if let (Some(usernames), Some(passwords), Some(server_names)) = (get("PLEX_USERNAME"), get("PLEX_PASSWORD"), get("PLEX_SERVERNAME")) {
 let usernames = split_csv(usernames);
 let passwords = split_csv(passwords);
 let server_names = split_csv(server_names);
 if usernames.len() != passwords.len() || usernames.len() != server_names.len() {
 return Err(ConfigError::CredentialsLengthMismatch);
 }
 return Ok(ServerEndpoints::Credentials(
 usernames
 .into_iter()
 .zip(passwords)
 .zip(server_names)
 .map(|((username, password), server_name)| CredentialsEndpoint {
 username,
 password,
 server_name,
 })
 .collect(),
 ));
 }

 Ok(ServerEndpoints::None)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
