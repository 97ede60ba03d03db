// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashMap;

use super::*;

fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
 pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn defaults_with_no_env_at_all() {
 let cfg = Config::from_map(&HashMap::new()).expect("defaults parse");
 assert!(cfg.server_endpoints.is_empty());
 assert!(!cfg.dryrun);
 assert!(!cfg.run_only_once);
 assert_eq!(cfg.sleep_duration_seconds, 3600.0);
 assert!(cfg.sync_playlists);
 assert_eq!(cfg.log_level, LogLevel::Info);
 assert_eq!(cfg.watched_state_path, PathBuf::from("./watched_state.json"));
}

#[test]
fn url_token_pairs_parse() {
 let cfg = Config::from_map(&map(&[("PLEX_BASEURL", "http://a,http://b"), ("PLEX_TOKEN", "tok-a,tok-b")])).expect("parses");
 match cfg.server_endpoints {
 ServerEndpoints::UrlToken(entries) => {
 assert_eq!(entries.len(), 2);
 assert_eq!(entries[0].base_url, "http://a");
 assert_eq!(entries[1].token, "tok-b");
 }
 _ => panic!("expected UrlToken endpoints"),
 }
}

#[test]
fn url_token_length_mismatch_is_an_error() {
 let err = Config::from_map(&map(&[("PLEX_BASEURL", "http://a,http://b"), ("PLEX_TOKEN", "tok-a")])).unwrap_err();
 assert!(matches!(err, ConfigError::UrlTokenLengthMismatch));
}

#[test]
fn credentials_triples_parse() {
 let cfg = Config::from_map(&map(&[
 ("PLEX_USERNAME", "alice,bob"),
 ("PLEX_PASSWORD", "pw1,pw2"),
 ("PLEX_SERVERNAME", "srv1,srv2"),
 ]))
 .expect("parses");
 match cfg.server_endpoints {
 ServerEndpoints::Credentials(entries) => {
 assert_eq!(entries.len(), 2);
 assert_eq!(entries[1].server_name, "srv2");
 }
 _ => panic!("expected Credentials endpoints"),
 }
}

#[test]
fn credentials_length_mismatch_is_an_error() {
 let err = Config::from_map(&map(&[
 ("PLEX_USERNAME", "alice,bob"),
 ("PLEX_PASSWORD", "pw1"),
 ("PLEX_SERVERNAME", "srv1,srv2"),
 ]))
 .unwrap_err();
 assert!(matches!(err, ConfigError::CredentialsLengthMismatch));
}

#[test]
fn url_token_takes_precedence_over_credentials_when_both_set() {
 let cfg = Config::from_map(&map(&[
 ("PLEX_BASEURL", "http://a"),
 ("PLEX_TOKEN", "tok-a"),
 ("PLEX_USERNAME", "alice"),
 ("PLEX_PASSWORD", "pw1"),
 ("PLEX_SERVERNAME", "srv1"),
 ]))
 .expect("parses");
 assert!(matches!(cfg.server_endpoints, ServerEndpoints::UrlToken(_)));
}

#[test]
fn invalid_log_level_is_a_fatal_error() {
 let err = Config::from_map(&map(&[("DEBUG_LEVEL", "VERBOSE")])).unwrap_err();
 assert!(matches!(err, ConfigError::InvalidLogLevel(level) if level == "VERBOSE"));
}

#[test]
fn log_level_is_case_insensitive() {
 let cfg = Config::from_map(&map(&[("DEBUG_LEVEL", "debug")])).expect("parses");
 assert_eq!(cfg.log_level, LogLevel::Debug);
}

#[test]
fn allow_deny_lists_are_comma_split_and_trimmed() {
 let cfg = Config::from_map(&map(&[("BLACKLIST_USERS", " guest , kidsaccount ")])).expect("parses");
 assert!(cfg.user_deny.contains("guest"));
 assert!(cfg.user_deny.contains("kidsaccount"));
 assert_eq!(cfg.user_deny.len(), 2);
}

#[test]
fn user_mapping_parses_json_object() {
 let cfg = Config::from_map(&map(&[("USER_MAPPING", r#"{"plex_alice": "alice"}"#)])).expect("parses");
 assert_eq!(cfg.user_mapping.get("plex_alice"), Some(&"alice".to_string()));
}

#[test]
fn invalid_mapping_json_is_an_error() {
 let err = Config::from_map(&map(&[("USER_MAPPING", "not json")])).unwrap_err();
 assert!(matches!(err, ConfigError::InvalidMapping { field: "USER_MAPPING", .. }));
}

#[test]
fn sleep_duration_parses_as_float() {
 let cfg = Config::from_map(&map(&[("SLEEP_DURATION", "120.5")])).expect("parses");
 assert_eq!(cfg.sleep_duration_seconds, 120.5);
}

#[test]
fn invalid_sleep_duration_is_an_error() {
 let err = Config::from_map(&map(&[("SLEEP_DURATION", "soon")])).unwrap_err();
 assert!(matches!(err, ConfigError::InvalidNumber { field: "SLEEP_DURATION", .. }));
}

#[test]
fn relative_state_paths_resolve_against_config_dir() {
 let cfg = Config::from_map(&map(&[("CONFIG_DIR", "/etc/msr"), ("WATCHED_STATE_FILE", "watched.json")])).expect("parses");
 assert_eq!(cfg.watched_state_path, PathBuf::from("/etc/msr/watched.json"));
}

#[test]
fn absolute_state_paths_are_left_untouched() {
 let cfg = Config::from_map(&map(&[("CONFIG_DIR", "/etc/msr"), ("LOG_FILE", "/var/log/msr.log")])).expect("parses");
 assert_eq!(cfg.log_file, PathBuf::from("/var/log/msr.log"));
}

#[test]
fn bool_flags_accept_common_spellings() {
 let cfg = Config::from_map(&map(&[("DRYRUN", "TRUE"), ("SYNC_PLAYLISTS", "0")])).expect("parses");
 assert!(cfg.dryrun);
 assert!(!cfg.sync_playlists);
}
