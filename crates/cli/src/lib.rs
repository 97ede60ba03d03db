// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! msr-cli: the configuration surface, structured logging setup,
//! and the run-once/scheduled/cron loop that drive
//! `msr-engine`'s reconciliation cycle end to end.
//!
//! Server connector construction (turning [`config::Config`]'s server
//! endpoints into live [`msr_engine::ServerEntry`] values) is deliberately
//! out of scope here — the media-server driver is an external
//! collaborator the core only consumes through the
//! [`msr_drivers::ServerDriver`] capability set.

use std::collections::HashMap;

pub mod config;
pub mod logging;
pub mod scheduler;

use msr_engine::{LibraryFilter, NameFilter, NameMapping};

/// Builds a [`NameMapping`] from a parsed `USER_MAPPING`/`LIBRARY_MAPPING`
/// table (server-local name → canonical name).
pub fn mapping_from_config(table: &HashMap<String, String>) -> NameMapping {
 NameMapping::new(table.clone())
}

/// Builds the library allow/deny filter from a parsed
/// [`config::Config`].
pub fn library_filter_from_config(config: &config::Config) -> LibraryFilter {
 LibraryFilter::new(
 NameFilter::new(config.library_allow.clone(), config.library_deny.clone()),
 NameFilter::new(config.library_type_allow.clone(), config.library_type_deny.clone()),
 )
}

/// Builds the user allow/deny filter.
pub fn user_filter_from_config(config: &config::Config) -> NameFilter {
 NameFilter::new(config.user_allow.clone(), config.user_deny.clone())
}
