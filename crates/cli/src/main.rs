// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `msr`: the media-state reconciler binary. Loads configuration, sets up
//! logging, and runs the scheduled reconciliation loop until
//! `RUN_ONLY_ONCE` completes or an interrupt arrives.

use msr_cli::config::Config;
use msr_cli::scheduler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
 let config = match Config::from_env() {
 Ok(config) => config,
 Err(err) => {
 eprintln!("configuration error: {err}");
 std::process::exit(1);
 }
 };

 msr_cli::logging::init(config.log_level, &config.log_file);

 tracing::info!(
 servers = config.server_endpoints.len(),
 dryrun = config.dryrun,
 run_only_once = config.run_only_once,
 "starting media-state reconciler"
 );

 if config.server_endpoints.is_empty() {
 tracing::warn!(
 "no server endpoints configured (PLEX_BASEURL/PLEX_TOKEN or \
 PLEX_USERNAME/PLEX_PASSWORD/PLEX_SERVERNAME) and driver \
 construction is outside this crate's scope; the cycle loop \
 will run against zero servers"
 );
 }

 // Concrete server connectors (turning `config.server_endpoints` into
 // live `ServerDriver`s) are an external collaborator; a deployment
 // wires its own driver crate in here.
 let servers = Vec::new();

 let exit_code = scheduler::run(servers, config).await;
 std::process::exit(exit_code);
}
