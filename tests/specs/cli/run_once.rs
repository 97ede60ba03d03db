//! End-to-end run of the `msr` binary with `RUN_ONLY_ONCE=true` and no
//! configured server endpoints — the only path exercisable without a real
//! Plex server, since driver construction lives outside this crate.

use crate::prelude::Project;

#[test]
fn run_once_with_no_servers_exits_cleanly_and_persists_state() {
    let project = Project::empty();
    project.msr().assert().success().code(0);
    assert!(project.watched_state_path().exists());
}

#[test]
fn dryrun_does_not_suppress_a_clean_exit() {
    let project = Project::empty();
    project.msr().env("DRYRUN", "true").assert().success().code(0);
}
