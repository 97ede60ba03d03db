//! Configuration errors at startup are fatal and reported on stderr with
//! exit code 1, never a panic.

use crate::prelude::Project;

#[test]
fn mismatched_url_token_lists_exit_with_configuration_error() {
    let project = Project::empty();
    let output = project
        .msr()
        .env("PLEX_BASEURL", "http://a,http://b")
        .env("PLEX_TOKEN", "only-one-token")
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("configuration error"), "stderr was: {stderr}");
}

#[test]
fn invalid_log_level_exits_with_configuration_error() {
    let project = Project::empty();
    let output = project
        .msr()
        .env("DEBUG_LEVEL", "VERBOSE")
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("DEBUG_LEVEL"), "stderr was: {stderr}");
}
