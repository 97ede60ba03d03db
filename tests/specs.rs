#[path = "prelude.rs"]
mod prelude;

mod specs {
    #[path = "cli/config_errors.rs"]
    mod config_errors;
    #[path = "cli/run_once.rs"]
    mod run_once;
}
