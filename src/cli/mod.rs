//! Command-line interface: argument parsing, wiring and output.

pub mod output;
pub mod run;
pub mod types;

pub use run::{execute, open_store, run_once};
pub use types::{Cli, StoreBackendArg};

/// Report a fatal error and exit with status 1.
pub fn handle_error(err: anyhow::Error, json: bool) -> ! {
    tracing::error!(error = %format!("{err:#}"), "fatal error");
    if json {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{body}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
