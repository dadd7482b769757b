//! vim-jp-issues-bot entry point.

use clap::Parser;

use vim_jp_issues_bot::cli::{self, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = cli::execute(cli).await {
        cli::handle_error(err, json);
    }
}
