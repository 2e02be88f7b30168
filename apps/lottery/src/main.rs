use lottery::cli::Cli;
use lottery::commands::draw::run;
use lottery::error::LotteryError;

use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli, &mut stdout()).await {
        Ok(_) => ExitCode::SUCCESS,
        // The localized alert is already on stdout.
        Err(e @ LotteryError::Rejected { .. }) => ExitCode::from(e.exit_code()),
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
