use clap::Parser;
use std::process::ExitCode;

use typefully_mcp_gateway::{cli, infra};

#[tokio::main]
async fn main() -> ExitCode {
    infra::logging::init();

    let args = cli::Cli::parse();
    if let Some(command) = args.command {
        return cli::run_commands(command).await;
    }

    match infra::boot::run_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "gateway failed to start");
            ExitCode::FAILURE
        }
    }
}
