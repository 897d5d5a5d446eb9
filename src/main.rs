use std::process::ExitCode;

use anyhow::Result;
use tracing::error;
use zilv::{cli::run_cli, utils::runtime::single_thread_runtime};

fn main() -> Result<ExitCode> {
    let exit_code = single_thread_runtime()?
        .block_on(run_cli())
        .inspect_err(|e| {
            error!("Error running cli {e:?}");
        })?;
    Ok(exit_code)
}
