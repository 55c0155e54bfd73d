mod cli;
mod setup;

use std::io::Write as _;

use clap::Parser;
use snafu::{prelude::*, Whatever};
use stay_focused::driver::DriverHandle;

use crate::cli::Arguments;

#[snafu::report]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Whatever> {
    let arg = Arguments::parse();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(arg.verbosity)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .whatever_context("Could not setup logger")?;

    let handle = setup::bootstrap(&arg).await?;

    if !arg.wait {
        handle.start().await;
    }

    let mut ticker = tokio::time::interval(std::time::Duration::from_secs(1));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                render(&handle).await.whatever_context("Could not render the timer")?;
            }
            res = tokio::signal::ctrl_c() => {
                res.whatever_context("Could not listen for the shutdown signal")?;
                break;
            }
        }
    }

    println!();
    handle.shutdown().await;

    Ok(())
}

async fn render(handle: &DriverHandle) -> Result<(), std::io::Error> {
    let report = handle.query().await;
    let mut stdout = std::io::stdout();
    write!(
        stdout,
        "\r{} {} ({})   ",
        report.kind, report.formatted_remaining, report.status
    )?;
    stdout.flush()
}
