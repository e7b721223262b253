#![warn(missing_docs)]

//! Control backlight and LED brightness on Linux using the `sys` filesystem,
//! with a user interface compatible with xbacklight.

mod cli;
mod config;
mod control;
mod external;
mod util;

use anyhow::{Context, Result};
use cli::{Action, Args};
use config::Config;
use control::sweep::{apply_transition, Transition};
use external::brightness::{discovery, BrightnessController};
use flexi_logger::{Logger, LoggerHandle};
use std::io::{self, Write};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse_compatible(std::env::args());
    let _logger = start_logger(args.verbose)?;
    log_panics::init();
    let config = Config::load(args.config.as_deref()).await?;
    run(&args, &config, &mut io::stdout()).await
}

fn start_logger(verbosity: u8) -> Result<LoggerHandle> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Logger::try_with_env_or_str(level)
        .context("Invalid log specification")?
        .start()
        .context("Couldn't start the logger")
}

async fn run<W: Write>(args: &Args, config: &Config, out: &mut W) -> Result<()> {
    let action = args.action().context("No action given")?;
    let registry = discovery::discover(&config.discovery.paths).await;

    if action == Action::List {
        if registry.is_empty() {
            log::warn!("No controllers found");
        }
        for name in registry.names() {
            writeln!(out, "{}", name)?;
        }
        return Ok(());
    }

    // Resolved only now, so that a usage error never touches any device
    let controller = registry.resolve(args.controller(config)).await?;
    match action {
        Action::List => {}
        Action::Get => writeln!(out, "{:.0}", controller.brightness().await?)?,
        Action::GetFractional => writeln!(out, "{:.2}", controller.brightness().await?)?,
        Action::Adjust(target) => {
            let pacing = args.pacing(&config.fade);
            let transition = apply_transition(&controller, target, pacing)
                .await
                .with_context(|| {
                    format!(
                        "Couldn't change brightness of {}",
                        controller.device_path().display()
                    )
                })?;
            match transition {
                Transition::Unchanged => log::info!("Brightness left unchanged"),
                Transition::Direct { target } => log::info!("Brightness set to {:.2}%", target),
                Transition::Swept { target, steps } => {
                    log::info!("Brightness faded to {:.2}% in {} steps", target, steps)
                }
            }
        }
    }
    Ok(())
}
