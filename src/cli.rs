//! Command line interface, compatible with the one of xbacklight.

use crate::{
    config::{Config, FadeConfig},
    control::{pacing::Pacing, target::Target},
};
use clap::{ArgGroup, Parser};
use std::{path::PathBuf, time::Duration};

/// Options xbacklight spells with a single dash. They are rewritten to their
/// double dash form before parsing.
const LEGACY_OPTIONS: [&str; 14] = [
    "-list", "-get", "-getf", "-set", "-inc", "-dec", "-ctrl", "-time", "-steps", "-fps",
    "-display", "-config", "-help", "-version",
];

/// Control backlight and LED brightness
#[derive(Parser, Debug)]
#[clap(author, version)]
#[clap(allow_negative_numbers = true)]
#[clap(group(
    ArgGroup::new("action")
        .required(true)
        .args(&["list", "getf", "get", "set", "inc", "dec", "percent"])
))]
pub struct Args {
    /// List controllers
    #[clap(long)]
    pub list: bool,

    /// Get fractional brightness
    #[clap(long)]
    pub getf: bool,

    /// Get brightness
    #[clap(long)]
    pub get: bool,

    /// Set brightness
    #[clap(long, value_name = "PERCENT")]
    pub set: Option<f64>,

    /// Increase brightness
    #[clap(long, value_name = "PERCENT")]
    pub inc: Option<f64>,

    /// Decrease brightness
    #[clap(long, value_name = "PERCENT")]
    pub dec: Option<f64>,

    /// [=+-]PERCENT to set, increase, decrease brightness
    #[clap(value_name = "PERCENT")]
    pub percent: Option<Target>,

    /// Set the controller to use, by name or device path
    #[clap(long, value_name = "CONTROLLER")]
    pub ctrl: Option<String>,

    /// Fading period (in milliseconds) [default: 200]
    #[clap(long, value_name = "MILLISECS")]
    pub time: Option<i64>,

    /// Fading steps
    #[clap(long, conflicts_with = "fps")]
    pub steps: Option<i64>,

    /// Fading frame rate
    #[clap(long)]
    pub fps: Option<i64>,

    /// Ignored
    #[clap(long, value_name = "DISPLAY")]
    pub display: Option<String>,

    /// Configuration file to use instead of the default one
    #[clap(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log more, can be repeated
    #[clap(short, long, parse(from_occurrences))]
    pub verbose: u8,
}

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    List,
    Get,
    GetFractional,
    Adjust(Target),
}

impl Args {
    /// Parse arguments, accepting xbacklight's single dash option spelling.
    pub fn parse_compatible<I, T>(args: I) -> Args
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Args::parse_from(modernize_args(args))
    }

    pub fn action(&self) -> Option<Action> {
        if self.list {
            Some(Action::List)
        } else if self.get {
            Some(Action::Get)
        } else if self.getf {
            Some(Action::GetFractional)
        } else if let Some(percent) = self.set {
            Some(Action::Adjust(Target::Set(percent)))
        } else if let Some(percent) = self.inc {
            Some(Action::Adjust(Target::Increase(percent)))
        } else if let Some(percent) = self.dec {
            Some(Action::Adjust(Target::Decrease(percent)))
        } else {
            self.percent.map(Action::Adjust)
        }
    }

    /// The controller to use, either from the command line or the
    /// configuration. [None] means the default controller.
    pub fn controller<'a>(&'a self, config: &'a Config) -> Option<&'a str> {
        self.ctrl.as_deref().or(config.controller.as_deref())
    }

    /// Combine the fading options with the configured defaults. Steps and
    /// frame rate given on the command line replace both configured values.
    ///
    /// Negative values are accepted like xbacklight does and end up as a
    /// single direct write. A negative frame rate still takes priority over
    /// `steps`.
    pub fn pacing(&self, fade: &FadeConfig) -> Pacing {
        let time = self
            .time
            .map_or(fade.time, |time| u64::try_from(time).unwrap_or(0));
        let duration = Duration::from_millis(time);
        if let Some(fps) = self.fps.filter(|fps| *fps < 0) {
            log::debug!("Negative frame rate {}, not fading", fps);
            Pacing::new(0, duration)
        } else if self.steps.is_some() || self.fps.is_some() {
            Pacing::from_options(
                saturate(self.steps.unwrap_or(0)),
                saturate(self.fps.unwrap_or(0)),
                duration,
            )
        } else {
            Pacing::from_options(fade.steps, fade.fps, duration)
        }
    }
}

fn saturate(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Rewrite xbacklight style `-option` arguments to `--option`.
pub fn modernize_args<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if LEGACY_OPTIONS.contains(&arg.as_str()) {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}
