//! Brightness targets as given on the command line.

use crate::util::normalize;
use std::str::FromStr;
use thiserror::Error;

/// Where the brightness should end up, relative to where it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Target {
    /// Set an absolute percentage
    Set(f64),
    /// Increase by a number of percentage points
    Increase(f64),
    /// Decrease by a number of percentage points
    Decrease(f64),
}

impl Target {
    /// Compute the target percentage for a controller currently at `current`
    /// percent. The result is always within `[0, 100]`.
    pub fn resolve(&self, current: f64) -> f64 {
        let target = match *self {
            Target::Set(value) => value,
            Target::Increase(delta) => current + delta,
            Target::Decrease(delta) => current - delta,
        };
        normalize(target, 0.0, 100.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetParseError {
    #[error("empty brightness value")]
    Empty,

    #[error("{0:?} is not a valid [=+-]PERCENT value")]
    Invalid(String),
}

/// Parses the `[=+-]PERCENT` syntax. A bare number sets the brightness.
impl FromStr for Target {
    type Err = TargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (constructor, number): (fn(f64) -> Target, &str) = match s.chars().next() {
            None => return Err(TargetParseError::Empty),
            Some('=') => (Target::Set, &s[1..]),
            Some('+') => (Target::Increase, &s[1..]),
            Some('-') => (Target::Decrease, &s[1..]),
            Some(c) if c.is_ascii_digit() || c == '.' => (Target::Set, s),
            Some(_) => return Err(TargetParseError::Invalid(s.to_owned())),
        };
        let number = number.trim();
        if number.starts_with(&['+', '-'][..]) {
            return Err(TargetParseError::Invalid(s.to_owned()));
        }
        match number.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(constructor(value)),
            _ => Err(TargetParseError::Invalid(s.to_owned())),
        }
    }
}
