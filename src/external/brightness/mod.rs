//! Control of backlight and LED brightness
pub mod discovery;
mod error;
pub mod interface;
#[cfg(test)]
pub mod mock;
pub mod sysfs;

pub use error::ControllerError;
pub use interface::*;

#[cfg(test)]
pub(crate) mod test;
