use super::ControllerError;
use async_trait::async_trait;

/// A trait allowing to read and set the brightness of a single device.
///
/// Implementors only provide access to the device's raw integer scale. The
/// percentage view is derived from it: reads are an exact ratio, while
/// writes truncate toward zero (see [raw_from_percentage]).
#[async_trait]
pub trait BrightnessController: Send + Sync {
    /// The device's maximum raw brightness, read once when the controller is
    /// created.
    fn max_brightness(&self) -> u64;

    /// Read the current raw brightness from the device.
    async fn raw_brightness(&self) -> Result<u64, ControllerError>;

    /// Write a raw brightness value. Values outside of `[0, max_brightness]`
    /// are clamped rather than rejected.
    async fn set_raw_brightness(&self, value: i64) -> Result<(), ControllerError>;

    /// Current brightness as a percentage in `[0, 100]`.
    async fn brightness(&self) -> Result<f64, ControllerError> {
        let raw = self.raw_brightness().await?;
        Ok(raw as f64 / self.max_brightness() as f64 * 100.0)
    }

    /// Set brightness to the given percentage.
    async fn set_brightness(&self, percentage: f64) -> Result<(), ControllerError> {
        self.set_raw_brightness(raw_from_percentage(percentage, self.max_brightness()))
            .await
    }
}

/// Convert a percentage into a raw value on a `[0, max_brightness]` scale.
///
/// The result is truncated toward zero, not rounded, so writing a percentage
/// and reading it back can come out up to one raw unit lower than requested.
// TODO: round instead of truncating, written values would change by at most
// one raw unit.
pub fn raw_from_percentage(percentage: f64, max_brightness: u64) -> i64 {
    // `as` saturates on overflow and maps NaN to 0
    (percentage * max_brightness as f64 / 100.0).trunc() as i64
}
