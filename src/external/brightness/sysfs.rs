use super::{BrightnessController, ControllerError};
use crate::util::normalize;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// The name of the file that contains the maximum brightness value
pub const MAXIMUM_BRIGHTNESS_FILE: &str = "max_brightness";

/// The name of the file that contains the brightness value
pub const BRIGHTNESS_FILE: &str = "brightness";

/// The minimum brightness value that a controller can take
pub const MINIMUM_BRIGHTNESS_VALUE: i64 = 0;

/// A [BrightnessController] for a device directory in the kernel's
/// `/sys/class/backlight` or `/sys/class/leds` device classes.
///
/// The maximum brightness is read once, when the controller is created. The
/// `brightness` attribute is opened anew on every access, so each read sees
/// the value the kernel currently reports and writes never depend on a
/// previous file position.
#[derive(Debug, Clone)]
pub struct SysfsBrightnessController {
    device_path: PathBuf,
    brightness_path: PathBuf,
    max_brightness: u64,
}

impl SysfsBrightnessController {
    /// Create a controller for the device directory at `device_path`.
    ///
    /// Fails if `max_brightness` can't be read or doesn't contain a positive
    /// integer, or if `brightness` can't be opened for both reading and
    /// writing.
    pub async fn new(device_path: impl Into<PathBuf>) -> Result<Self, ControllerError> {
        let device_path = device_path.into();
        let max_path = device_path.join(MAXIMUM_BRIGHTNESS_FILE);
        let max_brightness = read_number_from_file(&max_path).await?;
        if max_brightness == 0 {
            return Err(ControllerError::MalformedValue {
                path: max_path,
                value: "0".to_owned(),
            });
        }

        let brightness_path = device_path.join(BRIGHTNESS_FILE);
        OpenOptions::new()
            .read(true)
            .write(true)
            .open(&brightness_path)
            .await
            .map_err(ControllerError::io(&brightness_path))?;

        log::debug!(
            "Opened controller {} with maximum brightness {}",
            device_path.display(),
            max_brightness
        );
        Ok(SysfsBrightnessController {
            device_path,
            brightness_path,
            max_brightness,
        })
    }

    pub fn device_path(&self) -> &Path {
        &self.device_path
    }
}

#[async_trait]
impl BrightnessController for SysfsBrightnessController {
    fn max_brightness(&self) -> u64 {
        self.max_brightness
    }

    async fn raw_brightness(&self) -> Result<u64, ControllerError> {
        read_number_from_file(&self.brightness_path).await
    }

    async fn set_raw_brightness(&self, value: i64) -> Result<(), ControllerError> {
        let max = i64::try_from(self.max_brightness).unwrap_or(i64::MAX);
        let value = normalize(value, MINIMUM_BRIGHTNESS_VALUE, max);
        log::trace!("Writing {} to {}", value, self.brightness_path.display());

        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.brightness_path)
            .await
            .map_err(ControllerError::io(&self.brightness_path))?;
        file.write_all(value.to_string().as_bytes())
            .await
            .map_err(ControllerError::io(&self.brightness_path))?;
        file.flush()
            .await
            .map_err(ControllerError::io(&self.brightness_path))
    }
}

async fn read_number_from_file(path: &Path) -> Result<u64, ControllerError> {
    let contents = fs::read_to_string(path)
        .await
        .map_err(ControllerError::io(path))?;
    contents
        .trim()
        .parse()
        .map_err(|_| ControllerError::MalformedValue {
            path: path.to_owned(),
            value: contents.trim().to_owned(),
        })
}
