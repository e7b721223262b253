//! Enumeration of the brightness controllers the kernel exposes.

use super::{sysfs::SysfsBrightnessController, ControllerError};
use std::path::{Path, PathBuf};
use tokio::fs;

/// The paths where the backlight controllers can be found
pub const CONTROLLERS_PATHS: [&str; 2] = ["/sys/class/backlight", "/sys/class/leds"];

/// Controllers found by [discover], mapping each controller's name to its
/// device directory.
///
/// Entries keep the order in which they were first discovered. When a name is
/// discovered again, its path is replaced but its position stays the same.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerRegistry {
    entries: Vec<(String, PathBuf)>,
}

impl ControllerRegistry {
    pub fn new() -> ControllerRegistry {
        ControllerRegistry::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        let name = name.into();
        let path = path.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => {
                log::debug!(
                    "Controller {} at {} shadows {}",
                    name,
                    path.display(),
                    entry.1.display()
                );
                entry.1 = path;
            }
            None => self.entries.push((name, path)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(name, _)| name)
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.iter().find(|(n, _)| *n == name).map(|(_, path)| path)
    }

    /// The controller used when none is requested explicitly: the first one
    /// discovered.
    pub fn default_controller(&self) -> Option<&Path> {
        self.entries.first().map(|(_, path)| path.as_path())
    }

    /// Find the device directory for `selector`, which is either a full
    /// device path or a controller name.
    pub fn lookup(&self, selector: &str) -> Option<&Path> {
        let selector_path = Path::new(selector);
        self.iter()
            .find(|(_, path)| *path == selector_path)
            .map(|(_, path)| path)
            .or_else(|| self.get(selector))
    }

    /// Open the controller selected by `selector`, or the default controller
    /// when it's [None].
    ///
    /// An unknown selector is reported before any device file is touched.
    pub async fn resolve(
        &self,
        selector: Option<&str>,
    ) -> Result<SysfsBrightnessController, ControllerError> {
        let path = match selector {
            Some(selector) => self
                .lookup(selector)
                .ok_or_else(|| ControllerError::UnknownController(selector.to_owned()))?,
            None => self
                .default_controller()
                .ok_or(ControllerError::NoControllers)?,
        };
        log::debug!("Using controller at {}", path.display());
        SysfsBrightnessController::new(path).await
    }
}

/// Scan every directory in `bases`, in order, for controller directories.
///
/// Entries within a directory are taken in the order the filesystem lists
/// them. Directories which don't exist or can't be listed are skipped.
pub async fn discover<P: AsRef<Path>>(bases: &[P]) -> ControllerRegistry {
    let mut registry = ControllerRegistry::new();
    for base in bases {
        let base = base.as_ref();
        let mut entries = match fs::read_dir(base).await {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("Skipping {}: {}", base.display(), e);
                continue;
            }
        };
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    registry.insert(entry.file_name().to_string_lossy(), entry.path());
                }
                Ok(None) => break,
                Err(e) => {
                    log::warn!("Failed listing {}: {}", base.display(), e);
                    break;
                }
            }
        }
    }
    log::debug!("Discovered {} controllers", registry.len());
    registry
}
