
use std::path::{Path, PathBuf};

/// Create a fake sysfs device directory `base/name` with the given maximum
/// and current brightness.
pub fn make_device(base: &Path, name: &str, max: &str, current: &str) -> PathBuf {
    let device = base.join(name);
    std::fs::create_dir_all(&device).unwrap();
    std::fs::write(device.join("max_brightness"), max).unwrap();
    std::fs::write(device.join("brightness"), current).unwrap();
    device
}
