//! Provides abstractions over the kernel interfaces used for brightness control

pub mod brightness;
