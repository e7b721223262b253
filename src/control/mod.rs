//! Control layer - turning brightness targets into device writes

pub mod pacing;
pub mod sweep;
pub mod target;

#[cfg(test)]
mod test;
