use std::{
    io,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use tokio::time::Instant;

use super::{BrightnessController, ControllerError};
use crate::util::normalize;

#[derive(Debug)]
struct MockState {
    raw: u64,
    reads: usize,
    writes: Vec<(Instant, u64)>,
    failing_after: Option<usize>,
}

/// A mock [BrightnessController], usable when testing code that drives the
/// trait.
///
/// Every write is recorded together with the (possibly paused) Tokio clock,
/// so tests can check both the written values and their pacing.
#[derive(Debug, Clone)]
pub struct MockBrightnessController {
    max_brightness: u64,
    state: Arc<Mutex<MockState>>,
}

impl MockBrightnessController {
    /// Create a new controller with the given maximum and initial raw
    /// brightness
    pub fn new(max_brightness: u64, initial_raw: u64) -> MockBrightnessController {
        MockBrightnessController {
            max_brightness,
            state: Arc::new(Mutex::new(MockState {
                raw: initial_raw,
                reads: 0,
                writes: Vec::new(),
                failing_after: None,
            })),
        }
    }

    /// Set whether operations on this controller should return an error or not
    pub fn set_failure_mode(&self, should_fail: bool) {
        self.state.lock().unwrap().failing_after = if should_fail { Some(0) } else { None };
    }

    /// Let `writes` more writes succeed, then start failing
    pub fn fail_after_writes(&self, writes: usize) {
        let mut state = self.state.lock().unwrap();
        state.failing_after = Some(state.writes.len() + writes);
    }

    pub fn current_raw(&self) -> u64 {
        self.state.lock().unwrap().raw
    }

    pub fn read_count(&self) -> usize {
        self.state.lock().unwrap().reads
    }

    /// Raw values written so far, in order
    pub fn written_values(&self) -> Vec<u64> {
        self.state
            .lock()
            .unwrap()
            .writes
            .iter()
            .map(|(_, value)| *value)
            .collect()
    }

    /// Times at which the writes happened, in order
    pub fn write_times(&self) -> Vec<Instant> {
        self.state
            .lock()
            .unwrap()
            .writes
            .iter()
            .map(|(time, _)| *time)
            .collect()
    }

    fn failure() -> ControllerError {
        ControllerError::Io {
            path: PathBuf::from("/mock/brightness"),
            source: io::Error::new(io::ErrorKind::Other, "Mock BrightnessController is failing"),
        }
    }
}

#[async_trait]
impl BrightnessController for MockBrightnessController {
    fn max_brightness(&self) -> u64 {
        self.max_brightness
    }

    async fn raw_brightness(&self) -> Result<u64, ControllerError> {
        let mut state = self.state.lock().unwrap();
        if state.failing_after == Some(0) {
            return Err(Self::failure());
        }
        state.reads += 1;
        Ok(state.raw)
    }

    async fn set_raw_brightness(&self, value: i64) -> Result<(), ControllerError> {
        let mut state = self.state.lock().unwrap();
        if let Some(limit) = state.failing_after {
            if state.writes.len() >= limit {
                return Err(Self::failure());
            }
        }
        let value = normalize(value, 0, self.max_brightness as i64) as u64;
        state.raw = value;
        state.writes.push((Instant::now(), value));
        Ok(())
    }
}
