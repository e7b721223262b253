use std::time::Duration;

/// How a brightness transition is spread over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub steps: u32,
    pub duration: Duration,
}

impl Pacing {
    pub fn new(steps: u32, duration: Duration) -> Pacing {
        Pacing { steps, duration }
    }

    /// Build the pacing from an explicit step count and a frame rate. When the
    /// frame rate yields a non-zero step count, it takes priority over
    /// `steps`.
    pub fn from_options(steps: u32, fps: u32, duration: Duration) -> Pacing {
        let derived = steps_for_frame_rate(fps, duration);
        Pacing {
            steps: if derived != 0 { derived } else { steps },
            duration,
        }
    }

    /// Whether the transition should be animated at all. Single-step or
    /// sub-millisecond transitions are applied with one direct write.
    pub fn is_animated(&self) -> bool {
        self.steps > 1 && self.duration >= Duration::from_millis(1)
    }

    /// How long to wait after each write of the sweep.
    pub fn step_delay(&self) -> Duration {
        self.duration.checked_div(self.steps).unwrap_or(Duration::ZERO)
    }
}

/// The number of frames `fps` frames per second produce over `duration`,
/// rounded down.
pub fn steps_for_frame_rate(fps: u32, duration: Duration) -> u32 {
    let steps = u128::from(fps) * duration.as_millis() / 1000;
    u32::try_from(steps).unwrap_or(u32::MAX)
}
