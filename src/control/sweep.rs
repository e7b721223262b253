//! Animated brightness transitions.

use super::{pacing::Pacing, target::Target};
use crate::external::brightness::{BrightnessController, ControllerError};
use std::{iter::FusedIterator, time::Duration};

/// The brightness values a sweep from `current` to `target` passes through.
///
/// Yields `steps - 1` evenly spaced intermediate percentages followed by
/// exactly `target`, so the last value never suffers from rounding errors in
/// the interpolation. All values are computed from the `current` brightness
/// captured at construction.
#[derive(Debug, Clone)]
pub struct BrightnessSweep {
    current: f64,
    target: f64,
    steps: u32,
    step: u32,
    finished: bool,
}

impl BrightnessSweep {
    pub fn new(current: f64, target: f64, steps: u32) -> BrightnessSweep {
        BrightnessSweep {
            current,
            target,
            steps,
            step: 1,
            finished: false,
        }
    }
}

impl Iterator for BrightnessSweep {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.step < self.steps {
            let value = self.current
                + (self.target - self.current) * f64::from(self.step) / f64::from(self.steps);
            self.step += 1;
            Some(value)
        } else if !self.finished {
            self.finished = true;
            Some(self.target)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.finished {
            0
        } else {
            self.steps.saturating_sub(self.step) as usize + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BrightnessSweep {}

impl FusedIterator for BrightnessSweep {}

/// Gradually move `controller` from `current` to `target` percent in `steps`
/// writes, waiting `duration / steps` after each one.
///
/// The first failing write aborts the sweep, leaving the device at the last
/// successfully written value.
pub async fn sweep_brightness<B: BrightnessController + ?Sized>(
    controller: &B,
    current: f64,
    target: f64,
    steps: u32,
    duration: Duration,
) -> Result<(), ControllerError> {
    let delay = Pacing::new(steps, duration).step_delay();
    log::debug!(
        "Sweeping from {:.2}% to {:.2}% in {} steps, {:?} apart",
        current,
        target,
        steps,
        delay
    );
    for value in BrightnessSweep::new(current, target, steps) {
        controller.set_brightness(value).await?;
        tokio::time::sleep(delay).await;
    }
    Ok(())
}

/// What [apply_transition] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// The controller was already at the target
    Unchanged,
    /// The target was written directly
    Direct { target: f64 },
    /// The target was reached by a sweep
    Swept { target: f64, steps: u32 },
}

/// Move `controller` to `target`, animating the change if `pacing` asks for
/// it.
///
/// The current brightness is read exactly once. Nothing is written when it
/// already equals the target, and transitions which aren't animated (see
/// [Pacing::is_animated]) are applied with a single write.
pub async fn apply_transition<B: BrightnessController + ?Sized>(
    controller: &B,
    target: Target,
    pacing: Pacing,
) -> Result<Transition, ControllerError> {
    let current = controller.brightness().await?;
    let target = target.resolve(current);
    if current == target {
        log::debug!("Brightness is already at {:.2}%", target);
        Ok(Transition::Unchanged)
    } else if !pacing.is_animated() {
        log::debug!("Setting brightness from {:.2}% to {:.2}%", current, target);
        controller.set_brightness(target).await?;
        Ok(Transition::Direct { target })
    } else {
        log::debug!("Fading brightness from {:.2}% to {:.2}%", current, target);
        sweep_brightness(controller, current, target, pacing.steps, pacing.duration).await?;
        Ok(Transition::Swept {
            target,
            steps: pacing.steps,
        })
    }
}
