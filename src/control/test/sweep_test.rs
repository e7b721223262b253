use std::time::Duration;

use crate::{
    control::sweep::{sweep_brightness, BrightnessSweep},
    external::brightness::mock::MockBrightnessController,
};
use tokio::time::Instant;

#[test]
fn test_sweep_values() {
    let values: Vec<f64> = BrightnessSweep::new(50.0, 75.0, 5).collect();
    assert_eq!(values, vec![55.0, 60.0, 65.0, 70.0, 75.0]);

    let values: Vec<f64> = BrightnessSweep::new(80.0, 20.0, 5).collect();
    assert_eq!(values, vec![68.0, 56.0, 44.0, 32.0, 20.0]);
}

#[test]
fn test_degenerate_step_counts() {
    assert_eq!(BrightnessSweep::new(10.0, 30.0, 0).collect::<Vec<_>>(), vec![30.0]);
    assert_eq!(BrightnessSweep::new(10.0, 30.0, 1).collect::<Vec<_>>(), vec![30.0]);
    assert_eq!(
        BrightnessSweep::new(10.0, 30.0, 2).collect::<Vec<_>>(),
        vec![20.0, 30.0]
    );
}

#[test]
fn test_sweep_ends_exactly_at_target() {
    let target = 100.0 / 3.0;
    let mut sweep = BrightnessSweep::new(0.0, target, 7);
    assert_eq!(sweep.len(), 7);
    assert_eq!(sweep.by_ref().last(), Some(target));
    assert_eq!(sweep.next(), None);
    assert_eq!(sweep.len(), 0);
}

#[test]
fn test_sweep_never_overshoots() {
    for target in 10..=100 {
        for steps in 0..=10 {
            let sweep = BrightnessSweep::new(0.0, f64::from(target), steps);
            assert_eq!(sweep.len(), steps.max(1) as usize);
            for value in sweep {
                assert!(
                    value <= f64::from(target),
                    "{} overshoots {} with {} steps",
                    value,
                    target,
                    steps
                );
            }
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_sweep_pacing() {
    let controller = MockBrightnessController::new(100, 50);
    let start = Instant::now();
    sweep_brightness(&controller, 50.0, 75.0, 5, Duration::from_millis(500))
        .await
        .expect("Sweep failed");

    assert_eq!(controller.written_values(), vec![55, 60, 65, 70, 75]);
    let times = controller.write_times();
    assert!(times[0] - start < Duration::from_millis(1));
    for pair in times.windows(2) {
        let gap = pair[1] - pair[0];
        assert!(
            gap >= Duration::from_millis(100) && gap < Duration::from_millis(102),
            "Unexpected gap {:?}",
            gap
        );
    }
    assert!(start.elapsed() >= Duration::from_millis(500));
    // The sweep never reads the device, it works from the value it was given
    assert_eq!(controller.read_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_sweep_aborts_on_failure() {
    let controller = MockBrightnessController::new(100, 50);
    controller.fail_after_writes(2);
    sweep_brightness(&controller, 50.0, 75.0, 5, Duration::from_millis(500))
        .await
        .expect_err("Sweep didn't report a failed write");
    assert_eq!(controller.written_values(), vec![55, 60]);
    assert_eq!(controller.current_raw(), 60);
}
