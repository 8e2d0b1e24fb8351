//! Tests for playback state, hover override and parameter changes

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use convviz::animation::{AnimationController, PlaybackState, Tick};
    use convviz::geometry::{AnimationStep, Padding, Parameters};

    const SECOND: Duration = Duration::from_secs(1);

    fn three_by_three() -> Parameters {
        // VALID 4x4 input with a 2x2 filter gives a 3x3 output
        Parameters::clamped(4, 1, 2, 2, 1, 1, Padding::Valid)
    }

    // Tests one tick per second advances one step
    // Verified by advancing on every poll
    #[test]
    fn test_ticks_advance_step() {
        let start = Instant::now();
        let mut controller = AnimationController::new(three_by_three(), start);

        assert_eq!(controller.state(), PlaybackState::Running);
        assert_eq!(controller.displayed_step(), Some(AnimationStep::ORIGIN));
        assert!(!controller.poll(start + Duration::from_millis(500)));
        assert!(controller.poll(start + SECOND));
        assert_eq!(controller.stored_step(), AnimationStep::new(1, 0, 0));
        assert!(controller.poll(start + 2 * SECOND));
        assert_eq!(controller.stored_step(), AnimationStep::new(2, 0, 0));
    }

    // Tests a full cycle of ticks returns to the origin
    // Verified by skipping the filter wrap
    #[test]
    fn test_cycle_through_ticks() {
        let start = Instant::now();
        let mut controller = AnimationController::new(three_by_three(), start);
        for second in 1..=18u32 {
            assert!(controller.poll(start + SECOND * second));
        }
        assert_eq!(controller.stored_step(), AnimationStep::ORIGIN);
    }

    // Tests pausing holds the step and resuming restarts the schedule
    // Verified by leaving the timer running while paused
    #[test]
    fn test_pause_and_resume() {
        let start = Instant::now();
        let mut controller = AnimationController::new(three_by_three(), start);

        assert_eq!(controller.toggle_pause(start), PlaybackState::Paused);
        assert!(controller.next_deadline().is_none());
        assert!(!controller.poll(start + 5 * SECOND));
        assert_eq!(controller.stored_step(), AnimationStep::ORIGIN);

        let resumed = start + 6 * SECOND;
        assert_eq!(controller.toggle_pause(resumed), PlaybackState::Running);
        assert_eq!(controller.next_deadline(), Some(resumed + SECOND));
        assert!(controller.poll(resumed + SECOND));
        assert_eq!(controller.stored_step(), AnimationStep::new(1, 0, 0));
    }

    // Tests hover changes the display but not the stored step, and suppresses ticks
    // Verified by writing the hovered step into the stored step
    #[test]
    fn test_hover_override() {
        let start = Instant::now();
        let mut controller = AnimationController::new(three_by_three(), start);

        assert!(controller.hover(AnimationStep::new(2, 2, 1)));
        assert!(controller.is_hovering());
        assert_eq!(controller.displayed_step(), Some(AnimationStep::new(2, 2, 1)));
        assert!(!controller.poll(start + SECOND));
        assert_eq!(controller.stored_step(), AnimationStep::ORIGIN);

        controller.clear_hover();
        assert_eq!(controller.displayed_step(), Some(AnimationStep::ORIGIN));
        assert!(controller.poll(start + 2 * SECOND));
        assert_eq!(controller.stored_step(), AnimationStep::new(1, 0, 0));
    }

    // Tests hovering outside the output is ignored
    // Verified by accepting any hovered step
    #[test]
    fn test_hover_out_of_range() {
        let start = Instant::now();
        let mut controller = AnimationController::new(three_by_three(), start);
        assert!(!controller.hover(AnimationStep::new(3, 0, 0)));
        assert!(!controller.hover(AnimationStep::new(0, 0, 2)));
        assert!(!controller.is_hovering());
    }

    // Tests changing parameters resets the step and invalidates old ticks
    // Verified by keeping the timer generation across parameter changes
    #[test]
    fn test_parameter_change_resets() {
        let start = Instant::now();
        let mut controller = AnimationController::new(three_by_three(), start);
        assert!(controller.poll(start + SECOND));
        let stale = Tick {
            generation: controller.timer_generation(),
            elapsed_intervals: 1,
        };

        let changed = start + Duration::from_millis(1500);
        controller.set_parameters(three_by_three().with_stride(2), changed);
        assert_eq!(controller.stored_step(), AnimationStep::ORIGIN);
        assert!(!controller.apply_tick(stale));
        assert_eq!(controller.next_deadline(), Some(changed + SECOND));
        assert!(!controller.poll(start + 2 * SECOND));
        assert!(controller.poll(changed + SECOND));
    }

    // Tests setting identical parameters keeps the animation going
    // Verified by resetting unconditionally
    #[test]
    fn test_same_parameters_do_not_reset() {
        let start = Instant::now();
        let mut controller = AnimationController::new(three_by_three(), start);
        assert!(controller.poll(start + SECOND));
        controller.set_parameters(three_by_three(), start + SECOND);
        assert_eq!(controller.stored_step(), AnimationStep::new(1, 0, 0));
    }

    // Tests invalid parameters show nothing and never tick
    // Verified by starting the timer regardless of geometry
    #[test]
    fn test_invalid_parameters() {
        let start = Instant::now();
        let invalid = Parameters::clamped(1, 1, 8, 1, 1, 1, Padding::Valid);
        let mut controller = AnimationController::new(invalid, start);

        assert_eq!(controller.displayed_step(), None);
        assert!(controller.next_deadline().is_none());
        assert!(!controller.poll(start + 3 * SECOND));
        assert!(!controller.hover(AnimationStep::ORIGIN));
        assert!(!controller.geometry().is_valid());
    }

    // Tests a custom interval drives the schedule
    // Verified by ignoring the interval argument
    #[test]
    fn test_with_interval() {
        let start = Instant::now();
        let interval = Duration::from_millis(10);
        let mut controller = AnimationController::with_interval(three_by_three(), interval, start);
        assert_eq!(controller.next_deadline(), Some(start + interval));
        assert!(controller.poll(start + interval));
        assert_eq!(controller.parameters(), &three_by_three());
    }
}
