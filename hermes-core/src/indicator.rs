//! Non-Blocking Status Indicator
//!
//! ## Overview
//!
//! The node has a single status light. Each time the classified status
//! changes, the light plays a short burst of blinks whose length and speed
//! identify the new status, then goes dark until the next change:
//!
//! | Status    | Blink cycles | Toggle interval |
//! |-----------|--------------|-----------------|
//! | Normal    | 1            | 100 ms          |
//! | Attention | 2            | 150 ms          |
//! | Critical  | 5            | 100 ms          |
//!
//! ## State Machine
//!
//! ```text
//!            on_status_changed(new != active)
//!   ┌──────┐ ───────────────────────────────▶ ┌──────────┐
//!   │ Idle │                                  │ Blinking │ ◀─┐ tick: interval elapsed,
//!   │ dark │ ◀─────────────────────────────── │          │ ──┘ toggle, remaining -= 1
//!   └──────┘   tick: remaining == 0           └──────────┘
//! ```
//!
//! The controller never waits. [`IndicatorController::tick`] is called on every
//! control-loop iteration and does at most one device write. All timing is
//! derived from the timestamp passed in, using wrapping subtraction, so a
//! clock overflow mid-pattern does not stall or rush the blinks.

use crate::classifier::HealthStatus;
use crate::constants::indicator::{
    ATTENTION_BLINK_CYCLES, ATTENTION_TOGGLE_INTERVAL_MS, CRITICAL_BLINK_CYCLES,
    DEFAULT_TOGGLE_INTERVAL_MS, NORMAL_BLINK_CYCLES, TRANSITIONS_PER_CYCLE,
};
use crate::time::{elapsed, Millis};
use crate::traits::IndicatorDevice;

/// Blink cadence associated with a status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkPattern {
    /// Number of on/off cycles
    pub cycles: u8,
    /// Time between consecutive toggles
    pub interval_ms: Millis,
}

impl BlinkPattern {
    pub const fn for_status(status: HealthStatus) -> Self {
        match status {
            HealthStatus::Normal => Self {
                cycles: NORMAL_BLINK_CYCLES,
                interval_ms: DEFAULT_TOGGLE_INTERVAL_MS,
            },
            HealthStatus::Attention => Self {
                cycles: ATTENTION_BLINK_CYCLES,
                interval_ms: ATTENTION_TOGGLE_INTERVAL_MS,
            },
            HealthStatus::Critical => Self {
                cycles: CRITICAL_BLINK_CYCLES,
                interval_ms: DEFAULT_TOGGLE_INTERVAL_MS,
            },
        }
    }

    /// Number of device toggles needed to render the pattern
    pub const fn transitions(&self) -> u8 {
        self.cycles * TRANSITIONS_PER_CYCLE
    }
}

/// Coarse state of the indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorPhase {
    /// Pattern exhausted, light held dark
    Idle,
    /// Pattern in progress
    Blinking,
}

/// Full mutable state of the indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorState {
    /// Status whose pattern is (or was last) rendered
    pub active_pattern: HealthStatus,
    pub transitions_remaining: u8,
    /// `None` right after a status change: the next tick toggles immediately
    pub last_toggle_ms: Option<Millis>,
    pub currently_lit: bool,
}

impl IndicatorState {
    /// Idle and dark, with Normal as the rendered pattern
    ///
    /// A node that boots healthy therefore stays dark on its first Normal
    /// reading; only changes are announced.
    pub const fn initial() -> Self {
        Self {
            active_pattern: HealthStatus::Normal,
            transitions_remaining: 0,
            last_toggle_ms: None,
            currently_lit: false,
        }
    }

    pub const fn phase(&self) -> IndicatorPhase {
        if self.transitions_remaining == 0 {
            IndicatorPhase::Idle
        } else {
            IndicatorPhase::Blinking
        }
    }
}

impl Default for IndicatorState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Renders the current status on an [`IndicatorDevice`] without blocking
#[derive(Debug)]
pub struct IndicatorController<D> {
    device: D,
    state: IndicatorState,
}

impl<D: IndicatorDevice> IndicatorController<D> {
    pub fn new(device: D) -> Self {
        Self {
            device,
            state: IndicatorState::initial(),
        }
    }

    pub fn state(&self) -> &IndicatorState {
        &self.state
    }

    pub fn phase(&self) -> IndicatorPhase {
        self.state.phase()
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }

    /// Toggle interval of the active pattern
    pub fn interval_ms(&self) -> Millis {
        BlinkPattern::for_status(self.state.active_pattern).interval_ms
    }

    /// Re-arm the pattern when `status` differs from the one rendered
    ///
    /// Returns `true` when a new pattern was armed. The first toggle of the
    /// new pattern happens on the next [`tick`](Self::tick), whatever the
    /// time since the previous toggle.
    pub fn on_status_changed(&mut self, status: HealthStatus) -> bool {
        if status == self.state.active_pattern {
            return false;
        }

        self.state = IndicatorState {
            active_pattern: status,
            transitions_remaining: BlinkPattern::for_status(status).transitions(),
            last_toggle_ms: None,
            currently_lit: false,
        };
        // The first toggle lights up, so it must start from dark to be seen
        self.device.set_lit(false);
        true
    }

    /// Advance the pattern to `now`
    ///
    /// Returns `true` when the light was toggled on this call. While idle,
    /// every call drives the light dark.
    pub fn tick(&mut self, now: Millis) -> bool {
        if self.state.transitions_remaining == 0 {
            self.state.currently_lit = false;
            self.device.set_lit(false);
            return false;
        }

        let due = match self.state.last_toggle_ms {
            None => true,
            Some(last) => elapsed(now, last) >= self.interval_ms(),
        };
        if !due {
            return false;
        }

        self.state.currently_lit = !self.state.currently_lit;
        self.device.set_lit(self.state.currently_lit);
        self.state.last_toggle_ms = Some(now);
        self.state.transitions_remaining -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every write made to the light
    #[derive(Debug, Default)]
    struct RecordingLight {
        writes: Vec<bool>,
    }

    impl IndicatorDevice for RecordingLight {
        fn set_lit(&mut self, lit: bool) {
            self.writes.push(lit);
        }
    }

    impl RecordingLight {
        fn last(&self) -> Option<bool> {
            self.writes.last().copied()
        }
    }

    /// Tick every `step` ms from `start` for `duration` ms, collecting toggle instants
    fn run(
        controller: &mut IndicatorController<RecordingLight>,
        start: Millis,
        step: Millis,
        duration: Millis,
    ) -> Vec<Millis> {
        let mut toggles = Vec::new();
        let mut offset = 0;
        while offset <= duration {
            let now = start.wrapping_add(offset);
            if controller.tick(now) {
                toggles.push(now);
            }
            offset += step;
        }
        toggles
    }

    #[test]
    fn starts_idle_and_dark() {
        let mut controller = IndicatorController::new(RecordingLight::default());
        assert_eq!(controller.phase(), IndicatorPhase::Idle);

        assert!(!controller.tick(0));
        assert_eq!(controller.device().last(), Some(false));
    }

    #[test]
    fn unchanged_status_does_not_rearm() {
        let mut controller = IndicatorController::new(RecordingLight::default());
        assert!(!controller.on_status_changed(HealthStatus::Normal));
        assert_eq!(controller.phase(), IndicatorPhase::Idle);
    }

    #[test]
    fn attention_renders_four_toggles_at_150ms() {
        let mut controller = IndicatorController::new(RecordingLight::default());
        assert!(controller.on_status_changed(HealthStatus::Attention));
        assert_eq!(controller.state().transitions_remaining, 4);

        let toggles = run(&mut controller, 1_000, 10, 2_000);

        assert_eq!(toggles, vec![1_000, 1_150, 1_300, 1_450]);
        assert_eq!(controller.phase(), IndicatorPhase::Idle);
        assert_eq!(controller.device().last(), Some(false));
    }

    #[test]
    fn critical_renders_ten_toggles_at_100ms() {
        let mut controller = IndicatorController::new(RecordingLight::default());
        controller.on_status_changed(HealthStatus::Critical);

        let toggles = run(&mut controller, 0, 50, 3_000);

        assert_eq!(toggles.len(), 10);
        for pair in toggles.windows(2) {
            assert_eq!(pair[1] - pair[0], 100);
        }
    }

    #[test]
    fn returning_to_normal_blinks_once() {
        let mut controller = IndicatorController::new(RecordingLight::default());
        controller.on_status_changed(HealthStatus::Critical);
        run(&mut controller, 0, 100, 2_000);

        assert!(controller.on_status_changed(HealthStatus::Normal));
        let toggles = run(&mut controller, 5_000, 100, 1_000);
        assert_eq!(toggles, vec![5_000, 5_100]);
    }

    #[test]
    fn idle_stays_dark() {
        let mut controller = IndicatorController::new(RecordingLight::default());
        controller.on_status_changed(HealthStatus::Attention);
        run(&mut controller, 0, 50, 1_000);

        let writes_before = controller.device().writes.len();
        let toggles = run(&mut controller, 2_000, 100, 1_000);

        assert!(toggles.is_empty());
        let tail = &controller.device().writes[writes_before..];
        assert!(!tail.is_empty());
        assert!(tail.iter().all(|lit| !lit));
    }

    #[test]
    fn change_mid_pattern_restarts_from_dark() {
        let mut controller = IndicatorController::new(RecordingLight::default());
        controller.on_status_changed(HealthStatus::Critical);
        assert!(controller.tick(0));
        assert_eq!(controller.device().last(), Some(true));

        controller.on_status_changed(HealthStatus::Attention);
        assert!(!controller.state().currently_lit);
        assert_eq!(controller.device().last(), Some(false));
        // Immediate first toggle even though only 10 ms passed
        assert!(controller.tick(10));
        assert_eq!(controller.device().last(), Some(true));
        assert_eq!(controller.state().transitions_remaining, 3);
    }

    #[test]
    fn change_while_lit_keeps_every_blink_visible() {
        let mut controller = IndicatorController::new(RecordingLight::default());
        controller.on_status_changed(HealthStatus::Critical);
        controller.tick(0);
        let rearm_at = controller.device().writes.len();

        controller.on_status_changed(HealthStatus::Attention);
        run(&mut controller, 0, 10, 2_000);

        // Level changes seen from the moment of the re-arm, light starting lit
        let mut level = true;
        let mut changes = 0;
        for &lit in &controller.device().writes[rearm_at..] {
            if lit != level {
                changes += 1;
                level = lit;
            }
        }
        // Forced dark, then the four Attention transitions
        assert_eq!(changes, 1 + 4);
        assert!(!level);
    }

    #[test]
    fn toggles_across_clock_wraparound() {
        let mut controller = IndicatorController::new(RecordingLight::default());
        controller.on_status_changed(HealthStatus::Attention);

        let start = u32::MAX - 199;
        let toggles = run(&mut controller, start, 10, 1_000);

        assert_eq!(toggles, vec![start, u32::MAX - 49, 100, 250]);
        // Third toggle is numerically smaller than the second
        assert!(toggles[2] < toggles[1]);
        for pair in toggles.windows(2) {
            assert_eq!(elapsed(pair[1], pair[0]), 150);
        }
    }

    #[test]
    fn device_written_only_on_toggle_while_blinking() {
        let mut controller = IndicatorController::new(RecordingLight::default());
        controller.on_status_changed(HealthStatus::Attention);

        controller.tick(0);
        controller.tick(50);
        controller.tick(100);
        // Dark on re-arm, then the single toggle
        assert_eq!(controller.device().writes, vec![false, true]);
    }
}
