//! Splash screen animation state

use std::time::{Duration, Instant};

/// Line typed out under the logo
pub const TAGLINE: &str = "Mechanical | Electrical | Plumbing Design";

/// Animation phase for splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Logo shown while the tagline types out
    Display,
    /// Logo lifting off the top of the screen
    Lift,
    Complete,
}

#[derive(Debug)]
pub struct SplashState {
    pub start_time: Instant,
    pub phase: SplashPhase,
    /// Rows the logo has moved up
    pub lift_offset: f32,
    /// Characters of the tagline currently shown
    pub tagline_chars: usize,
}

impl SplashState {
    const DISPLAY_DURATION: Duration = Duration::from_millis(1500);
    const LIFT_DURATION: Duration = Duration::from_millis(700);
    const TYPE_INTERVAL: Duration = Duration::from_millis(25);

    pub fn new(now: Instant) -> Self {
        Self {
            start_time: now,
            phase: SplashPhase::Display,
            lift_offset: 0.0,
            tagline_chars: 0,
        }
    }

    /// Update animation state for the given instant
    pub fn update(&mut self, now: Instant, terminal_height: u16) {
        if self.phase == SplashPhase::Complete {
            return;
        }
        let elapsed = now.saturating_duration_since(self.start_time);

        let typed = (elapsed.as_millis() / Self::TYPE_INTERVAL.as_millis()) as usize;
        self.tagline_chars = typed.min(TAGLINE.chars().count());

        if elapsed < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            self.lift_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::LIFT_DURATION {
            self.phase = SplashPhase::Lift;
            let progress =
                (elapsed - Self::DISPLAY_DURATION).as_secs_f32() / Self::LIFT_DURATION.as_secs_f32();
            self.lift_offset = simple_easing::cubic_in_out(progress) * f32::from(terminal_height);
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }

    pub fn visible_tagline(&self) -> String {
        TAGLINE.chars().take(self.tagline_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_in_display_phase() {
        let state = SplashState::new(Instant::now());
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.lift_offset, 0.0);
        assert!(state.visible_tagline().is_empty());
    }

    #[test]
    fn test_tagline_types_out() {
        let start = Instant::now();
        let mut state = SplashState::new(start);
        state.update(start + Duration::from_millis(100), 24);
        assert_eq!(state.visible_tagline(), "Mech");

        state.update(start + Duration::from_millis(1400), 24);
        assert_eq!(state.visible_tagline(), TAGLINE);
    }

    #[test]
    fn test_lift_phase_moves_logo() {
        let start = Instant::now();
        let mut state = SplashState::new(start);
        state.update(start + Duration::from_millis(1850), 40);
        assert_eq!(state.phase, SplashPhase::Lift);
        assert!(state.lift_offset > 0.0 && state.lift_offset < 40.0);
    }

    #[test]
    fn test_completes_after_animation() {
        let start = Instant::now();
        let mut state = SplashState::new(start);
        state.update(start + Duration::from_millis(2300), 24);
        assert!(state.is_complete());
    }

    #[test]
    fn test_skip_immediately_completes() {
        let mut state = SplashState::new(Instant::now());
        state.skip();
        state.skip();
        assert!(state.is_complete());
    }

    #[test]
    fn test_update_after_complete_is_noop() {
        let start = Instant::now();
        let mut state = SplashState::new(start);
        state.skip();
        state.update(start, 24);
        assert_eq!(state.phase, SplashPhase::Complete);
    }
}
