//! Auto-advancing carousel state machine
//!
//! The controller never reads the clock itself; every operation takes `now`
//! so the event loop and the tests drive time explicitly.

use std::time::{Duration, Instant};

/// Length of the slide enter animation
pub const TRANSITION_DURATION: Duration = Duration::from_millis(400);

/// Horizontal drag distance, in columns, that counts as a swipe
pub const SWIPE_THRESHOLD: u16 = 6;

/// Which way the last slide change went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Less => Direction::Backward,
            std::cmp::Ordering::Equal => Direction::Still,
            std::cmp::Ordering::Greater => Direction::Forward,
        }
    }

    pub fn sign(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Still => 0,
            Direction::Forward => 1,
        }
    }
}

/// Deadline of the next automatic advance
///
/// A carousel owns at most one timer; it exists only while mounted.
#[derive(Debug)]
pub struct SlideTimer {
    period: Duration,
    deadline: Instant,
}

impl SlideTimer {
    fn start(period: Duration, now: Instant) -> Self {
        Self {
            period,
            deadline: now + period,
        }
    }

    fn restart(&mut self, now: Instant) {
        self.deadline = now + self.period;
    }

    fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

impl Drop for SlideTimer {
    fn drop(&mut self) {
        tracing::debug!(period = ?self.period, "slide timer released");
    }
}

#[derive(Debug)]
pub struct CarouselController {
    name: &'static str,
    len: usize,
    current: usize,
    direction: Direction,
    paused: bool,
    period: Duration,
    timer: Option<SlideTimer>,
    changed_at: Option<Instant>,
}

impl CarouselController {
    pub fn new(name: &'static str, len: usize, period: Duration) -> Self {
        Self {
            name,
            len,
            current: 0,
            direction: Direction::Still,
            paused: false,
            period,
            timer: None,
            changed_at: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[allow(dead_code)]
    pub fn is_mounted(&self) -> bool {
        self.timer.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    #[allow(dead_code)]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.as_ref().map(SlideTimer::deadline)
    }

    /// Show the first slide and start the timer
    pub fn mount(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        self.current = 0;
        self.direction = Direction::Still;
        self.paused = false;
        self.changed_at = None;
        self.timer = Some(SlideTimer::start(self.period, now));
        tracing::debug!(carousel = self.name, slides = self.len, "carousel mounted");
    }

    /// Tear down the timer
    pub fn unmount(&mut self) {
        if self.timer.take().is_some() {
            tracing::debug!(carousel = self.name, "carousel unmounted");
        }
    }

    /// Advance once if the timer is due; returns true when the slide changed
    ///
    /// The next deadline is measured from `now`, so a late tick never causes
    /// a burst of catch-up advances. A due tick while paused only restarts
    /// the timer.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if !timer.is_due(now) {
            return false;
        }
        timer.restart(now);

        if self.paused || self.len < 2 {
            return false;
        }
        self.current = (self.current + 1) % self.len;
        self.direction = Direction::Forward;
        self.changed_at = Some(now);
        true
    }

    pub fn next(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        if self.len > 1 {
            self.current = (self.current + 1) % self.len;
            self.direction = Direction::Forward;
            self.changed_at = Some(now);
        }
        self.restart_timer(now);
    }

    pub fn prev(&mut self, now: Instant) {
        if self.len == 0 {
            return;
        }
        if self.len > 1 {
            self.current = (self.current + self.len - 1) % self.len;
            self.direction = Direction::Backward;
            self.changed_at = Some(now);
        }
        self.restart_timer(now);
    }

    /// Jump to slide `index`; out-of-range indices are ignored
    pub fn go_to(&mut self, index: usize, now: Instant) {
        if index >= self.len {
            return;
        }
        if self.len > 1 {
            self.direction = Direction::between(self.current, index);
            if index != self.current {
                self.changed_at = Some(now);
            }
            self.current = index;
        }
        self.restart_timer(now);
    }

    pub fn pause(&mut self) {
        self.set_paused(true);
    }

    #[allow(dead_code)]
    pub fn resume(&mut self) {
        self.set_paused(false);
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            tracing::trace!(carousel = self.name, paused, "carousel pause changed");
            self.paused = paused;
        }
    }

    /// Eased progress of the slide enter animation, 1.0 when settled
    pub fn transition_progress(&self, now: Instant) -> f32 {
        let Some(changed_at) = self.changed_at else {
            return 1.0;
        };
        let elapsed = now.saturating_duration_since(changed_at);
        if elapsed >= TRANSITION_DURATION {
            return 1.0;
        }
        let progress = elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32();
        simple_easing::cubic_out(progress)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition_progress(now) < 1.0
    }

    fn restart_timer(&mut self, now: Instant) {
        if let Some(timer) = self.timer.as_mut() {
            timer.restart(now);
        }
    }
}

/// Horizontal swipe recognised from a mouse drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Dragged toward the left: show the next slide
    Left,
    /// Dragged toward the right: show the previous slide
    Right,
}

/// Tracks a drag from button press to release
#[derive(Debug, Default)]
pub struct SwipeTracker {
    origin: Option<u16>,
}

impl SwipeTracker {
    pub fn press(&mut self, column: u16) {
        self.origin = Some(column);
    }

    /// Finish the drag; short drags are not swipes
    pub fn release(&mut self, column: u16) -> Option<Swipe> {
        let origin = self.origin.take()?;
        if column + SWIPE_THRESHOLD <= origin {
            Some(Swipe::Left)
        } else if origin + SWIPE_THRESHOLD <= column {
            Some(Swipe::Right)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }
}
