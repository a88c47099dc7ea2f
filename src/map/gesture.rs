use super::LatLng;
use std::time::{Duration, Instant};

pub const DEFAULT_LONG_PRESS_THRESHOLD: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PressState {
    Idle,
    Pressing {
        started_at: Instant,
        position: LatLng,
    },
    /// The press was held long enough and its position was captured. Stays
    /// here until the pointer is released.
    Confirmed,
}

/// Long press detector. The host polls `tick` (or schedules a timer for
/// `deadline`) while a press is in progress. Each press yields at most one
/// captured position.
#[derive(Clone, Debug)]
pub struct PressGesture {
    threshold: Duration,
    state: PressState,
}

impl PressGesture {
    pub fn new(threshold: Duration) -> Self {
        PressGesture {
            threshold,
            state: PressState::Idle,
        }
    }

    pub fn state(&self) -> PressState {
        self.state
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            PressState::Pressing { started_at, .. } => Some(started_at + self.threshold),
            _ => None,
        }
    }

    /// A new press always starts over, even if the previous release was lost.
    pub fn press(&mut self, at: Instant, position: LatLng) {
        self.state = PressState::Pressing {
            started_at: at,
            position,
        };
    }

    pub fn tick(&mut self, now: Instant) -> Option<LatLng> {
        match self.state {
            PressState::Pressing {
                started_at,
                position,
            } if now.saturating_duration_since(started_at) >= self.threshold => {
                self.state = PressState::Confirmed;
                Some(position)
            }
            _ => None,
        }
    }

    pub fn release(&mut self, now: Instant) -> Option<LatLng> {
        // the timer may be overdue if nobody ticked before the release
        let captured = self.tick(now);
        self.state = PressState::Idle;
        captured
    }

    pub fn cancel(&mut self) {
        self.state = PressState::Idle;
    }
}

impl Default for PressGesture {
    fn default() -> Self {
        PressGesture::new(DEFAULT_LONG_PRESS_THRESHOLD)
    }
}
