//! Per-card glitch timing for the operator cards.
//!
//! Cards glitch only while on screen: a short burst of one of three glitch
//! variants, then a quiet gap of a few seconds. Time is passed in as elapsed
//! `Duration` so the schedule can be driven by any clock.

use super::constants::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Hidden,
    Waiting { until: Duration },
    Glitching { kind: u8, until: Duration },
}

pub struct GlitchTimer {
    phase: Phase,
    rng: StdRng,
}

impl GlitchTimer {
    pub fn new(seed: u64) -> Self {
        Self {
            phase: Phase::Hidden,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            phase: Phase::Hidden,
            rng: StdRng::from_entropy(),
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Visibility change from the observer. Becoming visible schedules the
    /// first glitch; hiding cancels everything.
    pub fn set_visible(&mut self, visible: bool, now: Duration) {
        match (visible, self.phase) {
            (false, _) => self.phase = Phase::Hidden,
            (true, Phase::Hidden) => {
                let delay = self.rng.gen_range(0..GLITCH_FIRST_DELAY_MAX_MS);
                self.phase = Phase::Waiting {
                    until: now + Duration::from_millis(delay),
                };
            }
            (true, _) => {}
        }
    }

    /// Advance to `now` and return the active glitch kind, 0 for none.
    ///
    /// Phases restart from `now` when they lapse, so a throttled tab resumes
    /// with a fresh schedule instead of replaying missed glitches.
    pub fn tick(&mut self, now: Duration) -> u8 {
        match self.phase {
            Phase::Hidden => 0,
            Phase::Waiting { until } if now < until => 0,
            Phase::Waiting { .. } => {
                let kind = self.rng.gen_range(1..=GLITCH_KINDS);
                let length = self
                    .rng
                    .gen_range(GLITCH_DURATION_MIN_MS..GLITCH_DURATION_MAX_MS);
                self.phase = Phase::Glitching {
                    kind,
                    until: now + Duration::from_millis(length),
                };
                kind
            }
            Phase::Glitching { kind, until } if now < until => kind,
            Phase::Glitching { .. } => {
                let gap = self.rng.gen_range(GLITCH_GAP_MIN_MS..GLITCH_GAP_MAX_MS);
                self.phase = Phase::Waiting {
                    until: now + Duration::from_millis(gap),
                };
                0
            }
        }
    }
}
