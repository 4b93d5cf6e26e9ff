use super::graph::NeighborGraph;
use rand::seq::SliceRandom;
use rand::Rng;

/// A packet travelling along one edge of the neighbor graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Signal {
    pub start: usize,
    pub end: usize,
    /// In `[0, 1)` while alive.
    pub progress: f32,
}

/// Active signals plus the per-frame spawn and travel rules.
#[derive(Clone, Debug, Default)]
pub struct SignalSystem {
    active: Vec<Signal>,
    max_active: usize,
    speed: f32,
    spawn_probability: f32,
}

impl SignalSystem {
    pub fn new(max_active: usize, speed: f32, spawn_probability: f32) -> Self {
        Self {
            active: Vec::with_capacity(max_active),
            max_active,
            speed,
            spawn_probability,
        }
    }

    /// One independent spawn trial. Returns the new signal, if any.
    ///
    /// Below the cap and past the Bernoulli draw, a uniformly random point is
    /// picked; a point without neighbors spawns nothing this frame.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R, graph: &NeighborGraph) -> Option<Signal> {
        if self.active.len() >= self.max_active || graph.is_empty() {
            return None;
        }
        if rng.gen::<f32>() >= self.spawn_probability {
            return None;
        }
        let start = rng.gen_range(0..graph.len());
        let end = *graph.neighbors(start).choose(rng)?;
        Some(self.launch(start, end))
    }

    /// Insert a signal directly, bypassing the cap and the random trial.
    pub fn launch(&mut self, start: usize, end: usize) -> Signal {
        let signal = Signal {
            start,
            end,
            progress: 0.0,
        };
        self.active.push(signal);
        signal
    }

    /// Move every signal one step. Arrivals are removed and set
    /// `pulses[end] = 1.0`; returns how many arrived.
    pub fn advance(&mut self, pulses: &mut [f32]) -> usize {
        let speed = self.speed;
        let before = self.active.len();
        self.active.retain_mut(|signal| {
            signal.progress += speed;
            if signal.progress >= 1.0 {
                if let Some(pulse) = pulses.get_mut(signal.end) {
                    *pulse = 1.0;
                }
                false
            } else {
                true
            }
        });
        before - self.active.len()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[Signal] {
        &self.active
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Signal> {
        self.active.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Decay every pulse by `step`, never below zero.
#[inline]
pub fn decay_pulses(pulses: &mut [f32], step: f32) {
    for p in pulses.iter_mut() {
        if *p > 0.0 {
            *p = (*p - step).max(0.0);
        }
    }
}
