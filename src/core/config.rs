//! Tunable parameters for one globe instance.
//!
//! Defaults mirror the hand-tuned landing page values. The spawn probability
//! and the various per-frame steps are visual knobs, not contracts: they are
//! all expressed per frame, so the apparent speed follows the display's
//! refresh rate.

use super::constants::*;
use super::error::{GlobeError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct GlobeConfig {
    pub dot_count: usize,
    pub radius: f32,
    pub connection_distance: f32,
    pub max_neighbors: usize,
    pub max_signals: usize,
    pub signal_speed: f32,
    pub spawn_probability: f32,
    pub rotation_step: f32,
    pub focal_distance: f32,
    pub pulse_decay: f32,
    pub edge_visibility_scale: f32,
    pub center_y_fraction: f32,
    /// Re-derive the radius from the container width on resize.
    pub responsive_radius: bool,
    /// Fixed RNG seed; `None` seeds from the platform entropy source.
    pub seed: Option<u64>,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            dot_count: DOT_COUNT_WIDE,
            radius: RADIUS_WIDE,
            connection_distance: CONNECTION_DISTANCE,
            max_neighbors: MAX_NEIGHBORS,
            max_signals: MAX_SIGNALS_WIDE,
            signal_speed: SIGNAL_SPEED,
            spawn_probability: SIGNAL_SPAWN_PROBABILITY,
            rotation_step: ROTATION_STEP,
            focal_distance: FOCAL_DISTANCE,
            pulse_decay: PULSE_DECAY,
            edge_visibility_scale: EDGE_VISIBILITY_SCALE,
            center_y_fraction: CENTER_Y_FRACTION,
            responsive_radius: true,
            seed: None,
        }
    }
}

/// Sphere radius for a container of the given CSS width.
#[inline]
pub fn radius_for_width(width: f32) -> f32 {
    if width < COMPACT_VIEWPORT_PX {
        RADIUS_COMPACT
    } else if width < NARROW_VIEWPORT_PX {
        RADIUS_NARROW
    } else {
        RADIUS_WIDE
    }
}

impl GlobeConfig {
    /// Responsive defaults: smaller screens get fewer dots and signals.
    pub fn for_viewport(width: f32) -> Self {
        let narrow = width < NARROW_VIEWPORT_PX;
        Self {
            dot_count: if narrow { DOT_COUNT_NARROW } else { DOT_COUNT_WIDE },
            radius: radius_for_width(width),
            max_signals: if narrow {
                MAX_SIGNALS_NARROW
            } else {
                MAX_SIGNALS_WIDE
            },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(GlobeError::InvalidConfiguration(msg)) };
        if self.dot_count > MAX_DOT_COUNT {
            return invalid(format!(
                "dot count {} exceeds {}",
                self.dot_count, MAX_DOT_COUNT
            ));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return invalid(format!("radius must be positive, got {}", self.radius));
        }
        if !(self.focal_distance.is_finite() && self.focal_distance > 0.0) {
            return invalid(format!(
                "focal distance must be positive, got {}",
                self.focal_distance
            ));
        }
        // Points rotate through z = -radius; the divisor must stay positive.
        if self.radius >= self.focal_distance {
            return invalid(format!(
                "radius {} must be smaller than focal distance {}",
                self.radius, self.focal_distance
            ));
        }
        if !self.connection_distance.is_finite() {
            return invalid("connection distance must be finite".to_string());
        }
        if self.max_neighbors > MAX_NEIGHBORS {
            return invalid(format!(
                "max neighbors {} exceeds {}",
                self.max_neighbors, MAX_NEIGHBORS
            ));
        }
        if !(self.signal_speed.is_finite() && self.signal_speed > 0.0) {
            return invalid(format!(
                "signal speed must be positive, got {}",
                self.signal_speed
            ));
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return invalid(format!(
                "spawn probability must be within [0, 1], got {}",
                self.spawn_probability
            ));
        }
        if !(self.pulse_decay.is_finite() && self.pulse_decay >= 0.0) {
            return invalid(format!(
                "pulse decay must be non-negative, got {}",
                self.pulse_decay
            ));
        }
        if !self.rotation_step.is_finite() {
            return invalid("rotation step must be finite".to_string());
        }
        if !(0.0..=1.0).contains(&self.center_y_fraction) {
            return invalid(format!(
                "centre y fraction must be within [0, 1], got {}",
                self.center_y_fraction
            ));
        }
        if !(self.edge_visibility_scale.is_finite() && self.edge_visibility_scale >= 0.0) {
            return invalid(format!(
                "edge visibility scale must be non-negative, got {}",
                self.edge_visibility_scale
            ));
        }
        Ok(())
    }

    /// Apply one named override, e.g. from a `data-*` attribute.
    /// Keys are kebab-case field names.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "dot-count" => self.dot_count = parse(key, value)?,
            "radius" => {
                self.radius = parse(key, value)?;
                self.responsive_radius = false;
            }
            "connection-distance" => self.connection_distance = parse(key, value)?,
            "max-neighbors" => self.max_neighbors = parse(key, value)?,
            "max-signals" => self.max_signals = parse(key, value)?,
            "signal-speed" => self.signal_speed = parse(key, value)?,
            "spawn-probability" => self.spawn_probability = parse(key, value)?,
            "rotation-step" => self.rotation_step = parse(key, value)?,
            "focal-distance" => self.focal_distance = parse(key, value)?,
            "pulse-decay" => self.pulse_decay = parse(key, value)?,
            "edge-visibility-scale" => self.edge_visibility_scale = parse(key, value)?,
            "center-y-fraction" => self.center_y_fraction = parse(key, value)?,
            "seed" => self.seed = Some(parse(key, value)?),
            _ => {
                return Err(GlobeError::InvalidConfiguration(format!(
                    "unknown option '{key}'"
                )))
            }
        }
        Ok(())
    }
}

/// Keys accepted by [`GlobeConfig::apply_override`].
pub const OVERRIDE_KEYS: &[&str] = &[
    "dot-count",
    "radius",
    "connection-distance",
    "max-neighbors",
    "max-signals",
    "signal-speed",
    "spawn-probability",
    "rotation-step",
    "focal-distance",
    "pulse-decay",
    "edge-visibility-scale",
    "center-y-fraction",
    "seed",
];

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        GlobeError::InvalidConfiguration(format!("cannot parse '{value}' for '{key}'"))
    })
}
