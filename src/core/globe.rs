//! One running globe: owns the point cloud, pulses, signals and rotation.
//!
//! The host calls [`Globe::advance`] then [`Globe::paint`] once per frame and
//! [`Globe::resize`] when the container changes size.

use super::config::{radius_for_width, GlobeConfig};
use super::error::Result;
use super::graph::NeighborGraph;
use super::paint::{paint_frame, FrameView, Surface};
use super::projection::{project_all, Projected, Rotation, Viewport};
use super::signals::{decay_pulses, SignalSystem};
use super::sphere;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Positions and their neighbor graph, always built together.
#[derive(Clone, Debug, Default)]
pub struct PointCloud {
    positions: Vec<Vec3>,
    graph: NeighborGraph,
}

impl PointCloud {
    pub fn build(config: &GlobeConfig) -> Result<Self> {
        let positions = sphere::generate(config.dot_count, config.radius)?;
        let graph = NeighborGraph::build(
            &positions,
            config.connection_distance,
            config.max_neighbors,
        );
        Ok(Self { positions, graph })
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn graph(&self) -> &NeighborGraph {
        &self.graph
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// What happened during one [`Globe::advance`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub spawned: bool,
    pub arrived: usize,
}

pub struct Globe {
    config: GlobeConfig,
    cloud: PointCloud,
    pulses: Vec<f32>,
    signals: SignalSystem,
    rotation: Rotation,
    viewport: Viewport,
    projected: Vec<Option<Projected>>,
    rng: StdRng,
}

impl Globe {
    pub fn new(config: GlobeConfig, viewport: Viewport) -> Result<Self> {
        config.validate()?;
        let cloud = PointCloud::build(&config)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        log::debug!(
            "[globe] built {} points, {} edges (radius {:.0})",
            cloud.len(),
            cloud.graph().edge_count(),
            config.radius
        );
        Ok(Self {
            pulses: vec![0.0; cloud.len()],
            signals: SignalSystem::new(
                config.max_signals,
                config.signal_speed,
                config.spawn_probability,
            ),
            projected: Vec::with_capacity(cloud.len()),
            rotation: Rotation::default(),
            config,
            cloud,
            viewport,
            rng,
        })
    }

    /// Run one frame of simulation: decay pulses, rotate, reproject, maybe
    /// spawn a signal, then move signals and fire arrivals.
    pub fn advance(&mut self) -> FrameStats {
        decay_pulses(&mut self.pulses, self.config.pulse_decay);
        self.rotation.advance(self.config.rotation_step);
        project_all(
            self.cloud.positions(),
            self.rotation.angle(),
            self.config.focal_distance,
            self.viewport.center(self.config.center_y_fraction),
            &mut self.projected,
        );
        if self.cloud.is_empty() {
            return FrameStats::default();
        }
        let spawned = self.signals.spawn(&mut self.rng, self.cloud.graph()).is_some();
        let arrived = self.signals.advance(&mut self.pulses);
        FrameStats { spawned, arrived }
    }

    /// Draw the state left by the last [`Globe::advance`].
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        paint_frame(
            surface,
            &FrameView {
                viewport: self.viewport,
                projected: &self.projected,
                graph: self.cloud.graph(),
                signals: self.signals.as_slice(),
                pulses: &self.pulses,
                edge_visibility_scale: self.config.edge_visibility_scale,
            },
        );
    }

    /// Adopt a new container size. A responsive radius follows the width
    /// breakpoints; point count, rotation, pulses and signals carry over.
    /// The new cloud replaces the old one only once it is fully built.
    pub fn resize(&mut self, viewport: Viewport) -> Result<()> {
        self.viewport = viewport;
        if !self.config.responsive_radius {
            return Ok(());
        }
        let radius = radius_for_width(viewport.width);
        if radius == self.config.radius {
            return Ok(());
        }
        let mut config = self.config.clone();
        config.radius = radius;
        config.validate()?;
        let cloud = PointCloud::build(&config)?;
        log::debug!(
            "[globe] resized to {}x{}, radius {:.0}, {} edges",
            viewport.width,
            viewport.height,
            radius,
            cloud.graph().edge_count()
        );
        self.config = config;
        self.cloud = cloud;
        Ok(())
    }

    /// Drop every in-flight signal, used on teardown.
    pub fn clear_signals(&mut self) {
        self.signals.clear();
    }

    #[inline]
    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    #[inline]
    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    #[inline]
    pub fn pulses(&self) -> &[f32] {
        &self.pulses
    }

    #[inline]
    pub fn signals(&self) -> &SignalSystem {
        &self.signals
    }

    #[inline]
    pub fn signals_mut(&mut self) -> &mut SignalSystem {
        &mut self.signals
    }

    #[inline]
    pub fn projected(&self) -> &[Option<Projected>] {
        &self.projected
    }

    #[inline]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
