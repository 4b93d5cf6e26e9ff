use super::constants::MIN_PERSPECTIVE_DEPTH;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

/// Screen-space view of one point for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    /// Perspective factor; > 1 in front of the sphere's centre plane.
    pub scale: f32,
    /// z after rotation; negative is towards the viewer.
    pub depth: f32,
    pub index: usize,
}

impl Projected {
    #[inline]
    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Drawing surface extent in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Projection centre: horizontally centred, `center_y_fraction` down.
    #[inline]
    pub fn center(&self, center_y_fraction: f32) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * center_y_fraction)
    }
}

/// One-directional spin about the vertical axis.
///
/// The angle is kept in `[0, TAU)`; wrapping is invisible since projection
/// only sees `sin`/`cos` of it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    angle: f32,
}

impl Rotation {
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    #[inline]
    pub fn advance(&mut self, step: f32) {
        self.angle = (self.angle + step).rem_euclid(TAU);
    }
}

/// Rotate `position` by `angle` around y, then perspective-project it.
///
/// Returns `None` when `focal_distance + z` is not usably positive, i.e. the
/// point sits on or behind the eye.
#[inline]
pub fn project(
    position: Vec3,
    angle: f32,
    focal_distance: f32,
    center: Vec2,
    index: usize,
) -> Option<Projected> {
    let (sin, cos) = angle.sin_cos();
    let x = position.x * cos - position.z * sin;
    let z = position.x * sin + position.z * cos;
    let divisor = focal_distance + z;
    if !(divisor.is_finite() && divisor > MIN_PERSPECTIVE_DEPTH) {
        return None;
    }
    let scale = focal_distance / divisor;
    Some(Projected {
        x: center.x + x * scale,
        y: center.y + position.y * scale,
        scale,
        depth: z,
        index,
    })
}

/// Project every point into `out`, replacing its previous contents.
pub fn project_all(
    positions: &[Vec3],
    angle: f32,
    focal_distance: f32,
    center: Vec2,
    out: &mut Vec<Option<Projected>>,
) {
    out.clear();
    out.extend(
        positions
            .iter()
            .enumerate()
            .map(|(i, &p)| project(p, angle, focal_distance, center, i)),
    );
}
