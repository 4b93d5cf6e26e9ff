//! Frame painter. Turns the current projection, graph and signals into draw
//! calls on a [`Surface`]; keeps no state between frames.

use super::constants::*;
use super::graph::NeighborGraph;
use super::projection::{Projected, Viewport};
use super::signals::Signal;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub fn new([r, g, b]: [u8; 3], a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba()` string for canvas style setters.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

/// Soft shadow around a filled shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Rgba,
}

/// The minimal 2D drawing API the globe needs.
pub trait Surface {
    fn clear(&mut self, viewport: Viewport);
    fn gradient_line(&mut self, from: Vec2, to: Vec2, start: Rgba, end: Rgba, width: f32);
    fn circle(&mut self, center: Vec2, radius: f32, fill: Rgba, glow: Option<Glow>);
}

/// Everything one frame needs, borrowed from the globe instance.
pub struct FrameView<'a> {
    pub viewport: Viewport,
    pub projected: &'a [Option<Projected>],
    pub graph: &'a NeighborGraph,
    pub signals: &'a [Signal],
    pub pulses: &'a [f32],
    pub edge_visibility_scale: f32,
}

/// Paint edges, then signals, then dots. A zero-sized viewport paints nothing.
pub fn paint_frame<S: Surface + ?Sized>(surface: &mut S, frame: &FrameView<'_>) {
    if !frame.viewport.is_drawable() {
        return;
    }
    surface.clear(frame.viewport);
    paint_edges(surface, frame);
    paint_signals(surface, frame);
    paint_dots(surface, frame);
}

#[inline]
fn projected_at<'a>(frame: &FrameView<'a>, index: usize) -> Option<&'a Projected> {
    frame.projected.get(index).and_then(Option::as_ref)
}

/// Opacity of an edge from the smaller endpoint scale: closer is brighter.
#[inline]
pub fn edge_alpha(min_scale: f32) -> f32 {
    ((min_scale - EDGE_ALPHA_OFFSET) * EDGE_ALPHA_GAIN).clamp(EDGE_ALPHA_MIN, EDGE_ALPHA_MAX)
}

fn paint_edges<S: Surface + ?Sized>(surface: &mut S, frame: &FrameView<'_>) {
    for &(a, b) in frame.graph.edges() {
        let (Some(pa), Some(pb)) = (projected_at(frame, a), projected_at(frame, b)) else {
            continue;
        };
        let min_scale = pa.scale.min(pb.scale);
        if min_scale < frame.edge_visibility_scale {
            continue;
        }
        let alpha = edge_alpha(min_scale);
        surface.gradient_line(
            pa.screen(),
            pb.screen(),
            Rgba::new(EDGE_COLOR_NEAR, alpha),
            Rgba::new(EDGE_COLOR_FAR, alpha),
            EDGE_LINE_WIDTH,
        );
    }
}

/// Screen position of a signal, interpolated between this frame's projected
/// endpoints, and the mean endpoint scale.
pub fn signal_position(signal: &Signal, projected: &[Option<Projected>]) -> Option<(Vec2, f32)> {
    let from = projected.get(signal.start)?.as_ref()?;
    let to = projected.get(signal.end)?.as_ref()?;
    let pos = from.screen().lerp(to.screen(), signal.progress);
    Some((pos, (from.scale + to.scale) * 0.5))
}

fn paint_signals<S: Surface + ?Sized>(surface: &mut S, frame: &FrameView<'_>) {
    let glow = Glow {
        blur: SIGNAL_GLOW_BLUR,
        color: Rgba::new(SIGNAL_GLOW_COLOR, 1.0),
    };
    for signal in frame.signals {
        let Some((pos, scale)) = signal_position(signal, frame.projected) else {
            continue;
        };
        // Brightest mid-flight.
        let alpha = 1.0 - (0.5 - signal.progress).abs();
        surface.circle(
            pos,
            SIGNAL_RADIUS * scale,
            Rgba::new(SIGNAL_COLOR, alpha),
            Some(glow),
        );
    }
}

/// Dot fill for a given scale and pulse, plus its glow when hot or close.
pub fn dot_style(scale: f32, pulse: f32) -> (f32, Rgba, Option<Glow>) {
    let pulse = pulse.clamp(0.0, 1.0);
    let radius = (DOT_RADIUS + pulse * DOT_PULSE_RADIUS_GAIN) * scale;
    let alpha = (scale - DOT_ALPHA_OFFSET).clamp(DOT_ALPHA_MIN, 1.0);
    let [r, g, b] = DOT_COLOR;
    let fill = Rgba {
        r,
        g: (g as f32 + pulse * DOT_PULSE_GREEN_GAIN).min(255.0) as u8,
        b: (b as f32 + pulse * DOT_PULSE_BLUE_GAIN).min(255.0) as u8,
        a: alpha,
    };
    let glow = (scale > DOT_GLOW_SCALE_MIN || pulse > DOT_GLOW_PULSE_MIN).then(|| Glow {
        blur: DOT_GLOW_BLUR * scale,
        color: Rgba::new(DOT_COLOR, alpha),
    });
    (radius, fill, glow)
}

fn paint_dots<S: Surface + ?Sized>(surface: &mut S, frame: &FrameView<'_>) {
    for p in frame.projected.iter().flatten() {
        let pulse = frame.pulses.get(p.index).copied().unwrap_or(0.0);
        let (radius, fill, glow) = dot_style(p.scale, pulse);
        surface.circle(p.screen(), radius, fill, glow);
    }
}
