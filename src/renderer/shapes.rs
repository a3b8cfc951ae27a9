//! Shape generation for the pane

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::widget::CircleView;

/// Fewest triangles used for a circle
const MIN_SEGMENTS: u32 = 12;
/// Target length of one circle edge in pane pixels
const SEGMENT_LENGTH: f32 = 4.0;

/// Segment count that keeps edges around `SEGMENT_LENGTH` pixels long
pub fn segments_for_radius(radius: f32) -> u32 {
    ((TAU * radius / SEGMENT_LENGTH).ceil() as u32).max(MIN_SEGMENTS)
}

/// Generate vertices for a filled circle (triangle list, one fan slice per segment)
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    let rim = |i: u32| {
        let theta = (i % segments) as f32 / segments as f32 * TAU;
        center + Vec2::new(theta.cos(), theta.sin()) * radius
    };

    for i in 0..segments {
        let a = rim(i);
        let b = rim(i + 1);
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(a.x, a.y, color));
        vertices.push(Vertex::new(b.x, b.y, color));
    }

    vertices
}

/// Vertices for the widget's ball
pub fn ball(view: &CircleView) -> Vec<Vertex> {
    circle(
        view.center,
        view.radius,
        view.color,
        segments_for_radius(view.radius),
    )
}
