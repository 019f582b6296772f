//! Frame rendering: particle state in, draw calls out.
//!
//! The renderer does not talk to the GPU. It emits points and line segments
//! on a [`Canvas`]; [`DrawList`] records them into vertex data that the
//! `gpu` module uploads as-is.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use rand::Rng;

use crate::adjacency::AdjacencyCache;
use crate::motion::Mode;
use crate::particle::ParticleStore;
use crate::visuals::{self, Glow};

/// Receiver for draw calls.
pub trait Canvas {
    /// Draw a round dot of `size` pixels diameter.
    fn point(&mut self, position: Vec3, color: Vec4, size: f32);
    /// Draw a line segment.
    fn line(&mut self, from: Vec3, to: Vec3, color: Vec4);
}

/// One instanced dot, laid out for the point pipeline.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PointInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// One end of a line segment, laid out for the line pipeline.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Recorded draw calls for one frame.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub points: Vec<PointInstance>,
    /// Two vertices per segment.
    pub lines: Vec<LineVertex>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded calls, keeping allocations.
    pub fn clear(&mut self) {
        self.points.clear();
        self.lines.clear();
    }

    /// Number of line segments.
    pub fn segment_count(&self) -> usize {
        self.lines.len() / 2
    }
}

impl Canvas for DrawList {
    fn point(&mut self, position: Vec3, color: Vec4, size: f32) {
        self.points.push(PointInstance {
            position: position.to_array(),
            size,
            color: color.to_array(),
        });
    }

    fn line(&mut self, from: Vec3, to: Vec3, color: Vec4) {
        let color = color.to_array();
        self.lines.push(LineVertex {
            position: from.to_array(),
            color,
        });
        self.lines.push(LineVertex {
            position: to.to_array(),
            color,
        });
    }
}

/// Per-frame rendering settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub mode: Mode,
    pub dot_size: f32,
    pub edge_probability: f32,
    pub highlight_chance: f32,
    pub show_axes: bool,
}

/// One dot per particle, in index order.
pub fn draw_points<C: Canvas + ?Sized>(store: &ParticleStore, dot_size: f32, canvas: &mut C) {
    for particle in store {
        canvas.point(particle.position, visuals::dot_color(particle.friendly), dot_size);
    }
}

/// One segment per connected pair, sampling unknown pairs on the way.
#[allow(clippy::too_many_arguments)]
pub fn draw_edges<C, R>(
    store: &ParticleStore,
    cache: &mut AdjacencyCache,
    edge_probability: f32,
    highlight_chance: f32,
    glow: &mut Glow,
    rng: &mut R,
    canvas: &mut C,
) where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    let particles = store.as_slice();
    for (i, src) in particles.iter().enumerate() {
        for (j, dst) in particles.iter().enumerate().skip(i + 1) {
            if !cache.query(i, j, edge_probability, rng) {
                continue;
            }
            let color = visuals::edge_color(src.friendly, dst.friendly, highlight_chance, glow, rng);
            canvas.line(src.position, dst.position, color);
        }
    }
}

/// Three fixed segments marking the x, y and z directions.
pub fn draw_reference_axes<C: Canvas + ?Sized>(canvas: &mut C) {
    let origin = Vec3::new(0.0, 0.05, 0.0);
    let ends = [
        Vec3::new(0.0, 0.9, 0.0),
        Vec3::new(0.0, 0.1, 0.8),
        Vec3::new(0.8, 0.1, 0.0),
    ];
    for (end, color) in ends.into_iter().zip(visuals::AXIS_COLORS) {
        canvas.line(origin, end, color);
    }
}

/// Dots, then edges in graph mode, then optional axes.
pub fn draw_frame<C, R>(
    store: &ParticleStore,
    cache: &mut AdjacencyCache,
    glow: &mut Glow,
    params: &FrameParams,
    rng: &mut R,
    canvas: &mut C,
) where
    C: Canvas + ?Sized,
    R: Rng + ?Sized,
{
    draw_points(store, params.dot_size, canvas);
    if params.mode.draws_edges() {
        draw_edges(
            store,
            cache,
            params.edge_probability,
            params.highlight_chance,
            glow,
            rng,
            canvas,
        );
    }
    if params.show_axes {
        draw_reference_axes(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;
    use crate::visuals::{ALLY_EDGE, FRIENDLY, NEUTRAL_EDGE, UNFRIENDLY};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store(friendly: &[bool]) -> ParticleStore {
        ParticleStore::from_particles(
            friendly
                .iter()
                .enumerate()
                .map(|(i, &f)| Particle::new(f, Vec3::splat(i as f32 * 0.1)))
                .collect(),
        )
    }

    fn params(mode: Mode, edge_probability: f32) -> FrameParams {
        FrameParams {
            mode,
            dot_size: 4.0,
            edge_probability,
            highlight_chance: 0.0,
            show_axes: false,
        }
    }

    #[test]
    fn test_points_colored_by_friendliness_in_index_order() {
        let store = store(&[true, false, false, true]);
        let mut list = DrawList::new();
        draw_points(&store, 3.0, &mut list);

        let colors: Vec<[f32; 4]> = list.points.iter().map(|p| p.color).collect();
        assert_eq!(
            colors,
            vec![
                FRIENDLY.to_array(),
                UNFRIENDLY.to_array(),
                UNFRIENDLY.to_array(),
                FRIENDLY.to_array(),
            ]
        );
        assert!(list.points.iter().all(|p| p.size == 3.0));
        assert_eq!(list.points[2].position, [0.2, 0.2, 0.2]);
    }

    #[test]
    fn test_no_edges_outside_graph_mode() {
        let store = store(&[true, true, true]);
        let mut cache = AdjacencyCache::new(3);
        let mut glow = Glow::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut list = DrawList::new();

        draw_frame(&store, &mut cache, &mut glow, &params(Mode::Wave, 1.0), &mut rng, &mut list);

        assert_eq!(list.points.len(), 3);
        assert!(list.lines.is_empty());
        assert_eq!(cache.resolved(), 0);
    }

    #[test]
    fn test_full_graph_draws_every_pair() {
        let store = store(&[true, true, false, false]);
        let mut cache = AdjacencyCache::new(4);
        let mut glow = Glow::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut list = DrawList::new();

        draw_frame(&store, &mut cache, &mut glow, &params(Mode::Graph, 1.0), &mut rng, &mut list);

        assert_eq!(list.segment_count(), 6);
        // (0, 1) is the first pair and both are friendly.
        assert_eq!(list.lines[0].color, ALLY_EDGE.to_array());
        // (2, 3) is the last pair, neither friendly.
        assert_eq!(list.lines[11].color, NEUTRAL_EDGE.to_array());
    }

    #[test]
    fn test_empty_graph_draws_nothing() {
        let store = store(&[true, false, true, false, true]);
        let mut cache = AdjacencyCache::new(5);
        let mut glow = Glow::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut list = DrawList::new();

        draw_frame(&store, &mut cache, &mut glow, &params(Mode::Graph, 0.0), &mut rng, &mut list);

        assert!(list.lines.is_empty());
        assert_eq!(cache.resolved(), 10);
    }

    #[test]
    fn test_edges_are_stable_across_frames() {
        let store = store(&[false; 30]);
        let mut cache = AdjacencyCache::new(30);
        let mut glow = Glow::default();
        let mut rng = StdRng::seed_from_u64(99);

        let mut first = DrawList::new();
        draw_frame(&store, &mut cache, &mut glow, &params(Mode::Graph, 0.2), &mut rng, &mut first);

        // A raised probability does not affect pairs that are already decided.
        let mut second = DrawList::new();
        draw_frame(&store, &mut cache, &mut glow, &params(Mode::Graph, 0.9), &mut rng, &mut second);

        assert_eq!(first.lines, second.lines);
    }

    #[test]
    fn test_axes_are_drawn_last() {
        let store = store(&[true]);
        let mut cache = AdjacencyCache::new(1);
        let mut glow = Glow::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut list = DrawList::new();
        let params = FrameParams {
            show_axes: true,
            ..params(Mode::Graph, 1.0)
        };

        draw_frame(&store, &mut cache, &mut glow, &params, &mut rng, &mut list);

        assert_eq!(list.points.len(), 1);
        assert_eq!(list.segment_count(), 3);
        assert_eq!(list.lines[0].color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_clear_keeps_nothing() {
        let mut list = DrawList::new();
        list.point(Vec3::ZERO, FRIENDLY, 1.0);
        list.line(Vec3::ZERO, Vec3::ONE, NEUTRAL_EDGE);
        list.clear();
        assert!(list.points.is_empty());
        assert_eq!(list.segment_count(), 0);
    }
}
