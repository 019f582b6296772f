//! Colours and the edge highlight glow.
//!
//! Dots are coloured by friendliness. Graph edges are coloured by the pair:
//!
//! | Pair | Colour |
//! |------|--------|
//! | both friendly | [`ALLY_EDGE`] |
//! | one friendly | [`NEUTRAL_EDGE`], or rarely [`HIGHLIGHT_EDGE`] with a growing alpha |
//! | neither | [`NEUTRAL_EDGE`] |

use glam::{Vec3, Vec4};
use rand::Rng;

const fn rgb(r: f32, g: f32, b: f32) -> Vec4 {
    Vec4::new(r, g, b, 1.0)
}

/// Friendly dots (a warm gold).
pub const FRIENDLY: Vec4 = rgb(255.0 / 256.0, 215.0 / 256.0, 0.0);
/// Unfriendly dots (near black).
pub const UNFRIENDLY: Vec4 = rgb(51.0 / 256.0, 51.0 / 256.0, 51.0 / 256.0);
/// Edge between two friendly particles.
pub const ALLY_EDGE: Vec4 = rgb(0.694, 0.757, 0.459);
/// Default edge colour.
pub const NEUTRAL_EDGE: Vec4 = rgb(100.0 / 256.0, 100.0 / 256.0, 100.0 / 256.0);
/// Rare edge between a friendly and an unfriendly particle. Alpha is
/// replaced by the current [`Glow`] level.
pub const HIGHLIGHT_EDGE: Vec4 = rgb(255.0 / 256.0, 215.0 / 256.0, 0.0);

/// Clear colour.
pub const BACKGROUND: Vec3 = Vec3::new(0.165, 0.216, 0.216);

/// Reference axis colours (x, y, z).
pub const AXIS_COLORS: [Vec4; 3] = [
    rgb(1.0, 0.0, 0.0),
    rgb(0.0, 0.0, 1.0),
    rgb(1.0, 1.0, 0.0),
];

/// Chance that a friendly/unfriendly edge is drawn highlighted.
pub const DEFAULT_HIGHLIGHT_CHANCE: f32 = 0.01;
/// Alpha gained per highlighted draw.
pub const DEFAULT_GLOW_STEP: f32 = 0.05;
/// Default dot diameter in pixels.
pub const DEFAULT_DOT_SIZE: f32 = 4.0;
/// Smallest dot diameter the controls can reach.
pub const MIN_DOT_SIZE: f32 = 0.5;

/// Colour for a dot.
#[inline]
pub fn dot_color(friendly: bool) -> Vec4 {
    if friendly {
        FRIENDLY
    } else {
        UNFRIENDLY
    }
}

/// Accumulating opacity for highlighted edges.
///
/// Every highlighted draw raises the level by `step`. The level saturates at
/// 1.0 and goes back to zero on [`Glow::reset`], which the session calls on
/// every re-initialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    level: f32,
    step: f32,
}

impl Glow {
    pub fn new(step: f32) -> Self {
        Self {
            level: 0.0,
            step: step.max(0.0),
        }
    }

    /// Current opacity in `[0, 1]`.
    #[inline]
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Return the current opacity, then raise it.
    pub fn advance(&mut self) -> f32 {
        let current = self.level;
        self.level = (self.level + self.step).min(1.0);
        current
    }

    pub fn reset(&mut self) {
        self.level = 0.0;
    }
}

impl Default for Glow {
    fn default() -> Self {
        Self::new(DEFAULT_GLOW_STEP)
    }
}

/// Pick the colour of an edge between two particles.
pub fn edge_color<R: Rng + ?Sized>(
    a_friendly: bool,
    b_friendly: bool,
    highlight_chance: f32,
    glow: &mut Glow,
    rng: &mut R,
) -> Vec4 {
    match (a_friendly, b_friendly) {
        (true, true) => ALLY_EDGE,
        (true, false) | (false, true) => {
            if rng.gen::<f32>() < highlight_chance {
                HIGHLIGHT_EDGE.truncate().extend(glow.advance())
            } else {
                NEUTRAL_EDGE
            }
        }
        (false, false) => NEUTRAL_EDGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_dot_colors() {
        assert_eq!(dot_color(true), FRIENDLY);
        assert_eq!(dot_color(false), UNFRIENDLY);
    }

    #[test]
    fn test_glow_is_monotonic_and_bounded() {
        let mut glow = Glow::new(0.3);
        let levels: Vec<f32> = (0..6).map(|_| glow.advance()).collect();
        assert_eq!(levels[0], 0.0);
        for pair in levels.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert_eq!(glow.level(), 1.0);

        glow.reset();
        assert_eq!(glow.level(), 0.0);
    }

    #[test]
    fn test_negative_glow_step_never_decreases() {
        let mut glow = Glow::new(-1.0);
        glow.advance();
        assert_eq!(glow.level(), 0.0);
    }

    #[test]
    fn test_edge_colors_by_pair() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut glow = Glow::default();
        assert_eq!(edge_color(true, true, 1.0, &mut glow, &mut rng), ALLY_EDGE);
        assert_eq!(edge_color(false, false, 1.0, &mut glow, &mut rng), NEUTRAL_EDGE);
        assert_eq!(edge_color(true, false, 0.0, &mut glow, &mut rng), NEUTRAL_EDGE);
        assert_eq!(glow.level(), 0.0);
    }

    #[test]
    fn test_highlight_edge_uses_glow() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut glow = Glow::new(0.25);

        let first = edge_color(false, true, 1.0, &mut glow, &mut rng);
        let second = edge_color(true, false, 1.0, &mut glow, &mut rng);

        assert_eq!(first.truncate(), HIGHLIGHT_EDGE.truncate());
        assert_eq!(first.w, 0.0);
        assert_eq!(second.w, 0.25);
        assert_eq!(glow.level(), 0.5);
    }
}
