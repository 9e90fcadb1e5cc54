//! Gradient backdrop catalog
//!
//! A fixed, ordered set of two-stop linear gradients the user can place
//! behind the image. Loaded once at startup (compiled in), immutable
//! thereafter. Angles follow the CSS convention: 0 degrees points up,
//! increasing clockwise, so 180 degrees runs top to bottom.

use rand::Rng;

/// One backdrop preset: an angle and two RGB color stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientPreset {
    pub name: &'static str,
    pub angle_deg: f32,
    pub stops: [(u8, u8, u8); 2],
}

/// The backdrop catalog, in display order.
pub const CATALOG: &[GradientPreset] = &[
    GradientPreset {
        name: "Sunset Blush",
        angle_deg: 135.0,
        stops: [(255, 94, 98), (255, 195, 113)],
    },
    GradientPreset {
        name: "Deep Ocean",
        angle_deg: 160.0,
        stops: [(0, 180, 219), (0, 131, 176)],
    },
    GradientPreset {
        name: "Aurora",
        angle_deg: 120.0,
        stops: [(127, 127, 213), (145, 234, 228)],
    },
    GradientPreset {
        name: "Midnight",
        angle_deg: 135.0,
        stops: [(35, 37, 38), (65, 67, 69)],
    },
    GradientPreset {
        name: "Mango",
        angle_deg: 45.0,
        stops: [(255, 226, 89), (255, 167, 81)],
    },
    GradientPreset {
        name: "Orchid",
        angle_deg: 135.0,
        stops: [(218, 34, 255), (151, 51, 238)],
    },
    GradientPreset {
        name: "Forest Mist",
        angle_deg: 180.0,
        stops: [(90, 63, 55), (44, 119, 68)],
    },
    GradientPreset {
        name: "Candy Floss",
        angle_deg: 90.0,
        stops: [(252, 92, 125), (106, 130, 251)],
    },
];

/// Pick a catalog index uniformly at random.
///
/// The generator is injected so the choice is deterministic under a seeded
/// RNG in tests.
pub fn random_index(rng: &mut impl Rng) -> usize {
    rng.gen_range(0..CATALOG.len())
}

impl GradientPreset {
    /// Position of the point (x, y) along the gradient axis for a w x h
    /// fill, in [0, 1]. Uses the CSS gradient-line length so corners land
    /// exactly on the stops for axis-aligned angles.
    pub fn axis_t(&self, x: f32, y: f32, w: f32, h: f32) -> f32 {
        let theta = self.angle_deg.to_radians();
        // Screen coordinates: y grows downward.
        let (dx, dy) = (theta.sin(), -theta.cos());
        let line_len = (w * dx).abs() + (h * dy).abs();
        if line_len <= f32::EPSILON {
            return 0.0;
        }
        let proj = (x - w * 0.5) * dx + (y - h * 0.5) * dy;
        (proj / line_len + 0.5).clamp(0.0, 1.0)
    }

    /// Opaque RGBA color at position t along the gradient.
    pub fn sample(&self, t: f32) -> [u8; 4] {
        let t = t.clamp(0.0, 1.0);
        let (a, b) = (self.stops[0], self.stops[1]);
        [
            lerp_channel(a.0, b.0, t),
            lerp_channel(a.1, b.1, t),
            lerp_channel(a.2, b.2, t),
            255,
        ]
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn catalog_is_populated() {
        assert!(!CATALOG.is_empty());
        for preset in CATALOG {
            assert!(!preset.name.is_empty());
        }
    }

    #[test]
    fn random_index_is_in_range_and_seedable() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..32 {
            let ia = random_index(&mut a);
            assert!(ia < CATALOG.len());
            assert_eq!(ia, random_index(&mut b));
        }
    }

    #[test]
    fn sample_hits_stops_at_endpoints() {
        let preset = &CATALOG[0];
        let (r, g, b) = preset.stops[0];
        assert_eq!(preset.sample(0.0), [r, g, b, 255]);
        let (r, g, b) = preset.stops[1];
        assert_eq!(preset.sample(1.0), [r, g, b, 255]);
    }

    #[test]
    fn sample_blends_at_midpoint() {
        let preset = GradientPreset {
            name: "test",
            angle_deg: 90.0,
            stops: [(0, 0, 0), (200, 100, 50)],
        };
        assert_eq!(preset.sample(0.5), [100, 50, 25, 255]);
    }

    #[test]
    fn sample_clamps_out_of_range() {
        let preset = &CATALOG[0];
        assert_eq!(preset.sample(-1.0), preset.sample(0.0));
        assert_eq!(preset.sample(2.0), preset.sample(1.0));
    }

    #[test]
    fn axis_runs_left_to_right_at_90_degrees() {
        let preset = GradientPreset {
            name: "test",
            angle_deg: 90.0,
            stops: [(0, 0, 0), (255, 255, 255)],
        };
        assert!(preset.axis_t(0.0, 50.0, 100.0, 100.0) < 1e-3);
        assert!((preset.axis_t(100.0, 50.0, 100.0, 100.0) - 1.0).abs() < 1e-3);
        assert!((preset.axis_t(50.0, 50.0, 100.0, 100.0) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn axis_runs_top_to_bottom_at_180_degrees() {
        let preset = GradientPreset {
            name: "test",
            angle_deg: 180.0,
            stops: [(0, 0, 0), (255, 255, 255)],
        };
        assert!(preset.axis_t(50.0, 0.0, 100.0, 100.0) < 1e-3);
        assert!((preset.axis_t(50.0, 100.0, 100.0, 100.0) - 1.0).abs() < 1e-3);
    }
}
