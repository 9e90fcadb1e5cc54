//! Edit parameters for the composition screen
//!
//! These values describe how the composite is framed: which backdrop is
//! behind the image and how far each layer is scaled about its center. They
//! affect only rendering, never the stored image, and are rebuilt from
//! scratch every time the composition screen is entered.

use rand::Rng;

use super::gradient::{self, GradientPreset, CATALOG};

/// Lower bound for both scale factors.
pub const MIN_SCALE: f32 = 0.5;
/// Upper bound for both scale factors.
pub const MAX_SCALE: f32 = 2.0;
/// Slider granularity.
pub const SCALE_STEP: f32 = 0.01;
/// Initial image scale (100%).
pub const DEFAULT_IMAGE_SCALE: f32 = 1.0;
/// Initial backdrop scale (110%, so the gradient bleeds past the image).
pub const DEFAULT_BACKGROUND_SCALE: f32 = 1.1;

/// All edit parameters for the composition screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditSettings {
    gradient_index: usize,
    image_scale: f32,
    background_scale: f32,
}

impl EditSettings {
    /// Fresh settings with a randomly chosen backdrop.
    pub fn randomized(rng: &mut impl Rng) -> Self {
        Self {
            gradient_index: gradient::random_index(rng),
            image_scale: DEFAULT_IMAGE_SCALE,
            background_scale: DEFAULT_BACKGROUND_SCALE,
        }
    }

    pub fn gradient_index(&self) -> usize {
        self.gradient_index
    }

    pub fn gradient(&self) -> &'static GradientPreset {
        &CATALOG[self.gradient_index]
    }

    /// Select a backdrop by catalog index. Out-of-range indices are ignored.
    pub fn select_gradient(&mut self, index: usize) {
        if index < CATALOG.len() {
            self.gradient_index = index;
        }
    }

    pub fn image_scale(&self) -> f32 {
        self.image_scale
    }

    pub fn background_scale(&self) -> f32 {
        self.background_scale
    }

    pub fn set_image_scale(&mut self, value: f32) {
        self.image_scale = value.clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn set_background_scale(&mut self, value: f32) {
        self.background_scale = value.clamp(MIN_SCALE, MAX_SCALE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings() -> EditSettings {
        EditSettings::randomized(&mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn defaults_match_initial_framing() {
        let s = settings();
        assert_eq!(s.image_scale(), DEFAULT_IMAGE_SCALE);
        assert_eq!(s.background_scale(), DEFAULT_BACKGROUND_SCALE);
        assert!(s.gradient_index() < CATALOG.len());
    }

    #[test]
    fn randomized_is_deterministic_under_a_seed() {
        let a = EditSettings::randomized(&mut StdRng::seed_from_u64(99));
        let b = EditSettings::randomized(&mut StdRng::seed_from_u64(99));
        assert_eq!(a.gradient_index(), b.gradient_index());
    }

    #[test]
    fn scales_clamp_to_range() {
        let mut s = settings();

        s.set_image_scale(0.49);
        assert_eq!(s.image_scale(), MIN_SCALE);
        s.set_image_scale(2.01);
        assert_eq!(s.image_scale(), MAX_SCALE);

        s.set_background_scale(-3.0);
        assert_eq!(s.background_scale(), MIN_SCALE);
        s.set_background_scale(100.0);
        assert_eq!(s.background_scale(), MAX_SCALE);
    }

    #[test]
    fn boundary_values_pass_through_exactly() {
        let mut s = settings();

        s.set_image_scale(MIN_SCALE);
        assert_eq!(s.image_scale(), MIN_SCALE);
        s.set_image_scale(MAX_SCALE);
        assert_eq!(s.image_scale(), MAX_SCALE);
        s.set_background_scale(MIN_SCALE);
        assert_eq!(s.background_scale(), MIN_SCALE);
        s.set_background_scale(MAX_SCALE);
        assert_eq!(s.background_scale(), MAX_SCALE);
    }

    #[test]
    fn gradient_selection_ignores_out_of_range() {
        let mut s = settings();
        s.select_gradient(2);
        assert_eq!(s.gradient_index(), 2);
        s.select_gradient(CATALOG.len());
        assert_eq!(s.gradient_index(), 2);
    }
}
