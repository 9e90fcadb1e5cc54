//! Composition screen: live preview, gradient picker, layer sliders, export.
//!
//! The preview widget displays the surface produced by the compositor, so
//! the pixels on screen are the pixels a Download writes to disk.

use std::time::Duration;

use iced::widget::image::Handle;
use iced::widget::{button, column, container, row, slider, text, Space};
use iced::{Alignment, Background, Color, Degrees, Element, Gradient, Length};
use iced_aw::Wrap;
use image::RgbaImage;
use rand::Rng;

use crate::render::compose::{compose, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::state::data::SelectedImage;
use crate::state::edit::{EditSettings, MAX_SCALE, MIN_SCALE, SCALE_STEP};
use crate::state::gradient::{GradientPreset, CATALOG};
use crate::Message;

/// Frame interval for the scale animation.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
/// Fraction of the remaining distance covered per animation frame.
const EASE_RATE: f32 = 0.35;
/// Distance below which a shown scale snaps to its target.
const EASE_SNAP: f32 = 0.002;

/// State of the composition screen.
///
/// Slider targets live in [`EditSettings`]; the shown scales trail them so
/// drags ease instead of snapping. Backdrop swaps apply immediately.
pub struct EditorState {
    settings: EditSettings,
    shown_image_scale: f32,
    shown_background_scale: f32,
    preview: Handle,
}

impl EditorState {
    /// Fresh composition state with a randomly chosen backdrop.
    pub fn new(rng: &mut impl Rng, image: &SelectedImage) -> Self {
        let settings = EditSettings::randomized(rng);
        let mut state = Self {
            shown_image_scale: settings.image_scale(),
            shown_background_scale: settings.background_scale(),
            settings,
            preview: Handle::from_rgba(1, 1, vec![0, 0, 0, 0]),
        };
        state.refresh(image);
        state
    }

    pub fn settings(&self) -> &EditSettings {
        &self.settings
    }

    pub fn select_gradient(&mut self, index: usize, image: &SelectedImage) {
        self.settings.select_gradient(index);
        self.refresh(image);
    }

    pub fn set_image_scale(&mut self, value: f32) {
        self.settings.set_image_scale(value);
    }

    pub fn set_background_scale(&mut self, value: f32) {
        self.settings.set_background_scale(value);
    }

    /// True while a shown scale is still easing toward its target.
    pub fn animating(&self) -> bool {
        self.shown_image_scale != self.settings.image_scale()
            || self.shown_background_scale != self.settings.background_scale()
    }

    /// Advance the animation one frame and re-render if anything moved.
    pub fn tick(&mut self, image: &SelectedImage) {
        if !self.animating() {
            return;
        }
        self.shown_image_scale = approach(self.shown_image_scale, self.settings.image_scale());
        self.shown_background_scale =
            approach(self.shown_background_scale, self.settings.background_scale());
        self.refresh(image);
    }

    /// Composite at the scales currently on screen, mid-animation included.
    /// A Download captures exactly this.
    pub fn compose_current(&self, image: &SelectedImage) -> RgbaImage {
        compose(
            &image.pixels,
            self.settings.gradient(),
            self.shown_image_scale,
            self.shown_background_scale,
        )
    }

    fn refresh(&mut self, image: &SelectedImage) {
        let surface = self.compose_current(image);
        self.preview = Handle::from_rgba(surface.width(), surface.height(), surface.into_raw());
    }
}

fn approach(current: f32, target: f32) -> f32 {
    let next = current + (target - current) * EASE_RATE;
    if (next - target).abs() < EASE_SNAP {
        target
    } else {
        next
    }
}

/// Build the composition screen.
pub fn view<'a>(state: &'a EditorState, status: &'a str) -> Element<'a, Message> {
    let preview = container(
        iced::widget::image(state.preview.clone())
            .width(Length::Fixed(SURFACE_WIDTH as f32))
            .height(Length::Fixed(SURFACE_HEIGHT as f32)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill);

    let sidebar = container(
        column![
            button(text("Back to upload").size(14))
                .on_press(Message::BackToUpload)
                .padding(10)
                .width(Length::Fill),
            button(text("Download").size(14))
                .on_press(Message::Export)
                .padding(10)
                .width(Length::Fill),
            gradient_picker(state.settings.gradient_index()),
            scale_section(
                "Image Size",
                state.settings.image_scale(),
                Message::ImageScaleChanged,
            ),
            scale_section(
                "Background Size",
                state.settings.background_scale(),
                Message::BackgroundScaleChanged,
            ),
            text(status).size(12),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .width(Length::Fixed(260.0))
    .height(Length::Fill)
    .padding(16);

    row![preview, sidebar].into()
}

/// One swatch per catalog entry; the selected one gets a highlight border.
fn gradient_picker<'a>(selected: usize) -> Element<'a, Message> {
    let swatches: Vec<Element<'a, Message>> = CATALOG
        .iter()
        .enumerate()
        .map(|(index, preset)| {
            button(Space::new(Length::Shrink, Length::Shrink))
                .width(Length::Fixed(40.0))
                .height(Length::Fixed(40.0))
                .on_press(Message::GradientSelected(index))
                .style(move |theme, _status| swatch_style(theme, preset, index == selected))
                .into()
        })
        .collect();

    column![
        text("Gradients").size(14),
        Wrap::with_elements(swatches).spacing(8.0).line_spacing(8.0),
    ]
    .spacing(8)
    .width(Length::Fill)
    .into()
}

fn scale_section<'a>(
    label: &'a str,
    value: f32,
    on_change: fn(f32) -> Message,
) -> Element<'a, Message> {
    column![
        text(label).size(12),
        slider(MIN_SCALE..=MAX_SCALE, value, on_change).step(SCALE_STEP),
        text(format!("{:.2}x", value)).size(12),
    ]
    .spacing(4)
    .width(Length::Fill)
    .into()
}

fn swatch_style(theme: &iced::Theme, preset: &GradientPreset, selected: bool) -> button::Style {
    let border_color = if selected {
        theme.extended_palette().primary.strong.color
    } else {
        Color::TRANSPARENT
    };
    button::Style {
        background: Some(Background::Gradient(Gradient::Linear(linear(preset)))),
        border: iced::Border {
            color: border_color,
            width: 2.0,
            radius: 6.0.into(),
        },
        ..button::Style::default()
    }
}

fn linear(preset: &GradientPreset) -> iced::gradient::Linear {
    let (r0, g0, b0) = preset.stops[0];
    let (r1, g1, b1) = preset.stops[1];
    iced::gradient::Linear::new(Degrees(preset.angle_deg))
        .add_stop(0.0, Color::from_rgb8(r0, g0, b0))
        .add_stop(1.0, Color::from_rgb8(r1, g1, b1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::ImageMime;
    use image::Rgba;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_image() -> SelectedImage {
        SelectedImage {
            name: "test.png".to_string(),
            mime: ImageMime::Png,
            size_bytes: 256,
            pixels: RgbaImage::from_pixel(8, 8, Rgba([50, 100, 150, 255])),
        }
    }

    #[test]
    fn shown_scales_start_settled() {
        let image = test_image();
        let state = EditorState::new(&mut StdRng::seed_from_u64(1), &image);
        assert!(!state.animating());
    }

    #[test]
    fn slider_changes_ease_then_snap() {
        let image = test_image();
        let mut state = EditorState::new(&mut StdRng::seed_from_u64(1), &image);

        state.set_image_scale(MAX_SCALE);
        assert!(state.animating());

        let mut frames = 0;
        while state.animating() {
            state.tick(&image);
            frames += 1;
            assert!(frames < 120, "animation did not settle");
        }
        assert_eq!(state.shown_image_scale, MAX_SCALE);
        // Easing took more than a single frame.
        assert!(frames > 1);
    }

    #[test]
    fn both_scales_ease_independently() {
        let image = test_image();
        let mut state = EditorState::new(&mut StdRng::seed_from_u64(1), &image);

        state.set_image_scale(MIN_SCALE);
        state.set_background_scale(MAX_SCALE);
        while state.animating() {
            state.tick(&image);
        }
        assert_eq!(state.shown_image_scale, MIN_SCALE);
        assert_eq!(state.shown_background_scale, MAX_SCALE);
    }

    #[test]
    fn backdrop_swap_applies_immediately() {
        let image = test_image();
        let mut state = EditorState::new(&mut StdRng::seed_from_u64(1), &image);

        state.select_gradient(3, &image);
        assert_eq!(state.settings().gradient_index(), 3);
        assert!(!state.animating());
    }

    #[test]
    fn composite_matches_surface_dimensions() {
        let image = test_image();
        let state = EditorState::new(&mut StdRng::seed_from_u64(1), &image);
        let surface = state.compose_current(&image);
        assert_eq!(
            (surface.width(), surface.height()),
            (SURFACE_WIDTH, SURFACE_HEIGHT)
        );
    }
}
