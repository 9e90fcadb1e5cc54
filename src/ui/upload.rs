//! Acquisition screen: drop zone, simulated progress, rejection list.

use iced::widget::image::Handle;
use iced::widget::{button, column, container, progress_bar, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::data::SelectedImage;
use crate::state::upload::UploadState;
use crate::Message;

/// Build the acquisition screen.
///
/// The drop zone doubles as the click target for the native file picker.
/// While a selected image exists (the simulated upload window) its thumbnail
/// replaces the prompt text.
pub fn view<'a>(
    state: &'a UploadState,
    selected: Option<&'a SelectedImage>,
) -> Element<'a, Message> {
    let zone_body: Element<'a, Message> = match selected {
        Some(image) => iced::widget::image(thumbnail(image))
            .width(Length::Fixed(300.0))
            .height(Length::Fixed(200.0))
            .into(),
        None => {
            let prompt = if state.drag_active() {
                "Drop it here..."
            } else {
                "Drag & drop a screenshot, or click to upload"
            };
            column![
                text(prompt).size(16),
                text("(Only JPEG/PNG, max 1MB)").size(12),
            ]
            .spacing(6)
            .align_x(Alignment::Center)
            .into()
        }
    };

    let drag_active = state.drag_active();
    let drop_zone = button(
        container(zone_body)
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .on_press(Message::OpenFilePicker)
    .padding(24)
    .width(Length::Fixed(400.0))
    .style(move |theme, _status| drop_zone_style(theme, drag_active));

    let mut content: Column<'a, Message> =
        column![drop_zone].spacing(16).align_x(Alignment::Center);

    if state.is_uploading() {
        content = content.push(
            column![
                progress_bar(0.0..=100.0, state.progress() as f32)
                    .height(Length::Fixed(10.0)),
                text(format!("Uploading… {}%", state.progress())).size(13),
            ]
            .spacing(4)
            .width(Length::Fixed(400.0)),
        );
    }

    if !state.rejections().is_empty() {
        let mut list = Column::new().spacing(6).width(Length::Fixed(400.0));
        for rejection in state.rejections() {
            let mut entry = column![text(&rejection.filename)
                .size(13)
                .style(text::danger)]
            .spacing(2);
            for reason in &rejection.reasons {
                entry = entry.push(text(reason.to_string()).size(12).style(text::danger));
            }
            list = list.push(entry);
        }
        content = content.push(list);
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn thumbnail(image: &SelectedImage) -> Handle {
    Handle::from_rgba(image.width(), image.height(), image.pixels.as_raw().clone())
}

fn drop_zone_style(theme: &iced::Theme, drag_active: bool) -> button::Style {
    let palette = theme.extended_palette();
    let border_color = if drag_active {
        palette.primary.strong.color
    } else {
        palette.background.strong.color
    };
    button::Style {
        background: Some(palette.background.weak.color.into()),
        text_color: palette.background.base.text,
        border: iced::Border {
            color: border_color,
            width: 2.0,
            radius: 12.0.into(),
        },
        ..button::Style::default()
    }
}
