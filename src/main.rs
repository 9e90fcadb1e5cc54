use std::path::PathBuf;
use std::sync::Arc;

use iced::{event, keyboard, time, Element, Subscription, Task, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod clipboard;
mod error;
mod loader;
mod render;
mod state;
mod ui;

use error::{ExportError, PasteError};
use state::data::SelectedImage;
use state::upload::{RejectReason, Rejection, UploadState, TICK_INTERVAL};
use ui::editor::{EditorState, FRAME_INTERVAL};

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Upload,
    Editor,
}

/// Main application state
struct ShotEditor {
    screen: Screen,
    /// The one image being edited, if any
    selected: Option<Arc<SelectedImage>>,
    /// Acquisition screen state
    upload: UploadState,
    /// Composition screen state, rebuilt fresh on every entry
    editor: Option<EditorState>,
    /// Backdrop randomness; injected so tests can seed it
    rng: StdRng,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the drop region
    OpenFilePicker,
    /// The native file picker closed
    FilePicked(Option<PathBuf>),
    /// A dragged file entered the window
    FileHovered,
    /// The drag left the window without dropping
    FileHoverLeft,
    /// One file was dropped on the window
    FileDropped(PathBuf),
    /// A candidate finished loading and validating
    CandidateLoaded(Result<Arc<SelectedImage>, Rejection>),
    /// Ctrl/Cmd+V on the acquisition screen
    PasteImage,
    /// Simulated-progress timer fired
    UploadTick,
    /// User picked a backdrop swatch
    GradientSelected(usize),
    ImageScaleChanged(f32),
    BackgroundScaleChanged(f32),
    /// Scale animation frame
    AnimationTick,
    /// Release the image and return to acquisition
    BackToUpload,
    /// Export the current composite
    Export,
    /// Export task finished
    ExportFinished(Result<Option<PathBuf>, ExportError>),
}

impl ShotEditor {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        println!(
            "🎨 Shot Editor initialized with {} backdrops",
            state::gradient::CATALOG.len()
        );
        (Self::with_rng(StdRng::from_entropy()), Task::none())
    }

    /// Build the application around an explicit RNG.
    fn with_rng(rng: StdRng) -> Self {
        ShotEditor {
            screen: Screen::Upload,
            selected: None,
            upload: UploadState::new(),
            editor: None,
            rng,
            status: String::from("Ready."),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFilePicker => Task::perform(pick_file_async(), Message::FilePicked),
            Message::FilePicked(Some(path)) => {
                self.upload.clear_rejections();
                Task::perform(loader::load_candidate(path), Message::CandidateLoaded)
            }
            Message::FilePicked(None) => Task::none(),
            Message::FileHovered => {
                self.upload.file_hovered();
                Task::none()
            }
            Message::FileHoverLeft => {
                self.upload.hover_cancelled();
                Task::none()
            }
            Message::FileDropped(path) => {
                let Some(batch) = self.upload.file_dropped(path) else {
                    return Task::none();
                };
                self.upload.clear_rejections();
                if batch.len() > 1 {
                    for path in &batch {
                        self.upload.push_rejection(Rejection::single(
                            loader::display_name(path),
                            RejectReason::TooManyFiles,
                        ));
                    }
                    return Task::none();
                }
                match batch.into_iter().next() {
                    Some(path) => {
                        Task::perform(loader::load_candidate(path), Message::CandidateLoaded)
                    }
                    None => Task::none(),
                }
            }
            Message::CandidateLoaded(result) => {
                // A load that finishes after the screen changed is stale.
                if self.screen != Screen::Upload {
                    return Task::none();
                }
                match result {
                    Ok(image) => {
                        self.selected = Some(image);
                        self.upload.begin();
                    }
                    Err(rejection) => self.upload.push_rejection(rejection),
                }
                Task::none()
            }
            Message::PasteImage => {
                match clipboard::read_clipboard_image() {
                    Ok(image) => {
                        println!("📋 Pasted image ({}x{})", image.width(), image.height());
                        self.selected = Some(Arc::new(image));
                        self.enter_editor();
                    }
                    // A paste without an image is not an error.
                    Err(PasteError::NoImage) => {}
                    Err(err) => eprintln!("⚠️  Clipboard read failed: {}", err),
                }
                Task::none()
            }
            Message::UploadTick => {
                if self.upload.tick() {
                    self.enter_editor();
                }
                Task::none()
            }
            Message::GradientSelected(index) => {
                if let (Some(editor), Some(image)) = (&mut self.editor, &self.selected) {
                    editor.select_gradient(index, image);
                }
                Task::none()
            }
            Message::ImageScaleChanged(value) => {
                if let Some(editor) = &mut self.editor {
                    editor.set_image_scale(value);
                }
                Task::none()
            }
            Message::BackgroundScaleChanged(value) => {
                if let Some(editor) = &mut self.editor {
                    editor.set_background_scale(value);
                }
                Task::none()
            }
            Message::AnimationTick => {
                if let (Some(editor), Some(image)) = (&mut self.editor, &self.selected) {
                    editor.tick(image);
                }
                Task::none()
            }
            Message::BackToUpload => {
                self.selected = None;
                self.editor = None;
                self.upload = UploadState::new();
                self.status = String::from("Ready.");
                self.screen = Screen::Upload;
                Task::none()
            }
            Message::Export => {
                if let (Some(editor), Some(image)) = (&self.editor, &self.selected) {
                    let surface = editor.compose_current(image);
                    self.status = String::from("Exporting…");
                    return Task::perform(
                        render::export::save_composite(surface),
                        Message::ExportFinished,
                    );
                }
                Task::none()
            }
            Message::ExportFinished(result) => {
                match result {
                    Ok(Some(path)) => {
                        println!("💾 Exported composite to {}", path.display());
                        self.status = format!("Saved {}", path.display());
                    }
                    Ok(None) => self.status = String::from("Export cancelled."),
                    Err(err) => {
                        eprintln!("❌ Export failed: {}", err);
                        self.status = format!("Export failed: {}", err);
                    }
                }
                Task::none()
            }
        }
    }

    /// Hand the accepted image over to the composition screen.
    fn enter_editor(&mut self) {
        if let Some(image) = &self.selected {
            self.editor = Some(EditorState::new(&mut self.rng, image));
            self.screen = Screen::Editor;
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        match (self.screen, &self.editor) {
            (Screen::Editor, Some(editor)) => ui::editor::view(editor, &self.status),
            _ => ui::upload::view(&self.upload, self.selected.as_deref()),
        }
    }

    /// Event routing and timers are scoped to the active screen, so the
    /// paste listener and the progress timer cannot outlive it.
    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();
        match self.screen {
            Screen::Upload => {
                subscriptions.push(event::listen_with(acquisition_events));
                if self.upload.is_uploading() {
                    subscriptions.push(time::every(TICK_INTERVAL).map(|_| Message::UploadTick));
                }
            }
            Screen::Editor => {
                if self.editor.as_ref().is_some_and(EditorState::animating) {
                    subscriptions.push(time::every(FRAME_INTERVAL).map(|_| Message::AnimationTick));
                }
            }
        }
        Subscription::batch(subscriptions)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Route window and keyboard events while the acquisition screen is active.
fn acquisition_events(
    event: iced::Event,
    status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        iced::Event::Window(iced::window::Event::FileHovered(_)) => Some(Message::FileHovered),
        iced::Event::Window(iced::window::Event::FilesHoveredLeft) => Some(Message::FileHoverLeft),
        iced::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status == event::Status::Ignored && modifiers.command() =>
        {
            match key {
                keyboard::Key::Character(c) if c.as_str() == "v" => Some(Message::PasteImage),
                _ => None,
            }
        }
        _ => None,
    }
}

fn main() -> iced::Result {
    iced::application("Shot Editor", ShotEditor::update, ShotEditor::view)
        .subscription(ShotEditor::subscription)
        .theme(ShotEditor::theme)
        .window_size(iced::Size::new(960.0, 600.0))
        .centered()
        .run_with(ShotEditor::new)
}

/// Show the native picker for a single image file.
async fn pick_file_async() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Choose an Image")
        .add_filter("Images (JPEG, PNG)", &["jpg", "jpeg", "png"])
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}
