//! Acquisition state: simulated upload progress, rejection records, and
//! drag-and-drop batch bookkeeping.
//!
//! Progress here is cosmetic. It advances in fixed steps on a fixed timer
//! and has no relationship to file size or any real transfer; the uploading
//! flag clears when the counter reaches [`PROGRESS_CUTOFF`].

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Maximum accepted file size for dropped or picked files (1 MiB).
pub const MAX_FILE_BYTES: u64 = 1024 * 1024;
/// Progress gained per tick.
pub const PROGRESS_STEP: u32 = 10;
/// Progress value at which the uploading flag clears. The counter never
/// reaches 100; the original interval exits here.
pub const PROGRESS_CUTOFF: u32 = 30;
/// Interval between progress ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Why a candidate file was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Not a JPEG or PNG.
    InvalidType,
    /// Larger than [`MAX_FILE_BYTES`].
    TooLarge,
    /// More than one file offered at once.
    TooManyFiles,
    /// The file could not be read or decoded.
    Unreadable(String),
}

impl RejectReason {
    /// Stable machine-readable code for this reason.
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::InvalidType => "file-invalid-type",
            RejectReason::TooLarge => "file-too-large",
            RejectReason::TooManyFiles => "too-many-files",
            RejectReason::Unreadable(_) => "file-unreadable",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::InvalidType => {
                write!(f, "File type must be image/jpeg or image/png")
            }
            RejectReason::TooLarge => {
                write!(f, "File is larger than {} bytes", MAX_FILE_BYTES)
            }
            RejectReason::TooManyFiles => write!(f, "Too many files"),
            RejectReason::Unreadable(detail) => {
                write!(f, "File could not be read: {}", detail)
            }
        }
    }
}

/// One turned-away candidate: the filename and the ordered reasons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub filename: String,
    pub reasons: Vec<RejectReason>,
}

impl Rejection {
    pub fn new(filename: impl Into<String>, reasons: Vec<RejectReason>) -> Self {
        Self {
            filename: filename.into(),
            reasons,
        }
    }

    pub fn single(filename: impl Into<String>, reason: RejectReason) -> Self {
        Self::new(filename, vec![reason])
    }
}

/// State of the acquisition screen.
///
/// The drop-batch bookkeeping exists because the windowing layer delivers
/// one event per file: hover events count how many files are being offered,
/// and drop events complete the batch once that many paths have arrived.
#[derive(Debug, Default)]
pub struct UploadState {
    progress: u32,
    uploading: bool,
    rejections: Vec<Rejection>,
    hovered: usize,
    pending_drop: Vec<PathBuf>,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the simulated upload for a freshly accepted image.
    pub fn begin(&mut self) {
        self.progress = 0;
        self.uploading = true;
    }

    /// Advance the simulation one step. Returns true exactly once, on the
    /// tick that completes it.
    pub fn tick(&mut self) -> bool {
        if !self.uploading {
            return false;
        }
        self.progress += PROGRESS_STEP;
        if self.progress >= PROGRESS_CUTOFF {
            self.uploading = false;
            return true;
        }
        false
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Each new acquisition attempt replaces the previous rejection list.
    pub fn clear_rejections(&mut self) {
        self.rejections.clear();
    }

    pub fn push_rejection(&mut self, rejection: Rejection) {
        self.rejections.push(rejection);
    }

    /// A file entered the drop region.
    pub fn file_hovered(&mut self) {
        self.hovered += 1;
    }

    /// The drag left the window without dropping.
    pub fn hover_cancelled(&mut self) {
        self.hovered = 0;
        self.pending_drop.clear();
    }

    pub fn drag_active(&self) -> bool {
        self.hovered > 0
    }

    /// Record one dropped path. Returns the full batch once every offered
    /// file has arrived; platforms that never emit hover events degrade to
    /// single-file batches.
    pub fn file_dropped(&mut self, path: PathBuf) -> Option<Vec<PathBuf>> {
        self.pending_drop.push(path);
        let expected = self.hovered.max(1);
        if self.pending_drop.len() >= expected {
            self.hovered = 0;
            Some(std::mem::take(&mut self.pending_drop))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_runs_exactly_zero_to_cutoff() {
        let mut state = UploadState::new();
        state.begin();

        let mut seen = vec![state.progress()];
        let mut completions = 0;
        while state.is_uploading() {
            if state.tick() {
                completions += 1;
            }
            seen.push(state.progress());
        }

        assert_eq!(seen, vec![0, 10, 20, 30]);
        assert_eq!(completions, 1);
        assert!(!state.is_uploading());
    }

    #[test]
    fn tick_is_inert_when_not_uploading() {
        let mut state = UploadState::new();
        assert!(!state.tick());
        assert_eq!(state.progress(), 0);
    }

    #[test]
    fn begin_resets_progress_for_each_acquisition() {
        let mut state = UploadState::new();
        state.begin();
        while state.is_uploading() {
            state.tick();
        }
        assert_eq!(state.progress(), PROGRESS_CUTOFF);

        state.begin();
        assert_eq!(state.progress(), 0);
        assert!(state.is_uploading());
    }

    #[test]
    fn single_drop_without_hover_completes_immediately() {
        let mut state = UploadState::new();
        let batch = state.file_dropped(PathBuf::from("/tmp/shot.png"));
        assert_eq!(batch, Some(vec![PathBuf::from("/tmp/shot.png")]));
    }

    #[test]
    fn multi_file_batch_completes_on_last_drop() {
        let mut state = UploadState::new();
        state.file_hovered();
        state.file_hovered();
        state.file_hovered();
        assert!(state.drag_active());

        assert_eq!(state.file_dropped(PathBuf::from("a.png")), None);
        assert_eq!(state.file_dropped(PathBuf::from("b.png")), None);
        let batch = state.file_dropped(PathBuf::from("c.png")).unwrap();
        assert_eq!(batch.len(), 3);
        assert!(!state.drag_active());
    }

    #[test]
    fn cancelled_hover_clears_the_batch() {
        let mut state = UploadState::new();
        state.file_hovered();
        state.file_hovered();
        state.hover_cancelled();
        assert!(!state.drag_active());

        // The next drop is a fresh single-file batch.
        let batch = state.file_dropped(PathBuf::from("d.png"));
        assert_eq!(batch, Some(vec![PathBuf::from("d.png")]));
    }

    #[test]
    fn rejection_reasons_keep_codes_and_messages_paired() {
        let rejection = Rejection::new(
            "huge.bmp",
            vec![RejectReason::InvalidType, RejectReason::TooLarge],
        );
        let codes: Vec<_> = rejection.reasons.iter().map(|r| r.code()).collect();
        assert_eq!(codes, vec!["file-invalid-type", "file-too-large"]);
        assert_eq!(
            rejection.reasons[1].to_string(),
            "File is larger than 1048576 bytes"
        );
    }

    #[test]
    fn new_attempt_replaces_rejections() {
        let mut state = UploadState::new();
        state.push_rejection(Rejection::single("a.gif", RejectReason::InvalidType));
        state.push_rejection(Rejection::single("b.gif", RejectReason::InvalidType));
        assert_eq!(state.rejections().len(), 2);

        state.clear_rejections();
        state.push_rejection(Rejection::single("c.png", RejectReason::TooLarge));
        assert_eq!(state.rejections().len(), 1);
        assert_eq!(state.rejections()[0].filename, "c.png");
    }
}
