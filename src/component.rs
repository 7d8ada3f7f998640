//! The camera-capture widget.
//!
//! `CameraCapture` is a small state machine over two states. Inactive shows
//! the activation controls; Active owns a live camera session and shows the
//! preview with capture controls. The embedding context supplies two
//! callbacks: one receives each captured still, the other fires when the
//! user cancels before activating. Everything else (writing files, upload,
//! styling) is the embedder's business.
//!
//! The contract is deliberately non-throwing: a capture with no frame ready
//! does nothing at all, and a camera that fails to open leaves an Active
//! widget with an empty preview rather than surfacing an error.

use crate::camera::{CameraAccess, CaptureRequest, Frame, FrameSource};
use crate::snapshot::{self, CapturedImage, DEFAULT_JPEG_QUALITY};

/// Widget state: either showing activation controls or a live preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// Initial state, and terminal state on cancel
    #[default]
    Inactive,
    /// Live preview running, capture controls shown
    Active,
}

impl CaptureState {
    /// The controls rendered for this state.
    ///
    /// Rendering is a pure mapping from state to controls; transitions only
    /// happen through [`CameraCapture::handle`].
    pub fn controls(&self) -> &'static [Control] {
        match self {
            CaptureState::Inactive => &[Control::ActivateCamera, Control::Cancel],
            CaptureState::Active => &[Control::CapturePhoto, Control::Retake],
        }
    }

    /// Whether the live preview is part of this state's rendering.
    pub fn shows_preview(&self) -> bool {
        matches!(self, CaptureState::Active)
    }
}

/// User-triggered actions the widget responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Activate,
    Capture,
    Retake,
    Cancel,
}

/// On-screen controls, one per action the current state offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    ActivateCamera,
    Cancel,
    CapturePhoto,
    Retake,
}

impl Control {
    pub fn label(&self) -> &'static str {
        match self {
            Control::ActivateCamera => "Activate Camera",
            Control::Cancel => "Cancel",
            Control::CapturePhoto => "Capture Photo",
            Control::Retake => "Retake",
        }
    }

    /// The action this control triggers.
    pub fn action(&self) -> Action {
        match self {
            Control::ActivateCamera => Action::Activate,
            Control::Cancel => Action::Cancel,
            Control::CapturePhoto => Action::Capture,
            Control::Retake => Action::Retake,
        }
    }
}

type CaptureCallback = Box<dyn FnMut(CapturedImage)>;
type CloseCallback = Box<dyn FnMut()>;

/// The capture widget.
///
/// Holds the camera-access capability, the session handle while active, and
/// the embedder's callbacks. All transitions happen on discrete actions fed
/// through [`handle`](Self::handle); there is no background work here beyond
/// what the capability runs for the live feed.
pub struct CameraCapture {
    state: CaptureState,
    request: CaptureRequest,
    access: Box<dyn CameraAccess>,
    session: Option<Box<dyn FrameSource>>,
    jpeg_quality: u8,
    on_capture: Option<CaptureCallback>,
    on_close: Option<CloseCallback>,
}

impl CameraCapture {
    /// Create an inactive widget over the given camera-access capability.
    pub fn new(access: Box<dyn CameraAccess>, request: CaptureRequest) -> Self {
        Self {
            state: CaptureState::Inactive,
            request,
            access,
            session: None,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            on_capture: None,
            on_close: None,
        }
    }

    /// Set the JPEG quality used for captured stills.
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    /// Register the callback invoked once per successful capture.
    pub fn on_capture(mut self, callback: impl FnMut(CapturedImage) + 'static) -> Self {
        self.on_capture = Some(Box::new(callback));
        self
    }

    /// Register the callback invoked when the user cancels while inactive.
    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Controls for the current state (pure view mapping).
    pub fn controls(&self) -> &'static [Control] {
        self.state.controls()
    }

    pub fn shows_preview(&self) -> bool {
        self.state.shows_preview()
    }

    /// The current frame of the live feed, for preview rendering.
    ///
    /// `None` while inactive, before the feed has produced anything, or when
    /// the camera could not be opened (the preview area stays empty).
    pub fn preview_frame(&mut self) -> Option<Frame> {
        self.session.as_mut()?.latest_frame()
    }

    /// Feed one user action into the state machine.
    pub fn handle(&mut self, action: Action) {
        match (self.state, action) {
            (CaptureState::Inactive, Action::Activate) => self.activate(),
            (CaptureState::Inactive, Action::Cancel) => {
                if let Some(callback) = self.on_close.as_mut() {
                    callback();
                }
            }
            (CaptureState::Active, Action::Capture) => self.capture(),
            (CaptureState::Active, Action::Retake) => {
                // Back to the live preview; the session stays open so the
                // next capture needs no re-activation. Nothing to tear down
                // since captures never freeze the feed.
                log::debug!("retake: returning to live preview");
            }
            (state, action) => {
                log::debug!("ignoring {:?} in {:?}", action, state);
            }
        }
    }

    /// External close trigger from the embedding context.
    ///
    /// Ends the session (releasing the device through the capability's own
    /// teardown) and returns to Inactive. Invokes neither callback.
    pub fn close(&mut self) {
        self.session = None;
        self.state = CaptureState::Inactive;
    }

    fn activate(&mut self) {
        // A failed open is opaque by contract: enter Active anyway and let
        // the preview show nothing.
        match self.access.open(&self.request) {
            Ok(session) => self.session = Some(session),
            Err(e) => {
                log::warn!("camera access failed, preview will stay empty: {}", e);
                self.session = None;
            }
        }
        self.state = CaptureState::Active;
    }

    fn capture(&mut self) {
        // No frame ready -> no image, no callback, no state change.
        let Some(frame) = self.preview_frame() else {
            log::debug!("capture: no frame available");
            return;
        };

        match snapshot::encode_jpeg(&frame, self.jpeg_quality) {
            Ok(image) => {
                if let Some(callback) = self.on_capture.as_mut() {
                    callback(image);
                }
            }
            Err(e) => {
                // Encoding failures stay silent like a missing frame
                log::warn!("capture: failed to encode frame: {}", e);
            }
        }
    }
}

impl std::fmt::Debug for CameraCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraCapture")
            .field("state", &self.state)
            .field("request", &self.request)
            .field("has_session", &self.session.is_some())
            .finish_non_exhaustive()
    }
}
