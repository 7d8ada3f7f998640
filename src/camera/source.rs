//! Camera-access capability traits and implementations.
//!
//! The capture widget never talks to hardware directly. It is handed a
//! [`CameraAccess`] capability; activating the widget opens an opaque
//! [`FrameSource`] session that the widget owns exclusively while active.
//! This keeps the widget testable without a device.

use std::time::Instant;

use super::session::CameraSession;
use super::types::{CameraError, CameraSettings, CaptureRequest, Frame, FrameFormat};

/// A live feed the widget can pull the current frame from.
///
/// The feed is owned and refreshed by the capability; the widget copies a
/// frame out only at the instant of capture or preview refresh.
pub trait FrameSource {
    /// The most recent frame, or `None` when the feed has nothing yet.
    fn latest_frame(&mut self) -> Option<Frame>;
}

/// The camera-access capability: opens a live session for a request.
pub trait CameraAccess {
    /// Request a live video feed with the given resolution and facing
    /// preference. A successful open means frames will start arriving;
    /// the session releases the device when dropped.
    fn open(&mut self, request: &CaptureRequest) -> Result<Box<dyn FrameSource>, CameraError>;
}

impl FrameSource for CameraSession {
    fn latest_frame(&mut self) -> Option<Frame> {
        CameraSession::latest_frame(self)
    }
}

/// Real hardware access through nokhwa.
#[derive(Debug, Clone, Default)]
pub struct NativeAccess {
    /// Session knobs beyond the request itself (device override, mirror, fps)
    pub settings: CameraSettings,
}

impl NativeAccess {
    pub fn new(settings: CameraSettings) -> Self {
        Self { settings }
    }
}

impl CameraAccess for NativeAccess {
    fn open(&mut self, request: &CaptureRequest) -> Result<Box<dyn FrameSource>, CameraError> {
        let mut settings = self.settings.clone();
        settings.resolution = request.resolution;

        let mut session = CameraSession::open(request, settings)?;
        session.start()?;
        Ok(Box::new(session))
    }
}

/// Synthetic access that serves a deterministic moving test pattern.
///
/// Used by the widget tests and by `--test-pattern` for running without
/// hardware. The pattern is a diagonal gradient that shifts each frame so
/// the preview visibly animates.
#[derive(Debug, Clone, Default)]
pub struct SyntheticAccess {
    /// Serve no frames at all (a feed that never becomes ready)
    starved: bool,
    /// Fail the open call itself
    deny: bool,
}

impl SyntheticAccess {
    pub fn new() -> Self {
        Self::default()
    }

    /// A feed that opens fine but never produces a frame.
    pub fn starved() -> Self {
        Self {
            starved: true,
            deny: false,
        }
    }

    /// A capability that refuses to open (permission denied).
    pub fn denied() -> Self {
        Self {
            starved: false,
            deny: true,
        }
    }
}

impl CameraAccess for SyntheticAccess {
    fn open(&mut self, request: &CaptureRequest) -> Result<Box<dyn FrameSource>, CameraError> {
        if self.deny {
            return Err(CameraError::PermissionDenied);
        }
        Ok(Box::new(SyntheticSource {
            width: request.resolution.width,
            height: request.resolution.height,
            sequence: 0,
            starved: self.starved,
        }))
    }
}

/// Frame source backing [`SyntheticAccess`].
pub struct SyntheticSource {
    width: u32,
    height: u32,
    sequence: u64,
    starved: bool,
}

impl FrameSource for SyntheticSource {
    fn latest_frame(&mut self) -> Option<Frame> {
        if self.starved {
            return None;
        }

        self.sequence = self.sequence.wrapping_add(1);
        let shift = (self.sequence * 4) as u32;

        let mut data = Vec::with_capacity((self.width * self.height * 3) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let v = ((x + y + shift) % 256) as u8;
                data.extend_from_slice(&[v, v / 2, 255 - v]);
            }
        }

        Some(Frame {
            data,
            width: self.width,
            height: self.height,
            format: FrameFormat::Rgb,
            timestamp: Instant::now(),
        })
    }
}
