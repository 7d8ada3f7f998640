//! Camera capture module for webcam access and frame retrieval.
//!
//! This module provides the camera-access capability the capture widget
//! depends on:
//! - Device enumeration via [`list_devices`]
//! - Live sessions via [`CameraSession`] (background thread, latest frame)
//! - The [`CameraAccess`] / [`FrameSource`] capability traits, with
//!   [`NativeAccess`] (nokhwa) and [`SyntheticAccess`] (test pattern)
//!   implementations

mod capture_loop;
mod device;
mod frame_utils;
mod session;
mod source;
mod types;

pub use device::{list_devices, pick_device};
pub use session::CameraSession;
pub use source::{CameraAccess, FrameSource, NativeAccess, SyntheticAccess};
pub use types::{
    CameraError, CameraInfo, CameraSettings, CaptureRequest, Facing, Frame, FrameFormat,
    Resolution,
};
