//! Camera types and data structures.

use std::fmt;
use std::time::Instant;

use thiserror::Error;

/// Information about an available camera device.
#[derive(Debug, Clone)]
pub struct CameraInfo {
    /// Device index for selection
    pub index: u32,
    /// Human-readable device name
    pub name: String,
    /// Device description
    pub description: String,
}

impl fmt::Display for CameraInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.index, self.name, self.description)
    }
}

/// Which camera the embedder would prefer, honored on a best-effort basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// User-facing camera (selfie view)
    #[default]
    User,
    /// Outward-facing camera
    Environment,
}

impl Facing {
    pub fn name(&self) -> &'static str {
        match self {
            Facing::User => "user",
            Facing::Environment => "environment",
        }
    }
}

/// Frame dimensions requested from the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// 640x480, fast to decode and downsample
    pub const VGA: Resolution = Resolution {
        width: 640,
        height: 480,
    };

    /// 1280x720, the default capture request
    pub const HD: Resolution = Resolution {
        width: 1280,
        height: 720,
    };
}

impl Default for Resolution {
    fn default() -> Self {
        Self::HD
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Constant capture configuration supplied by the embedding context.
///
/// Desired frame dimensions plus a facing preference. Not user-adjustable
/// once the widget is constructed.
#[derive(Debug, Clone, Copy)]
pub struct CaptureRequest {
    pub resolution: Resolution,
    pub facing: Facing,
}

impl Default for CaptureRequest {
    fn default() -> Self {
        Self {
            resolution: Resolution::HD,
            facing: Facing::User,
        }
    }
}

/// Settings for opening a camera session.
#[derive(Debug, Clone)]
pub struct CameraSettings {
    /// Explicit device index; when `None` the device is picked from the
    /// facing preference
    pub device_index: Option<u32>,
    /// Capture resolution (actual may vary)
    pub resolution: Resolution,
    /// Target FPS (actual may vary)
    pub fps: u32,
    /// Mirror horizontally (selfie view)
    pub mirror: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            device_index: None,
            resolution: Resolution::default(),
            fps: 30,
            mirror: true,
        }
    }
}

/// Pixel format of a captured frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    /// RGB format (3 bytes per pixel)
    Rgb,
}

/// A single frame pulled from the live feed.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw pixel data in RGB format
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Pixel format
    pub format: FrameFormat,
    /// Timestamp when the frame was captured
    pub timestamp: Instant,
}

impl Frame {
    /// Number of bytes per pixel (3 for RGB).
    pub fn bytes_per_pixel(&self) -> usize {
        match self.format {
            FrameFormat::Rgb => 3,
        }
    }
}

/// Errors reported by the camera-access capability.
///
/// These never cross the widget's contract; they surface only on the CLI
/// paths that talk to the capability directly.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("No cameras found")]
    NoDevices,
    #[error("Failed to query cameras: {0}")]
    QueryFailed(String),
    #[error("Failed to open camera: {0}")]
    OpenFailed(String),
    #[error(
        "Camera permission denied. On macOS, grant access in \
         System Settings > Privacy & Security > Camera"
    )]
    PermissionDenied,
    #[error("Camera device {0} not found. Run 'list-cameras' to see available devices")]
    DeviceNotFound(u32),
    #[error("Failed to start camera stream: {0}")]
    StreamFailed(String),
    #[error("Capture thread is already running")]
    AlreadyRunning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_info_display() {
        let info = CameraInfo {
            index: 0,
            name: "Test Camera".to_string(),
            description: "Built-in".to_string(),
        };
        assert_eq!(format!("{}", info), "[0] Test Camera (Built-in)");
    }

    #[test]
    fn test_resolution_display() {
        assert_eq!(Resolution::HD.to_string(), "1280x720");
        assert_eq!(Resolution::VGA.to_string(), "640x480");
    }

    #[test]
    fn test_capture_request_default() {
        let request = CaptureRequest::default();
        assert_eq!(request.resolution, Resolution::HD);
        assert_eq!(request.facing, Facing::User);
    }

    #[test]
    fn test_camera_settings_default() {
        let settings = CameraSettings::default();
        assert!(settings.device_index.is_none());
        assert_eq!(settings.resolution.width, 1280);
        assert_eq!(settings.resolution.height, 720);
        assert_eq!(settings.fps, 30);
        assert!(settings.mirror);
    }

    #[test]
    fn test_camera_error_display() {
        assert_eq!(format!("{}", CameraError::NoDevices), "No cameras found");
        assert!(format!("{}", CameraError::DeviceNotFound(5)).contains('5'));
        assert!(format!("{}", CameraError::PermissionDenied).contains("permission denied"));
    }

    #[test]
    fn test_frame_bytes_per_pixel() {
        let frame = Frame {
            data: vec![0; 6],
            width: 2,
            height: 1,
            format: FrameFormat::Rgb,
            timestamp: Instant::now(),
        };
        assert_eq!(frame.bytes_per_pixel(), 3);
    }

    #[test]
    fn test_facing_names() {
        assert_eq!(Facing::User.name(), "user");
        assert_eq!(Facing::Environment.name(), "environment");
    }
}
