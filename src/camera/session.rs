//! Live camera session handle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use super::capture_loop::{run_capture_loop, CaptureCommand};
use super::device::{list_devices, pick_device};
use super::types::{CameraError, CameraSettings, CaptureRequest, Frame, Resolution};

/// An active camera-access session.
///
/// Owns the background thread that continuously decodes frames from the
/// device and keeps the most recent one in a shared buffer. The session is
/// the opaque capability handle the capture widget holds while active;
/// dropping it stops the stream and releases the device.
pub struct CameraSession {
    /// Latest captured frame (shared with the capture thread)
    frame_buffer: Arc<Mutex<Option<Frame>>>,
    /// Capture thread handle
    capture_thread: Option<JoinHandle<()>>,
    /// Channel to send commands to the capture thread
    command_tx: Option<Sender<CaptureCommand>>,
    /// Signal to stop the capture thread
    stop_signal: Arc<AtomicBool>,
    /// Settings the session was opened with
    settings: CameraSettings,
    /// Device index the session resolved to
    device_index: u32,
    /// Actual resolution (set once the stream is up)
    actual_resolution: Option<Resolution>,
    /// Actual FPS (set once the stream is up)
    actual_fps: Option<u32>,
}

impl std::fmt::Debug for CameraSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraSession")
            .field("device_index", &self.device_index)
            .field("settings", &self.settings)
            .field("is_running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl CameraSession {
    /// Resolve a device for the request and prepare a session.
    ///
    /// An explicit `device_index` in the settings wins; otherwise the device
    /// is picked from the request's facing preference. The camera itself is
    /// opened inside the background thread (see `start`) to avoid
    /// thread-safety issues with platform capture APIs.
    ///
    /// # Errors
    /// * `CameraError::NoDevices` - no camera attached
    /// * `CameraError::DeviceNotFound` - explicit index doesn't exist
    pub fn open(request: &CaptureRequest, settings: CameraSettings) -> Result<Self, CameraError> {
        let devices = list_devices()?;

        let device_index = match settings.device_index {
            Some(index) => {
                if !devices.iter().any(|d| d.index == index) {
                    return Err(CameraError::DeviceNotFound(index));
                }
                index
            }
            None => pick_device(&devices, request.facing)?,
        };

        Ok(Self {
            frame_buffer: Arc::new(Mutex::new(None)),
            capture_thread: None,
            command_tx: None,
            stop_signal: Arc::new(AtomicBool::new(false)),
            settings,
            device_index,
            actual_resolution: None,
            actual_fps: None,
        })
    }

    /// Start streaming frames in a background thread.
    ///
    /// Blocks until the thread reports that the stream is up (or failed),
    /// so a successful return means the live feed is running.
    ///
    /// # Errors
    /// * `CameraError::AlreadyRunning` - capture is already running
    /// * `CameraError::PermissionDenied` - camera access denied by the OS
    /// * `CameraError::StreamFailed` / `CameraError::OpenFailed` - device errors
    pub fn start(&mut self) -> Result<(), CameraError> {
        if self.is_running() {
            return Err(CameraError::AlreadyRunning);
        }

        self.stop_signal.store(false, Ordering::SeqCst);

        let (tx, rx) = mpsc::channel();
        self.command_tx = Some(tx);

        let buffer = Arc::clone(&self.frame_buffer);
        let stop = Arc::clone(&self.stop_signal);
        let settings = self.settings.clone();
        let device_index = self.device_index;

        let (info_tx, info_rx) = mpsc::channel::<Result<(Resolution, u32), CameraError>>();

        let handle = std::thread::spawn(move || {
            run_capture_loop(device_index, settings, buffer, stop, rx, info_tx);
        });

        self.capture_thread = Some(handle);

        match info_rx.recv() {
            Ok(Ok((res, fps))) => {
                self.actual_resolution = Some(res);
                self.actual_fps = Some(fps);
                Ok(())
            }
            Ok(Err(e)) => {
                self.join_thread();
                Err(e)
            }
            Err(_) => {
                self.join_thread();
                Err(CameraError::StreamFailed(
                    "Capture thread terminated unexpectedly".to_string(),
                ))
            }
        }
    }

    /// Stop the capture thread and release the device.
    pub fn stop(&mut self) {
        if let Some(tx) = self.command_tx.take() {
            let _ = tx.send(CaptureCommand::Stop);
        }
        self.join_thread();
    }

    fn join_thread(&mut self) {
        self.stop_signal.store(true, Ordering::SeqCst);
        if let Some(handle) = self.capture_thread.take() {
            let _ = handle.join();
        }
    }

    /// Get the most recent frame from the live feed.
    ///
    /// Returns `None` if no frame has arrived yet or the stream is down.
    pub fn latest_frame(&self) -> Option<Frame> {
        let buffer = self.frame_buffer.lock().ok()?;
        buffer.clone()
    }

    /// Check if the capture thread is currently running.
    pub fn is_running(&self) -> bool {
        self.capture_thread
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    /// Actual resolution the camera negotiated, once streaming.
    pub fn actual_resolution(&self) -> Option<Resolution> {
        self.actual_resolution
    }

    /// Actual frame rate the camera negotiated, once streaming.
    pub fn actual_fps(&self) -> Option<u32> {
        self.actual_fps
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_open_invalid_device() {
        // Device index that is very unlikely to exist
        let settings = CameraSettings {
            device_index: Some(999),
            ..CameraSettings::default()
        };
        let result = CameraSession::open(&CaptureRequest::default(), settings);
        assert!(result.is_err());
        match result.unwrap_err() {
            CameraError::DeviceNotFound(idx) => assert_eq!(idx, 999),
            // No cameras at all is also acceptable in headless environments
            CameraError::NoDevices | CameraError::QueryFailed(_) => {}
            other => panic!("Expected DeviceNotFound, got {:?}", other),
        }
    }
}
