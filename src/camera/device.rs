//! Camera device enumeration and facing-based selection.

use nokhwa::query;
use nokhwa::utils::ApiBackend;

use super::types::{CameraError, CameraInfo, Facing};

/// List all available camera devices on the system.
///
/// Returns a vector of `CameraInfo` structs, or an error if querying fails.
/// If no cameras are found, returns an empty vector (not an error).
pub fn list_devices() -> Result<Vec<CameraInfo>, CameraError> {
    let devices = query(ApiBackend::Auto).map_err(|e| CameraError::QueryFailed(e.to_string()))?;

    Ok(devices
        .into_iter()
        .map(|d| CameraInfo {
            index: d.index().as_index().unwrap_or(0),
            name: d.human_name(),
            description: d.description().to_string(),
        })
        .collect())
}

/// Pick a device index for the given facing preference.
///
/// The facing hint is best-effort: device names are matched against common
/// naming conventions ("front"/"facetime" vs "back"/"rear"/"environment"),
/// and the first device wins when nothing matches. Returns
/// `CameraError::NoDevices` when no camera is attached at all.
pub fn pick_device(devices: &[CameraInfo], facing: Facing) -> Result<u32, CameraError> {
    if devices.is_empty() {
        return Err(CameraError::NoDevices);
    }

    let markers: &[&str] = match facing {
        Facing::User => &["front", "facetime", "user", "integrated"],
        Facing::Environment => &["back", "rear", "environment", "world"],
    };

    let matched = devices.iter().find(|d| {
        let name = d.name.to_lowercase();
        markers.iter().any(|m| name.contains(m))
    });

    Ok(matched.unwrap_or(&devices[0]).index)
}
