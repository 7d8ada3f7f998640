//! Subcommand handlers for list-cameras and config actions.

use super::args::ConfigAction;
use crate::camera;
use crate::config::{default_path as config_path, Config};

/// List available cameras and print them to stdout.
pub fn list_cameras() {
    match camera::list_devices() {
        Ok(devices) => {
            if devices.is_empty() {
                println!("No cameras found.");
                println!();
                println!("Make sure your camera is connected and permissions are granted.");
                println!(
                    "On macOS, grant access in System Settings > Privacy & Security > Camera."
                );
            } else {
                println!("Available cameras:");
                for device in devices {
                    println!("  {}", device);
                }
                println!();
                println!("Use --camera <index> to select a camera.");
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction) {
    match action {
        ConfigAction::Show => show_config(),
        ConfigAction::Init => init_config(),
    }
}

fn show_config() {
    let path = config_path();
    let config = match Config::load(None) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Current configuration:");
    println!(
        "  Camera device: {}",
        config
            .camera
            .device
            .map(|d| d.to_string())
            .unwrap_or_else(|| "auto".to_string())
    );
    println!(
        "  Facing: {}",
        config.facing().unwrap_or_default().name()
    );
    println!("  Resolution: {}", config.resolution().unwrap_or_default());
    println!("  Mirror: {}", if config.camera.mirror { "yes" } else { "no" });
    println!("  Charset: {}", config.charset().unwrap_or_default().name());
    println!(
        "  Invert preview: {}",
        if config.preview.invert { "yes" } else { "no" }
    );
    println!("  JPEG quality: {}", config.capture.quality);
    println!(
        "  Output directory: {}",
        config
            .capture
            .output
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ".".to_string())
    );
    println!(
        "  Status bar: {}",
        if config.ui.status_bar { "yes" } else { "no" }
    );
    println!();

    if path.exists() {
        println!("Config file: {} (exists)", path.display());
    } else {
        println!("Config file: {} (not found)", path.display());
    }
}

fn init_config() {
    let path = config_path();

    if path.exists() {
        eprintln!("Config file already exists: {}", path.display());
        eprintln!("Use 'camsnap config show' to view current settings.");
        std::process::exit(1);
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating config directory: {}", e);
            std::process::exit(1);
        }
    }

    let default_config = r#"# camsnap configuration

[camera]
# Camera device index; omit to pick from the facing preference
# device = 0
# Facing preference: user, environment
facing = "user"
# Requested capture resolution
resolution = "1280x720"
# Mirror horizontally (selfie view)
mirror = true

[preview]
# Character set: standard, blocks, minimal
charset = "standard"
# Invert brightness (for light terminals)
invert = false

[capture]
# JPEG quality for captured stills (1-100)
quality = 90
# Directory captures are written to
# output = "~/Pictures"

[ui]
# Show status bar
status_bar = true
"#;

    if let Err(e) = std::fs::write(&path, default_config) {
        eprintln!("Error writing config file: {}", e);
        std::process::exit(1);
    }

    println!("Created config file: {}", path.display());
}
