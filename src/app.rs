//! The embedding application around the capture widget.
//!
//! Owns the event loop: polls keyboard input, refreshes the preview from
//! the live feed, and draws. It also plays the part of the embedding
//! context from the widget's point of view: its capture callback writes
//! stills to the output directory, and its close callback ends the loop.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};

use crate::ascii::{self, CharSet};
use crate::camera::{
    CameraAccess, CameraSettings, CaptureRequest, NativeAccess, SyntheticAccess,
};
use crate::cli::Args;
use crate::component::CameraCapture;
use crate::config::Config;
use crate::input::{handle_key_event, KeyAction};
use crate::snapshot::CapturedImage;
use crate::terminal::{rendering, AsciiFrame, CapturePanel, PanelSize, StatusBar, Tui};

/// Poll timeout between draws (~30 fps tick).
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// How long a status notice stays up.
const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub request: CaptureRequest,
    pub camera: CameraSettings,
    pub charset: CharSet,
    pub invert: bool,
    pub jpeg_quality: u8,
    pub output_dir: PathBuf,
    pub panel_size: PanelSize,
    pub status_bar: bool,
    pub test_pattern: bool,
}

impl AppSettings {
    /// Merge CLI arguments over config file values over defaults.
    pub fn from_sources(args: &Args, config: &Config) -> Self {
        let facing = args
            .facing
            .map(Into::into)
            .or_else(|| config.facing())
            .unwrap_or_default();
        let resolution = args
            .resolution
            .or_else(|| config.resolution())
            .unwrap_or_default();

        let request = CaptureRequest { resolution, facing };

        let camera = CameraSettings {
            device_index: args.camera.or(config.camera.device),
            resolution,
            fps: 30,
            mirror: !args.no_mirror && config.camera.mirror,
        };

        Self {
            request,
            camera,
            charset: args
                .charset
                .map(Into::into)
                .or_else(|| config.charset())
                .unwrap_or_default(),
            invert: args.invert || config.preview.invert,
            jpeg_quality: args.quality.unwrap_or(config.capture.quality),
            output_dir: args
                .output
                .clone()
                .or_else(|| config.capture.output.clone())
                .unwrap_or_else(|| PathBuf::from(".")),
            panel_size: args.size.into(),
            status_bar: !args.no_status && config.ui.status_bar,
            test_pattern: args.test_pattern,
        }
    }
}

/// Signals the widget callbacks raise for the event loop.
#[derive(Default)]
struct Signals {
    /// Close requested (cancel while inactive)
    quit: bool,
    /// Transient status notice with the time it was raised
    notice: Option<(String, Instant)>,
}

/// Write a captured still to the output directory.
///
/// Files are named `capture-NNNN.jpg` with the first free sequence number.
pub fn save_capture(dir: &Path, image: &CapturedImage) -> io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    for seq in 1u32.. {
        let path = dir.join(format!("capture-{:04}.jpg", seq));
        if !path.exists() {
            std::fs::write(&path, image.as_bytes())?;
            return Ok(path);
        }
    }
    unreachable!("sequence space exhausted");
}

/// Build the widget wired to the embedding callbacks.
fn build_widget(settings: &AppSettings, signals: &Rc<RefCell<Signals>>) -> CameraCapture {
    let access: Box<dyn CameraAccess> = if settings.test_pattern {
        Box::new(SyntheticAccess::new())
    } else {
        Box::new(NativeAccess::new(settings.camera.clone()))
    };

    let output_dir = settings.output_dir.clone();
    let capture_signals = Rc::clone(signals);
    let close_signals = Rc::clone(signals);

    CameraCapture::new(access, settings.request)
        .with_jpeg_quality(settings.jpeg_quality)
        .on_capture(move |image| {
            let text = match save_capture(&output_dir, &image) {
                Ok(path) => format!("saved {}", path.display()),
                Err(e) => format!("save failed: {}", e),
            };
            capture_signals.borrow_mut().notice = Some((text, Instant::now()));
        })
        .on_close(move || {
            close_signals.borrow_mut().quit = true;
        })
}

/// Run the application until the user cancels or quits.
pub fn run(settings: AppSettings) -> io::Result<()> {
    let signals = Rc::new(RefCell::new(Signals::default()));
    let mut widget = build_widget(&settings, &signals);

    let mut panel = CapturePanel::new();
    panel.size = settings.panel_size;
    let status_bar = StatusBar::with_visibility(settings.status_bar);
    let mut charset = settings.charset;

    let mut tui = Tui::new()?;
    let mut running = true;

    while running {
        // Input: transitions happen only on discrete key events
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => match handle_key_event(key, widget.state()) {
                    KeyAction::Widget(action) => widget.handle(action),
                    KeyAction::CyclePanelSize => panel.cycle_size(),
                    KeyAction::CycleCharset => charset = charset.next(),
                    KeyAction::Quit => {
                        // External close trigger: release the device, leave
                        widget.close();
                        running = false;
                    }
                    KeyAction::None => {}
                },
                // Resize is picked up by the next draw
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if signals.borrow().quit {
            running = false;
        }

        // Preview refresh from the live feed
        if widget.shows_preview() {
            let (max_w, max_h) = panel.preview_dimensions();
            if let Some(frame) = widget.preview_frame() {
                let (chars, w, h) =
                    ascii::render_frame(&frame, max_w, max_h, charset, settings.invert);
                panel.set_frame(AsciiFrame::from_chars(chars, w, h));
            }
        } else {
            panel.clear_frame();
        }

        let notice = {
            let mut signals = signals.borrow_mut();
            match &signals.notice {
                Some((text, raised)) if raised.elapsed() < NOTICE_DURATION => Some(text.clone()),
                Some(_) => {
                    signals.notice = None;
                    None
                }
                None => None,
            }
        };

        let state = widget.state();
        tui.terminal().draw(|frame| {
            let area = frame.area();
            rendering::render_app(
                frame,
                &panel,
                state,
                charset,
                Some(&status_bar),
                notice.as_deref(),
                area,
            );
        })?;
    }

    tui.restore()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Facing, Resolution};
    use clap::Parser;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(args)
    }

    #[test]
    fn test_settings_defaults() {
        let settings = AppSettings::from_sources(&parse(&["camsnap"]), &Config::default());

        assert_eq!(settings.request.resolution, Resolution::HD);
        assert_eq!(settings.request.facing, Facing::User);
        assert!(settings.camera.device_index.is_none());
        assert!(settings.camera.mirror);
        assert_eq!(settings.charset, CharSet::Standard);
        assert!(!settings.invert);
        assert_eq!(settings.jpeg_quality, 90);
        assert_eq!(settings.output_dir, PathBuf::from("."));
        assert_eq!(settings.panel_size, PanelSize::Medium);
        assert!(settings.status_bar);
        assert!(!settings.test_pattern);
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = Config::default();
        config.camera.device = Some(1);
        config.camera.facing = Some("environment".to_string());
        config.capture.quality = 60;

        let args = parse(&["camsnap", "--camera", "3", "--facing", "user", "--quality", "95"]);
        let settings = AppSettings::from_sources(&args, &config);

        assert_eq!(settings.camera.device_index, Some(3));
        assert_eq!(settings.request.facing, Facing::User);
        assert_eq!(settings.jpeg_quality, 95);
    }

    #[test]
    fn test_config_fills_gaps() {
        let mut config = Config::default();
        config.camera.device = Some(2);
        config.camera.resolution = Some("640x480".to_string());
        config.preview.charset = Some("blocks".to_string());
        config.ui.status_bar = false;

        let settings = AppSettings::from_sources(&parse(&["camsnap"]), &config);

        assert_eq!(settings.camera.device_index, Some(2));
        assert_eq!(settings.request.resolution, Resolution::VGA);
        assert_eq!(settings.charset, CharSet::Blocks);
        assert!(!settings.status_bar);
    }

    #[test]
    fn test_no_mirror_flag_wins() {
        let settings =
            AppSettings::from_sources(&parse(&["camsnap", "--no-mirror"]), &Config::default());
        assert!(!settings.camera.mirror);
    }

    #[test]
    fn test_save_capture_sequences_files() {
        use crate::camera::{Frame, FrameFormat};
        use crate::snapshot::encode_jpeg;
        use std::time::Instant;

        let dir = tempfile::tempdir().unwrap();
        let frame = Frame {
            data: vec![128; 8 * 8 * 3],
            width: 8,
            height: 8,
            format: FrameFormat::Rgb,
            timestamp: Instant::now(),
        };
        let image = encode_jpeg(&frame, 80).unwrap();

        let first = save_capture(dir.path(), &image).unwrap();
        let second = save_capture(dir.path(), &image).unwrap();

        assert!(first.ends_with("capture-0001.jpg"));
        assert!(second.ends_with("capture-0002.jpg"));
        assert!(first.exists());
        assert!(second.exists());
        assert_eq!(std::fs::read(&first).unwrap(), image.as_bytes());
    }

    #[test]
    fn test_save_capture_creates_directory() {
        use crate::camera::{Frame, FrameFormat};
        use crate::snapshot::encode_jpeg;
        use std::time::Instant;

        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("shots/today");
        let frame = Frame {
            data: vec![10; 4 * 4 * 3],
            width: 4,
            height: 4,
            format: FrameFormat::Rgb,
            timestamp: Instant::now(),
        };
        let image = encode_jpeg(&frame, 80).unwrap();

        let path = save_capture(&nested, &image).unwrap();
        assert!(path.exists());
    }
}
