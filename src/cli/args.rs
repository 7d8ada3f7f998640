//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{CharacterSet, Facing, Size};
use crate::camera::Resolution;
use crate::config::parse_resolution;

/// Terminal camera-capture widget: live preview, JPEG stills
#[derive(Parser, Debug)]
#[command(name = "camsnap")]
#[command(version, about = "Capture camera stills from a terminal", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Camera device index (from list-cameras)
    #[arg(long)]
    pub camera: Option<u32>,

    /// Camera facing preference (best effort)
    #[arg(long, short)]
    pub facing: Option<Facing>,

    /// Requested capture resolution (WIDTHxHEIGHT)
    #[arg(long, value_parser = parse_resolution)]
    pub resolution: Option<Resolution>,

    /// Disable horizontal mirroring (selfie view)
    #[arg(long)]
    pub no_mirror: bool,

    /// Preview character set
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Invert preview brightness (for light terminals)
    #[arg(long)]
    pub invert: bool,

    /// JPEG quality for captured stills (1-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: Option<u8>,

    /// Directory captures are written to
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Capture panel size
    #[arg(long, default_value = "medium")]
    pub size: Size,

    /// Hide status bar
    #[arg(long)]
    pub no_status: bool,

    /// Use a synthetic test pattern instead of a real camera
    #[arg(long)]
    pub test_pattern: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available cameras
    ListCameras,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
