//! CLI enum types for facing, charset, and panel size options.

use clap::ValueEnum;

use crate::ascii;
use crate::camera;
use crate::terminal::PanelSize;

/// Camera facing preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Facing {
    #[default]
    User,
    Environment,
}

impl From<Facing> for camera::Facing {
    fn from(f: Facing) -> Self {
        match f {
            Facing::User => camera::Facing::User,
            Facing::Environment => camera::Facing::Environment,
        }
    }
}

/// Preview character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Standard,
    Blocks,
    Minimal,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
            CharacterSet::Minimal => ascii::CharSet::Minimal,
        }
    }
}

/// Capture panel size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl From<Size> for PanelSize {
    fn from(s: Size) -> Self {
        match s {
            Size::Small => PanelSize::Small,
            Size::Medium => PanelSize::Medium,
            Size::Large => PanelSize::Large,
        }
    }
}
