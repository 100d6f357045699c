//! Theme components for the TUI.
//!
//! This module provides:
//! - [`Theme`] - Color palette (dark / high contrast)
//! - [`IconSet`] - Icons with Nerd/Unicode/ASCII modes
//! - [`BorderSet`] - Border characters with Unicode/ASCII fallback

mod borders;
mod colors;
mod icons;

pub use borders::BorderSet;
pub use colors::Theme;
pub use icons::{IconMode, IconSet};

use charla_core::{IconPreference, ThemeName};

impl From<ThemeName> for Theme {
    fn from(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }
}

impl From<IconPreference> for IconMode {
    fn from(pref: IconPreference) -> Self {
        match pref {
            IconPreference::Nerd => Self::Nerd,
            IconPreference::Unicode => Self::Unicode,
            IconPreference::Ascii => Self::Ascii,
        }
    }
}
