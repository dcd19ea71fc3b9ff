use serde::{Deserialize, Serialize};

use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    #[must_use]
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn palette(self) -> &'static ThemePalette {
        match self {
            Self::Dark => &DARK_PALETTE,
            Self::Light => &LIGHT_PALETTE,
        }
    }
}

/// Colors used by every chart layer for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: Color,
    pub text: Color,
    pub grid: Color,
    pub line: Color,
    pub hover_marker: Color,
    pub stablecoin_line: Color,
}

pub const DARK_PALETTE: ThemePalette = ThemePalette {
    background: Color::from_rgb_u32(0x1e293b),
    text: Color::from_rgb_u32(0xe2e8f0),
    grid: Color::from_rgb_u32(0x475569),
    line: Color::from_rgb_u32(0x60a5fa),
    hover_marker: Color::from_rgb_u32(0x90cdf4),
    stablecoin_line: Color::from_rgb_u32(0x94a3b8),
};

pub const LIGHT_PALETTE: ThemePalette = ThemePalette {
    background: Color::from_rgb_u32(0xffffff),
    text: Color::from_rgb_u32(0x1a2a3a),
    grid: Color::from_rgb_u32(0xadb5be),
    line: Color::from_rgb_u32(0x2c5bdc),
    hover_marker: Color::from_rgb_u32(0x2563eb),
    stablecoin_line: Color::from_rgb_u32(0x64748b),
};
