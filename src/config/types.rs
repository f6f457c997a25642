// Configuration type definitions

use std::collections::HashMap;

use serde::Deserialize;

use crate::toast::OverlayPlacement;

pub const DEFAULT_BANNER_WIDTH: u16 = 40;

/// Inner toast width, configured separately from the outer banner width.
pub const DEFAULT_TOAST_WIDTH: u16 = 156;

/// Banner configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct BannerConfig {
    #[serde(default = "default_banner_width")]
    pub width: u16,
    #[serde(default = "default_toast_width")]
    pub toast_width: u16,
    #[serde(default)]
    pub placement: OverlayPlacement,
}

fn default_banner_width() -> u16 {
    DEFAULT_BANNER_WIDTH
}

fn default_toast_width() -> u16 {
    DEFAULT_TOAST_WIDTH
}

impl Default for BannerConfig {
    fn default() -> Self {
        BannerConfig {
            width: DEFAULT_BANNER_WIDTH,
            toast_width: DEFAULT_TOAST_WIDTH,
            placement: OverlayPlacement::Top,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub banner: BannerConfig,
    /// Message text overrides keyed by message id
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
