// Configuration type definitions

use std::num::NonZeroUsize;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://app.wewantwaste.co.uk";
pub const DEFAULT_POSTCODE: &str = "NR32";
pub const DEFAULT_AREA: &str = "Lowestoft";

/// Skips shown per page in the wide layout
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(9) {
    Some(size) => size,
    None => unreachable!(),
};

/// Terminal widths at or below this many columns use the scroll strip layout
pub const DEFAULT_NARROW_BREAKPOINT: u16 = 100;

/// Catalog endpoint configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_postcode")]
    pub postcode: String,
    #[serde(default = "default_area")]
    pub area: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_postcode() -> String {
    DEFAULT_POSTCODE.to_string()
}

fn default_area() -> String {
    DEFAULT_AREA.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            postcode: default_postcode(),
            area: default_area(),
        }
    }
}

/// Catalog presentation configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_page_size")]
    pub page_size: NonZeroUsize,
    #[serde(default = "default_narrow_breakpoint")]
    pub narrow_breakpoint: u16,
    #[serde(default)]
    pub edge_mask_threshold: u16,
}

fn default_page_size() -> NonZeroUsize {
    DEFAULT_PAGE_SIZE
}

fn default_narrow_breakpoint() -> u16 {
    DEFAULT_NARROW_BREAKPOINT
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            page_size: DEFAULT_PAGE_SIZE,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            edge_mask_threshold: 0,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
