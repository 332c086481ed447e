use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Site config file, read once at startup. Server-level settings
/// (address, port) live in Rocket.toml.
pub const CONFIG_PATH: &str = "site.toml";

/// Default location of the gallery data file, relative to the server root.
pub const DEFAULT_GALLERY_SOURCE: &str = "website/content/gallery.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub gallery: GallerySection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GallerySection {
    /// Local path or http(s) URL of the gallery JSON document.
    pub source: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site: SiteSection::default(),
            gallery: GallerySection::default(),
        }
    }
}

impl Default for SiteSection {
    fn default() -> Self {
        SiteSection {
            name: "Vườn Trái Cây Ông Sang".to_string(),
            tagline: "Trải nghiệm thiên nhiên miệt vườn đích thực".to_string(),
            phone: String::new(),
            address: String::new(),
        }
    }
}

impl Default for GallerySection {
    fn default() -> Self {
        GallerySection {
            source: DEFAULT_GALLERY_SOURCE.to_string(),
        }
    }
}

/// Parse a raw config document. Missing tables and fields fall back to
/// the defaults; a document that does not parse at all is reported and
/// replaced wholesale.
pub fn parse(raw: &str) -> SiteConfig {
    match toml::from_str(raw) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to parse site config: {}", e);
            SiteConfig::default()
        }
    }
}

/// Load the site config from disk, falling back to defaults when the
/// file is missing or unreadable.
pub fn load(path: &str) -> SiteConfig {
    if !Path::new(path).exists() {
        return SiteConfig::default();
    }

    match fs::read_to_string(path) {
        Ok(raw) => parse(&raw),
        Err(e) => {
            log::error!("Failed to read {}: {}", path, e);
            SiteConfig::default()
        }
    }
}
