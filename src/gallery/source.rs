use std::fs;
use std::sync::Arc;
use std::time::Duration;

use crate::config::SiteConfig;

/// Where the gallery JSON document comes from. One implementation per
/// backing: `FileSource` reads from the website content directory,
/// `HttpSource` fetches from a remote URL.
pub trait GallerySource: Send + Sync {
    /// Human-readable location, for diagnostics.
    fn describe(&self) -> String;

    /// Fetch the raw gallery document body.
    fn fetch(&self) -> Result<String, String>;
}

pub struct FileSource {
    path: String,
}

impl FileSource {
    pub fn new(path: &str) -> Self {
        FileSource {
            path: path.to_string(),
        }
    }
}

impl GallerySource for FileSource {
    fn describe(&self) -> String {
        self.path.clone()
    }

    fn fetch(&self) -> Result<String, String> {
        fs::read_to_string(&self.path).map_err(|e| format!("read {}: {}", self.path, e))
    }
}

pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: &str) -> Self {
        HttpSource {
            url: url.to_string(),
        }
    }
}

impl GallerySource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<String, String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| format!("HTTP client error: {}", e))?;

        let resp = client
            .get(&self.url)
            .send()
            .map_err(|e| format!("gallery request failed: {}", e))?;

        if !resp.status().is_success() {
            return Err(format!("gallery source returned {}", resp.status()));
        }

        resp.text()
            .map_err(|e| format!("gallery response body: {}", e))
    }
}

/// Pick the source implementation from the configured location: an
/// http(s) URL gets the HTTP client, anything else is a local path.
pub fn from_config(config: &SiteConfig) -> Arc<dyn GallerySource> {
    let location = config.gallery.source.trim();

    if location.starts_with("http://") || location.starts_with("https://") {
        match url::Url::parse(location) {
            Ok(_) => return Arc::new(HttpSource::new(location)),
            Err(e) => {
                log::error!("Invalid gallery source URL {}: {}", location, e);
            }
        }
    }

    Arc::new(FileSource::new(location))
}
