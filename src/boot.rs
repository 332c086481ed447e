use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::config::SiteConfig;

/// Required directories that will be created if missing
const REQUIRED_DIRS: &[&str] = &[
    "website",
    "website/static",
    "website/static/css",
    "website/static/js",
    "website/content",
    "website/templates",
];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories, warns about missing files, and
/// aborts if the site directory cannot be set up.
pub fn run(config: &SiteConfig) {
    info!("Boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    for dir in REQUIRED_DIRS {
        let path = Path::new(dir);
        if !path.exists() {
            match fs::create_dir_all(path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir, e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Page template ───────────────────────────────
    if !Path::new(crate::render::TEMPLATE_PATH).exists() {
        warn!(
            "  Missing page template: {} (using built-in default)",
            crate::render::TEMPLATE_PATH
        );
        warnings += 1;
    }

    // ── 3. Gallery data file ───────────────────────────
    // Local sources only — remote sources are checked at request time.
    let gallery_source = config.gallery.source.trim();
    if !gallery_source.starts_with("http://")
        && !gallery_source.starts_with("https://")
        && !Path::new(gallery_source).exists()
    {
        warn!(
            "  Missing gallery data file: {} (gallery will show the error message)",
            gallery_source
        );
        warnings += 1;
    }

    // ── 4. Config files ────────────────────────────────
    if !Path::new(crate::config::CONFIG_PATH).exists() {
        warn!(
            "  {} not found — using default site config",
            crate::config::CONFIG_PATH
        );
        warnings += 1;
    }

    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found — using default config");
        warnings += 1;
    }

    // ── Summary ─────────────────────────────────────────
    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some features may not work correctly.",
            warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}
