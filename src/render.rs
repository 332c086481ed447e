use std::fs;

use crate::config::SiteConfig;
use crate::gallery::GalleryGrid;

/// Page template consumed from the website directory. The gallery
/// container is the `{{gallery_grid}}` placeholder.
pub const TEMPLATE_PATH: &str = "website/templates/index.html";

/// Built-in page used when the template file is missing or unreadable.
const DEFAULT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="vi">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{site_title}}</title>
<link rel="stylesheet" href="/static/css/style.css">
</head>
<body id="top">
<nav class="navbar" id="navbar">
  <a class="nav-brand" href="/">{{site_title}}</a>
  <ul class="nav-menu" id="navMenu">
    <li><a class="nav-link" href="#gallery">Thư viện ảnh</a></li>
    <li><a class="nav-link" href="#contact">Liên hệ</a></li>
  </ul>
</nav>
<header class="hero reveal">
  <h1>{{site_title}}</h1>
  <p>{{site_tagline}}</p>
</header>
<section class="gallery" id="gallery">
  <h2>Thư viện ảnh</h2>
  <div class="gallery-grid" id="galleryGrid">
{{gallery_grid}}
  </div>
</section>
<section class="contact" id="contact">
  <h2>Liên hệ</h2>
  <p class="contact-phone">{{contact_phone}}</p>
  <p class="contact-address">{{contact_address}}</p>
</section>
<footer class="footer">
  <div class="footer-bottom"><p>&copy; {{current_year}} {{site_title}}</p></div>
  <a class="scroll-top" href="#top">↑</a>
</footer>
</body>
</html>
"##;

/// Render the brochure page from the on-disk template (or the built-in
/// default). `zoom` is the current gallery zoom selection.
pub fn render_page(config: &SiteConfig, grid: &GalleryGrid, zoom: Option<usize>) -> String {
    render_template(&load_template(), config, grid, zoom)
}

/// Placeholder substitution over a template body. The gallery fragment is
/// spliced in last, after the placeholder pass, so tile text is never
/// rewritten by it.
pub fn render_template(
    template: &str,
    config: &SiteConfig,
    grid: &GalleryGrid,
    zoom: Option<usize>,
) -> String {
    let mut html = template.to_string();

    html = html.replace("{{site_title}}", &html_escape(&config.site.name));
    html = html.replace("{{site_tagline}}", &html_escape(&config.site.tagline));
    html = html.replace("{{contact_phone}}", &html_escape(&config.site.phone));
    html = html.replace("{{contact_address}}", &html_escape(&config.site.address));
    html = html.replace(
        "{{current_year}}",
        &chrono::Utc::now().format("%Y").to_string(),
    );

    let parts: Vec<String> = html
        .split("{{gallery_grid}}")
        .map(strip_unreplaced_placeholders)
        .collect();

    if parts.len() == 1 {
        // Host page carries no gallery container. Logged, not surfaced.
        log::error!("Gallery grid placeholder not found in page template");
        return parts.into_iter().next().unwrap_or_default();
    }

    parts.join(&grid.render(zoom))
}

fn load_template() -> String {
    match fs::read_to_string(TEMPLATE_PATH) {
        Ok(template) => template,
        Err(e) => {
            log::warn!(
                "Failed to read {}: {} — using built-in template",
                TEMPLATE_PATH,
                e
            );
            DEFAULT_TEMPLATE.to_string()
        }
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Remove any remaining {{placeholder}} tags from rendered HTML.
/// Simple scan on char boundaries so multibyte text passes through
/// untouched.
fn strip_unreplaced_placeholders(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("{{") {
        if let Some(end) = rest[start + 2..].find("}}") {
            let tag = &rest[start + 2..start + 2 + end];
            // Only strip if it looks like a valid placeholder (lowercase + underscores)
            if !tag.is_empty() && tag.bytes().all(|b| b.is_ascii_lowercase() || b == b'_') {
                result.push_str(&rest[..start]);
                rest = &rest[start + 2 + end + 2..];
                continue;
            }
        }
        result.push_str(&rest[..start + 2]);
        rest = &rest[start + 2..];
    }
    result.push_str(rest);
    result
}
