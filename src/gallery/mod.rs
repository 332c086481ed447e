use std::io::Cursor;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;
use serde_json::Value;

pub mod record;
pub mod source;
pub mod tile;

use record::ImageRecord;
use source::GallerySource;
use tile::Tile;

/// Shown in place of the gallery when the document cannot be loaded.
/// Fixed text — the underlying cause only goes to the log.
pub const GALLERY_ERROR_MESSAGE: &str =
    "Không thể tải thư viện hình ảnh. Vui lòng thử lại sau.";

/// Content of the gallery container after one load: every tile from the
/// document, in document order, or the single error message. Each call to
/// [`load`] builds a fresh grid, so rendering a new one replaces everything
/// from the previous load.
pub struct GalleryGrid {
    tiles: Vec<Tile>,
    available: bool,
}

/// Load the gallery. All-or-nothing at the document level: a fetch error,
/// unparseable body, or missing `images` array fails the whole load.
/// Individual records never fail — see [`Tile::build`].
pub fn load(source: &dyn GallerySource) -> GalleryGrid {
    let body = match source.fetch() {
        Ok(body) => body,
        Err(e) => {
            log::error!("Error loading gallery from {}: {}", source.describe(), e);
            return GalleryGrid::unavailable();
        }
    };

    let document: Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(e) => {
            log::error!("Error parsing gallery document from {}: {}", source.describe(), e);
            return GalleryGrid::unavailable();
        }
    };

    let images = match document.get("images").and_then(|v| v.as_array()) {
        Some(images) => images,
        None => {
            log::error!("Gallery document from {} has no images array", source.describe());
            return GalleryGrid::unavailable();
        }
    };

    let tiles = images
        .iter()
        .map(|entry| Tile::build(&ImageRecord::from_value(entry)))
        .collect();

    GalleryGrid {
        tiles,
        available: true,
    }
}

impl GalleryGrid {
    fn unavailable() -> GalleryGrid {
        GalleryGrid {
            tiles: Vec::new(),
            available: false,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Render the full container content. `zoom` selects at most one tile
    /// to carry the zoomed state; selecting a new index clears every other.
    pub fn render(&self, zoom: Option<usize>) -> String {
        if !self.available {
            return write_error_node().unwrap_or_default();
        }

        let mut html = String::new();
        for (index, tile) in self.tiles.iter().enumerate() {
            html.push_str(&tile.render(index, zoom == Some(index)));
            html.push('\n');
        }
        html
    }
}

fn write_error_node() -> Option<String> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    let mut message = BytesStart::new("p");
    message.push_attribute(("class", "gallery-error-message"));
    writer.write_event(Event::Start(message)).ok()?;
    writer
        .write_event(Event::Text(BytesText::new(GALLERY_ERROR_MESSAGE)))
        .ok()?;
    writer.write_event(Event::End(BytesEnd::new("p"))).ok()?;

    String::from_utf8(writer.into_inner().into_inner()).ok()
}
