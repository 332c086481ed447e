use std::io::Cursor;
use std::sync::OnceLock;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;
use regex::Regex;

use super::record::ImageRecord;

/// Field length caps, in characters. Oversized values are truncated,
/// never rejected — every record maps to a tile.
const MAX_CATEGORY: usize = 50;
const MAX_DESCRIPTION: usize = 200;
const MAX_TITLE: usize = 100;
const MAX_EMOJI: usize = 10;

/// Fallback colors substituted when a supplied value fails validation.
pub const FALLBACK_BACKGROUND: &str = "#e8f5e9";
pub const FALLBACK_CIRCLE: &str = "#66bb6a";
pub const FALLBACK_TEXT: &str = "#2e7d32";

static HEX_COLOR: OnceLock<Regex> = OnceLock::new();

/// Strict hex color check: `#` followed by exactly six hex digits.
pub fn is_valid_color(value: &str) -> bool {
    let pattern = HEX_COLOR
        .get_or_init(|| Regex::new("^#[0-9A-Fa-f]{6}$").expect("hex color pattern compiles"));
    pattern.is_match(value)
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

fn color_or(value: &str, fallback: &str) -> String {
    if is_valid_color(value) {
        value.to_string()
    } else {
        fallback.to_string()
    }
}

/// One sanitized gallery tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub category: String,
    pub description: String,
    pub title: String,
    pub emoji: String,
    pub background_color: String,
    pub circle_color: String,
    pub text_color: String,
}

impl Tile {
    /// Sanitize one untrusted record. Total: truncation and fallback
    /// substitution cover every malformed field, so this never fails.
    pub fn build(record: &ImageRecord) -> Tile {
        Tile {
            category: truncate_chars(&record.category, MAX_CATEGORY),
            description: truncate_chars(&record.description, MAX_DESCRIPTION),
            title: truncate_chars(&record.title, MAX_TITLE),
            emoji: truncate_chars(&record.emoji, MAX_EMOJI),
            background_color: color_or(&record.background_color, FALLBACK_BACKGROUND),
            circle_color: color_or(&record.circle_color, FALLBACK_CIRCLE),
            text_color: color_or(&record.text_color, FALLBACK_TEXT),
        }
    }

    /// Render the tile markup. `index` is the tile's position in the grid;
    /// a zoomed tile links back to the plain page, every other tile links
    /// to its own zoom selection.
    ///
    /// Construction goes through the quick-xml event writer — attribute
    /// values and text nodes are escaped on write, so no record field is
    /// ever parsed as markup.
    pub fn render(&self, index: usize, zoomed: bool) -> String {
        self.write_markup(index, zoomed).unwrap_or_default()
    }

    fn write_markup(&self, index: usize, zoomed: bool) -> Option<String> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        let class = if zoomed {
            "gallery-item reveal zoomed"
        } else {
            "gallery-item reveal"
        };
        let href = if zoomed {
            "/#gallery".to_string()
        } else {
            format!("/?zoom={}#gallery", index)
        };

        let mut item = BytesStart::new("a");
        item.push_attribute(("class", class));
        item.push_attribute(("href", href.as_str()));
        item.push_attribute(("data-category", self.category.as_str()));
        item.push_attribute(("title", self.description.as_str()));
        writer.write_event(Event::Start(item)).ok()?;

        let mut svg = BytesStart::new("svg");
        svg.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
        svg.push_attribute(("viewBox", "0 0 400 300"));
        writer.write_event(Event::Start(svg)).ok()?;

        let mut rect = BytesStart::new("rect");
        rect.push_attribute(("width", "400"));
        rect.push_attribute(("height", "300"));
        rect.push_attribute(("fill", self.background_color.as_str()));
        writer.write_event(Event::Empty(rect)).ok()?;

        let mut circle = BytesStart::new("circle");
        circle.push_attribute(("cx", "200"));
        circle.push_attribute(("cy", "150"));
        circle.push_attribute(("r", "60"));
        circle.push_attribute(("fill", self.circle_color.as_str()));
        writer.write_event(Event::Empty(circle)).ok()?;

        let mut emoji = BytesStart::new("text");
        emoji.push_attribute(("x", "200"));
        emoji.push_attribute(("y", "170"));
        emoji.push_attribute(("font-size", "50"));
        emoji.push_attribute(("text-anchor", "middle"));
        writer.write_event(Event::Start(emoji)).ok()?;
        writer
            .write_event(Event::Text(BytesText::new(&self.emoji)))
            .ok()?;
        writer.write_event(Event::End(BytesEnd::new("text"))).ok()?;

        let mut title = BytesStart::new("text");
        title.push_attribute(("x", "200"));
        title.push_attribute(("y", "260"));
        title.push_attribute(("font-size", "16"));
        title.push_attribute(("text-anchor", "middle"));
        title.push_attribute(("fill", self.text_color.as_str()));
        writer.write_event(Event::Start(title)).ok()?;
        writer
            .write_event(Event::Text(BytesText::new(&self.title)))
            .ok()?;
        writer.write_event(Event::End(BytesEnd::new("text"))).ok()?;

        writer.write_event(Event::End(BytesEnd::new("svg"))).ok()?;
        writer.write_event(Event::End(BytesEnd::new("a"))).ok()?;

        String::from_utf8(writer.into_inner().into_inner()).ok()
    }
}
