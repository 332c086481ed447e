use serde_json::Value;

/// One untrusted image description, exactly as supplied by the gallery
/// document. Extraction is lenient: a missing or non-string field becomes
/// the empty string, and a non-object entry yields an all-default record.
/// Sanitization happens in [`crate::gallery::tile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRecord {
    pub category: String,
    pub description: String,
    pub title: String,
    pub emoji: String,
    pub background_color: String,
    pub circle_color: String,
    pub text_color: String,
}

impl ImageRecord {
    pub fn from_value(value: &Value) -> ImageRecord {
        let field = |key: &str| -> String {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        ImageRecord {
            category: field("category"),
            description: field("description"),
            title: field("title"),
            emoji: field("emoji"),
            background_color: field("backgroundColor"),
            circle_color: field("circleColor"),
            text_color: field("textColor"),
        }
    }
}
