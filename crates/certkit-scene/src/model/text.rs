//! Text styling attributes for text nodes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

/// Font attributes of a text node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub underline: bool,
    pub letter_spacing: f64,
    pub line_height: f64,
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            font_size: 24.0,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            underline: false,
            letter_spacing: 0.0,
            line_height: 1.16,
            align: TextAlign::Left,
        }
    }
}

/// Rough extent of a text block in canvas units.
///
/// Real metrics come from the text collaborator via `set_property`; this
/// estimate only keeps bounds sane until the first measurement arrives.
pub fn estimate_extent(content: &str, style: &TextStyle) -> (f64, f64) {
    let longest = content.lines().map(str::len).max().unwrap_or(0);
    let lines = content.lines().count().max(1);
    let width = longest as f64 * (style.font_size * 0.6 + style.letter_spacing);
    let height = lines as f64 * style.font_size * style.line_height;
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_extent_multiline() {
        let style = TextStyle {
            font_size: 10.0,
            line_height: 1.0,
            ..TextStyle::default()
        };
        let (w, h) = estimate_extent("ab\nabcd", &style);
        assert_eq!(w, 24.0);
        assert_eq!(h, 20.0);
    }

    #[test]
    fn test_estimate_extent_empty() {
        let style = TextStyle::default();
        let (w, h) = estimate_extent("", &style);
        assert_eq!(w, 0.0);
        assert!(h > 0.0);
    }
}
