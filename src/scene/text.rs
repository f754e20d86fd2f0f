//! Styled text runs.

use super::paint::{Paint, Rgba};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }

    pub fn is_italic(&self) -> bool {
        self.style.to_lowercase().contains("italic")
    }
}

impl Default for FontName {
    fn default() -> Self {
        Self::new("Inter", "Regular")
    }
}

/// A length that may be automatic, absolute, or relative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Measure {
    #[default]
    Auto,
    Pixels(f64),
    Percent(f64),
}

impl Measure {
    /// `(value, unit suffix)`, or `None` for `Auto`.
    pub fn with_unit(&self) -> Option<(f64, &'static str)> {
        match *self {
            Measure::Auto => None,
            Measure::Pixels(v) => Some((v, "px")),
            Measure::Percent(v) => Some((v, "%")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextCase {
    #[default]
    Original,
    Upper,
    Lower,
    Title,
    SmallCaps,
    SmallCapsForced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
    Strikethrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecorationStyle {
    Solid,
    Wavy,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListStyle {
    #[default]
    None,
    Ordered,
    Unordered,
}

/// A maximal range of characters sharing the same typography.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRun {
    pub characters: String,
    pub font: FontName,
    pub font_size: f64,
    pub font_weight: f64,
    pub letter_spacing: Measure,
    pub line_height: Measure,
    pub text_case: TextCase,
    pub decoration: TextDecoration,
    /// `None` means the decoration follows the text color.
    pub decoration_color: Option<Rgba>,
    pub decoration_style: Option<DecorationStyle>,
    pub decoration_thickness: Measure,
    pub fills: Vec<Paint>,
    pub list_style: ListStyle,
    pub paragraph_indent: f64,
    pub hyperlink: Option<String>,
}

impl TextRun {
    pub fn new(characters: impl Into<String>) -> Self {
        Self {
            characters: characters.into(),
            font: FontName::default(),
            font_size: 16.0,
            font_weight: 400.0,
            letter_spacing: Measure::Pixels(0.0),
            line_height: Measure::Auto,
            text_case: TextCase::Original,
            decoration: TextDecoration::None,
            decoration_color: None,
            decoration_style: None,
            decoration_thickness: Measure::Auto,
            fills: Vec::new(),
            list_style: ListStyle::None,
            paragraph_indent: 0.0,
            hyperlink: None,
        }
    }

    pub fn font(mut self, font: FontName) -> Self {
        self.font = font;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.font_weight = weight;
        self
    }

    pub fn fill(mut self, paint: impl Into<Paint>) -> Self {
        self.fills.push(paint.into());
        self
    }

    pub fn link(mut self, href: impl Into<String>) -> Self {
        self.hyperlink = Some(href.into());
        self
    }
}
