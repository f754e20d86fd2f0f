//! Value-to-token synthesis.
//!
//! Turns raw numbers and colors into utility class fragments: a table hit
//! yields the token name, a miss yields an arbitrary-value escape. Zero
//! yields nothing so callers can push results unconditionally.

use crate::scene::Rgba;
use crate::session::StyleOverrides;
use crate::tokens::{Scale, TokenTables};

// =============================================================================
// Inputs
// =============================================================================

/// Token category; selects the table a number is looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Spacing,
    Text,
    Weight,
    Radius,
    Color,
    /// No table: the magnitude passes through.
    Border,
    /// No table: the magnitude passes through.
    Rotate,
}

impl Category {
    fn scale(self) -> Option<Scale> {
        match self {
            Category::Spacing => Some(Scale::Spacing),
            Category::Text => Some(Scale::FontSize),
            Category::Weight => Some(Scale::FontWeight),
            Category::Radius => Some(Scale::Radius),
            Category::Color | Category::Border | Category::Rotate => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    Number(f64),
    Color(Rgba),
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        TokenValue::Number(value)
    }
}

impl From<Rgba> for TokenValue {
    fn from(color: Rgba) -> Self {
        TokenValue::Color(color)
    }
}

// =============================================================================
// Formatting helpers
// =============================================================================

/// Shortest round-trip decimal form of the literal value: `200`, `1.5`, `-17.125`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Class-safe form of a variable name: `brand/primary 500` → `brand-primary-500`.
pub fn variable_token(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| if c == '/' || c.is_whitespace() { '-' } else { c })
        .collect()
}

// =============================================================================
// Synthesizer
// =============================================================================

/// Token synthesis over the default tables and the user overrides.
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer<'a> {
    tokens: &'a TokenTables,
    styles: &'a StyleOverrides,
}

impl<'a> Synthesizer<'a> {
    pub fn new(tokens: &'a TokenTables, styles: &'a StyleOverrides) -> Self {
        Self { tokens, styles }
    }

    /// Synthesize a class fragment for a number or a color.
    pub fn synthesize(
        &self,
        value: impl Into<TokenValue>,
        category: Category,
        prefix: Option<&str>,
    ) -> String {
        match value.into() {
            TokenValue::Number(number) => self.number(number, category, prefix),
            TokenValue::Color(color) => self.color(color, None, prefix),
        }
    }

    /// Numeric synthesis.
    ///
    /// The table is probed with the absolute value. A negative hit gets a
    /// leading `-` only when a prefix is present; a miss keeps the signed value.
    pub fn number(&self, value: f64, category: Category, prefix: Option<&str>) -> String {
        if value == 0.0 {
            return String::new();
        }
        let negative = value < 0.0;
        let sign = if negative { "-" } else { "" };
        let magnitude = value.abs();

        let Some(scale) = category.scale() else {
            return match prefix {
                Some(prefix) => format!("{sign}{prefix}-{}", format_number(magnitude)),
                None => format_number(value),
            };
        };

        match (self.tokens.scale(scale).get(magnitude), prefix) {
            (Some(token), Some(prefix)) => format!("{sign}{prefix}-{token}"),
            (Some(token), None) => token.to_string(),
            (None, Some(prefix)) => {
                format!("{prefix}-[{}px]", format_number(value))
            }
            (None, None) => format_number(value),
        }
    }

    /// Name of an opaque hex: imported palette, custom styles, default table.
    pub fn color_name(&self, hex: &str) -> Option<&'a str> {
        self.styles
            .lookup(hex)
            .or_else(|| self.tokens.colors.get(hex))
    }

    /// Color synthesis.
    ///
    /// `variable` is the name of a bound design variable and wins over every
    /// table. Named results carry alpha as a `/NN` modifier; unnamed results
    /// carry it in the 8-digit hex.
    pub fn color(&self, color: Rgba, variable: Option<&str>, prefix: Option<&str>) -> String {
        let name = match variable {
            Some(variable) => Some(variable_token(variable)),
            None => self.color_name(&color.opaque_hex()).map(str::to_string),
        };

        match name {
            Some(name) => {
                let mut class = match prefix {
                    Some(prefix) => format!("{prefix}-{name}"),
                    None => name,
                };
                if color.is_translucent() {
                    class.push_str(&format!("/{}", color.alpha_percent()));
                }
                class
            }
            None => {
                let hex = color.to_hex();
                match prefix {
                    Some(prefix) => format!("{prefix}-[{hex}]"),
                    None => hex,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::ColorTable;

    fn synth_with<R>(styles: &StyleOverrides, f: impl FnOnce(Synthesizer<'_>) -> R) -> R {
        let tokens = TokenTables::default();
        f(Synthesizer::new(&tokens, styles))
    }

    fn synth<R>(f: impl FnOnce(Synthesizer<'_>) -> R) -> R {
        synth_with(&StyleOverrides::default(), f)
    }

    #[test]
    fn test_exact_match_and_miss() {
        synth(|s| {
            assert_eq!(s.number(16.0, Category::Spacing, Some("w")), "w-4");
            assert_eq!(s.number(200.0, Category::Spacing, Some("w")), "w-[200px]");
            assert_eq!(s.number(13.5, Category::Spacing, Some("gap")), "gap-[13.5px]");
            assert_eq!(s.number(24.0, Category::Text, Some("text")), "text-2xl");
            assert_eq!(s.number(13.0, Category::Text, Some("text")), "text-[13px]");
            assert_eq!(s.number(600.0, Category::Weight, Some("font")), "font-semibold");
            assert_eq!(s.number(450.0, Category::Weight, Some("font")), "font-[450px]");
            assert_eq!(s.number(8.0, Category::Radius, Some("rounded")), "rounded-lg");
        });
    }

    #[test]
    fn test_every_table_key_hits() {
        let tokens = TokenTables::default();
        let styles = StyleOverrides::default();
        let s = Synthesizer::new(&tokens, &styles);
        for value in [1.0, 2.0, 4.0, 6.0, 10.0, 14.0, 64.0, 256.0, 384.0] {
            let class = s.number(value, Category::Spacing, Some("p"));
            assert!(!class.contains('['), "{value} should hit: {class}");
        }
        for value in [3.0, 5.0, 200.0, 1000.0, 0.5] {
            let class = s.number(value, Category::Spacing, Some("p"));
            assert_eq!(class, format!("p-[{}px]", format_number(value)));
        }
    }

    #[test]
    fn test_zero_is_empty() {
        synth(|s| {
            for category in [
                Category::Spacing,
                Category::Text,
                Category::Weight,
                Category::Radius,
                Category::Color,
                Category::Border,
                Category::Rotate,
            ] {
                assert_eq!(s.number(0.0, category, Some("x")), "");
                assert_eq!(s.number(0.0, category, None), "");
                assert_eq!(s.number(-0.0, category, Some("x")), "");
            }
        });
    }

    #[test]
    fn test_sign_handling() {
        synth(|s| {
            assert_eq!(s.number(-16.0, Category::Spacing, Some("w")), "-w-4");
            assert_eq!(s.number(-16.0, Category::Spacing, None), "4");
            assert_eq!(s.number(-17.0, Category::Spacing, None), "-17");
            assert_eq!(s.number(-17.0, Category::Spacing, Some("left")), "left-[-17px]");
            assert_eq!(s.number(-45.0, Category::Rotate, Some("rotate")), "-rotate-45");
            assert_eq!(s.number(2.0, Category::Border, Some("border")), "border-2");
            assert_eq!(s.number(-3.0, Category::Border, None), "-3");
        });
    }

    #[test]
    fn test_miss_keeps_literal_value() {
        synth(|s| {
            assert_eq!(s.number(-17.125, Category::Spacing, None), "-17.125");
            assert_eq!(s.number(13.333, Category::Spacing, Some("w")), "w-[13.333px]");
            assert_eq!(s.number(0.004, Category::Spacing, Some("w")), "w-[0.004px]");
            assert_eq!(s.number(-2.75, Category::Spacing, Some("top")), "top-[-2.75px]");
            assert_eq!(s.number(450.5, Category::Weight, Some("font")), "font-[450.5px]");
        });
    }

    #[test]
    fn test_color_priority_cascade() {
        let red = Rgba::from_u8(239, 68, 68);
        let mut styles = StyleOverrides {
            palette: Some(ColorTable::from_pairs([("#ef4444", "imported")])),
            custom: ColorTable::from_pairs([("#ef4444", "custom")]),
        };

        synth_with(&styles, |s| {
            assert_eq!(s.color(red, Some("brand/danger"), Some("bg")), "bg-brand-danger");
            assert_eq!(s.color(red, None, Some("bg")), "bg-imported");
        });

        styles.palette = None;
        synth_with(&styles, |s| assert_eq!(s.color(red, None, Some("bg")), "bg-custom"));

        styles.custom = ColorTable::new();
        synth_with(&styles, |s| assert_eq!(s.color(red, None, Some("bg")), "bg-red-500"));

        let odd = Rgba::from_u8(1, 2, 3);
        synth_with(&styles, |s| {
            assert_eq!(s.color(odd, None, Some("bg")), "bg-[#010203]");
            assert_eq!(s.color(odd, None, None), "#010203");
        });
    }

    #[test]
    fn test_color_alpha() {
        synth(|s| {
            let red = Rgba::from_u8(239, 68, 68).with_alpha(0.5);
            assert_eq!(s.color(red, None, Some("text")), "text-red-500/50");

            let odd = Rgba::from_u8(1, 2, 3).with_alpha(0.25);
            // round(0.25 * 255) = 64 = 0x40
            assert_eq!(s.color(odd, None, Some("bg")), "bg-[#01020340]");
            assert_eq!(s.synthesize(odd, Category::Color, None), "#01020340");
        });
    }

    #[test]
    fn test_helpers() {
        assert_eq!(format_number(200.0), "200");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(33.333333), "33.333333");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(variable_token("brand/primary 500"), "brand-primary-500");
    }
}
