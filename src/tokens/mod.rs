//! Design token tables.
//!
//! Exact-match mappings from pixel values and hex colors to token names.
//! There is no nearest-value snapping: a value that is not a key misses.

mod palette;

use compact_str::{CompactString, format_compact};
use rustc_hash::FxHashMap;

// =============================================================================
// Scale
// =============================================================================

/// Numeric token scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Spacing,
    FontSize,
    FontWeight,
    Radius,
}

/// Exact-match table from a numeric value to a token name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleTable {
    entries: FxHashMap<u64, CompactString>,
}

/// `-0.0` and `0.0` share a key.
fn numeric_key(value: f64) -> u64 {
    if value == 0.0 { 0.0f64.to_bits() } else { value.to_bits() }
}

impl ScaleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(f64, &str)]) -> Self {
        let mut table = Self::new();
        for &(value, name) in pairs {
            table.insert(value, name);
        }
        table
    }

    pub fn insert(&mut self, value: f64, name: &str) {
        self.entries.insert(numeric_key(value), CompactString::new(name));
    }

    pub fn get(&self, value: f64) -> Option<&str> {
        self.entries.get(&numeric_key(value)).map(CompactString::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// ColorTable
// =============================================================================

/// Exact-match table from `#rrggbb` to a color name.
///
/// Keys are normalized to lower case with a leading `#`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorTable {
    entries: FxHashMap<CompactString, CompactString>,
}

fn normalize_hex(hex: &str) -> CompactString {
    let hex = hex.trim().trim_start_matches('#');
    format_compact!("#{}", hex.to_ascii_lowercase())
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(hex, name)` pairs; the first occurrence of a hex wins.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut table = Self::new();
        for (hex, name) in pairs {
            table
                .entries
                .entry(normalize_hex(hex))
                .or_insert_with(|| CompactString::new(name));
        }
        table
    }

    /// Insert or replace a mapping.
    pub fn insert(&mut self, hex: &str, name: &str) {
        self.entries.insert(normalize_hex(hex), CompactString::new(name));
    }

    pub fn remove(&mut self, hex: &str) -> Option<CompactString> {
        self.entries.remove(&normalize_hex(hex))
    }

    pub fn get(&self, hex: &str) -> Option<&str> {
        self.entries.get(&normalize_hex(hex)).map(CompactString::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

// =============================================================================
// TokenTables
// =============================================================================

/// The immutable default token vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenTables {
    pub spacing: ScaleTable,
    pub font_size: ScaleTable,
    pub font_weight: ScaleTable,
    pub radius: ScaleTable,
    pub colors: ColorTable,
}

impl TokenTables {
    /// Tables with no entries: every lookup misses.
    pub fn empty() -> Self {
        Self {
            spacing: ScaleTable::new(),
            font_size: ScaleTable::new(),
            font_weight: ScaleTable::new(),
            radius: ScaleTable::new(),
            colors: ColorTable::new(),
        }
    }

    pub fn scale(&self, scale: Scale) -> &ScaleTable {
        match scale {
            Scale::Spacing => &self.spacing,
            Scale::FontSize => &self.font_size,
            Scale::FontWeight => &self.font_weight,
            Scale::Radius => &self.radius,
        }
    }
}

impl Default for TokenTables {
    /// The framework's default scales and palette.
    fn default() -> Self {
        let shaded = palette::FAMILIES.iter().flat_map(|(family, hexes)| {
            hexes
                .iter()
                .zip(palette::SHADES)
                .map(move |(hex, shade)| (*hex, format!("{family}-{shade}")))
        });
        let mut colors = ColorTable::from_pairs(palette::SINGLES.iter().copied());
        for (hex, name) in shaded {
            colors.entries.entry(normalize_hex(hex)).or_insert_with(|| CompactString::new(&name));
        }

        Self {
            spacing: ScaleTable::from_pairs(palette::SPACING),
            font_size: ScaleTable::from_pairs(palette::FONT_SIZE),
            font_weight: ScaleTable::from_pairs(palette::FONT_WEIGHT),
            radius: ScaleTable::from_pairs(palette::RADIUS),
            colors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_exact_match_only() {
        let tables = TokenTables::default();
        assert_eq!(tables.spacing.get(16.0), Some("4"));
        assert_eq!(tables.spacing.get(1.0), Some("px"));
        assert_eq!(tables.spacing.get(200.0), None);
        assert_eq!(tables.spacing.get(15.9), None);
        assert_eq!(tables.font_size.get(16.0), Some("base"));
        assert_eq!(tables.font_weight.get(700.0), Some("bold"));
        assert_eq!(tables.radius.get(8.0), Some("lg"));
    }

    #[test]
    fn test_default_palette() {
        let tables = TokenTables::default();
        assert_eq!(tables.colors.get("#ef4444"), Some("red-500"));
        assert_eq!(tables.colors.get("#EF4444"), Some("red-500"));
        assert_eq!(tables.colors.get("#000000"), Some("black"));
        assert_eq!(tables.colors.get("#ffffff"), Some("white"));
        assert_eq!(tables.colors.get("#172554"), Some("blue-950"));
        // zinc-50 and neutral-50 share a hex; the first family wins
        assert_eq!(tables.colors.get("#fafafa"), Some("zinc-50"));
        assert_eq!(tables.colors.get("#ff0000"), None);
    }

    #[test]
    fn test_color_table_normalizes_keys() {
        let mut table = ColorTable::new();
        table.insert("ABCDEF", "brand");
        assert_eq!(table.get("#abcdef"), Some("brand"));
        assert_eq!(table.remove("#AbCdEf").as_deref(), Some("brand"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_tables_miss() {
        let tables = TokenTables::empty();
        assert!(tables.scale(Scale::Spacing).is_empty());
        assert_eq!(tables.colors.get("#ef4444"), None);
    }
}
