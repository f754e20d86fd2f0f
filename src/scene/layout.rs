//! Geometry, auto-layout and border attributes of scene nodes.

/// Position relative to the parent, size, and rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Sizing behavior along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sizing {
    #[default]
    Fixed,
    Hug,
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Positioning {
    #[default]
    Auto,
    Absolute,
}

/// Which parent edge a node is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constraint {
    #[default]
    Min,
    Center,
    Max,
    Stretch,
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraints {
    pub horizontal: Constraint,
    pub vertical: Constraint,
}

/// Primary axis distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimaryAlign {
    #[default]
    Min,
    Center,
    Max,
    SpaceBetween,
}

/// Cross axis alignment of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CounterAlign {
    #[default]
    Min,
    Center,
    Max,
    Baseline,
}

/// Cross axis distribution of wrapped lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentAlign {
    #[default]
    Auto,
    SpaceBetween,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    pub fn uniform(value: f64) -> Self {
        Self::symmetric(value, value)
    }

    pub fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Layout attributes, including the host's auto-layout inference results.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutProps {
    pub mode: LayoutMode,
    pub sizing_horizontal: Sizing,
    pub sizing_vertical: Sizing,
    pub positioning: Positioning,
    pub constraints: Constraints,
    /// `1.0` when the node grows along its parent's primary axis.
    pub grow: f64,
    pub wrap: bool,
    pub primary_align: PrimaryAlign,
    pub counter_align: CounterAlign,
    pub content_align: ContentAlign,
    pub item_spacing: f64,
    pub counter_axis_spacing: Option<f64>,
    pub padding: Padding,
}

impl LayoutProps {
    pub fn is_flex(&self) -> bool {
        self.mode != LayoutMode::None
    }

    pub fn is_absolute(&self) -> bool {
        self.positioning == Positioning::Absolute
    }
}

// =============================================================================
// Borders
// =============================================================================

/// Stroke width, either uniform or mixed per edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrokeWeight {
    Uniform(f64),
    Mixed {
        top: f64,
        right: f64,
        bottom: f64,
        left: f64,
    },
}

impl Default for StrokeWeight {
    fn default() -> Self {
        StrokeWeight::Uniform(1.0)
    }
}

/// Corner radius, either uniform or mixed per corner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CornerRadius {
    Uniform(f64),
    Mixed {
        top_left: f64,
        top_right: f64,
        bottom_right: f64,
        bottom_left: f64,
    },
}

impl Default for CornerRadius {
    fn default() -> Self {
        CornerRadius::Uniform(0.0)
    }
}
