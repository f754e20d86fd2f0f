//! Read-only scene graph supplied by the host document.
//!
//! The compiler never mutates a [`SceneNode`]; the host adapter builds the
//! tree (or deserializes it, with the `serde` feature) and hands out
//! references for the duration of a compile call.

mod layout;
mod paint;
mod text;

pub use layout::{
    Constraint, Constraints, ContentAlign, CornerRadius, CounterAlign, Geometry, LayoutMode,
    LayoutProps, Padding, Positioning, PrimaryAlign, Sizing, StrokeWeight,
};
pub use paint::{
    ColorStop, GradientKind, GradientPaint, GradientTransform, ImageHandle, ImagePaint, Paint,
    Rgba, ScaleMode, SolidPaint, VariableRef,
};
pub use text::{
    DecorationStyle, FontName, ListStyle, Measure, TextCase, TextDecoration, TextRun,
};

use std::fmt;

use compact_str::CompactString;

// =============================================================================
// NodeId / NodeKind
// =============================================================================

/// Host-assigned node identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub CompactString);

impl NodeId {
    pub fn new(id: &str) -> Self {
        Self(CompactString::new(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Declared node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Frame,
    Group,
    Section,
    Component,
    ComponentSet,
    Instance,
    Text,
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Line,
    Vector,
    BooleanOperation,
    Other,
}

impl NodeKind {
    /// Shapes that are exported as vector markup.
    pub fn is_vector_like(self) -> bool {
        matches!(
            self,
            NodeKind::Rectangle
                | NodeKind::Ellipse
                | NodeKind::Polygon
                | NodeKind::Star
                | NodeKind::Line
                | NodeKind::Vector
                | NodeKind::BooleanOperation
        )
    }
}

// =============================================================================
// SceneNode
// =============================================================================

/// A node of the host design document.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneNode {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    pub geometry: Geometry,
    pub layout: LayoutProps,
    pub fills: Vec<Paint>,
    pub strokes: Vec<Paint>,
    pub stroke_weight: StrokeWeight,
    pub dash_pattern: Vec<f64>,
    pub corner_radius: CornerRadius,
    pub clips_content: bool,
    /// Marked as an exportable asset in the host.
    pub is_asset: bool,
    /// Styled runs; only populated on text nodes.
    pub runs: Vec<TextRun>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Create a node whose id is its name.
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: NodeId::new(&name),
            name,
            kind,
            geometry: Geometry::default(),
            layout: LayoutProps::default(),
            fills: Vec::new(),
            strokes: Vec::new(),
            stroke_weight: StrokeWeight::default(),
            dash_pattern: Vec::new(),
            corner_radius: CornerRadius::default(),
            clips_content: false,
            is_asset: false,
            runs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn frame(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Frame, name)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Text, name)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builders
    // ─────────────────────────────────────────────────────────────────────────

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = NodeId::new(id);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.geometry.width = width;
        self.geometry.height = height;
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.geometry.x = x;
        self.geometry.y = y;
        self
    }

    pub fn fill(mut self, paint: impl Into<Paint>) -> Self {
        self.fills.push(paint.into());
        self
    }

    pub fn stroke(mut self, paint: impl Into<Paint>, weight: StrokeWeight) -> Self {
        self.strokes.push(paint.into());
        self.stroke_weight = weight;
        self
    }

    pub fn radius(mut self, radius: CornerRadius) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn layout(mut self, layout: LayoutProps) -> Self {
        self.layout = layout;
        self
    }

    pub fn asset(mut self) -> Self {
        self.is_asset = true;
        self
    }

    pub fn run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }

    pub fn child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Name with all whitespace removed.
    pub fn sanitized_name(&self) -> String {
        self.name.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Whitespace-stripped, lower-cased name used for generated utilities.
    pub fn utility_name(&self) -> String {
        self.sanitized_name().to_lowercase()
    }

    /// First image fill that references uploaded bytes.
    pub fn image_fill(&self) -> Option<&ImagePaint> {
        self.fills
            .iter()
            .filter_map(Paint::as_image)
            .find(|image| image.handle.is_some())
    }

    pub fn has_absolute_child(&self) -> bool {
        self.children.iter().any(|child| child.layout.is_absolute())
    }

    /// Concatenated characters of all runs.
    pub fn characters(&self) -> String {
        self.runs.iter().map(|run| run.characters.as_str()).collect()
    }
}
