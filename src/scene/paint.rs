//! Paints: solid colors, gradients and image fills.

use compact_str::CompactString;

// =============================================================================
// Rgba
// =============================================================================

/// A color with channels in the `[0, 1]` range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Opaque color from float channels.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque color from byte channels.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Multiply alpha by a paint opacity.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            a: self.a * opacity,
            ..self
        }
    }

    /// Whether alpha differs from fully opaque.
    pub fn is_translucent(&self) -> bool {
        self.a != 1.0
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn opaque_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }

    /// `#rrggbb`, or `#rrggbbaa` when alpha is not 1.
    pub fn to_hex(&self) -> String {
        let mut hex = self.opaque_hex();
        if self.is_translucent() {
            hex.push_str(&format!("{:02x}", channel(self.a)));
        }
        hex
    }

    /// Alpha as a rounded integer percentage.
    pub fn alpha_percent(&self) -> u32 {
        (self.a.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

// =============================================================================
// Handles
// =============================================================================

/// Reference to a host-managed design variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableRef(pub CompactString);

impl VariableRef {
    pub fn new(id: &str) -> Self {
        Self(CompactString::new(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Reference to image bytes cached by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageHandle(pub CompactString);

impl ImageHandle {
    pub fn new(hash: &str) -> Self {
        Self(CompactString::new(hash))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Paint
// =============================================================================

/// A visual fill or stroke.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Paint {
    Solid(SolidPaint),
    Gradient(GradientPaint),
    Image(ImagePaint),
}

impl Paint {
    /// Opaque solid paint.
    pub fn solid(color: Rgba) -> Self {
        Paint::Solid(SolidPaint::new(color))
    }

    pub fn as_solid(&self) -> Option<&SolidPaint> {
        match self {
            Paint::Solid(solid) => Some(solid),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImagePaint> {
        match self {
            Paint::Image(image) => Some(image),
            _ => None,
        }
    }
}

/// Single color paint, optionally bound to a color variable.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolidPaint {
    pub color: Rgba,
    pub opacity: f64,
    pub bound_color: Option<VariableRef>,
}

impl SolidPaint {
    pub fn new(color: Rgba) -> Self {
        Self {
            color,
            opacity: 1.0,
            bound_color: None,
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn bound_to(mut self, variable: VariableRef) -> Self {
        self.bound_color = Some(variable);
        self
    }

    /// Color with the paint opacity folded into alpha.
    pub fn effective_color(&self) -> Rgba {
        self.color.with_opacity(self.opacity)
    }
}

impl From<SolidPaint> for Paint {
    fn from(paint: SolidPaint) -> Self {
        Paint::Solid(paint)
    }
}

// =============================================================================
// Gradients
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GradientKind {
    Linear,
    Radial,
    Angular,
    Diamond,
}

/// A gradient stop at `position` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorStop {
    pub position: f64,
    pub color: Rgba,
}

impl ColorStop {
    pub fn new(position: f64, color: Rgba) -> Self {
        Self { position, color }
    }
}

/// 2x3 affine matrix `[[a, c, e], [b, d, f]]` in the document's convention.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientTransform(pub [[f64; 3]; 2]);

impl GradientTransform {
    /// Top-to-bottom gradient, as produced by the host for a fresh fill.
    pub const DEFAULT: Self = Self([[0.0, 1.0, 0.0], [-1.0, 0.0, 1.0]]);

    /// Left translation component.
    pub fn left(&self) -> f64 {
        self.0[0][2]
    }

    /// Top translation component.
    pub fn top(&self) -> f64 {
        self.0[1][2]
    }

    /// Whether the translation differs from the default `(0, 1)`.
    pub fn is_translated(&self) -> bool {
        self.left() != 0.0 || self.top() != 1.0
    }

    /// Stylesheet angle in whole degrees, `0..360`.
    ///
    /// The document measures rotation from `atan2(b, a)`; stylesheet gradients
    /// measure from "to top", hence `-(deg - 180) mod 360`.
    pub fn css_angle(&self) -> i64 {
        let a = self.0[0][0];
        let b = self.0[1][0];
        let degrees = b.atan2(a).to_degrees();
        (-(degrees - 180.0)).rem_euclid(360.0).round() as i64 % 360
    }
}

impl Default for GradientTransform {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientPaint {
    pub kind: GradientKind,
    pub transform: GradientTransform,
    pub stops: Vec<ColorStop>,
}

impl GradientPaint {
    pub fn new(kind: GradientKind, stops: Vec<ColorStop>) -> Self {
        Self {
            kind,
            transform: GradientTransform::DEFAULT,
            stops,
        }
    }

    pub fn with_transform(mut self, transform: GradientTransform) -> Self {
        self.transform = transform;
        self
    }

    /// Stops sorted by ascending position.
    pub fn sorted_stops(&self) -> Vec<ColorStop> {
        let mut stops = self.stops.clone();
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        stops
    }
}

impl From<GradientPaint> for Paint {
    fn from(paint: GradientPaint) -> Self {
        Paint::Gradient(paint)
    }
}

// =============================================================================
// Images
// =============================================================================

/// How an image fill is fitted into its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleMode {
    #[default]
    Fill,
    Fit,
    Crop,
    Tile,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImagePaint {
    /// `None` while the host has not uploaded the image yet.
    pub handle: Option<ImageHandle>,
    pub scale_mode: ScaleMode,
}

impl ImagePaint {
    pub fn new(handle: ImageHandle) -> Self {
        Self {
            handle: Some(handle),
            scale_mode: ScaleMode::Fill,
        }
    }

    pub fn with_scale_mode(mut self, scale_mode: ScaleMode) -> Self {
        self.scale_mode = scale_mode;
        self
    }
}

impl From<ImagePaint> for Paint {
    fn from(paint: ImagePaint) -> Self {
        Paint::Image(paint)
    }
}
