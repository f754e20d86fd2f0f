//! Style generation.
//!
//! Each generator reads one scene node (plus what it needs of its parent)
//! and produces a [`Styled`]: utility classes, stylesheet text, and the
//! variable-bound colors it discovered.
//!
//! ## Modules
//! - `synth`: value-to-token synthesis
//! - `color`: bound-variable resolution for solid paints
//! - `background`: fills, gradients and raw-CSS fallbacks
//! - `frame`: container layout, box and border classes
//! - `icon`: icon-asset sizing and color
//! - `image`: replaced images and background images
//! - `text`: typography and styled runs

mod background;
mod classes;
mod color;
mod frame;
mod icon;
mod image;
mod synth;
mod text;

pub use background::compile_background;
pub use classes::ClassList;
pub use color::{ResolvedColor, bound_colors, resolve_solid};
pub use frame::{compile_container, image_box_classes};
pub use icon::{compile_icon, icon_colors};
pub use image::{background_image_classes, fetch_image, image_classes};
pub use synth::{Category, Synthesizer, TokenValue, format_number, variable_token};
pub use text::{RunStyle, compile_run, compile_text_node};

use crate::fragment::ColorInfo;
use crate::host::HostDocument;
use crate::scene::SceneNode;
use crate::session::CompileConfig;

// =============================================================================
// StyleContext
// =============================================================================

/// Host and configuration shared by every generator of one compile call.
pub struct StyleContext<'a, H> {
    pub host: &'a H,
    pub config: &'a CompileConfig,
}

impl<H> Clone for StyleContext<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for StyleContext<'_, H> {}

impl<'a, H: HostDocument> StyleContext<'a, H> {
    pub fn new(host: &'a H, config: &'a CompileConfig) -> Self {
        Self { host, config }
    }

    pub fn synth(&self) -> Synthesizer<'a> {
        Synthesizer::new(&self.config.tokens, &self.config.styles)
    }
}

/// What a child needs to know about its parent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParentInfo {
    pub width: f64,
    pub height: f64,
    pub is_flex: bool,
}

impl ParentInfo {
    pub fn of(node: &SceneNode) -> Self {
        Self {
            width: node.geometry.width,
            height: node.geometry.height,
            is_flex: node.layout.is_flex(),
        }
    }
}

// =============================================================================
// Styled
// =============================================================================

/// Output of a style generator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Styled {
    pub classes: ClassList,
    /// Stylesheet blocks, newline separated.
    pub styles: String,
    pub colors: Vec<ColorInfo>,
}

impl Styled {
    pub fn push_style(&mut self, block: &str) {
        if block.is_empty() {
            return;
        }
        if !self.styles.is_empty() {
            self.styles.push('\n');
        }
        self.styles.push_str(block);
    }

    pub fn class_name(&self) -> String {
        self.classes.join()
    }
}
