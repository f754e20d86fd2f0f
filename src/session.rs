//! Compile configuration and the shared editing session.
//!
//! A [`CompileConfig`] is the explicit context of one compile call. The
//! orchestrating layer owns a [`Session`], mutates it on user actions, and
//! takes a [`Session::snapshot`] for every compile so the maps stay frozen
//! while a call is in flight.

use std::sync::Arc;

use compact_str::CompactString;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::scene::NodeId;
use crate::tokens::{ColorTable, TokenTables};

// =============================================================================
// Overrides
// =============================================================================

/// User color maps that take priority over the default palette.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleOverrides {
    /// Palette imported into the document, if any.
    pub palette: Option<ColorTable>,
    /// Custom style names declared by the user.
    pub custom: ColorTable,
}

impl StyleOverrides {
    /// Name from the imported palette, then from the custom styles.
    pub fn lookup(&self, hex: &str) -> Option<&str> {
        self.palette
            .as_ref()
            .and_then(|palette| palette.get(hex))
            .or_else(|| self.custom.get(hex))
    }
}

/// User-chosen output tags, keyed by node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagOverrides {
    tags: FxHashMap<NodeId, CompactString>,
}

impl TagOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, node: &NodeId) -> Option<&str> {
        self.tags.get(node).map(CompactString::as_str)
    }

    pub fn set(&mut self, node: NodeId, tag: &str) {
        self.tags.insert(node, CompactString::new(tag));
    }

    pub fn remove(&mut self, node: &NodeId) -> Option<CompactString> {
        self.tags.remove(node)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

// =============================================================================
// CompileOptions
// =============================================================================

/// Default directory for extracted images.
pub const DEFAULT_IMAGE_DIR: &str = "/images";

/// Output knobs that do not come from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOptions {
    /// Directory prefix of image reference paths.
    pub image_dir: String,
    /// Extension of image reference paths, without the dot.
    pub image_extension: String,
}

impl CompileOptions {
    /// Reference path for an image named after a node.
    pub fn image_path(&self, sanitized_name: &str) -> String {
        format!(
            "{}/{}.{}",
            self.image_dir.trim_end_matches('/'),
            sanitized_name,
            self.image_extension
        )
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            image_extension: "png".to_string(),
        }
    }
}

// =============================================================================
// CompileConfig
// =============================================================================

/// Everything a compile call reads besides the host document.
///
/// Cloning is cheap: the tables and maps are shared behind `Arc`.
#[derive(Debug, Clone, Default)]
pub struct CompileConfig {
    pub tokens: Arc<TokenTables>,
    pub styles: Arc<StyleOverrides>,
    pub tags: Arc<TagOverrides>,
    pub options: CompileOptions,
}

impl CompileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(mut self, tokens: TokenTables) -> Self {
        self.tokens = Arc::new(tokens);
        self
    }

    pub fn with_styles(mut self, styles: StyleOverrides) -> Self {
        self.styles = Arc::new(styles);
        self
    }

    pub fn with_tags(mut self, tags: TagOverrides) -> Self {
        self.tags = Arc::new(tags);
        self
    }

    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// The user tag for a node, if one was chosen.
    pub fn user_tag(&self, node: &NodeId) -> Option<&str> {
        self.tags.get(node)
    }
}

// =============================================================================
// Session
// =============================================================================

/// Thread-safe compile configuration shared with the orchestrating layer.
///
/// Writers copy-on-write the inner maps, so snapshots handed to running
/// compile calls never observe a mutation.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<CompileConfig>>,
}

impl Session {
    pub fn new(config: CompileConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Frozen view for one compile call.
    pub fn snapshot(&self) -> CompileConfig {
        self.inner.read().clone()
    }

    /// Execute a closure with write access to the configuration.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut CompileConfig) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    pub fn set_tag(&self, node: NodeId, tag: &str) {
        log::debug!("tag override for {node}: {tag}");
        self.with_write(|config| Arc::make_mut(&mut config.tags).set(node, tag));
    }

    pub fn clear_tag(&self, node: &NodeId) {
        self.with_write(|config| {
            Arc::make_mut(&mut config.tags).remove(node);
        });
    }

    /// Replace the imported palette.
    pub fn import_palette(&self, palette: ColorTable) {
        log::debug!("importing palette with {} colors", palette.len());
        self.with_write(|config| Arc::make_mut(&mut config.styles).palette = Some(palette));
    }

    pub fn remove_palette(&self) {
        self.with_write(|config| Arc::make_mut(&mut config.styles).palette = None);
    }

    pub fn set_custom_styles(&self, custom: ColorTable) {
        self.with_write(|config| Arc::make_mut(&mut config.styles).custom = custom);
    }

    pub fn set_options(&self, options: CompileOptions) {
        self.with_write(|config| config.options = options);
    }
}
