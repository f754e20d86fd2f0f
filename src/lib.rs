//! scene-markup - Compile design scene graphs into markup and utility classes
//!
//! ## Core Concepts
//!
//! **Two-phase tags**: every node is first classified without host I/O
//! (tag name, whether its children are compiled), then its fragment is
//! generated by a deferred phase that talks to the host document.
//!
//! **Token synthesis**: numeric and color values map to Tailwind-style
//! utility tokens through lookup tables, falling back to arbitrary values.
//!
//! ## Modules
//! - `scene`: read-only scene graph (`SceneNode`, paints, layout, text runs)
//! - `host`: `HostDocument` boundary and an in-memory host
//! - `tokens`: built-in scale and color tables
//! - `style`: class generators for containers, text, icons, images
//! - `tags`: node classification and fragment generation
//! - `compile`: recursive compilation with asset folding
//! - `session`: user tag overrides, palettes and options
//! - `render`: fragment-to-markup rendering
//!
//! ## Usage
//!
//! ```ignore
//! use scene_markup::prelude::*;
//!
//! let host = MemoryHost::new();
//! let root = SceneNode::frame("card").size(200.0, 120.0);
//!
//! let session = Session::default();
//! let output = Compiler::from_session(&host, &session).compile(&root).await?;
//! println!("{}", output.markup);
//! ```

// =============================================================================
// Modules
// =============================================================================

/// Scene graph types
pub mod scene;

/// Host document boundary
pub mod host;

/// Token tables
pub mod tokens;

/// Class and stylesheet generation
pub mod style;

/// Tag classification and fragment generation
pub mod tags;

/// Compiled fragments and asset records
pub mod fragment;

/// Recursive compiler
pub mod compile;

/// User configuration shared across compile calls
pub mod session;

/// Markup rendering
pub mod render;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Compiler
pub use compile::{CompileOutput, Compiler, compile};

// Scene
pub use scene::{NodeId, NodeKind, SceneNode};

// Host
pub use host::{ComponentRef, HostDocument, MemoryHost, Variable};

// Fragments and assets
pub use fragment::{AssetBundle, ColorInfo, Fragment, Generated, ImageInfo, TagFragment};

// Tags
pub use tags::{InitialTag, NodeCategory, TagDescriptor, classify, describe};

// Configuration
pub use session::{CompileConfig, CompileOptions, Session, StyleOverrides, TagOverrides};
pub use tokens::{ColorTable, ScaleTable, TokenTables};

// Error types
pub use error::{CompileError, CompileResult};
