//! Prelude module for common imports.
//!
//! ```ignore
//! use scene_markup::prelude::*;
//! ```

// Compiler
pub use crate::compile::{CompileOutput, Compiler, compile};

// Scene
pub use crate::scene::{
    ColorStop, CornerRadius, GradientKind, GradientPaint, ImageHandle, ImagePaint, LayoutMode,
    LayoutProps, NodeId, NodeKind, Paint, Rgba, SceneNode, SolidPaint, StrokeWeight, TextRun,
    VariableRef,
};

// Host
pub use crate::host::{ComponentRef, HostDocument, MemoryHost, Variable};

// Fragments
pub use crate::fragment::{AssetBundle, ColorInfo, Fragment, Generated, ImageInfo};

// Tags
pub use crate::tags::{InitialTag, NodeCategory, classify};

// Configuration
pub use crate::session::{CompileConfig, CompileOptions, Session};
pub use crate::tokens::{ColorTable, TokenTables};

// Render
pub use crate::render::{render, render_fragment};

// Error
pub use crate::error::{CompileError, CompileResult};
