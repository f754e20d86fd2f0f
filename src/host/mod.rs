//! Host document boundary.
//!
//! Every method is an independent suspension point of a compile call. The
//! compiler issues them concurrently for sibling subtrees and never retries.

mod memory;

pub use memory::MemoryHost;

use std::future::Future;

use crate::scene::{ImageHandle, Rgba, SceneNode, VariableRef};

/// A resolved design variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Declared variable name, e.g. `brand/primary`.
    pub name: String,
    /// Resolved value when the variable is a color.
    pub color: Option<Rgba>,
}

impl Variable {
    pub fn color(name: impl Into<String>, color: Rgba) -> Self {
        Self {
            name: name.into(),
            color: Some(color),
        }
    }
}

/// The originating component of an instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComponentRef {
    pub name: String,
    /// Name of the variant set this component belongs to.
    pub set_name: Option<String>,
    /// Variant properties in declaration order.
    pub variant_properties: Vec<(String, String)>,
}

/// Asynchronous reads the compiler needs from the host document.
///
/// # Example
///
/// ```ignore
/// struct PluginHost { /* message channel to the document process */ }
///
/// impl HostDocument for PluginHost {
///     async fn resolve_variable(&self, var: &VariableRef, node: &SceneNode) -> Option<Variable> {
///         self.request(Lookup::Variable(var.clone(), node.id.clone())).await.ok()
///     }
///     // ...
/// }
/// ```
pub trait HostDocument: Sync {
    /// Resolve a bound variable in the context of the consuming node.
    fn resolve_variable(
        &self,
        variable: &VariableRef,
        consumer: &SceneNode,
    ) -> impl Future<Output = Option<Variable>> + Send;

    /// Export a node as vector markup.
    fn export_svg(&self, node: &SceneNode) -> impl Future<Output = Result<String, String>> + Send;

    /// Raw `background` CSS value the host computes for a node.
    fn background_css(&self, node: &SceneNode) -> impl Future<Output = Option<String>> + Send;

    /// Image bytes for a cached handle; `None` when unavailable.
    fn image_bytes(&self, handle: &ImageHandle) -> impl Future<Output = Option<Vec<u8>>> + Send;

    /// Originating component of an instance node.
    fn main_component(&self, instance: &SceneNode)
    -> impl Future<Output = Option<ComponentRef>> + Send;
}
