//! In-memory host for previews and tests.

use rustc_hash::FxHashMap;

use super::{ComponentRef, HostDocument, Variable};
use crate::scene::{ImageHandle, NodeId, SceneNode, VariableRef};

/// Host backed by plain maps keyed by node id, variable id and image handle.
///
/// Lookups that have no entry behave like a host that cannot find the item:
/// variables and images resolve to `None`, exports fail.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    variables: FxHashMap<VariableRef, Variable>,
    svgs: FxHashMap<NodeId, String>,
    backgrounds: FxHashMap<NodeId, String>,
    images: FxHashMap<ImageHandle, Vec<u8>>,
    components: FxHashMap<NodeId, ComponentRef>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variable(mut self, id: &str, variable: Variable) -> Self {
        self.variables.insert(VariableRef::new(id), variable);
        self
    }

    pub fn with_svg(mut self, node: &str, markup: impl Into<String>) -> Self {
        self.svgs.insert(NodeId::new(node), markup.into());
        self
    }

    pub fn with_background(mut self, node: &str, css: impl Into<String>) -> Self {
        self.backgrounds.insert(NodeId::new(node), css.into());
        self
    }

    pub fn with_image(mut self, handle: &str, bytes: Vec<u8>) -> Self {
        self.images.insert(ImageHandle::new(handle), bytes);
        self
    }

    pub fn with_component(mut self, instance: &str, component: ComponentRef) -> Self {
        self.components.insert(NodeId::new(instance), component);
        self
    }
}

impl HostDocument for MemoryHost {
    async fn resolve_variable(&self, variable: &VariableRef, _consumer: &SceneNode) -> Option<Variable> {
        self.variables.get(variable).cloned()
    }

    async fn export_svg(&self, node: &SceneNode) -> Result<String, String> {
        self.svgs
            .get(&node.id)
            .cloned()
            .ok_or_else(|| format!("no export registered for node {}", node.id))
    }

    async fn background_css(&self, node: &SceneNode) -> Option<String> {
        self.backgrounds.get(&node.id).cloned()
    }

    async fn image_bytes(&self, handle: &ImageHandle) -> Option<Vec<u8>> {
        self.images.get(handle).cloned()
    }

    async fn main_component(&self, instance: &SceneNode) -> Option<ComponentRef> {
        self.components.get(&instance.id).cloned()
    }
}
