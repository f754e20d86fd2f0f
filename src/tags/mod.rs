//! Tag resolution.
//!
//! Every scene node maps to a [`NodeCategory`]. The category fixes the
//! node's [`InitialTag`] without touching the host, which is all a layer
//! browser needs. The full fragment comes from the descriptor's deferred
//! phase, which performs the host I/O.
//!
//! ```ignore
//! let initial = classify(&node, config.user_tag(&node.id));
//! if !initial.children_suppressed { /* show expander */ }
//!
//! let generated = describe(cx, &node, None).resolve().await?;
//! ```

mod component;
mod svg;
mod text;

pub use component::{component_tag, compile_instance, variant_attrs};
pub use svg::{CURRENT_COLOR, inject_class, replace_color};

use std::fmt;

use compact_str::CompactString;
use futures_util::FutureExt;
use futures_util::future::{BoxFuture, join};

use crate::error::{CompileError, CompileResult};
use crate::fragment::{Attr, Generated, TagFragment};
use crate::host::HostDocument;
use crate::scene::{NodeKind, SceneNode};
use crate::style::{
    ParentInfo, StyleContext, background_image_classes, bound_colors, compile_container,
    compile_icon, fetch_image, image_classes,
};

// =============================================================================
// NodeCategory
// =============================================================================

/// How a node is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeCategory {
    /// Shapes exported as vector markup.
    VectorLike,
    /// Frame marked as an asset, without an image fill.
    Icon,
    /// Frame with an image fill and no children.
    Image,
    /// Frame with an image fill and children.
    BackgroundImage,
    Container,
    Component,
    Instance,
    Text,
    Other,
}

impl NodeCategory {
    pub fn of(node: &SceneNode) -> Self {
        if node.kind.is_vector_like() {
            return NodeCategory::VectorLike;
        }
        match node.kind {
            NodeKind::Frame => {
                let has_image = node.image_fill().is_some();
                if node.is_asset && !has_image {
                    NodeCategory::Icon
                } else if has_image && node.children.is_empty() {
                    NodeCategory::Image
                } else if has_image {
                    NodeCategory::BackgroundImage
                } else {
                    NodeCategory::Container
                }
            }
            NodeKind::ComponentSet => NodeCategory::Container,
            NodeKind::Component => NodeCategory::Component,
            NodeKind::Instance => NodeCategory::Instance,
            NodeKind::Text => NodeCategory::Text,
            _ => NodeCategory::Other,
        }
    }

    /// Tag used when the user did not choose one.
    fn default_tag(self, node: &SceneNode) -> CompactString {
        match self {
            NodeCategory::VectorLike | NodeCategory::Icon => CompactString::new("svg"),
            NodeCategory::Image => CompactString::new("img"),
            NodeCategory::Component => CompactString::new("component"),
            NodeCategory::Text => CompactString::new("p"),
            NodeCategory::Instance => CompactString::new(node.sanitized_name()),
            NodeCategory::BackgroundImage | NodeCategory::Container | NodeCategory::Other => {
                CompactString::new("div")
            }
        }
    }

    /// Whether scene children are compiled under this node.
    pub fn compiles_children(self) -> bool {
        matches!(
            self,
            NodeCategory::BackgroundImage
                | NodeCategory::Container
                | NodeCategory::Component
                | NodeCategory::Other
        )
    }
}

// =============================================================================
// Descriptors
// =============================================================================

/// Shape of a node's output, known without host I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitialTag {
    pub tag: CompactString,
    pub children_suppressed: bool,
}

/// Classify a node for display; never touches the host.
pub fn classify(node: &SceneNode, user_tag: Option<&str>) -> InitialTag {
    let category = NodeCategory::of(node);
    log::trace!("classified {} as {category:?}", node.id);
    InitialTag {
        tag: user_tag
            .map(CompactString::new)
            .unwrap_or_else(|| category.default_tag(node)),
        children_suppressed: !category.compiles_children(),
    }
}

/// Deferred producer of a node's full fragment.
pub type Deferred<'a> = Box<dyn FnOnce() -> BoxFuture<'a, CompileResult<Generated>> + Send + 'a>;

/// Two-phase description of a node: eager shape, deferred content.
pub struct TagDescriptor<'a> {
    pub initial: InitialTag,
    pub category: NodeCategory,
    deferred: Deferred<'a>,
}

impl<'a> TagDescriptor<'a> {
    /// Run the deferred phase.
    pub fn resolve(self) -> BoxFuture<'a, CompileResult<Generated>> {
        (self.deferred)()
    }
}

impl fmt::Debug for TagDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagDescriptor")
            .field("initial", &self.initial)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Build the descriptor of a node.
///
/// `parent` is `None` for the compile root.
pub fn describe<'a, H: HostDocument>(
    cx: StyleContext<'a, H>,
    node: &'a SceneNode,
    parent: Option<ParentInfo>,
) -> TagDescriptor<'a> {
    let user_tag = cx.config.user_tag(&node.id);
    let initial = classify(node, user_tag);
    let category = NodeCategory::of(node);
    let tag = initial.tag.clone();

    TagDescriptor {
        initial,
        category,
        deferred: Box::new(move || {
            generate(cx, node, parent, category, tag, user_tag).boxed()
        }),
    }
}

// =============================================================================
// Deferred phase
// =============================================================================

async fn generate<H: HostDocument>(
    cx: StyleContext<'_, H>,
    node: &SceneNode,
    parent: Option<ParentInfo>,
    category: NodeCategory,
    tag: CompactString,
    user_tag: Option<&str>,
) -> CompileResult<Generated> {
    match category {
        NodeCategory::VectorLike => vector(&cx, node).await,
        NodeCategory::Icon => icon(&cx, node, parent).await,
        NodeCategory::Image => Ok(image(&cx, node, parent, &tag).await),
        NodeCategory::BackgroundImage => Ok(background_image(&cx, node, parent, &tag).await),
        NodeCategory::Container | NodeCategory::Component => {
            let styled = compile_container(&cx, node, parent).await;
            let mut fragment = TagFragment::new(&tag).class(styled.class_name());
            fragment.styles = styled.styles;
            Ok(Generated::tag(fragment).with_colors(styled.colors))
        }
        NodeCategory::Instance => compile_instance(cx.host, node, user_tag).await,
        NodeCategory::Text => Ok(text::compile_text(&cx, node, &tag).await),
        NodeCategory::Other => Ok(Generated::tag(TagFragment::new(&tag))),
    }
}

async fn export<H: HostDocument>(cx: &StyleContext<'_, H>, node: &SceneNode) -> CompileResult<String> {
    cx.host
        .export_svg(node)
        .await
        .map_err(|message| CompileError::export(&node.name, message))
}

/// Exported markup; a single bound color becomes `currentColor`.
async fn vector<H: HostDocument>(cx: &StyleContext<'_, H>, node: &SceneNode) -> CompileResult<Generated> {
    let mut svg = export(cx, node).await?;
    let colors = bound_colors(cx, &node.fills, node).await;

    if let [color] = colors.as_slice() {
        svg = replace_color(&svg, &color.hex);
        svg = inject_class(&svg, &format!("text-{}", color.name));
    }

    Ok(Generated::html(svg).with_colors(colors))
}

async fn icon<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    node: &SceneNode,
    parent: Option<ParentInfo>,
) -> CompileResult<Generated> {
    let mut svg = export(cx, node).await?;
    let styled = compile_icon(cx, node, parent).await;

    if let [color] = styled.colors.as_slice() {
        svg = replace_color(&svg, &color.hex);
    }
    svg = inject_class(&svg, &styled.class_name());

    Ok(Generated::html(svg).with_colors(styled.colors))
}

async fn image<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    node: &SceneNode,
    parent: Option<ParentInfo>,
    tag: &str,
) -> Generated {
    let Some(paint) = node.image_fill() else {
        return Generated::tag(TagFragment::new(tag));
    };
    let (info, classes) = join(
        fetch_image(cx, node, paint),
        image_classes(cx, node, parent, paint),
    )
    .await;

    let fragment = TagFragment::new(tag)
        .attr(Attr::text("src", info.reference_path.as_str()))
        .class(classes.join());
    Generated::tag(fragment).with_images(vec![info])
}

async fn background_image<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    node: &SceneNode,
    parent: Option<ParentInfo>,
    tag: &str,
) -> Generated {
    let Some(paint) = node.image_fill() else {
        return Generated::tag(TagFragment::new(tag));
    };
    let path = cx.config.options.image_path(&node.sanitized_name());
    let (info, styled) = join(
        fetch_image(cx, node, paint),
        background_image_classes(cx, node, parent, paint, &path),
    )
    .await;

    let mut fragment = TagFragment::new(tag).class(styled.class_name());
    fragment.styles = styled.styles;
    Generated::tag(fragment)
        .with_images(vec![info])
        .with_colors(styled.colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::ColorInfo;
    use crate::host::{MemoryHost, Variable};
    use crate::scene::{ImageHandle, ImagePaint, Rgba, SolidPaint, VariableRef};
    use crate::session::CompileConfig;

    #[test]
    fn test_classify_categories() {
        let image = || ImagePaint::new(ImageHandle::new("h"));
        let cases = [
            (SceneNode::new(NodeKind::Star, "s"), "svg", true),
            (SceneNode::frame("icon").asset(), "svg", true),
            (SceneNode::frame("photo").fill(image()), "img", true),
            (
                SceneNode::frame("hero").fill(image()).child(SceneNode::text("t")),
                "div",
                false,
            ),
            (SceneNode::frame("box"), "div", false),
            (SceneNode::new(NodeKind::ComponentSet, "set"), "div", false),
            (SceneNode::new(NodeKind::Component, "c"), "component", false),
            (SceneNode::new(NodeKind::Instance, "Primary Button"), "PrimaryButton", true),
            (SceneNode::text("t"), "p", true),
            (SceneNode::new(NodeKind::Group, "g"), "div", false),
        ];
        for (node, tag, suppressed) in cases {
            let initial = classify(&node, None);
            assert_eq!(initial.tag, tag, "{}", node.name);
            assert_eq!(initial.children_suppressed, suppressed, "{}", node.name);
        }
    }

    #[test]
    fn test_user_tag_overrides() {
        let node = SceneNode::frame("nav");
        assert_eq!(classify(&node, Some("nav")).tag, "nav");
        assert_eq!(classify(&SceneNode::text("h"), Some("h1")).tag, "h1");
    }

    #[test]
    fn test_asset_with_image_is_not_icon() {
        let node = SceneNode::frame("a").asset().fill(ImagePaint::new(ImageHandle::new("h")));
        assert_eq!(NodeCategory::of(&node), NodeCategory::Image);
    }

    #[tokio::test]
    async fn test_vector_single_color() {
        let host = MemoryHost::new()
            .with_svg("dot", r##"<svg><circle fill="#0F172A"/></svg>"##)
            .with_variable("ink", Variable::color("ink", Rgba::from_u8(15, 23, 42)));
        let config = CompileConfig::default();
        let node = SceneNode::new(NodeKind::Ellipse, "dot")
            .fill(SolidPaint::new(Rgba::from_u8(15, 23, 42)).bound_to(VariableRef::new("ink")));

        let generated = describe(StyleContext::new(&host, &config), &node, None)
            .resolve()
            .await
            .unwrap();
        assert_eq!(
            generated.fragment.as_html(),
            Some(r#"<svg class="text-ink"><circle fill="currentColor"/></svg>"#)
        );
        assert_eq!(generated.colors.len(), 1);
    }

    #[tokio::test]
    async fn test_icon_asset_markup() {
        let host = MemoryHost::new()
            .with_svg("Arrow", r##"<svg width="24"><path fill="#0F172A"/></svg>"##)
            .with_variable("ink", Variable::color("icon/ink", Rgba::from_u8(15, 23, 42)));
        let config = CompileConfig::default();
        let node = SceneNode::frame("Arrow").asset().size(24.0, 24.0).child(
            SceneNode::new(NodeKind::Vector, "path")
                .fill(SolidPaint::new(Rgba::from_u8(15, 23, 42)).bound_to(VariableRef::new("ink"))),
        );

        let descriptor = describe(StyleContext::new(&host, &config), &node, None);
        assert_eq!(descriptor.category, NodeCategory::Icon);
        assert!(descriptor.initial.children_suppressed);

        let generated = descriptor.resolve().await.unwrap();
        assert_eq!(
            generated.fragment.as_html(),
            Some(r#"<svg class="w-[24px] h-[24px] text-icon-ink" width="24"><path fill="currentColor"/></svg>"#)
        );
        assert_eq!(generated.colors, vec![ColorInfo::new("icon-ink", "#0f172a")]);
    }

    #[tokio::test]
    async fn test_vector_export_failure() {
        let host = MemoryHost::new();
        let config = CompileConfig::default();
        let node = SceneNode::new(NodeKind::Vector, "path");
        let err = describe(StyleContext::new(&host, &config), &node, None)
            .resolve()
            .await
            .unwrap_err();
        assert!(matches!(err, CompileError::Export { .. }));
    }

    #[tokio::test]
    async fn test_image_fragment() {
        let host = MemoryHost::new().with_image("h", vec![0]);
        let config = CompileConfig::default();
        let node = SceneNode::frame("Avatar Photo")
            .size(48.0, 48.0)
            .fill(ImagePaint::new(ImageHandle::new("h")));

        let generated = describe(StyleContext::new(&host, &config), &node, None)
            .resolve()
            .await
            .unwrap();
        let tag = generated.fragment.as_tag().unwrap();
        assert_eq!(tag.tag, "img");
        assert_eq!(tag.class_name, "w-12 h-12 object-cover");
        assert_eq!(tag.attrs[0], Attr::text("src", "/images/AvatarPhoto.png"));
        assert_eq!(generated.images.len(), 1);
        assert_eq!(generated.images[0].inline_data_uri, "data:image/png;base64,AA==");
    }
}
