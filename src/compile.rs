//! Recursive markup and asset compilation.
//!
//! A node's own deferred phase and its children's compilations run
//! concurrently. Results are joined in child order, so the output never
//! depends on which host call finishes first.

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, try_join, try_join_all};

use crate::error::CompileResult;
use crate::fragment::{AssetBundle, Generated};
use crate::host::HostDocument;
use crate::render::render_fragment;
use crate::scene::SceneNode;
use crate::session::{CompileConfig, Session};
use crate::style::{ParentInfo, StyleContext};
use crate::tags::{InitialTag, classify, describe};

// =============================================================================
// CompileOutput
// =============================================================================

/// Markup and assets of a compiled subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompileOutput {
    pub markup: String,
    pub assets: AssetBundle,
}

// =============================================================================
// Compiler
// =============================================================================

/// Compiles scene trees read from a host document.
///
/// The configuration is fixed for the compiler's lifetime; build a new
/// compiler (or take a new session snapshot) to pick up user changes.
pub struct Compiler<'h, H> {
    host: &'h H,
    config: CompileConfig,
}

impl<'h, H: HostDocument> Compiler<'h, H> {
    pub fn new(host: &'h H, config: CompileConfig) -> Self {
        Self { host, config }
    }

    /// Compiler over the current state of a session.
    pub fn from_session(host: &'h H, session: &Session) -> Self {
        Self::new(host, session.snapshot())
    }

    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Cheap classification for tree browsers; no host I/O.
    pub fn classify(&self, node: &SceneNode) -> InitialTag {
        classify(node, self.config.user_tag(&node.id))
    }

    /// Compile a subtree into markup and assets.
    ///
    /// Fails on the first host call that cannot be absorbed, such as an
    /// instance without a main component.
    pub async fn compile(&self, root: &SceneNode) -> CompileResult<CompileOutput> {
        log::debug!("compiling {} ({})", root.name, root.id);
        let cx = StyleContext::new(self.host, &self.config);
        compile_node(cx, root, None).await
    }
}

/// Compile `root` with a one-off configuration.
pub async fn compile<H: HostDocument>(
    host: &H,
    config: &CompileConfig,
    root: &SceneNode,
) -> CompileResult<CompileOutput> {
    compile_node(StyleContext::new(host, config), root, None).await
}

fn compile_node<'a, H: HostDocument>(
    cx: StyleContext<'a, H>,
    node: &'a SceneNode,
    parent: Option<ParentInfo>,
) -> BoxFuture<'a, CompileResult<CompileOutput>> {
    async move {
        let descriptor = describe(cx, node, parent);
        let with_children = !descriptor.initial.children_suppressed && !node.children.is_empty();
        let own = descriptor.resolve();

        if !with_children {
            return Ok(fold(own.await?, Vec::new()));
        }

        let here = Some(ParentInfo::of(node));
        let children = try_join_all(
            node.children
                .iter()
                .map(|child| compile_node(cx, child, here)),
        );
        let (generated, children) = try_join(own, children).await?;
        Ok(fold(generated, children))
    }
    .boxed()
}

// =============================================================================
// Folding
// =============================================================================

/// Combine a node's fragment with its compiled children.
///
/// Children come first in every asset list; the node's own stylesheet text
/// follows the children's.
fn fold(generated: Generated, children: Vec<CompileOutput>) -> CompileOutput {
    let inside = children
        .iter()
        .map(|child| child.markup.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let markup = render_fragment(&generated.fragment, Some(&inside));

    let mut stylesheet: Vec<&str> = children
        .iter()
        .map(|child| child.assets.stylesheet.as_str())
        .filter(|styles| !styles.is_empty())
        .collect();
    let own_styles = generated.fragment.styles();
    if !own_styles.is_empty() {
        stylesheet.push(own_styles);
    }
    let stylesheet = stylesheet.join("\n");

    let mut assets = AssetBundle {
        images: Vec::new(),
        colors: Vec::new(),
        stylesheet,
    };
    for child in children {
        assets.images.extend(child.assets.images);
        assets.colors.extend(child.assets.colors);
    }
    assets.images.extend(generated.collect_images());
    assets.colors.extend(generated.collect_colors());

    CompileOutput { markup, assets }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use rustc_hash::FxHashMap;
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::error::CompileError;
    use crate::host::{ComponentRef, MemoryHost, Variable};
    use crate::scene::{
        ColorStop, GradientKind, GradientPaint, GradientTransform, ImageHandle, ImagePaint,
        LayoutMode, LayoutProps, NodeKind, Rgba, SolidPaint, TextRun, VariableRef,
    };

    assert_impl_all!(CompileOutput: Send, Sync);
    assert_impl_all!(CompileConfig: Send, Sync);
    assert_impl_all!(Session: Send, Sync, Clone);
    assert_impl_all!(CompileError: Send, Sync, std::error::Error);
    assert_impl_all!(Compiler<'static, MemoryHost>: Send, Sync);

    fn red() -> Rgba {
        Rgba::from_u8(239, 68, 68)
    }

    async fn run(host: &MemoryHost, root: &SceneNode) -> CompileResult<CompileOutput> {
        Compiler::new(host, CompileConfig::default()).compile(root).await
    }

    #[tokio::test]
    async fn test_container_end_to_end() {
        let host = MemoryHost::new();
        let root = SceneNode::frame("box").size(200.0, 0.0).fill(SolidPaint::new(red()));

        let output = run(&host, &root).await.unwrap();
        assert_eq!(output.markup, r#"<div class="w-[200px] bg-red-500"></div>"#);
        assert_eq!(output.assets, AssetBundle::default());
    }

    #[tokio::test]
    async fn test_two_run_text_end_to_end() {
        let host = MemoryHost::new();
        let root = SceneNode::text("greeting")
            .run(TextRun::new("Hello "))
            .run(TextRun::new("world").weight(700.0));

        let output = run(&host, &root).await.unwrap();
        assert_eq!(
            output.markup,
            "<p class=\"font-[Inter] text-base\">\n\
             <span class=\"font-[Inter] text-base font-normal\">\nHello \n</span>\n\
             <span class=\"font-[Inter] text-base font-bold\">\nworld\n</span>\n\
             </p>"
        );
    }

    #[tokio::test]
    async fn test_children_markup_and_nesting() {
        let host = MemoryHost::new();
        let row = SceneNode::frame("row")
            .size(64.0, 32.0)
            .layout(LayoutProps {
                mode: LayoutMode::Horizontal,
                ..Default::default()
            })
            .child(SceneNode::frame("a").size(16.0, 16.0))
            .child(SceneNode::new(NodeKind::Group, "b"));

        let output = run(&host, &row).await.unwrap();
        assert_eq!(
            output.markup,
            "<div class=\"w-16 h-8 flex flex-row justify-start items-start\">\n\
             <div class=\"w-4 h-4 shrink-0\"></div>\n\
             <div></div>\n\
             </div>"
        );
    }

    #[tokio::test]
    async fn test_gradient_boundary_through_compiler() {
        let host = MemoryHost::new().with_background("hero", "linear-gradient(red, blue)");
        let gradient = GradientPaint::new(
            GradientKind::Linear,
            vec![ColorStop::new(0.0, red()), ColorStop::new(1.0, Rgba::from_u8(59, 130, 246))],
        );

        let simple = SceneNode::frame("hero").fill(gradient.clone());
        let output = run(&host, &simple).await.unwrap();
        assert!(output.markup.contains("from-red-500 to-blue-500"));
        assert!(output.assets.stylesheet.is_empty());

        let moved = gradient.with_transform(GradientTransform([[0.0, 1.0, 0.5], [-1.0, 0.0, 1.0]]));
        let complex = SceneNode::frame("hero").fill(moved);
        let output = run(&host, &complex).await.unwrap();
        assert_eq!(output.markup, r#"<div class="hero_gradient"></div>"#);
        assert_eq!(
            output.assets.stylesheet,
            "@utility hero_gradient { background-image: linear-gradient(red, blue); }"
        );
    }

    #[tokio::test]
    async fn test_styles_children_first() {
        let host = MemoryHost::new()
            .with_background("outer", "a, b")
            .with_background("inner", "radial-gradient(c)");
        let inner = SceneNode::frame("inner").fill(GradientPaint::new(GradientKind::Radial, vec![]));
        let outer = SceneNode::frame("outer")
            .fill(SolidPaint::new(red()))
            .fill(SolidPaint::new(red()))
            .child(inner);

        let output = run(&host, &outer).await.unwrap();
        assert_eq!(
            output.assets.stylesheet,
            "@utility inner_gradient { background-image: radial-gradient(c); }\n\
             @utility outer_bg { background-image: a, b; }"
        );
    }

    #[tokio::test]
    async fn test_images_fold_in_child_order() {
        let host = MemoryHost::new().with_image("one", vec![1]);
        let photo = |name: &str, handle: &str| {
            SceneNode::frame(name).fill(ImagePaint::new(ImageHandle::new(handle)))
        };
        let root = SceneNode::frame("gallery")
            .child(photo("First", "one"))
            .child(photo("Second", "two"));

        let output = run(&host, &root).await.unwrap();
        let paths: Vec<_> = output.assets.images.iter().map(|i| i.reference_path.as_str()).collect();
        assert_eq!(paths, ["/images/First.png", "/images/Second.png"]);
        assert!(!output.assets.images[0].inline_data_uri.is_empty());
        assert!(output.assets.images[1].inline_data_uri.is_empty());
        assert!(output.markup.contains(r#"<img src="/images/First.png" class="object-cover" />"#));
    }

    #[tokio::test]
    async fn test_unresolved_instance_aborts() {
        let host = MemoryHost::new();
        let root = SceneNode::frame("page")
            .child(SceneNode::frame("ok"))
            .child(SceneNode::new(NodeKind::Instance, "Card"));

        let err = run(&host, &root).await.unwrap_err();
        assert_eq!(err, CompileError::unresolved("Card"));
    }

    #[tokio::test]
    async fn test_instance_tag_and_attrs() {
        let host = MemoryHost::new().with_component(
            "btn",
            ComponentRef {
                name: "State=Disabled".into(),
                set_name: Some("Primary Button".into()),
                variant_properties: vec![
                    ("disabled".into(), "True".into()),
                    ("loading".into(), "false".into()),
                    ("size".into(), "lg".into()),
                ],
            },
        );
        let root = SceneNode::new(NodeKind::Instance, "btn").child(SceneNode::text("label"));

        let output = run(&host, &root).await.unwrap();
        assert_eq!(output.markup, r#"<PrimaryButton disabled size="lg"></PrimaryButton>"#);
    }

    #[tokio::test]
    async fn test_session_tag_override() {
        let host = MemoryHost::new();
        let session = Session::default();
        session.set_tag("nav".into(), "nav");
        let root = SceneNode::frame("nav").size(16.0, 16.0);

        let compiler = Compiler::from_session(&host, &session);
        assert_eq!(compiler.classify(&root).tag, "nav");
        let output = compiler.compile(&root).await.unwrap();
        assert_eq!(output.markup, r#"<nav class="w-4 h-4"></nav>"#);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Completion order
    // ─────────────────────────────────────────────────────────────────────────

    /// Host whose exports finish after a per-node number of yields.
    struct SlowHost {
        inner: MemoryHost,
        delays: FxHashMap<String, usize>,
        finished: Mutex<Vec<String>>,
    }

    impl HostDocument for SlowHost {
        async fn resolve_variable(&self, variable: &VariableRef, consumer: &SceneNode) -> Option<Variable> {
            self.inner.resolve_variable(variable, consumer).await
        }

        async fn export_svg(&self, node: &SceneNode) -> Result<String, String> {
            let delay = self.delays.get(&node.name).copied().unwrap_or(0);
            for _ in 0..delay {
                tokio::task::yield_now().await;
            }
            self.finished.lock().unwrap().push(node.name.clone());
            self.inner.export_svg(node).await
        }

        async fn background_css(&self, node: &SceneNode) -> Option<String> {
            self.inner.background_css(node).await
        }

        async fn image_bytes(&self, handle: &ImageHandle) -> Option<Vec<u8>> {
            self.inner.image_bytes(handle).await
        }

        async fn main_component(&self, instance: &SceneNode) -> Option<ComponentRef> {
            self.inner.main_component(instance).await
        }
    }

    #[tokio::test]
    async fn test_order_preserved_under_reverse_completion() {
        let names = ["a", "b", "c"];
        let mut inner = MemoryHost::new();
        let mut root = SceneNode::frame("icons");
        for (i, name) in names.iter().enumerate() {
            let variable = format!("var-{name}");
            inner = inner
                .with_svg(name, format!("<svg id=\"{name}\"></svg>"))
                .with_variable(&variable, Variable::color(*name, Rgba::from_u8(i as u8, 0, 0)));
            root = root.child(
                SceneNode::new(NodeKind::Vector, *name).fill(
                    SolidPaint::new(Rgba::from_u8(i as u8, 0, 0))
                        .bound_to(VariableRef::new(&variable)),
                ),
            );
        }
        let host = SlowHost {
            inner,
            delays: [("a", 6), ("b", 3), ("c", 0)]
                .into_iter()
                .map(|(n, d)| (n.to_string(), d))
                .collect(),
            finished: Mutex::new(Vec::new()),
        };

        let output = compile(&host, &CompileConfig::default(), &root).await.unwrap();

        assert_eq!(*host.finished.lock().unwrap(), ["c", "b", "a"]);
        assert_eq!(
            output.markup,
            "<div>\n\
             <svg class=\"text-a\" id=\"a\"></svg>\n\
             <svg class=\"text-b\" id=\"b\"></svg>\n\
             <svg class=\"text-c\" id=\"c\"></svg>\n\
             </div>"
        );
        let colors: Vec<_> = output.assets.colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(colors, names);
    }

    #[cfg(feature = "serde")]
    #[tokio::test]
    async fn test_output_serializes() {
        let host = MemoryHost::new().with_variable("v", Variable::color("brand", red()));
        let root = SceneNode::frame("x").fill(SolidPaint::new(red()).bound_to(VariableRef::new("v")));

        let output = run(&host, &root).await.unwrap();
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["markup"], r#"<div class="bg-brand"></div>"#);
        assert_eq!(json["assets"]["colors"][0]["name"], "brand");
        assert_eq!(json["assets"]["colors"][0]["hex"], "#ef4444");
        assert_eq!(json["assets"]["images"], serde_json::json!([]));
    }
}
