//! Background and gradient compositing.

use super::synth::format_number;
use super::{ClassList, StyleContext, Styled, resolve_solid};
use crate::host::HostDocument;
use crate::scene::{GradientKind, GradientPaint, NodeKind, Paint, SceneNode};

/// Classes that paint a background through the glyphs of a text node.
const CLIP_TO_TEXT: &str = "text-transparent bg-clip-text";

/// Gradients with more stops than this are exported as raw CSS.
const MAX_CLASS_STOPS: usize = 3;

/// Whether a gradient must fall back to raw CSS.
pub(crate) fn is_complex(gradient: &GradientPaint) -> bool {
    match gradient.kind {
        GradientKind::Radial | GradientKind::Diamond => true,
        GradientKind::Linear | GradientKind::Angular => {
            gradient.transform.is_translated() || gradient.stops.len() > MAX_CLASS_STOPS
        }
    }
}

/// Compile a node's fills into classes and stylesheet text.
///
/// Solid fills become `text-*` on text nodes and `bg-*` elsewhere. Image
/// fills are left to the image generators.
pub async fn compile_background<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    node: &SceneNode,
) -> Styled {
    compile_fills(cx, node, &node.fills).await
}

/// Same as [`compile_background`] with fills supplied by the caller.
pub(crate) async fn compile_fills<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    node: &SceneNode,
    fills: &[Paint],
) -> Styled {
    let is_text = node.kind == NodeKind::Text;
    let mut styled = Styled::default();

    match fills {
        [] => {}
        [Paint::Solid(paint)] => {
            let prefix = if is_text { "text" } else { "bg" };
            let resolved = resolve_solid(cx, paint, node, Some(prefix)).await;
            styled.classes.push(resolved.class);
        }
        [Paint::Gradient(gradient)] if is_complex(gradient) => {
            let name = format!("{}_gradient", node.utility_name());
            if raw_background(cx, node, &name, &mut styled).await && is_text {
                styled.classes.push("w-fit");
                styled.classes.push(CLIP_TO_TEXT);
            }
        }
        [Paint::Gradient(gradient)] => {
            styled.classes.extend(gradient_classes(cx, gradient));
            if is_text {
                styled.classes.push("w-fit");
                styled.classes.push(CLIP_TO_TEXT);
            }
        }
        [Paint::Image(_)] => {}
        _ => {
            let name = format!("{}_bg", node.utility_name());
            if raw_background(cx, node, &name, &mut styled).await && is_text {
                styled.classes.push(CLIP_TO_TEXT);
            }
        }
    }

    styled
}

/// Register the host's CSS as a named utility; false when the host has none.
async fn raw_background<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    node: &SceneNode,
    name: &str,
    styled: &mut Styled,
) -> bool {
    match cx.host.background_css(node).await {
        Some(css) if !css.trim().is_empty() => {
            log::debug!("raw background for {}: {name}", node.id);
            styled.classes.push(name);
            styled.push_style(&format!("@utility {name} {{ background-image: {}; }}", css.trim()));
            true
        }
        _ => {
            log::debug!("host has no background css for {}", node.id);
            false
        }
    }
}

/// Stop position as a percentage, rounded to two places.
fn percent(position: f64) -> String {
    let value = (position * 10_000.0).round() / 100.0;
    format!("{}%", format_number(value))
}

/// Direction and stop classes of a simple linear or angular gradient.
fn gradient_classes<H: HostDocument>(cx: &StyleContext<'_, H>, gradient: &GradientPaint) -> ClassList {
    let synth = cx.synth();
    let mut classes = ClassList::new();

    let direction = match gradient.kind {
        GradientKind::Angular => "bg-conic",
        _ => "bg-linear",
    };
    classes.push(format!("{direction}-{}/srgb", gradient.transform.css_angle()));

    let stops = gradient.sorted_stops();
    let Some((from, rest)) = stops.split_first() else {
        return classes;
    };

    classes.push(synth.color(from.color, None, Some("from")));
    if from.position != 0.0 {
        classes.push(format!("from-{}", percent(from.position)));
    }

    let (via, to) = match rest {
        [via, to] => (Some(via), Some(to)),
        [to] => (None, Some(to)),
        _ => (None, None),
    };

    if let Some(via) = via {
        classes.push(synth.color(via.color, None, Some("via")));
        classes.push(format!("via-{}", percent(via.position)));
    }

    if let Some(to) = to {
        classes.push(synth.color(to.color, None, Some("to")));
        if to.position != 1.0 {
            classes.push(format!("to-{}", percent(to.position)));
        }
    }

    classes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use crate::scene::{ColorStop, GradientTransform, Rgba, SolidPaint};
    use crate::session::CompileConfig;

    fn red() -> Rgba {
        Rgba::from_u8(239, 68, 68)
    }

    fn blue() -> Rgba {
        Rgba::from_u8(59, 130, 246)
    }

    fn two_stop() -> GradientPaint {
        GradientPaint::new(
            GradientKind::Linear,
            vec![ColorStop::new(1.0, blue()), ColorStop::new(0.0, red())],
        )
    }

    async fn compile(host: &MemoryHost, node: &SceneNode) -> Styled {
        let config = CompileConfig::default();
        let cx = StyleContext::new(host, &config);
        compile_background(&cx, node).await
    }

    #[tokio::test]
    async fn test_simple_gradient_uses_classes() {
        let host = MemoryHost::new().with_background("hero", "linear-gradient(red, blue)");
        let node = SceneNode::frame("hero").fill(two_stop());

        let styled = compile(&host, &node).await;
        assert_eq!(
            styled.class_name(),
            "bg-linear-270/srgb from-red-500 to-blue-500"
        );
        assert!(styled.styles.is_empty());
    }

    #[tokio::test]
    async fn test_translated_gradient_is_raw() {
        let host = MemoryHost::new().with_background("Hero Card", "linear-gradient(red, blue)");
        let moved = two_stop().with_transform(GradientTransform([[0.0, 1.0, 0.2], [-1.0, 0.0, 1.0]]));
        let node = SceneNode::frame("Hero Card").fill(moved);

        let styled = compile(&host, &node).await;
        assert_eq!(styled.class_name(), "herocard_gradient");
        assert_eq!(
            styled.styles,
            "@utility herocard_gradient { background-image: linear-gradient(red, blue); }"
        );
        assert!(!styled.classes.iter().any(|c| c.starts_with("from-") || c.starts_with("to-")));
    }

    #[tokio::test]
    async fn test_four_stops_is_raw() {
        let host = MemoryHost::new().with_background("g", "linear-gradient(...)");
        let mut gradient = two_stop();
        gradient.stops.push(ColorStop::new(0.3, red()));
        gradient.stops.push(ColorStop::new(0.6, blue()));
        let node = SceneNode::frame("g").fill(gradient);

        let styled = compile(&host, &node).await;
        assert_eq!(styled.class_name(), "g_gradient");
    }

    #[test]
    fn test_percent_rounds_positions() {
        assert_eq!(percent(0.3), "30%");
        assert_eq!(percent(1.0 / 3.0), "33.33%");
        assert_eq!(percent(0.125), "12.5%");
    }

    #[tokio::test]
    async fn test_three_stops_with_positions() {
        let host = MemoryHost::new();
        let gradient = GradientPaint::new(
            GradientKind::Angular,
            vec![
                ColorStop::new(0.1, red()),
                ColorStop::new(0.5, Rgba::from_u8(255, 255, 255)),
                ColorStop::new(0.9, blue()),
            ],
        );
        let node = SceneNode::frame("g").fill(gradient);

        let styled = compile(&host, &node).await;
        assert_eq!(
            styled.class_name(),
            "bg-conic-270/srgb from-red-500 from-10% via-white via-50% to-blue-500 to-90%"
        );
    }

    #[tokio::test]
    async fn test_text_gradient_clips() {
        let host = MemoryHost::new();
        let node = SceneNode::text("Title").fill(two_stop());
        let styled = compile(&host, &node).await;
        assert!(styled.classes.contains("w-fit"));
        assert!(styled.classes.contains("bg-clip-text"));
        assert!(styled.classes.contains("text-transparent"));
    }

    #[tokio::test]
    async fn test_multiple_fills() {
        let host = MemoryHost::new().with_background("Label", "linear-gradient(a), red");
        let node = SceneNode::text("Label")
            .fill(SolidPaint::new(red()))
            .fill(two_stop());

        let styled = compile(&host, &node).await;
        assert_eq!(styled.class_name(), "label_bg text-transparent bg-clip-text");
        assert!(styled.styles.starts_with("@utility label_bg {"));
    }

    #[tokio::test]
    async fn test_solid_prefix_by_kind() {
        let host = MemoryHost::new();
        let frame = SceneNode::frame("a").fill(SolidPaint::new(red()));
        let text = SceneNode::text("b").fill(SolidPaint::new(red()));
        assert_eq!(compile(&host, &frame).await.class_name(), "bg-red-500");
        assert_eq!(compile(&host, &text).await.class_name(), "text-red-500");
        assert_eq!(compile(&host, &SceneNode::frame("c")).await, Styled::default());
    }

    #[test]
    fn test_complexity_boundary() {
        assert!(!is_complex(&two_stop()));
        assert!(is_complex(&GradientPaint::new(GradientKind::Radial, vec![])));
        assert!(is_complex(&GradientPaint::new(GradientKind::Diamond, vec![])));
    }
}
