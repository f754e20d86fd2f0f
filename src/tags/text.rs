//! Text nodes: one element, or a wrapper with one element per run.

use futures_util::future::join_all;

use crate::fragment::{Attr, Generated, TagFragment};
use crate::host::HostDocument;
use crate::scene::{SceneNode, TextRun};
use crate::style::{StyleContext, compile_run, compile_text_node};

pub async fn compile_text<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    node: &SceneNode,
    tag: &str,
) -> Generated {
    let styled = compile_text_node(cx, node).await;
    let mut fragment = TagFragment::new(tag).class(styled.class_name());
    fragment.styles = styled.styles;

    if node.runs.len() > 1 {
        let runs = join_all(node.runs.iter().map(|run| compile_span(cx, run, node))).await;
        fragment.children = runs;
    } else {
        fragment.content = Some(node.characters());
    }

    Generated::tag(fragment).with_colors(styled.colors)
}

/// A run as `span`, or as `a` when it links somewhere.
async fn compile_span<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    run: &TextRun,
    node: &SceneNode,
) -> Generated {
    let style = compile_run(cx, run, node).await;
    let mut fragment = match &run.hyperlink {
        Some(href) => TagFragment::new("a").attr(Attr::text("href", href.as_str())),
        None => TagFragment::new("span"),
    };
    fragment.class_name = style.classes.join();
    fragment.content = Some(run.characters.clone());
    Generated::tag(fragment).with_colors(style.colors)
}
