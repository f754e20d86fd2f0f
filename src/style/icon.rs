//! Icon assets: size and single-color classing.

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, join_all};

use super::{ClassList, ParentInfo, StyleContext, Styled, bound_colors, format_number};
use crate::fragment::ColorInfo;
use crate::host::HostDocument;
use crate::scene::{SceneNode, Sizing};

/// Classes of an icon: explicit size plus `text-<name>` for a single color.
pub async fn compile_icon<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    node: &SceneNode,
    parent: Option<ParentInfo>,
) -> Styled {
    let colors = icon_colors(*cx, node).await;
    let parent_flex = parent.is_some_and(|p| p.is_flex);
    let mut classes = ClassList::new();

    classes.push(match node.layout.sizing_horizontal {
        Sizing::Fill => "w-full".to_string(),
        Sizing::Hug => "w-fit".to_string(),
        Sizing::Fixed => format!("w-[{}px]", format_number(node.geometry.width)),
    });
    classes.push(match node.layout.sizing_vertical {
        Sizing::Fill if parent_flex => "self-stretch".to_string(),
        Sizing::Fill => "h-full".to_string(),
        Sizing::Hug => "h-fit".to_string(),
        Sizing::Fixed => format!("h-[{}px]", format_number(node.geometry.height)),
    });

    if let [color] = colors.as_slice() {
        classes.push(format!("text-{}", color.name));
    }

    Styled {
        classes,
        styles: String::new(),
        colors,
    }
}

/// Variable-bound colors of the vector shapes under `node`, in tree order.
///
/// Vector shapes contribute their own fills and stop the descent; any other
/// node only contributes through its children.
pub fn icon_colors<'a, H: HostDocument>(
    cx: StyleContext<'a, H>,
    node: &'a SceneNode,
) -> BoxFuture<'a, Vec<ColorInfo>> {
    async move {
        if node.kind.is_vector_like() {
            return bound_colors(&cx, &node.fills, node).await;
        }
        join_all(node.children.iter().map(|child| icon_colors(cx, child)))
            .await
            .into_iter()
            .flatten()
            .collect()
    }
    .boxed()
}
