//! Container styles: position, box, flex layout, border and radius.

use super::{
    Category, ClassList, ParentInfo, StyleContext, Styled, Synthesizer, bound_colors,
    compile_background, resolve_solid,
};
use crate::host::HostDocument;
use crate::scene::{
    Constraint, ContentAlign, CornerRadius, CounterAlign, LayoutMode, PrimaryAlign, SceneNode,
    Sizing, StrokeWeight,
};

/// Distance from the parent's midpoint within which a node counts as centered.
const CENTER_TOLERANCE: f64 = 1.0;

/// Compile the classes of a container node.
///
/// `parent` is `None` for the compile root.
pub async fn compile_container<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    node: &SceneNode,
    parent: Option<ParentInfo>,
) -> Styled {
    let synth = cx.synth();
    let mut styled = Styled::default();

    styled.classes.push(rotation(&synth, node));
    styled.classes.extend(positioning(&synth, node, parent));
    styled.classes.extend(sizing(&synth, node, parent));
    styled.classes.extend(padding(&synth, node));
    styled.classes.push(flex_item(node, parent));
    if node.clips_content {
        styled.classes.push("overflow-hidden");
    }
    styled.classes.extend(flex_container(&synth, node));

    let background = compile_background(cx, node).await;
    styled.classes.extend(background.classes);
    styled.push_style(&background.styles);

    styled.classes.extend(border(cx, node).await);
    styled.classes.extend(radius(&synth, node));

    styled.colors = bound_colors(cx, &node.fills, node).await;
    styled
}

/// Box classes of a replaced image: rotation, position, size, border, radius.
pub async fn image_box_classes<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    node: &SceneNode,
    parent: Option<ParentInfo>,
) -> ClassList {
    let synth = cx.synth();
    let mut classes = ClassList::new();
    classes.push(rotation(&synth, node));
    classes.extend(positioning(&synth, node, parent));
    classes.extend(sizing(&synth, node, parent));
    classes.push(flex_item(node, parent));
    classes.extend(border(cx, node).await);
    classes.extend(radius(&synth, node));
    classes
}

// ─────────────────────────────────────────────────────────────────────────────
// Placement
// ─────────────────────────────────────────────────────────────────────────────

fn rotation(synth: &Synthesizer<'_>, node: &SceneNode) -> String {
    let degrees = (-node.geometry.rotation).round();
    synth.number(degrees, Category::Rotate, Some("rotate"))
}

/// Offset class that spells out zero instead of dropping it.
fn offset(synth: &Synthesizer<'_>, side: &str, value: f64) -> String {
    if value == 0.0 {
        format!("{side}-0")
    } else {
        synth.number(value, Category::Spacing, Some(side))
    }
}

pub(crate) fn positioning(
    synth: &Synthesizer<'_>,
    node: &SceneNode,
    parent: Option<ParentInfo>,
) -> ClassList {
    let mut classes = ClassList::new();
    let layout = &node.layout;

    if !layout.is_absolute() {
        if node.has_absolute_child() {
            classes.push("relative");
        }
        return classes;
    }

    classes.push("absolute");
    let Some(parent) = parent else {
        return classes;
    };
    let geometry = &node.geometry;

    let center_x = geometry.x + geometry.width / 2.0;
    if (center_x - parent.width / 2.0).abs() <= CENTER_TOLERANCE {
        classes.push("left-0 right-0 mx-auto");
    } else if layout.constraints.horizontal == Constraint::Max {
        let right = parent.width - geometry.x - geometry.width;
        classes.push(offset(synth, "right", right));
    } else {
        classes.push(offset(synth, "left", geometry.x));
    }

    let center_y = geometry.y + geometry.height / 2.0;
    if (center_y - parent.height / 2.0).abs() <= CENTER_TOLERANCE {
        classes.push("top-0 bottom-0 my-auto");
    } else if layout.constraints.vertical == Constraint::Max {
        let bottom = parent.height - geometry.y - geometry.height;
        classes.push(offset(synth, "bottom", bottom));
    } else {
        classes.push(offset(synth, "top", geometry.y));
    }

    classes
}

// ─────────────────────────────────────────────────────────────────────────────
// Box
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn sizing(
    synth: &Synthesizer<'_>,
    node: &SceneNode,
    parent: Option<ParentInfo>,
) -> ClassList {
    let parent_flex = parent.is_some_and(|p| p.is_flex);
    let mut classes = ClassList::new();

    classes.push(match node.layout.sizing_horizontal {
        Sizing::Fill => "w-full".to_string(),
        Sizing::Hug => "w-fit".to_string(),
        Sizing::Fixed => synth.number(node.geometry.width, Category::Spacing, Some("w")),
    });
    classes.push(match node.layout.sizing_vertical {
        Sizing::Fill if parent_flex => "self-stretch".to_string(),
        Sizing::Fill => "h-full".to_string(),
        Sizing::Hug => "h-fit".to_string(),
        Sizing::Fixed => synth.number(node.geometry.height, Category::Spacing, Some("h")),
    });

    classes
}

/// Symmetric pair collapses to one class, otherwise one class per side.
fn paired(
    synth: &Synthesizer<'_>,
    category: Category,
    (a, b): (f64, f64),
    both: &str,
    (first, second): (&str, &str),
) -> ClassList {
    let mut classes = ClassList::new();
    if a == b {
        classes.push(synth.number(a, category, Some(both)));
    } else {
        classes.push(synth.number(a, category, Some(first)));
        classes.push(synth.number(b, category, Some(second)));
    }
    classes
}

/// Padding only applies to auto-layout containers.
fn padding(synth: &Synthesizer<'_>, node: &SceneNode) -> ClassList {
    let mut classes = ClassList::new();
    if !node.layout.is_flex() {
        return classes;
    }
    let p = &node.layout.padding;
    classes.extend(paired(synth, Category::Spacing, (p.left, p.right), "px", ("pl", "pr")));
    classes.extend(paired(synth, Category::Spacing, (p.top, p.bottom), "py", ("pt", "pb")));
    classes
}

fn flex_item(node: &SceneNode, parent: Option<ParentInfo>) -> &'static str {
    if node.layout.grow == 1.0 {
        "flex-1"
    } else if parent.is_some_and(|p| p.is_flex) {
        "shrink-0"
    } else {
        ""
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Flex container
// ─────────────────────────────────────────────────────────────────────────────

fn flex_container(synth: &Synthesizer<'_>, node: &SceneNode) -> ClassList {
    let layout = &node.layout;
    let mut classes = ClassList::new();
    if !layout.is_flex() {
        return classes;
    }

    classes.push("flex");
    classes.push(match layout.mode {
        LayoutMode::Horizontal => "flex-row",
        _ => "flex-col",
    });
    classes.push(match layout.primary_align {
        PrimaryAlign::Min => "justify-start",
        PrimaryAlign::Center => "justify-center",
        PrimaryAlign::Max => "justify-end",
        PrimaryAlign::SpaceBetween => "justify-between",
    });
    classes.push(match layout.counter_align {
        CounterAlign::Min => "items-start",
        CounterAlign::Center => "items-center",
        CounterAlign::Max => "items-end",
        CounterAlign::Baseline => "items-baseline",
    });
    if layout.content_align == ContentAlign::SpaceBetween {
        classes.push("content-between");
    }
    if layout.wrap {
        classes.push("flex-wrap");
    }
    classes.push(synth.number(layout.item_spacing, Category::Spacing, Some("gap")));
    if let Some(counter) = layout.counter_axis_spacing {
        classes.push(synth.number(counter, Category::Spacing, Some("gap-y")));
    }

    classes
}

// ─────────────────────────────────────────────────────────────────────────────
// Border and radius
// ─────────────────────────────────────────────────────────────────────────────

async fn border<H: HostDocument>(cx: &StyleContext<'_, H>, node: &SceneNode) -> ClassList {
    let synth = cx.synth();
    let mut classes = ClassList::new();
    let Some(first) = node.strokes.first() else {
        return classes;
    };

    match node.stroke_weight {
        StrokeWeight::Uniform(weight) => {
            classes.push(synth.number(weight, Category::Border, Some("border")));
        }
        StrokeWeight::Mixed {
            top,
            right,
            bottom,
            left,
        } => {
            classes.extend(paired(
                &synth,
                Category::Border,
                (top, bottom),
                "border-y",
                ("border-t", "border-b"),
            ));
            classes.extend(paired(
                &synth,
                Category::Border,
                (left, right),
                "border-x",
                ("border-l", "border-r"),
            ));
        }
    }

    if let Some(paint) = first.as_solid() {
        classes.push(resolve_solid(cx, paint, node, Some("border")).await.class);
    }

    if node.dash_pattern.iter().any(|dash| *dash != 0.0) {
        classes.push("border-dashed");
    }

    classes
}

fn radius(synth: &Synthesizer<'_>, node: &SceneNode) -> ClassList {
    match node.corner_radius {
        CornerRadius::Uniform(radius) => {
            let mut classes = ClassList::new();
            classes.push(synth.number(radius, Category::Radius, Some("rounded")));
            classes
        }
        CornerRadius::Mixed {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        } => {
            let mut classes = paired(
                synth,
                Category::Radius,
                (top_left, bottom_left),
                "rounded-s",
                ("rounded-ss", "rounded-es"),
            );
            classes.extend(paired(
                synth,
                Category::Radius,
                (top_right, bottom_right),
                "rounded-e",
                ("rounded-se", "rounded-ee"),
            ));
            classes
        }
    }
}
