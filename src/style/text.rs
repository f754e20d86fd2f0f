//! Typography classes for text nodes and their styled runs.

use futures_util::future::join_all;

use super::background::compile_fills;
use super::{Category, ClassList, StyleContext, Styled, Synthesizer, bound_colors, format_number, resolve_solid};
use crate::fragment::ColorInfo;
use crate::host::HostDocument;
use crate::scene::{
    DecorationStyle, ListStyle, Measure, Paint, SceneNode, TextCase, TextDecoration, TextRun,
};

/// Classes and color assets of one styled run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStyle {
    pub classes: ClassList,
    pub colors: Vec<ColorInfo>,
}

/// Classes of the element wrapping a text node.
///
/// A single run is styled in full. With several runs only the classes every
/// run shares are lifted onto the wrapper; each run is styled separately by
/// [`compile_run`].
pub async fn compile_text_node<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    node: &SceneNode,
) -> Styled {
    let synth = cx.synth();
    let mut styled = Styled::default();

    styled.classes = match node.runs.as_slice() {
        [] => ClassList::new(),
        [run] => typography(&synth, run),
        runs => shared_classes(runs.iter().map(|run| typography(&synth, run)).collect()),
    };

    let fills = node_fills(node);
    let background = compile_fills(cx, node, fills).await;
    styled.classes.extend(background.classes);
    styled.push_style(&background.styles);
    styled.colors = bound_colors(cx, fills, node).await;

    styled
}

/// Typography plus text-color classes of one run.
pub async fn compile_run<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    run: &TextRun,
    consumer: &SceneNode,
) -> RunStyle {
    let mut style = RunStyle {
        classes: typography(&cx.synth(), run),
        colors: Vec::new(),
    };

    let colors = run
        .fills
        .iter()
        .filter_map(Paint::as_solid)
        .map(|paint| resolve_solid(cx, paint, consumer, Some("text")));

    for resolved in join_all(colors).await {
        style.classes.push(resolved.class);
        style.colors.extend(resolved.info);
    }
    style
}

/// Node fills, or the fills every run agrees on.
fn node_fills(node: &SceneNode) -> &[Paint] {
    if !node.fills.is_empty() {
        return &node.fills;
    }
    match node.runs.split_first() {
        Some((first, rest)) if rest.iter().all(|run| run.fills == first.fills) => &first.fills,
        _ => &[],
    }
}

/// Classes present in every list, in the order of the first.
fn shared_classes(lists: Vec<ClassList>) -> ClassList {
    let Some((first, rest)) = lists.split_first() else {
        return ClassList::new();
    };
    first
        .iter()
        .filter(|class| rest.iter().all(|list| list.iter().any(|c| c == *class)))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Typography
// ─────────────────────────────────────────────────────────────────────────────

fn measure(prefix: &str, value: Measure) -> String {
    match value.with_unit() {
        Some((amount, unit)) if amount != 0.0 => {
            format!("{prefix}-[{}{unit}]", format_number(amount))
        }
        _ => String::new(),
    }
}

fn typography(synth: &Synthesizer<'_>, run: &TextRun) -> ClassList {
    let mut classes = ClassList::new();

    let family = run.font.family.trim().replace(char::is_whitespace, "_");
    if !family.is_empty() {
        classes.push(format!("font-[{family}]"));
    }
    if run.font.is_italic() {
        classes.push("italic");
    }
    classes.push(synth.number(run.font_size, Category::Text, Some("text")));
    classes.push(synth.number(run.font_weight, Category::Weight, Some("font")));
    classes.push(measure("tracking", run.letter_spacing));
    classes.push(measure("leading", run.line_height));

    classes.push(match run.text_case {
        TextCase::Upper => "uppercase",
        TextCase::Lower => "lowercase",
        TextCase::Title => "capitalize",
        TextCase::Original | TextCase::SmallCaps | TextCase::SmallCapsForced => "",
    });
    classes.push(match run.decoration {
        TextDecoration::Underline => "underline",
        TextDecoration::Strikethrough => "line-through",
        TextDecoration::None => "",
    });
    if let Some(color) = run.decoration_color {
        classes.push(synth.color(color, None, Some("decoration")));
    }
    if let Some(style) = run.decoration_style {
        classes.push(match style {
            DecorationStyle::Solid => "decoration-solid",
            DecorationStyle::Wavy => "decoration-wavy",
            DecorationStyle::Dotted => "decoration-dotted",
        });
    }
    classes.push(measure("decoration", run.decoration_thickness));

    classes.push(synth.number(run.paragraph_indent, Category::Spacing, Some("indent")));
    classes.push(match run.list_style {
        ListStyle::Ordered => "list-decimal",
        ListStyle::Unordered => "list-disc",
        ListStyle::None => "",
    });

    classes
}
