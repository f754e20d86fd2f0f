//! Markup rendering for compiled fragments.
//!
//! Tag fragments render as an opening tag, one line per non-empty section
//! (text content, markup of scene children, nested fragments) and a closing
//! tag. Raw fragments are emitted verbatim.

use crate::fragment::{Attr, AttrValue, Fragment, Generated, TagFragment};

// =============================================================================
// Fragment Rendering
// =============================================================================

/// Render a fragment with the already rendered markup of its scene children.
pub fn render_fragment(fragment: &Fragment, inside: Option<&str>) -> String {
    let mut output = String::new();
    match fragment {
        Fragment::Html(html) => output.push_str(html),
        Fragment::Tag(tag) => render_tag(tag, inside, &mut output),
    }
    output
}

/// Render a generated node without scene children.
pub fn render(generated: &Generated) -> String {
    render_fragment(&generated.fragment, None)
}

fn render_tag(tag: &TagFragment, inside: Option<&str>, output: &mut String) {
    output.push('<');
    output.push_str(&tag.tag);
    render_attrs(&tag.attrs, output);

    if !tag.class_name.is_empty() {
        output.push_str(" class=\"");
        output.push_str(&escape_attr(&tag.class_name));
        output.push('"');
    }

    if is_void_element(&tag.tag) {
        output.push_str(" />");
        return;
    }

    output.push('>');

    let content = tag.content.as_deref().filter(|c| !c.is_empty()).map(escape_html);
    let inside = inside.filter(|i| !i.is_empty()).map(str::to_string);
    let children = (!tag.children.is_empty()).then(|| {
        tag.children
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join("\n")
    });

    let mut has_sections = false;
    for section in [content, inside, children].into_iter().flatten() {
        output.push('\n');
        output.push_str(&section);
        has_sections = true;
    }
    if has_sections {
        output.push('\n');
    }

    output.push_str("</");
    output.push_str(&tag.tag);
    output.push('>');
}

/// Render attributes: bare names for presence, quoted values otherwise.
fn render_attrs(attrs: &[Attr], output: &mut String) {
    for attr in attrs {
        output.push(' ');
        output.push_str(&attr.name);
        if let AttrValue::Text(value) = &attr.value {
            output.push_str("=\"");
            output.push_str(&escape_attr(value));
            output.push('"');
        }
    }
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute value special characters.
fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Check if element is a void element (self-closing).
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

// =============================================================================
// Tests
// =============================================================================
