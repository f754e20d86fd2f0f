//! Edits on exported vector markup.

use regex::RegexBuilder;

/// Placeholder that makes a vector follow the element's text color.
pub const CURRENT_COLOR: &str = "currentColor";

/// `#rrggbb` part of a hex that may carry an alpha byte.
fn opaque(hex: &str) -> &str {
    hex.get(..7).unwrap_or(hex)
}

/// Replace every occurrence of a color, matched case-insensitively.
pub fn replace_color(svg: &str, hex: &str) -> String {
    let pattern = regex::escape(opaque(hex));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.replace_all(svg, CURRENT_COLOR).into_owned(),
        Err(err) => {
            log::debug!("cannot substitute color {hex}: {err}");
            svg.to_string()
        }
    }
}

/// Add classes to the root `<svg>` element.
///
/// An existing `class` attribute is extended, otherwise one is inserted.
pub fn inject_class(svg: &str, classes: &str) -> String {
    if classes.is_empty() {
        return svg.to_string();
    }
    let Some(start) = svg.find("<svg") else {
        return svg.to_string();
    };
    let open_end = svg[start..].find('>').map_or(svg.len(), |end| start + end);
    let open_tag = &svg[start..open_end];

    let mut output = String::with_capacity(svg.len() + classes.len() + 9);
    match open_tag.find(" class=\"") {
        Some(at) => {
            let value_start = start + at + " class=\"".len();
            let existing_empty = svg[value_start..].starts_with('"');
            output.push_str(&svg[..value_start]);
            output.push_str(classes);
            if !existing_empty {
                output.push(' ');
            }
            output.push_str(&svg[value_start..]);
        }
        None => {
            let name_end = start + "<svg".len();
            output.push_str(&svg[..name_end]);
            output.push_str(" class=\"");
            output.push_str(classes);
            output.push('"');
            output.push_str(&svg[name_end..]);
        }
    }
    output
}
