//! Component instances.

use crate::error::{CompileError, CompileResult};
use crate::fragment::{Attr, Attrs, Generated, TagFragment};
use crate::host::{ComponentRef, HostDocument};
use crate::scene::SceneNode;

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Tag of an instance: the variant set's name, else the component's.
pub fn component_tag(component: &ComponentRef) -> String {
    strip_whitespace(component.set_name.as_deref().unwrap_or(&component.name))
}

/// Variant properties as attributes.
///
/// `true`/`false` values (any case) become presence attributes, kept only
/// when true. Anything else is a quoted attribute.
pub fn variant_attrs(properties: &[(String, String)]) -> Attrs {
    let mut attrs = Attrs::new();
    for (name, value) in properties {
        let name = strip_whitespace(name);
        if name.is_empty() {
            continue;
        }
        if value.eq_ignore_ascii_case("true") {
            attrs.push(Attr::present(&name));
        } else if !value.eq_ignore_ascii_case("false") {
            attrs.push(Attr::text(&name, value.as_str()));
        }
    }
    attrs
}

/// Resolve an instance into a tag named after its component.
pub async fn compile_instance<H: HostDocument>(
    host: &H,
    node: &SceneNode,
    user_tag: Option<&str>,
) -> CompileResult<Generated> {
    let Some(component) = host.main_component(node).await else {
        return Err(CompileError::unresolved(&node.name));
    };

    let tag = match user_tag {
        Some(tag) => tag.to_string(),
        None => component_tag(&component),
    };
    let mut fragment = TagFragment::new(&tag);
    fragment.attrs = variant_attrs(&component.variant_properties);
    Ok(Generated::tag(fragment))
}
