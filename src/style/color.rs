//! Solid paints with bound design variables.

use futures_util::future::join_all;

use super::StyleContext;
use super::synth::variable_token;
use crate::fragment::ColorInfo;
use crate::host::HostDocument;
use crate::scene::{Paint, SceneNode, SolidPaint};

/// Class for a solid paint, plus the color asset when a variable is bound.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColor {
    pub class: String,
    pub info: Option<ColorInfo>,
}

/// Resolve a solid paint through the color priority chain.
///
/// A bound variable that does not resolve to a color is ignored and the
/// paint's literal color goes through the tables instead.
pub async fn resolve_solid<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    paint: &SolidPaint,
    consumer: &SceneNode,
    prefix: Option<&str>,
) -> ResolvedColor {
    let synth = cx.synth();

    let variable = match &paint.bound_color {
        Some(reference) => cx.host.resolve_variable(reference, consumer).await,
        None => None,
    };

    match variable.and_then(|v| v.color.map(|color| (v.name, color))) {
        Some((name, value)) => {
            let shown = value.with_opacity(paint.opacity);
            ResolvedColor {
                class: synth.color(shown, Some(&name), prefix),
                info: Some(ColorInfo::new(variable_token(&name), value.to_hex())),
            }
        }
        None => {
            if let Some(reference) = &paint.bound_color {
                log::debug!(
                    "variable {} on {} has no color value",
                    reference.as_str(),
                    consumer.id
                );
            }
            ResolvedColor {
                class: synth.color(paint.effective_color(), None, prefix),
                info: None,
            }
        }
    }
}

/// Variable-bound colors among solid paints, in paint order.
pub async fn bound_colors<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    paints: &[Paint],
    consumer: &SceneNode,
) -> Vec<ColorInfo> {
    let lookups = paints
        .iter()
        .filter_map(Paint::as_solid)
        .filter(|paint| paint.bound_color.is_some())
        .map(|paint| resolve_solid(cx, paint, consumer, None));

    join_all(lookups)
        .await
        .into_iter()
        .filter_map(|resolved| resolved.info)
        .collect()
}
