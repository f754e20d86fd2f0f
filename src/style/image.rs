//! Image fills: replaced images and background images.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::{ClassList, ParentInfo, StyleContext, Styled, compile_container, image_box_classes};
use crate::fragment::ImageInfo;
use crate::host::HostDocument;
use crate::scene::{ImagePaint, ScaleMode, SceneNode};

/// Classes of an `img` element.
pub async fn image_classes<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    node: &SceneNode,
    parent: Option<ParentInfo>,
    image: &ImagePaint,
) -> ClassList {
    let mut classes = image_box_classes(cx, node, parent).await;
    classes.push(match image.scale_mode {
        ScaleMode::Fit => "object-contain",
        ScaleMode::Fill | ScaleMode::Crop | ScaleMode::Tile => "object-cover",
    });
    classes
}

/// Container classes plus a CSS background referencing `path`.
pub async fn background_image_classes<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    node: &SceneNode,
    parent: Option<ParentInfo>,
    image: &ImagePaint,
    path: &str,
) -> Styled {
    let mut styled = compile_container(cx, node, parent).await;
    styled.classes.push(format!("bg-[url({path})]"));
    styled.classes.push(match image.scale_mode {
        ScaleMode::Fill | ScaleMode::Crop => "bg-cover",
        ScaleMode::Fit => "bg-contain",
        ScaleMode::Tile => "bg-repeat",
    });
    styled.classes.push("bg-center");
    styled
}

fn mime_type(extension: &str) -> String {
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg".to_string(),
        "svg" => "image/svg+xml".to_string(),
        other => format!("image/{other}"),
    }
}

/// Record an image asset, inlining its bytes when the host has them.
pub async fn fetch_image<H: HostDocument>(
    cx: &StyleContext<'_, H>,
    node: &SceneNode,
    image: &ImagePaint,
) -> ImageInfo {
    let options = &cx.config.options;
    let reference_path = options.image_path(&node.sanitized_name());

    let (source_handle, bytes) = match &image.handle {
        Some(handle) => (handle.as_str().to_string(), cx.host.image_bytes(handle).await),
        None => (String::new(), None),
    };

    let inline_data_uri = match bytes {
        Some(bytes) => format!(
            "data:{};base64,{}",
            mime_type(&options.image_extension),
            STANDARD.encode(bytes)
        ),
        None => {
            log::debug!("no image bytes for {} ({source_handle})", node.id);
            String::new()
        }
    };

    ImageInfo {
        name: node.name.clone(),
        source_handle,
        reference_path,
        inline_data_uri,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use crate::scene::ImageHandle;
    use crate::session::CompileConfig;

    #[tokio::test]
    async fn test_fetch_inlines_bytes() {
        let host = MemoryHost::new().with_image("h1", b"png".to_vec());
        let config = CompileConfig::default();
        let cx = StyleContext::new(&host, &config);
        let node = SceneNode::frame("Hero Image");

        let info = fetch_image(&cx, &node, &ImagePaint::new(ImageHandle::new("h1"))).await;
        assert_eq!(info.name, "Hero Image");
        assert_eq!(info.source_handle, "h1");
        assert_eq!(info.reference_path, "/images/HeroImage.png");
        assert_eq!(info.inline_data_uri, "data:image/png;base64,cG5n");
    }

    #[tokio::test]
    async fn test_missing_bytes_leave_uri_empty() {
        let host = MemoryHost::new();
        let config = CompileConfig::default();
        let cx = StyleContext::new(&host, &config);
        let node = SceneNode::frame("photo");

        let info = fetch_image(&cx, &node, &ImagePaint::new(ImageHandle::new("gone"))).await;
        assert!(info.inline_data_uri.is_empty());
        assert_eq!(info.reference_path, "/images/photo.png");
    }

    #[tokio::test]
    async fn test_scale_mode_classes() {
        let host = MemoryHost::new();
        let config = CompileConfig::default();
        let cx = StyleContext::new(&host, &config);
        let node = SceneNode::frame("photo").size(64.0, 64.0);
        let fit = ImagePaint::new(ImageHandle::new("h")).with_scale_mode(ScaleMode::Fit);

        let classes = image_classes(&cx, &node, None, &fit).await;
        assert_eq!(classes.join(), "w-16 h-16 object-contain");

        let tile = fit.clone().with_scale_mode(ScaleMode::Tile);
        let styled = background_image_classes(&cx, &node, None, &tile, "/images/photo.png").await;
        assert_eq!(
            styled.class_name(),
            "w-16 h-16 bg-[url(/images/photo.png)] bg-repeat bg-center"
        );
    }
}
