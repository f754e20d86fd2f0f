//! Compiled fragments and the assets they carry.
//!
//! A [`Fragment`] is either a tag assembled field by field or raw markup the
//! host produced. The two never mix.

use compact_str::CompactString;
use smallvec::SmallVec;

// =============================================================================
// Assets
// =============================================================================

/// An image extracted from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageInfo {
    /// Node name the image was found on.
    pub name: String,
    /// Host image handle.
    pub source_handle: String,
    /// Path referenced from the markup.
    pub reference_path: String,
    /// `data:` URI of the bytes, empty when the host had none.
    pub inline_data_uri: String,
}

/// A named color surfaced from a bound variable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorInfo {
    pub name: String,
    pub hex: String,
}

impl ColorInfo {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }
}

/// Images, colors and stylesheet text of a compiled subtree.
///
/// Entries are not deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetBundle {
    pub images: Vec<ImageInfo>,
    pub colors: Vec<ColorInfo>,
    pub stylesheet: String,
}

// =============================================================================
// Attributes
// =============================================================================

/// Attribute value: bare presence or quoted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Present,
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: CompactString,
    pub value: AttrValue,
}

impl Attr {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: CompactString::new(name),
            value: AttrValue::Text(value.into()),
        }
    }

    pub fn present(name: &str) -> Self {
        Self {
            name: CompactString::new(name),
            value: AttrValue::Present,
        }
    }
}

pub type Attrs = SmallVec<[Attr; 2]>;

// =============================================================================
// Fragment
// =============================================================================

/// A tag assembled from classes, attributes and children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagFragment {
    pub tag: CompactString,
    pub class_name: String,
    /// Stylesheet text this node contributes.
    pub styles: String,
    pub attrs: Attrs,
    pub content: Option<String>,
    /// Fragments generated by this node itself, not scene children.
    pub children: Vec<Generated>,
}

impl TagFragment {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: CompactString::new(tag),
            ..Default::default()
        }
    }

    pub fn class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn attr(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Tag(TagFragment),
    /// Pre-rendered markup, emitted verbatim.
    Html(String),
}

impl Fragment {
    pub fn as_tag(&self) -> Option<&TagFragment> {
        match self {
            Fragment::Tag(tag) => Some(tag),
            Fragment::Html(_) => None,
        }
    }

    pub fn as_html(&self) -> Option<&str> {
        match self {
            Fragment::Html(html) => Some(html),
            Fragment::Tag(_) => None,
        }
    }

    /// Stylesheet text of the node itself.
    pub fn styles(&self) -> &str {
        match self {
            Fragment::Tag(tag) => &tag.styles,
            Fragment::Html(_) => "",
        }
    }
}

/// Full output of one node's deferred phase.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub fragment: Fragment,
    pub images: Vec<ImageInfo>,
    pub colors: Vec<ColorInfo>,
}

impl Generated {
    pub fn tag(fragment: TagFragment) -> Self {
        Self {
            fragment: Fragment::Tag(fragment),
            images: Vec::new(),
            colors: Vec::new(),
        }
    }

    pub fn html(markup: impl Into<String>) -> Self {
        Self {
            fragment: Fragment::Html(markup.into()),
            images: Vec::new(),
            colors: Vec::new(),
        }
    }

    pub fn with_images(mut self, images: Vec<ImageInfo>) -> Self {
        self.images = images;
        self
    }

    pub fn with_colors(mut self, colors: Vec<ColorInfo>) -> Self {
        self.colors = colors;
        self
    }

    /// Images of nested fragments first, then this fragment's own.
    pub fn collect_images(&self) -> Vec<ImageInfo> {
        let mut images = Vec::new();
        self.collect_images_into(&mut images);
        images
    }

    fn collect_images_into(&self, out: &mut Vec<ImageInfo>) {
        if let Fragment::Tag(tag) = &self.fragment {
            for child in &tag.children {
                child.collect_images_into(out);
            }
        }
        out.extend(self.images.iter().cloned());
    }

    /// Colors of nested fragments first, then this fragment's own.
    pub fn collect_colors(&self) -> Vec<ColorInfo> {
        let mut colors = Vec::new();
        self.collect_colors_into(&mut colors);
        colors
    }

    fn collect_colors_into(&self, out: &mut Vec<ColorInfo>) {
        if let Fragment::Tag(tag) = &self.fragment {
            for child in &tag.children {
                child.collect_colors_into(out);
            }
        }
        out.extend(self.colors.iter().cloned());
    }
}
