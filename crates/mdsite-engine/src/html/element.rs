use crate::error::RenderError;

use super::{attributes::Attributes, tag::Tag};

/// A node of the render tree.
///
/// Every variant validates its invariants when built, so any `Element` that
/// exists can be serialised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Leaf(Leaf),
    Image(ImageLeaf),
    Parent(Parent),
}

impl Element {
    pub fn to_html(&self) -> String {
        match self {
            Element::Leaf(leaf) => leaf.to_html(),
            Element::Image(image) => image.to_html(),
            Element::Parent(parent) => parent.to_html(),
        }
    }

    /// The element's tag, `None` for untagged text leaves.
    pub fn tag(&self) -> Option<Tag> {
        match self {
            Element::Leaf(leaf) => leaf.tag,
            Element::Image(image) => Some(image.tag),
            Element::Parent(parent) => Some(parent.tag),
        }
    }
}

impl From<Leaf> for Element {
    fn from(leaf: Leaf) -> Self {
        Element::Leaf(leaf)
    }
}

impl From<ImageLeaf> for Element {
    fn from(image: ImageLeaf) -> Self {
        Element::Image(image)
    }
}

impl From<Parent> for Element {
    fn from(parent: Parent) -> Self {
        Element::Parent(parent)
    }
}

/// A childless node holding literal text.
///
/// Without a tag the value is emitted as raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    tag: Option<Tag>,
    value: String,
    attrs: Attributes,
}

impl Leaf {
    /// # Errors
    /// [`RenderError::MalformedElement`] if `value` is empty.
    pub fn new(tag: Option<Tag>, value: impl Into<String>) -> Result<Self, RenderError> {
        Self::with_attrs(tag, value, Attributes::new())
    }

    /// An untagged text leaf.
    pub fn text(value: impl Into<String>) -> Result<Self, RenderError> {
        Self::new(None, value)
    }

    pub fn with_attrs(
        tag: Option<Tag>,
        value: impl Into<String>,
        attrs: Attributes,
    ) -> Result<Self, RenderError> {
        let value = value.into();
        if value.is_empty() {
            let tag = tag.map_or("text", Tag::as_str);
            return Err(RenderError::MalformedElement(format!(
                "{tag} leaf must have a non-empty value"
            )));
        }
        Ok(Self { tag, value, attrs })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn to_html(&self) -> String {
        match self.tag {
            None => self.value.clone(),
            Some(tag) => format!("<{tag}{}>{}</{tag}>", self.attrs.to_html(), self.value),
        }
    }
}

/// A self-closing `<img />` with a required `src` and optional `alt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLeaf {
    tag: Tag,
    attrs: Attributes,
}

impl ImageLeaf {
    pub const SRC: &'static str = "src";
    pub const ALT: &'static str = "alt";

    /// Builds an image leaf. An empty `alt` is omitted rather than emitted
    /// empty.
    ///
    /// # Errors
    /// [`RenderError::MissingAttribute`] if `src` is empty.
    pub fn new(src: impl Into<String>, alt: &str) -> Result<Self, RenderError> {
        let src = src.into();
        if src.is_empty() {
            return Err(RenderError::MissingAttribute {
                tag: Tag::Img.as_str(),
                attribute: Self::SRC,
            });
        }
        let mut attrs = Attributes::new().with(Self::SRC, src);
        if !alt.is_empty() {
            attrs.insert(Self::ALT, alt);
        }
        Ok(Self {
            tag: Tag::Img,
            attrs,
        })
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn to_html(&self) -> String {
        format!("<{}{} />", self.tag, self.attrs.to_html())
    }
}

/// A tagged node whose output is its children's output in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parent {
    tag: Tag,
    children: Vec<Element>,
    attrs: Attributes,
}

impl Parent {
    /// # Errors
    /// [`RenderError::MalformedElement`] if `children` is empty.
    pub fn new(tag: Tag, children: Vec<Element>) -> Result<Self, RenderError> {
        Self::with_attrs(tag, children, Attributes::new())
    }

    pub fn with_attrs(
        tag: Tag,
        children: Vec<Element>,
        attrs: Attributes,
    ) -> Result<Self, RenderError> {
        if children.is_empty() {
            return Err(RenderError::MalformedElement(format!(
                "<{tag}> must have at least one child"
            )));
        }
        Ok(Self {
            tag,
            children,
            attrs,
        })
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn to_html(&self) -> String {
        let mut html = format!("<{}{}>", self.tag, self.attrs.to_html());
        for child in &self.children {
            html.push_str(&child.to_html());
        }
        html.push_str(&format!("</{}>", self.tag));
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(tag: Tag, value: &str) -> Element {
        Leaf::new(Some(tag), value).unwrap().into()
    }

    #[test]
    fn leaf_with_tag() {
        let node = Leaf::new(Some(Tag::P), "Hello World").unwrap();
        assert_eq!(node.to_html(), "<p>Hello World</p>");
    }

    #[test]
    fn leaf_without_tag_is_raw_text() {
        let node = Leaf::text("Just a text node").unwrap();
        assert_eq!(node.value(), "Just a text node");
        assert_eq!(node.to_html(), "Just a text node");
    }

    #[test]
    fn leaf_text_is_not_escaped() {
        let node = Leaf::text("Special & Characters < > \" '").unwrap();
        assert_eq!(node.to_html(), "Special & Characters < > \" '");
    }

    #[test]
    fn leaf_with_attributes() {
        let attrs = Attributes::new()
            .with("href", "https://www.google.com")
            .with("target", "_blank");
        let node = Leaf::with_attrs(Some(Tag::A), "Visit Google", attrs).unwrap();
        assert_eq!(
            node.to_html(),
            "<a href=\"https://www.google.com\" target=\"_blank\">Visit Google</a>"
        );
    }

    #[test]
    fn empty_leaf_value_is_malformed() {
        assert!(matches!(
            Leaf::new(Some(Tag::P), ""),
            Err(RenderError::MalformedElement(_))
        ));
    }

    #[test]
    fn image_renders_self_closing() {
        let image = ImageLeaf::new("https://example.com/image.png", "Image Description").unwrap();
        assert_eq!(
            image.to_html(),
            "<img src=\"https://example.com/image.png\" alt=\"Image Description\" />"
        );
    }

    #[test]
    fn image_without_alt_omits_attribute() {
        let image = ImageLeaf::new("https://example.com/image.png", "").unwrap();
        assert_eq!(image.attrs().get(ImageLeaf::ALT), None);
        assert_eq!(
            image.to_html(),
            "<img src=\"https://example.com/image.png\" />"
        );
    }

    #[test]
    fn image_whitespace_alt_is_kept() {
        let image = ImageLeaf::new("https://example.com/image.png", "   ").unwrap();
        assert_eq!(image.attrs().get(ImageLeaf::ALT), Some("   "));
    }

    #[test]
    fn image_without_src_is_missing_attribute() {
        assert_eq!(
            ImageLeaf::new("", "alt"),
            Err(RenderError::MissingAttribute {
                tag: "img",
                attribute: "src",
            })
        );
    }

    #[test]
    fn parent_concatenates_children() {
        let node = Parent::new(
            Tag::Div,
            vec![leaf(Tag::B, "Child Node 1"), leaf(Tag::I, "Child Node 2")],
        )
        .unwrap();
        assert_eq!(
            node.to_html(),
            "<div><b>Child Node 1</b><i>Child Node 2</i></div>"
        );
    }

    #[test]
    fn parent_with_attributes() {
        let node = Parent::with_attrs(
            Tag::Div,
            vec![leaf(Tag::Code, "x")],
            Attributes::new().with("class", "container"),
        )
        .unwrap();
        assert_eq!(node.to_html(), "<div class=\"container\"><code>x</code></div>");
    }

    #[test]
    fn parent_non_ascii_child() {
        let node = Parent::new(Tag::Div, vec![leaf(Tag::B, "子节点")]).unwrap();
        assert_eq!(node.to_html(), "<div><b>子节点</b></div>");
    }

    #[test]
    fn parent_mixed_children() {
        let text: Element = Leaf::text("see ").unwrap().into();
        let image: Element = ImageLeaf::new("i.png", "").unwrap().into();
        let inner: Element = Parent::new(Tag::Li, vec![leaf(Tag::B, "item")])
            .unwrap()
            .into();
        let node = Parent::new(Tag::Div, vec![text, image, inner]).unwrap();
        assert_eq!(node.children().len(), 3);
        assert_eq!(
            node.to_html(),
            "<div>see <img src=\"i.png\" /><li><b>item</b></li></div>"
        );
    }

    #[test]
    fn deep_nesting() {
        let mut node = leaf(Tag::B, "Level 10");
        for _ in 0..9 {
            node = Parent::new(Tag::Div, vec![node]).unwrap().into();
        }
        assert_eq!(
            node.to_html(),
            format!("{}<b>Level 10</b>{}", "<div>".repeat(9), "</div>".repeat(9))
        );
    }

    #[test]
    fn parent_without_children_is_malformed() {
        let err = Parent::new(Tag::Ul, vec![]).unwrap_err();
        assert_eq!(
            err,
            RenderError::MalformedElement("<ul> must have at least one child".to_string())
        );
    }

    #[test]
    fn element_tag() {
        assert_eq!(Element::from(Leaf::text("x").unwrap()).tag(), None);
        assert_eq!(leaf(Tag::I, "x").tag(), Some(Tag::I));
    }
}
