use std::fmt;

/// Every HTML tag the renderer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Per-block container.
    Div,
    P,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Pre,
    Code,
    Blockquote,
    Ul,
    Ol,
    Li,
    B,
    I,
    A,
    Img,
}

impl Tag {
    /// The heading tag for `level`, if it is within 1-6.
    pub fn heading(level: u8) -> Option<Tag> {
        match level {
            1 => Some(Tag::H1),
            2 => Some(Tag::H2),
            3 => Some(Tag::H3),
            4 => Some(Tag::H4),
            5 => Some(Tag::H5),
            6 => Some(Tag::H6),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::P => "p",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::H4 => "h4",
            Tag::H5 => "h5",
            Tag::H6 => "h6",
            Tag::Pre => "pre",
            Tag::Code => "code",
            Tag::Blockquote => "blockquote",
            Tag::Ul => "ul",
            Tag::Ol => "ol",
            Tag::Li => "li",
            Tag::B => "b",
            Tag::I => "i",
            Tag::A => "a",
            Tag::Img => "img",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
