use super::{
    cursor::Cursor,
    kinds::{Image, Link},
    types::Span,
};

/// Rewrites `![alt](url)` inside plain spans into image spans.
///
/// Must run before [`extract_links`], otherwise the link scanner would claim
/// the bracketed alt text and leave a stray `!` behind.
pub fn extract_images(spans: Vec<Span>) -> Vec<Span> {
    rewrite_plain(spans, try_parse_image)
}

/// Rewrites `[text](url)` inside plain spans into link spans.
pub fn extract_links(spans: Vec<Span>) -> Vec<Span> {
    rewrite_plain(spans, try_parse_link)
}

/// A construct found by a scanner, with its byte range in the span text.
struct Found {
    start: usize,
    end: usize,
    span: Span,
}

type TryParse = fn(&mut Cursor<'_>) -> Option<Span>;

fn rewrite_plain(spans: Vec<Span>, try_parse: TryParse) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let found = scan(span.text(), try_parse);
        if found.is_empty() {
            out.push(span);
            continue;
        }

        let text = span.text();
        let mut last_end = 0;
        for f in found {
            push_plain(&mut out, &text[last_end..f.start]);
            out.push(f.span);
            last_end = f.end;
        }
        push_plain(&mut out, &text[last_end..]);
    }

    out
}

/// Text around a match is kept unless it is whitespace only.
fn push_plain(out: &mut Vec<Span>, text: &str) {
    if !text.trim().is_empty() {
        out.push(Span::plain(text));
    }
}

/// Finds every non-overlapping construct, scanning left to right.
fn scan(text: &str, try_parse: TryParse) -> Vec<Found> {
    let mut cur = Cursor::new(text);
    let mut found = vec![];

    while !cur.eof() {
        let start = cur.pos();
        if let Some(span) = try_parse(&mut cur) {
            found.push(Found {
                start,
                end: cur.pos(),
                span,
            });
            continue;
        }
        cur.bump();
    }

    found
}

/// Attempts to parse an image starting at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_image(cur: &mut Cursor<'_>) -> Option<Span> {
    if !cur.starts_with(Image::OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Image::OPEN.len());
    let alt_start = cur.pos();

    let Some(alt_len) = cur.find(Image::ALT_CLOSE) else {
        *cur = saved;
        return None;
    };
    let alt = cur.slice(alt_start, alt_start + alt_len);
    cur.bump_n(alt_len + Image::ALT_CLOSE.len());

    let Some(url) = take_url(cur) else {
        *cur = saved;
        return None;
    };

    Some(Span::image(alt, url))
}

/// Attempts to parse a link starting at the current position.
///
/// Link text is bracket-matched with a depth limit of
/// [`Link::MAX_DEPTH`]; deeper nesting fails at this position and the scan
/// moves on. On failure, cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<Span> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let text_start = cur.pos();

    let mut depth = 1usize;
    while depth > 0 {
        match cur.bump() {
            Some(Link::OPEN) => {
                depth += 1;
                if depth > Link::MAX_DEPTH {
                    *cur = saved;
                    return None;
                }
            }
            Some(Link::CLOSE) => depth -= 1,
            Some(_) => {}
            None => {
                // Not closed, restore cursor
                *cur = saved;
                return None;
            }
        }
    }
    let text_end = cur.pos() - 1; // before the closing ]

    if cur.peek() != Some(Link::URL_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump(); // (

    let Some(url) = take_url(cur) else {
        *cur = saved;
        return None;
    };

    Some(Span::link(cur.slice(text_start, text_end), url))
}

/// Consumes a non-empty URL up to the nearest `)`, and the `)` itself.
fn take_url<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    let start = cur.pos();
    let len = cur.find(&[Link::URL_CLOSE])?;
    if len == 0 {
        return None;
    }
    cur.bump_n(len + 1);
    Some(cur.slice(start, start + len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_link() {
        let spans = extract_links(vec![Span::plain(
            "This is text with a [link](https://example.com) inside",
        )]);
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with a "),
                Span::link("link", "https://example.com"),
                Span::plain(" inside"),
            ]
        );
    }

    #[test]
    fn split_image() {
        let spans = extract_images(vec![Span::plain(
            "This is text with an ![image](https://example.com/image.png) inside",
        )]);
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with an "),
                Span::image("image", "https://example.com/image.png"),
                Span::plain(" inside"),
            ]
        );
    }

    #[test]
    fn only_link() {
        let spans = extract_links(vec![Span::plain("[link](https://example.com)")]);
        assert_eq!(spans, vec![Span::link("link", "https://example.com")]);
    }

    #[test]
    fn images_then_links_with_typed_span() {
        let spans = vec![
            Span::plain(
                "This is a [link](https://example.com) and an ![image](https://example.com/image.png)",
            ),
            Span::new("This is already bold", crate::parsing::inline::SpanKind::Bold),
        ];
        let spans = extract_links(extract_images(spans));
        assert_eq!(
            spans,
            vec![
                Span::plain("This is a "),
                Span::link("link", "https://example.com"),
                Span::plain(" and an "),
                Span::image("image", "https://example.com/image.png"),
                Span::new("This is already bold", crate::parsing::inline::SpanKind::Bold),
            ]
        );
    }

    #[test]
    fn empty_alt_text_image() {
        let spans = extract_images(vec![Span::plain("![](https://example.com/image.png)")]);
        assert_eq!(spans, vec![Span::image("", "https://example.com/image.png")]);
    }

    #[test]
    fn consecutive_links_and_images() {
        let spans = extract_links(extract_images(vec![Span::plain(
            "[link1](https://example1.com)![image1](https://example1.com/image1.png)[link2](https://example2.com)![image2](https://example2.com/image2.png)",
        )]));
        assert_eq!(
            spans,
            vec![
                Span::link("link1", "https://example1.com"),
                Span::image("image1", "https://example1.com/image1.png"),
                Span::link("link2", "https://example2.com"),
                Span::image("image2", "https://example2.com/image2.png"),
            ]
        );
    }

    #[test]
    fn nested_brackets_in_link() {
        let spans = extract_links(vec![Span::plain(
            "[link with [nested brackets]](https://example.com)",
        )]);
        assert_eq!(
            spans,
            vec![Span::link(
                "link with [nested brackets]",
                "https://example.com"
            )]
        );
    }

    #[test]
    fn nested_brackets_in_image() {
        let spans = extract_images(vec![Span::plain(
            "This is an ![image with [nested brackets]](https://example.com/image.png)",
        )]);
        assert_eq!(
            spans,
            vec![
                Span::plain("This is an "),
                Span::image(
                    "image with [nested brackets]",
                    "https://example.com/image.png"
                ),
            ]
        );
    }

    #[test]
    fn two_levels_of_nesting_is_not_a_link() {
        let span = Span::plain("[a [b [c]]](https://example.com)");
        assert_eq!(extract_links(vec![span.clone()]), vec![span]);
    }

    #[test]
    fn brackets_without_destination_stay_plain() {
        let span = Span::plain("This is a text with [brackets] but no link or ![image]");
        assert_eq!(
            extract_images(extract_links(vec![span.clone()])),
            vec![span]
        );
    }

    #[test]
    fn empty_url_is_not_a_link() {
        let span = Span::plain("[text]() and ![alt]()");
        assert_eq!(extract_links(extract_images(vec![span.clone()])), vec![span]);
    }

    #[test]
    fn special_characters_in_link_text() {
        let spans = extract_links(vec![Span::plain(
            "This is a [link with special characters !@#$%^&*()](https://example.com/#)",
        )]);
        assert_eq!(
            spans,
            vec![
                Span::plain("This is a "),
                Span::link(
                    "link with special characters !@#$%^&*()",
                    "https://example.com/#"
                ),
            ]
        );
    }

    #[test]
    fn brackets_in_text_before_link() {
        let spans = extract_links(vec![Span::plain(
            "Use array[0] and then [real link](https://example.com)",
        )]);
        assert_eq!(
            spans,
            vec![
                Span::plain("Use array[0] and then "),
                Span::link("real link", "https://example.com"),
            ]
        );
    }

    #[test]
    fn parentheses_in_text_before_link() {
        let spans = extract_links(vec![Span::plain(
            "Call func() then [link](https://example.com)",
        )]);
        assert_eq!(
            spans,
            vec![
                Span::plain("Call func() then "),
                Span::link("link", "https://example.com"),
            ]
        );
    }

    #[test]
    fn url_stops_at_first_close_paren() {
        let spans = extract_links(vec![Span::plain("[wiki](https://x.org/a_(b)) tail")]);
        assert_eq!(
            spans,
            vec![
                Span::link("wiki", "https://x.org/a_(b"),
                Span::plain(") tail"),
            ]
        );
    }

    #[test]
    fn whitespace_between_matches_is_dropped() {
        let spans = extract_links(vec![Span::plain(
            "[a](https://a.example) [b](https://b.example)",
        )]);
        assert_eq!(
            spans,
            vec![
                Span::link("a", "https://a.example"),
                Span::link("b", "https://b.example"),
            ]
        );
    }

    #[test]
    fn link_pass_skips_image_spans() {
        let spans = extract_links(vec![Span::image("[x](y)", "https://example.com/i.png")]);
        assert_eq!(spans, vec![Span::image("[x](y)", "https://example.com/i.png")]);
    }
}
