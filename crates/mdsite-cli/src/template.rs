//! Page templates with `{{ Title }}` and `{{ Content }}` placeholders.

pub const TITLE: &str = "{{ Title }}";
pub const CONTENT: &str = "{{ Content }}";

/// Used when neither the command line nor the config names a template.
pub const DEFAULT_TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<title>{{ Title }}</title>
</head>
<body>
<article>
{{ Content }}
</article>
</body>
</html>
"#;

/// Replaces every placeholder in a single left-to-right pass.
///
/// Substituted text is never rescanned, so a title containing
/// `{{ Content }}` stays literal.
pub fn render(template: &str, title: &str, content: &str) -> String {
    let mut out = String::with_capacity(template.len() + title.len() + content.len());
    let mut rest = template;

    loop {
        let next = [(TITLE, title), (CONTENT, content)]
            .into_iter()
            .filter_map(|(placeholder, value)| {
                rest.find(placeholder).map(|at| (at, placeholder, value))
            })
            .min_by_key(|(at, _, _)| *at);

        let Some((at, placeholder, value)) = next else {
            out.push_str(rest);
            return out;
        };
        out.push_str(&rest[..at]);
        out.push_str(value);
        rest = &rest[at + placeholder.len()..];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn substitutes_both_placeholders() {
        let page = render(
            "<title>{{ Title }}</title><main>{{ Content }}</main>",
            "Home",
            "<div><p>hi</p></div>",
        );
        assert_eq!(page, "<title>Home</title><main><div><p>hi</p></div></main>");
    }

    #[test]
    fn substitutes_every_occurrence() {
        let page = render("{{ Title }} | {{ Title }}", "T", "");
        assert_eq!(page, "T | T");
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        let page = render("{{ Title }}:{{ Content }}", "{{ Content }}", "body");
        assert_eq!(page, "{{ Content }}:body");
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        assert_eq!(render("<p>static</p>", "T", "C"), "<p>static</p>");
    }

    #[test]
    fn default_template_has_both_placeholders() {
        assert!(DEFAULT_TEMPLATE.contains(TITLE));
        assert!(DEFAULT_TEMPLATE.contains(CONTENT));
        let page = render(DEFAULT_TEMPLATE, "Hello", "<div><h1>Hello</h1></div>");
        assert!(page.contains("<title>Hello</title>"));
        assert!(page.contains("<article>\n<div><h1>Hello</h1></div>\n</article>"));
    }
}
