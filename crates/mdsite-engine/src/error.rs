use thiserror::Error;

/// Errors that abort a single render call.
///
/// Every variant is fatal to the document that raised it; there is no
/// partial-result recovery inside one document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// An inline delimiter occurred an odd number of times in a text run.
    #[error(
        "Did not find an even number of `{delimiter}` in {text:?}: opening and closing delimiters must come in pairs"
    )]
    Syntax {
        delimiter: &'static str,
        text: String,
    },

    #[error("No level-1 heading (`# Title`) found to use as the document title")]
    MissingTitle,

    /// A leaf without a value or a parent without children.
    #[error("Malformed element: {0}")]
    MalformedElement(String),

    #[error("<{tag}> element is missing required attribute `{attribute}`")]
    MissingAttribute {
        tag: &'static str,
        attribute: &'static str,
    },
}
