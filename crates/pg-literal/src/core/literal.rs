//! Element quoting and splitting for composite literals.
//!
//! Range and array literals embed element text between delimiters. Element
//! text that would collide with the surrounding syntax is wrapped in double
//! quotes, with embedded quotes and backslashes escaped:
//!
//! - Range literals double them (`"` becomes `""`), as PostgreSQL's
//!   `range_out` does.
//! - Array literals backslash-escape them (`"` becomes `\"`), as
//!   `array_out` does.
//!
//! Backslash escapes are accepted by both parsers.

/// How quotes and backslashes are escaped inside a quoted element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `""` inside quotes is a literal quote (range literals).
    Doubled,
    /// Backslash escapes only (array literals).
    Backslash,
}

/// One element produced by [`split_elements`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Element text with quoting and escapes removed.
    pub text: String,
    /// Whether any part of the element was quoted.
    pub quoted: bool,
}

/// Wrap `text` in double quotes, escaping quotes and backslashes.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(quote("a,b", QuoteStyle::Doubled), "\"a,b\"");
/// assert_eq!(quote("say \"hi\"", QuoteStyle::Backslash), "\"say \\\"hi\\\"\"");
/// ```
pub fn quote(text: &str, style: QuoteStyle) -> String {
    let mut result = String::with_capacity(text.len() + 2);
    result.push('"');
    for c in text.chars() {
        match (c, style) {
            ('"', QuoteStyle::Doubled) => result.push_str("\"\""),
            ('\\', QuoteStyle::Doubled) => result.push_str("\\\\"),
            ('"', QuoteStyle::Backslash) => result.push_str("\\\""),
            ('\\', QuoteStyle::Backslash) => result.push_str("\\\\"),
            _ => result.push(c),
        }
    }
    result.push('"');
    result
}

/// Quote `text` when it is empty or any character matches `special`.
pub fn quote_if(text: &str, style: QuoteStyle, special: impl Fn(char) -> bool) -> String {
    if text.is_empty() || text.chars().any(special) {
        quote(text, style)
    } else {
        text.to_string()
    }
}

/// Split `input` on `delimiter` outside double quotes, removing quoting and
/// escapes.
///
/// With `trim_unquoted`, whitespace outside quotes at either end of an
/// element is dropped (array semantics); otherwise it is kept verbatim (range
/// semantics). Returns `None` for an unterminated quote or a trailing
/// backslash.
pub fn split_elements(
    input: &str,
    delimiter: char,
    style: QuoteStyle,
    trim_unquoted: bool,
) -> Option<Vec<Element>> {
    let mut elements = Vec::new();
    let mut current = Element {
        text: String::new(),
        quoted: false,
    };
    // Whitespace seen outside quotes, kept only if more element text follows.
    let mut pending = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '\\' => current.text.push(chars.next()?),
                '"' if style == QuoteStyle::Doubled && chars.peek() == Some(&'"') => {
                    chars.next();
                    current.text.push('"');
                }
                '"' => in_quotes = false,
                _ => current.text.push(c),
            }
            continue;
        }

        if c == delimiter {
            elements.push(std::mem::replace(
                &mut current,
                Element {
                    text: String::new(),
                    quoted: false,
                },
            ));
            pending.clear();
            continue;
        }

        if trim_unquoted && c.is_whitespace() {
            if !current.text.is_empty() || current.quoted {
                pending.push(c);
            }
            continue;
        }

        current.text.push_str(&pending);
        pending.clear();
        match c {
            '\\' => current.text.push(chars.next()?),
            '"' => {
                in_quotes = true;
                current.quoted = true;
            }
            _ => current.text.push(c),
        }
    }

    if in_quotes {
        return None;
    }
    elements.push(current);
    Some(elements)
}

/// Whether `input` has a character matching `special` outside quotes that is
/// not backslash-escaped.
pub fn has_unquoted(input: &str, special: impl Fn(char) -> bool) -> bool {
    let mut in_quotes = false;
    let mut escaped = false;
    for c in input.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            // A doubled quote toggles twice and leaves the state unchanged.
            '"' => in_quotes = !in_quotes,
            c if !in_quotes && special(c) => return true,
            _ => {}
        }
    }
    false
}
