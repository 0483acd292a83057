//! One-dimensional array text codec.
//!
//! ```text
//! {1,2,3}
//! {NULL,"NULL",""}
//! {"[1,5)","(2,3]"}
//! {"say \"hi\"","back\\slash"}
//! ```
//!
//! Elements are joined with the configured delimiter. An element is quoted
//! when it is empty, spells `NULL` in any case, or contains the delimiter,
//! a brace, a quote, a backslash or whitespace. Inside quotes `"` and `\`
//! are backslash-escaped. Unquoted `NULL` decodes to `None`.

use tracing::debug;

use crate::config::CodecConfig;
use crate::core::literal::{has_unquoted, quote, split_elements, QuoteStyle};
use crate::error::{ParseError, Result};

const TYPE_NAME: &str = "array";

/// Encode elements as array text. `None` becomes `NULL`.
pub fn encode_array<I, S>(items: I, config: &CodecConfig) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let delimiter = config.array_delimiter;
    let mut result = String::from("{");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            result.push(delimiter);
        }
        match item {
            None => result.push_str("NULL"),
            Some(text) => {
                let text = text.as_ref();
                if needs_quotes(text, delimiter) {
                    result.push_str(&quote(text, QuoteStyle::Backslash));
                } else {
                    result.push_str(text);
                }
            }
        }
    }
    result.push('}');
    result
}

fn needs_quotes(text: &str, delimiter: char) -> bool {
    text.is_empty()
        || text.eq_ignore_ascii_case("NULL")
        || text
            .chars()
            .any(|c| c == delimiter || matches!(c, '{' | '}' | '"' | '\\') || c.is_whitespace())
}

/// Decode array text into element texts. Unquoted `NULL` becomes `None`.
///
/// Only one-dimensional arrays are accepted; an unquoted brace inside the
/// outer pair is rejected.
pub fn decode_array(text: &str, config: &CodecConfig) -> Result<Vec<Option<String>>> {
    let result = decode(text, config);
    if let Err(err) = &result {
        debug!(input = text, code = err.code(), "rejected array literal");
    }
    result
}

fn decode(text: &str, config: &CodecConfig) -> Result<Vec<Option<String>>> {
    let invalid = || ParseError::invalid_string(TYPE_NAME, text);
    let body = text
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(invalid)?;

    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    if has_unquoted(body, |c| matches!(c, '{' | '}')) {
        return Err(invalid());
    }

    let elements = split_elements(body, config.array_delimiter, QuoteStyle::Backslash, true)
        .ok_or_else(invalid)?;
    elements
        .into_iter()
        .map(|element| {
            if element.quoted {
                Ok(Some(element.text))
            } else if element.text.is_empty() {
                Err(invalid())
            } else if element.text.eq_ignore_ascii_case("NULL") {
                Ok(None)
            } else {
                Ok(Some(element.text))
            }
        })
        .collect()
}
