//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Text codec configuration shared by range, multirange and array literals.
///
/// Every field has a default matching PostgreSQL's own output, so an empty
/// YAML document yields `CodecConfig::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Delimiter between array elements (default: ","). PostgreSQL's `box`
    /// type uses ";".
    #[serde(default = "default_array_delimiter")]
    pub array_delimiter: char,

    /// Accept `EMPTY`, `Empty`, ... as the empty range (default: true).
    /// When false only the lowercase `empty` spelling is recognized.
    #[serde(default = "default_true")]
    pub case_insensitive_empty: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            array_delimiter: default_array_delimiter(),
            case_insensitive_empty: default_true(),
        }
    }
}

impl CodecConfig {
    /// Returns a copy with a different array delimiter.
    pub fn with_array_delimiter(mut self, delimiter: char) -> Self {
        self.array_delimiter = delimiter;
        self
    }

    /// Whether `text` spells the empty range under this configuration.
    pub fn is_empty_literal(&self, text: &str) -> bool {
        if self.case_insensitive_empty {
            text.eq_ignore_ascii_case("empty")
        } else {
            text == "empty"
        }
    }
}

fn default_array_delimiter() -> char {
    ','
}

fn default_true() -> bool {
    true
}
