//! Text transforms applied to raw method descriptions
//!
//! Everything here is pure: no I/O, no shared state.
//!
//! Copyright (c) 2025 Rpcdoc Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker that identifies a "toolname: `command`" alias line.
pub const ALIAS_MARKER: &str = ": `";

/// Outcome of matching a description against the alias-line convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasMatch {
    /// Whether the first line was recognized as an alias line and dropped
    pub stripped: bool,
    /// The description with the alias line removed, or the input unchanged
    pub text: String,
}

/// Match the first line of `text` against the alias-line convention.
///
/// Any first line containing [`ALIAS_MARKER`] counts as an alias line, so a
/// genuine sentence such as "Note: `foo` is required" at the top of a
/// description is dropped too. Lines are split on `\n` only.
pub fn match_leading_alias(text: &str) -> AliasMatch {
    match text.split_once('\n') {
        Some((first, rest)) if first.contains(ALIAS_MARKER) => AliasMatch {
            stripped: true,
            text: rest.to_string(),
        },
        None if text.contains(ALIAS_MARKER) => AliasMatch {
            stripped: true,
            text: String::new(),
        },
        _ => AliasMatch {
            stripped: false,
            text: text.to_string(),
        },
    }
}

/// Drop a leading "toolname: `command`" line from a description
pub fn strip_leading_alias(text: &str) -> String {
    match_leading_alias(text).text
}

/// Case-insensitive check for the word "deprecated" anywhere in the text.
///
/// Negations ("not deprecated") still match.
pub fn is_deprecated(description: &str) -> bool {
    description.to_lowercase().contains("deprecated")
}

/// Transport shape of a method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamingDirection {
    /// Unary call
    None,
    /// Client streams requests
    Client,
    /// Server streams responses
    Server,
    /// Both sides stream
    Bidirectional,
}

impl StreamingDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            StreamingDirection::None => "none",
            StreamingDirection::Client => "client",
            StreamingDirection::Server => "server",
            StreamingDirection::Bidirectional => "bidirectional",
        }
    }

    pub fn is_streaming(self) -> bool {
        self != StreamingDirection::None
    }
}

impl fmt::Display for StreamingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify the streaming direction from the two transport flags.
pub fn classify_streaming(request_streaming: bool, response_streaming: bool) -> StreamingDirection {
    // Both flags first, so a bidirectional method never reads as one-sided.
    match (request_streaming, response_streaming) {
        (true, true) => StreamingDirection::Bidirectional,
        (false, true) => StreamingDirection::Server,
        (true, false) => StreamingDirection::Client,
        (false, false) => StreamingDirection::None,
    }
}
