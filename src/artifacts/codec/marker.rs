use crate::artifacts::codec::{MARKER_LINE_REGEX, normalize_file_name};
use regex::Regex;
use std::sync::LazyLock;

static MARKER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(MARKER_LINE_REGEX).expect("marker line regex is a valid constant pattern")
});

/// A `// --- file: <name> ---` line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileMarker(String);

impl FileMarker {
    /// Recognizes a marker line, tolerating surrounding whitespace, extra dashes and
    /// any letter case. Anything else (including a marker missing its closing
    /// dashes) is ordinary content.
    pub fn parse(line: &str) -> Option<Self> {
        MARKER_LINE
            .captures(line.trim())
            .and_then(|captures| captures.get(1))
            .map(|token| Self(token.as_str().to_string()))
    }

    /// The token exactly as written, e.g. `./player.js`.
    pub fn token(&self) -> &str {
        &self.0
    }

    /// The token with a leading `./` removed.
    pub fn file_name(&self) -> &str {
        normalize_file_name(&self.0)
    }

    pub fn line_for(file_name: &str) -> String {
        format!("// --- file: {file_name} ---")
    }
}

impl std::fmt::Display for FileMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Self::line_for(&self.0))
    }
}

pub fn contains_marker(text: &str) -> bool {
    text.lines().any(|line| FileMarker::parse(line).is_some())
}
