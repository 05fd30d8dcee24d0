use std::ops::Deref;

/// Lines of a text blob, split on `\n`, `\r\n` or `\r`.
///
/// A trailing newline yields a trailing empty line, so `"a\n"` becomes
/// `["a", ""]` and the empty string becomes `[""]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSequence(Vec<String>);

impl LineSequence {
    pub fn from_text(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        Self(normalized.split('\n').map(str::to_string).collect())
    }

    /// True for the sequence produced by splitting an empty blob.
    pub fn is_blank(&self) -> bool {
        self.0.len() == 1 && self.0[0].is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }
}

impl Deref for LineSequence {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for LineSequence {
    fn from(lines: Vec<String>) -> Self {
        Self(lines)
    }
}
