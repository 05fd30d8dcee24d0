use crate::artifacts::submission::STEP_KEY_REGEX;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::LazyLock;

static STEP_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(STEP_KEY_REGEX).expect("step key regex is a valid constant pattern")
});
static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("number regex is a valid constant pattern"));

/// A step identifier in its canonical `step<N>` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StepKey(String);

impl StepKey {
    /// Accepts `step<N>` as is and otherwise takes the first run of digits, so
    /// `"Step 03"` becomes `step03`. Returns `None` when there is no number at all.
    pub fn parse(key: &str) -> Option<Self> {
        if STEP_KEY.is_match(key) {
            return Some(Self(key.to_string()));
        }

        FIRST_NUMBER
            .find(key)
            .map(|number| Self(format!("step{}", number.as_str())))
    }

    /// Like [`StepKey::parse`], also accepting a bare JSON integer.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => number.as_u64().map(|n| Self(format!("step{n}"))),
            Value::String(key) => Self::parse(key),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<u64> {
        STEP_KEY
            .captures(&self.0)
            .and_then(|captures| captures.get(1))
            .and_then(|digits| digits.as_str().parse().ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for StepKey {
    // numeric order, unnumbered keys last
    fn cmp(&self, other: &Self) -> Ordering {
        let rank = |key: &Self| key.number().unwrap_or(u64::MAX);
        rank(self)
            .cmp(&rank(other))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for StepKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for StepKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
