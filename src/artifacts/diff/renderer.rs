use crate::artifacts::diff::diff_algorithm::{DiffOutcome, Edit};
use crate::artifacts::diff::line_sequence::LineSequence;
use colored::Colorize;
use derive_new::new;

pub const NO_DIFFERENCES: &str = "(no differences)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Equal,
    Add,
    Delete,
}

impl RowKind {
    pub fn marker(self) -> char {
        match self {
            RowKind::Equal => ' ',
            RowKind::Add => '+',
            RowKind::Delete => '-',
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RowKind::Equal => "diffEq",
            RowKind::Add => "diffAdd",
            RowKind::Delete => "diffDel",
        }
    }
}

impl<T> From<&Edit<T>> for RowKind {
    fn from(edit: &Edit<T>) -> Self {
        match edit {
            Edit::Equal { .. } => RowKind::Equal,
            Edit::Add { .. } => RowKind::Add,
            Edit::Delete { .. } => RowKind::Delete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffRow {
    pub kind: RowKind,
    pub text: String,
}

impl DiffRow {
    fn sentinel(text: impl Into<String>) -> Self {
        Self::new(RowKind::Equal, text.into())
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="diffLine {}"><span class="diffSign">{}</span><span>{}</span></div>"#,
            self.kind.css_class(),
            self.kind.marker(),
            escape_html(&self.text)
        )
    }

    pub fn to_colored(&self) -> String {
        let line = format!("{}{}", self.kind.marker(), self.text);
        match self.kind {
            RowKind::Equal => line,
            RowKind::Add => line.green().to_string(),
            RowKind::Delete => line.red().to_string(),
        }
    }
}

impl std::fmt::Display for DiffRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind.marker(), self.text)
    }
}

/// Why a view shows what it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStatus {
    /// Both inputs were empty.
    Empty,
    /// Inputs were compared and every line matched.
    Identical,
    Changed,
    /// Inputs exceeded the line ceiling or the edit budget.
    Skipped,
}

/// Display-ready rows for one comparison.
///
/// `Empty` and `Identical` both collapse to the single [`NO_DIFFERENCES`] row;
/// callers that need to tell "no input" from "no changes" read [`DiffView::status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffView {
    status: DiffStatus,
    rows: Vec<DiffRow>,
}

impl DiffView {
    pub fn render(edits: &[Edit<String>], before: &LineSequence, after: &LineSequence) -> Self {
        if before.is_blank() && after.is_blank() {
            return Self::no_differences(DiffStatus::Empty);
        }

        Self::from_edits(edits)
    }

    pub fn from_outcome(outcome: &DiffOutcome) -> Self {
        match outcome {
            DiffOutcome::Empty => Self::no_differences(DiffStatus::Empty),
            DiffOutcome::Computed(edits) => Self::from_edits(edits),
            DiffOutcome::TooLarge { lines, limit } => Self {
                status: DiffStatus::Skipped,
                rows: vec![DiffRow::sentinel(format!(
                    "(diff skipped: {lines} lines exceed the limit of {limit})"
                ))],
            },
            DiffOutcome::TooManyChanges { limit } => Self {
                status: DiffStatus::Skipped,
                rows: vec![DiffRow::sentinel(format!(
                    "(diff skipped: more than {limit} changed lines)"
                ))],
            },
        }
    }

    fn from_edits(edits: &[Edit<String>]) -> Self {
        if edits.iter().all(Edit::is_equal) {
            return Self::no_differences(DiffStatus::Identical);
        }

        let rows = edits
            .iter()
            .map(|edit| DiffRow::new(RowKind::from(edit), edit.value().clone()))
            .collect();

        Self {
            status: DiffStatus::Changed,
            rows,
        }
    }

    fn no_differences(status: DiffStatus) -> Self {
        Self {
            status,
            rows: vec![DiffRow::sentinel(NO_DIFFERENCES)],
        }
    }

    pub fn status(&self) -> DiffStatus {
        self.status
    }

    pub fn rows(&self) -> &[DiffRow] {
        &self.rows
    }

    pub fn to_html(&self) -> String {
        self.rows.iter().map(DiffRow::to_html).collect()
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use crate::artifacts::diff::diff_algorithm::{DiffOutcome, Edit, LineDiff};
    use crate::artifacts::diff::line_sequence::LineSequence;
    use crate::artifacts::diff::renderer::{
        DiffRow, DiffStatus, DiffView, NO_DIFFERENCES, RowKind, escape_html,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn sentinel_rows() -> Vec<DiffRow> {
        vec![DiffRow::new(RowKind::Equal, NO_DIFFERENCES.to_string())]
    }

    #[rstest]
    fn both_empty_inputs_render_the_sentinel() {
        let view = DiffView::from_outcome(&LineDiff::default().compare("", ""));

        assert_eq!(view.status(), DiffStatus::Empty);
        assert_eq!(view.rows(), sentinel_rows().as_slice());
    }

    #[rstest]
    fn raw_edit_script_for_empty_inputs_still_renders_the_sentinel() {
        let blank = LineSequence::from_text("");
        let edits = vec![Edit::Equal {
            value: String::new(),
        }];

        let view = DiffView::render(&edits, &blank, &blank);

        assert_eq!(view.status(), DiffStatus::Empty);
        assert_eq!(view.rows(), sentinel_rows().as_slice());
    }

    #[rstest]
    fn unchanged_inputs_render_the_sentinel() {
        let view = DiffView::from_outcome(&LineDiff::default().compare("a\nb\n", "a\nb\n"));

        assert_eq!(view.status(), DiffStatus::Identical);
        assert_eq!(view.rows(), sentinel_rows().as_slice());
    }

    #[rstest]
    fn changed_inputs_render_one_row_per_edit() {
        let before = LineSequence::from_text("x\nz");
        let after = LineSequence::from_text("x\ny\nz");
        let DiffOutcome::Computed(edits) = LineDiff::default().compare_lines(&before, &after)
        else {
            panic!("expected a computed diff");
        };

        let view = DiffView::render(&edits, &before, &after);

        assert_eq!(view.status(), DiffStatus::Changed);
        assert_eq!(
            view.rows()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec![" x", "+y", " z"]
        );
    }

    #[rstest]
    fn oversized_inputs_render_a_skip_notice() {
        let view = DiffView::from_outcome(&DiffOutcome::TooLarge {
            lines: 30,
            limit: 10,
        });

        assert_eq!(view.status(), DiffStatus::Skipped);
        assert_eq!(
            view.rows()[0].text,
            "(diff skipped: 30 lines exceed the limit of 10)"
        );
    }

    #[rstest]
    fn heavily_changed_inputs_render_a_skip_notice() {
        let view = DiffView::from_outcome(&DiffOutcome::TooManyChanges { limit: 2_000 });

        assert_eq!(view.status(), DiffStatus::Skipped);
        assert_eq!(view.rows()[0].text, "(diff skipped: more than 2000 changed lines)");
    }

    #[rstest]
    fn html_rows_escape_markup() {
        let view = DiffView::from_outcome(&LineDiff::default().compare(
            "<p>a & b</p>",
            "<p>a &amp; b</p>",
        ));

        assert_eq!(
            view.to_html(),
            concat!(
                r#"<div class="diffLine diffDel"><span class="diffSign">-</span><span>&lt;p&gt;a &amp; b&lt;/p&gt;</span></div>"#,
                r#"<div class="diffLine diffAdd"><span class="diffSign">+</span><span>&lt;p&gt;a &amp;amp; b&lt;/p&gt;</span></div>"#,
            )
        );
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("a<b>&c", "a&lt;b&gt;&amp;c")]
    #[case("\"quotes\" stay", "\"quotes\" stay")]
    fn escapes_only_markup_characters(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(escape_html(text), expected);
    }
}
