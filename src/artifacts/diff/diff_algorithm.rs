use crate::artifacts::diff::{DEFAULT_MAX_EDITS, DEFAULT_MAX_LINES};
use crate::artifacts::diff::line_sequence::LineSequence;
use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Equal { value: T },
    Delete { value: T },
    Add { value: T },
}

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Equal { value } | Edit::Delete { value } | Edit::Add { value } => value,
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }

    pub fn marker(&self) -> char {
        match self {
            Edit::Equal { .. } => ' ',
            Edit::Delete { .. } => '-',
            Edit::Add { .. } => '+',
        }
    }
}

impl<T> Display for Edit<T>
where
    T: AsRef<str>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.marker(), self.value().as_ref())
    }
}

pub type EditScript = Vec<Edit<String>>;

pub trait DiffAlgorithm<'d, T> {
    type Trace;
    type EditPath;
    type EditScript;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self) -> Self::EditPath;
    fn diff(&self) -> Self::EditScript;
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T> MyersDiff<'_, T> {
    // k ranges over [-(n + m), n + m] and both neighbours k - 1 and k + 1 are read
    fn offset(&self) -> isize {
        (self.a.len() + self.b.len()) as isize + 1
    }

    fn max_edits(&self) -> usize {
        self.a.len() + self.b.len()
    }
}

/// Reach of diagonal `k` in the snapshot taken before step `d`. A snapshot only
/// holds diagonals `-(d + 1)..=d + 1`.
fn reach(snapshot: &[isize], d: isize, k: isize) -> isize {
    snapshot[(k + d + 1) as usize]
}

impl<T: Eq + Clone> MyersDiff<'_, T> {
    /// Runs the forward pass for at most `max_edits` steps. `None` when the inputs
    /// need more edits than that.
    ///
    /// Snapshot `d` holds `2d + 3` entries, so the trace stays within
    /// `(max_edits + 2)^2` entries.
    pub fn trace_within(&self, max_edits: usize) -> Option<Vec<Vec<isize>>> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = self.offset();
        let max_d = max_edits.min(self.max_edits()) as isize;

        let mut v = vec![0; (2 * offset + 1) as usize];
        let mut trace = Vec::new();

        for d in 0..=max_d {
            trace.push(v[(offset - d - 1) as usize..=(offset + d + 1) as usize].to_vec());

            for k in (-d..=d).step_by(2) {
                let idx = (offset + k) as usize;

                let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                    // down from k+1, thus an insertion
                    v[idx + 1]
                } else {
                    // right from k-1, thus a deletion (also taken on ties)
                    v[idx - 1] + 1
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                #[cfg(feature = "debug_trace")]
                log::debug!("myers: d={d} k={k} reached ({x}, {y})");

                if x >= n && y >= m {
                    return Some(trace);
                }
            }
        }

        None
    }

    fn backtrack_trace(&self, trace: &[Vec<isize>]) -> Vec<(isize, isize, isize, isize)> {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let mut edit_path = Vec::new();

        for (d, snapshot) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let k = x - y;

            let prev_k = if k == -d
                || (k != d && reach(snapshot, d, k - 1) < reach(snapshot, d, k + 1))
            {
                k + 1
            } else {
                k - 1
            };

            let prev_x = reach(snapshot, d, prev_k);
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edit_path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        edit_path
    }

    fn script(&self, edit_path: Vec<(isize, isize, isize, isize)>) -> Vec<Edit<T>> {
        let mut diff = edit_path
            .into_iter()
            .filter_map(|(prev_x, prev_y, x, y)| {
                if x == prev_x {
                    // only y moved
                    usize::try_from(prev_y)
                        .ok()
                        .and_then(|i| self.b.get(i))
                        .map(|value| Edit::Add {
                            value: value.clone(),
                        })
                } else if y == prev_y {
                    // only x moved
                    usize::try_from(prev_x)
                        .ok()
                        .and_then(|i| self.a.get(i))
                        .map(|value| Edit::Delete {
                            value: value.clone(),
                        })
                } else {
                    usize::try_from(prev_x)
                        .ok()
                        .and_then(|i| self.a.get(i))
                        .map(|value| Edit::Equal {
                            value: value.clone(),
                        })
                }
            })
            .collect::<Vec<_>>();

        diff.reverse();
        diff
    }

    /// The edit script, or `None` when it would need more than `max_edits`
    /// insertions and deletions.
    pub fn diff_within(&self, max_edits: usize) -> Option<Vec<Edit<T>>> {
        let trace = self.trace_within(max_edits)?;
        Some(self.script(self.backtrack_trace(&trace)))
    }
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    type Trace = Vec<Vec<isize>>;
    type EditPath = Vec<(isize, isize, isize, isize)>;
    type EditScript = Vec<Edit<T>>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        // n + m steps always reach the end
        self.trace_within(self.max_edits()).unwrap_or_default()
    }

    fn backtrack(&self) -> Self::EditPath {
        self.backtrack_trace(&self.compute_shortest_edit())
    }

    fn diff(&self) -> Self::EditScript {
        self.script(self.backtrack())
    }
}

/// Result of comparing two text blobs line by line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// Both blobs were empty; nothing was compared.
    Empty,
    Computed(EditScript),
    /// `before.len() + after.len()` exceeded the configured ceiling.
    TooLarge { lines: usize, limit: usize },
    /// The blobs differ in more than `limit` inserted and deleted lines.
    TooManyChanges { limit: usize },
}

impl DiffOutcome {
    pub fn has_changes(&self) -> bool {
        match self {
            DiffOutcome::Computed(edits) => edits.iter().any(|edit| !edit.is_equal()),
            DiffOutcome::Empty | DiffOutcome::TooLarge { .. } => false,
            DiffOutcome::TooManyChanges { .. } => true,
        }
    }
}

/// Line comparison bounded in input size and in edit distance.
///
/// The edit budget is what bounds memory: the Myers trace grows with the square
/// of the edit distance, roughly `8 * (max_edits + 2)^2` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDiff {
    max_lines: usize,
    max_edits: usize,
}

impl Default for LineDiff {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINES)
    }
}

impl LineDiff {
    pub fn new(max_lines: usize) -> Self {
        Self {
            max_lines,
            max_edits: DEFAULT_MAX_EDITS,
        }
    }

    pub fn with_max_edits(self, max_edits: usize) -> Self {
        Self { max_edits, ..self }
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn max_edits(&self) -> usize {
        self.max_edits
    }

    pub fn compare(&self, before: &str, after: &str) -> DiffOutcome {
        self.compare_lines(
            &LineSequence::from_text(before),
            &LineSequence::from_text(after),
        )
    }

    pub fn compare_lines(&self, before: &LineSequence, after: &LineSequence) -> DiffOutcome {
        if before.is_blank() && after.is_blank() {
            return DiffOutcome::Empty;
        }

        let lines = before.len() + after.len();
        if lines > self.max_lines {
            log::debug!(
                "skipping diff of {} + {} lines (limit {})",
                before.len(),
                after.len(),
                self.max_lines
            );
            return DiffOutcome::TooLarge {
                lines,
                limit: self.max_lines,
            };
        }

        match MyersDiff::new(before.lines(), after.lines()).diff_within(self.max_edits) {
            Some(edits) => DiffOutcome::Computed(edits),
            None => {
                log::debug!("giving up after {} edits", self.max_edits);
                DiffOutcome::TooManyChanges {
                    limit: self.max_edits,
                }
            }
        }
    }
}
