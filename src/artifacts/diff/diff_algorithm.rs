use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn kind(&self) -> EditKind {
        match self {
            Edit::Delete { .. } => EditKind::Delete,
            Edit::Insert { .. } => EditKind::Insert,
            Edit::Equal { .. } => EditKind::Equal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    Equal,
    Delete,
    Insert,
}

/// A run of consecutive edits of the same kind.
///
/// `Equal` runs consume `len` lines from both sides, `Delete` runs only from
/// the left side and `Insert` runs only from the right side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct EditOp {
    pub kind: EditKind,
    pub len: usize,
}

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

impl<'d, T: Eq> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    type Trace = Vec<Vec<isize>>;
    type EditPath = Vec<(isize, isize, isize, isize)>;
    type EditScript = Vec<Edit<&'d T>>;

    /// Forward pass. The trace keeps a copy of `v` for every edit distance `d`,
    /// so memory grows as `D * (N + M)`: two long, unrelated inputs cost far
    /// more than two long, similar ones.
    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (n + m) as usize;

        let mut v = vec![0; 2 * offset + 1];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d {
                    // only reachable from k+1, an insertion
                    v[idx + 1]
                } else if k == d {
                    // only reachable from k-1, a deletion
                    v[idx - 1] + 1
                } else {
                    // deletions win ties so a replaced block lists its removed lines first
                    let x_del = v[idx - 1] + 1;
                    let x_ins = v[idx + 1];
                    if x_del > x_ins { x_del } else { x_ins }
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn backtrack(&self) -> Self::EditPath {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let offset = (x + y) as usize;
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit();

        for (d, v) in trace.iter().enumerate().rev() {
            let k = x - y;

            let prev_k = if k == -(d as isize) {
                k + 1
            } else if k == (d as isize) {
                k - 1
            } else {
                let k_del = k - 1;
                let k_ins = k + 1;
                if v[(offset as isize + k_del) as usize] + 1 > v[(offset as isize + k_ins) as usize]
                {
                    k_del
                } else {
                    k_ins
                }
            };

            let prev_x = v[(offset as isize + prev_k) as usize];
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

    fn diff(&self) -> Self::EditScript {
        let (n, m) = (self.a.len(), self.b.len());
        if n == 0 || m == 0 {
            // nothing to align: one side is entirely removed or entirely added
            return self
                .a
                .iter()
                .map(|value| Edit::Delete { value })
                .chain(self.b.iter().map(|value| Edit::Insert { value }))
                .collect();
        }

        let mut diff = Vec::with_capacity(n.max(m));

        for (prev_x, prev_y, x, y) in self.backtrack() {
            if x == prev_x {
                // only y advanced
                if prev_y >= 0 && (prev_y as usize) < m {
                    diff.push(Edit::Insert {
                        value: &self.b[prev_y as usize],
                    });
                }
            } else if y == prev_y {
                // only x advanced
                if prev_x >= 0 && (prev_x as usize) < n {
                    diff.push(Edit::Delete {
                        value: &self.a[prev_x as usize],
                    });
                }
            } else if prev_x >= 0 && (prev_x as usize) < n {
                diff.push(Edit::Equal {
                    value: &self.a[prev_x as usize],
                });
            }
        }

        diff.reverse();
        diff
    }
}

/// Collapses an edit script into runs of equal kind, preserving order.
pub fn to_runs<T>(edits: &[Edit<T>]) -> Vec<EditOp> {
    let mut runs: Vec<EditOp> = Vec::new();

    for edit in edits {
        match runs.last_mut() {
            Some(run) if run.kind == edit.kind() => run.len += 1,
            _ => runs.push(EditOp::new(edit.kind(), 1)),
        }
    }

    runs
}

/// Minimal line alignment of two raw line sequences.
///
/// Lines are compared byte for byte; every line of `a` lands in exactly one
/// `Equal` or `Delete` run and every line of `b` in exactly one `Equal` or
/// `Insert` run, both in original order.
///
/// Memory grows with the number of differing lines times the total; see
/// `MyersDiff::compute_shortest_edit`.
pub fn align_lines<S: AsRef<str>>(a: &[S], b: &[S]) -> Vec<EditOp> {
    let a = a.iter().map(AsRef::as_ref).collect::<Vec<&str>>();
    let b = b.iter().map(AsRef::as_ref).collect::<Vec<&str>>();

    let runs = to_runs(&MyersDiff::new(&a, &b).diff());
    log::trace!(
        "aligned {} left and {} right lines into {} runs",
        a.len(),
        b.len(),
        runs.len()
    );

    runs
}
