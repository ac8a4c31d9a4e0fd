use crate::artifacts::compare::row::{DiffCell, DiffRow, RowKind};
use crate::artifacts::compare::source::TemplateLineSet;
use crate::artifacts::diff::diff_algorithm::{EditKind, EditOp};
use crate::artifacts::diff::token_diff::token_diff;
use crate::artifacts::normalize::normalize;
use crate::artifacts::normalize::policy::NormalizationPolicy;

/// Turns an edit script over `a` and `b` into classified rows.
///
/// A `Delete` run directly followed by an `Insert` run is a replace block and
/// its lines are paired by position: the i-th removed line with the i-th
/// added line. The pairing is not re-aligned, so long or reordered replace
/// blocks can pair unrelated lines.
///
/// Cells carry a single unchanged token; [`attach_token_detail`] adds the
/// word-level diff afterwards.
pub fn classify<S: AsRef<str>>(
    ops: &[EditOp],
    a: &[S],
    b: &[S],
    policy: &NormalizationPolicy,
    template: &TemplateLineSet,
) -> Vec<DiffRow> {
    let mut rows = Vec::with_capacity(a.len().max(b.len()));
    let (mut x, mut y) = (0, 0);
    let mut ops = ops.iter().peekable();

    let left_cell = |idx: usize| {
        let text = a[idx].as_ref();
        DiffCell::new(idx + 1, text, template.contains(text))
    };
    let right_cell = |idx: usize| {
        let text = b[idx].as_ref();
        DiffCell::new(idx + 1, text, template.contains(text))
    };

    while let Some(op) = ops.next() {
        match op.kind {
            EditKind::Equal => {
                for offset in 0..op.len {
                    rows.push(DiffRow::paired(
                        left_cell(x + offset),
                        right_cell(y + offset),
                        RowKind::Exact,
                    ));
                }
                x += op.len;
                y += op.len;
            }
            EditKind::Delete => {
                let inserted = ops
                    .next_if(|next| next.kind == EditKind::Insert)
                    .map_or(0, |next| next.len);

                if inserted > 0 {
                    log::trace!(
                        "pairing replace block of {} removed and {} added lines at {}:{}",
                        op.len,
                        inserted,
                        x + 1,
                        y + 1
                    );
                }

                for offset in 0..op.len.max(inserted) {
                    let removed = (offset < op.len).then(|| left_cell(x + offset));
                    let added = (offset < inserted).then(|| right_cell(y + offset));

                    rows.push(match (removed, added) {
                        (Some(left), Some(right)) => {
                            let kind = pair_kind(&left.text, &right.text, policy);
                            DiffRow::paired(left, right, kind)
                        }
                        (Some(left), None) => DiffRow::left_only(left),
                        (None, Some(right)) => DiffRow::right_only(right),
                        (None, None) => unreachable!(),
                    });
                }
                x += op.len;
                y += inserted;
            }
            EditKind::Insert => {
                for offset in 0..op.len {
                    rows.push(DiffRow::right_only(right_cell(y + offset)));
                }
                y += op.len;
            }
        }
    }

    rows
}

/// Classification of two lines that occupy the same row.
pub fn pair_kind(left: &str, right: &str, policy: &NormalizationPolicy) -> RowKind {
    if left == right {
        RowKind::Exact
    } else if normalize(left, policy).matches(&normalize(right, policy)) {
        RowKind::Structural
    } else {
        RowKind::Mismatch
    }
}

/// Replaces the whole-line token of paired `Structural` and `Mismatch`
/// rows with a word-level diff. Other rows are left untouched.
pub fn attach_token_detail(rows: &mut [DiffRow]) {
    for row in rows.iter_mut().filter(|row| row.kind.needs_token_detail()) {
        if let (Some(left), Some(right)) = (row.left.as_mut(), row.right.as_mut()) {
            let (left_tokens, right_tokens) = token_diff(&left.text, &right.text);
            left.tokens = left_tokens;
            right.tokens = right_tokens;
        }
    }
}
