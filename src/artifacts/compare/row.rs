use crate::artifacts::diff::token_diff::{DiffToken, TokenChange};
use bitflags::bitflags;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RowKind {
    /// Both lines are byte-identical.
    Exact,
    /// The lines differ but normalize to the same non-empty key.
    Structural,
    LeftOnly,
    RightOnly,
    Mismatch,
}

impl RowKind {
    pub fn marker(&self) -> char {
        match self {
            RowKind::Exact => '=',
            RowKind::Structural => '~',
            RowKind::LeftOnly => '<',
            RowKind::RightOnly => '>',
            RowKind::Mismatch => '!',
        }
    }

    /// Kinds whose paired lines get a word-level diff.
    pub fn needs_token_detail(&self) -> bool {
        matches!(self, RowKind::Structural | RowKind::Mismatch)
    }

    fn flag(&self) -> RowFilter {
        match self {
            RowKind::Exact => RowFilter::EXACT,
            RowKind::Structural => RowFilter::STRUCTURAL,
            RowKind::LeftOnly => RowFilter::LEFT_ONLY,
            RowKind::RightOnly => RowFilter::RIGHT_ONLY,
            RowKind::Mismatch => RowFilter::MISMATCH,
        }
    }
}

/// One side of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffCell {
    /// 1-based position in the original source.
    pub line_number: usize,
    pub text: String,
    pub tokens: Vec<DiffToken>,
    pub is_template: bool,
}

impl DiffCell {
    /// A cell whose whole text is a single unchanged token.
    pub fn new(line_number: usize, text: &str, is_template: bool) -> Self {
        Self {
            line_number,
            text: text.to_string(),
            tokens: vec![DiffToken::unchanged(text)],
            is_template,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.tokens.iter().any(|t| t.kind != TokenChange::Unchanged)
    }
}

/// One aligned unit of output. Exactly one side is absent for `LeftOnly` and
/// `RightOnly` rows; both are present otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRow {
    pub left: Option<DiffCell>,
    pub right: Option<DiffCell>,
    pub kind: RowKind,
}

impl DiffRow {
    pub fn left_only(left: DiffCell) -> Self {
        Self {
            left: Some(left),
            right: None,
            kind: RowKind::LeftOnly,
        }
    }

    pub fn right_only(right: DiffCell) -> Self {
        Self {
            left: None,
            right: Some(right),
            kind: RowKind::RightOnly,
        }
    }

    pub fn paired(left: DiffCell, right: DiffCell, kind: RowKind) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
            kind,
        }
    }
}

bitflags! {
    /// Row kinds selected for display.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RowFilter: u8 {
        const EXACT = 0b00001;
        const STRUCTURAL = 0b00010;
        const LEFT_ONLY = 0b00100;
        const RIGHT_ONLY = 0b01000;
        const MISMATCH = 0b10000;
    }
}

impl RowFilter {
    /// Parses kind letters: `E`xact, `S`tructural, `L`eft-only, `R`ight-only,
    /// `M`ismatch.
    pub fn try_parse(s: &str) -> Option<Self> {
        let mut filter = Self::empty();

        for c in s.chars() {
            match c.to_ascii_uppercase() {
                'E' => filter |= Self::EXACT,
                'S' => filter |= Self::STRUCTURAL,
                'L' => filter |= Self::LEFT_ONLY,
                'R' => filter |= Self::RIGHT_ONLY,
                'M' => filter |= Self::MISMATCH,
                _ => return None,
            }
        }

        Some(filter)
    }

    pub fn matches(&self, row: &DiffRow) -> bool {
        self.contains(row.kind.flag())
    }
}

impl Default for RowFilter {
    fn default() -> Self {
        Self::all()
    }
}

/// Row counts per kind. A display aid, not a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSummary {
    pub exact: usize,
    pub structural: usize,
    pub left_only: usize,
    pub right_only: usize,
    pub mismatch: usize,
    /// Rows with a template line on either side.
    pub template: usize,
}

impl RowSummary {
    pub fn from_rows(rows: &[DiffRow]) -> Self {
        rows.iter().fold(Self::default(), |mut summary, row| {
            match row.kind {
                RowKind::Exact => summary.exact += 1,
                RowKind::Structural => summary.structural += 1,
                RowKind::LeftOnly => summary.left_only += 1,
                RowKind::RightOnly => summary.right_only += 1,
                RowKind::Mismatch => summary.mismatch += 1,
            }
            let is_template = |cell: &Option<DiffCell>| cell.as_ref().is_some_and(|c| c.is_template);
            if is_template(&row.left) || is_template(&row.right) {
                summary.template += 1;
            }
            summary
        })
    }

    pub fn rows(&self) -> usize {
        self.exact + self.structural + self.left_only + self.right_only + self.mismatch
    }

    /// Share of rows that are exact or structural matches.
    pub fn matched_ratio(&self) -> f64 {
        match self.rows() {
            0 => 0.0,
            rows => (self.exact + self.structural) as f64 / rows as f64,
        }
    }
}
