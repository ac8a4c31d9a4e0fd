use crate::artifacts::compare::classifier::{attach_token_detail, classify};
use crate::artifacts::compare::row::{DiffRow, RowSummary};
use crate::artifacts::compare::source::{SourceText, TemplateLineSet};
use crate::artifacts::diff::diff_algorithm::align_lines;
use crate::artifacts::normalize::policy::NormalizationPolicy;
use derive_new::new;

/// Everything one comparison depends on. A change to any field means a full
/// recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Default, new)]
pub struct ComparisonInput {
    pub code_a: String,
    pub code_b: String,
    pub template: String,
    pub policy: NormalizationPolicy,
}

impl ComparisonInput {
    pub fn compare(&self) -> Vec<DiffRow> {
        compare(&self.code_a, &self.code_b, &self.template, &self.policy)
    }
}

/// Aligns and classifies two submissions against an optional template.
///
/// Pure: identical arguments always yield identical rows.
pub fn compare(
    code_a: &str,
    code_b: &str,
    template: &str,
    policy: &NormalizationPolicy,
) -> Vec<DiffRow> {
    let a = SourceText::new(code_a);
    let b = SourceText::new(code_b);
    let template = TemplateLineSet::new(template);

    if policy.function_sorting {
        log::debug!("function sorting requested; line comparison keeps source order");
    }

    let ops = align_lines(a.lines(), b.lines());
    let mut rows = classify(&ops, a.lines(), b.lines(), policy, &template);
    attach_token_detail(&mut rows);

    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "compared {} and {} lines ({} template lines): {:?}",
            a.len(),
            b.len(),
            template.len(),
            RowSummary::from_rows(&rows)
        );
    }

    rows
}
