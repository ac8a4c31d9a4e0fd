use crate::artifacts::compare::row::{DiffCell, DiffRow, RowFilter, RowKind, RowSummary};
use crate::artifacts::diff::token_diff::TokenChange;
use colored::{ColoredString, Colorize};
use derive_new::new;
use serde::Serialize;
use std::io::Write;

const GUTTER_WIDTH: usize = 4;
const SEPARATOR: &str = " | ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Side-by-side text view
    #[default]
    Pretty,
    /// Rows as JSON for another renderer
    Json,
}

/// Render-time choices. None of them affect classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub filter: RowFilter,
    pub dim_template: bool,
    pub highlight: bool,
    pub summary: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(OutputFormat::Pretty, RowFilter::all(), true, true, false)
    }
}

#[derive(Serialize)]
struct JsonReport<'r> {
    rows: Vec<&'r DiffRow>,
    summary: RowSummary,
}

#[derive(Debug, new)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn render(&self, rows: &[DiffRow], writer: &mut dyn Write) -> anyhow::Result<()> {
        let visible = rows
            .iter()
            .filter(|row| self.options.filter.matches(row))
            .collect::<Vec<_>>();

        match self.options.format {
            OutputFormat::Json => self.render_json(rows, &visible, writer),
            OutputFormat::Pretty => self.render_pretty(rows, &visible, writer),
        }
    }

    fn render_json(
        &self,
        rows: &[DiffRow],
        visible: &[&DiffRow],
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        if self.options.summary {
            let report = JsonReport {
                rows: visible.to_vec(),
                summary: RowSummary::from_rows(rows),
            };
            serde_json::to_writer_pretty(&mut *writer, &report)?;
        } else {
            serde_json::to_writer_pretty(&mut *writer, visible)?;
        }
        writeln!(writer)?;

        Ok(())
    }

    fn render_pretty(
        &self,
        rows: &[DiffRow],
        visible: &[&DiffRow],
        writer: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let width = visible
            .iter()
            .filter_map(|row| row.left.as_ref())
            .map(|cell| cell.text.chars().count())
            .max()
            .unwrap_or(0);

        for row in visible {
            let marker = row.kind.marker().to_string();
            let left = self.render_cell(row.left.as_ref(), row.kind, width);
            let right = self.render_cell(row.right.as_ref(), row.kind, 0);

            let line = format!("{} {}{}{}", self.tint(marker, row.kind), left, SEPARATOR, right);
            writeln!(writer, "{}", line.trim_end())?;
        }

        if self.options.summary {
            self.render_summary(&RowSummary::from_rows(rows), writer)?;
        }

        Ok(())
    }

    fn render_cell(&self, cell: Option<&DiffCell>, kind: RowKind, width: usize) -> String {
        let Some(cell) = cell else {
            return " ".repeat(GUTTER_WIDTH + 1 + width);
        };

        let text = cell
            .tokens
            .iter()
            .map(|token| {
                let value = token.value.as_str();
                let painted = match token.kind {
                    _ if !self.options.highlight => value.normal(),
                    TokenChange::Unchanged => value.normal(),
                    TokenChange::Removed => value.red().bold(),
                    TokenChange::Added => value.green().bold(),
                };
                if cell.is_template && self.options.dim_template {
                    painted.dimmed().to_string()
                } else {
                    painted.to_string()
                }
            })
            .collect::<String>();

        let padding = width.saturating_sub(cell.text.chars().count());
        let number = format!("{:>GUTTER_WIDTH$}", cell.line_number);

        format!(
            "{} {}{}",
            self.tint(number, kind),
            text,
            " ".repeat(padding)
        )
    }

    fn tint(&self, s: String, kind: RowKind) -> ColoredString {
        if !self.options.highlight {
            return s.normal();
        }

        match kind {
            RowKind::Exact => s.normal(),
            RowKind::Structural => s.yellow(),
            RowKind::LeftOnly => s.red(),
            RowKind::RightOnly => s.green(),
            RowKind::Mismatch => s.magenta(),
        }
    }

    fn render_summary(&self, summary: &RowSummary, writer: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(writer)?;
        writeln!(
            writer,
            "{}",
            format!(
                "{} rows: {} exact, {} structural, {} left only, {} right only, {} mismatch",
                summary.rows(),
                summary.exact,
                summary.structural,
                summary.left_only,
                summary.right_only,
                summary.mismatch
            )
            .bold()
        )?;
        writeln!(
            writer,
            "{} template rows, {:.1}% matched",
            summary.template,
            summary.matched_ratio() * 100.0
        )?;

        Ok(())
    }
}
