use std::collections::HashSet;

/// A submission split into lines.
///
/// Splits on `\n` and `\r\n`; a final terminator does not produce a trailing
/// empty line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceText<'s> {
    lines: Vec<&'s str>,
}

impl<'s> SourceText<'s> {
    pub fn new(text: &'s str) -> Self {
        Self {
            lines: text.lines().collect(),
        }
    }

    pub fn lines(&self) -> &[&'s str] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Trimmed, non-empty lines of the instructor's boilerplate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateLineSet {
    lines: HashSet<String>,
}

impl TemplateLineSet {
    pub fn new(template: &str) -> Self {
        Self {
            lines: template
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Membership of the trimmed raw line. Blank lines are never template lines.
    pub fn contains(&self, line: &str) -> bool {
        let trimmed = line.trim();
        !trimmed.is_empty() && self.lines.contains(trimmed)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
