use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, Edit, MyersDiff};
use derive_new::new;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenChange {
    Unchanged,
    Added,
    Removed,
}

/// A span of a line, classified against the line on the other side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct DiffToken {
    pub value: String,
    pub kind: TokenChange,
}

impl DiffToken {
    pub fn unchanged(value: impl Into<String>) -> Self {
        Self::new(value.into(), TokenChange::Unchanged)
    }
}

/// Splits a line at word boundaries: runs of word characters, runs of
/// whitespace, and single punctuation characters.
pub fn split_words(line: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = 0;
    let mut previous: Option<WordClass> = None;

    for (idx, c) in line.char_indices() {
        let class = WordClass::of(c);
        let continues = previous == Some(class) && class != WordClass::Punctuation;
        if !continues && idx > start {
            words.push(&line[start..idx]);
            start = idx;
        }
        previous = Some(class);
    }

    if start < line.len() {
        words.push(&line[start..]);
    }

    words
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordClass {
    Word,
    Space,
    Punctuation,
}

impl WordClass {
    fn of(c: char) -> Self {
        if c.is_alphanumeric() || c == '_' {
            WordClass::Word
        } else if c.is_whitespace() {
            WordClass::Space
        } else {
            WordClass::Punctuation
        }
    }
}

/// Word-level diff of two raw lines.
///
/// Left tokens are `Unchanged` or `Removed` and concatenate back to `left`;
/// right tokens are `Unchanged` or `Added` and concatenate back to `right`.
/// Adjacent tokens of the same kind are merged.
pub fn token_diff(left: &str, right: &str) -> (Vec<DiffToken>, Vec<DiffToken>) {
    let a = split_words(left);
    let b = split_words(right);

    let mut left_tokens = Vec::new();
    let mut right_tokens = Vec::new();

    for edit in MyersDiff::new(&a, &b).diff() {
        match edit {
            Edit::Equal { value } => {
                push_merged(&mut left_tokens, value, TokenChange::Unchanged);
                push_merged(&mut right_tokens, value, TokenChange::Unchanged);
            }
            Edit::Delete { value } => push_merged(&mut left_tokens, value, TokenChange::Removed),
            Edit::Insert { value } => push_merged(&mut right_tokens, value, TokenChange::Added),
        }
    }

    (left_tokens, right_tokens)
}

fn push_merged(tokens: &mut Vec<DiffToken>, value: &str, kind: TokenChange) {
    match tokens.last_mut() {
        Some(last) if last.kind == kind => last.value.push_str(value),
        _ => tokens.push(DiffToken::new(value.to_string(), kind)),
    }
}
