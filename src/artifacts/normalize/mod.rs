//! Line normalization
//!
//! Turns a raw line into the canonical key used to decide whether two
//! differing lines are still structurally the same:
//!
//! - `policy`: the toggles selecting which differences are cosmetic
//! - `tokenizer`: a typed token stream for a single line
//!
//! Comment and preprocessor lines can be elided entirely. An elided or blank
//! line has an empty key and never matches anything, not even another empty key.

pub mod policy;
pub mod tokenizer;

use crate::artifacts::normalize::policy::NormalizationPolicy;
use crate::artifacts::normalize::tokenizer::{Token, TokenKind, tokenize};
use regex::Regex;
use std::sync::LazyLock;

pub const IDENTIFIER_PLACEHOLDER: &str = "ID";
pub const STRING_PLACEHOLDER: &str = "STR";
pub const NUMBER_PLACEHOLDER: &str = "NUM";

/// Names that identifier folding always keeps verbatim: C keywords, primitive
/// types and a handful of well-known standard library calls.
pub const PRESERVED_WORDS: phf::Set<&'static str> = phf::phf_set! {
    "auto", "break", "case", "char", "const", "continue", "default", "do",
    "double", "else", "enum", "extern", "float", "for", "goto", "if",
    "int", "long", "register", "return", "short", "signed", "sizeof", "static",
    "struct", "switch", "typedef", "union", "unsigned", "void", "volatile", "while",
    "main", "printf", "scanf", "puts", "gets", "putchar", "getchar", "fgets",
    "fprintf", "sprintf", "malloc", "calloc", "free", "NULL", "include", "define",
};

const TYPE_INTRODUCERS: [&str; 4] = ["struct", "enum", "union", "typedef"];

const PREPROCESSOR_PATTERN: &str =
    r"(?i)^#\s*(include|define|ifdef|ifndef|endif|undef|if|else|elif|pragma)\b";

static PREPROCESSOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PREPROCESSOR_PATTERN).expect("preprocessor pattern is a valid regex")
});

/// The comparison key derived from a raw line.
///
/// Never rendered. An empty key marks the line as insignificant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CanonicalLine(String);

impl CanonicalLine {
    pub fn is_insignificant(&self) -> bool {
        self.0.is_empty()
    }

    /// Structural equality: both keys carry content and are identical.
    pub fn matches(&self, other: &CanonicalLine) -> bool {
        !self.is_insignificant() && self.0 == other.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CanonicalLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CanonicalLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn normalize(line: &str, policy: &NormalizationPolicy) -> CanonicalLine {
    let trimmed = line.trim();

    if policy.ignore_comments && is_comment_line(trimmed) {
        return CanonicalLine::default();
    }

    if policy.ignore_preprocessor && PREPROCESSOR_RE.is_match(trimmed) {
        return CanonicalLine::default();
    }

    if !policy.folds_tokens() {
        return CanonicalLine(collapse_whitespace(trimmed));
    }

    let tokens = tokenize(trimmed);
    let mut key = String::with_capacity(trimmed.len());

    for (idx, token) in tokens.iter().enumerate() {
        if token.is_whitespace() {
            key.push(' ');
        } else {
            key.push_str(fold(&tokens, idx, policy));
        }
    }

    CanonicalLine(key)
}

/// A line made only of a comment: `//`, `/*`, `*/`, or a `*` continuation
/// followed by whitespace or nothing. `*ptr = 0;` is code.
fn is_comment_line(trimmed: &str) -> bool {
    trimmed.starts_with("//")
        || trimmed.starts_with("/*")
        || trimmed.starts_with("*/")
        || trimmed == "*"
        || trimmed
            .strip_prefix('*')
            .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn fold<'s>(tokens: &[Token<'s>], idx: usize, policy: &NormalizationPolicy) -> &'s str {
    let token = tokens[idx];

    match token.kind {
        TokenKind::Identifier if policy.ignore_variable_names => IDENTIFIER_PLACEHOLDER,
        TokenKind::Identifier
            if policy.ignore_function_names
                && next_significant(tokens, idx).is_some_and(|t| t.text == "(") =>
        {
            IDENTIFIER_PLACEHOLDER
        }
        TokenKind::Identifier
            if policy.ignore_type_names
                && previous_significant(tokens, idx)
                    .is_some_and(|t| TYPE_INTRODUCERS.contains(&t.text)) =>
        {
            IDENTIFIER_PLACEHOLDER
        }
        TokenKind::Number if policy.ignore_numeric_literals => NUMBER_PLACEHOLDER,
        TokenKind::StringLiteral | TokenKind::CharLiteral if policy.ignore_string_literals => {
            STRING_PLACEHOLDER
        }
        _ => token.text,
    }
}

fn next_significant<'a, 's>(tokens: &'a [Token<'s>], idx: usize) -> Option<&'a Token<'s>> {
    tokens[idx + 1..].iter().find(|t| !t.is_whitespace())
}

fn previous_significant<'a, 's>(tokens: &'a [Token<'s>], idx: usize) -> Option<&'a Token<'s>> {
    tokens[..idx].iter().rev().find(|t| !t.is_whitespace())
}
