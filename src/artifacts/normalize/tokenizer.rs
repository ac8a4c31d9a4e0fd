use crate::artifacts::normalize::PRESERVED_WORDS;
use derive_new::new;

const THREE_CHAR_OPERATORS: [&str; 2] = ["<<=", ">>="];
const TWO_CHAR_OPERATORS: [&str; 19] = [
    "==", "!=", "<=", ">=", "&&", "||", "<<", ">>", "++", "--", "+=", "-=", "*=", "/=", "%=",
    "&=", "|=", "^=", "->",
];
const ONE_CHAR_OPERATORS: &str = "+-*/%=<>!&|^~.?:,;()[]{}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A name outside the preserved word list.
    Identifier,
    /// A name on the preserved word list (language keyword or well-known call).
    Keyword,
    Number,
    StringLiteral,
    CharLiteral,
    Operator,
    Comment,
    Whitespace,
    /// Any other character, kept verbatim (`#`, `\`, `@`, ...).
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub text: &'s str,
}

impl Token<'_> {
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}

/// Splits a single line into a typed token stream.
///
/// Concatenating the texts of the returned tokens yields `source` unchanged.
/// Unterminated string, char and block comment literals run to the end of
/// the line.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = source;

    while let Some(first) = rest.chars().next() {
        let (kind, len) = if first.is_whitespace() {
            (TokenKind::Whitespace, scan_while(rest, char::is_whitespace))
        } else if rest.starts_with("//") {
            (TokenKind::Comment, rest.len())
        } else if rest.starts_with("/*") {
            let len = rest[2..].find("*/").map_or(rest.len(), |end| end + 4);
            (TokenKind::Comment, len)
        } else if first == '"' {
            (TokenKind::StringLiteral, scan_quoted(rest, '"'))
        } else if first == '\'' {
            (TokenKind::CharLiteral, scan_quoted(rest, '\''))
        } else if first.is_ascii_digit() || (first == '.' && starts_with_digit(&rest[1..])) {
            (TokenKind::Number, scan_number(rest))
        } else if first.is_alphabetic() || first == '_' {
            let len = scan_while(rest, |c| c.is_alphanumeric() || c == '_');
            let kind = if PRESERVED_WORDS.contains(&rest[..len]) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            (kind, len)
        } else if let Some(len) = match_operator(rest) {
            (TokenKind::Operator, len)
        } else {
            (TokenKind::Unknown, first.len_utf8())
        };

        let (text, remainder) = rest.split_at(len);
        tokens.push(Token::new(kind, text));
        rest = remainder;
    }

    tokens
}

fn scan_while(s: &str, predicate: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|(_, c)| !predicate(*c))
        .map_or(s.len(), |(idx, _)| idx)
}

fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn scan_quoted(s: &str, quote: char) -> usize {
    let mut escaped = false;

    for (idx, c) in s.char_indices().skip(1) {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            c if c == quote => return idx + c.len_utf8(),
            _ => {}
        }
    }

    s.len()
}

fn scan_number(s: &str) -> usize {
    let is_hex = s.starts_with("0x") || s.starts_with("0X");
    let mut prev = '\0';

    for (idx, c) in s.char_indices() {
        let exponent_sign = (c == '+' || c == '-') && !is_hex && matches!(prev, 'e' | 'E');
        if !(c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign) {
            return idx;
        }
        prev = c;
    }

    s.len()
}

fn match_operator(s: &str) -> Option<usize> {
    THREE_CHAR_OPERATORS
        .iter()
        .chain(TWO_CHAR_OPERATORS.iter())
        .find(|op| s.starts_with(**op))
        .map(|op| op.len())
        .or_else(|| {
            s.chars()
                .next()
                .filter(|c| ONE_CHAR_OPERATORS.contains(*c))
                .map(char::len_utf8)
        })
}
