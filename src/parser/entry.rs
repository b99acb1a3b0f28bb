//! Splitting a macro body into entries and reading the entry grammar.
//!
//! An entry has the fixed shape `{ SYMBOL , { V0, V1, ..., Vn } }` where every
//! value is either a C identifier or an integer literal. Entries are split at
//! brace depth zero because the value list is itself a brace group.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*,\s*\{([^{}]*)\}\s*\}$")
        .expect("entry pattern is valid")
});

static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("symbol pattern is valid"));

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])?(?:0[xX]([0-9a-fA-F]+)|([0-9]+))$").expect("number pattern is valid")
});

/// One value of an entry's value list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Integer literal
    Number(i32),
    /// Bare identifier
    Symbol(String),
}

impl RawValue {
    /// The number, if this is a numeric literal.
    pub fn as_number(&self) -> Option<i32> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Symbol(_) => None,
        }
    }

    /// The identifier, if this is a symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

/// An entry that matched the grammar, before any symbol resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Element type symbol
    pub symbol: String,
    /// Value list in source order
    pub values: Vec<RawValue>,
}

/// Why an entry did not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// Overall shape is wrong.
    #[error("entry does not match `{{SYMBOL, {{values...}}}}`")]
    Malformed,
    /// A value is neither an identifier nor an integer literal.
    #[error("value {index} '{text}' is neither a number nor a symbol")]
    InvalidValue {
        /// Position in the value list
        index: usize,
        /// Offending text
        text: String,
    },
}

/// Splits a macro body into entry strings at brace depth zero.
///
/// Separators between entries (commas, whitespace, `\` continuations) and any
/// other text outside an entry are discarded. An entry left open at the end of
/// the body is still returned so that it can be reported as malformed.
pub fn split_entries(body: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, byte) in body.bytes().enumerate() {
        match byte {
            b'{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            b'}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    entries.push(&body[start..=i]);
                }
            }
            _ => {}
        }
    }

    if depth > 0 {
        let tail = body[start..].trim_end_matches(|c: char| c.is_whitespace() || c == '\\' || c == ',');
        entries.push(tail);
    }

    entries
}

/// Applies the entry grammar to one entry string.
pub fn parse_entry(entry: &str) -> Result<RawEntry, EntryError> {
    let entry = entry.trim();
    let entry = entry.strip_suffix(',').unwrap_or(entry).trim_end();

    let captures = ENTRY_RE.captures(entry).ok_or(EntryError::Malformed)?;
    let symbol = captures[1].to_string();

    let mut items: Vec<&str> = captures[2].split(',').map(str::trim).collect();
    // C allows one trailing comma in an initializer list
    if items.len() > 1 && items.last().is_some_and(|item| item.is_empty()) {
        items.pop();
    }

    let values = items
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            parse_value(text).ok_or_else(|| EntryError::InvalidValue {
                index,
                text: text.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RawEntry { symbol, values })
}

/// Splits a body and parses every entry, keeping failures alongside the text.
pub fn parse_entries(body: &str) -> Vec<(&str, Result<RawEntry, EntryError>)> {
    split_entries(body)
        .into_iter()
        .map(|text| (text, parse_entry(text)))
        .collect()
}

fn parse_value(text: &str) -> Option<RawValue> {
    if SYMBOL_RE.is_match(text) {
        return Some(RawValue::Symbol(text.to_string()));
    }

    let captures = NUMBER_RE.captures(text)?;
    let magnitude = if let Some(hex) = captures.get(2) {
        i64::from_str_radix(hex.as_str(), 16).ok()?
    } else {
        captures.get(3)?.as_str().parse::<i64>().ok()?
    };
    let signed = if captures.get(1).is_some_and(|sign| sign.as_str() == "-") {
        -magnitude
    } else {
        magnitude
    };

    i32::try_from(signed).ok().map(RawValue::Number)
}
