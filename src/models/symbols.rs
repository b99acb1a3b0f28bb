//! Two-way symbol tables for the firmware enumerations.
//!
//! Board headers refer to element kinds and shapes by their C enum names
//! (`GP_ELEMENT_LEVER`, `GP_SHAPE_SQUARE`, ...). Each enumeration owns a static
//! [`SymbolTable`] that maps those names to integer codes and members, and back.
//! Unknown names and codes come back as [`SymbolError`] so callers can decide
//! to skip the record instead of guessing a value.

use std::fmt;
use thiserror::Error;

/// Which enumeration a symbol belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// `GP_ELEMENT_*`
    ElementType,
    /// `GP_SHAPE_*`
    ElementShape,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementType => write!(f, "element type"),
            Self::ElementShape => write!(f, "element shape"),
        }
    }
}

/// Failure to resolve a symbol name or code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The name is not a member of the enumeration.
    #[error("unknown {kind} symbol '{name}'")]
    UnknownName {
        /// Enumeration that was searched
        kind: SymbolKind,
        /// Name as written in the source text
        name: String,
    },
    /// The integer code is not assigned to any member.
    #[error("unknown {kind} code {code}")]
    UnknownCode {
        /// Enumeration that was searched
        kind: SymbolKind,
        /// Code that failed to resolve
        code: i64,
    },
}

/// One row of a symbol table.
#[derive(Debug, Clone, Copy)]
pub struct SymbolEntry<T: 'static> {
    /// C enum name
    pub name: &'static str,
    /// Firmware integer code
    pub code: u8,
    /// Typed member
    pub member: T,
}

/// Static name/code/member table for one enumeration.
#[derive(Debug)]
pub struct SymbolTable<T: 'static> {
    kind: SymbolKind,
    entries: &'static [SymbolEntry<T>],
}

impl<T: Copy + PartialEq + 'static> SymbolTable<T> {
    /// Creates a table over a static list of entries.
    pub const fn new(kind: SymbolKind, entries: &'static [SymbolEntry<T>]) -> Self {
        Self { kind, entries }
    }

    /// Enumeration this table describes.
    pub const fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// All rows in code order.
    pub fn entries(&self) -> &'static [SymbolEntry<T>] {
        self.entries
    }

    /// Resolves a C enum name to its member.
    pub fn by_name(&self, name: &str) -> Result<T, SymbolError> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.member)
            .ok_or_else(|| SymbolError::UnknownName {
                kind: self.kind,
                name: name.to_string(),
            })
    }

    /// Resolves an integer code to its member.
    pub fn by_code(&self, code: i64) -> Result<T, SymbolError> {
        self.entries
            .iter()
            .find(|entry| i64::from(entry.code) == code)
            .map(|entry| entry.member)
            .ok_or(SymbolError::UnknownCode {
                kind: self.kind,
                code,
            })
    }

    /// Row for a member. Every member has exactly one row.
    fn entry_of(&self, member: T) -> &'static SymbolEntry<T> {
        self.entries
            .iter()
            .find(|entry| entry.member == member)
            .unwrap_or_else(|| unreachable!("{} member missing from symbol table", self.kind))
    }

    /// C enum name of a member.
    pub fn name_of(&self, member: T) -> &'static str {
        self.entry_of(member).name
    }

    /// Integer code of a member.
    pub fn code_of(&self, member: T) -> u8 {
        self.entry_of(member).code
    }
}
