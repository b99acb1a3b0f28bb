//! Extraction of `#define NAME { ... }` blocks from header text.
//!
//! The scanner walks the text once. A block body runs from the opening brace
//! to the brace that brings the depth back to zero, and only counts as a
//! block when that closing brace is followed (after whitespace) by another
//! `#define` or by the end of input. Anything else is skipped silently.
//!
//! [`locate_macro_blocks`] also returns the brace-balanced blocks that fail
//! the terminator rule, so rewrites can find every block a header defines.

use std::collections::HashMap;

const DEFINE: &str = "#define";

/// A named macro block found in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroBlock<'a> {
    /// Macro name
    pub name: &'a str,
    /// Text between the outer braces, exclusive
    pub body: &'a str,
    /// Byte offset of the `#define` keyword
    pub start: usize,
    /// Byte offset just past the closing brace
    pub end: usize,
    /// Closing brace is followed by `#define` or end of input
    pub terminated: bool,
}

/// Finds every well-formed macro block in source order.
pub fn extract_macro_blocks(text: &str) -> Vec<MacroBlock<'_>> {
    locate_macro_blocks(text)
        .into_iter()
        .filter(|block| block.terminated)
        .collect()
}

/// Finds every brace-balanced macro block, terminated or not.
///
/// The scan never revisits the body of a matched block, so a block that
/// fails the terminator rule hides any `#define` nested inside it.
pub fn locate_macro_blocks(text: &str) -> Vec<MacroBlock<'_>> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(DEFINE) {
        let define_at = cursor + offset;
        let after_define = define_at + DEFINE.len();

        match scan_block(text, define_at, after_define) {
            Some(block) => {
                cursor = block.end;
                blocks.push(block);
            }
            None => cursor = after_define,
        }
    }

    blocks
}

/// Name-keyed view of [`extract_macro_blocks`]. A later duplicate wins.
pub fn extract_macros(text: &str) -> HashMap<&str, &str> {
    terminated_bodies(&locate_macro_blocks(text))
}

/// Name-keyed bodies of the terminated blocks among `blocks`.
pub fn terminated_bodies<'a>(blocks: &[MacroBlock<'a>]) -> HashMap<&'a str, &'a str> {
    blocks
        .iter()
        .filter(|block| block.terminated)
        .map(|block| (block.name, block.body))
        .collect()
}

/// Scans one `NAME { body }` starting right after a `#define` keyword.
fn scan_block(text: &str, define_at: usize, start: usize) -> Option<MacroBlock<'_>> {
    let bytes = text.as_bytes();

    // `#define` must be followed by horizontal whitespace, not glued to a name
    let mut pos = start;
    if !bytes.get(pos).is_some_and(|b| *b == b' ' || *b == b'\t') {
        return None;
    }
    pos = skip_horizontal_space(bytes, pos);

    let name_start = pos;
    while bytes.get(pos).is_some_and(|b| b.is_ascii_alphanumeric() || *b == b'_') {
        pos += 1;
    }
    if pos == name_start {
        return None;
    }
    let name = &text[name_start..pos];

    pos = skip_space_and_continuations(bytes, pos);
    if bytes.get(pos) != Some(&b'{') {
        // Plain value macro such as `#define BOARD_LEDS_PIN 28`
        return None;
    }

    let body_start = pos + 1;
    let mut depth = 1usize;
    pos = body_start;
    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
        pos += 1;
    }
    if depth != 0 {
        return None;
    }

    let close = pos;
    let rest = text[close + 1..].trim_start();

    Some(MacroBlock {
        name,
        body: &text[body_start..close],
        start: define_at,
        end: close + 1,
        terminated: rest.is_empty() || rest.starts_with(DEFINE),
    })
}

fn skip_horizontal_space(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(|b| *b == b' ' || *b == b'\t') {
        pos += 1;
    }
    pos
}

/// Skips whitespace and `\` line continuations between the name and the brace.
fn skip_space_and_continuations(bytes: &[u8], mut pos: usize) -> usize {
    loop {
        match bytes.get(pos) {
            Some(b' ' | b'\t') => pos += 1,
            Some(b'\\') if matches!(bytes.get(pos + 1), Some(b'\n' | b'\r')) => pos += 1,
            Some(b'\r' | b'\n') if pos > 0 && bytes[pos - 1] == b'\\' => pos += 1,
            Some(b'\n') if pos > 1 && bytes[pos - 1] == b'\r' && bytes[pos - 2] == b'\\' => {
                pos += 1;
            }
            _ => return pos,
        }
    }
}
