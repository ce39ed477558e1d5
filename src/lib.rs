#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span covering `self` through `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}

/// Returns the 1-based line number, the line text and the offset of `position`
/// within that line. Offsets past the end resolve to the last line.
pub fn get_line_at_position(content: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(content.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    // `pos` sits at the very end of the source
    match content.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => (line_number - 1, line.to_string(), line.len()),
        _ => (line_number, String::new(), 0),
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nlet x = 1;\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 34);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_source() {
        let (line_number, line, line_pos) = super::get_line_at_position("let x", 5);
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x");
        assert_eq!(line_pos, 5);

        let (line_number, line, line_pos) = super::get_line_at_position("", 0);
        assert_eq!(line_number, 1);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);
    }
}

/// Renders a diagnostic against the source it was produced from.
///
/// ```text
/// Error: UnexpectedToken (expected `;` after expression, found `}`)
/// -> main.lc
///    |
/// 20 | let a = 1 }
///    | ----------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.message()));
    } else {
        out.push_str(&format!(
            "Error: {} ({}, {})\n",
            error.get_error_name(),
            error.message(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
