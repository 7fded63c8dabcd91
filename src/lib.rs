#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

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
    pub fn null() -> Self {
        Span {
            start: Position::null(),
            end: Position::null(),
        }
    }
}

/// Finds the line holding byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` inside that line. An offset at the very end of the source
/// resolves to the last line, so end-of-input diagnostics still get a line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last = None;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last = Some((line_number, line.to_string(), pos - start));
        start = end;
        line_number += 1;
    }

    last.or(Some((1, String::new(), 0)))
}

/// Renders an error against its source the way a compiler would:
///
/// ```text
/// Error: UnexpectedToken (expected next token to be ), got ; instead)
/// -> input.cl
///    |
/// 20 | var a = (1;
///    | ----------^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // Positions are byte offsets; the caret is placed by character
    let column = line_text
        .get(..line_pos)
        .map(|prefix| prefix.chars().count())
        .unwrap_or(line_pos);
    let arrows = column.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::TokenKind,
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nfoo\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 27).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("var x", 5).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "var x");
        assert_eq!(line_pos, 5);

        assert!(super::get_line_at_position("var x", 6).is_none());
    }

    #[test]
    fn test_display_error_points_at_token() {
        let source = "var a = (1;";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::RParen,
                found: TokenKind::Semicolon,
            },
            Position(10, Rc::new(String::from("input.cl"))),
        );

        let rendered = super::display_error(&error, source);
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[1], "-> input.cl");
        assert_eq!(lines[3], "1 | var a = (1;");
        assert_eq!(lines[4], "  | ----------^");
    }

    #[test]
    fn test_display_error_counts_characters() {
        // `é` is two bytes, so `;` sits at byte 11 but column 10
        let source = "var é = (1;";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::RParen,
                found: TokenKind::Semicolon,
            },
            Position(11, Rc::new(String::from("input.cl"))),
        );

        let rendered = super::display_error(&error, source);
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines[3], "1 | var é = (1;");
        assert_eq!(lines[4], "  | ----------^");
    }
}
