//! Diagnostics
//!
//! Renders source-located errors with a plain-text code frame:
//!
//! ```text
//!   1 | const a = 1;
//! > 2 | const b = foo(;
//!     |               ^
//!   3 | const c = 3;
//! ```
//!
//! Rendering never fails. An empty or stale source buffer yields an empty or
//! partial frame, not an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ast::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeFrameOptions {
    pub lines_above: usize,
    pub lines_below: usize,
}

impl Default for CodeFrameOptions {
    fn default() -> Self {
        Self {
            lines_above: 2,
            lines_below: 3,
        }
    }
}

/// A message paired with the code frame of the location it refers to.
/// Displays as `message`, a `-----` separator line, then the frame.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}\n-----\n{frame}")]
pub struct CodeFrameError {
    /// Stable error code when the error came from a `TransformError`.
    pub code: Option<String>,
    pub message: String,
    pub location: Option<Location>,
    pub frame: String,
}

/// Builds an error for `loc` against `source`.
pub fn code_frame_error(
    source: &str,
    loc: &Location,
    message: impl Into<String>,
    options: &CodeFrameOptions,
) -> CodeFrameError {
    CodeFrameError {
        code: None,
        message: message.into(),
        location: Some(*loc),
        frame: render_code_frame(source, loc, options),
    }
}

/// Binds `source` once and renders frames for any number of locations.
pub fn build_code_frame(source: &str) -> impl Fn(&Location) -> String + '_ {
    let options = CodeFrameOptions::default();
    move |loc| render_code_frame(source, loc, &options)
}

pub fn render_code_frame(source: &str, loc: &Location, options: &CodeFrameOptions) -> String {
    let lines: Vec<&str> = source
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();

    let start_line = loc.start.line.max(1) as usize;
    let end_line = (loc.end.line as usize).max(start_line);

    let first = start_line.saturating_sub(options.lines_above.saturating_add(1));
    let last = lines.len().min(end_line.saturating_add(options.lines_below));
    if first >= last {
        return String::new();
    }

    let width = last.to_string().len();
    let mut frame = Vec::with_capacity(last - first);

    for (index, line) in lines[first..last].iter().enumerate() {
        let number = first + 1 + index;
        let gutter = format!(" {:>width$} |", number, width = width);
        let text = if line.is_empty() {
            String::new()
        } else {
            format!(" {}", line)
        };

        match marker(number, line, start_line, end_line, loc) {
            Some((column, count)) => {
                let spacing: String = line
                    .chars()
                    .take(column)
                    .map(|c| if c == '\t' { '\t' } else { ' ' })
                    .collect();
                let blank_gutter: String = gutter
                    .chars()
                    .map(|c| if c.is_ascii_digit() { ' ' } else { c })
                    .collect();
                frame.push(format!(
                    ">{}{}\n {} {}{}",
                    gutter,
                    text,
                    blank_gutter,
                    spacing,
                    "^".repeat(count.max(1))
                ));
            }
            None => frame.push(format!(" {}{}", gutter, text)),
        }
    }

    frame.join("\n")
}

/// Caret column and width for `number` when it falls inside the location.
fn marker(
    number: usize,
    line: &str,
    start_line: usize,
    end_line: usize,
    loc: &Location,
) -> Option<(usize, usize)> {
    if number < start_line || number > end_line {
        return None;
    }
    let start_col = loc.start.column as usize;
    let end_col = loc.end.column as usize;
    let len = line.chars().count();

    let span = if start_line == end_line {
        (start_col, end_col.saturating_sub(start_col))
    } else if number == start_line {
        (start_col, len.saturating_sub(start_col))
    } else if number == end_line {
        (0, end_col)
    } else {
        (0, len)
    };
    let (column, count) = span;
    Some((column, count.min(len.saturating_sub(column))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Position;
    use pretty_assertions::assert_eq;

    const SOURCE: &str = "const a = 1;\nconst b = foo(;\nconst c = 3;";

    fn loc(sl: u32, sc: u32, el: u32, ec: u32) -> Location {
        Location::new(Position::new(sl, sc), Position::new(el, ec))
    }

    #[test]
    fn test_single_line_frame() {
        let frame = render_code_frame(SOURCE, &loc(2, 14, 2, 15), &CodeFrameOptions::default());
        assert_eq!(
            frame,
            [
                "  1 | const a = 1;",
                "> 2 | const b = foo(;",
                "    |               ^",
                "  3 | const c = 3;",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_multi_line_frame_marks_every_line() {
        let frame = render_code_frame(SOURCE, &loc(1, 6, 2, 7), &CodeFrameOptions::default());
        assert_eq!(
            frame,
            [
                "> 1 | const a = 1;",
                "    |       ^^^^^^",
                "> 2 | const b = foo(;",
                "    | ^^^^^^^",
                "  3 | const c = 3;",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_window_and_gutter_width() {
        let source: String = (1..=12).map(|i| format!("line{}\n", i)).collect();
        let frame = render_code_frame(
            &source,
            &loc(9, 0, 9, 5),
            &CodeFrameOptions {
                lines_above: 1,
                lines_below: 1,
            },
        );
        assert_eq!(
            frame,
            [
                "   8 | line8",
                ">  9 | line9",
                "     | ^^^^^",
                "  10 | line10",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_empty_source_never_panics() {
        let frame = render_code_frame("", &loc(5, 3, 5, 4), &CodeFrameOptions::default());
        assert_eq!(frame, "");

        let frame = render_code_frame("", &loc(1, 3, 1, 4), &CodeFrameOptions::default());
        assert_eq!(frame, "> 1 |\n    | ^");
    }

    #[test]
    fn test_unbounded_window_clamps_to_source() {
        let options = CodeFrameOptions {
            lines_above: usize::MAX,
            lines_below: usize::MAX,
        };
        let frame = render_code_frame(SOURCE, &loc(2, 0, 2, 5), &options);
        assert_eq!(
            frame,
            [
                "  1 | const a = 1;",
                "> 2 | const b = foo(;",
                "    | ^^^^^",
                "  3 | const c = 3;",
            ]
            .join("\n")
        );

        let frame = render_code_frame(SOURCE, &loc(2, 10, 2, u32::MAX), &CodeFrameOptions::default());
        assert!(frame.ends_with("    |           ^^^^^\n  3 | const c = 3;"));
    }

    #[test]
    fn test_error_display() {
        let err = code_frame_error(SOURCE, &loc(3, 6, 3, 7), "bad name", &CodeFrameOptions::default());
        let text = err.to_string();
        assert!(text.starts_with("bad name\n-----\n"));
        assert!(text.ends_with("> 3 | const c = 3;\n    |       ^"));
        assert_eq!(err.code, None);

        let frame_at = build_code_frame(SOURCE);
        assert_eq!(frame_at(&loc(3, 6, 3, 7)), err.frame);
    }
}
