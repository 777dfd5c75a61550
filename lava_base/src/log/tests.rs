use super::{Message, Severity, SourceCodeDisplay};
use crate::source_file::{SourceFile, Span};

/// Removes every ANSI escape sequence from the rendered text.
fn strip_ansi(text: &str) -> String {
    let mut result = String::new();
    let mut chars = text.chars();

    while let Some(char) = chars.next() {
        if char == '\x1B' {
            for char in chars.by_ref() {
                if char == 'm' {
                    break;
                }
            }
        } else {
            result.push(char);
        }
    }

    result
}

#[test]
fn test_message_header() {
    let message = Message::new(Severity::Error, "something odd");
    assert_eq!(strip_ansi(&message.to_string()), "[error]: something odd");

    let message = Message::new(Severity::Error, 42);
    assert_eq!(strip_ansi(&message.to_string()), "[error]: 42");
}

#[test]
fn test_single_line_source_display() {
    let source_file = SourceFile::new("test.lava", "x = 1\ny = \"abc\nz = 2\n");
    let span = Span::new(source_file, 10, 11).unwrap();

    let rendered = strip_ansi(&SourceCodeDisplay::new(&span, Some("opened here")).to_string());
    let lines = rendered.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], " --> test.lava:2:5");
    assert_eq!(lines[1], "  ┃ ");
    assert_eq!(lines[2], "1 ┃ x = 1");
    assert_eq!(lines[3], "2 ┃ y = \"abc");
    assert_eq!(lines[4], "  ┃     help: opened here");
    assert_eq!(lines[5], "3 ┃ z = 2");
    assert_eq!(lines[6], "  ┃ ");
    assert_eq!(lines.len(), 7);
}

#[test]
fn test_multi_line_source_display() {
    let source_file = SourceFile::new("test.lava", "\"ab\ncd\"");
    let span = Span::to_end(source_file, 0).unwrap();

    let rendered = strip_ansi(&SourceCodeDisplay::new(&span, Some("whole literal")).to_string());
    let lines = rendered.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], " --> test.lava:1:1");
    assert_eq!(lines[2], "1 ┃ \"ab");
    assert_eq!(lines[3], "2 ┃ cd\"");
    assert_eq!(lines[4], "  ┃ ");
    assert_eq!(lines[5], "  = help: whole literal");
}
