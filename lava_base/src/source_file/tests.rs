use super::{Location, SourceFile, Span};

#[test]
fn test_get_line_byte_positions() {
    let text = "Hello\nworld\r\n!\rtes";
    let byte_positions = super::get_line_byte_positions(text);
    assert_eq!(byte_positions, vec![0..6, 6..13, 13..18]);
}

#[test]
fn test_trailing_newline_opens_empty_line() {
    let byte_positions = super::get_line_byte_positions("a\n");
    assert_eq!(byte_positions, vec![0..2, 2..2]);

    let byte_positions = super::get_line_byte_positions("");
    assert_eq!(byte_positions, vec![0..0]);
}

#[test]
fn test_lone_carriage_return_is_not_a_line_break() {
    let source_file = SourceFile::new("test.lava", "a\rb");

    assert_eq!(source_file.line_count(), 1);
    assert_eq!(source_file.get_location(2), Some(Location { line: 0, column: 2 }));
}

#[test]
fn test_content_is_nfkc_normalized() {
    // decomposed `é` and fullwidth `＝`
    let source_file = SourceFile::anonymous("cafe\u{301} \u{ff1d} 1");
    assert_eq!(source_file.content(), "caf\u{e9} = 1");
    assert_eq!(source_file.name(), super::ANONYMOUS_NAME);
}

#[test]
fn test_get_line() {
    let source_file = SourceFile::new("test.lava", "x = 1\nprint x\n");
    assert_eq!(source_file.line_count(), 3);
    assert_eq!(source_file.get_line(0), Some("x = 1\n"));
    assert_eq!(source_file.get_line(1), Some("print x\n"));
    assert_eq!(source_file.get_line(2), Some(""));
    assert_eq!(source_file.get_line(3), None);
}

#[test]
fn test_get_location() {
    let source_file = SourceFile::anonymous("ab\n\u{e9}c\nd");

    assert_eq!(
        source_file.get_location(0),
        Some(Location { line: 0, column: 0 })
    );
    assert_eq!(
        source_file.get_location(2),
        Some(Location { line: 0, column: 2 })
    );

    // `é` is two bytes wide but a single column
    assert_eq!(
        source_file.get_location(5),
        Some(Location { line: 1, column: 1 })
    );
    assert_eq!(source_file.get_location(4), None);

    let end = source_file.content().len();
    assert_eq!(
        source_file.get_location(end),
        Some(Location { line: 2, column: 1 })
    );
    assert_eq!(source_file.get_location(end + 1), None);
}

#[test]
fn test_span() {
    let source_file = SourceFile::anonymous("let\nvalue");

    let span = Span::new(source_file.clone(), 4, 9).unwrap();
    assert_eq!(span.str(), "value");
    assert_eq!(span.start_location(), Location { line: 1, column: 0 });
    assert_eq!(span.end_location(), Location { line: 1, column: 5 });

    let head = Span::new(source_file.clone(), 0, 3).unwrap();
    let joined = head.join(&span).unwrap();
    assert_eq!(joined.str(), "let\nvalue");
    assert_eq!(joined, Span::to_end(source_file.clone(), 0).unwrap());

    assert!(Span::new(source_file.clone(), 5, 4).is_none());
    assert!(Span::new(source_file.clone(), 0, 10).is_none());
    assert!(span.join(&head).is_none());

    // same offsets in a different file are a different span
    let other = SourceFile::anonymous("let\nvalue");
    assert_ne!(span, Span::new(other, 4, 9).unwrap());
}
