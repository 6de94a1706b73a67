#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use brim_ir::TokenKind;
use pretty_assertions::assert_eq;

#[test]
fn padding_is_cache_aligned_and_zeroed() {
    for text in ["", "a", "abc", &"x".repeat(60), &"y".repeat(64)] {
        let source = SourceText::new(text);
        assert_eq!(source.buf.len() % CACHE_LINE, 0);
        assert!(source.buf.len() >= text.len() + PADDING);
        assert!(source.buf[text.len()..].bytes().all(|b| b == 0));
        assert_eq!(source.as_str(), text);
        assert_eq!(source.len() as usize, text.len());
    }
}

#[test]
fn slice_by_token() {
    let source = SourceText::new("foo  \nbar;");
    let bar = Token::new(TokenKind::Identifier, 6, 3, 2, 1);
    assert_eq!(source.text(&bar), "bar");
    assert_eq!(source.slice(3, 2), "  ");
    assert_eq!(source.span_text(Span::new(0, 3)), "foo");
}

#[test]
fn slice_out_of_range_is_empty() {
    let source = SourceText::new("héllo");
    assert_eq!(source.slice(10, 2), "");
    // Splits the two-byte `é`.
    assert_eq!(source.slice(2, 1), "");
    assert_eq!(source.slice(1, 2), "é");
}

#[test]
fn char_at_offsets() {
    let source = SourceText::new("aé'");
    assert_eq!(source.char_at(0), Some('a'));
    assert_eq!(source.char_at(1), Some('é'));
    assert_eq!(source.char_at(2), None);
    assert_eq!(source.char_at(3), Some('\''));
    assert_eq!(source.char_at(4), None);
}

#[test]
fn named_source_keeps_name() {
    let source = SourceText::named("shapes.brim", "x");
    assert_eq!(source.name(), Some("shapes.brim"));
    assert_eq!(SourceText::new("x").name(), None);
}

#[test]
fn from_reader_reads_everything() {
    let source = SourceText::from_reader("<stdin>", "[[a]]\n".as_bytes()).unwrap();
    assert_eq!(source.as_str(), "[[a]]\n");
    assert_eq!(source.name(), Some("<stdin>"));
}

#[test]
fn from_reader_rejects_invalid_utf8() {
    let err = SourceText::from_reader("<stdin>", &[0xFF_u8, 0xFE][..]).unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
    assert!(err.to_string().starts_with("cannot read `<stdin>`"));
}

#[test]
fn read_missing_file_is_io_error() {
    let err = SourceText::read("/definitely/not/here.brim").unwrap_err();
    match err {
        SourceError::Io { path, .. } => assert_eq!(path, PathBuf::from("/definitely/not/here.brim")),
        SourceError::TooLarge { .. } => panic!("expected Io"),
    }
}

#[test]
fn too_large_message() {
    let err = check_len(Path::new("big.brim"), u64::from(u32::MAX) + 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "`big.brim` is 4294967296 bytes, larger than the 4 GiB source limit"
    );
    assert!(check_len(Path::new("ok.brim"), u64::from(u32::MAX)).is_ok());
}
