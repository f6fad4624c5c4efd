//! Unit tests for TokenStream

use crate::template::engine::tokenize::{ScanState, TokenKind, TokenStream};

#[test]
fn test_scan_state_equality() {
    let in_token = ScanState::InToken {
        start: 10,
        content_start: 12,
        line: 1,
    };
    assert_eq!(in_token.clone(), in_token);
    assert_ne!(ScanState::Normal, ScanState::SeenLBrace { pos: 0 });
}

#[test]
fn test_tokenstream_single_variable() {
    let text = "Hello {{name}} world";
    let mut stream = TokenStream::new(text);

    let token = stream.next().unwrap();
    assert_eq!(token.start, 6);
    assert_eq!(token.length, 8); // {{name}}
    assert_eq!(
        token.kind,
        TokenKind::Variable {
            key: "name".to_string()
        }
    );

    assert!(stream.next().is_none());
    assert_eq!(stream.unclosed_tag_line(), None);
}

#[test]
fn test_tokenstream_multiple_tokens() {
    let text = "{{a}} {{b}} {{c}}";
    let starts: Vec<usize> = TokenStream::new(text).map(|t| t.start).collect();
    assert_eq!(starts, vec![0, 6, 12]);
}

#[test]
fn test_tokenstream_section_tokens() {
    let text = "{{#rare}}{{^common}}{{/common}}{{/rare}}";
    let kinds: Vec<TokenKind> = TokenStream::new(text).map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::SectionStart {
                key: "rare".to_string(),
                inverted: false
            },
            TokenKind::SectionStart {
                key: "common".to_string(),
                inverted: true
            },
            TokenKind::SectionEnd {
                key: "common".to_string()
            },
            TokenKind::SectionEnd {
                key: "rare".to_string()
            },
        ]
    );
}

#[test]
fn test_tokenstream_triple_mustache() {
    let text = "{{{html}}}!";
    let mut stream = TokenStream::new(text);

    let token = stream.next().unwrap();
    assert_eq!(token.start, 0);
    assert_eq!(token.length, 10);
    assert_eq!(
        token.kind,
        TokenKind::Variable {
            key: "html".to_string()
        }
    );
    assert!(stream.next().is_none());
}

#[test]
fn test_tokenstream_comment() {
    let mut stream = TokenStream::new("{{! anything {goes} here }}");
    assert_eq!(stream.next().unwrap().kind, TokenKind::Comment);
}

#[test]
fn test_tokenstream_empty_input() {
    let mut stream = TokenStream::new("");
    assert!(stream.next().is_none());
}

#[test]
fn test_tokenstream_no_tokens() {
    let mut stream = TokenStream::new("Just plain text with no tokens");
    assert!(stream.next().is_none());
}

#[test]
fn test_tokenstream_brace_inside_token() {
    let mut stream = TokenStream::new("{{a}b}}");
    assert_eq!(
        stream.next().unwrap().kind,
        TokenKind::Variable {
            key: "a}b".to_string()
        }
    );
}

#[test]
fn test_tokenstream_line_numbers() {
    let text = "Line 1\n{{token1}}\nLine 3\n{{token2}}";
    let lines: Vec<usize> = TokenStream::new(text).map(|t| t.line).collect();
    assert_eq!(lines, vec![2, 4]);
}

#[test]
fn test_tokenstream_unclosed_tag() {
    let mut stream = TokenStream::new("ok {{a}}\n{{broken");
    assert!(stream.next().is_some());
    assert!(stream.next().is_none());
    assert_eq!(stream.unclosed_tag_line(), Some(2));
}
