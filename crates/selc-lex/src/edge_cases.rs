//! Edge case tests for selc-lex.

use crate::{tokenize, Lexer, Token};
use selc_util::Handler;

fn lex_all(source: &str) -> Vec<Token> {
    let handler = Handler::new();
    tokenize(source, &handler)
        .expect("lexing should succeed")
        .into_vec()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_source() {
    assert_eq!(lex_all(""), vec![Token::Eof]);
}

#[test]
fn test_edge_single_byte_tokens() {
    assert_eq!(lex_all("x"), vec![Token::Ident("x".to_string()), Token::Eof]);
    assert_eq!(lex_all("7"), vec![Token::Number(7), Token::Eof]);
    assert_eq!(lex_all(";"), vec![Token::Semicolon, Token::Eof]);
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10_000);
    let tokens = lex_all(&name);
    assert_eq!(tokens[0], Token::Ident(name));
}

#[test]
fn test_edge_long_string_literal() {
    let body = "b".repeat(4_096);
    let source = format!("\"{}\"", body);
    assert_eq!(lex_all(&source)[0], Token::String(body));
}

#[test]
fn test_edge_lone_carriage_return_is_unknown() {
    // "\r" not followed by "\n" is not a line terminator.
    assert_eq!(lex_all("\r"), vec![Token::Unknown, Token::Eof]);
    assert_eq!(
        lex_all("a\rb"),
        vec![
            Token::Ident("a".to_string()),
            Token::Unknown,
            Token::Ident("b".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_edge_crlf_is_one_eol() {
    assert_eq!(lex_all("\r\n"), vec![Token::Eol, Token::Eof]);
    assert_eq!(
        lex_all("\r\n\r\n"),
        vec![Token::Eol, Token::Eol, Token::Eof]
    );
}

#[test]
fn test_edge_tab_separated_tokens() {
    assert_eq!(
        lex_all("var\tx"),
        vec![Token::Var, Token::Ident("x".to_string()), Token::Eof]
    );
}

#[test]
fn test_edge_number_bounds() {
    assert_eq!(lex_all("0x0")[0], Token::Number(0));
    assert_eq!(lex_all("0b0")[0], Token::Number(0));
    assert_eq!(lex_all("00")[0], Token::Number(0));
    assert_eq!(lex_all("0xFFFFFFFFFFFFFFFF")[0], Token::Number(u64::MAX));
}

#[test]
fn test_edge_number_adjacent_to_ident() {
    // A digit run followed by letters: the letters form a fresh identifier.
    assert_eq!(
        lex_all("1abc"),
        vec![
            Token::Number(1),
            Token::Ident("abc".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_edge_consecutive_unknowns() {
    assert_eq!(
        lex_all("$$"),
        vec![Token::Unknown, Token::Unknown, Token::Eof]
    );
}

#[test]
fn test_edge_unknown_then_valid_token() {
    assert_eq!(
        lex_all("`var"),
        vec![Token::Unknown, Token::Var, Token::Eof]
    );
}

#[test]
fn test_edge_non_ascii_bytes_degrade_to_unknowns() {
    // Multi-byte UTF-8 yields one unknown per byte; the pass still ends
    // with its Eof.
    let tokens = lex_all("α");
    assert_eq!(tokens.len(), 3);
    assert!(tokens[..2].iter().all(|t| matches!(t, Token::Unknown)));
    assert_eq!(tokens.last(), Some(&Token::Eof));
}

#[test]
fn test_edge_string_with_utf8_content() {
    // Unescaped multi-byte content passes through a string intact.
    assert_eq!(
        lex_all("\"héllo\"")[0],
        Token::String("héllo".to_string())
    );
}

#[test]
fn test_edge_unterminated_escape_at_end() {
    let tokens = lex_all("\"abc\\");
    assert_eq!(tokens[0], Token::Unknown);
    assert_eq!(tokens.last(), Some(&Token::Eof));
}

#[test]
fn test_edge_comment_at_end_without_newline() {
    assert_eq!(
        lex_all("x # trailing"),
        vec![
            Token::Ident("x".to_string()),
            Token::Comment(" trailing".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_edge_hash_inside_block_comment_interior() {
    assert_eq!(
        lex_all("## a # b ##"),
        vec![Token::Comment(" a # b ".to_string()), Token::Eof]
    );
}

#[test]
fn test_edge_three_hashes() {
    // "###" opens a block whose interior starts at the third '#'; with
    // nothing else, it closes implicitly holding "#".
    assert_eq!(
        lex_all("###"),
        vec![Token::Comment("#".to_string()), Token::Eof]
    );
}

#[test]
fn test_edge_operators_without_spaces() {
    assert_eq!(
        lex_all("a+++b"),
        vec![
            Token::Ident("a".to_string()),
            Token::PlusPlus,
            Token::Plus,
            Token::Ident("b".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_edge_arrow_vs_minus() {
    assert_eq!(
        lex_all("a->b - >c"),
        vec![
            Token::Ident("a".to_string()),
            Token::Arrow,
            Token::Ident("b".to_string()),
            Token::Minus,
            Token::Gt,
            Token::Ident("c".to_string()),
            Token::Eof,
        ]
    );
}

#[test]
fn test_edge_char_of_quote() {
    // '"' is a valid character literal.
    assert_eq!(lex_all("'\"'")[0], Token::Char(34));
}

#[test]
fn test_edge_string_of_single_quote() {
    assert_eq!(lex_all("\"'\"")[0], Token::String("'".to_string()));
}

#[test]
fn test_edge_iterator_stops_at_eof() {
    let tokens: Vec<Token> = Lexer::new("a b").collect();
    assert_eq!(
        tokens,
        vec![Token::Ident("a".to_string()), Token::Ident("b".to_string())]
    );
}

#[test]
fn test_edge_keywords_mixed_with_idents() {
    let tokens = lex_all("var variable if iffy");
    assert_eq!(tokens[0], Token::Var);
    assert_eq!(tokens[1], Token::Ident("variable".to_string()));
    assert_eq!(tokens[2], Token::If);
    assert_eq!(tokens[3], Token::Ident("iffy".to_string()));
}
