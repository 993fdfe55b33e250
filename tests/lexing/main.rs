use std::{io::BufRead, path::Path};

use pebble::{
    base::{Error, FsProvider, MemoryProvider, SilentHandler, VoidHandler},
    lexical::{self, token::TokenKind, Lexer},
};

fn provider() -> MemoryProvider {
    let mut provider = MemoryProvider::new();
    provider.add_file("sample.pbl", include_str!("./sample.pbl"));
    provider.add_file("invalid.pbl", include_str!("./invalid.pbl"));
    provider
}

#[test]
fn lexing_sample() {
    let tokens = pebble::tokenize(&VoidHandler, &provider(), Path::new("sample.pbl"))
        .expect("Failed to tokenize");

    // one end-of-line token per source line
    assert_eq!(tokens.iter().filter(|token| token.is_end_of_line()).count(), 11);
    assert!(tokens.iter().all(|token| !token.is_end_of_stream()));

    let line_four = tokens
        .iter()
        .filter(|token| token.line() == 4)
        .map(|token| token.text().into_owned())
        .collect::<Vec<_>>();
    assert_eq!(line_four, vec!["while", "i", "<=", "10", "{", "\\n"]);

    let line_nine = tokens
        .iter()
        .filter(|token| token.line() == 9 && !token.is_end_of_line())
        .map(|token| token.kind().clone())
        .collect::<Vec<_>>();
    assert_eq!(
        line_nine,
        vec![
            TokenKind::Identifier("if".to_string()),
            TokenKind::Identifier("sum".to_string()),
            TokenKind::Identifier("==".to_string()),
            TokenKind::Number(55),
            TokenKind::Identifier("&&".to_string()),
            TokenKind::Identifier("i".to_string()),
            TokenKind::Identifier(">=".to_string()),
            TokenKind::Number(11),
            TokenKind::Identifier("{".to_string()),
        ]
    );

    let printed = tokens
        .iter()
        .find(|token| token.is_string())
        .expect("sample contains a string literal");
    assert_eq!(printed.line(), 10);
    assert_eq!(printed.text(), "sum is \"55\"\ndone\\");
}

#[test]
fn lexing_invalid() {
    let handler = SilentHandler::new();

    let result = pebble::tokenize(&handler, &provider(), Path::new("invalid.pbl"));
    assert_eq!(
        result,
        Err(Error::Other(
            "An error occurred while tokenizing the source code."
        ))
    );

    let received = handler.take();
    assert_eq!(received.len(), 1);
    let Error::LexicalError(lexical::Error::BadToken(err)) = &received[0] else {
        panic!("Expected a lexical error, got {:?}", received[0]);
    };
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 5);
    assert_eq!(err.source_line, "y = \"never closed");
}

#[test]
fn lexing_from_file_system() {
    let root = tempfile::tempdir().expect("Failed to create a temporary directory");
    std::fs::create_dir(root.path().join("src")).unwrap();
    std::fs::write(
        root.path().join("src/sample.pbl"),
        include_str!("./sample.pbl"),
    )
    .unwrap();
    std::fs::write(root.path().join("trailing.pbl"), "x = 1\ny = 2   \n").unwrap();

    let provider = FsProvider::new(root.path());

    let from_disk = pebble::tokenize(&VoidHandler, &provider, Path::new("src/sample.pbl"))
        .expect("Failed to tokenize");
    let from_memory = pebble::tokenize(&VoidHandler, &self::provider(), Path::new("sample.pbl"))
        .expect("Failed to tokenize");
    assert_eq!(from_disk, from_memory);

    let handler = SilentHandler::new();
    assert!(pebble::tokenize(&handler, &provider, Path::new("trailing.pbl")).is_err());
    let received = handler.take();
    let [Error::LexicalError(lexical::Error::BadToken(err))] = received.as_slice() else {
        panic!("Expected one lexical error, got {received:?}");
    };
    assert_eq!((err.line, err.column), (2, 6));

    let result = pebble::tokenize(&handler, &provider, Path::new("../escape.pbl"));
    assert!(matches!(result, Err(Error::IoError(_))));
    assert!(handler.take().is_empty());
}

#[test]
fn lexing_missing_file() {
    let handler = SilentHandler::new();

    let result = pebble::tokenize(&handler, &provider(), Path::new("missing.pbl"));
    assert!(matches!(result, Err(Error::IoError(_))));
    assert!(handler.take().is_empty());
}

#[test]
fn lexing_with_lookahead() {
    let source = "if x == 10 && y\n    print(\"a\\\"b\\\\c\\x\")\n";
    let mut lexer = Lexer::new(source.as_bytes().lines());

    assert_eq!(lexer.peek(2).unwrap().text(), "==");
    assert_eq!(lexer.peek(3).unwrap().number_value(), Ok(10));
    assert!(lexer.peek(6).unwrap().is_end_of_line());
    assert_eq!(lexer.peek(9).unwrap().text(), "a\"b\\c\n");

    assert_eq!(lexer.read().unwrap().text(), "if");
    assert_eq!(lexer.peek(8).unwrap().text(), "a\"b\\c\n");

    let mut rest = Vec::new();
    loop {
        let token = lexer.read().unwrap();
        if token.is_end_of_stream() {
            break;
        }
        rest.push(token.to_string());
    }
    assert_eq!(
        rest,
        vec![
            "x", "==", "10", "&&", "y", "\\n", "print", "(", r#""a\"b\\c\n""#, ")", "\\n"
        ]
    );
    assert!(lexer.read().unwrap().is_end_of_stream());
}

#[test]
fn number_access_on_identifier_is_reported() {
    let mut lexer = Lexer::new("count".as_bytes().lines());
    let token = lexer.read().unwrap();

    let err = Error::from(token.number_value().unwrap_err());
    assert_eq!(
        err.to_string(),
        "cannot read a number from the identifier token at line 1"
    );
}
