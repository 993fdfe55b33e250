use std::io::BufRead;

use pebble::lexical::{lexer::tokenize_line, token::Token, Lexer};
use proptest::prelude::*;

proptest! {
    #[test]
    fn whitespace_and_comment_lines_only_end_the_line(
        indent in "[ \t]{0,8}",
        comment in "//[ -~]{0,40}",
    ) {
        let tokens = tokenize_line(&format!("{indent}{comment}"), 3).unwrap();
        prop_assert_eq!(tokens, vec![Token::end_of_line(3)]);
    }

    #[test]
    fn whitespace_without_a_following_token_is_rejected(
        name in "[a-z]{0,6}",
        trailing in "[ \t]{1,4}",
    ) {
        let err = tokenize_line(&format!("{name}{trailing}"), 2).unwrap_err();
        prop_assert_eq!(err.line, 2);
        prop_assert_eq!(err.column, name.len() + 1);
    }

    #[test]
    fn digits_read_back_as_numbers(value in 0..=i32::MAX) {
        let tokens = tokenize_line(&value.to_string(), 1).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].number_value(), Ok(value));
        prop_assert_eq!(tokens[0].text(), value.to_string());
    }

    #[test]
    fn identifiers_keep_their_spelling(name in "[A-Za-z][A-Za-z0-9_]{0,16}") {
        let tokens = tokenize_line(&name, 1).unwrap();
        prop_assert_eq!(&tokens[0], &Token::identifier(1, name.as_str()));
        prop_assert!(tokens[1].is_end_of_line());
    }

    #[test]
    fn peeking_is_side_effect_free(
        lines in prop::collection::vec("([a-z=+(){}<>&|!]([a-z =+(){}<>&|!]{0,10}[a-z=+(){}<>&|!])?)?", 0..6),
        ahead in 0usize..24,
    ) {
        let source = lines.join("\n");
        let mut lexer = Lexer::new(source.as_bytes().lines());

        let peeked = lexer.peek(ahead).unwrap().clone();
        prop_assert_eq!(lexer.peek(ahead).unwrap(), &peeked);

        let first = lexer.peek(0).unwrap().clone();
        prop_assert_eq!(lexer.read().unwrap(), first);

        if ahead > 0 {
            prop_assert_eq!(lexer.peek(ahead - 1).unwrap(), &peeked);
        }
    }

    #[test]
    fn exhausted_lexer_keeps_returning_end_of_stream(
        lines in prop::collection::vec("([a-z]{1,3}( [a-z]{1,3}){0,2})?", 0..4),
        extra in 1usize..8,
    ) {
        let source = lines.join("\n");
        let mut lexer = Lexer::new(source.as_bytes().lines());

        while !lexer.read().unwrap().is_end_of_stream() {}

        for _ in 0..extra {
            prop_assert!(lexer.read().unwrap().is_end_of_stream());
            prop_assert!(lexer.peek(extra).unwrap().is_end_of_stream());
        }
    }
}
