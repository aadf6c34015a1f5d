pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(
        input: &'source str,
        expected: [(TokenKind, &'source str); N],
    ) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_polynomial() {
        compare_tokens(
            "3x^2+2x",
            [
                (TokenKind::Int, "3"),
                (TokenKind::Var, "x"),
                (TokenKind::Caret, "^"),
                (TokenKind::Int, "2"),
                (TokenKind::Add, "+"),
                (TokenKind::Int, "2"),
                (TokenKind::Var, "x"),
            ],
        );
    }

    #[test]
    fn uppercase_variable() {
        compare_tokens(
            "41X^3-X",
            [
                (TokenKind::Int, "41"),
                (TokenKind::Var, "X"),
                (TokenKind::Caret, "^"),
                (TokenKind::Int, "3"),
                (TokenKind::Sub, "-"),
                (TokenKind::Var, "X"),
            ],
        );
    }

    #[test]
    fn foreign_characters_and_whitespace() {
        compare_tokens(
            "3y + 2",
            [
                (TokenKind::Int, "3"),
                (TokenKind::Symbol, "y"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }
}
