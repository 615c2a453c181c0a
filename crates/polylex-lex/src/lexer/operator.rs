//! Operator and preprocessor lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator with one byte of lookahead.
    ///
    /// The pair is taken if the profile lists it as a two-byte operator;
    /// otherwise the lookahead byte is pushed back.
    pub(crate) fn lex_operator(&mut self, first: u8) -> Token {
        let mut text = String::from(char::from(first));
        if let Some(second) = self.cursor.next() {
            if self.profile.is_multi_op(first, second) {
                text.push(char::from(second));
            } else {
                self.cursor.pushback(second);
            }
        }
        self.token(TokenKind::Operator, text)
    }

    /// Emits the marker and discards the rest of the directive line.
    pub(crate) fn lex_preprocessor(&mut self, marker: u8) -> Token {
        let token = self.token(TokenKind::Preprocessor, marker);
        self.skip_line_comment();
        token
    }
}

#[cfg(test)]
mod tests {
    use crate::{Language, Lexer, Token, TokenKind};
    use polylex_sym::{SymbolTable, TableLayout};
    use polylex_util::Handler;

    fn lex(language: Language, source: &str) -> Vec<Token> {
        let profile = language.profile();
        let mut table = SymbolTable::new(TableLayout::Simple);
        let mut handler = Handler::new();
        Lexer::new(source.as_bytes(), &profile, &mut table, &mut handler).tokenize()
    }

    fn lexemes(language: Language, source: &str) -> Vec<String> {
        lex(language, source).into_iter().map(|t| t.lexeme.to_string()).collect()
    }

    #[test]
    fn test_greedy_pair() {
        let tokens = lex(Language::C, "a==b");
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].lexeme, "==");
        assert_eq!(tokens[2].col, 4);
    }

    #[test]
    fn test_pair_not_listed_splits() {
        assert_eq!(lexemes(Language::C, "=x"), ["=", "x"]);
        assert_eq!(lexemes(Language::C, "=!"), ["=", "!"]);
    }

    #[test]
    fn test_operator_at_end_of_input() {
        let tokens = lex(Language::Rust, "x+");
        assert_eq!(tokens[1].lexeme, "+");
    }

    #[test]
    fn test_language_specific_pairs() {
        assert_eq!(lexemes(Language::Java, "a^=b"), ["a", "^=", "b"]);
        assert_eq!(lexemes(Language::C, "i++"), ["i", "++"]);
        assert_eq!(lexemes(Language::Rust, "i++"), ["i", "+", "+"]);
        assert_eq!(lexemes(Language::Python, "x/=2"), ["x", "/=", "2"]);
        assert_eq!(lexemes(Language::Sql, "a<>b"), ["a", "<>", "b"]);
    }

    #[test]
    fn test_caret_only_where_listed() {
        let tokens = lex(Language::C, "^");
        assert_eq!(tokens[0].kind, TokenKind::Invalid);
    }

    #[test]
    fn test_delimiters() {
        let tokens = lex(Language::Rust, "{a::b}");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Delimiter,
                TokenKind::Identifier,
                TokenKind::Delimiter,
                TokenKind::Delimiter,
                TokenKind::Identifier,
                TokenKind::Delimiter,
            ]
        );
    }

    #[test]
    fn test_preprocessor_line() {
        let tokens = lex(Language::C, "#include <stdio.h>\nint x;");
        assert_eq!(tokens[0].to_string(), "<PREPROC,#,1,1>");
        assert_eq!(tokens[1].lexeme, "int");
        assert_eq!(tokens[1].row, 2);
    }

    #[test]
    fn test_hash_is_invalid_outside_c() {
        let tokens = lex(Language::Rust, "#[test]");
        assert_eq!(tokens[0].kind, TokenKind::Invalid);
        assert_eq!(tokens[1].lexeme, "[");
    }
}
