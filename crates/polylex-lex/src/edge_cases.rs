//! Edge case tests for polylex-lex
