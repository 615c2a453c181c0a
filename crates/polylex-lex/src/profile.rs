//! Language profiles.
//!
//! A [`LanguageProfile`] is the whole per-language configuration of the
//! scanner: which words are keywords, which bytes are operators and
//! delimiters, how comments and literals open and close, and how a word is
//! recognized as a function. The lexer itself has no language-specific
//! code; the five supported languages are five values of this type.

use polylex_util::{FxHashSet, ProfileError, ProfileResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::token::TokenKind;

/// A supported source language
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// C, with `#` preprocessor lines
    #[default]
    C,
    /// Java
    Java,
    /// Python, with `#` and triple-quote comments
    #[serde(alias = "py")]
    Python,
    /// Rust
    #[serde(alias = "rs")]
    Rust,
    /// SQL, with `--` comments and upper-case keywords
    Sql,
}

impl Language {
    /// All supported languages
    pub const ALL: [Language; 5] = [
        Language::C,
        Language::Java,
        Language::Python,
        Language::Rust,
        Language::Sql,
    ];

    /// Canonical lower-case name
    pub fn name(&self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Java => "java",
            Language::Python => "python",
            Language::Rust => "rust",
            Language::Sql => "sql",
        }
    }

    /// Source file extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Java => "java",
            Language::Python => "py",
            Language::Rust => "rs",
            Language::Sql => "sql",
        }
    }

    /// Input file scanned when none is given, e.g. `input.py`
    pub fn default_input(&self) -> String {
        format!("input.{}", self.extension())
    }

    /// Map a file extension to a language
    ///
    /// # Examples
    ///
    /// ```
    /// use polylex_lex::Language;
    ///
    /// assert_eq!(Language::from_extension("rs").unwrap(), Language::Rust);
    /// assert_eq!(Language::from_extension("H").unwrap(), Language::C);
    /// assert!(Language::from_extension("txt").is_err());
    /// ```
    pub fn from_extension(ext: &str) -> ProfileResult<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "c" | "h" => Ok(Language::C),
            "java" => Ok(Language::Java),
            "py" => Ok(Language::Python),
            "rs" => Ok(Language::Rust),
            "sql" => Ok(Language::Sql),
            _ => Err(ProfileError::UnknownExtension(ext.to_string())),
        }
    }

    /// Infer the language of a file from its extension
    pub fn from_path(path: &Path) -> ProfileResult<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ProfileError::UnknownExtension(path.display().to_string()))?;
        Self::from_extension(ext)
    }

    /// Build the profile for this language
    pub fn profile(self) -> LanguageProfile {
        LanguageProfile::for_language(self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = ProfileError;

    fn from_str(s: &str) -> ProfileResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "c" => Ok(Language::C),
            "java" => Ok(Language::Java),
            "python" | "py" => Ok(Language::Python),
            "rust" | "rs" => Ok(Language::Rust),
            "sql" => Ok(Language::Sql),
            _ => Err(ProfileError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Rule deciding whether a non-keyword word is a function
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunctionDetect {
    /// The byte right after the word is `(`
    OpenParen,
    /// The last keyword seen was this one and the next byte is `(`
    AfterKeyword(&'static str),
    /// Words are never functions
    Never,
}

/// Comment syntax of a profile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommentSyntax {
    /// Marker that comments out the rest of the line (one or two bytes)
    pub line: Option<&'static str>,
    /// Two-byte open and close markers of a block comment
    pub block: Option<(&'static str, &'static str)>,
    /// Treat `"""`/`'''` runs as block comments
    pub triple_quote: bool,
}

impl CommentSyntax {
    fn first_byte(marker: Option<&'static str>) -> Option<u8> {
        marker.and_then(|m| m.as_bytes().first().copied())
    }

    /// Returns true if `byte` may open a line or block comment
    pub fn may_open(&self, byte: u8) -> bool {
        Self::first_byte(self.line) == Some(byte)
            || Self::first_byte(self.block.map(|(open, _)| open)) == Some(byte)
    }
}

/// Immutable per-language scanner configuration
#[derive(Clone, Debug)]
pub struct LanguageProfile {
    language: Language,
    keywords: FxHashSet<&'static str>,
    single_ops: &'static [u8],
    multi_ops: FxHashSet<[u8; 2]>,
    delimiters: &'static [u8],
    comment: CommentSyntax,
    string_quotes: &'static [u8],
    char_quote: Option<u8>,
    real_literals: bool,
    preprocessor: Option<u8>,
    function_detect: FunctionDetect,
}

const C_KEYWORDS: &[&str] = &[
    "int", "float", "char", "double", "void", "if", "else", "while", "for", "return", "const",
    "break", "continue",
];

const JAVA_KEYWORDS: &[&str] = &[
    "int", "float", "double", "char", "boolean", "void", "if", "else", "for", "while", "do",
    "return", "break", "continue", "public", "private", "protected", "class", "static", "final",
    "abstract", "interface", "extends", "implements", "try", "catch", "throw", "throws", "new",
    "package", "import", "this", "super", "switch", "case", "default", "enum", "instanceof",
    "synchronized",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "def", "import", "for", "in", "if", "else", "elif", "while", "return", "break", "continue",
    "class", "with", "as", "pass", "global", "nonlocal",
];

const RUST_KEYWORDS: &[&str] = &[
    "fn", "let", "mut", "const", "static", "if", "else", "match", "loop", "while", "for",
    "return", "struct", "enum", "impl", "trait", "pub", "use", "mod", "crate", "as", "in", "ref",
    "break", "continue", "async", "await",
];

const SQL_KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "INSERT", "INTO", "VALUES", "UPDATE", "SET", "DELETE", "CREATE",
    "TABLE", "DROP", "ALTER", "JOIN", "INNER", "LEFT", "RIGHT", "FULL", "ON", "AS", "DISTINCT",
    "AND", "OR", "NOT", "LIKE", "IN", "GROUP", "BY", "ORDER", "HAVING",
];

// `/=` is absent wherever `/` opens a comment: a `/` that opens no comment
// is always a one-byte operator there.
const C_MULTI_OPS: &[&str] = &[
    "+=", "-=", "*=", "%=", "==", "!=", "<=", ">=", "&=", "|=", "&&", "||", "++", "--",
];

const JAVA_MULTI_OPS: &[&str] = &[
    "+=", "-=", "*=", "%=", "==", "!=", "<=", ">=", "&=", "|=", "^=", "&&", "||", "++", "--",
];

const PYTHON_MULTI_OPS: &[&str] = &[
    "+=", "-=", "*=", "/=", "%=", "==", "!=", "<=", ">=", "&=", "|=", "++", "--",
];

const RUST_MULTI_OPS: &[&str] = &[
    "+=", "-=", "*=", "%=", "==", "!=", "<=", ">=", "&=", "|=", "^=", "&&", "||",
];

const SQL_MULTI_OPS: &[&str] = &["+=", "-=", "*=", "%=", "==", "!=", "<=", ">=", "<>"];

const SLASH_COMMENTS: CommentSyntax = CommentSyntax {
    line: Some("//"),
    block: Some(("/*", "*/")),
    triple_quote: false,
};

impl LanguageProfile {
    /// Build the profile of `language`
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::C => Self {
                language,
                keywords: word_set(C_KEYWORDS),
                single_ops: b"+-*/%=!<>|&",
                multi_ops: pair_set(C_MULTI_OPS),
                delimiters: b"(){}[];,.",
                comment: SLASH_COMMENTS,
                string_quotes: b"\"'",
                char_quote: Some(b'\''),
                real_literals: true,
                preprocessor: Some(b'#'),
                function_detect: FunctionDetect::OpenParen,
            },
            Language::Java => Self {
                language,
                keywords: word_set(JAVA_KEYWORDS),
                single_ops: b"+-*/%=<>!&|^",
                multi_ops: pair_set(JAVA_MULTI_OPS),
                delimiters: b"(){}[],;:.",
                comment: SLASH_COMMENTS,
                string_quotes: b"\"'",
                char_quote: Some(b'\''),
                real_literals: true,
                preprocessor: None,
                function_detect: FunctionDetect::OpenParen,
            },
            Language::Python => Self {
                language,
                keywords: word_set(PYTHON_KEYWORDS),
                single_ops: b"+-*/%=!<>|&",
                multi_ops: pair_set(PYTHON_MULTI_OPS),
                delimiters: b"():,[]",
                comment: CommentSyntax {
                    line: Some("#"),
                    block: None,
                    triple_quote: true,
                },
                string_quotes: b"\"'",
                char_quote: None,
                real_literals: false,
                preprocessor: None,
                function_detect: FunctionDetect::AfterKeyword("def"),
            },
            Language::Rust => Self {
                language,
                keywords: word_set(RUST_KEYWORDS),
                single_ops: b"+-*/%=<>!&|^",
                multi_ops: pair_set(RUST_MULTI_OPS),
                delimiters: b"(){}[],;:.",
                comment: SLASH_COMMENTS,
                string_quotes: b"\"'",
                char_quote: Some(b'\''),
                real_literals: true,
                preprocessor: None,
                function_detect: FunctionDetect::OpenParen,
            },
            Language::Sql => Self {
                language,
                keywords: word_set(SQL_KEYWORDS),
                single_ops: b"+-*/%=<>!",
                multi_ops: pair_set(SQL_MULTI_OPS),
                delimiters: b"(),;",
                comment: CommentSyntax {
                    line: Some("--"),
                    block: Some(("/*", "*/")),
                    triple_quote: false,
                },
                string_quotes: b"'",
                char_quote: None,
                real_literals: false,
                preprocessor: None,
                function_detect: FunctionDetect::Never,
            },
        }
    }

    /// The language this profile describes
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns true if `word` is a keyword (case-sensitive)
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Number of keywords
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Returns true if `byte` is a one-byte operator
    pub fn is_single_op(&self, byte: u8) -> bool {
        self.single_ops.contains(&byte)
    }

    /// Returns true if `first` followed by `second` is a two-byte operator
    pub fn is_multi_op(&self, first: u8, second: u8) -> bool {
        self.multi_ops.contains(&[first, second])
    }

    /// Returns true if `byte` is a delimiter
    pub fn is_delimiter(&self, byte: u8) -> bool {
        self.delimiters.contains(&byte)
    }

    /// Comment syntax
    pub fn comment(&self) -> &CommentSyntax {
        &self.comment
    }

    /// Returns true if `byte` opens a string or char literal
    pub fn is_quote(&self, byte: u8) -> bool {
        self.string_quotes.contains(&byte)
    }

    /// Token kind of a literal opened by `quote`
    pub fn literal_kind(&self, quote: u8) -> TokenKind {
        if self.char_quote == Some(quote) {
            TokenKind::Char
        } else {
            TokenKind::String
        }
    }

    /// Returns true if number literals may contain `.`
    pub fn allows_reals(&self) -> bool {
        self.real_literals
    }

    /// Returns true if `byte` starts a preprocessor line
    pub fn is_preprocessor(&self, byte: u8) -> bool {
        self.preprocessor == Some(byte)
    }

    /// Function detection rule
    pub fn function_detect(&self) -> FunctionDetect {
        self.function_detect
    }
}

impl From<Language> for LanguageProfile {
    fn from(language: Language) -> Self {
        Self::for_language(language)
    }
}

fn word_set(words: &[&'static str]) -> FxHashSet<&'static str> {
    words.iter().copied().collect()
}

fn pair_set(ops: &[&str]) -> FxHashSet<[u8; 2]> {
    ops.iter()
        .filter_map(|op| match op.as_bytes() {
            &[a, b] => Some([a, b]),
            _ => None,
        })
        .collect()
}
