//! polylex-drv - Scanner Driver
//!
//! Resolves the run settings from the command line and the configuration
//! file, reads the input, runs the lexer and writes the token stream and
//! symbol table.

pub mod config;
pub mod error;

use std::io::Write;
use std::path::{Path, PathBuf};

use polylex_lex::{Language, Lexer, Token};
use polylex_sym::{HashStrategy, SymbolEntry, SymbolTable, TableLayout};
use polylex_util::{Handler, SymbolError};
use serde::Serialize;
use tracing::{debug, info, warn};

pub use config::{FileConfig, OutputFormat};
pub use error::{DriverError, Result};

/// Settings given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Input file
    pub input: Option<PathBuf>,
    /// Language name
    pub language: Option<String>,
    /// Table layout name
    pub table: Option<String>,
    /// Bucket count
    pub buckets: Option<usize>,
    /// Hash strategy name
    pub hash: Option<String>,
    /// Output format
    pub format: Option<OutputFormat>,
    /// Suppress the symbol table
    pub no_symbols: bool,
}

/// Fully resolved settings of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// File to scan
    pub input: PathBuf,
    /// Language of the input
    pub language: Language,
    /// Symbol table layout
    pub layout: TableLayout,
    /// Symbol table bucket count
    pub buckets: usize,
    /// Symbol table hash strategy
    pub hash: HashStrategy,
    /// Output format
    pub format: OutputFormat,
    /// Whether the symbol table is printed
    pub show_symbols: bool,
}

impl Config {
    /// Merge command-line options over a configuration file.
    ///
    /// The language is taken from `--lang`, then the input's extension, then
    /// the file, then defaults to C. Without an input, `input.<ext>` of that
    /// language is scanned.
    pub fn resolve(options: Options, file: FileConfig) -> Result<Self> {
        let language = match (&options.language, &options.input) {
            (Some(name), _) => name.parse()?,
            (None, Some(input)) => Language::from_path(input)
                .ok()
                .or(file.language)
                .unwrap_or_default(),
            (None, None) => file.language.unwrap_or_default(),
        };

        let layout = match &options.table {
            Some(name) => name.parse()?,
            None => file.symbols.layout,
        };

        let buckets = options
            .buckets
            .or(file.symbols.buckets)
            .unwrap_or_else(|| layout.default_buckets());
        if buckets == 0 {
            return Err(SymbolError::ZeroBuckets.into());
        }

        let hash = match &options.hash {
            Some(name) => name.parse()?,
            None => file.symbols.hash.unwrap_or_else(|| layout.default_hash()),
        };

        let input = options
            .input
            .unwrap_or_else(|| PathBuf::from(language.default_input()));

        Ok(Self {
            input,
            language,
            layout,
            buckets,
            hash,
            format: options.format.unwrap_or(file.format),
            show_symbols: file.symbols.show && !options.no_symbols,
        })
    }

    /// Defaults for scanning `input`, language inferred from its extension.
    pub fn for_input(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let language = Language::from_path(&input).unwrap_or_default();
        Self {
            input,
            language,
            layout: TableLayout::default(),
            buckets: TableLayout::default().default_buckets(),
            hash: TableLayout::default().default_hash(),
            format: OutputFormat::default(),
            show_symbols: true,
        }
    }
}

/// Everything a scan produced.
pub struct Scan {
    /// Tokens in source order
    pub tokens: Vec<Token>,
    /// Identifiers and functions seen
    pub table: SymbolTable,
    /// Invalid bytes and unterminated literals
    pub diagnostics: Handler,
}

/// A single run over one input.
pub struct Session {
    config: Config,
    source: Vec<u8>,
}

impl Session {
    /// Read the configured input fully into memory.
    pub fn new(config: Config) -> Result<Self> {
        let source = read_source(&config.input)?;
        Ok(Self::with_source(config, source))
    }

    /// Create a session over in-memory source.
    pub fn with_source(config: Config, source: Vec<u8>) -> Self {
        Self { config, source }
    }

    /// The resolved settings.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Scan the source.
    pub fn scan(&self) -> Result<Scan> {
        let profile = self.config.language.profile();
        let mut table = SymbolTable::with_buckets(self.config.layout, self.config.buckets)?
            .with_hash(self.config.hash);
        let mut diagnostics = Handler::new();

        info!(
            input = %self.config.input.display(),
            language = %self.config.language,
            layout = %self.config.layout,
            hash = %self.config.hash,
            bytes = self.source.len(),
            "scan started"
        );

        let tokens = Lexer::new(&self.source, &profile, &mut table, &mut diagnostics).tokenize();

        info!(
            tokens = tokens.len(),
            symbols = table.len(),
            errors = diagnostics.error_count(),
            warnings = diagnostics.warning_count(),
            "scan finished"
        );
        if diagnostics.has_errors() {
            warn!(
                errors = diagnostics.error_count(),
                "input contains bytes that start no token"
            );
        }

        Ok(Scan {
            tokens,
            table,
            diagnostics,
        })
    }

    /// Scan the source and write the configured output to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Scan> {
        let scan = self.scan()?;
        match self.config.format {
            OutputFormat::Text => self.write_text(&scan, out)?,
            OutputFormat::Json => self.write_json(&scan, out)?,
        }
        Ok(scan)
    }

    fn write_text<W: Write>(&self, scan: &Scan, out: &mut W) -> Result<()> {
        for token in &scan.tokens {
            token.write_to(out)?;
            out.write_all(b"\n")?;
        }
        if self.config.show_symbols {
            write!(out, "{}", scan.table.report())?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, scan: &Scan, out: &mut W) -> Result<()> {
        let document = JsonDocument {
            language: self.config.language,
            tokens: &scan.tokens,
            symbols: self
                .config
                .show_symbols
                .then(|| scan.table.iter().collect()),
            diagnostics: scan
                .diagnostics
                .diagnostics()
                .iter()
                .map(ToString::to_string)
                .collect(),
        };
        serde_json::to_writer_pretty(&mut *out, &document)?;
        writeln!(out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    language: Language,
    tokens: &'a [Token],
    #[serde(skip_serializing_if = "Option::is_none")]
    symbols: Option<Vec<&'a SymbolEntry>>,
    diagnostics: Vec<String>,
}

/// Read the whole input. The file is closed before scanning starts.
fn read_source(path: &Path) -> Result<Vec<u8>> {
    debug!(path = %path.display(), "reading input");
    std::fs::read(path).map_err(|source| DriverError::Open {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run_to_string(config: Config, source: &str) -> String {
        let session = Session::with_source(config, source.as_bytes().to_vec());
        let mut out = Vec::new();
        session.run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_resolve_defaults() {
        let config = Config::resolve(Options::default(), FileConfig::default()).unwrap();
        assert_eq!(config.language, Language::C);
        assert_eq!(config.input, PathBuf::from("input.c"));
        assert_eq!(config.layout, TableLayout::Simple);
        assert_eq!(config.buckets, 50);
        assert_eq!(config.hash, HashStrategy::Additive);
        assert!(config.show_symbols);
    }

    #[test]
    fn test_resolve_language_precedence() {
        let file = FileConfig {
            language: Some(Language::Java),
            ..FileConfig::default()
        };

        let from_file = Config::resolve(Options::default(), file.clone()).unwrap();
        assert_eq!(from_file.language, Language::Java);
        assert_eq!(from_file.input, PathBuf::from("input.java"));

        let from_extension = Config::resolve(
            Options {
                input: Some(PathBuf::from("q.sql")),
                ..Options::default()
            },
            file.clone(),
        )
        .unwrap();
        assert_eq!(from_extension.language, Language::Sql);

        let unknown_extension = Config::resolve(
            Options {
                input: Some(PathBuf::from("notes.txt")),
                ..Options::default()
            },
            file.clone(),
        )
        .unwrap();
        assert_eq!(unknown_extension.language, Language::Java);

        let from_flag = Config::resolve(
            Options {
                input: Some(PathBuf::from("q.sql")),
                language: Some("python".to_string()),
                ..Options::default()
            },
            file,
        )
        .unwrap();
        assert_eq!(from_flag.language, Language::Python);
    }

    #[test]
    fn test_resolve_scoped_default_buckets() {
        let config = Config::resolve(
            Options {
                table: Some("scoped".to_string()),
                ..Options::default()
            },
            FileConfig::default(),
        )
        .unwrap();
        assert_eq!(config.buckets, 101);
        assert_eq!(config.hash, HashStrategy::Djb2);
    }

    #[test]
    fn test_resolve_hash_precedence() {
        let mut file = FileConfig::default();
        file.symbols.hash = Some(HashStrategy::Djb2);

        let from_file = Config::resolve(Options::default(), file.clone()).unwrap();
        assert_eq!(from_file.layout, TableLayout::Simple);
        assert_eq!(from_file.hash, HashStrategy::Djb2);

        let from_flag = Config::resolve(
            Options {
                hash: Some("additive".to_string()),
                ..Options::default()
            },
            file,
        )
        .unwrap();
        assert_eq!(from_flag.hash, HashStrategy::Additive);

        let unknown = Options {
            hash: Some("fnv".to_string()),
            ..Options::default()
        };
        assert!(matches!(
            Config::resolve(unknown, FileConfig::default()),
            Err(DriverError::Symbol(SymbolError::UnknownHash(_)))
        ));
    }

    #[test]
    fn test_scan_uses_configured_hash() {
        let config = Config {
            hash: HashStrategy::Djb2,
            ..Config::for_input("input.c")
        };
        let scan = Session::with_source(config, b"add".to_vec()).scan().unwrap();
        assert_eq!(scan.table.hash(), HashStrategy::Djb2);
        assert_eq!(scan.table.bucket_of("add"), HashStrategy::Djb2.bucket("add", 50));
    }

    #[test]
    fn test_text_output_keeps_literal_bytes() {
        let session = Session::with_source(Config::for_input("input.c"), b"s = \"caf\xe9\";".to_vec());
        let mut out = Vec::new();
        session.run(&mut out).unwrap();
        assert!(out.starts_with(b"<IDENTIFIER,s,1,1>\n<OP,=,1,3>\n<STRING,\"caf\xe9\",1,5>\n<DELIM,;,1,11>\n"));
    }

    #[test]
    fn test_json_output_escapes_non_utf8_bytes() {
        let config = Config {
            format: OutputFormat::Json,
            ..Config::for_input("input.c")
        };
        let session = Session::with_source(config, b"\"caf\xe9\" \xc3".to_vec());
        let mut out = Vec::new();
        session.run(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["tokens"][0]["lexeme"], "caf\\xe9");
        assert_eq!(value["tokens"][1]["kind"], "invalid");
        assert_eq!(value["tokens"][1]["lexeme"], "\\xc3");
    }

    #[test]
    fn test_resolve_rejects_bad_settings() {
        let unknown = Options {
            language: Some("cobol".to_string()),
            ..Options::default()
        };
        assert!(matches!(
            Config::resolve(unknown, FileConfig::default()),
            Err(DriverError::Profile(_))
        ));

        let zero = Options {
            buckets: Some(0),
            ..Options::default()
        };
        assert!(matches!(
            Config::resolve(zero, FileConfig::default()),
            Err(DriverError::Symbol(SymbolError::ZeroBuckets))
        ));

        let layout = Options {
            table: Some("tree".to_string()),
            ..Options::default()
        };
        assert!(Config::resolve(layout, FileConfig::default()).is_err());
    }

    #[test]
    fn test_no_symbols_overrides_file() {
        let config = Config::resolve(
            Options {
                no_symbols: true,
                ..Options::default()
            },
            FileConfig::default(),
        )
        .unwrap();
        assert!(!config.show_symbols);
    }

    #[test]
    fn test_missing_input_is_open_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::for_input(temp_dir.path().join("absent.c"));
        assert!(matches!(Session::new(config), Err(DriverError::Open { .. })));
    }

    #[test]
    fn test_session_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("main.rs");
        std::fs::write(&path, "fn main() {}").unwrap();

        let session = Session::new(Config::for_input(&path)).unwrap();
        assert_eq!(session.config().language, Language::Rust);
        let scan = session.scan().unwrap();
        assert_eq!(scan.tokens.len(), 6);
        assert_eq!(scan.table.len(), 1);
    }

    #[test]
    fn test_text_output() {
        let output = run_to_string(Config::for_input("input.c"), "x = 1;");
        assert_eq!(
            output,
            "<IDENTIFIER,x,1,1>\n<OP,=,1,3>\n<NUM,1,1,5>\n<DELIM,;,1,6>\n\
             \n========== SYMBOL TABLE ==========\nName\tType\tArgument\nx\tIDENTIFIER\t-\n"
        );
    }

    #[test]
    fn test_text_output_without_symbols() {
        let config = Config {
            show_symbols: false,
            ..Config::for_input("input.c")
        };
        assert_eq!(run_to_string(config, "x"), "<IDENTIFIER,x,1,1>\n");
    }

    #[test]
    fn test_json_output() {
        let config = Config {
            format: OutputFormat::Json,
            ..Config::for_input("input.py")
        };
        let output = run_to_string(config, "def f(): `");
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["language"], "python");
        assert_eq!(value["tokens"][1]["kind"], "function");
        assert_eq!(value["tokens"][1]["lexeme"], "f");
        assert_eq!(value["symbols"][0]["type"], "FUNC");
        assert_eq!(value["diagnostics"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_custom_bucket_count() {
        let config = Config {
            buckets: 1,
            ..Config::for_input("input.c")
        };
        let session = Session::with_source(config, b"a b c".to_vec());
        let scan = session.scan().unwrap();
        assert_eq!(scan.table.bucket_count(), 1);
        let names: Vec<_> = scan.table.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["c", "b", "a"]);
    }
}
