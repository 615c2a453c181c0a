//! polylex-sym - Symbol Table
//!
//! A fixed-bucket-count chained hash table that records every function and
//! identifier the lexer sees. Two layouts exist:
//!
//! - [`TableLayout::Simple`] keys entries by name alone and reports
//!   `Name/Type/Argument`.
//! - [`TableLayout::Scoped`] keys entries by `(name, scope)` and reports
//!   `Name/Type/Scope/Category/Additional Info`.
//!
//! Inserts are insert-if-absent: the first declaration of a key wins and
//! later ones are ignored. The table only ever grows.
//!
//! # Example Usage
//!
//! ```
//! use polylex_sym::{Category, SymbolTable, TableLayout};
//!
//! let mut table = SymbolTable::new(TableLayout::Simple);
//! assert!(table.record_function("add"));
//! assert!(table.record_identifier("a", "add"));
//! assert!(!table.record_identifier("a", "Global"));
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get("add", "Global").unwrap().category, Category::Function);
//! ```

#![warn(missing_docs)]

pub mod entry;
pub mod report;
pub mod table;

pub use entry::{Category, SymbolEntry};
pub use report::Report;
pub use table::{HashStrategy, SymbolTable, TableLayout, GLOBAL_SCOPE};
