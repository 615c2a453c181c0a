//! Chained hash table keyed by name or by `(name, scope)`.

use polylex_util::{SymbolError, SymbolResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::entry::{Category, SymbolEntry};
use crate::report::Report;

/// Scope name used outside of any function
pub const GLOBAL_SCOPE: &str = "Global";

/// Table variant: how entries are keyed and reported
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableLayout {
    /// Keyed by name; `Name/Type/Argument` report
    #[default]
    Simple,
    /// Keyed by `(name, scope)`; five-column report
    Scoped,
}

impl TableLayout {
    /// Bucket count used when none is configured
    pub const fn default_buckets(self) -> usize {
        match self {
            TableLayout::Simple => 50,
            TableLayout::Scoped => 101,
        }
    }

    /// Hash function used by this layout
    pub const fn default_hash(self) -> HashStrategy {
        match self {
            TableLayout::Simple => HashStrategy::Additive,
            TableLayout::Scoped => HashStrategy::Djb2,
        }
    }

    /// Lower-case name, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            TableLayout::Simple => "simple",
            TableLayout::Scoped => "scoped",
        }
    }
}

impl fmt::Display for TableLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableLayout {
    type Err = SymbolError;

    fn from_str(s: &str) -> SymbolResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(TableLayout::Simple),
            "scoped" => Ok(TableLayout::Scoped),
            _ => Err(SymbolError::UnknownLayout(s.to_string())),
        }
    }
}

/// Bucket selection function
///
/// Both are valid for the same contract; they differ only in how evenly
/// names spread over the buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashStrategy {
    /// Sum of the name's bytes
    Additive,
    /// `h = h * 33 + byte`, starting from 5381
    Djb2,
}

impl HashStrategy {
    /// Hash `name` into `0..buckets`
    pub fn bucket(self, name: &str, buckets: usize) -> usize {
        let hash = match self {
            HashStrategy::Additive => name.bytes().fold(0u64, |sum, b| sum + u64::from(b)),
            HashStrategy::Djb2 => name.bytes().fold(5381u64, |h, b| {
                h.wrapping_shl(5).wrapping_add(h).wrapping_add(u64::from(b))
            }),
        };
        (hash % buckets as u64) as usize
    }

    /// Lower-case name, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            HashStrategy::Additive => "additive",
            HashStrategy::Djb2 => "djb2",
        }
    }
}

impl fmt::Display for HashStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashStrategy {
    type Err = SymbolError;

    fn from_str(s: &str) -> SymbolResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "additive" => Ok(HashStrategy::Additive),
            "djb2" => Ok(HashStrategy::Djb2),
            _ => Err(SymbolError::UnknownHash(s.to_string())),
        }
    }
}

/// Fixed-size chained hash table of [`SymbolEntry`] values
///
/// Each bucket is a chain stored oldest-first; iteration walks it
/// newest-first so that reports list the most recent insertion at the head
/// of each chain.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    layout: TableLayout,
    hash: HashStrategy,
    buckets: Vec<Vec<SymbolEntry>>,
    len: usize,
}

impl SymbolTable {
    /// Create an empty table with the layout's default size and hash
    pub fn new(layout: TableLayout) -> Self {
        Self::empty(layout, layout.default_buckets(), layout.default_hash())
    }

    /// Create an empty table with an explicit bucket count
    ///
    /// # Errors
    ///
    /// [`SymbolError::ZeroBuckets`] if `buckets` is zero.
    pub fn with_buckets(layout: TableLayout, buckets: usize) -> SymbolResult<Self> {
        if buckets == 0 {
            return Err(SymbolError::ZeroBuckets);
        }
        Ok(Self::empty(layout, buckets, layout.default_hash()))
    }

    /// Replace the hash strategy of an empty table
    pub fn with_hash(mut self, hash: HashStrategy) -> Self {
        debug_assert!(self.is_empty(), "hash strategy must be chosen before inserting");
        self.hash = hash;
        self
    }

    fn empty(layout: TableLayout, buckets: usize, hash: HashStrategy) -> Self {
        Self {
            layout,
            hash,
            buckets: vec![Vec::new(); buckets],
            len: 0,
        }
    }

    /// The table's layout
    pub fn layout(&self) -> TableLayout {
        self.layout
    }

    /// The table's hash strategy
    pub fn hash(&self) -> HashStrategy {
        self.hash
    }

    /// Number of buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket index for `name`
    pub fn bucket_of(&self, name: &str) -> usize {
        self.hash.bucket(name, self.buckets.len())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been inserted
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn same_key(&self, entry: &SymbolEntry, name: &str, scope: &str) -> bool {
        entry.name == name
            && match self.layout {
                TableLayout::Simple => true,
                TableLayout::Scoped => entry.scope == scope,
            }
    }

    /// Insert `entry` unless an entry with the same key already exists.
    ///
    /// Returns `true` if the entry was added. An existing entry is never
    /// updated.
    pub fn insert(&mut self, entry: SymbolEntry) -> bool {
        let index = self.bucket_of(&entry.name);
        let exists = self.buckets[index]
            .iter()
            .any(|e| self.same_key(e, &entry.name, &entry.scope));
        if exists {
            return false;
        }

        debug!(
            name = %entry.name,
            scope = %entry.scope,
            category = %entry.category,
            bucket = index,
            "symbol inserted"
        );
        self.buckets[index].push(entry);
        self.len += 1;
        true
    }

    /// Record a function name
    pub fn record_function(&mut self, name: &str) -> bool {
        let entry = match self.layout {
            TableLayout::Simple => {
                SymbolEntry::new(name, "FUNC", GLOBAL_SCOPE, Category::Function, "-")
            },
            TableLayout::Scoped => SymbolEntry::new(
                name,
                "Unknown",
                GLOBAL_SCOPE,
                Category::Function,
                "Returns Unknown",
            ),
        };
        self.insert(entry)
    }

    /// Record a non-function identifier seen inside `scope`
    pub fn record_identifier(&mut self, name: &str, scope: &str) -> bool {
        let entry = match self.layout {
            TableLayout::Simple => {
                SymbolEntry::new(name, "IDENTIFIER", scope, Category::Identifier, "-")
            },
            TableLayout::Scoped => {
                SymbolEntry::new(name, "Unknown", scope, Category::Variable, "Stack allocated")
            },
        };
        self.insert(entry)
    }

    /// Look up an entry. `scope` is ignored by the simple layout.
    pub fn get(&self, name: &str, scope: &str) -> Option<&SymbolEntry> {
        self.buckets[self.bucket_of(name)]
            .iter()
            .find(|e| self.same_key(e, name, scope))
    }

    /// All entries in bucket order, newest first within a bucket
    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> + '_ {
        self.buckets.iter().flat_map(|chain| chain.iter().rev())
    }

    /// Entries of one bucket, newest first
    pub fn chain(&self, bucket: usize) -> impl Iterator<Item = &SymbolEntry> + '_ {
        self.buckets
            .get(bucket)
            .into_iter()
            .flat_map(|chain| chain.iter().rev())
    }

    /// Layout-specific tabular dump
    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_sizes() {
        assert_eq!(SymbolTable::new(TableLayout::Simple).bucket_count(), 50);
        assert_eq!(SymbolTable::new(TableLayout::Scoped).bucket_count(), 101);
    }

    #[test]
    fn test_zero_buckets_rejected() {
        let err = SymbolTable::with_buckets(TableLayout::Simple, 0).unwrap_err();
        assert_eq!(err, SymbolError::ZeroBuckets);
    }

    #[test]
    fn test_additive_hash() {
        // 'a' + 'b' = 97 + 98 = 195
        assert_eq!(HashStrategy::Additive.bucket("ab", 50), 195 % 50);
    }

    #[test]
    fn test_djb2_hash() {
        // ((5381 * 33) + 'a') % 101
        let expected = ((5381u64 * 33 + 97) % 101) as usize;
        assert_eq!(HashStrategy::Djb2.bucket("a", 101), expected);
    }

    #[test]
    fn test_with_hash_overrides_layout_default() {
        let table = SymbolTable::with_buckets(TableLayout::Simple, 50)
            .unwrap()
            .with_hash(HashStrategy::Djb2);
        assert_eq!(table.hash(), HashStrategy::Djb2);
        assert_eq!(table.bucket_of("add"), HashStrategy::Djb2.bucket("add", 50));
        assert_eq!(SymbolTable::new(TableLayout::Simple).hash(), HashStrategy::Additive);
    }

    #[test]
    fn test_hash_strategy_names() {
        assert_eq!("DJB2".parse::<HashStrategy>().unwrap(), HashStrategy::Djb2);
        assert_eq!(HashStrategy::Additive.to_string(), "additive");
        assert_eq!(
            "fnv".parse::<HashStrategy>().unwrap_err(),
            SymbolError::UnknownHash("fnv".to_string())
        );
    }

    #[test]
    fn test_first_insert_wins() {
        let mut table = SymbolTable::new(TableLayout::Simple);
        assert!(table.insert(SymbolEntry::new("x", "int", "Global", Category::Variable, "first")));
        assert!(!table.insert(SymbolEntry::new("x", "float", "Global", Category::Variable, "second")));

        let entry = table.get("x", "Global").unwrap();
        assert_eq!(entry.ty, "int");
        assert_eq!(entry.info, "first");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_simple_layout_ignores_scope() {
        let mut table = SymbolTable::new(TableLayout::Simple);
        assert!(table.record_identifier("x", "main"));
        assert!(!table.record_identifier("x", "other"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("x", "anything").unwrap().scope, "main");
    }

    #[test]
    fn test_scoped_layout_keys_by_scope() {
        let mut table = SymbolTable::new(TableLayout::Scoped);
        assert!(table.record_identifier("x", "Global"));
        assert!(table.record_identifier("x", "main"));
        assert!(!table.record_identifier("x", "main"));
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("x", "main").unwrap().category, Category::Variable);
        assert!(table.get("x", "helper").is_none());
    }

    #[test]
    fn test_record_function_attributes() {
        let mut simple = SymbolTable::new(TableLayout::Simple);
        simple.record_function("add");
        let entry = simple.get("add", GLOBAL_SCOPE).unwrap();
        assert_eq!(entry.ty, "FUNC");
        assert_eq!(entry.info, "-");

        let mut scoped = SymbolTable::new(TableLayout::Scoped);
        scoped.record_function("add");
        let entry = scoped.get("add", GLOBAL_SCOPE).unwrap();
        assert_eq!(entry.ty, "Unknown");
        assert_eq!(entry.category, Category::Function);
        assert_eq!(entry.info, "Returns Unknown");
    }

    #[test]
    fn test_chain_is_newest_first() {
        // One bucket forces every name into the same chain.
        let mut table = SymbolTable::with_buckets(TableLayout::Simple, 1).unwrap();
        table.record_identifier("first", GLOBAL_SCOPE);
        table.record_identifier("second", GLOBAL_SCOPE);
        table.record_identifier("third", GLOBAL_SCOPE);

        let names: Vec<_> = table.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["third", "second", "first"]);
    }

    #[test]
    fn test_iter_is_bucket_ordered() {
        let mut table = SymbolTable::with_buckets(TableLayout::Simple, 50).unwrap();
        // 'b' = 98 -> bucket 48, 'a' = 97 -> bucket 47
        table.record_identifier("b", GLOBAL_SCOPE);
        table.record_identifier("a", GLOBAL_SCOPE);
        let names: Vec<_> = table.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("Scoped".parse::<TableLayout>().unwrap(), TableLayout::Scoped);
        assert_eq!("simple".parse::<TableLayout>().unwrap(), TableLayout::Simple);
        assert!("nested".parse::<TableLayout>().is_err());
    }

    #[test]
    fn test_long_names_are_kept_whole() {
        let mut table = SymbolTable::new(TableLayout::Simple);
        let name = "n".repeat(200);
        table.record_identifier(&name, GLOBAL_SCOPE);
        assert_eq!(table.get(&name, GLOBAL_SCOPE).unwrap().name.len(), 200);
    }

    proptest! {
        #[test]
        fn prop_bucket_in_range(name in "[a-zA-Z_][a-zA-Z0-9_]{0,40}", buckets in 1usize..500) {
            prop_assert!(HashStrategy::Additive.bucket(&name, buckets) < buckets);
            prop_assert!(HashStrategy::Djb2.bucket(&name, buckets) < buckets);
        }

        #[test]
        fn prop_len_counts_distinct_names(names in proptest::collection::vec("[a-z]{1,6}", 0..60)) {
            let mut table = SymbolTable::new(TableLayout::Simple);
            for name in &names {
                table.record_identifier(name, GLOBAL_SCOPE);
            }
            let distinct: std::collections::HashSet<_> = names.iter().collect();
            prop_assert_eq!(table.len(), distinct.len());
            prop_assert_eq!(table.iter().count(), distinct.len());
        }
    }
}
