//! Tabular symbol table dump.
//!
//! The report is a [`Display`](std::fmt::Display) value so the driver can
//! write it to any sink without building an intermediate string.

use std::fmt;

use crate::entry::SymbolEntry;
use crate::table::{SymbolTable, TableLayout};

const SIMPLE_BANNER: &str = "========== SYMBOL TABLE ==========";
const SCOPED_RULE_WIDTH: usize = 79;

/// Read-only view of a table, formatted according to its layout
pub struct Report<'a> {
    table: &'a SymbolTable,
}

impl<'a> Report<'a> {
    /// Create a report over `table`
    pub fn new(table: &'a SymbolTable) -> Self {
        Self { table }
    }

    fn simple_row(f: &mut fmt::Formatter<'_>, entry: &SymbolEntry) -> fmt::Result {
        writeln!(f, "{}\t{}\t{}", entry.name, entry.ty, entry.info)
    }

    fn scoped_row(
        f: &mut fmt::Formatter<'_>,
        name: &str,
        ty: &str,
        scope: &str,
        category: &str,
        info: &str,
    ) -> fmt::Result {
        writeln!(f, "{:<15} {:<10} {:<15} {:<12} {:<20}", name, ty, scope, category, info)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        match self.table.layout() {
            TableLayout::Simple => {
                writeln!(f, "{}", SIMPLE_BANNER)?;
                writeln!(f, "Name\tType\tArgument")?;
                for entry in self.table.iter() {
                    Self::simple_row(f, entry)?;
                }
            },
            TableLayout::Scoped => {
                Self::scoped_row(f, "Name", "Type", "Scope", "Category", "Additional Info")?;
                writeln!(f, "{}", "-".repeat(SCOPED_RULE_WIDTH))?;
                for entry in self.table.iter() {
                    Self::scoped_row(
                        f,
                        &entry.name,
                        &entry.ty,
                        &entry.scope,
                        entry.category.as_str(),
                        &entry.info,
                    )?;
                }
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{SymbolTable, TableLayout, GLOBAL_SCOPE};

    #[test]
    fn test_empty_simple_report() {
        let table = SymbolTable::new(TableLayout::Simple);
        assert_eq!(
            table.report().to_string(),
            "\n========== SYMBOL TABLE ==========\nName\tType\tArgument\n"
        );
    }

    #[test]
    fn test_simple_rows() {
        let mut table = SymbolTable::new(TableLayout::Simple);
        table.record_function("add");
        let report = table.report().to_string();
        assert!(report.ends_with("add\tFUNC\t-\n"));
    }

    #[test]
    fn test_scoped_header_and_rule() {
        let table = SymbolTable::new(TableLayout::Scoped);
        let report = table.report().to_string();
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with("Name            Type       Scope           Category     Additional Info"));
        assert_eq!(lines[2], "-".repeat(79));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_scoped_row_padding() {
        let mut table = SymbolTable::new(TableLayout::Scoped);
        table.record_identifier("x", GLOBAL_SCOPE);
        let report = table.report().to_string();
        let row = report.lines().nth(3).unwrap();
        assert_eq!(
            row,
            format!("{:<15} {:<10} {:<15} {:<12} {:<20}", "x", "Unknown", "Global", "VARIABLE", "Stack allocated")
        );
    }
}
