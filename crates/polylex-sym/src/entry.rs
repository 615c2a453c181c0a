//! Symbol entries.

use serde::Serialize;
use std::fmt;

/// What kind of name an entry records
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A name immediately followed by `(` under the profile's rule
    Function,
    /// A name declared inside the current scope (scoped layout)
    Variable,
    /// Any other non-keyword name (simple layout)
    Identifier,
    /// A named constant
    Constant,
}

impl Category {
    /// Upper-case label used in the scoped report
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Function => "FUNCTION",
            Category::Variable => "VARIABLE",
            Category::Identifier => "IDENTIFIER",
            Category::Constant => "CONSTANT",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the symbol table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
    /// The identifier text
    pub name: String,
    /// Declared type, or a placeholder when the lexer cannot know it
    #[serde(rename = "type")]
    pub ty: String,
    /// `Global` or the name of the enclosing function
    pub scope: String,
    /// Entry category
    pub category: Category,
    /// Free-form extra column (`Argument` in the simple report)
    pub info: String,
}

impl SymbolEntry {
    /// Create a new entry
    pub fn new(
        name: impl Into<String>,
        ty: impl Into<String>,
        scope: impl Into<String>,
        category: Category,
        info: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            scope: scope.into(),
            category,
            info: info.into(),
        }
    }
}
