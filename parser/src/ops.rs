//! FILENAME: parser/src/ops.rs
//! PURPOSE: Operator precedence and associativity table.
//! CONTEXT: The shunting-yard translator consults this table to decide when
//! an operator already on the stack outranks the incoming one. The table is
//! built once and handed to the translator by reference; nothing in the
//! pipeline reads it as ambient state, so tests can inject their own.

use crate::token::Operator;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Grouping rule for operators of equal precedence.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Associativity {
    Left,
    Right,
}

/// Binding strength and grouping rule for one operator.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct OperatorSpec {
    pub precedence: u8,
    pub associativity: Associativity,
}

/// Immutable mapping from operator to its spec.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    specs: HashMap<Operator, OperatorSpec>,
}

impl OperatorTable {
    /// Builds the standard table: `+` and `-` bind loosest, `*` and `/` bind
    /// tighter, `^` binds tightest and is the only right-associative entry.
    pub fn standard() -> Self {
        let mut specs = HashMap::new();
        specs.insert(
            Operator::Add,
            OperatorSpec {
                precedence: 1,
                associativity: Associativity::Left,
            },
        );
        specs.insert(
            Operator::Subtract,
            OperatorSpec {
                precedence: 1,
                associativity: Associativity::Left,
            },
        );
        specs.insert(
            Operator::Multiply,
            OperatorSpec {
                precedence: 2,
                associativity: Associativity::Left,
            },
        );
        specs.insert(
            Operator::Divide,
            OperatorSpec {
                precedence: 2,
                associativity: Associativity::Left,
            },
        );
        specs.insert(
            Operator::Power,
            OperatorSpec {
                precedence: 3,
                associativity: Associativity::Right,
            },
        );
        OperatorTable { specs }
    }

    /// Builds a table from explicit entries. Used by tests and embedders
    /// that want non-standard binding rules.
    pub fn from_specs(specs: HashMap<Operator, OperatorSpec>) -> Self {
        OperatorTable { specs }
    }

    /// Shared instance of the standard table, initialized on first use.
    pub fn shared() -> &'static OperatorTable {
        static TABLE: LazyLock<OperatorTable> = LazyLock::new(OperatorTable::standard);
        &TABLE
    }

    /// Looks up the spec for an operator. The standard table covers every
    /// operator; a custom table may omit entries.
    pub fn get(&self, op: Operator) -> Option<&OperatorSpec> {
        self.specs.get(&op)
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::standard()
    }
}
