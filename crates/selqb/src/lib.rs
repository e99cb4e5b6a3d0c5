//! # selqb
//!
//! A small fluent builder for textual SQL SELECT statements.
//!
//! ## Features
//!
//! - **String in, string out**: column names, the table name, and equality
//!   values are stored and rendered verbatim — no escaping, no quoting, no
//!   parameterization
//! - **Deterministic rendering**: insertion order is preserved for columns
//!   and conditions; `build()` is a pure projection of the accumulated state
//! - **Both condition orderings**: `eq_pairs` keeps caller order, `eq_map`
//!   renders in key order
//!
//! ## Query Builder (qb)
//!
//! ```
//! use selqb::qb;
//!
//! let sql = qb::select()
//!     .add_columns(&["name", "phone", "email"])
//!     .from("students")
//!     .eq("id", "42")
//!     .eq("name", "John")
//!     .build();
//!
//! assert_eq!(sql, "SELECT name, phone, email FROM students WHERE id=42 AND name=John;");
//! ```
//!
//! This is a statement *assembler*, not a query layer: it never talks to a
//! database and performs no validation of identifiers or values. Callers who
//! need a string literal in a condition must pre-quote it themselves
//! (pass `"'John'"`, not `"John"`).

pub mod qb;

pub use qb::{SelectQb, select, select_from};
