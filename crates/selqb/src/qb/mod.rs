//! Query builder (QB) module.
//!
//! One builder lives here: [`SelectQb`], which accumulates a column list, a
//! table name, and equality conditions, then renders a single SELECT
//! statement on demand.
//!
//! # Usage
//!
//! ```
//! use selqb::qb;
//!
//! let sql = qb::select_from("users")
//!     .eq("status", "'active'")
//!     .build();
//!
//! assert_eq!(sql, "SELECT * FROM users WHERE status='active';");
//! ```

mod select;

pub use select::SelectQb;

/// Create an empty SELECT query builder.
///
/// # Example
/// ```
/// let sql = selqb::qb::select().build();
/// assert_eq!(sql, "SELECT * FROM ;");
/// ```
pub fn select() -> SelectQb {
    SelectQb::new()
}

/// Create a SELECT query builder with the table already set.
///
/// # Example
/// ```
/// let sql = selqb::qb::select_from("users").build();
/// assert_eq!(sql, "SELECT * FROM users;");
/// ```
pub fn select_from(table: impl Into<String>) -> SelectQb {
    SelectQb::new().from(table)
}
