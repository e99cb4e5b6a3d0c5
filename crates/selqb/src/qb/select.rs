//! SELECT statement builder.

use std::collections::BTreeMap;

/// Fluent builder for one textual SELECT statement.
///
/// The builder accumulates columns, a table name, and `column=value`
/// equality conditions, all as opaque strings, and renders them with
/// [`build`](SelectQb::build). Every input is kept verbatim: no trimming,
/// no quoting, no identifier validation. An empty builder still renders
/// (`SELECT * FROM ;`), producing a syntactically incomplete statement by
/// design rather than an error.
#[must_use]
#[derive(Clone, Debug, Default)]
pub struct SelectQb {
    /// SELECT columns, insertion order, duplicates allowed.
    columns: Vec<String>,
    /// FROM table, last write wins.
    table: String,
    /// WHERE equality pairs, insertion order, duplicates allowed.
    conditions: Vec<(String, String)>,
}

impl SelectQb {
    /// Create an empty builder: no columns, no table, no conditions.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== SELECT columns ====================

    /// Append one SELECT column.
    ///
    /// The name is stored verbatim; an empty string is accepted.
    pub fn add_column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(name.into());
        self
    }

    /// Append multiple SELECT columns, in slice order.
    ///
    /// An empty slice is a no-op.
    pub fn add_columns(mut self, names: &[&str]) -> Self {
        for name in names {
            self.columns.push((*name).to_string());
        }
        self
    }

    // ==================== FROM ====================

    /// Set the table name, replacing any previous value.
    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    // ==================== WHERE conditions ====================

    /// Append one equality condition, rendered as `column=value`.
    ///
    /// The value is not quoted: pass `"'John'"` to compare against the
    /// string literal `'John'`.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.conditions.push((column.into(), value.into()));
        self
    }

    /// Append equality conditions in slice order.
    ///
    /// This is the order-preserving batch form of [`eq`](SelectQb::eq).
    pub fn eq_pairs(mut self, pairs: &[(&str, &str)]) -> Self {
        for (column, value) in pairs {
            self.conditions
                .push(((*column).to_string(), (*value).to_string()));
        }
        self
    }

    /// Append equality conditions in key order.
    ///
    /// `BTreeMap` iteration is sorted by key, so the resulting WHERE clause
    /// is ordered by column name regardless of how the map was populated.
    /// Use [`eq_pairs`](SelectQb::eq_pairs) when caller-specified order
    /// matters.
    pub fn eq_map<K, V>(mut self, kv: &BTreeMap<K, V>) -> Self
    where
        K: AsRef<str> + Ord,
        V: AsRef<str>,
    {
        for (column, value) in kv {
            self.conditions
                .push((column.as_ref().to_string(), value.as_ref().to_string()));
        }
        self
    }

    // ==================== Build ====================

    /// Render the SELECT statement.
    ///
    /// Pure projection of the current state: does not mutate the builder and
    /// returns identical output on repeated calls with no mutation between
    /// them. Shape:
    ///
    /// ```text
    /// SELECT <cols-or-*> FROM <table>[ WHERE <col>=<val> AND ...];
    /// ```
    pub fn build(&self) -> String {
        // Pre-size: clause keywords plus the stored fragments and separators.
        let mut cap = "SELECT * FROM ;".len() + self.table.len();
        for col in &self.columns {
            cap += col.len() + 2;
        }
        for (column, value) in &self.conditions {
            cap += column.len() + value.len() + " AND =".len();
        }

        let mut sql = String::with_capacity(cap);

        sql.push_str("SELECT ");
        if self.columns.is_empty() {
            sql.push('*');
        } else {
            for (i, col) in self.columns.iter().enumerate() {
                if i > 0 {
                    sql.push_str(", ");
                }
                sql.push_str(col);
            }
        }

        sql.push_str(" FROM ");
        sql.push_str(&self.table);

        if !self.conditions.is_empty() {
            sql.push_str(" WHERE ");
            for (i, (column, value)) in self.conditions.iter().enumerate() {
                if i > 0 {
                    sql.push_str(" AND ");
                }
                sql.push_str(column);
                sql.push('=');
                sql.push_str(value);
            }
        }

        sql.push(';');

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "selqb.sql",
            columns = self.columns.len(),
            conditions = self.conditions.len(),
            sql = %sql,
            "built SELECT statement"
        );

        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder() {
        let qb = SelectQb::new();
        assert_eq!(qb.build(), "SELECT * FROM ;");
    }

    #[test]
    fn test_columns_in_insertion_order() {
        let qb = SelectQb::new()
            .add_column("name")
            .add_column("phone")
            .add_column("email")
            .from("students");
        assert_eq!(qb.build(), "SELECT name, phone, email FROM students;");
    }

    #[test]
    fn test_duplicate_columns_kept() {
        let qb = SelectQb::new()
            .add_column("id")
            .add_column("id")
            .from("t");
        assert_eq!(qb.build(), "SELECT id, id FROM t;");
    }

    #[test]
    fn test_add_columns_empty_slice_is_noop() {
        let qb = SelectQb::new().add_columns(&[]).from("t");
        assert_eq!(qb.build(), "SELECT * FROM t;");
    }

    #[test]
    fn test_from_last_write_wins() {
        let qb = SelectQb::new().from("a").from("b");
        assert_eq!(qb.build(), "SELECT * FROM b;");
    }

    #[test]
    fn test_single_condition() {
        let qb = SelectQb::new().from("users").eq("status", "'active'");
        assert_eq!(qb.build(), "SELECT * FROM users WHERE status='active';");
    }

    #[test]
    fn test_conditions_joined_with_and_in_order() {
        let qb = SelectQb::new()
            .from("users")
            .eq("id", "42")
            .eq("name", "John");
        assert_eq!(qb.build(), "SELECT * FROM users WHERE id=42 AND name=John;");
    }

    #[test]
    fn test_duplicate_condition_columns_kept() {
        let qb = SelectQb::new().from("t").eq("id", "1").eq("id", "2");
        assert_eq!(qb.build(), "SELECT * FROM t WHERE id=1 AND id=2;");
    }

    #[test]
    fn test_eq_pairs_preserves_slice_order() {
        let qb = SelectQb::new()
            .from("users")
            .eq_pairs(&[("name", "John"), ("id", "42")]);
        assert_eq!(qb.build(), "SELECT * FROM users WHERE name=John AND id=42;");
    }

    #[test]
    fn test_eq_map_orders_by_key() {
        let mut kv = BTreeMap::new();
        kv.insert("name", "John");
        kv.insert("id", "42");
        let qb = SelectQb::new().from("users").eq_map(&kv);
        assert_eq!(qb.build(), "SELECT * FROM users WHERE id=42 AND name=John;");
    }

    #[test]
    fn test_build_is_repeatable() {
        let qb = SelectQb::new()
            .add_column("id")
            .from("users")
            .eq("id", "1");
        assert_eq!(qb.build(), qb.build());
    }

    #[test]
    fn test_inputs_kept_verbatim() {
        let qb = SelectQb::new()
            .add_column("  spaced  ")
            .add_column("")
            .from(" Users ")
            .eq("a;DROP", "'x''y'");
        assert_eq!(
            qb.build(),
            "SELECT   spaced  ,  FROM  Users  WHERE a;DROP='x''y';"
        );
    }
}
