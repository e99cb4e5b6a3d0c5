//! Example demonstrating the SELECT builder.
//!
//! Run with:
//!   cargo run --example generate_query -p selqb

use selqb::qb;
use std::collections::BTreeMap;

fn main() {
    let mut conditions = BTreeMap::new();
    conditions.insert("id", "42");
    conditions.insert("name", "John");

    let query = qb::select()
        .add_columns(&["name", "phone", "email"])
        .from("students")
        .eq_map(&conditions)
        .build();

    println!("Generated query: {query}");
}
