//! Column-width pre-pass: builds the per-depth maximum key length table.

use super::types::ColumnTable;
use super::value::Value;

/// Walk the tree once and record, for every nesting depth, the widest object
/// key plus one reserved separating space.
///
/// Only the maximum is accumulated, so traversal order never affects the
/// result. Scalar array elements touch no column.
pub fn build_column_table(root: &Value) -> ColumnTable {
    let mut table = ColumnTable::default();
    collect(root, 0, &mut table);
    table
}

fn collect(value: &Value, depth: usize, table: &mut ColumnTable) {
    match value {
        Value::Object(members) => {
            for (key, _) in members {
                table.observe(depth, key.chars().count() + 1);
            }
            for (_, child) in members {
                if child.is_container() {
                    collect(child, depth + 1, table);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                if item.is_container() {
                    collect(item, depth + 1, table);
                }
            }
        }
        _ => {}
    }
}
