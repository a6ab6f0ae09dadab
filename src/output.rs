//! Console output for the environment listing

use comfy_table::{presets::NOTHING, ColumnConstraint, Table, Width};

use crate::grouping::GroupedResult;

/// Render environment IDs as a bracketed list, e.g. `[3, 7]`
pub fn format_ids(ids: &[i64]) -> String {
    let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    format!("[{}]", ids.join(", "))
}

/// Print the grouped environments as a two-column console table.
///
/// One row per environment name in first-seen order, with the name column
/// held to a minimum width of 15 characters.
pub fn output_environments(environments: &GroupedResult<i64>) {
    println!("-All Foreman environments and their respective IDs-");

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_constraints(vec![ColumnConstraint::LowerBoundary(Width::Fixed(15))]);

    for (name, ids) in environments.iter() {
        table.add_row(vec![name.to_string(), format_ids(ids)]);
    }

    println!("{}", table);
}
