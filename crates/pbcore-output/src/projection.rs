//! Column projection over a [`Table`].

use pbcore_model::Projection;

use crate::error::{OutputError, Result};
use crate::table::Table;

/// Select the projected columns, in projection order.
///
/// Fails on the first name the table does not have.
pub fn project(table: &Table, projection: &Projection) -> Result<Table> {
    let names = projection.column_names();
    let mut indices = Vec::with_capacity(names.len());
    for name in &names {
        let index = table
            .column_position(name)
            .ok_or_else(|| OutputError::UnknownColumn {
                column: (*name).to_string(),
                available: table.columns.join(", "),
            })?;
        indices.push(index);
    }

    Ok(Table {
        name: table.name.clone(),
        columns: names.iter().map(|name| (*name).to_string()).collect(),
        rows: table
            .rows
            .iter()
            .map(|row| indices.iter().map(|&index| row[index].clone()).collect())
            .collect(),
    })
}
