//! Labeled flat tables and the asset/instantiation left join.

use std::collections::HashMap;

use pbcore_model::{AssetRecord, InstantiationRecord, JOIN_KEY, TableRow, column_index};

/// A named table of string cells with a fixed column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from typed rows using their column schema.
    pub fn from_rows<R: TableRow>(name: impl Into<String>, rows: &[R]) -> Self {
        Self {
            name: name.into(),
            columns: R::COLUMNS.iter().map(|c| (*c).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.cells().into_iter().map(str::to_string).collect())
                .collect(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Values of one column, top to bottom.
    pub fn column_values(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.column_position(name)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }
}

/// The two extracted tables.
#[derive(Debug, Clone)]
pub struct CorpusTables {
    pub assets: Table,
    pub instantiations: Table,
}

pub const ASSET_TABLE: &str = "assets";
pub const INSTANTIATION_TABLE: &str = "instantiations";
pub const JOINED_TABLE: &str = "assets_instantiations";

/// Assemble accumulated rows into the asset and instantiation tables.
pub fn build_tables(assets: &[AssetRecord], instantiations: &[InstantiationRecord]) -> CorpusTables {
    CorpusTables {
        assets: Table::from_rows(ASSET_TABLE, assets),
        instantiations: Table::from_rows(INSTANTIATION_TABLE, instantiations),
    }
}

impl CorpusTables {
    /// Left outer join of assets to instantiations on `asset_id`.
    ///
    /// Every asset column, then every instantiation column except the key.
    /// Assets without instantiations keep one row with empty instantiation
    /// cells; matches keep instantiation order.
    pub fn left_join(&self) -> Table {
        let asset_columns: Vec<&str> = self.assets.columns.iter().map(String::as_str).collect();
        let inst_columns: Vec<&str> = self
            .instantiations
            .columns
            .iter()
            .map(String::as_str)
            .collect();
        let asset_key = column_index(&asset_columns, JOIN_KEY);
        let inst_key = column_index(&inst_columns, JOIN_KEY);

        let mut columns = self.assets.columns.clone();
        columns.extend(
            self.instantiations
                .columns
                .iter()
                .enumerate()
                .filter(|(index, _)| Some(*index) != inst_key)
                .map(|(_, column)| column.clone()),
        );
        let inst_width = inst_columns.len() - usize::from(inst_key.is_some());

        let mut by_key: HashMap<&str, Vec<&Vec<String>>> = HashMap::new();
        if let Some(key) = inst_key {
            for row in &self.instantiations.rows {
                by_key.entry(row[key].as_str()).or_default().push(row);
            }
        }

        let mut rows = Vec::new();
        for asset_row in &self.assets.rows {
            let matches = asset_key
                .and_then(|key| by_key.get(asset_row[key].as_str()))
                .filter(|matches| !matches.is_empty());
            match matches {
                Some(matches) => {
                    for inst_row in matches {
                        let mut row = asset_row.clone();
                        row.extend(
                            inst_row
                                .iter()
                                .enumerate()
                                .filter(|(index, _)| Some(*index) != inst_key)
                                .map(|(_, cell)| cell.clone()),
                        );
                        rows.push(row);
                    }
                }
                None => {
                    let mut row = asset_row.clone();
                    row.extend(std::iter::repeat_n(String::new(), inst_width));
                    rows.push(row);
                }
            }
        }

        Table {
            name: JOINED_TABLE.to_string(),
            columns,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbcore_model::{ASSET_COLUMNS, INSTANTIATION_COLUMNS};

    fn asset(id: &str) -> AssetRecord {
        AssetRecord {
            asset_id: id.to_string(),
            ..AssetRecord::default()
        }
    }

    fn inst(id: &str, identifiers: &str) -> InstantiationRecord {
        InstantiationRecord {
            asset_id: id.to_string(),
            identifiers: identifiers.to_string(),
            ..InstantiationRecord::default()
        }
    }

    #[test]
    fn tables_follow_schema() {
        let tables = build_tables(&[asset("a")], &[inst("a", "x")]);
        assert_eq!(tables.assets.columns.len(), ASSET_COLUMNS.len());
        assert_eq!(tables.instantiations.columns.len(), INSTANTIATION_COLUMNS.len());
        assert_eq!(tables.assets.column_values("asset_id"), Some(vec!["a"]));
    }

    #[test]
    fn left_join_keeps_assets_without_instantiations() {
        let tables = build_tables(
            &[asset("a"), asset("b")],
            &[inst("a", "x"), inst("c", "orphan"), inst("a", "y")],
        );
        let joined = tables.left_join();
        assert_eq!(
            joined.columns.len(),
            ASSET_COLUMNS.len() + INSTANTIATION_COLUMNS.len() - 1
        );
        assert_eq!(joined.row_count(), 3);
        assert_eq!(
            joined.column_values("asset_id"),
            Some(vec!["a", "a", "b"])
        );
        assert_eq!(
            joined.column_values("inst_identifiers"),
            Some(vec!["x", "y", ""])
        );
        assert!(joined.rows.iter().all(|row| row.len() == joined.columns.len()));
    }

    #[test]
    fn duplicate_instantiation_rows_are_kept() {
        let tables = build_tables(&[asset("a")], &[inst("a", "x"), inst("a", "x")]);
        assert_eq!(tables.left_join().row_count(), 2);
    }
}
