use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pbcore_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Corpus: {}", result.corpus_dir.display());

    let mut counts = Table::new();
    counts.set_header(vec![header_cell("Documents"), header_cell("Count")]);
    apply_summary_table_style(&mut counts);
    align_column(&mut counts, 1, CellAlignment::Right);
    counts.add_row(vec![Cell::new("Seen"), Cell::new(result.documents_seen)]);
    counts.add_row(vec![Cell::new("Parsed"), Cell::new(result.documents_parsed)]);
    counts.add_row(vec![
        Cell::new("Skipped"),
        count_cell(result.skipped.len(), Color::Yellow),
    ]);
    counts.add_row(vec![Cell::new("Asset rows"), Cell::new(result.asset_rows)]);
    counts.add_row(vec![
        Cell::new("Instantiation rows"),
        Cell::new(result.instantiation_rows),
    ]);
    println!("{counts}");

    let mut files = Table::new();
    files.set_header(vec![
        header_cell("Output"),
        header_cell("Path"),
        header_cell("Rows"),
        header_cell("SHA-256"),
    ]);
    apply_summary_table_style(&mut files);
    align_column(&mut files, 2, CellAlignment::Right);
    for output in &result.outputs {
        let rows = if output.label == "anomalies" {
            dim_cell("-")
        } else {
            Cell::new(output.file.rows)
        };
        files.add_row(vec![
            Cell::new(output.label)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(output.file.path.display()),
            rows,
            dim_cell(&output.file.sha256),
        ]);
    }
    println!("{files}");

    let anomalies = &result.anomalies;
    let mut issues = Table::new();
    issues.set_header(vec![header_cell("Anomaly"), header_cell("Assets")]);
    apply_summary_table_style(&mut issues);
    align_column(&mut issues, 1, CellAlignment::Right);
    issues.add_row(vec![
        Cell::new("Multiple Sony Ci IDs"),
        count_cell(anomalies.multiple_sonyci_ids.len(), Color::Yellow),
    ]);
    issues.add_row(vec![
        Cell::new("Missing Sony Ci ID"),
        count_cell(anomalies.missing_sonyci_ids.len(), Color::Yellow),
    ]);
    issues.add_row(vec![
        Cell::new("Mixed digital media types"),
        count_cell(anomalies.mixed_digital_media_types.len(), Color::Yellow),
    ]);
    println!("{issues}");
}

/// List skipped files with their reason on stderr.
pub fn print_skipped(result: &RunResult) {
    if result.skipped.is_empty() {
        return;
    }
    eprintln!("Skipped:");
    for skipped in &result.skipped {
        eprintln!("- {} ({}): {}", skipped.path.display(), skipped.kind, skipped.reason);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
