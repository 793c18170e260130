use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use uuidcsv_model::{Record, Stats, UploadState};
use uuidcsv_validate::compute_stats;

use crate::types::CheckResult;

pub fn print_summary(result: &CheckResult, show_records: bool) {
    match &result.state {
        UploadState::Idle | UploadState::Processing { .. } => {}
        UploadState::Succeeded {
            file_name,
            records,
            stats,
        } => {
            println!("File: {file_name}");
            print_stats_table(*stats);
            if show_records {
                print_record_table(records);
            }
            print_artifacts(result);
            if let Some(response) = &result.submission {
                println!(
                    "Submitted {} valid UUIDs for processing at {}",
                    response.processed_count, response.timestamp
                );
            }
        }
        UploadState::Failed {
            file_name,
            message,
            records,
        } => {
            // Count failures arrive here with their records preserved.
            if !records.is_empty() {
                println!("File: {file_name}");
                print_stats_table(compute_stats(records));
                if show_records {
                    print_record_table(records);
                }
            }
            eprintln!("error: {message}");
        }
    }
}

fn print_stats_table(stats: Stats) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Records"),
        header_cell("Valid"),
        header_cell("Invalid"),
        header_cell("Valid %"),
    ]);
    apply_table_style(&mut table);
    for index in 0..4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(stats.total),
        count_cell(stats.valid, Color::Green),
        count_cell(stats.invalid, Color::Red),
        Cell::new(format!("{}%", stats.percentage)),
    ]);
    println!("{table}");
}

fn print_record_table(records: &[Record]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("UUID"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for record in records {
        table.add_row(vec![
            Cell::new(record.position),
            Cell::new(&record.value),
            status_cell(record.is_valid),
        ]);
    }
    println!("{table}");
}

fn print_artifacts(result: &CheckResult) {
    if let Some(path) = &result.report_json {
        println!("Report (JSON): {}", path.display());
    }
    if let Some(path) = &result.report_csv {
        println!("Report (CSV): {}", path.display());
    }
    if let Some(path) = &result.export {
        println!("Export: {}", path.display());
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

fn status_cell(is_valid: bool) -> Cell {
    if is_valid {
        Cell::new("valid").fg(Color::Green)
    } else {
        Cell::new("invalid")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
