use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use csvnorm_cli::types::RunResult;

/// Print the run summary to stderr, keeping stdout free for normalized rows.
pub fn print_summary(result: &RunResult) {
    eprintln!("Input: {}", result.input);
    eprintln!("Output: {}", result.output);
    eprintln!("Elapsed: {:.3}s", result.elapsed.as_secs_f64());
    eprintln!("{}", build_summary_table(result));
}

pub fn build_summary_table(result: &RunResult) -> Table {
    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![
        Cell::new("Header"),
        if stats.header_written {
            Cell::new("✓")
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new("✗ missing")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold)
        },
    ]);
    table.add_row(vec![Cell::new("Read"), Cell::new(stats.rows_read)]);
    table.add_row(vec![
        Cell::new("Written"),
        Cell::new(stats.rows_written).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Failed"),
        count_cell(stats.rows_failed, Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Empty (skipped)"),
        count_cell(stats.rows_skipped_empty, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Fields repaired"),
        count_cell(stats.fields_repaired, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Diagnostics")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(stats.diagnostics, Color::Red).add_attribute(Attribute::Bold),
    ]);
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: u64, color: Color) -> Cell {
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

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use csvnorm_cli::types::PipelineStats;

    fn render(stats: PipelineStats) -> String {
        let result = RunResult {
            input: "in.csv".to_string(),
            output: "<stdout>".to_string(),
            stats,
            elapsed: Duration::from_millis(12),
        };
        let mut table = build_summary_table(&result);
        table.force_no_tty();
        table.to_string()
    }

    #[test]
    fn test_summary_lists_every_counter() {
        let rendered = render(PipelineStats {
            header_written: true,
            rows_read: 5,
            rows_written: 3,
            rows_failed: 1,
            rows_skipped_empty: 1,
            fields_repaired: 2,
            diagnostics: 1,
        });
        for label in [
            "Header",
            "Read",
            "Written",
            "Failed",
            "Empty (skipped)",
            "Fields repaired",
            "Diagnostics",
        ] {
            assert!(rendered.contains(label), "missing {label}");
        }
    }
    #[test]
    fn test_header_row_shows_whether_header_was_written() {
        let written = render(PipelineStats {
            header_written: true,
            ..PipelineStats::default()
        });
        assert!(written.contains("✓"));
        assert!(!written.contains("missing"));

        let missing = render(PipelineStats {
            diagnostics: 1,
            ..PipelineStats::default()
        });
        let header_line = missing
            .lines()
            .find(|line| line.contains("Header"))
            .unwrap();
        assert!(header_line.contains("✗ missing"));
        assert!(!missing.contains("✓"));
    }
}
