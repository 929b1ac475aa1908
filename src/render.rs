use crate::{BenchTableError, table::ComparisonTable};

const LABEL_HEADER: &str = "Bins";
const FACTOR_HEADER: &str = "Factor";
const COLUMN_GAP: &str = "  ";

/// Plain-text table with a positional index column, right-aligned.
pub fn render_text(table: &ComparisonTable) -> String {
    let header = vec![
        String::new(),
        LABEL_HEADER.to_string(),
        format!("Time [{}]", table.time_unit),
        FACTOR_HEADER.to_string(),
    ];
    let mut lines = vec![header];
    for (idx, row) in table.rows.iter().enumerate() {
        lines.push(vec![
            idx.to_string(),
            row.label.clone(),
            row.time.to_string(),
            format!("{:.2}", row.factor),
        ]);
    }

    let mut widths = [0usize; 4];
    for line in &lines {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in &lines {
        let cells: Vec<String> = line
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:>width$}"))
            .collect();
        out.push_str(cells.join(COLUMN_GAP).trim_end());
        out.push('\n');
    }
    out
}

pub fn render_json(tables: &[ComparisonTable]) -> Result<String, BenchTableError> {
    serde_json::to_string_pretty(tables)
        .map_err(|e| BenchTableError::serialization(e.to_string()))
}
