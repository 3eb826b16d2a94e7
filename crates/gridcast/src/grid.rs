//! Plain-text grid rendering of a plan and its rows.
//!
//! Produces one header line plus one line per row, columns separated by a
//! single space. Explicit plan widths are honored; auto columns are sized
//! from the header and cell content, Unicode-aware, and the widest columns
//! shrink first when the total exceeds the available width.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use gridcast_plan::ColumnPlan;

use crate::row::Row;

const ELLIPSIS: &str = "…";
const MIN_COLUMN_WIDTH: usize = 5;

/// Renders the plan header and rows into display lines.
pub fn render_grid(plan: &ColumnPlan, rows: &[Row], total_width: usize) -> Vec<String> {
    if plan.columns.is_empty() {
        return Vec::new();
    }

    let cells: Vec<Vec<String>> = rows.iter().map(|row| row.cells(plan)).collect();
    let widths = resolve_widths(plan, &cells, total_width);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let headers: Vec<String> = plan
        .columns
        .iter()
        .map(|column| column.header.clone())
        .collect();
    lines.push(render_line(&headers, &widths));
    for row in &cells {
        lines.push(render_line(row, &widths));
    }
    lines
}

/// Resolves one width per column.
fn resolve_widths(plan: &ColumnPlan, cells: &[Vec<String>], total_width: usize) -> Vec<usize> {
    let separators = plan.columns.len() - 1;
    let available = total_width.saturating_sub(separators);

    let mut widths: Vec<usize> = plan
        .columns
        .iter()
        .enumerate()
        .map(|(index, column)| match column.width {
            Some(width) => width,
            None => {
                let content = cells
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.width())
                    .max()
                    .unwrap_or(0);
                content.max(column.header.width())
            }
        })
        .collect();

    // shrink the widest column until the row fits or nothing can give
    loop {
        let used: usize = widths.iter().sum();
        if used <= available {
            break;
        }
        let Some(widest) = widths
            .iter()
            .enumerate()
            .filter(|(_, width)| **width > MIN_COLUMN_WIDTH)
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index)
        else {
            break;
        };
        let excess = used - available;
        let give = (widths[widest] - MIN_COLUMN_WIDTH).min(excess);
        widths[widest] -= give;
    }

    widths
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (index, width) in widths.iter().enumerate() {
        if index > 0 {
            line.push(' ');
        }
        let cell = cells.get(index).map(String::as_str).unwrap_or("");
        line.push_str(&fit(cell, *width));
    }
    line.trim_end().to_string()
}

/// Pads or truncates a cell to exactly `width` display columns.
fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        let mut padded = text.to_string();
        padded.push_str(&" ".repeat(width - text_width));
        return padded;
    }

    let keep = width.saturating_sub(ELLIPSIS.width());
    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > keep {
            break;
        }
        truncated.push(ch);
        used += ch_width;
    }
    truncated.push_str(ELLIPSIS);
    let truncated_width = truncated.width();
    if truncated_width < width {
        truncated.push_str(&" ".repeat(width - truncated_width));
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcast_plan::{PlanColumn, Role};

    #[test]
    fn fit_pads_short_cells() {
        assert_eq!(fit("ab", 5), "ab   ");
    }

    #[test]
    fn fit_truncates_long_cells_with_an_ellipsis() {
        assert_eq!(fit("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn fit_counts_wide_characters() {
        // CJK characters occupy two display columns
        assert_eq!(fit("漢字", 5), "漢字 ");
        assert_eq!(fit("漢字漢", 5), "漢字…");
    }

    #[test]
    fn empty_plan_renders_nothing() {
        let plan = ColumnPlan { columns: vec![] };
        assert!(render_grid(&plan, &[], 80).is_empty());
    }

    #[test]
    fn shrinks_the_widest_auto_column_to_fit() {
        let plan = ColumnPlan {
            columns: vec![
                PlanColumn::new("A", Role::Extra),
                PlanColumn::new("B", Role::Extra),
            ],
        };
        let rows = vec![Row::literal(0, String::new(), String::new())];
        // no cells answer Extra roles, so only headers size the columns;
        // widths stay tiny and the line fits
        let lines = render_grid(&plan, &rows, 10);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('A'));
    }
}
