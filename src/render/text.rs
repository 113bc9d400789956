//! Plain text table renderer for terminal preview.

use crate::model::DisplayGrid;
use unicode_width::UnicodeWidthStr;

/// Render a grid as a column-aligned text table.
///
/// ```text
/// Name | Age | AgeGroup
/// -----+-----+---------
/// Ann  | 25  | Under 30
/// ```
pub fn to_text_table(grid: &DisplayGrid) -> String {
    if grid.header.is_empty() {
        return String::new();
    }

    let mut widths: Vec<usize> = grid.header.iter().map(|h| h.width()).collect();
    for row in &grid.body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut lines = Vec::with_capacity(grid.body.len() + 2);
    lines.push(format_row(&grid.header, &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &grid.body {
        lines.push(format_row(row, &widths));
    }

    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.width());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    padded.join(" | ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_columns() {
        let grid = DisplayGrid {
            header: vec!["Name".into(), "Age".into(), "AgeGroup".into()],
            body: vec![vec!["Ann".into(), "25".into(), "Under 30".into()]],
        };
        let text = to_text_table(&grid);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Name | Age | AgeGroup");
        assert_eq!(lines[1], "-----+-----+---------");
        assert_eq!(lines[2], "Ann  | 25  | Under 30");
    }

    #[test]
    fn test_wide_characters() {
        let grid = DisplayGrid {
            header: vec!["이름".into(), "x".into()],
            body: vec![vec!["A".into(), "1".into()]],
        };
        let text = to_text_table(&grid);
        let lines: Vec<&str> = text.lines().collect();

        // Hangul syllables take two columns each
        assert_eq!(lines[0], "이름 | x");
        assert_eq!(lines[2], "A    | 1");
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(to_text_table(&DisplayGrid::default()), "");
    }
}
