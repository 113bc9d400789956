//! HTML table renderer.

use crate::model::DisplayGrid;

/// Render a grid as an HTML table with a `<thead>` and a `<tbody>`.
///
/// Every row is rendered; cell text is escaped.
pub fn to_html_table(grid: &DisplayGrid) -> String {
    let mut html = String::from("<table>\n  <thead>\n    <tr>\n");
    for name in &grid.header {
        html.push_str(&format!("      <th>{}</th>\n", escape_html(name)));
    }
    html.push_str("    </tr>\n  </thead>\n  <tbody>\n");

    for row in &grid.body {
        html.push_str("    <tr>\n");
        for cell in row {
            html.push_str(&format!("      <td>{}</td>\n", escape_html(cell)));
        }
        html.push_str("    </tr>\n");
    }

    html.push_str("  </tbody>\n</table>");
    html
}

/// Escape text for use in HTML content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(header: &[&str], body: &[&[&str]]) -> DisplayGrid {
        DisplayGrid {
            header: header.iter().map(|s| s.to_string()).collect(),
            body: body
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_simple_table() {
        let html = to_html_table(&grid(
            &["Name", "Age", "AgeGroup"],
            &[&["Ann", "25", "Under 30"]],
        ));

        assert!(html.starts_with("<table>"));
        assert!(html.contains("<thead>\n    <tr>\n      <th>Name</th>\n      <th>Age</th>\n      <th>AgeGroup</th>"));
        assert!(html.contains("<td>Ann</td>\n      <td>25</td>\n      <td>Under 30</td>"));
        assert!(html.ends_with("</table>"));
    }

    #[test]
    fn test_empty_cells_and_rows() {
        let html = to_html_table(&grid(&["Name", "City"], &[&["Bo", ""], &["Cy", "Oslo"]]));
        assert!(html.contains("<td></td>"));
        assert_eq!(html.matches("<tr>").count(), 3);
    }

    #[test]
    fn test_escaping() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );

        let html = to_html_table(&grid(&["<script>"], &[&["a&b"]]));
        assert!(html.contains("<th>&lt;script&gt;</th>"));
        assert!(html.contains("<td>a&amp;b</td>"));
    }
}
