//! Full viewer page.

use super::html::escape_html;
use super::options::RenderOptions;
use crate::view::HtmlView;

/// Render the whole viewer page around the current state of `view`.
///
/// The page holds the heading, the file input, the loading indicator, the
/// container and the optional sample link.
pub fn to_html_page(view: &HtmlView, options: &RenderOptions) -> String {
    let title = escape_html(&options.title);
    let loading_style = if view.is_loading() {
        "display: block"
    } else {
        "display: none"
    };

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str(&format!("  <title>{}</title>\n", title));
    html.push_str("</head>\n<body>\n<div id=\"app\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", title));
    html.push_str(&format!(
        "<input type=\"file\" id=\"excel-upload\" accept=\"{}\" style=\"margin-bottom: 20px\">\n",
        escape_html(&options.picker.accept_attribute())
    ));
    html.push_str(&format!(
        "<p id=\"loading\" style=\"{}\">{}</p>\n",
        loading_style,
        escape_html(&options.loading_text)
    ));
    html.push_str("<div id=\"table-container\">\n");
    let content = view.container_html();
    if !content.is_empty() {
        html.push_str(&content);
        html.push('\n');
    }
    html.push_str("</div>\n");

    if let Some(link) = &options.sample_link {
        html.push_str(&format!(
            "<a href=\"{}\" style=\"display: block; margin-top: 10px\">{}</a>\n",
            escape_html(&link.href),
            escape_html(&link.text)
        ));
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}
