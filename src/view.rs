//! Display targets.
//!
//! The controller owns one [`DisplayTarget`]: a container that shows either
//! a table or an error, plus a loading indicator.

use crate::model::DisplayGrid;
use crate::render::{escape_html, to_html_table};

/// Where the controller puts its results.
pub trait DisplayTarget {
    /// Show or hide the loading indicator.
    fn set_loading(&mut self, visible: bool);

    /// Remove whatever the container shows.
    fn clear(&mut self);

    /// Replace the container content with a table.
    fn show_table(&mut self, grid: &DisplayGrid);

    /// Replace the container content with an error message.
    fn show_error(&mut self, message: &str);
}

/// Current content of the display container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContainerContent {
    #[default]
    Empty,
    /// Rendered `<table>` markup.
    Table(String),
    /// Error message, unescaped.
    Error(String),
}

/// In-memory HTML display: the container and loading indicator of the page.
#[derive(Debug, Clone, Default)]
pub struct HtmlView {
    container: ContainerContent,
    loading: bool,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(&self) -> &ContainerContent {
        &self.container
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Inner HTML of the container.
    pub fn container_html(&self) -> String {
        match &self.container {
            ContainerContent::Empty => String::new(),
            ContainerContent::Table(html) => html.clone(),
            ContainerContent::Error(message) => {
                format!("<p class=\"error\">Error: {}</p>", escape_html(message))
            }
        }
    }
}

impl DisplayTarget for HtmlView {
    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn clear(&mut self) {
        self.container = ContainerContent::Empty;
    }

    fn show_table(&mut self, grid: &DisplayGrid) {
        self.container = ContainerContent::Table(to_html_table(grid));
    }

    fn show_error(&mut self, message: &str) {
        self.container = ContainerContent::Error(message.to_string());
    }
}
