//! Page rendering options.

use crate::acquire::FilePicker;

/// Link to a sample workbook shown under the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleLink {
    pub href: String,
    pub text: String,
}

impl Default for SampleLink {
    fn default() -> Self {
        Self {
            href: "/sample-data.xlsx".to_string(),
            text: "Download Sample Excel File".to_string(),
        }
    }
}

/// Options for rendering the viewer page.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Page heading and `<title>`
    pub title: String,

    /// Text of the loading indicator
    pub loading_text: String,

    /// Sample file link (None = omitted)
    pub sample_link: Option<SampleLink>,

    /// Accept filter of the file input
    pub picker: FilePicker,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Excel Data Viewer".to_string(),
            loading_text: "Loading data...".to_string(),
            sample_link: Some(SampleLink::default()),
            picker: FilePicker::default(),
        }
    }
}

impl RenderOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the loading indicator text.
    pub fn with_loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_text = text.into();
        self
    }

    /// Point the sample link somewhere else.
    pub fn with_sample_link(mut self, href: impl Into<String>) -> Self {
        let text = self.sample_link.take().unwrap_or_default().text;
        self.sample_link = Some(SampleLink {
            href: href.into(),
            text,
        });
        self
    }

    /// Omit the sample link.
    pub fn without_sample_link(mut self) -> Self {
        self.sample_link = None;
        self
    }

    /// Set the file input accept filter.
    pub fn with_picker(mut self, picker: FilePicker) -> Self {
        self.picker = picker;
        self
    }
}
