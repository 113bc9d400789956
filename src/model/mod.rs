//! Tabular data model for decoded sheets.
//!
//! The decoder produces a [`RecordSet`] of [`Record`]s; the renderer projects
//! it into a [`DisplayGrid`].

mod grid;
mod record;
mod value;

pub use grid::DisplayGrid;
pub use record::{Record, RecordSet};
pub use value::Value;
