//! Upload controller.
//!
//! Drives one upload from file selection to display:
//! `Idle → Loading → (Idle | Error)`, reusable for any number of uploads.
//!
//! Each selection takes a new generation. A read that resolves after a newer
//! selection has started is dropped, so the display always reflects the most
//! recent selection. The controller is meant for a single-threaded executor;
//! several `handle_selection` futures may be in flight on the same
//! controller.

use crate::acquire::{read_file, FileSelection, FileSource};
use crate::error::{Error, Result};
use crate::model::DisplayGrid;
use crate::options::ViewerOptions;
use crate::view::DisplayTarget;
use std::cell::{Cell, Ref, RefCell};
use tracing::{debug, info, warn};

/// Controller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    Loading,
    Error,
}

/// How one call to [`UploadController::handle_selection`] ended.
#[derive(Debug)]
pub enum UploadOutcome {
    /// The selection was empty; nothing changed.
    NoFile,
    /// The table is displayed.
    Rendered { rows: usize, columns: usize },
    /// The error is displayed.
    Failed(Error),
    /// A newer selection started before this one finished; its result was dropped.
    Superseded,
}

/// Owns the display target and runs the read → decode → derive → render pipeline.
pub struct UploadController<V> {
    view: RefCell<V>,
    state: Cell<UploadState>,
    generation: Cell<u64>,
    options: ViewerOptions,
}

impl<V: DisplayTarget> UploadController<V> {
    pub fn new(view: V, options: ViewerOptions) -> Self {
        Self {
            view: RefCell::new(view),
            state: Cell::new(UploadState::Idle),
            generation: Cell::new(0),
            options,
        }
    }

    pub fn state(&self) -> UploadState {
        self.state.get()
    }

    /// Borrow the display target.
    pub fn view(&self) -> Ref<'_, V> {
        self.view.borrow()
    }

    pub fn into_view(self) -> V {
        self.view.into_inner()
    }

    /// Handle one file-selection event.
    pub async fn handle_selection<F: FileSource>(
        &self,
        selection: &FileSelection<F>,
    ) -> UploadOutcome {
        let Some(file) = selection.first() else {
            debug!("empty file selection");
            return UploadOutcome::NoFile;
        };

        let generation = self.begin(file.name());
        let data = read_file(file).await;

        if generation != self.generation.get() {
            warn!(
                file = file.name(),
                generation,
                current = self.generation.get(),
                "dropping result of superseded upload"
            );
            return UploadOutcome::Superseded;
        }

        let result = data.and_then(|data| self.process(&data));
        let mut view = self.view.borrow_mut();
        let outcome = match result {
            Ok(grid) => {
                view.show_table(&grid);
                self.state.set(UploadState::Idle);
                info!(
                    file = file.name(),
                    rows = grid.row_count(),
                    columns = grid.column_count(),
                    "rendered upload"
                );
                UploadOutcome::Rendered {
                    rows: grid.row_count(),
                    columns: grid.column_count(),
                }
            }
            Err(e) => {
                warn!(file = file.name(), error = %e, "upload failed");
                view.show_error(&e.to_string());
                self.state.set(UploadState::Error);
                UploadOutcome::Failed(e)
            }
        };
        view.set_loading(false);
        outcome
    }

    /// Enter `Loading` for a new selection and return its generation.
    fn begin(&self, name: &str) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        self.state.set(UploadState::Loading);

        let mut view = self.view.borrow_mut();
        view.set_loading(true);
        view.clear();

        debug!(file = name, generation, "upload started");
        generation
    }

    fn process(&self, data: &[u8]) -> Result<DisplayGrid> {
        let records = crate::load_bytes(data, &self.options)?;
        Ok(DisplayGrid::from_records(&records))
    }
}
