//! Column/row result set returned by provider metadata queries.
//!
//! Mirrors the cursor shape of host content-resolution services: named
//! columns, zero or more rows of nullable string cells, and a release that
//! must happen exactly once per query. Release runs on drop if the owner
//! did not call it explicitly, so early returns and error paths cannot leak
//! the result set.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Well-known column holding the human-facing resource name.
pub const DISPLAY_NAME: &str = "display_name";

/// Well-known column holding the resource size in bytes.
pub const SIZE: &str = "size";

/// Shared release counter for tests asserting exactly-once release.
pub type ReleaseHook = Arc<AtomicUsize>;

#[derive(Debug)]
pub struct Cursor {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
    position: Option<usize>,
    released: bool,
    release_hook: Option<ReleaseHook>,
}

impl Cursor {
    /// Builds a cursor over `columns` and `rows`. Rows shorter than the
    /// column list read as null in the missing cells.
    pub fn new(columns: Vec<&str>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self {
            columns: columns.into_iter().map(str::to_string).collect(),
            rows,
            position: None,
            released: false,
            release_hook: None,
        }
    }

    /// Attaches a counter bumped once when the cursor is released.
    pub fn with_release_hook(mut self, hook: ReleaseHook) -> Self {
        self.release_hook = Some(hook);
        self
    }

    /// Index of a column by name, or `None` if the query did not return it.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Moves to the first row. Returns false when the result set is empty.
    pub fn move_to_first(&mut self) -> bool {
        if self.rows.is_empty() {
            self.position = None;
            false
        } else {
            self.position = Some(0);
            true
        }
    }

    /// String value of `column` at the current row; `None` for null cells,
    /// out-of-range columns, or when no row has been selected.
    pub fn string_value(&self, column: usize) -> Option<String> {
        let row = self.rows.get(self.position?)?;
        row.get(column)?.clone()
    }

    /// Releases the result set. Idempotent; also invoked by `Drop`.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.rows.clear();
        self.position = None;
        if let Some(hook) = &self.release_hook {
            hook.fetch_add(1, Ordering::SeqCst);
        }
    }
}

impl Drop for Cursor {
    fn drop(&mut self) {
        self.release();
    }
}
