use std::collections::HashSet;

use tracing::{debug, info};

use crate::data::table::TableModel;
use crate::enhance::view::TableView;

/// Attachment tuning. The search box only appears on tables with more
/// data rows than `search_row_threshold`; sort is wired regardless.
#[derive(Debug, Clone)]
pub struct EnhanceOptions {
    pub search_row_threshold: usize,
    pub debounce_ms: u64,
}

impl Default for EnhanceOptions {
    fn default() -> Self {
        Self {
            search_row_threshold: 10,
            debounce_ms: 200,
        }
    }
}

/// Result of an attachment attempt.
pub enum AttachOutcome {
    /// The table was enhanced; drive it through the returned view.
    Attached(Box<TableView>),
    /// This table id was already enhanced. Nothing was created or
    /// re-bound.
    AlreadyAttached,
    /// The table has no header row; left untouched.
    Skipped,
}

/// Wires search and sort onto rendered tables, once each.
///
/// Attachment is tracked in an explicit registry keyed by a stable
/// table id, so re-running attachment over the same page is a no-op
/// for tables already handled.
pub struct Enhancer {
    options: EnhanceOptions,
    attached: HashSet<String>,
}

impl Enhancer {
    pub fn new(options: EnhanceOptions) -> Self {
        Self {
            options,
            attached: HashSet::new(),
        }
    }

    pub fn is_attached(&self, table_id: &str) -> bool {
        self.attached.contains(table_id)
    }

    /// Attach search and sort to one table. Idempotent per table id.
    pub fn attach(&mut self, table_id: &str, model: TableModel) -> AttachOutcome {
        if self.attached.contains(table_id) {
            debug!(table_id, "already attached, skipping");
            return AttachOutcome::AlreadyAttached;
        }

        if model.column_count() == 0 {
            debug!(table_id, "no header row, skipping");
            return AttachOutcome::Skipped;
        }

        let search_enabled = model.row_count() > self.options.search_row_threshold;
        info!(
            table_id,
            rows = model.row_count(),
            search_enabled,
            "attaching table enhancements"
        );

        self.attached.insert(table_id.to_string());
        AttachOutcome::Attached(Box::new(TableView::new(
            model,
            search_enabled,
            self.options.debounce_ms,
        )))
    }

    /// Attach every table found in a page scan, keeping the views for
    /// the ones that qualified.
    pub fn attach_all<I>(&mut self, tables: I) -> Vec<TableView>
    where
        I: IntoIterator<Item = (String, TableModel)>,
    {
        tables
            .into_iter()
            .filter_map(|(id, model)| match self.attach(&id, model) {
                AttachOutcome::Attached(view) => Some(*view),
                _ => None,
            })
            .collect()
    }
}
