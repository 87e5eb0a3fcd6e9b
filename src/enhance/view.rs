use tracing::debug;

use crate::data::table::TableModel;
use crate::debounce::SearchDebouncer;
use crate::enhance::search::apply_filter;
use crate::enhance::sort::{sort_rows, SortIndicator, SortState};

/// The bound view created once at attachment time.
///
/// It owns the table model, the sort state, the current query and the
/// visible count, and every operation mutates the table only through
/// it. Nothing here re-reads ambient state; callers hold the view for
/// the lifetime of the table.
pub struct TableView {
    model: TableModel,
    sort: SortState,
    query: String,
    visible: usize,
    search_enabled: bool,
    debouncer: SearchDebouncer,
}

impl TableView {
    pub(crate) fn new(model: TableModel, search_enabled: bool, debounce_ms: u64) -> Self {
        let visible = model.row_count();
        Self {
            model,
            sort: SortState::new(),
            query: String::new(),
            visible,
            search_enabled,
            debouncer: SearchDebouncer::new(debounce_ms),
        }
    }

    pub fn model(&self) -> &TableModel {
        &self.model
    }

    /// Whether this table qualified for a search box at attachment.
    pub fn search_enabled(&self) -> bool {
        self.search_enabled
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible_count(&self) -> usize {
        self.visible
    }

    /// Apply a query synchronously. Hides non-matching rows, shows
    /// matching ones, leaves order alone. Supersedes anything still
    /// queued in the debouncer, so a clear cannot be undone by a
    /// stale keystroke.
    pub fn search(&mut self, query: &str) {
        self.debouncer.reset();
        self.query = query.to_string();
        self.visible = apply_filter(&mut self.model, query);
    }

    /// Queue a query behind the debouncer; `tick` applies it once
    /// typing pauses.
    pub fn queue_search(&mut self, query: &str) {
        self.debouncer.push(query);
    }

    /// Drive the debouncer. Returns true when a queued query was just
    /// applied and the caller should redraw.
    pub fn tick(&mut self) -> bool {
        if let Some(query) = self.debouncer.take_ready() {
            self.search(&query);
            true
        } else {
            false
        }
    }

    /// A click on a column header: advance the sort state machine and
    /// reorder the rows. Clicks past the last column are ignored.
    pub fn header_clicked(&mut self, column: usize) {
        if column >= self.model.column_count() {
            debug!(column, "ignoring click on nonexistent column");
            return;
        }
        let direction = self.sort.click(column);
        sort_rows(&mut self.model, column, direction);
    }

    pub fn indicator(&self, column: usize) -> SortIndicator {
        self.sort.indicator(column)
    }

    /// The text next to the search box: `<visible> of <total> entries`.
    pub fn counter_text(&self) -> String {
        format!("{} of {} entries", self.visible, self.model.row_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> TableView {
        let model = TableModel::new(
            vec!["Name".into(), "Amount".into()],
            vec![
                vec!["Mary".into(), "500".into()],
                vec!["Joe".into(), "1500".into()],
                vec!["Amara".into(), "90".into()],
            ],
        );
        TableView::new(model, true, 0)
    }

    #[test]
    fn test_counter_text_tracks_filter() {
        let mut v = view();
        assert_eq!(v.counter_text(), "3 of 3 entries");
        v.search("ar");
        assert_eq!(v.counter_text(), "2 of 3 entries");
        v.search("");
        assert_eq!(v.counter_text(), "3 of 3 entries");
    }

    #[test]
    fn test_header_click_sorts_and_sets_indicator() {
        let mut v = view();
        v.header_clicked(1);

        let amounts: Vec<&str> = v.model().rows().iter().map(|r| r.cell(1)).collect();
        assert_eq!(amounts, vec!["90", "500", "1500"]);
        assert_eq!(v.indicator(1), SortIndicator::Ascending);
        assert_eq!(v.indicator(0), SortIndicator::Unsorted);
    }

    #[test]
    fn test_second_click_reverses() {
        let mut v = view();
        v.header_clicked(1);
        v.header_clicked(1);

        let amounts: Vec<&str> = v.model().rows().iter().map(|r| r.cell(1)).collect();
        assert_eq!(amounts, vec!["1500", "500", "90"]);
        assert_eq!(v.indicator(1), SortIndicator::Descending);
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let mut v = view();
        v.header_clicked(9);
        assert_eq!(v.indicator(0), SortIndicator::Unsorted);
        assert_eq!(v.indicator(1), SortIndicator::Unsorted);
    }

    #[test]
    fn test_clearing_drops_queued_query() {
        let mut v = view();
        v.queue_search("joe");
        v.search("");

        // The queued "joe" must not resurface after the clear.
        assert!(!v.tick());
        assert_eq!(v.visible_count(), 3);
        assert_eq!(v.query(), "");
    }

    #[test]
    fn test_debounced_search_applies_on_tick() {
        let mut v = view();
        v.queue_search("joe");
        assert_eq!(v.visible_count(), 3);
        assert!(v.tick());
        assert_eq!(v.visible_count(), 1);
        assert!(!v.tick());
    }
}
