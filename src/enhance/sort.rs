use tracing::debug;

use crate::data::compare::compare_cells;
use crate::data::table::TableModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// What a column header should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

/// Per-table sort state. At most one column is sorted at a time;
/// clicking a different column resets the previous one to unsorted.
///
/// The direction cycle for repeated clicks on the same column is
/// ascending -> descending -> ascending, with no third state.
#[derive(Debug, Clone, Default)]
pub struct SortState {
    active: Option<(usize, SortDirection)>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a header click and return the direction to sort in.
    pub fn click(&mut self, column: usize) -> SortDirection {
        let next = match self.active {
            Some((active, SortDirection::Ascending)) if active == column => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.active = Some((column, next));
        next
    }

    pub fn active(&self) -> Option<(usize, SortDirection)> {
        self.active
    }

    pub fn indicator(&self, column: usize) -> SortIndicator {
        match self.active {
            Some((active, SortDirection::Ascending)) if active == column => {
                SortIndicator::Ascending
            }
            Some((active, SortDirection::Descending)) if active == column => {
                SortIndicator::Descending
            }
            _ => SortIndicator::Unsorted,
        }
    }
}

/// Stable sort of the table's rows by one column's cell text.
///
/// Every row is reordered, hidden ones included; each row keeps its
/// visibility flag. Rows with equal keys keep their relative order.
pub fn sort_rows(table: &mut TableModel, column: usize, direction: SortDirection) {
    debug!(column, ?direction, rows = table.row_count(), "sorting table");
    table.sort_rows_by(|a, b| {
        let ord = compare_cells(a.cell(column), b.cell(column));
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts_table(values: &[&str]) -> TableModel {
        TableModel::new(
            vec!["Amount".into()],
            values.iter().map(|v| vec![v.to_string()]).collect(),
        )
    }

    fn column(table: &TableModel, index: usize) -> Vec<String> {
        table
            .rows()
            .iter()
            .map(|r| r.cell(index).to_string())
            .collect()
    }

    #[test]
    fn test_direction_cycle_on_same_column() {
        let mut state = SortState::new();
        assert_eq!(state.click(1), SortDirection::Ascending);
        assert_eq!(state.click(1), SortDirection::Descending);
        assert_eq!(state.click(1), SortDirection::Ascending);
    }

    #[test]
    fn test_clicking_other_column_resets_previous() {
        let mut state = SortState::new();
        state.click(0);
        assert_eq!(state.indicator(0), SortIndicator::Ascending);

        assert_eq!(state.click(2), SortDirection::Ascending);
        assert_eq!(state.indicator(0), SortIndicator::Unsorted);
        assert_eq!(state.indicator(2), SortIndicator::Ascending);
    }

    #[test]
    fn test_numeric_sort_ascending() {
        let mut table = amounts_table(&["10", "2", "1"]);
        sort_rows(&mut table, 0, SortDirection::Ascending);
        assert_eq!(column(&table, 0), vec!["1", "2", "10"]);
    }

    #[test]
    fn test_lexical_sort_when_not_all_numeric() {
        let mut table = amounts_table(&["b10", "a2", "a1"]);
        sort_rows(&mut table, 0, SortDirection::Ascending);
        assert_eq!(column(&table, 0), vec!["a1", "a2", "b10"]);
    }

    #[test]
    fn test_descending_reverses() {
        let mut table = amounts_table(&["10", "2", "1"]);
        sort_rows(&mut table, 0, SortDirection::Descending);
        assert_eq!(column(&table, 0), vec!["10", "2", "1"]);
    }

    #[test]
    fn test_ties_are_stable() {
        let mut table = TableModel::new(
            vec!["Group".into(), "Member".into()],
            vec![
                vec!["A".into(), "first".into()],
                vec!["B".into(), "second".into()],
                vec!["A".into(), "third".into()],
            ],
        );
        sort_rows(&mut table, 0, SortDirection::Ascending);
        assert_eq!(column(&table, 1), vec!["first", "third", "second"]);
    }

    #[test]
    fn test_sort_preserves_visibility() {
        let mut table = amounts_table(&["30", "10", "20"]);
        table.rows_mut()[0].set_visible(false);
        table.rows_mut()[2].set_visible(false);

        sort_rows(&mut table, 0, SortDirection::Ascending);

        assert_eq!(column(&table, 0), vec!["10", "20", "30"]);
        let visible: Vec<bool> = table.rows().iter().map(|r| r.is_visible()).collect();
        // "10" was visible, "20" and "30" hidden; the set of hidden
        // rows is unchanged by the reorder.
        assert_eq!(visible, vec![true, false, false]);
    }

    #[test]
    fn test_out_of_range_column_sorts_on_empty_keys() {
        let mut table = amounts_table(&["b", "a"]);
        // Column 5 does not exist; every key is "" so order is kept.
        sort_rows(&mut table, 5, SortDirection::Ascending);
        assert_eq!(column(&table, 0), vec!["b", "a"]);
    }
}
