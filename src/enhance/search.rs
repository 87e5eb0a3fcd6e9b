use tracing::debug;

use crate::data::table::{Row, TableModel};

/// Case-insensitive substring match against the row's concatenated
/// cell text. The query must already be lowercased by the caller.
pub fn row_matches(row: &Row, needle: &str) -> bool {
    needle.is_empty() || row.search_text().contains(needle)
}

/// Set every row's visibility flag from the query and return how many
/// rows are now visible. Rows are never reordered or removed here;
/// the empty query makes everything visible again.
pub fn apply_filter(table: &mut TableModel, query: &str) -> usize {
    let needle = query.to_lowercase();
    let mut visible = 0;

    for row in table.rows_mut() {
        let matched = row_matches(row, &needle);
        row.set_visible(matched);
        if matched {
            visible += 1;
        }
    }

    debug!(query, visible, total = table.row_count(), "applied filter");
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members_table() -> TableModel {
        TableModel::new(
            vec!["Name".into(), "Amount".into()],
            vec![
                vec!["Mary".into(), "500".into()],
                vec!["Joe".into(), "1500".into()],
                vec!["Amara".into(), "90".into()],
            ],
        )
    }

    fn visibility(table: &TableModel) -> Vec<bool> {
        table.rows().iter().map(|r| r.is_visible()).collect()
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut table = members_table();
        let visible = apply_filter(&mut table, "AR");
        assert_eq!(visible, 2);
        assert_eq!(visibility(&table), vec![true, false, true]);
    }

    #[test]
    fn test_filter_matches_any_column() {
        let mut table = members_table();
        let visible = apply_filter(&mut table, "1500");
        assert_eq!(visible, 1);
        assert_eq!(visibility(&table), vec![false, true, false]);
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let mut table = members_table();
        apply_filter(&mut table, "zzz");
        assert_eq!(table.visible_count(), 0);

        let visible = apply_filter(&mut table, "");
        assert_eq!(visible, 3);
        assert_eq!(visibility(&table), vec![true, true, true]);
    }

    #[test]
    fn test_filter_does_not_reorder() {
        let mut table = members_table();
        apply_filter(&mut table, "ar");
        let names: Vec<&str> = table.rows().iter().map(|r| r.cell(0)).collect();
        assert_eq!(names, vec!["Mary", "Joe", "Amara"]);
    }
}
