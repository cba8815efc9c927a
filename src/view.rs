//! Derived-view pipeline: visible columns, filter, sort, paginate.
//!
//! Every step is a pure, total function over model snapshots; the pipeline
//! is recomputed from scratch whenever any input changes. The presentation
//! layer renders `page_rows`; CSV export consumes `sorted` (the full
//! filtered/sorted sequence, ignoring pagination).

use std::cmp::Ordering;

use crate::model::{Column, ColumnRegistry, Record, SortDirection, SortSpec, TableModel, Value};

/// Pagination window. Slice boundaries are
/// `[page * page_size, page * page_size + page_size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewWindow {
    pub page: usize,
    pub page_size: usize,
}

/// The fully derived view of the table
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    /// Columns to render, ascending by `order`
    pub visible_columns: Vec<Column>,
    /// Filtered and sorted records, before pagination
    pub sorted: Vec<&'a Record>,
    /// The current page slice of `sorted`
    pub page_rows: Vec<&'a Record>,
}

/// Columns with `visible == true`, ascending by `order`
pub fn visible_columns(registry: &ColumnRegistry) -> Vec<Column> {
    let mut columns: Vec<Column> = registry
        .columns()
        .iter()
        .filter(|c| c.visible)
        .cloned()
        .collect();
    columns.sort_by_key(|c| c.order);
    columns
}

/// Keep records where ANY field (the id included, not just visible columns)
/// contains the query as a case-insensitive substring. An empty query keeps
/// everything. Absent fields stringify to "" and so never match.
pub fn filter<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.id.to_string().contains(&needle)
                || record
                    .fields
                    .values()
                    .any(|value| value.display().to_lowercase().contains(&needle))
        })
        .collect()
}

/// Compare two field values for sorting.
///
/// Values with a numeric view (a number, or a non-empty string that parses
/// as one) compare numerically and sort before non-numeric values;
/// non-numeric values compare lexicographically over their display strings,
/// with absent fields reading as "". The ordering of heterogeneous columns
/// is implementation-defined, but it is a genuine total order so the sort
/// never sees an inconsistent comparator.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let left_num = a.and_then(Value::as_number);
    let right_num = b.and_then(Value::as_number);
    match (left_num, right_num) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => {
            let left = a.map(Value::display).unwrap_or_default();
            let right = b.map(Value::display).unwrap_or_default();
            left.cmp(&right)
        }
    }
}

/// Sort the filtered records by the sort key.
///
/// `key == None` preserves the filtered (store insertion) order. The sort is
/// stable: equal keys keep their relative input order in both directions,
/// because descending inverts the comparison rather than reversing the
/// output.
pub fn sort<'a>(mut filtered: Vec<&'a Record>, spec: &SortSpec) -> Vec<&'a Record> {
    let Some(key) = &spec.key else {
        return filtered;
    };
    filtered.sort_by(|a, b| {
        let ordering = compare_values(a.get(key), b.get(key));
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    filtered
}

/// Slice out the current page. An out-of-range page yields an empty slice,
/// never an error.
pub fn paginate<'a>(sorted: &[&'a Record], window: ViewWindow) -> Vec<&'a Record> {
    let start = window.page.saturating_mul(window.page_size).min(sorted.len());
    let end = start.saturating_add(window.page_size).min(sorted.len());
    sorted[start..end].to_vec()
}

/// Run the whole pipeline over the model
pub fn derive(model: &TableModel) -> TableView<'_> {
    let visible_columns = visible_columns(&model.columns);
    let filtered = filter(model.rows.records(), &model.search_query);
    let sorted = sort(filtered, &model.sort);
    let page_rows = paginate(
        &sorted,
        ViewWindow {
            page: model.page,
            page_size: model.rows_per_page,
        },
    );
    TableView {
        visible_columns,
        sorted,
        page_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RowStore;

    fn records() -> Vec<Record> {
        vec![
            Record::new(1).with("name", "Carol").with("age", 30.0).with("role", "Dev"),
            Record::new(2).with("name", "alice").with("age", 30.0).with("role", "Designer"),
            Record::new(3).with("name", "Bob").with("age", "25").with("role", "Dev"),
            Record::new(4).with("name", "dave").with("role", "Manager"),
        ]
    }

    #[test]
    fn test_visible_columns_sorted_by_order() {
        let registry = ColumnRegistry::new(vec![
            Column::new("b", "B", true, 2),
            Column::new("a", "A", true, 0),
            Column::new("hidden", "H", false, 1),
        ]);
        let visible = visible_columns(&registry);
        let ids: Vec<&str> = visible.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_filter_case_insensitive_substring() {
        let records = records();
        let hits = filter(&records, "ALI");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn test_filter_matches_any_field() {
        let records = records();
        // matches on role, a field that is not part of the name
        let hits = filter(&records, "manager");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 4);
    }

    #[test]
    fn test_filter_empty_query_keeps_everything() {
        let records = records();
        assert_eq!(filter(&records, "").len(), records.len());
    }

    #[test]
    fn test_filter_absent_fields_never_read_as_undefined() {
        // record 4 has no "age"; the absent field must stringify to "",
        // not to a literal placeholder
        let records = records();
        assert!(filter(&records, "undefined").is_empty());
        assert!(filter(&records, "null").is_empty());
    }

    #[test]
    fn test_sort_numeric_over_mixed_number_and_numeric_string() {
        let records = records();
        let sorted = sort(
            filter(&records, ""),
            &SortSpec::by("age", SortDirection::Ascending),
        );
        // the numeric string "25" compares numerically against the numbers;
        // the absent age has no numeric view and lands after all numerics
        let ids: Vec<_> = sorted.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_sort_is_stable_both_directions() {
        let records = records();

        let ascending = sort(
            filter(&records, ""),
            &SortSpec::by("age", SortDirection::Ascending),
        );
        // ids 1 and 2 share age 30; id 1 comes first in store order
        let tied_asc: Vec<_> = ascending.iter().filter(|r| r.get("age").and_then(Value::as_number) == Some(30.0)).map(|r| r.id).collect();
        assert_eq!(tied_asc, vec![1, 2]);

        let descending = sort(
            filter(&records, ""),
            &SortSpec::by("age", SortDirection::Descending),
        );
        // descending inverts the comparison, not the stability
        let tied_desc: Vec<_> = descending.iter().filter(|r| r.get("age").and_then(Value::as_number) == Some(30.0)).map(|r| r.id).collect();
        assert_eq!(tied_desc, vec![1, 2]);
    }

    #[test]
    fn test_sort_lexicographic_for_strings() {
        let records = records();
        let sorted = sort(
            filter(&records, ""),
            &SortSpec::by("name", SortDirection::Ascending),
        );
        let names: Vec<String> = sorted.iter().map(|r| r.display_value("name")).collect();
        // byte-wise lexicographic: uppercase before lowercase
        assert_eq!(names, vec!["Bob", "Carol", "alice", "dave"]);
    }

    #[test]
    fn test_sort_none_key_preserves_store_order() {
        let records = records();
        let sorted = sort(filter(&records, ""), &SortSpec::default());
        let ids: Vec<_> = sorted.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_paginate_length_formula() {
        let records = records();
        let all = filter(&records, "");
        let total = all.len();

        for page in 0..4 {
            for page_size in 1..4 {
                let slice = paginate(&all, ViewWindow { page, page_size });
                let expected = page_size.min(total.saturating_sub(page * page_size));
                assert_eq!(slice.len(), expected, "page={page} size={page_size}");
            }
        }
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let records = records();
        let all = filter(&records, "");
        assert!(paginate(&all, ViewWindow { page: 99, page_size: 10 }).is_empty());
    }

    #[test]
    fn test_derive_composes_pipeline() {
        let mut model = TableModel::new();
        model.rows = RowStore::from_records(records());
        model.search_query = "dev".to_string();
        model.sort = SortSpec::by("name", SortDirection::Ascending);
        model.rows_per_page = 1;
        model.page = 1;

        let view = derive(&model);
        // "dev" matches the two records with role "Dev"
        assert_eq!(view.sorted.len(), 2);
        // sorted by name: Bob, Carol; page 1 of size 1 shows Carol
        assert_eq!(view.page_rows.len(), 1);
        assert_eq!(view.page_rows[0].display_value("name"), "Carol");
    }
}
