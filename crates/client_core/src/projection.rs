//! View state of the record table and the filter + sort projection derived
//! from it.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use shared::domain::{Record, SortColumn, SortOrder};

thread_local! {
    static NAME_COLLATOR: Option<Collator> =
        Collator::try_new(&locale!("en").into(), CollatorOptions::new()).ok();
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    search_query: String,
    is_filtered: bool,
    sort_column: Option<SortColumn>,
    sort_order: SortOrder,
    is_card_view: bool,
}

impl ViewState {
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_filtered(&self) -> bool {
        self.is_filtered
    }

    pub fn sort_column(&self) -> Option<SortColumn> {
        self.sort_column
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn is_card_view(&self) -> bool {
        self.is_card_view
    }

    /// Any edit marks the view as filtered, including edits that empty the box.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.is_filtered = true;
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.is_filtered = false;
    }

    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort_column == Some(column) {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_column = Some(column);
            self.sort_order = SortOrder::Asc;
        }
    }

    pub fn toggle_view(&mut self) {
        self.is_card_view = !self.is_card_view;
    }

    /// Rows to render: records whose name contains the query (ignoring
    /// case), ordered by the active sort. The input is never reordered.
    pub fn project<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        let needle = self.search_query.to_lowercase();
        let mut rows: Vec<&Record> = records
            .iter()
            .filter(|record| name_matches(record, &needle))
            .collect();

        if let Some(column) = self.sort_column {
            let order = self.sort_order;
            // `sort_by` is stable, so equal keys keep fetch order.
            rows.sort_by(|a, b| compare_records(a, b, column, order));
        }
        rows
    }
}

fn name_matches(record: &Record, lowercase_needle: &str) -> bool {
    lowercase_needle.is_empty() || record.name.to_lowercase().contains(lowercase_needle)
}

pub fn compare_records(a: &Record, b: &Record, column: SortColumn, order: SortOrder) -> Ordering {
    let ordering = match column {
        SortColumn::Name => compare_names(&a.name, &b.name),
        SortColumn::Age => a.age.total_cmp(&b.age),
    };
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Collates names with the `en` tailoring: accents are secondary to the base
/// letter and lowercase sorts before uppercase on a case tie.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    NAME_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => fold_compare_names(a, b),
    })
}

/// Used only if the compiled collation data fails to load.
fn fold_compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
#[path = "tests/projection_tests.rs"]
mod tests;
