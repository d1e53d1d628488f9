use std::collections::{BTreeSet, HashMap};

/// What a row must expose to take part in a list view: a stable id for
/// selection, a haystack for the global "contains" filter, and named
/// columns for the categorical equals filters.
pub trait TableRow {
    fn row_id(&self) -> Option<u64>;
    fn haystack(&self) -> String;
    fn column(&self, name: &str) -> Option<String>;
}

/// Which toolbar actions the current selection enables. Add wants an empty
/// selection, Update and Details exactly one row, Delete at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSet {
    pub add: bool,
    pub update: bool,
    pub details: bool,
    pub delete: bool,
}

impl ActionSet {
    fn for_selection(count: usize) -> Self {
        ActionSet {
            add: count == 0,
            update: count == 1,
            details: count == 1,
            delete: count >= 1,
        }
    }
}

/// Client-side list-view state over the last fetched row set. Filtering is
/// predicate matching on that copy, never a server query; a refetch after a
/// successful mutation replaces the whole set.
pub struct ListView<T: TableRow> {
    rows: Vec<T>,
    global_filter: Option<String>,
    column_filters: HashMap<String, String>,
    selected: BTreeSet<u64>,
    page: usize,
    page_size: usize,
}

impl<T: TableRow> ListView<T> {
    pub fn new(page_size: usize) -> Self {
        ListView {
            rows: Vec::new(),
            global_filter: None,
            column_filters: HashMap::new(),
            selected: BTreeSet::new(),
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Replaces the row set after a fetch. Selections pointing at rows that
    /// no longer exist are dropped; the page index is clamped.
    pub fn refresh(&mut self, rows: Vec<T>) {
        self.rows = rows;
        let ids: BTreeSet<u64> = self.rows.iter().filter_map(|r| r.row_id()).collect();
        self.selected.retain(|id| ids.contains(id));
        self.clamp_page();
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn set_global_filter(&mut self, value: Option<String>) {
        self.global_filter = value.filter(|v| !v.trim().is_empty());
        self.page = 0;
    }

    pub fn set_column_filter(&mut self, column: &str, value: Option<String>) {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => {
                self.column_filters.insert(column.to_string(), v);
            }
            None => {
                self.column_filters.remove(column);
            }
        }
        self.page = 0;
    }

    fn matches(&self, row: &T) -> bool {
        if let Some(needle) = &self.global_filter {
            let haystack = row.haystack().to_lowercase();
            if !haystack.contains(&needle.to_lowercase()) {
                return false;
            }
        }
        self.column_filters
            .iter()
            .all(|(column, expected)| row.column(column).as_deref() == Some(expected.as_str()))
    }

    pub fn filtered(&self) -> Vec<&T> {
        self.rows.iter().filter(|row| self.matches(row)).collect()
    }

    pub fn page_count(&self) -> usize {
        let filtered = self.filtered().len();
        if filtered == 0 {
            1
        } else {
            filtered.div_ceil(self.page_size)
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.clamp_page();
    }

    pub fn page(&self) -> usize {
        self.page
    }

    fn clamp_page(&mut self) {
        let last = self.page_count() - 1;
        if self.page > last {
            self.page = last;
        }
    }

    /// The filtered rows visible on the current page.
    pub fn page_rows(&self) -> Vec<&T> {
        self.filtered()
            .into_iter()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .collect()
    }

    pub fn select(&mut self, id: u64) {
        if self.rows.iter().any(|r| r.row_id() == Some(id)) {
            self.selected.insert(id);
        }
    }

    pub fn deselect(&mut self, id: u64) {
        self.selected.remove(&id);
    }

    pub fn toggle(&mut self, id: u64) {
        if self.selected.contains(&id) {
            self.deselect(id);
        } else {
            self.select(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn selection_count(&self) -> usize {
        self.selected.len()
    }

    pub fn selected_ids(&self) -> Vec<u64> {
        self.selected.iter().copied().collect()
    }

    /// The single selected row, when exactly one is selected.
    pub fn single_selection(&self) -> Option<&T> {
        if self.selected.len() != 1 {
            return None;
        }
        let id = *self.selected.iter().next()?;
        self.rows.iter().find(|r| r.row_id() == Some(id))
    }

    pub fn actions(&self) -> ActionSet {
        ActionSet::for_selection(self.selected.len())
    }
}
