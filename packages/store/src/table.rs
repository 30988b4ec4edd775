//! State of the generic data table: sorting, pagination, column visibility
//! and row selection.
//!
//! The table is fed an already filtered slice of rows and owns everything
//! else. Rows are identified by [`TableRow::row_id`], so selection survives
//! re-sorting and reloads as long as the ids stay the same.

use std::cmp::Ordering;
use std::collections::BTreeSet;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 30, 50];

/// A row the table can render, sort and select.
pub trait TableRow {
    fn row_id(&self) -> String;
    /// Value used to sort by `column`; `None` sorts last.
    fn sort_key(&self, column: &str) -> Option<SortKey>;
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Number(i64),
    Text(String),
}

impl SortKey {
    /// Text key compared case-insensitively.
    pub fn text(s: &str) -> Self {
        SortKey::Text(s.to_lowercase())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sorting {
    pub column: String,
    pub direction: SortDirection,
}

/// Which slice of the rows is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageInfo {
    /// 1-based index of the first visible row, 0 when empty.
    pub first: usize,
    pub last: usize,
    pub total: usize,
    pub page: usize,
    pub page_count: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TableState {
    pub sorting: Option<Sorting>,
    pub page_index: usize,
    pub page_size: usize,
    hidden_columns: BTreeSet<String>,
    selected: BTreeSet<String>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            sorting: None,
            page_index: 0,
            page_size: page_size.max(1),
            hidden_columns: BTreeSet::new(),
            selected: BTreeSet::new(),
        }
    }

    /// Cycle a column through ascending, descending and unsorted.
    pub fn toggle_sort(&mut self, column: &str) {
        self.sorting = match self.sorting.take() {
            Some(s) if s.column == column => match s.direction {
                SortDirection::Asc => Some(Sorting {
                    column: s.column,
                    direction: SortDirection::Desc,
                }),
                SortDirection::Desc => None,
            },
            _ => Some(Sorting {
                column: column.to_string(),
                direction: SortDirection::Asc,
            }),
        };
        self.page_index = 0;
    }

    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sorting
            .as_ref()
            .filter(|s| s.column == column)
            .map(|s| s.direction)
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self, total: usize) -> bool {
        self.page_index + 1 < self.page_count(total)
    }

    pub fn previous_page(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next_page(&mut self, total: usize) {
        if self.can_next(total) {
            self.page_index += 1;
        }
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
    }

    /// Pull the page index back in range after the row count shrank.
    pub fn clamp_page(&mut self, total: usize) {
        let last = self.page_count(total) - 1;
        if self.page_index > last {
            self.page_index = last;
        }
    }

    pub fn page_info(&self, total: usize) -> PageInfo {
        let page_count = self.page_count(total);
        let page_index = self.page_index.min(page_count - 1);
        let start = page_index * self.page_size;
        let end = (start + self.page_size).min(total);
        PageInfo {
            first: if total == 0 { 0 } else { start + 1 },
            last: end,
            total,
            page: page_index + 1,
            page_count,
        }
    }

    pub fn toggle_column(&mut self, column: &str) {
        if !self.hidden_columns.remove(column) {
            self.hidden_columns.insert(column.to_string());
        }
    }

    pub fn is_column_visible(&self, column: &str) -> bool {
        !self.hidden_columns.contains(column)
    }

    pub fn toggle_row(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_ids(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    /// Drop selections whose rows are no longer present.
    pub fn retain_selection<T: TableRow>(&mut self, rows: &[T]) {
        let present: BTreeSet<String> = rows.iter().map(TableRow::row_id).collect();
        self.selected.retain(|id| present.contains(id));
    }

    /// Sort `rows` by the active sorting and return the current page.
    pub fn page<'a, T: TableRow>(&self, rows: &'a [T]) -> Vec<&'a T> {
        let mut ordered: Vec<&T> = rows.iter().collect();
        if let Some(ref sorting) = self.sorting {
            // Stable sort keeps the backend order among equal keys.
            ordered.sort_by(|a, b| {
                let ord = compare_keys(
                    a.sort_key(&sorting.column),
                    b.sort_key(&sorting.column),
                );
                match sorting.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        let info = self.page_info(rows.len());
        let start = info.first.saturating_sub(1);
        ordered.into_iter().skip(start).take(info.last - start).collect()
    }
}

fn compare_keys(a: Option<SortKey>, b: Option<SortKey>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
