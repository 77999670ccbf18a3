use leptos::prelude::*;

/// Page sizes the selector offers.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 15, 20];

/// Columns the table can sort by. Only the name column is sortable today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortColumn {
    Name,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Value for the `aria-sort` attribute of the active column header.
    pub fn as_aria(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Ephemeral search/sort/pagination state of the listing view. Created at
/// mount with defaults and discarded at unmount; nothing here is persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct PeopleListState {
    pub search_query: String,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
    /// 1-based.
    pub current_page: usize,
    pub items_per_page: usize,
}

impl Default for PeopleListState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            sort_column: SortColumn::Name,
            sort_direction: SortDirection::Ascending,
            current_page: 1,
            items_per_page: PAGE_SIZE_OPTIONS[0],
        }
    }
}

impl PeopleListState {
    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
    }

    /// Clicking the active column flips the direction; a different column
    /// becomes active in ascending order.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort_column == column {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_column = column;
            self.sort_direction = SortDirection::Ascending;
        }
    }

    /// Out-of-range requests leave the page untouched.
    pub fn request_page(&mut self, page: usize, total_pages: usize) {
        if page < 1 || page > total_pages {
            return;
        }
        self.current_page = page;
    }

    /// Values outside the allowed set are ignored; a new page size always
    /// starts back on the first page.
    pub fn set_items_per_page(&mut self, size: usize) {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return;
        }
        self.items_per_page = size;
        self.current_page = 1;
    }
}

// Create state within component scope instead of thread-local so it is
// disposed when the component unmounts.
pub fn create_state() -> RwSignal<PeopleListState> {
    RwSignal::new(PeopleListState::default())
}
