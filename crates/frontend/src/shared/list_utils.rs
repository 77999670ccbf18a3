//! Helpers shared by sortable table views.

/// Sort indicator glyph for a column header.
pub fn get_sort_indicator<C: PartialEq>(current: &C, column: &C, ascending: bool) -> &'static str {
    if current == column {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS class for the indicator span of a column header.
pub fn get_sort_class<C: PartialEq>(current: &C, column: &C) -> &'static str {
    if current == column {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}
