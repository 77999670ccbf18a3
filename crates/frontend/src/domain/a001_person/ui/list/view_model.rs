//! Pure derivation of the visible table from `(people, state)`.
//!
//! filter -> sort -> page slice, recomputed from the full array on every
//! state change. Nothing here touches the DOM or the reactive graph.

use super::state::{PeopleListState, SortColumn, SortDirection};
use contracts::domain::a001_person::Person;

/// The contiguous slice of the filtered-and-sorted list shown for the
/// current page, plus the counts the pagination controls render.
#[derive(Clone, Debug, PartialEq)]
pub struct PageWindow {
    pub rows: Vec<Person>,
    /// Effective 1-based page, clamped into `[1, total_pages]`.
    pub page: usize,
    pub total_pages: usize,
    /// Count of the filtered set; sorting never changes it.
    pub total_items: usize,
    /// 1-based index of the first visible row; 0 when nothing matches.
    pub first_row: usize,
    /// 1-based index of the last visible row; 0 when nothing matches.
    pub last_row: usize,
}

impl PageWindow {
    pub fn summary(&self) -> String {
        format!("Showing {}-{} of {}", self.first_row, self.last_row, self.total_items)
    }

    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    pub fn on_last_page(&self) -> bool {
        self.page >= self.total_pages
    }
}

/// Every person whose name contains the query, compared case-insensitively.
/// The empty query matches everyone.
pub fn filter_by_name(people: &[Person], query: &str) -> Vec<Person> {
    let needle = query.to_lowercase();
    people
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Stable in-place sort; rows with equal keys keep their original order.
pub fn sort_rows(rows: &mut [Person], column: SortColumn, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = match column {
            SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

pub fn page_count(total_items: usize, items_per_page: usize) -> usize {
    if total_items == 0 {
        0
    } else {
        (total_items + items_per_page - 1) / items_per_page
    }
}

/// Derive the visible window for the given state.
pub fn page_window(people: &[Person], state: &PeopleListState) -> PageWindow {
    let mut rows = filter_by_name(people, &state.search_query);
    sort_rows(&mut rows, state.sort_column, state.sort_direction);

    let total_items = rows.len();
    let total_pages = page_count(total_items, state.items_per_page);
    // The stored page may fall out of range after a filter change; the
    // window always reflects the clamped page.
    let page = if total_pages == 0 {
        1
    } else {
        state.current_page.clamp(1, total_pages)
    };

    let start = (page - 1) * state.items_per_page;
    let end = (start + state.items_per_page).min(total_items);
    let rows = if start < total_items { rows[start..end].to_vec() } else { Vec::new() };

    PageWindow {
        rows,
        page,
        total_pages,
        total_items,
        first_row: if total_items == 0 { 0 } else { start + 1 },
        last_row: end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_person::Movie;

    fn person(id: &str, name: &str) -> Person {
        Person {
            id: id.to_string(),
            name: name.to_string(),
            show: format!("Show {}", id),
            actor: format!("Actor {}", id),
            dob: "1990-01-01".to_string(),
            movies: vec![Movie { title: format!("Movie {}", id), released: None }],
            updated_at: String::new(),
        }
    }

    fn numbered_people(count: usize) -> Vec<Person> {
        (1..=count)
            .map(|n| person(&format!("p{:03}", n), &format!("Person {:03}", n)))
            .collect()
    }

    fn names(rows: &[Person]) -> Vec<&str> {
        rows.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_everyone() {
        let people = numbered_people(7);
        assert_eq!(filter_by_name(&people, "").len(), 7);
    }

    #[test]
    fn filter_is_case_insensitive_substring_on_name() {
        let people = vec![
            person("1", "Addie Duncan"),
            person("2", "Ball Higgins"),
            person("3", "Singleton Ball"),
            person("4", "Sammy Davis"),
        ];
        assert_eq!(names(&filter_by_name(&people, "ball")), vec!["Ball Higgins", "Singleton Ball"]);
        assert_eq!(names(&filter_by_name(&people, "BALL")), vec!["Ball Higgins", "Singleton Ball"]);
        assert_eq!(names(&filter_by_name(&people, "ton b")), vec!["Singleton Ball"]);
        assert!(filter_by_name(&people, "zzz").is_empty());
    }

    #[test]
    fn descending_is_exact_reverse_when_names_are_distinct() {
        let people = vec![
            person("1", "Zelma Mcdaniel"),
            person("2", "Addie Duncan"),
            person("3", "Mark Ball"),
        ];

        let mut ascending = people.clone();
        sort_rows(&mut ascending, SortColumn::Name, SortDirection::Ascending);
        let mut descending = people;
        sort_rows(&mut descending, SortColumn::Name, SortDirection::Descending);

        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(names(&ascending), vec!["Addie Duncan", "Mark Ball", "Zelma Mcdaniel"]);
        assert_eq!(descending, reversed);
    }

    #[test]
    fn equal_names_keep_their_original_order() {
        let people = vec![
            person("first", "Ball Higgins"),
            person("second", "ball higgins"),
            person("third", "Addie Duncan"),
        ];

        let mut rows = people.clone();
        sort_rows(&mut rows, SortColumn::Name, SortDirection::Ascending);
        assert_eq!(rows[0].name, "Addie Duncan");
        assert_eq!(rows[1].id, "first");
        assert_eq!(rows[2].id, "second");

        let mut rows = people;
        sort_rows(&mut rows, SortColumn::Name, SortDirection::Descending);
        assert_eq!(rows[0].id, "first");
        assert_eq!(rows[1].id, "second");
        assert_eq!(rows[2].name, "Addie Duncan");
    }

    #[test]
    fn page_count_is_the_ceiling() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(100, 10), 10);
        assert_eq!(page_count(100, 15), 7);
        assert_eq!(page_count(100, 20), 5);
    }

    #[test]
    fn ten_people_fit_one_default_page() {
        let people = numbered_people(10);
        let window = page_window(&people, &PeopleListState::default());
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.rows.len(), 10);
        assert_eq!(window.summary(), "Showing 1-10 of 10");
        assert!(window.on_first_page());
        assert!(window.on_last_page());
    }

    #[test]
    fn last_page_shows_the_tail_of_a_hundred() {
        let people = numbered_people(100);
        let state = PeopleListState { current_page: 10, ..Default::default() };
        let window = page_window(&people, &state);
        assert_eq!(window.total_pages, 10);
        assert_eq!(window.summary(), "Showing 91-100 of 100");
        assert!(window.on_last_page());
        assert!(!window.on_first_page());
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let people = numbered_people(95);
        let state = PeopleListState { current_page: 10, ..Default::default() };
        let window = page_window(&people, &state);
        assert_eq!(window.total_pages, 10);
        assert_eq!(window.rows.len(), 5);
        assert_eq!(window.summary(), "Showing 91-95 of 95");
    }

    #[test]
    fn middle_page_windows_the_right_slice() {
        let people = numbered_people(45);
        let state = PeopleListState {
            current_page: 2,
            items_per_page: 15,
            ..Default::default()
        };
        let window = page_window(&people, &state);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.rows.len(), 15);
        assert_eq!(window.rows[0].name, "Person 016");
        assert_eq!(window.summary(), "Showing 16-30 of 45");
    }

    #[test]
    fn stored_page_is_clamped_when_the_filter_shrinks_the_set() {
        let mut people = numbered_people(40);
        people.push(person("extra", "Ball Higgins"));

        // Page 4 was valid for the unfiltered set; one match leaves one page.
        let state = PeopleListState {
            current_page: 4,
            search_query: "ball".to_string(),
            ..Default::default()
        };
        let window = page_window(&people, &state);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.page, 1);
        assert_eq!(names(&window.rows), vec!["Ball Higgins"]);
        assert_eq!(window.summary(), "Showing 1-1 of 1");
    }

    #[test]
    fn filter_matching_nothing_yields_an_empty_window() {
        let people = numbered_people(12);
        let state = PeopleListState { search_query: "nobody".to_string(), ..Default::default() };
        let window = page_window(&people, &state);
        assert_eq!(window.total_pages, 0);
        assert!(window.rows.is_empty());
        assert_eq!(window.summary(), "Showing 0-0 of 0");
        // Every navigation button is disabled on the empty window.
        assert!(window.on_first_page());
        assert!(window.on_last_page());
    }

    #[test]
    fn searched_rows_come_back_in_name_order() {
        let people = vec![
            person("3", "Singleton Ball"),
            person("1", "Ball Higgins"),
            person("2", "Addie Duncan"),
        ];
        let state = PeopleListState { search_query: "Ball".to_string(), ..Default::default() };
        let window = page_window(&people, &state);
        assert_eq!(names(&window.rows), vec!["Ball Higgins", "Singleton Ball"]);
        assert_eq!(window.total_items, 2);
    }

    #[test]
    fn sorting_never_changes_the_totals() {
        let people = numbered_people(23);
        let ascending = page_window(&people, &PeopleListState::default());
        let descending = page_window(
            &people,
            &PeopleListState { sort_direction: SortDirection::Descending, ..Default::default() },
        );
        assert_eq!(ascending.total_items, descending.total_items);
        assert_eq!(ascending.total_pages, descending.total_pages);
    }
}
