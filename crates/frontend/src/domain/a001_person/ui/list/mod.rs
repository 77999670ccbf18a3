pub mod state;
pub mod view_model;

use self::state::{create_state, SortColumn, SortDirection, PAGE_SIZE_OPTIONS};
use self::view_model::page_window;
use crate::domain::a001_person::api::{use_people_query, PeopleQuery};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::domain::a001_person::Person;
use leptos::prelude::*;

#[component]
pub fn PeopleList() -> impl IntoView {
    let query = use_people_query();

    // The three non-table states are mutually exclusive and checked in
    // priority order: loading, then error/no data, then the empty set.
    view! {
        <div class="page">
            {move || match query.get() {
                PeopleQuery::Loading => view! { <p>"Fetching People..."</p> }.into_any(),
                PeopleQuery::Failed(_) => {
                    view! { <h2>"Oops! looks like something went wrong!"</h2> }.into_any()
                }
                PeopleQuery::Ready(people) => {
                    if people.is_empty() {
                        view! { <p>"No People Available."</p> }.into_any()
                    } else {
                        view! { <PeopleTable people=people /> }.into_any()
                    }
                }
            }}
        </div>
    }
}

#[component]
fn PeopleTable(people: Vec<Person>) -> impl IntoView {
    let state = create_state();
    let people = StoredValue::new(people);

    // Filter -> sort -> slice, always recomputed from the full array.
    let window = Memo::new(move |_| people.with_value(|p| page_window(p, &state.get())));

    let toggle_sort = move |column: SortColumn| state.update(|s| s.toggle_sort(column));
    let go_to_page = move |page: usize| {
        let total_pages = window.get_untracked().total_pages;
        state.update(|s| s.request_page(page, total_pages));
    };
    let change_page_size = move |size: usize| state.update(|s| s.set_items_per_page(size));

    let aria_sort = move || {
        state.with(|s| {
            if s.sort_column == SortColumn::Name {
                s.sort_direction.as_aria()
            } else {
                "none"
            }
        })
    };

    view! {
        <input
            type="text"
            class="search-input"
            placeholder="Search by name"
            aria-label="Search"
            prop:value=move || state.with(|s| s.search_query.clone())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                state.update(|s| s.set_search_query(value));
            }
        />

        <table class="people-table">
            <thead>
                <tr>
                    <th
                        role="columnheader"
                        aria-sort=aria_sort
                        style="cursor: pointer;"
                        on:click=move |_| toggle_sort(SortColumn::Name)
                    >
                        "Name"
                        <span class=move || {
                            state.with(|s| get_sort_class(&s.sort_column, &SortColumn::Name))
                        }>
                            {move || state.with(|s| {
                                get_sort_indicator(
                                    &s.sort_column,
                                    &SortColumn::Name,
                                    s.sort_direction == SortDirection::Ascending,
                                )
                            })}
                        </span>
                    </th>
                    <th>"Show"</th>
                    <th>"Actor/Actress"</th>
                    <th>"Date of Birth"</th>
                    <th>"Movies"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || window.get().rows
                    key=|person| person.id.clone()
                    children=move |person| {
                        // Titles render as a text node, so they are always escaped.
                        let movie_titles = person.movie_titles();
                        view! {
                            <tr class="table__row">
                                <td>{person.name.clone()}</td>
                                <td>{person.show.clone()}</td>
                                <td>{person.actor.clone()}</td>
                                <td>{person.dob.clone()}</td>
                                <td>{movie_titles}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>

        <PaginationControls
            current_page=Signal::derive(move || window.get().page)
            total_pages=Signal::derive(move || window.get().total_pages)
            summary=Signal::derive(move || window.get().summary())
            page_size=Signal::derive(move || state.with(|s| s.items_per_page))
            on_page_change=Callback::new(go_to_page)
            on_page_size_change=Callback::new(change_page_size)
            page_size_options=PAGE_SIZE_OPTIONS.to_vec()
        />
    }
}
