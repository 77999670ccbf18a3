use crate::domain::a001_person::ui::details::CreatePerson;
use crate::domain::a001_person::ui::list::PeopleList;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ActivePage {
    People,
    CreatePerson,
}

#[component]
pub fn App() -> impl IntoView {
    let (active, set_active) = signal(ActivePage::People);

    let nav_class = move |page: ActivePage| {
        if active.get() == page {
            "app__nav-button app__nav-button--active"
        } else {
            "app__nav-button"
        }
    };

    view! {
        <div class="app">
            <nav class="app__nav">
                <button
                    class=move || nav_class(ActivePage::People)
                    on:click=move |_| set_active.set(ActivePage::People)
                >
                    "People"
                </button>
                <button
                    class=move || nav_class(ActivePage::CreatePerson)
                    on:click=move |_| set_active.set(ActivePage::CreatePerson)
                >
                    "Create Person"
                </button>
            </nav>
            {move || match active.get() {
                ActivePage::People => view! { <PeopleList /> }.into_any(),
                ActivePage::CreatePerson => view! { <CreatePerson /> }.into_any(),
            }}
        </div>
    }
}
