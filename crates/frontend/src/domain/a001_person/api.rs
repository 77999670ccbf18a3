use crate::api_mocks;
use crate::api_mocks::handlers::PEOPLE_RESOURCE;
use contracts::domain::a001_person::Person;
use leptos::prelude::*;

/// Outcome of the people query, consumed synchronously by the render logic.
#[derive(Debug, Clone, PartialEq)]
pub enum PeopleQuery {
    Loading,
    Failed(String),
    Ready(Vec<Person>),
}

/// Kick off the one people fetch for this mount and expose its state.
///
/// Starts in `Loading` and settles exactly once; there are no retries and no
/// cancellation beyond the component unmounting.
pub fn use_people_query() -> ReadSignal<PeopleQuery> {
    let (query, set_query) = signal(PeopleQuery::Loading);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_people().await {
            Ok(people) => {
                log::debug!("loaded {} people", people.len());
                set_query.set(PeopleQuery::Ready(people));
            }
            Err(reason) => {
                log::error!("people query failed: {}", reason);
                set_query.set(PeopleQuery::Failed(reason));
            }
        }
    });

    query
}

async fn fetch_people() -> Result<Vec<Person>, String> {
    let response = api_mocks::fetch(PEOPLE_RESOURCE).await?;
    if response.status != 200 {
        return Err(format!("HTTP {}", response.status));
    }
    serde_json::from_str::<Vec<Person>>(&response.body).map_err(|e| format!("{}", e))
}
