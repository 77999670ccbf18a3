pub mod view_model;

use self::view_model::{MovieField, PersonForm};
use crate::shared::icons::icon;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn CreatePerson() -> impl IntoView {
    let form = RwSignal::new(PersonForm::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (success, set_success) = signal::<Option<String>>(None);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let current = form.get();
        match current.validate() {
            Err(message) => {
                set_error.set(Some(message));
                set_success.set(None);
            }
            Ok(()) => {
                let person = current.to_person();
                // Client-side only; the record is logged, not persisted.
                log::info!("created person {} ({})", person.name, person.id);
                set_success.set(Some("Person created successfully!".to_string()));
                set_error.set(None);
                form.set(PersonForm::default());
            }
        }
    };

    let add_movie_field = move |_| form.update(|f| f.movies.push(MovieField::default()));

    view! {
        <div class="page page--detail">
            <form class="create-person-form" on:submit=handle_submit novalidate=true>
                <h2>"Create New Person"</h2>

                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                {move || success.get().map(|message| view! { <p class="form-success">{message}</p> })}

                <label for="name">"Name:"</label>
                <input
                    id="name"
                    type="text"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.name = value);
                    }
                />

                <label for="show">"Show:"</label>
                <input
                    id="show"
                    type="text"
                    prop:value=move || form.with(|f| f.show.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.show = value);
                    }
                />

                <label for="actor">"Actor:"</label>
                <input
                    id="actor"
                    type="text"
                    prop:value=move || form.with(|f| f.actor.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.actor = value);
                    }
                />

                <label for="dob">"Date of Birth:"</label>
                <input
                    id="dob"
                    type="date"
                    prop:value=move || form.with(|f| f.dob.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.dob = value);
                    }
                />

                <label>"Movies:"</label>
                {move || {
                    let count = form.with(|f| f.movies.len());
                    (0..count)
                        .map(|index| {
                            view! {
                                <div class="movie-fields">
                                    <input
                                        type="text"
                                        placeholder="Movie Title"
                                        prop:value=move || form.with(|f| {
                                            f.movies.get(index).map(|m| m.title.clone()).unwrap_or_default()
                                        })
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| {
                                                if let Some(movie) = f.movies.get_mut(index) {
                                                    movie.title = value;
                                                }
                                            });
                                        }
                                    />
                                    <input
                                        type="date"
                                        placeholder="Release Date"
                                        prop:value=move || form.with(|f| {
                                            f.movies.get(index).map(|m| m.released.clone()).unwrap_or_default()
                                        })
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            form.update(|f| {
                                                if let Some(movie) = f.movies.get_mut(index) {
                                                    movie.released = value;
                                                }
                                            });
                                        }
                                    />
                                    <button
                                        type="button"
                                        class="remove-movie-btn"
                                        title="Remove movie"
                                        on:click=move |_| {
                                            form.update(|f| {
                                                if index < f.movies.len() {
                                                    f.movies.remove(index);
                                                }
                                            });
                                        }
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <button type="button" class="add-movie-btn" on:click=add_movie_field>
                    {icon("plus")}
                    "Add Movie"
                </button>

                <div class="form-actions">
                    <button type="submit" class="submit-btn">"Create Person"</button>
                </div>
            </form>
        </div>
    }
}
