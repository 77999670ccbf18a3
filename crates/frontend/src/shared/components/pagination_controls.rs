use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls
///
/// Boundary navigation buttons, the visible-range summary, and the
/// page-size selector. Pages are 1-based; `total_pages` of 0 means nothing
/// matches and every navigation button stays disabled.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// "Showing X-Y of Z" text
    #[prop(into)]
    summary: Signal<String>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options (optional, defaults to [10, 15, 20])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 15, 20]);

    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
            >
                "First"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_first
            >
                "Previous"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_last
            >
                "Next"
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total);
                    }
                }
                disabled=at_last
            >
                "Last"
            </button>

            <span class="pagination-info">{move || summary.get()}</span>

            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(10);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
