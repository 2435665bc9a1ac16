use leptos::prelude::*;
use thaw::*;

/// Search box plus a collapsible style-tag filter panel, shared by the
/// gallery and artist directory pages.
#[component]
pub fn SearchFilter(
    search_query: RwSignal<String>,
    show_filters: RwSignal<bool>,
    selected_styles: RwSignal<Vec<String>>,
    style_options: Vec<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let toggle_style = move |style: String| {
        selected_styles.update(|styles| {
            if let Some(position) = styles.iter().position(|s| *s == style) {
                styles.remove(position);
            } else {
                styles.push(style);
            }
        });
    };

    view! {
        <div class="search-filter">
            <div class="search-filter__bar">
                <div class="search-filter__input-wrapper">
                    <span class="search-filter__icon">"🔍"</span>
                    <Input
                        class="search-filter__input"
                        placeholder=placeholder
                        value=search_query
                    />
                </div>
                <button
                    class="search-filter__toggle"
                    on:click=move |_| show_filters.set(!show_filters.get())
                >
                    "篩選器"
                </button>
            </div>

            {move || {
                if !show_filters.get() {
                    return view! {}.into_any();
                }

                view! {
                    <div class="search-filter__panel">
                        <div class="search-filter__panel-header">
                            <h3>"篩選條件"</h3>
                            <button
                                class="search-filter__clear"
                                on:click=move |_| selected_styles.set(Vec::new())
                            >
                                "清除全部"
                            </button>
                        </div>
                        <label class="search-filter__label">"美甲風格"</label>
                        <div class="search-filter__chips">
                            {style_options
                                .clone()
                                .into_iter()
                                .map(|style| {
                                    let style_for_click = style.clone();
                                    let style_for_class = style.clone();

                                    view! {
                                        <button
                                            class=move || {
                                                if selected_styles.get().contains(&style_for_class) {
                                                    "search-filter__chip search-filter__chip--selected"
                                                } else {
                                                    "search-filter__chip"
                                                }
                                            }
                                            on:click=move |_| toggle_style(style_for_click.clone())
                                        >
                                            {style}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
