use leptos::prelude::*;
use shared_types::WorkItem;

use crate::catalog;
use crate::components::{SearchFilter, WorkItemDetailModal, WorkItemGrid};

/// The work gallery at `/`: searchable, style-filterable card grid over the
/// fixed gallery catalog, with a detail modal per piece.
#[component]
pub fn GalleryPage() -> impl IntoView {
    let search_query = RwSignal::new(String::new());
    let show_filters = RwSignal::new(false);
    let selected_styles = RwSignal::new(Vec::<String>::new());
    let selected_work = RwSignal::new(Option::<WorkItem>::None);

    let filtered_items = Memo::new(move |_| {
        let query = search_query.get().trim().to_lowercase();
        let styles = selected_styles.get();

        catalog::work_items()
            .into_iter()
            .filter(|item| {
                query.is_empty()
                    || item.title.to_lowercase().contains(&query)
                    || item.artist.to_lowercase().contains(&query)
                    || item.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
            })
            .filter(|item| {
                styles.is_empty() || item.tags.iter().any(|tag| styles.contains(tag))
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="gallery-page">
            <div class="gallery-page__hero">
                <h2>
                    "精品美甲"
                    <span class="gallery-page__hero-accent">"作品集"</span>
                </h2>
                <p>"發現最新流行趨勢，尋找您的專屬美甲師"</p>
            </div>

            <SearchFilter
                search_query=search_query
                show_filters=show_filters
                selected_styles=selected_styles
                style_options=catalog::style_options()
                placeholder="搜尋作品、風格、美甲師..."
            />

            <WorkItemGrid
                items=Signal::from(filtered_items)
                on_select=move |work| selected_work.set(Some(work))
            />

            <WorkItemDetailModal selected_work=selected_work/>
        </div>
    }
}
