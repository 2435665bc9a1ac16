use leptos::prelude::*;
use shared_types::WorkItem;

/// Card grid for gallery pieces. Clicking a card hands the item to the
/// caller, which opens the detail modal.
#[component]
pub fn WorkItemGrid(
    #[prop(into)] items: Signal<Vec<WorkItem>>,
    on_select: impl Fn(WorkItem) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <div class="work-item-grid">
            {move || {
                let items = items.get();

                if items.is_empty() {
                    return view! {
                        <p class="work-item-grid__empty">"沒有符合條件的作品"</p>
                    }
                    .into_any();
                }

                view! {
                    <div class="work-item-grid__cards">
                        {items
                            .into_iter()
                            .map(|item| {
                                let item_for_click = item.clone();
                                let initial = item
                                    .artist
                                    .chars()
                                    .next()
                                    .map(String::from)
                                    .unwrap_or_default();
                                let difficulty_style = format!(
                                    "color: {}; border-color: {}40;",
                                    item.difficulty.color(),
                                    item.difficulty.color()
                                );

                                view! {
                                    <div
                                        class="work-item-card"
                                        on:click=move |_| on_select(item_for_click.clone())
                                    >
                                        <div class="work-item-card__media">
                                            <img src=item.image.clone() alt=item.title.clone()/>
                                            {item
                                                .featured
                                                .then(|| {
                                                    view! {
                                                        <span class="work-item-card__featured">"★ 精選"</span>
                                                    }
                                                })}
                                            <span class="work-item-card__price">
                                                {format!("NT$ {}", item.price)}
                                            </span>
                                        </div>
                                        <div class="work-item-card__body">
                                            <h3>{item.title.clone()}</h3>
                                            <div class="work-item-card__artist">
                                                <span class="work-item-card__artist-initial">
                                                    {initial}
                                                </span>
                                                <span>{item.artist.clone()}</span>
                                            </div>
                                            <div class="work-item-card__tags">
                                                {item
                                                    .tags
                                                    .iter()
                                                    .take(3)
                                                    .map(|tag| {
                                                        view! {
                                                            <span class="work-item-card__tag">
                                                                {tag.clone()}
                                                            </span>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                            <div class="work-item-card__meta">
                                                <span class="work-item-card__duration">
                                                    {format!("⏱ {}", item.duration)}
                                                </span>
                                                <span
                                                    class="work-item-card__difficulty"
                                                    style=difficulty_style
                                                >
                                                    {item.difficulty.label()}
                                                </span>
                                            </div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
