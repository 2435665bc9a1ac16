use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared_types::WorkItem;

/// Full detail view for a gallery piece, with a booking shortcut.
#[component]
pub fn WorkItemDetailModal(selected_work: RwSignal<Option<WorkItem>>) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        {move || {
            let Some(work) = selected_work.get() else {
                return view! {}.into_any();
            };

            let navigate = navigate.clone();
            let initial = work.artist.chars().next().map(String::from).unwrap_or_default();

            view! {
                <div
                    class="work-detail-modal__overlay"
                    on:click=move |_| selected_work.set(None)
                >
                    <div
                        class="work-detail-modal"
                        on:click=move |ev| ev.stop_propagation()
                    >
                        <div class="work-detail-modal__media">
                            <img src=work.image.clone() alt=work.title.clone()/>
                            <div class="work-detail-modal__media-actions">
                                <button class="work-detail-modal__like">
                                    {format!("♥ 收藏 ({})", work.likes)}
                                </button>
                                <button class="work-detail-modal__share">"分享"</button>
                            </div>
                        </div>

                        <div class="work-detail-modal__info">
                            <h2>{work.title.clone()}</h2>

                            <div class="work-detail-modal__artist">
                                <span class="work-detail-modal__artist-initial">{initial}</span>
                                <div class="work-detail-modal__artist-body">
                                    <h4>{work.artist.clone()}</h4>
                                    <div class="work-detail-modal__artist-actions">
                                        <button
                                            class="work-detail-modal__book"
                                            on:click=move |_| {
                                                navigate("/booking", Default::default());
                                            }
                                        >
                                            "立即預約"
                                        </button>
                                        <button class="work-detail-modal__contact">"聯絡"</button>
                                    </div>
                                </div>
                            </div>

                            <div class="work-detail-modal__stats">
                                <div class="work-detail-modal__stat">
                                    <p>"製作時間"</p>
                                    <strong>{work.duration.clone()}</strong>
                                </div>
                                <div class="work-detail-modal__stat">
                                    <p>"參考價格"</p>
                                    <strong>{format!("NT$ {}", work.price)}</strong>
                                </div>
                            </div>

                            <div class="work-detail-modal__tags">
                                <h5>"風格標籤"</h5>
                                <div>
                                    {work
                                        .tags
                                        .iter()
                                        .map(|tag| {
                                            view! {
                                                <span class="work-detail-modal__tag">{tag.clone()}</span>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>

                            <button
                                class="work-detail-modal__close"
                                on:click=move |_| selected_work.set(None)
                            >
                                "關閉"
                            </button>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}
