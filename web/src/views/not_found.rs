use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// 404 page with navigation back into the main views.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found-page">
            <div class="not-found-page__code">
                "404"
                <span class="not-found-page__code-icon">"💅"</span>
            </div>

            <div class="not-found-page__card">
                <h1>"找不到頁面"</h1>
                <p>"您要找的頁面不存在，或可能已經移動位置。"</p>

                <div class="not-found-page__actions">
                    <button
                        class="not-found-page__btn not-found-page__btn--primary"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| {
                                navigate("/", Default::default());
                            }
                        }
                    >
                        "回到作品展示"
                    </button>
                    <button
                        class="not-found-page__btn not-found-page__btn--primary"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| {
                                navigate("/artists", Default::default());
                            }
                        }
                    >
                        "探索美甲師"
                    </button>
                    <button
                        class="not-found-page__btn not-found-page__btn--outline"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| {
                                navigate("/booking", Default::default());
                            }
                        }
                    >
                        "預約服務"
                    </button>
                </div>
            </div>

            <div class="not-found-page__help">
                <p>"還是找不到您要的內容嗎？"</p>
                <button
                    class="not-found-page__back"
                    on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            if let Ok(history) = window.history() {
                                let _ = history.back();
                            }
                        }
                    }
                >
                    "⬅ 回上一頁"
                </button>
            </div>
        </div>
    }
}
